//! Login form component
//!
//! Username/password form for the back-office login. Empty fields are
//! caught here and never reach the auth service.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::context::use_auth_context;
use crate::core::auth::{AuthError, validate_login_fields};
use crate::ui::icon::{Icon, icons};

/// Login form component
#[component]
pub fn LoginForm(
    /// Callback when login is successful
    #[prop(optional, into)]
    on_success: Option<Callback<()>>,
) -> impl IntoView {
    let auth = use_auth_context();

    // Form state
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let show_password = RwSignal::new(false);

    // Form validation
    let username_error = RwSignal::new(None::<String>);
    let password_error = RwSignal::new(None::<String>);

    let validate = move || {
        username_error.set(None);
        password_error.set(None);

        match validate_login_fields(&username.get(), &password.get()) {
            Ok(()) => true,
            Err(e @ AuthError::MissingRequiredField("Username")) => {
                username_error.set(Some(e.to_string()));
                false
            }
            Err(e) => {
                password_error.set(Some(e.to_string()));
                false
            }
        }
    };

    // Handle form submission
    let on_submit = {
        let auth = auth.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();

            // Clear previous errors
            auth.clear_error();

            if !validate() {
                return;
            }

            let username_val = username.get();
            let password_val = password.get();
            let auth = auth.clone();

            spawn_local(async move {
                match auth.login(&username_val, &password_val).await {
                    Ok(_) => {
                        password.set(String::new());
                        if let Some(callback) = on_success {
                            callback.run(());
                        }
                    }
                    Err(e) => {
                        // Message is already in the auth context for inline display
                        leptos::logging::log!("Login rejected: {}", e);
                    }
                }
            });
        }
    };

    let error_auth = auth.clone();
    let loading_auth = auth.clone();
    let label_auth = auth;

    view! {
        <form on:submit=on_submit class="space-y-6">
            // Header
            <div class="text-center">
                <h2 class="text-xl font-semibold text-coffee-800">"Admin Login"</h2>
                <p class="mt-2 text-sm text-coffee-500">"Enter your credentials to continue"</p>
            </div>

            // Global error message
            {move || {
                error_auth.error.get().map(|error| {
                    view! {
                        <div class="p-3 bg-red-100 border border-red-300 rounded-lg" role="alert">
                            <p class="text-sm text-red-700">{error}</p>
                        </div>
                    }
                })
            }}

            // Username field
            <div>
                <label for="username" class="block text-sm font-medium text-coffee-700 mb-1">
                    "Username"
                </label>
                <div class="relative">
                    <div class="absolute inset-y-0 left-0 flex items-center pl-3 pointer-events-none">
                        <Icon name=icons::USER class="h-4 w-4" />
                    </div>
                    <input
                        type="text"
                        id="username"
                        name="username"
                        autocomplete="username"
                        placeholder="Enter your username"
                        class="w-full pl-10 pr-3 py-2 bg-white/50 border border-coffee-200 rounded-lg
                               focus:outline-none focus:ring-2 focus:ring-coffee-400 transition-colors"
                        class:border-red-500=move || username_error.get().is_some()
                        prop:value=move || username.get()
                        on:input=move |ev| {
                            username.set(event_target_value(&ev));
                            username_error.set(None);
                        }
                    />
                </div>
                {move || {
                    username_error.get().map(|error| {
                        view! { <p class="mt-1 text-sm text-red-500">{error}</p> }
                    })
                }}
            </div>

            // Password field
            <div>
                <label for="password" class="block text-sm font-medium text-coffee-700 mb-1">
                    "Password"
                </label>
                <div class="relative">
                    <div class="absolute inset-y-0 left-0 flex items-center pl-3 pointer-events-none">
                        <Icon name=icons::LOCK class="h-4 w-4" />
                    </div>
                    <input
                        type=move || if show_password.get() { "text" } else { "password" }
                        id="password"
                        name="password"
                        autocomplete="current-password"
                        placeholder="Enter your password"
                        class="w-full pl-10 pr-10 py-2 bg-white/50 border border-coffee-200 rounded-lg
                               focus:outline-none focus:ring-2 focus:ring-coffee-400 transition-colors"
                        class:border-red-500=move || password_error.get().is_some()
                        prop:value=move || password.get()
                        on:input=move |ev| {
                            password.set(event_target_value(&ev));
                            password_error.set(None);
                        }
                    />
                    <button
                        type="button"
                        class="absolute inset-y-0 right-0 pr-3 flex items-center"
                        on:click=move |_| show_password.update(|v| *v = !*v)
                    >
                        {move || {
                            if show_password.get() {
                                view! { <Icon name=icons::EYE_CLOSED class="h-5 w-5" /> }.into_any()
                            } else {
                                view! { <Icon name=icons::EYE class="h-5 w-5" /> }.into_any()
                            }
                        }}
                    </button>
                </div>
                {move || {
                    password_error.get().map(|error| {
                        view! { <p class="mt-1 text-sm text-red-500">{error}</p> }
                    })
                }}
            </div>

            // Submit button
            <button
                type="submit"
                class="w-full py-2.5 px-4 bg-coffee-600 hover:bg-coffee-700 text-white font-medium rounded-lg
                       focus:outline-none focus:ring-2 focus:ring-offset-2 focus:ring-coffee-500
                       disabled:opacity-50 disabled:cursor-not-allowed transition-colors"
                disabled=move || loading_auth.loading()
            >
                {move || {
                    if label_auth.submitting() {
                        view! {
                            <span class="flex items-center justify-center">
                                <Icon name=icons::LOADER class="animate-spin -ml-1 mr-2 h-4 w-4" />
                                "Signing in..."
                            </span>
                        }.into_any()
                    } else {
                        view! { <span class="block">"Sign in"</span> }.into_any()
                    }
                }}
            </button>
        </form>
    }
}
