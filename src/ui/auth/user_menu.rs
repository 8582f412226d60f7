//! User menu component
//!
//! Header widget showing who is signed in, their role and a sign-out
//! action. Shows a sign-in link when nobody is.

use leptos::prelude::*;
use leptos_router::components::A;

use super::context::use_auth_context;
use crate::core::auth::{SessionPhase, SessionState};
use crate::ui::icon::{Icon, icons};

/// User menu component for the header
#[component]
pub fn UserMenu() -> impl IntoView {
    let auth = use_auth_context();

    // Dropdown open state
    let menu_open = RwSignal::new(false);

    view! {
        <div class="relative">
            {move || {
                let state = auth.state.get();
                match state.phase() {
                    SessionPhase::Unresolved => {
                        // Loading skeleton
                        view! {
                            <div class="w-8 h-8 rounded-full bg-coffee-100 animate-pulse"></div>
                        }.into_any()
                    }
                    SessionPhase::Anonymous => {
                        view! {
                            <A
                                href="/login"
                                attr:class="px-3 py-1.5 text-sm font-medium text-coffee-700 hover:text-coffee-900 transition-colors"
                            >
                                "Sign In"
                            </A>
                        }.into_any()
                    }
                    SessionPhase::Authenticated => {
                        let SessionState { identity, .. } = state;
                        let (username, role) = identity
                            .map(|user| (user.username, user.role.to_string()))
                            .unwrap_or_default();
                        let auth = auth.clone();

                        view! {
                            <div class="relative">
                                <button
                                    class="flex items-center gap-2 p-1 rounded-lg hover:bg-coffee-50 transition-colors"
                                    on:click=move |_| menu_open.update(|v| *v = !*v)
                                >
                                    <Icon name=icons::USER class="h-6 w-6" />
                                    <span class="hidden sm:block text-sm font-medium text-coffee-800 max-w-[120px] truncate">
                                        {username.clone()}
                                    </span>
                                    <span class="px-2 py-0.5 text-xs rounded-full bg-coffee-100 text-coffee-700 capitalize">
                                        {role}
                                    </span>
                                </button>

                                // Dropdown menu
                                <Show when=move || menu_open.get()>
                                    <div class="absolute right-0 mt-2 w-48 bg-white rounded-lg shadow-lg border border-coffee-100 py-1 z-50">
                                        <button
                                            class="w-full px-4 py-2 text-sm text-left text-red-600
                                                   hover:bg-red-50 transition-colors flex items-center gap-2"
                                            on:click={
                                                let auth = auth.clone();
                                                move |_| {
                                                    menu_open.set(false);
                                                    auth.logout();
                                                }
                                            }
                                        >
                                            <Icon name=icons::LOGOUT class="h-4 w-4" />
                                            "Sign Out"
                                        </button>
                                    </div>
                                </Show>
                            </div>
                        }.into_any()
                    }
                }
            }}
        </div>
    }
}
