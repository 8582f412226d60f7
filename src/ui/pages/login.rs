//! Login page component
//!
//! A standalone page for the back-office login. The session context sends
//! the user to the dashboard once the login succeeds.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::core::auth::DASHBOARD_PATH;
use crate::ui::auth::{LoginForm, use_auth_context};
use crate::ui::icon::{Icon, icons};

/// Login page component
#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth_context();
    let navigate = use_navigate();

    // Redirect if already authenticated
    Effect::new(move |_| {
        if auth.state.with(|state| state.is_authenticated() && !state.loading) {
            navigate(DASHBOARD_PATH, Default::default());
        }
    });

    view! {
        <div class="min-h-screen w-full flex items-center justify-center bg-gradient-to-br from-coffee-50 to-coffee-100 p-4">
            <div class="w-full max-w-md">
                <div class="text-center mb-8">
                    <div class="inline-flex p-4 bg-white rounded-full shadow-md mb-4">
                        <Icon name=icons::COFFEE class="h-12 w-12" />
                    </div>
                    <h1 class="text-3xl font-bold text-coffee-800 mb-2">"Coffee Shop Manager"</h1>
                    <p class="text-coffee-600">"Sign in to access your dashboard"</p>
                </div>

                <div class="bg-white/80 rounded-xl shadow-lg p-6 border border-coffee-100">
                    <LoginForm />
                </div>

                <p class="text-center mt-6 text-coffee-500 text-sm">
                    "© Coffee Shop Manager. All rights reserved."
                </p>
            </div>
        </div>
    }
}
