//! Landing page component
//!
//! Public entry page with a single call to action that leads either to the
//! dashboard or to the login page, depending on the session.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::core::auth::{DASHBOARD_PATH, LOGIN_PATH};
use crate::ui::auth::{UserMenu, use_auth_context};
use crate::ui::icon::{Icon, icons};

/// Landing page component
#[component]
pub fn LandingPage() -> impl IntoView {
    let auth = use_auth_context();

    let cta_href = move || {
        if auth.is_authenticated() {
            DASHBOARD_PATH.to_string()
        } else {
            LOGIN_PATH.to_string()
        }
    };

    view! {
        <Title text="Coffee Shop Manager" />

        <div class="min-h-screen bg-gradient-to-br from-coffee-50 to-coffee-100 flex flex-col">
            <header class="border-b border-coffee-100">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 flex items-center justify-between h-16">
                    <div class="flex items-center gap-3">
                        <Icon name=icons::COFFEE class="w-8 h-8" />
                        <span class="text-xl font-bold text-coffee-800">"Coffee Shop Manager"</span>
                    </div>
                    <UserMenu />
                </div>
            </header>

            <main class="flex-1 flex items-center justify-center px-4">
                <div class="text-center max-w-2xl">
                    <h1 class="text-5xl font-bold text-coffee-800 mb-6 tracking-tight">
                        "Run your coffee shop from one place"
                    </h1>
                    <p class="text-xl text-coffee-600 mb-10">
                        "Products, customers, orders, staff and reports in a single back-office."
                    </p>
                    <A href=cta_href attr:class="px-6 py-3 bg-coffee-600 hover:bg-coffee-700 text-white font-medium rounded-lg transition-colors">
                        "Get started"
                    </A>
                </div>
            </main>
        </div>
    }
}
