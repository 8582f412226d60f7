//! Not found page component
//!
//! A 404 error page displayed when a route is not found.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::ui::icon::{Icon, icons};

/// Not found (404) page component
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-coffee-50 flex flex-col items-center justify-center p-4">
            <div class="text-center">
                <div class="w-24 h-24 mx-auto mb-6 bg-white rounded-full flex items-center justify-center">
                    <Icon name=icons::COFFEE class="w-12 h-12" />
                </div>

                // Error code
                <h1 class="text-6xl font-bold text-coffee-800 mb-4">"404"</h1>

                <h2 class="text-2xl font-semibold text-coffee-800 mb-2">
                    "Page Not Found"
                </h2>

                <p class="text-coffee-600 mb-8 max-w-md mx-auto">
                    "The page you're looking for doesn't exist or has been moved."
                </p>

                // Actions
                <div class="flex flex-col sm:flex-row items-center justify-center gap-4">
                    <A
                        href="/"
                        attr:class="px-6 py-3 bg-coffee-600 hover:bg-coffee-700 text-white font-medium rounded-lg transition-colors"
                    >
                        "Go Home"
                    </A>
                    <A
                        href="/dashboard"
                        attr:class="px-6 py-3 border border-coffee-200 text-coffee-800 hover:bg-white font-medium rounded-lg transition-colors"
                    >
                        "Dashboard"
                    </A>
                </div>
            </div>
        </div>
    }
}
