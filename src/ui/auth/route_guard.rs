//! Protected route component
//!
//! Parent route for everything under `/dashboard`.

use leptos::prelude::*;
use leptos_router::components::{Outlet, Redirect};

use super::context::use_auth_context;
use crate::core::auth::{RouteDecision, evaluate};

/// Renders its child routes only for an authenticated session.
///
/// While the session is still resolving nothing but a placeholder is shown,
/// so a reload never bounces a signed-in user to the login page.
#[component]
pub fn ProtectedRoute() -> impl IntoView {
    let auth = use_auth_context();

    view! {
        {move || match auth.state.with(evaluate) {
            RouteDecision::Pending => view! {
                <div class="min-h-screen flex items-center justify-center bg-coffee-50">
                    <div class="w-8 h-8 border-2 border-coffee-600 border-t-transparent rounded-full animate-spin"></div>
                </div>
            }.into_any(),
            RouteDecision::Redirect(path) => view! { <Redirect path=path /> }.into_any(),
            RouteDecision::Render => view! { <Outlet /> }.into_any(),
        }}
    }
}
