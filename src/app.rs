use leptos::prelude::*;
use leptos_meta::{Meta, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{ParentRoute, Route, Router, Routes},
};

use crate::ui::auth::{
    LOGIN_DELAY_META, NavigationBridge, ProtectedRoute, RouterNavigator, provide_auth_context,
    resolve_auth_settings,
};
use crate::ui::pages::{
    DashboardPage, DashboardSectionPage, LandingPage, LoginPage, NotFoundPage,
};
use crate::ui::{NotificationManager, NotificationsContainer};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let settings = resolve_auth_settings();
    let notifications = NotificationManager::new();
    let navigator = RouterNavigator::new();
    provide_context(notifications);

    // Session context for the whole tree; resolves the stored session after hydration
    provide_auth_context(notifications, navigator, settings);

    view! {
        <Stylesheet id="leptos" href="/pkg/brewdesk.css"/>
        <Title text="Coffee Shop Manager"/>
        // Hands the server's login delay to the client
        <Meta name=LOGIN_DELAY_META content=settings.login_delay.as_millis().to_string()/>

        <Router>
            <NavigationBridge navigator=navigator />
            <NotificationsContainer notifications=notifications.notifications() />

            <Routes fallback=|| view! { <NotFoundPage/> }>
                // Public routes
                <Route path=StaticSegment("") view=LandingPage/>
                <Route path=StaticSegment("login") view=LoginPage/>

                // Protected routes
                <ParentRoute path=StaticSegment("dashboard") view=ProtectedRoute>
                    <Route path=StaticSegment("") view=DashboardPage/>
                    <Route path=ParamSegment("section") view=DashboardSectionPage/>
                </ParentRoute>
            </Routes>
        </Router>
    }
}
