//! Auth context for the component tree
//!
//! Wraps the core [`SessionContext`] and mirrors its state into a signal so
//! components re-render on login, logout and startup resolution. The
//! context is created once by the app root and passed down with
//! `provide_context`; nothing reaches for a global.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::core::Navigator;
use crate::core::auth::{
    AuthError, AuthSettings, BrowserStorage, Identity, MockAuthService, SessionContext,
    SessionState,
};
use crate::ui::notifications::NotificationManager;

/// Session context as wired in the browser
pub type AppSession =
    SessionContext<MockAuthService<BrowserStorage>, NotificationManager, RouterNavigator>;

/// Navigation requests from the session, picked up by [`NavigationBridge`]
#[derive(Debug, Clone, Copy)]
pub struct RouterNavigator {
    target: RwSignal<Option<String>>,
}

impl RouterNavigator {
    pub fn new() -> Self {
        Self {
            target: RwSignal::new(None),
        }
    }

    pub fn target(&self) -> RwSignal<Option<String>> {
        self.target
    }
}

impl Default for RouterNavigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator for RouterNavigator {
    fn navigate(&self, path: &str) {
        self.target.set(Some(path.to_string()));
    }
}

/// Auth context providing session state and actions
#[derive(Clone)]
pub struct AuthContext {
    session: AppSession,
    /// Current session state, kept in sync with the session
    pub state: RwSignal<SessionState>,
    /// Message of the last failed login, for inline display
    pub error: RwSignal<Option<String>>,
    /// A login submitted through this context is awaiting its result
    pub submitting: RwSignal<bool>,
}

impl AuthContext {
    /// Check if user is authenticated
    pub fn is_authenticated(&self) -> bool {
        self.state.with(SessionState::is_authenticated)
    }

    /// Get current user (if authenticated)
    pub fn user(&self) -> Option<Identity> {
        self.state.with(|state| state.identity.clone())
    }

    pub fn loading(&self) -> bool {
        self.state.with(|state| state.loading)
    }

    /// True only while a submitted login is pending, unlike [`Self::loading`]
    /// which also covers the startup check
    pub fn submitting(&self) -> bool {
        self.submitting.get()
    }

    /// Clear error message
    pub fn clear_error(&self) {
        self.error.set(None);
    }

    /// Log in; on failure the message also lands in [`Self::error`]
    pub async fn login(&self, username: &str, password: &str) -> Result<Identity, AuthError> {
        self.error.set(None);

        let owns_flag = !self.submitting.get_untracked();
        if owns_flag {
            self.submitting.set(true);
        }
        let result = self.session.login(username, password).await;
        if owns_flag {
            self.submitting.set(false);
        }

        match &result {
            // The user logged out meanwhile; nothing to report
            Ok(_) | Err(AuthError::LoginCancelled) => {}
            Err(e) => self.error.set(Some(e.to_string())),
        }

        result
    }

    pub fn logout(&self) {
        self.error.set(None);
        self.session.logout();
    }
}

/// Provide auth context to the component tree
pub fn provide_auth_context(
    notifications: NotificationManager,
    navigator: RouterNavigator,
    settings: AuthSettings,
) -> AuthContext {
    let session = SessionContext::new(
        MockAuthService::seeded(BrowserStorage, settings),
        notifications,
        navigator,
    );

    // Server and client both render the unresolved state first, so hydration matches
    let state = RwSignal::new(session.state());
    session.subscribe(move |next| state.set(next.clone()));

    let ctx = AuthContext {
        session,
        state,
        error: RwSignal::new(None),
        submitting: RwSignal::new(false),
    };

    // Resolve the persisted session once hydrated (client-side only)
    #[cfg(feature = "hydrate")]
    {
        let session = ctx.session.clone();
        Effect::new(move |_| {
            let session = session.clone();
            leptos::task::spawn_local(async move {
                session.start().await;
            });
        });
    }

    provide_context(ctx.clone());
    ctx
}

/// Meta tag through which the server hands the login delay to the client
pub const LOGIN_DELAY_META: &str = "login-delay-ms";

/// Auth settings for this render.
///
/// The server takes them from the context provided by `main`; the client
/// reads back the meta tag the server rendered.
pub fn resolve_auth_settings() -> AuthSettings {
    #[cfg(feature = "hydrate")]
    {
        client_auth_settings()
    }

    #[cfg(not(feature = "hydrate"))]
    {
        use_context::<AuthSettings>().unwrap_or_default()
    }
}

#[cfg(feature = "hydrate")]
fn client_auth_settings() -> AuthSettings {
    let selector = format!("meta[name=\"{}\"]", LOGIN_DELAY_META);
    let delay_ms = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.query_selector(&selector).ok().flatten())
        .and_then(|meta| meta.get_attribute("content"))
        .and_then(|content| content.parse::<u64>().ok());

    match delay_ms {
        Some(ms) => AuthSettings {
            login_delay: std::time::Duration::from_millis(ms),
        },
        None => AuthSettings::default(),
    }
}

/// Get auth context from the component tree
pub fn use_auth_context() -> AuthContext {
    expect_context::<AuthContext>()
}

/// Performs the navigations the session asks for.
///
/// Must be rendered inside the `<Router>`.
#[component]
pub fn NavigationBridge(navigator: RouterNavigator) -> impl IntoView {
    let navigate = use_navigate();
    let target = navigator.target();

    Effect::new(move |_| {
        if let Some(path) = target.get() {
            leptos::logging::log!("Session navigation to {}", path);
            navigate(&path, Default::default());
            target.set(None);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::reactive::owner::Owner;

    #[cfg(not(feature = "hydrate"))]
    #[test]
    fn test_server_settings_default_without_context() {
        assert_eq!(resolve_auth_settings(), AuthSettings::default());
    }

    #[test]
    fn test_router_navigator_records_target() {
        let owner = Owner::new();
        owner.set();

        let navigator = RouterNavigator::new();
        assert!(navigator.target().get_untracked().is_none());

        navigator.navigate("/login");

        assert_eq!(navigator.target().get_untracked(), Some("/login".to_string()));
    }

    #[cfg(all(feature = "ssr", not(feature = "hydrate")))]
    #[tokio::test]
    async fn test_submitting_tracks_only_submitted_logins() {
        let owner = Owner::new();
        owner.set();

        let ctx = provide_auth_context(
            NotificationManager::new(),
            RouterNavigator::new(),
            AuthSettings {
                login_delay: std::time::Duration::from_millis(50),
            },
        );

        // Startup check still pending: loading, but nothing submitted
        assert!(ctx.state.get_untracked().loading);
        assert!(!ctx.submitting.get_untracked());

        ctx.session.start().await;

        let (result, mid_flight) = tokio::join!(ctx.login("admin", "admin123"), async {
            tokio::time::sleep(std::time::Duration::from_millis(10)).await;
            ctx.submitting.get_untracked()
        });

        assert!(result.is_ok());
        assert!(mid_flight);
        assert!(!ctx.submitting.get_untracked());
        assert!(ctx.error.get_untracked().is_none());
    }
}
