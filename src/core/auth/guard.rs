//! Route guard decisions
//!
//! Pure function of the session state; the `ProtectedRoute` component turns
//! the decision into a view.

use super::session::SessionState;

/// Public entry point for anonymous users
pub const LOGIN_PATH: &str = "/login";
/// Landing page after a successful login
pub const DASHBOARD_PATH: &str = "/dashboard";

/// What a protected route should do for the current session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    /// Session not resolved yet, show a neutral placeholder
    Pending,
    /// Anonymous, send the user elsewhere
    Redirect(&'static str),
    /// Authenticated, render the protected subtree
    Render,
}

pub fn evaluate(state: &SessionState) -> RouteDecision {
    if state.loading {
        RouteDecision::Pending
    } else if state.identity.is_some() {
        RouteDecision::Render
    } else {
        RouteDecision::Redirect(LOGIN_PATH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::auth::credentials::{Identity, Role};

    fn identity() -> Identity {
        Identity {
            id: "1".to_string(),
            username: "admin".to_string(),
            role: Role::Admin,
        }
    }

    #[test]
    fn test_unresolved_never_redirects() {
        assert_eq!(evaluate(&SessionState::default()), RouteDecision::Pending);
    }

    #[test]
    fn test_loading_with_identity_is_still_pending() {
        let state = SessionState {
            identity: Some(identity()),
            loading: true,
        };
        assert_eq!(evaluate(&state), RouteDecision::Pending);
    }

    #[test]
    fn test_anonymous_redirects_to_login() {
        assert_eq!(
            evaluate(&SessionState::anonymous()),
            RouteDecision::Redirect("/login")
        );
    }

    #[test]
    fn test_authenticated_renders() {
        assert_eq!(
            evaluate(&SessionState::authenticated(identity())),
            RouteDecision::Render
        );
    }
}
