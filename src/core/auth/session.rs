//! Session context
//!
//! Holds who is signed in and whether that is still being worked out, and
//! drives the login/logout state machine:
//!
//! ```text
//! Unresolved --start--> Authenticated | Anonymous
//! Authenticated | Anonymous --login ok--> Authenticated
//! Authenticated | Anonymous --login err--> Anonymous
//! Authenticated | Anonymous --logout--> Anonymous
//! ```
//!
//! The context is constructed explicitly and handed to whoever needs it;
//! subscribers hear about every state change.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError, RwLock};

use super::credentials::Identity;
use super::guard::{DASHBOARD_PATH, LOGIN_PATH};
use super::service::{AuthError, Authenticator, validate_login_fields};
use crate::core::notification::{Navigator, NotificationType, Notifier};

/// Coarse phase of the session state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// Startup check has not finished
    Unresolved,
    Authenticated,
    Anonymous,
}

/// Snapshot of the session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    pub identity: Option<Identity>,
    pub loading: bool,
}

impl SessionState {
    pub fn anonymous() -> Self {
        Self {
            identity: None,
            loading: false,
        }
    }

    pub fn authenticated(identity: Identity) -> Self {
        Self {
            identity: Some(identity),
            loading: false,
        }
    }

    pub fn phase(&self) -> SessionPhase {
        match (&self.identity, self.loading) {
            (None, true) => SessionPhase::Unresolved,
            (Some(_), _) => SessionPhase::Authenticated,
            (None, false) => SessionPhase::Anonymous,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }
}

impl Default for SessionState {
    /// Process start: nothing known yet
    fn default() -> Self {
        Self {
            identity: None,
            loading: true,
        }
    }
}

type Listener = Box<dyn Fn(&SessionState) + Send + Sync>;

/// Bookkeeping for the single login allowed in flight.
///
/// `generation` moves on every logout, so a login that started before it
/// can tell it no longer owns the session.
#[derive(Debug, Default)]
struct LoginGate {
    generation: u64,
    in_flight: bool,
}

struct Inner<A, N, R> {
    auth: A,
    notifier: N,
    navigator: R,
    state: RwLock<SessionState>,
    listeners: RwLock<Vec<Listener>>,
    gate: Mutex<LoginGate>,
}

/// Process-wide holder of the current session.
///
/// Cheap to clone; clones share the same state.
pub struct SessionContext<A, N, R> {
    inner: Arc<Inner<A, N, R>>,
}

impl<A, N, R> Clone for SessionContext<A, N, R> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<A: Authenticator, N: Notifier, R: Navigator> SessionContext<A, N, R> {
    pub fn new(auth: A, notifier: N, navigator: R) -> Self {
        Self {
            inner: Arc::new(Inner {
                auth,
                notifier,
                navigator,
                state: RwLock::new(SessionState::default()),
                listeners: RwLock::new(Vec::new()),
                gate: Mutex::new(LoginGate::default()),
            }),
        }
    }

    #[cfg(test)]
    pub(crate) fn authenticator(&self) -> &A {
        &self.inner.auth
    }

    pub fn state(&self) -> SessionState {
        self.inner
            .state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn phase(&self) -> SessionPhase {
        self.state().phase()
    }

    pub fn identity(&self) -> Option<Identity> {
        self.state().identity
    }

    pub fn is_authenticated(&self) -> bool {
        self.state().is_authenticated()
    }

    pub fn is_loading(&self) -> bool {
        self.state().loading
    }

    /// Register a listener for state changes.
    ///
    /// Listeners run synchronously after each change and must not subscribe
    /// further listeners themselves.
    pub fn subscribe(&self, listener: impl Fn(&SessionState) + Send + Sync + 'static) {
        self.inner
            .listeners
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Box::new(listener));
    }

    fn gate(&self) -> MutexGuard<'_, LoginGate> {
        self.inner.gate.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn set_state(&self, next: SessionState) {
        tracing::debug!(phase = ?next.phase(), loading = next.loading, "Session state changed");
        *self
            .inner
            .state
            .write()
            .unwrap_or_else(PoisonError::into_inner) = next.clone();
        self.emit(&next);
    }

    fn emit(&self, state: &SessionState) {
        let listeners = self
            .inner
            .listeners
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        for listener in listeners.iter() {
            listener(state);
        }
    }

    /// Resolve the startup state from persisted data.
    ///
    /// Only acts while unresolved; later calls are no-ops.
    pub async fn start(&self) {
        if self.phase() != SessionPhase::Unresolved {
            return;
        }

        let next = match self.inner.auth.current_identity() {
            Some(identity) => {
                tracing::info!("Restored session for {}", identity.username);
                SessionState::authenticated(identity)
            }
            None => SessionState::anonymous(),
        };

        self.set_state(next);
    }

    /// Log in and make the result the current session.
    ///
    /// A call made while another login (or the startup check) is still
    /// pending is rejected with [`AuthError::LoginInProgress`]. A logout that
    /// lands while the login is pending wins: the login's session is wiped
    /// and it fails with [`AuthError::LoginCancelled`].
    pub async fn login(&self, username: &str, secret: &str) -> Result<Identity, AuthError> {
        validate_login_fields(username, secret)?;

        let (pending, generation) = {
            let mut state = self
                .inner
                .state
                .write()
                .unwrap_or_else(PoisonError::into_inner);
            let mut gate = self.gate();
            if state.loading || gate.in_flight {
                return Err(AuthError::LoginInProgress);
            }
            gate.in_flight = true;
            state.loading = true;
            (state.clone(), gate.generation)
        };
        self.emit(&pending);

        let result = self.inner.auth.login(username, secret).await;

        let superseded = {
            let mut gate = self.gate();
            gate.in_flight = false;
            gate.generation != generation
        };
        if superseded {
            tracing::info!("Discarding login for {}: logged out meanwhile", username);
            if result.is_ok() {
                self.inner.auth.logout();
            }
            return Err(AuthError::LoginCancelled);
        }

        match result {
            Ok(identity) => {
                self.set_state(SessionState::authenticated(identity.clone()));
                self.inner.notifier.notify(
                    NotificationType::Success,
                    "Logged in successfully",
                    &format!("Welcome back, {}!", identity.username),
                );
                self.inner.navigator.navigate(DASHBOARD_PATH);
                Ok(identity)
            }
            Err(e) => {
                tracing::warn!("Login failed for {}: {}", username, e);
                // A failed attempt ends any previous session too
                if pending.identity.is_some() {
                    self.inner.auth.logout();
                }
                self.set_state(SessionState::anonymous());
                self.inner
                    .notifier
                    .notify(NotificationType::Error, "Login failed", &e.to_string());
                Err(e)
            }
        }
    }

    /// End the session. Safe to call when nobody is signed in.
    pub fn logout(&self) {
        if let Some(identity) = self.identity() {
            tracing::info!("User {} logged out", identity.username);
        }

        self.gate().generation += 1;
        self.inner.auth.logout();
        self.set_state(SessionState::anonymous());
        self.inner.notifier.notify(
            NotificationType::Success,
            "Logged out",
            "You have been successfully logged out.",
        );
        self.inner.navigator.navigate(LOGIN_PATH);
    }
}
