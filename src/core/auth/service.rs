//! Authentication service
//!
//! Validates a login against the credential store, issues a session token
//! and persists the resulting session. The service sits behind the
//! [`Authenticator`] trait so a real backend can replace the mocked one
//! without touching the session context or the route guard.

use std::future::Future;
use std::time::Duration;

use super::credentials::{CredentialStore, Identity};
use super::storage::{KeyValueStore, SessionPersistence};
use super::token::SessionToken;

/// Authentication error types
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("{0} is required")]
    MissingRequiredField(&'static str),

    #[error("Stored session data is corrupt")]
    CorruptSessionData,

    #[error("A login is already in progress")]
    LoginInProgress,

    #[error("Login was cancelled by a logout")]
    LoginCancelled,

    #[error("Storage error: {0}")]
    Storage(String),
}

/// Default simulated round trip of a login
pub const DEFAULT_LOGIN_DELAY: Duration = Duration::from_millis(400);

/// Tunables of the mocked auth service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthSettings {
    /// Latency every login waits before checking credentials
    pub login_delay: Duration,
}

impl AuthSettings {
    /// Settings without any simulated latency
    pub fn immediate() -> Self {
        Self {
            login_delay: Duration::ZERO,
        }
    }
}

impl Default for AuthSettings {
    fn default() -> Self {
        Self {
            login_delay: DEFAULT_LOGIN_DELAY,
        }
    }
}

/// Check that both login fields were filled in.
///
/// Runs at the form boundary, before anything reaches the service.
pub fn validate_login_fields(username: &str, secret: &str) -> Result<(), AuthError> {
    if username.trim().is_empty() {
        return Err(AuthError::MissingRequiredField("Username"));
    }

    if secret.is_empty() {
        return Err(AuthError::MissingRequiredField("Password"));
    }

    Ok(())
}

/// Capability to authenticate users and look up the current session
pub trait Authenticator: Send + Sync + 'static {
    /// Validate credentials, persist a new session and return its identity.
    ///
    /// May suspend; callers must not assume it resolves immediately.
    fn login(
        &self,
        username: &str,
        secret: &str,
    ) -> impl Future<Output = Result<Identity, AuthError>>;

    /// Drop the persisted session
    fn logout(&self);

    /// Identity of the persisted session, if any
    fn current_identity(&self) -> Option<Identity>;
}

/// Auth service backed by the fixed credential table
#[derive(Debug, Clone)]
pub struct MockAuthService<S> {
    credentials: CredentialStore,
    persistence: SessionPersistence<S>,
    settings: AuthSettings,
}

impl<S: KeyValueStore> MockAuthService<S> {
    /// Create a new authentication service
    pub fn new(credentials: CredentialStore, store: S, settings: AuthSettings) -> Self {
        Self {
            credentials,
            persistence: SessionPersistence::new(store),
            settings,
        }
    }

    /// Service over the seeded accounts
    pub fn seeded(store: S, settings: AuthSettings) -> Self {
        Self::new(CredentialStore::seeded(), store, settings)
    }

    pub fn persistence(&self) -> &SessionPersistence<S> {
        &self.persistence
    }
}

impl<S: KeyValueStore> Authenticator for MockAuthService<S> {
    async fn login(&self, username: &str, secret: &str) -> Result<Identity, AuthError> {
        simulate_latency(self.settings.login_delay).await;

        let identity = self
            .credentials
            .find_by_credentials(username, secret)
            .map(|record| record.identity())
            .ok_or(AuthError::InvalidCredentials)?;

        let token = SessionToken::generate();
        self.persistence.save(&identity, &token)?;

        tracing::info!("User {} logged in as {}", identity.username, identity.role);
        Ok(identity)
    }

    fn logout(&self) {
        self.persistence.clear();
    }

    fn current_identity(&self) -> Option<Identity> {
        self.persistence.load().map(|session| session.identity)
    }
}

/// Wait out the mocked network round trip
async fn simulate_latency(delay: Duration) {
    if delay.is_zero() {
        return;
    }

    #[cfg(feature = "hydrate")]
    {
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        gloo_timers::future::TimeoutFuture::new(millis).await;
    }

    #[cfg(all(feature = "ssr", not(feature = "hydrate")))]
    tokio::time::sleep(delay).await;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::auth::credentials::Role;
    use crate::core::auth::storage::{AUTH_TOKEN_KEY, MemoryStorage, USER_KEY};

    fn service() -> (MockAuthService<MemoryStorage>, MemoryStorage) {
        let storage = MemoryStorage::new();
        let service = MockAuthService::seeded(storage.clone(), AuthSettings::immediate());
        (service, storage)
    }

    // ========================================================================
    // Validation Tests
    // ========================================================================

    #[test]
    fn test_validate_login_fields_valid() {
        assert!(validate_login_fields("admin", "admin123").is_ok());
        assert!(validate_login_fields("a", " ").is_ok());
    }

    #[test]
    fn test_validate_login_fields_missing() {
        assert_eq!(
            validate_login_fields("", "admin123"),
            Err(AuthError::MissingRequiredField("Username"))
        );
        assert_eq!(
            validate_login_fields("   ", "admin123"),
            Err(AuthError::MissingRequiredField("Username"))
        );
        assert_eq!(
            validate_login_fields("admin", ""),
            Err(AuthError::MissingRequiredField("Password"))
        );
    }

    #[test]
    fn test_auth_error_display() {
        assert_eq!(
            AuthError::InvalidCredentials.to_string(),
            "Invalid username or password"
        );
        assert_eq!(
            AuthError::MissingRequiredField("Username").to_string(),
            "Username is required"
        );
        assert_eq!(
            AuthError::Storage("quota exceeded".to_string()).to_string(),
            "Storage error: quota exceeded"
        );
        assert_eq!(
            AuthError::LoginCancelled.to_string(),
            "Login was cancelled by a logout"
        );
    }

    #[test]
    fn test_default_settings() {
        assert_eq!(AuthSettings::default().login_delay, DEFAULT_LOGIN_DELAY);
        assert!(AuthSettings::immediate().login_delay.is_zero());
    }

    // ========================================================================
    // Service Tests
    // ========================================================================

    #[tokio::test]
    async fn test_login_every_seeded_account() {
        let (service, _) = service();

        for (username, secret, role) in [
            ("admin", "admin123", Role::Admin),
            ("manager", "manager123", Role::Manager),
            ("staff", "staff123", Role::Staff),
        ] {
            let identity = service.login(username, secret).await.unwrap();
            assert_eq!(identity.username, username);
            assert_eq!(identity.role, role);
        }
    }

    #[tokio::test]
    async fn test_login_persists_session() {
        let (service, storage) = service();

        let identity = service.login("admin", "admin123").await.unwrap();

        assert!(storage.get_item(AUTH_TOKEN_KEY).is_some());
        let user_json = storage.get_item(USER_KEY).unwrap();
        assert!(!user_json.contains("admin123"));
        assert_eq!(service.current_identity(), Some(identity));
    }

    #[tokio::test]
    async fn test_login_issues_new_token_each_time() {
        let (service, storage) = service();

        service.login("admin", "admin123").await.unwrap();
        let first = storage.get_item(AUTH_TOKEN_KEY).unwrap();
        service.login("admin", "admin123").await.unwrap();
        let second = storage.get_item(AUTH_TOKEN_KEY).unwrap();

        assert_ne!(first, second);
    }

    #[tokio::test]
    async fn test_login_invalid_credentials_leaves_storage_alone() {
        let (service, storage) = service();

        let result = service.login("admin", "wrong").await;

        assert_eq!(result, Err(AuthError::InvalidCredentials));
        assert!(storage.is_empty());
        assert!(service.current_identity().is_none());
    }

    #[tokio::test]
    async fn test_login_waits_for_configured_delay() {
        let storage = MemoryStorage::new();
        let service = MockAuthService::seeded(
            storage,
            AuthSettings {
                login_delay: Duration::from_millis(20),
            },
        );

        let started = std::time::Instant::now();
        service.login("admin", "admin123").await.unwrap();

        assert!(started.elapsed() >= Duration::from_millis(20));
    }

    #[tokio::test]
    async fn test_logout_clears_session() {
        let (service, storage) = service();
        service.login("manager", "manager123").await.unwrap();

        service.logout();

        assert!(storage.is_empty());
        assert!(service.current_identity().is_none());
    }

    #[test]
    fn test_logout_when_anonymous_is_harmless() {
        let (service, storage) = service();

        service.logout();
        service.logout();

        assert!(storage.is_empty());
    }

    #[test]
    fn test_current_identity_with_corrupt_storage() {
        let (service, storage) = service();
        storage.set_item(AUTH_TOKEN_KEY, "token").unwrap();
        storage.set_item(USER_KEY, "{not json").unwrap();

        assert!(service.current_identity().is_none());
        assert!(storage.is_empty());
    }
}
