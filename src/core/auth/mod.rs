//! Authentication and session core
//!
//! This module provides:
//! - A fixed credential table and the identity it hands out
//! - Session persistence over a `localStorage`-like key-value area
//! - The auth service behind the [`Authenticator`] capability
//! - The session context state machine
//! - Route guard decisions for protected pages

pub mod credentials;
pub mod guard;
pub mod service;
pub mod session;
pub mod storage;
pub mod token;


pub use credentials::{CredentialRecord, CredentialStore, Identity, Role};
pub use guard::{DASHBOARD_PATH, LOGIN_PATH, RouteDecision, evaluate};
pub use service::{
    AuthError, AuthSettings, Authenticator, DEFAULT_LOGIN_DELAY, MockAuthService,
    validate_login_fields,
};
pub use session::{SessionContext, SessionPhase, SessionState};
pub use storage::{
    AUTH_TOKEN_KEY, BrowserStorage, KeyValueStore, MemoryStorage, SessionPersistence,
    StoredSession, USER_KEY,
};
pub use token::SessionToken;
