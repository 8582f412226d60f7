//! Credential store
//!
//! The fixed table of back-office accounts that a login is validated against,
//! and the [`Identity`] handed out once a record matches.

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Role label shown next to the signed-in user
#[derive(Debug, Display, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[display("admin")]
    Admin,
    #[display("manager")]
    Manager,
    #[display("staff")]
    Staff,
}

/// Public profile of an authenticated user.
///
/// This is the only user shape that is ever stored or passed around after a
/// login, so it has no field for the secret.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Identity {
    pub id: String,
    pub username: String,
    pub role: Role,
}

/// Entry of the credential table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialRecord {
    pub id: String,
    pub username: String,
    pub secret: String,
    pub role: Role,
}

impl CredentialRecord {
    pub fn new(
        id: impl Into<String>,
        username: impl Into<String>,
        secret: impl Into<String>,
        role: Role,
    ) -> Self {
        Self {
            id: id.into(),
            username: username.into(),
            secret: secret.into(),
            role,
        }
    }

    /// Identity for this record, with the secret stripped
    pub fn identity(&self) -> Identity {
        Identity {
            id: self.id.clone(),
            username: self.username.clone(),
            role: self.role,
        }
    }
}

/// Read-only table of valid accounts
#[derive(Debug, Clone, Default)]
pub struct CredentialStore {
    records: Vec<CredentialRecord>,
}

impl CredentialStore {
    pub fn new(records: Vec<CredentialRecord>) -> Self {
        Self { records }
    }

    /// The accounts the dashboard ships with
    pub fn seeded() -> Self {
        Self::new(vec![
            CredentialRecord::new("1", "admin", "admin123", Role::Admin),
            CredentialRecord::new("2", "manager", "manager123", Role::Manager),
            CredentialRecord::new("3", "staff", "staff123", Role::Staff),
        ])
    }

    /// Exact, case-sensitive match on both username and secret
    pub fn find_by_credentials(&self, username: &str, secret: &str) -> Option<&CredentialRecord> {
        self.records
            .iter()
            .find(|record| record.username == username && record.secret == secret)
    }
}
