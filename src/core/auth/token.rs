//! Session tokens

use derive_more::Display;
use uuid::Uuid;

/// Opaque marker of an active session.
///
/// Only its presence matters; nothing ever verifies its contents.
#[derive(Debug, Display, Clone, PartialEq, Eq, Hash)]
pub struct SessionToken(String);

impl SessionToken {
    /// Fresh, unguessable token
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for SessionToken {
    fn from(value: String) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_tokens_are_unique() {
        let a = SessionToken::generate();
        let b = SessionToken::generate();
        assert_ne!(a, b);
        assert!(Uuid::parse_str(a.as_str()).is_ok());
    }

    #[test]
    fn test_display_is_raw_value() {
        let token = SessionToken::from("abc".to_string());
        assert_eq!(token.to_string(), "abc");
        assert_eq!(token.as_str(), "abc");
    }
}
