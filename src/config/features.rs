//! Feature flag set consulted by the client UI.

use serde::{Deserialize, Serialize};

use super::constants::{
    DEFAULT_ENABLE_PASSWORD_RESET, DEFAULT_ENABLE_REMEMBER_ME, DEFAULT_ENABLE_SOCIAL_LOGIN,
};

/// Named boolean toggles for optional application behavior.
///
/// Resolved once at startup and never changed at runtime. Serialized field
/// names match the keys the client code reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct FeatureFlagSet {
    /// "Remember me" checkbox on the sign-in form
    pub enable_remember_me: bool,
    /// Self-service password reset flow
    pub enable_password_reset: bool,
    /// Third-party identity providers on the sign-in form
    pub enable_social_login: bool,
}

impl Default for FeatureFlagSet {
    fn default() -> Self {
        Self {
            enable_remember_me: DEFAULT_ENABLE_REMEMBER_ME,
            enable_password_reset: DEFAULT_ENABLE_PASSWORD_RESET,
            enable_social_login: DEFAULT_ENABLE_SOCIAL_LOGIN,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_flags() {
        let flags = FeatureFlagSet::default();

        assert!(flags.enable_remember_me);
        assert!(flags.enable_password_reset);
        assert!(!flags.enable_social_login);
    }

    #[test]
    fn test_serialized_key_names() {
        let json = serde_json::to_value(FeatureFlagSet::default()).unwrap();

        assert_eq!(json["ENABLE_REMEMBER_ME"], true);
        assert_eq!(json["ENABLE_PASSWORD_RESET"], true);
        assert_eq!(json["ENABLE_SOCIAL_LOGIN"], false);
    }
}
