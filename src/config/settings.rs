//! Application settings loaded from environment variables.

use std::env;
use std::path::Path;
use std::time::Duration;

use serde::Serialize;

use super::constants::{
    API_TIMEOUT, AUTH_TOKEN_KEY, DEFAULT_API_URL, PASSWORD_MIN_LENGTH, TOKEN_EXPIRY_DAYS,
    TOKEN_REFRESH_INTERVAL, USERNAME_MIN_LENGTH, USER_DATA_KEY,
};
use super::features::FeatureFlagSet;

/// Environment variable holding the API base URL override
const API_URL_VAR: &str = "API_URL";

/// Application configuration
///
/// Immutable after construction; build it once at startup and pass it by
/// reference to consumers. Serialized field names match the keys the client
/// code reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct Settings {
    /// Base URL for API calls
    pub api_url: String,
    /// Storage key under which the session token is kept
    pub auth_token_key: String,
    /// Storage key under which the cached user payload is kept
    pub user_data_key: String,
    /// Session token lifetime in days
    pub token_expiry_days: i64,
    /// Minimum password length requirement
    pub password_min_length: u64,
    /// Minimum username length requirement
    pub username_min_length: u64,
    /// API call timeout in milliseconds
    #[serde(rename = "API_TIMEOUT")]
    pub api_timeout_ms: u64,
    /// Token refresh interval in milliseconds
    #[serde(rename = "TOKEN_REFRESH_INTERVAL")]
    pub token_refresh_interval_ms: u64,
    /// Optional behavior toggles
    pub features: FeatureFlagSet,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            auth_token_key: AUTH_TOKEN_KEY.to_string(),
            user_data_key: USER_DATA_KEY.to_string(),
            token_expiry_days: TOKEN_EXPIRY_DAYS,
            password_min_length: PASSWORD_MIN_LENGTH,
            username_min_length: USERNAME_MIN_LENGTH,
            api_timeout_ms: API_TIMEOUT,
            token_refresh_interval_ms: TOKEN_REFRESH_INTERVAL,
            features: FeatureFlagSet::default(),
        }
    }
}

impl Settings {
    /// Load configuration from environment variables.
    ///
    /// The only supported override is `API_URL`; a set, non-empty value is
    /// taken verbatim, anything else falls back to the documented default.
    /// Absent overrides are replaced silently. Resolution is synchronous and
    /// idempotent.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::resolve()
    }

    /// Load configuration after reading a specific dotenv file.
    ///
    /// An unreadable file is ignored, matching the tolerance of
    /// [`Settings::from_env`] for a missing `.env`.
    pub fn from_env_file(path: impl AsRef<Path>) -> Self {
        dotenvy::from_path(path.as_ref()).ok();
        Self::resolve()
    }

    fn resolve() -> Self {
        let api_url = env::var(API_URL_VAR)
            .ok()
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| {
                tracing::debug!("{} not set, using default", API_URL_VAR);
                DEFAULT_API_URL.to_string()
            });

        Self {
            api_url,
            ..Self::default()
        }
    }

    /// Get the session token lifetime.
    pub fn token_expiry(&self) -> chrono::Duration {
        chrono::Duration::days(self.token_expiry_days)
    }

    /// Get the API call timeout.
    pub fn api_timeout(&self) -> Duration {
        Duration::from_millis(self.api_timeout_ms)
    }

    /// Get the token refresh interval.
    pub fn token_refresh_interval(&self) -> Duration {
        Duration::from_millis(self.token_refresh_interval_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_refresh_interval_is_fifteen_minutes() {
        let settings = Settings::default();

        assert_eq!(settings.token_refresh_interval_ms, 1000 * 60 * 15);
        assert_eq!(
            settings.token_refresh_interval(),
            Duration::from_secs(15 * 60)
        );
    }

    #[test]
    fn test_duration_helpers() {
        let settings = Settings::default();

        assert_eq!(settings.token_expiry(), chrono::Duration::days(7));
        assert_eq!(settings.api_timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_serialized_key_names() {
        let json = serde_json::to_value(Settings::default()).unwrap();

        assert_eq!(json["API_URL"], DEFAULT_API_URL);
        assert_eq!(json["AUTH_TOKEN_KEY"], "auth_token");
        assert_eq!(json["USER_DATA_KEY"], "user_data");
        assert_eq!(json["TOKEN_EXPIRY_DAYS"], 7);
        assert_eq!(json["PASSWORD_MIN_LENGTH"], 6);
        assert_eq!(json["USERNAME_MIN_LENGTH"], 3);
        assert_eq!(json["API_TIMEOUT"], 10_000);
        assert_eq!(json["TOKEN_REFRESH_INTERVAL"], 900_000);
        assert!(json["FEATURES"].is_object());
    }
}
