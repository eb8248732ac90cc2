//! Runtime settings resolution tests.
//!
//! Environment access is serialized with a lock because cargo runs test
//! functions on multiple threads.

use std::env;
use std::sync::{Mutex, MutexGuard};

use lamp_config::config::{DEFAULT_API_URL, TOKEN_REFRESH_INTERVAL};
use lamp_config::Settings;

static ENV_LOCK: Mutex<()> = Mutex::new(());

const API_URL_VAR: &str = "API_URL";

fn env_guard() -> MutexGuard<'static, ()> {
    ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner())
}

#[test]
fn test_override_set_wins() {
    let _guard = env_guard();

    env::set_var(API_URL_VAR, "https://staging.example.com/api");
    let settings = Settings::from_env();
    env::remove_var(API_URL_VAR);

    assert_eq!(settings.api_url, "https://staging.example.com/api");
}

#[test]
fn test_unset_falls_back_to_default() {
    let _guard = env_guard();

    env::remove_var(API_URL_VAR);
    let settings = Settings::from_env();

    assert_eq!(settings.api_url, DEFAULT_API_URL);
}

#[test]
fn test_empty_override_falls_back_to_default() {
    let _guard = env_guard();

    env::set_var(API_URL_VAR, "");
    let settings = Settings::from_env();
    env::remove_var(API_URL_VAR);

    assert_eq!(settings.api_url, DEFAULT_API_URL);
}

#[test]
fn test_malformed_override_passes_through() {
    let _guard = env_guard();

    // Resolution does not validate the value, consumers do
    env::set_var(API_URL_VAR, "not a url");
    let settings = Settings::from_env();
    env::remove_var(API_URL_VAR);

    assert_eq!(settings.api_url, "not a url");
}

#[test]
fn test_resolution_is_idempotent() {
    let _guard = env_guard();

    env::remove_var(API_URL_VAR);
    let first = Settings::from_env();
    let second = Settings::from_env();
    assert_eq!(first, second);

    env::set_var(API_URL_VAR, "https://staging.example.com/api");
    let first = Settings::from_env();
    let second = Settings::from_env();
    env::remove_var(API_URL_VAR);
    assert_eq!(first, second);
}

#[test]
fn test_refresh_interval_is_fixed() {
    let _guard = env_guard();

    // 15 minutes in milliseconds, in every configuration
    assert_eq!(TOKEN_REFRESH_INTERVAL, 1000 * 60 * 15);

    env::set_var(API_URL_VAR, "https://staging.example.com/api");
    let settings = Settings::from_env();
    env::remove_var(API_URL_VAR);

    assert_eq!(settings.token_refresh_interval_ms, 900_000);
}

#[test]
fn test_static_values() {
    let _guard = env_guard();

    env::remove_var(API_URL_VAR);
    let settings = Settings::from_env();

    assert_eq!(settings.auth_token_key, "auth_token");
    assert_eq!(settings.user_data_key, "user_data");
    assert_eq!(settings.token_expiry_days, 7);
    assert_eq!(settings.password_min_length, 6);
    assert_eq!(settings.username_min_length, 3);
    assert_eq!(settings.api_timeout_ms, 10_000);

    assert!(settings.features.enable_remember_me);
    assert!(settings.features.enable_password_reset);
    assert!(!settings.features.enable_social_login);
}
