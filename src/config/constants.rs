//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// API
// =============================================================================

/// Default API base URL (placeholder, replaced per deployment)
pub const DEFAULT_API_URL: &str = "https://your-backend-url.com/api";

/// API call timeout in milliseconds
pub const API_TIMEOUT: u64 = 10_000;

// =============================================================================
// Local Storage
// =============================================================================

/// Storage key under which the session token is kept
pub const AUTH_TOKEN_KEY: &str = "auth_token";

/// Storage key under which the cached user payload is kept
pub const USER_DATA_KEY: &str = "user_data";

// =============================================================================
// Authentication & Tokens
// =============================================================================

/// Session token lifetime in days
pub const TOKEN_EXPIRY_DAYS: i64 = 7;

/// Token refresh interval in milliseconds (15 minutes)
pub const TOKEN_REFRESH_INTERVAL: u64 = 15 * 60 * 1000;

// =============================================================================
// Validation
// =============================================================================

/// Minimum password length requirement
pub const PASSWORD_MIN_LENGTH: u64 = 6;

/// Minimum username length requirement
pub const USERNAME_MIN_LENGTH: u64 = 3;

// =============================================================================
// Feature Flags
// =============================================================================

/// "Remember me" sign-in option enabled by default
pub const DEFAULT_ENABLE_REMEMBER_ME: bool = true;

/// Password reset flow enabled by default
pub const DEFAULT_ENABLE_PASSWORD_RESET: bool = true;

/// Social login disabled until provider credentials exist
pub const DEFAULT_ENABLE_SOCIAL_LOGIN: bool = false;
