//! Network URL constants for the Unblock SDK.

use std::time::Duration;

/// Production REST API base URL.
pub const PRODUCTION_API_URL: &str = "https://api.getunblock.com";

/// Sandbox REST API base URL.
pub const SANDBOX_API_URL: &str = "https://sandbox.getunblock.com";

/// Default per-request timeout applied to the transport.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
