//! Client settings: API key, environment, timeout.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::BadRequestError;
use crate::network::{DEFAULT_TIMEOUT, PRODUCTION_API_URL, SANDBOX_API_URL};

pub const ENV_API_KEY: &str = "UNBLOCK_API_KEY";
pub const ENV_ENVIRONMENT: &str = "UNBLOCK_ENVIRONMENT";
pub const ENV_TIMEOUT_MS: &str = "UNBLOCK_TIMEOUT_MS";

/// Which Unblock deployment the client talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Production,
    #[default]
    Sandbox,
}

impl Environment {
    /// Pick an environment from the `production` flag used by most callers.
    pub fn from_production_flag(production: bool) -> Self {
        if production {
            Self::Production
        } else {
            Self::Sandbox
        }
    }

    pub fn base_url(&self) -> &'static str {
        match self {
            Self::Production => PRODUCTION_API_URL,
            Self::Sandbox => SANDBOX_API_URL,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Production => "production",
            Self::Sandbox => "sandbox",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "production" | "prod" => Ok(Self::Production),
            "sandbox" => Ok(Self::Sandbox),
            other => Err(format!("unknown environment '{}'", other)),
        }
    }
}

/// Immutable per-client configuration.
///
/// The API key is sent verbatim in the `Authorization` header; callers add any
/// prefix the API expects. `Debug` redacts it.
#[derive(Clone)]
pub struct Settings {
    pub api_key: String,
    pub environment: Environment,
    pub base_url: String,
    pub timeout: Duration,
}

impl Settings {
    pub fn new(api_key: impl Into<String>, environment: Environment) -> Self {
        Self {
            api_key: api_key.into(),
            environment,
            base_url: environment.base_url().to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Load settings from `UNBLOCK_API_KEY`, `UNBLOCK_ENVIRONMENT` and
    /// `UNBLOCK_TIMEOUT_MS`.
    ///
    /// Returns `Ok(None)` when no API key is set. A variable that is set but
    /// cannot be parsed is an error rather than falling back to the default.
    pub fn from_env() -> Result<Option<Self>, BadRequestError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub(crate) fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Option<Self>, BadRequestError> {
        let Some(api_key) = lookup(ENV_API_KEY) else {
            return Ok(None);
        };

        let environment = match lookup(ENV_ENVIRONMENT) {
            Some(value) => value
                .parse()
                .map_err(|e| BadRequestError::InvalidConfig(format!("{}: {}", ENV_ENVIRONMENT, e)))?,
            None => Environment::default(),
        };

        let mut settings = Self::new(api_key, environment);
        if let Some(value) = lookup(ENV_TIMEOUT_MS) {
            let ms = value.trim().parse::<u64>().map_err(|e| {
                BadRequestError::InvalidConfig(format!("{}: '{}' {}", ENV_TIMEOUT_MS, value, e))
            })?;
            settings.timeout = Duration::from_millis(ms);
        }
        Ok(Some(settings))
    }
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("api_key", &"<redacted>")
            .field("environment", &self.environment)
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}
