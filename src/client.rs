//! High-level client: `UnblockClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder and the accessor methods.

use std::sync::Arc;
use std::time::Duration;

use crate::auth::client::Auth;
use crate::config::{Environment, Settings, ENV_API_KEY};
use crate::domain::bank_account::client::BankAccounts;
use crate::domain::corporate::client::Corporates;
use crate::domain::exchange_rate::client::ExchangeRates;
use crate::domain::kyb::client::Kyb;
use crate::domain::kyc::client::Kyc;
use crate::domain::process::client::Processes;
use crate::domain::token_preference::client::TokenPreferences;
use crate::domain::user::client::Users;
use crate::error::{BadRequestError, SdkError};
use crate::http::{ReqwestTransport, Transport, UnblockHttp};
use crate::session::{SessionContext, SessionStore};

// Re-export sub-client types for convenience.
pub use crate::auth::client::Auth as AuthClient;
pub use crate::domain::bank_account::client::BankAccounts as BankAccountsClient;
pub use crate::domain::corporate::client::Corporates as CorporatesClient;
pub use crate::domain::exchange_rate::client::ExchangeRates as ExchangeRatesClient;
pub use crate::domain::kyb::client::Kyb as KybClient;
pub use crate::domain::kyc::client::Kyc as KycClient;
pub use crate::domain::process::client::Processes as ProcessesClient;
pub use crate::domain::token_preference::client::TokenPreferences as TokenPreferencesClient;
pub use crate::domain::user::client::Users as UsersClient;

/// The primary entry point for the Unblock SDK.
///
/// Provides nested sub-client accessors for each business area:
/// `client.auth()`, `client.kyc()`, `client.bank_accounts()`, etc.
/// Clones share the transport and the session.
#[derive(Clone)]
pub struct UnblockClient {
    pub(crate) http: UnblockHttp,
}

impl UnblockClient {
    pub fn builder(api_key: impl Into<String>) -> UnblockClientBuilder {
        UnblockClientBuilder::new(api_key)
    }

    /// Build a client from `UNBLOCK_*` environment variables.
    ///
    /// A missing API key or an unparsable variable is
    /// [`BadRequestError::InvalidConfig`].
    pub fn from_env() -> Result<Self, SdkError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, SdkError> {
        let settings = Settings::from_lookup(lookup)?.ok_or_else(|| {
            BadRequestError::InvalidConfig(format!("{} is not set", ENV_API_KEY))
        })?;
        UnblockClientBuilder::from_settings(settings).build()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn auth(&self) -> Auth<'_> {
        Auth { client: self }
    }

    pub fn users(&self) -> Users<'_> {
        Users { client: self }
    }

    pub fn kyc(&self) -> Kyc<'_> {
        Kyc { client: self }
    }

    pub fn kyb(&self) -> Kyb<'_> {
        Kyb { client: self }
    }

    pub fn corporates(&self) -> Corporates<'_> {
        Corporates { client: self }
    }

    pub fn bank_accounts(&self) -> BankAccounts<'_> {
        BankAccounts { client: self }
    }

    pub fn exchange_rates(&self) -> ExchangeRates<'_> {
        ExchangeRates { client: self }
    }

    pub fn token_preferences(&self) -> TokenPreferences<'_> {
        TokenPreferences { client: self }
    }

    pub fn processes(&self) -> Processes<'_> {
        Processes { client: self }
    }

    // ── Settings / session ───────────────────────────────────────────────

    pub fn settings(&self) -> &Settings {
        self.http.settings()
    }

    pub fn environment(&self) -> Environment {
        self.http.environment()
    }

    /// Copy of the current session context.
    pub async fn session(&self) -> SessionContext {
        self.http.session().snapshot().await
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct UnblockClientBuilder {
    settings: Settings,
    base_url_override: Option<String>,
    session: SessionContext,
    transport: Option<Arc<dyn Transport>>,
}

impl UnblockClientBuilder {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::from_settings(Settings::new(api_key, Environment::default()))
    }

    pub fn from_settings(settings: Settings) -> Self {
        Self {
            settings,
            base_url_override: None,
            session: SessionContext::default(),
            transport: None,
        }
    }

    pub fn environment(mut self, environment: Environment) -> Self {
        self.settings.environment = environment;
        self.settings.base_url = environment.base_url().to_string();
        self
    }

    /// `true` selects production, `false` sandbox.
    pub fn production(self, production: bool) -> Self {
        self.environment(Environment::from_production_flag(production))
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.settings.timeout = timeout;
        self
    }

    /// Send requests to `url` instead of the environment's base URL.
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url_override = Some(url.to_string());
        self
    }

    /// Pre-set a session obtained earlier.
    pub fn session(mut self, session: SessionContext) -> Self {
        self.session = session;
        self
    }

    /// Use a custom transport instead of the default `reqwest` one.
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn build(self) -> Result<UnblockClient, SdkError> {
        let mut settings = self.settings;
        if let Some(url) = self.base_url_override {
            settings.base_url = url;
        }

        let transport: Arc<dyn Transport> = match self.transport {
            Some(t) => t,
            None => Arc::new(ReqwestTransport::new(&settings)?),
        };

        tracing::debug!(
            environment = %settings.environment,
            base_url = %settings.base_url,
            "building unblock client"
        );

        Ok(UnblockClient {
            http: UnblockHttp::new(settings, SessionStore::new(self.session), transport),
        })
    }
}
