//! # Unblock SDK
//!
//! A Rust client for the Unblock REST API: user onboarding, KYC/KYB, fiat
//! ramp accounts, corporates, exchange rates and token preferences.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core**: Settings, session context, shared types, domain models
//! 2. **Auth**: SIWE message generation, signer seam, login flows
//! 3. **HTTP API**: `UnblockHttp` with auth header resolution and error classification
//! 4. **High-Level Client**: `UnblockClient` with nested sub-clients
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use unblock_sdk::prelude::*;
//!
//! let client = UnblockClient::builder("api-key").production(false).build()?;
//!
//! client.auth().login_with_signer(&wallet, &SiweParams {
//!     wallet_address: "0x...".into(),
//!     signing_url: "https://app.example.com".into(),
//!     chain_id: 137,
//! }).await?;
//!
//! let accounts = client.bank_accounts().list_remote().await?;
//! let rate = client.exchange_rates().get(Currency::Eur, Currency::Gbp).await?;
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Environment selection and client settings.
pub mod config;

/// Shared currency, chain and address types.
pub mod shared;

/// Domain modules (vertical slices): types, wire types, conversions, sub-clients.
pub mod domain;

/// Unified SDK error types.
pub mod error;

/// Network URL constants.
pub mod network;

/// Session identifiers shared by every sub-client.
pub mod session;

// ── Layer 2: Auth ────────────────────────────────────────────────────────────

/// Authentication: SIWE messages, signer seam, login/logout.
pub mod auth;

// ── Layer 3: HTTP API ────────────────────────────────────────────────────────

/// HTTP client and transport.
pub mod http;

// ── Layer 4: High-Level Client ───────────────────────────────────────────────

/// `UnblockClient`: the primary entry point.
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared types
    pub use crate::shared::{Address, Chain, Currency};

    // Config + session
    pub use crate::config::{Environment, Settings};
    pub use crate::session::{AuthState, SessionContext};

    // Domain types: users, KYC, KYB, corporates
    pub use crate::domain::corporate::{
        Corporate, CorporateType, CreateCorporateRequest, UpdateCorporateRequest,
    };
    pub use crate::domain::kyb::{
        AddCompanyUserRequest, Company, CompanyMember, CompanyRole, CreateCompanyRequest,
        UpdateCompanyRequest,
    };
    pub use crate::domain::kyc::{
        CreateApplicantRequest, DocumentSide, DocumentType, DocumentUpload, KycApplicant,
        KycVerification, OnboardingOutcome, OnboardingRequest, SourceOfFunds,
        UploadDocumentRequest,
    };
    pub use crate::domain::user::{CreateUserRequest, CreatedUser, UserDetails};

    // Domain types: accounts, rates, preferences, processes
    pub use crate::domain::bank_account::{
        AccountDetails, CreateRemoteAccountRequest, CreateUnblockAccountRequest, RemoteAccount,
        SimulateDepositRequest, UnblockAccount,
    };
    pub use crate::domain::exchange_rate::ExchangeRate;
    pub use crate::domain::process::{ProcessDirection, ProcessStatus};
    pub use crate::domain::token_preference::TokenPreference;

    // Errors
    pub use crate::error::{BadRequestError, SdkError, TransportError};

    // Network
    pub use crate::network::{PRODUCTION_API_URL, SANDBOX_API_URL};

    // Auth
    pub use crate::auth::signer::{MessageSigner, SignerError};
    pub use crate::auth::{SiweMessage, SiweParams};

    // HTTP transport
    pub use crate::http::{HttpRequest, HttpResponse, Transport, TransportFuture};

    // Client + sub-clients
    pub use crate::client::{
        AuthClient, BankAccountsClient, CorporatesClient, ExchangeRatesClient, KybClient,
        KycClient, ProcessesClient, TokenPreferencesClient, UnblockClient, UnblockClientBuilder,
        UsersClient,
    };
}
