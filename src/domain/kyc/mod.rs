//! KYC domain: applicant creation, document upload, verification.
//!
//! Onboarding is three sequential calls: create applicant, upload a document,
//! start verification. Each step is independent on the server; a failure
//! leaves earlier steps in place and nothing is rolled back.

pub mod client;
mod convert;
pub mod wire;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::shared::Address;

/// Declared origin of the applicant's funds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SourceOfFunds {
    Salary,
    BusinessIncome,
    Pension,
    Savings,
    Investments,
    Other,
}

/// Identity document kinds accepted by the KYC provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DocumentType {
    Passport,
    IdCard,
    Drivers,
    Selfie,
    ProofOfAddress,
    /// A kind this SDK does not know yet.
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DocumentSide {
    FrontSide,
    BackSide,
}

/// Input for `PUT /user/{userId}/kyc/applicant`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateApplicantRequest {
    pub address: Address,
    pub date_of_birth: NaiveDate,
    pub source_of_funds: SourceOfFunds,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_of_funds_description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KycApplicant {
    pub applicant_id: String,
    pub created: bool,
}

/// Input for `PUT /user/{userId}/kyc/document`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadDocumentRequest {
    /// Base64-encoded file content.
    pub content: String,
    pub filename: String,
    pub document_type: DocumentType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_side: Option<DocumentSide>,
    /// Issuing country, ISO 3166-1 alpha-2.
    pub country: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentUpload {
    pub upload_id: String,
    pub document_type: DocumentType,
}

/// Verification state as reported by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KycVerification {
    pub status: String,
    pub started_at: Option<String>,
    pub completed_at: Option<String>,
}

/// Everything `kyc().onboard(...)` needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingRequest {
    pub applicant: CreateApplicantRequest,
    pub document: UploadDocumentRequest,
}

/// Results of the three onboarding steps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingOutcome {
    pub applicant: KycApplicant,
    pub document: DocumentUpload,
    pub verification: KycVerification,
}
