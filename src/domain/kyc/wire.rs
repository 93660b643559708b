//! Wire types for `/user/{userId}/kyc` requests and responses.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{DocumentSide, DocumentType, SourceOfFunds};
use crate::shared::wire::AddressBody;

/// `PUT /user/{userId}/kyc/applicant` body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicantBody {
    pub address: AddressBody,
    #[serde(with = "crate::shared::serde_util::date_only")]
    pub date_of_birth: NaiveDate,
    pub source_of_funds: SourceOfFunds,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_of_funds_description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicantResponse {
    pub applicant_id: String,
    pub created: bool,
}

/// `PUT /user/{userId}/kyc/document` body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentBody {
    pub content: String,
    pub filename: String,
    pub document_type: DocumentType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_side: Option<DocumentSide>,
    pub country: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentResponse {
    pub upload_id: String,
    pub document_type: DocumentType,
}

/// `GET`/`POST /user/{userId}/kyc/verification` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationResponse {
    pub status: String,
    #[serde(default)]
    pub verification_started_at: Option<String>,
    #[serde(default)]
    pub verification_completed_at: Option<String>,
}
