//! Corporate domain: corporate customer records.

pub mod client;
mod convert;
pub mod wire;

use serde::{Deserialize, Serialize};

use crate::shared::Address;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CorporateType {
    LimitedCompany,
    Partnership,
    SoleTrader,
    Other,
    /// A type this SDK does not know yet.
    #[serde(other)]
    Unknown,
}

/// Input for `POST /corporate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCorporateRequest {
    pub legal_name: String,
    pub registration_number: String,
    pub country: String,
    pub corporate_type: CorporateType,
    pub address: Address,
    pub contact_email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_phone: Option<String>,
}

/// Input for `PATCH /corporate/{id}`; unset fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCorporateRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legal_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_phone: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Corporate {
    pub corporate_id: String,
    pub legal_name: String,
    pub registration_number: String,
    pub country: String,
    pub corporate_type: CorporateType,
    pub address: Address,
    pub contact_email: String,
    pub contact_phone: Option<String>,
    pub status: String,
    pub created_at: String,
    pub updated_at: String,
}
