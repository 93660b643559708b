//! Wire types for `/corporate` requests and responses.

use serde::{Deserialize, Serialize};

use super::CorporateType;
use crate::shared::wire::AddressBody;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateCorporateBody {
    pub legal_name: String,
    pub registration_number: String,
    pub registered_country: String,
    #[serde(rename = "type")]
    pub corporate_type: CorporateType,
    pub registered_address: AddressBody,
    pub contact_email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_phone: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateCorporateBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legal_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registered_address: Option<AddressBody>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_phone: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorporateResponse {
    pub corporate_uuid: String,
    pub legal_name: String,
    pub registration_number: String,
    pub registered_country: String,
    #[serde(rename = "type")]
    pub corporate_type: CorporateType,
    pub registered_address: AddressBody,
    pub contact_email: String,
    #[serde(default)]
    pub contact_phone: Option<String>,
    pub status: String,
    pub created_at: String,
    pub updated_at: String,
}
