//! Wire types for `/company` requests and responses.

use serde::{Deserialize, Serialize};

use super::CompanyRole;
use crate::shared::wire::AddressBody;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateCompanyBody {
    pub name: String,
    pub registration_number: String,
    pub country_of_incorporation: String,
    pub registered_address: AddressBody,
    pub contact_email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateCompanyBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registered_address: Option<AddressBody>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyResponse {
    pub company_uuid: String,
    pub name: String,
    pub registration_number: String,
    pub country_of_incorporation: String,
    pub registered_address: AddressBody,
    pub status: String,
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddCompanyUserBody {
    pub user_uuid: String,
    pub role: CompanyRole,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyUserResponse {
    pub company_uuid: String,
    pub user_uuid: String,
    pub role: CompanyRole,
}
