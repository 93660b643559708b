//! KYB domain: companies and their members.

pub mod client;
mod convert;
pub mod wire;

use serde::{Deserialize, Serialize};

use crate::shared::Address;

/// Input for `POST /company`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCompanyRequest {
    pub name: String,
    pub registration_number: String,
    /// Country of incorporation, ISO 3166-1 alpha-2.
    pub incorporation_country: String,
    pub registered_address: Address,
    pub contact_email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

/// Input for `PATCH /company/{id}`; unset fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCompanyRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registered_address: Option<Address>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub company_id: String,
    pub name: String,
    pub registration_number: String,
    pub incorporation_country: String,
    pub registered_address: Address,
    pub status: String,
    pub created_at: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CompanyRole {
    Director,
    Shareholder,
    Representative,
    /// A role this SDK does not know yet.
    #[serde(other)]
    Unknown,
}

/// Input for `POST /company/{id}/user`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddCompanyUserRequest {
    pub user_id: String,
    pub role: CompanyRole,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyMember {
    pub company_id: String,
    pub user_id: String,
    pub role: CompanyRole,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_member_with_new_role_still_decodes() {
        let member: CompanyMember = serde_json::from_value(serde_json::json!({
            "companyId": "c1",
            "userId": "u2",
            "role": "BENEFICIAL_OWNER",
        }))
        .unwrap();
        assert_eq!(member.role, CompanyRole::Unknown);
    }
}
