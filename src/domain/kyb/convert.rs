//! Conversions between KYB DTOs and wire types.

use super::wire::{
    AddCompanyUserBody, CompanyResponse, CompanyUserResponse, CreateCompanyBody,
    UpdateCompanyBody,
};
use super::{
    AddCompanyUserRequest, Company, CompanyMember, CreateCompanyRequest, UpdateCompanyRequest,
};
use crate::shared::wire::AddressBody;

impl From<&CreateCompanyRequest> for CreateCompanyBody {
    fn from(r: &CreateCompanyRequest) -> Self {
        Self {
            name: r.name.clone(),
            registration_number: r.registration_number.clone(),
            country_of_incorporation: r.incorporation_country.clone(),
            registered_address: AddressBody::from(&r.registered_address),
            contact_email: r.contact_email.clone(),
            website: r.website.clone(),
        }
    }
}

impl From<&UpdateCompanyRequest> for UpdateCompanyBody {
    fn from(r: &UpdateCompanyRequest) -> Self {
        Self {
            name: r.name.clone(),
            registered_address: r.registered_address.as_ref().map(AddressBody::from),
            contact_email: r.contact_email.clone(),
            website: r.website.clone(),
        }
    }
}

impl From<CompanyResponse> for Company {
    fn from(r: CompanyResponse) -> Self {
        Self {
            company_id: r.company_uuid,
            name: r.name,
            registration_number: r.registration_number,
            incorporation_country: r.country_of_incorporation,
            registered_address: r.registered_address.into(),
            status: r.status,
            created_at: r.created_at,
        }
    }
}

impl From<&AddCompanyUserRequest> for AddCompanyUserBody {
    fn from(r: &AddCompanyUserRequest) -> Self {
        Self {
            user_uuid: r.user_id.clone(),
            role: r.role,
        }
    }
}

impl From<CompanyUserResponse> for CompanyMember {
    fn from(r: CompanyUserResponse) -> Self {
        Self {
            company_id: r.company_uuid,
            user_id: r.user_uuid,
            role: r.role,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::kyb::CompanyRole;
    use serde_json::json;

    #[test]
    fn test_update_body_omits_unset_fields() {
        let request = UpdateCompanyRequest {
            contact_email: Some("ops@acme.io".into()),
            ..Default::default()
        };
        let body = serde_json::to_value(UpdateCompanyBody::from(&request)).unwrap();
        assert_eq!(body, json!({"contact_email": "ops@acme.io"}));
    }

    #[test]
    fn test_company_response_renames_nested_address() {
        let wire: CompanyResponse = serde_json::from_value(json!({
            "company_uuid": "c1",
            "name": "Acme Ltd",
            "registration_number": "0123",
            "country_of_incorporation": "GB",
            "registered_address": {
                "address_line_1": "1 Main St",
                "city": "London",
                "post_code": "N1",
                "country": "GB"
            },
            "status": "PENDING",
            "created_at": "2024-01-15T10:30:00Z"
        }))
        .unwrap();
        let out = serde_json::to_value(Company::from(wire)).unwrap();
        assert_eq!(out["companyId"], "c1");
        assert_eq!(out["incorporationCountry"], "GB");
        assert_eq!(out["registeredAddress"]["addressLine1"], "1 Main St");
        assert_eq!(out["registeredAddress"]["postCode"], "N1");
    }

    #[test]
    fn test_add_user_body() {
        let request = AddCompanyUserRequest {
            user_id: "u1".into(),
            role: CompanyRole::Director,
        };
        let body = serde_json::to_value(AddCompanyUserBody::from(&request)).unwrap();
        assert_eq!(body, json!({"user_uuid": "u1", "role": "DIRECTOR"}));
    }
}
