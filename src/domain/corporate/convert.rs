//! Conversions between corporate DTOs and wire types.

use super::wire::{CorporateResponse, CreateCorporateBody, UpdateCorporateBody};
use super::{Corporate, CreateCorporateRequest, UpdateCorporateRequest};
use crate::shared::wire::AddressBody;

impl From<&CreateCorporateRequest> for CreateCorporateBody {
    fn from(r: &CreateCorporateRequest) -> Self {
        Self {
            legal_name: r.legal_name.clone(),
            registration_number: r.registration_number.clone(),
            registered_country: r.country.clone(),
            corporate_type: r.corporate_type,
            registered_address: AddressBody::from(&r.address),
            contact_email: r.contact_email.clone(),
            contact_phone: r.contact_phone.clone(),
        }
    }
}

impl From<&UpdateCorporateRequest> for UpdateCorporateBody {
    fn from(r: &UpdateCorporateRequest) -> Self {
        Self {
            legal_name: r.legal_name.clone(),
            registered_address: r.address.as_ref().map(AddressBody::from),
            contact_email: r.contact_email.clone(),
            contact_phone: r.contact_phone.clone(),
        }
    }
}

impl From<CorporateResponse> for Corporate {
    fn from(r: CorporateResponse) -> Self {
        Self {
            corporate_id: r.corporate_uuid,
            legal_name: r.legal_name,
            registration_number: r.registration_number,
            country: r.registered_country,
            corporate_type: r.corporate_type,
            address: r.registered_address.into(),
            contact_email: r.contact_email,
            contact_phone: r.contact_phone,
            status: r.status,
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}
