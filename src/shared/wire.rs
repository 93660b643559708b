//! Wire shapes shared by several endpoints.

use serde::{Deserialize, Serialize};

use super::Address;

/// Postal address as the API sends and expects it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressBody {
    pub address_line_1: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_line_2: Option<String>,
    pub city: String,
    pub post_code: String,
    pub country: String,
}

impl From<&Address> for AddressBody {
    fn from(a: &Address) -> Self {
        Self {
            address_line_1: a.address_line_1.clone(),
            address_line_2: a.address_line_2.clone(),
            city: a.city.clone(),
            post_code: a.post_code.clone(),
            country: a.country.clone(),
        }
    }
}

impl From<AddressBody> for Address {
    fn from(a: AddressBody) -> Self {
        Self {
            address_line_1: a.address_line_1,
            address_line_2: a.address_line_2,
            city: a.city,
            post_code: a.post_code,
            country: a.country,
        }
    }
}
