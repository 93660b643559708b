//! Wire types for `/user/{userId}/bank-account/...` requests and responses.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::shared::Currency;

/// Account identifiers as the API spells them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AccountDetailsBody {
    Iban {
        iban: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        bic: Option<String>,
    },
    SortCode {
        account_number: String,
        sort_code: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateRemoteAccountBody {
    pub currency: Currency,
    pub account_name: String,
    pub main_beneficiary: bool,
    #[serde(flatten)]
    pub details: AccountDetailsBody,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteAccountResponse {
    pub uuid: String,
    pub currency: Currency,
    pub account_name: String,
    #[serde(default)]
    pub main_beneficiary: bool,
    #[serde(flatten)]
    pub details: AccountDetailsBody,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetMainAccountBody {
    pub account_uuid: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateUnblockAccountBody {
    pub currency: Currency,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnblockAccountResponse {
    pub uuid: String,
    pub currency: Currency,
    #[serde(default)]
    pub account_name: Option<String>,
    #[serde(flatten)]
    pub details: AccountDetailsBody,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulateDepositBody {
    pub account_uuid: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
}
