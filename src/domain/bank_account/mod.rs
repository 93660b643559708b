//! Bank account domain: the user's own (remote) accounts and the accounts
//! Unblock issues to them.
//!
//! Account identifiers differ by currency: EUR accounts carry an IBAN, GBP
//! accounts an account number plus sort code. [`AccountDetails`] models that
//! union; requests that carry loose optional fields are narrowed to it before
//! anything is sent.

pub mod client;
mod convert;
pub mod wire;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::BadRequestError;
use crate::shared::Currency;

/// Account identifiers, discriminated by which fields are present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AccountDetails {
    /// EUR-style account.
    #[serde(rename_all = "camelCase")]
    Iban {
        iban: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        bic: Option<String>,
    },
    /// GBP-style account.
    #[serde(rename_all = "camelCase")]
    SortCode {
        account_number: String,
        sort_code: String,
    },
}

/// Input for `POST /user/{userId}/bank-account/remote`.
///
/// Set `iban` for EUR accounts, or `account_number` and `sort_code` for GBP
/// accounts. When `iban` is present the other two are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRemoteAccountRequest {
    pub currency: Option<Currency>,
    pub account_name: String,
    pub main_beneficiary: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iban: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bic: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_code: Option<String>,
}

impl CreateRemoteAccountRequest {
    /// Narrow the optional fields to one [`AccountDetails`] shape.
    pub fn account_details(&self) -> Result<AccountDetails, BadRequestError> {
        let iban = present(&self.iban);
        let account_number = present(&self.account_number);
        let sort_code = present(&self.sort_code);

        match (iban, account_number, sort_code) {
            (Some(iban), _, _) => Ok(AccountDetails::Iban {
                iban: iban.to_string(),
                bic: present(&self.bic).map(str::to_string),
            }),
            (None, Some(account_number), Some(sort_code)) => Ok(AccountDetails::SortCode {
                account_number: account_number.to_string(),
                sort_code: sort_code.to_string(),
            }),
            (None, Some(_), None) => Err(BadRequestError::InvalidAccountDetails(
                "account number given without sort code".to_string(),
            )),
            (None, None, Some(_)) => Err(BadRequestError::InvalidAccountDetails(
                "sort code given without account number".to_string(),
            )),
            (None, None, None) => Err(BadRequestError::InvalidAccountDetails(
                "expected an iban, or an account number with a sort code".to_string(),
            )),
        }
    }

    /// Currency implied by the details when none was given.
    pub fn resolved_currency(&self, details: &AccountDetails) -> Currency {
        self.currency.unwrap_or(match details {
            AccountDetails::Iban { .. } => Currency::Eur,
            AccountDetails::SortCode { .. } => Currency::Gbp,
        })
    }
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

/// A bank account the user registered for off-ramp payouts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteAccount {
    pub account_id: String,
    pub currency: Currency,
    pub account_name: String,
    pub main_beneficiary: bool,
    #[serde(flatten)]
    pub details: AccountDetails,
    pub created_at: String,
    pub updated_at: String,
}

/// Input for `POST /user/{userId}/bank-account/unblock`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUnblockAccountRequest {
    pub currency: Currency,
}

/// An account issued by Unblock that receives on-ramp deposits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnblockAccount {
    pub account_id: String,
    pub currency: Currency,
    pub account_name: Option<String>,
    #[serde(flatten)]
    pub details: AccountDetails,
    pub created_at: String,
    pub updated_at: String,
}

/// Input for the sandbox-only deposit simulation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulateDepositRequest {
    pub account_id: String,
    pub amount: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
}
