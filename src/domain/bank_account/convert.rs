//! Conversions between bank account DTOs and wire types.
//!
//! Only the variant-specific fields are renamed; `currency` passes through.

use super::wire::{
    AccountDetailsBody, CreateRemoteAccountBody, CreateUnblockAccountBody,
    RemoteAccountResponse, SimulateDepositBody, UnblockAccountResponse,
};
use super::{
    AccountDetails, CreateRemoteAccountRequest, CreateUnblockAccountRequest, RemoteAccount,
    SimulateDepositRequest, UnblockAccount,
};
use crate::error::BadRequestError;

impl From<AccountDetails> for AccountDetailsBody {
    fn from(d: AccountDetails) -> Self {
        match d {
            AccountDetails::Iban { iban, bic } => Self::Iban { iban, bic },
            AccountDetails::SortCode {
                account_number,
                sort_code,
            } => Self::SortCode {
                account_number,
                sort_code,
            },
        }
    }
}

impl From<AccountDetailsBody> for AccountDetails {
    fn from(d: AccountDetailsBody) -> Self {
        match d {
            AccountDetailsBody::Iban { iban, bic } => Self::Iban { iban, bic },
            AccountDetailsBody::SortCode {
                account_number,
                sort_code,
            } => Self::SortCode {
                account_number,
                sort_code,
            },
        }
    }
}

impl TryFrom<&CreateRemoteAccountRequest> for CreateRemoteAccountBody {
    type Error = BadRequestError;

    fn try_from(r: &CreateRemoteAccountRequest) -> Result<Self, Self::Error> {
        let details = r.account_details()?;
        Ok(Self {
            currency: r.resolved_currency(&details),
            account_name: r.account_name.clone(),
            main_beneficiary: r.main_beneficiary,
            details: details.into(),
        })
    }
}

impl From<RemoteAccountResponse> for RemoteAccount {
    fn from(r: RemoteAccountResponse) -> Self {
        Self {
            account_id: r.uuid,
            currency: r.currency,
            account_name: r.account_name,
            main_beneficiary: r.main_beneficiary,
            details: r.details.into(),
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}

impl From<&CreateUnblockAccountRequest> for CreateUnblockAccountBody {
    fn from(r: &CreateUnblockAccountRequest) -> Self {
        Self {
            currency: r.currency,
        }
    }
}

impl From<UnblockAccountResponse> for UnblockAccount {
    fn from(r: UnblockAccountResponse) -> Self {
        Self {
            account_id: r.uuid,
            currency: r.currency,
            account_name: r.account_name,
            details: r.details.into(),
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}

impl From<&SimulateDepositRequest> for SimulateDepositBody {
    fn from(r: &SimulateDepositRequest) -> Self {
        Self {
            account_uuid: r.account_id.clone(),
            amount: r.amount,
            reference: r.reference.clone(),
        }
    }
}
