//! Token preference domain: which crypto token a user's fiat converts into
//! (and back), and on which chain.

pub mod client;
mod convert;
pub mod wire;

use serde::{Deserialize, Serialize};

use crate::error::BadRequestError;
use crate::shared::{Chain, Currency};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenPreference {
    pub input_currency: Currency,
    pub output_currency: Currency,
    pub chain: Chain,
}

impl TokenPreference {
    /// A preference must convert between one fiat and one crypto currency.
    pub fn validate(&self) -> Result<(), BadRequestError> {
        if self.input_currency.is_fiat() == self.output_currency.is_fiat() {
            return Err(BadRequestError::CurrencyMismatch {
                input: self.input_currency,
                output: self.output_currency,
            });
        }
        Ok(())
    }
}
