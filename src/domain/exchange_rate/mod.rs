//! Exchange rate domain: fiat-to-fiat conversion rates.

pub mod client;
pub mod wire;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::BadRequestError;
use crate::shared::Currency;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExchangeRate {
    pub base_currency: Currency,
    pub target_currency: Currency,
    /// Units of `target_currency` per one unit of `base_currency`.
    pub rate: Decimal,
}

impl ExchangeRate {
    /// Convert `amount` of the base currency into the target currency.
    pub fn convert(&self, amount: Decimal) -> Decimal {
        amount * self.rate
    }
}

/// Rates are only quoted between fiat currencies.
pub(crate) fn require_fiat(currency: Currency) -> Result<Currency, BadRequestError> {
    if currency.is_fiat() {
        Ok(currency)
    } else {
        Err(BadRequestError::CurrencyNotSupported(currency))
    }
}
