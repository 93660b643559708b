//! Wire type for `GET /exchange-rates`.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExchangeRateResponse {
    #[serde(with = "rust_decimal::serde::float")]
    pub exchange_rate: Decimal,
}
