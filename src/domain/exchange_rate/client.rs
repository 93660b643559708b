//! Exchange rates sub-client.

use crate::client::UnblockClient;
use crate::domain::exchange_rate::wire::ExchangeRateResponse;
use crate::domain::exchange_rate::{require_fiat, ExchangeRate};
use crate::error::SdkError;
use crate::http::{query_string, AuthMode};
use crate::shared::Currency;

pub struct ExchangeRates<'a> {
    pub(crate) client: &'a UnblockClient,
}

impl<'a> ExchangeRates<'a> {
    /// Current rate from `base` to `target`. Both must be fiat.
    pub async fn get(&self, base: Currency, target: Currency) -> Result<ExchangeRate, SdkError> {
        let base = require_fiat(base)?;
        let target = require_fiat(target)?;
        let path = format!(
            "/exchange-rates{}",
            query_string(&[
                ("base_currency", base.as_str()),
                ("target_currency", target.as_str()),
            ])
        );
        let resp: ExchangeRateResponse = self.client.http.get(&path, AuthMode::ApiKey).await?;
        Ok(ExchangeRate {
            base_currency: base,
            target_currency: target,
            rate: resp.exchange_rate,
        })
    }
}
