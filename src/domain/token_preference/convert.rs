//! Conversions between token preference DTOs and wire types.

use super::wire::{TokenPreferenceBody, UpdateTokenPreferencesBody};
use super::TokenPreference;
use crate::error::BadRequestError;

impl From<&TokenPreference> for TokenPreferenceBody {
    fn from(p: &TokenPreference) -> Self {
        Self {
            input_currency: p.input_currency,
            output_currency: p.output_currency,
            chain: p.chain,
        }
    }
}

impl From<TokenPreferenceBody> for TokenPreference {
    fn from(p: TokenPreferenceBody) -> Self {
        Self {
            input_currency: p.input_currency,
            output_currency: p.output_currency,
            chain: p.chain,
        }
    }
}

impl TryFrom<&[TokenPreference]> for UpdateTokenPreferencesBody {
    type Error = BadRequestError;

    fn try_from(preferences: &[TokenPreference]) -> Result<Self, Self::Error> {
        let preferences = preferences
            .iter()
            .map(|p| p.validate().map(|()| TokenPreferenceBody::from(p)))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { preferences })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::{Chain, Currency};
    use serde_json::json;

    #[test]
    fn test_update_body_shape() {
        let prefs = [TokenPreference {
            input_currency: Currency::Eur,
            output_currency: Currency::Eure,
            chain: Chain::Celo,
        }];
        let body = UpdateTokenPreferencesBody::try_from(&prefs[..]).unwrap();
        assert_eq!(
            serde_json::to_value(body).unwrap(),
            json!({
                "preferences": [
                    {"input_currency": "EUR", "output_currency": "EURe", "chain": "celo"}
                ]
            })
        );
    }

    #[test]
    fn test_one_bad_preference_rejects_all() {
        let prefs = [
            TokenPreference {
                input_currency: Currency::Eur,
                output_currency: Currency::Usdc,
                chain: Chain::Polygon,
            },
            TokenPreference {
                input_currency: Currency::Usdc,
                output_currency: Currency::Usdt,
                chain: Chain::Polygon,
            },
        ];
        assert!(matches!(
            UpdateTokenPreferencesBody::try_from(&prefs[..]),
            Err(BadRequestError::CurrencyMismatch { .. })
        ));
    }
}
