//! Wire types for `/user/{userId}/token-preferences`.

use serde::{Deserialize, Serialize};

use crate::shared::{Chain, Currency};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPreferenceBody {
    pub input_currency: Currency,
    pub output_currency: Currency,
    pub chain: Chain,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateTokenPreferencesBody {
    pub preferences: Vec<TokenPreferenceBody>,
}
