//! Wire type for `GET /process/{onramp|offramp}/{id}`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessResponse {
    pub uuid: String,
    pub status: String,
    pub created_at: String,
    pub updated_at: String,
}
