//! Process domain: status of on-ramp and off-ramp transfers.

pub mod client;
pub mod wire;

use serde::{Deserialize, Serialize};

use self::wire::ProcessResponse;

/// Direction of a ramp process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProcessDirection {
    Onramp,
    Offramp,
}

impl ProcessDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Onramp => "onramp",
            Self::Offramp => "offramp",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessStatus {
    pub process_id: String,
    pub direction: ProcessDirection,
    pub status: String,
    pub created_at: String,
    pub updated_at: String,
}

impl ProcessStatus {
    pub(crate) fn from_wire(direction: ProcessDirection, r: ProcessResponse) -> Self {
        Self {
            process_id: r.uuid,
            direction,
            status: r.status,
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}
