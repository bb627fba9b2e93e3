//! Operation keys accepted in a compute request body.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The five supported operations.
///
/// Keys are case-sensitive: `AI` is upper-case, the rest lower-case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OperationKind {
    #[serde(rename = "fibonacci")]
    Fibonacci,
    #[serde(rename = "prime")]
    Prime,
    #[serde(rename = "lcm")]
    Lcm,
    #[serde(rename = "hcf")]
    Hcf,
    #[serde(rename = "AI")]
    Ai,
}

impl OperationKind {
    pub const ALL: [OperationKind; 5] = [
        OperationKind::Fibonacci,
        OperationKind::Prime,
        OperationKind::Lcm,
        OperationKind::Hcf,
        OperationKind::Ai,
    ];

    /// The request body key for this operation
    pub fn key(self) -> &'static str {
        match self {
            OperationKind::Fibonacci => "fibonacci",
            OperationKind::Prime => "prime",
            OperationKind::Lcm => "lcm",
            OperationKind::Hcf => "hcf",
            OperationKind::Ai => "AI",
        }
    }
}

impl std::fmt::Display for OperationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for OperationKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OperationKind::ALL
            .into_iter()
            .find(|kind| kind.key() == s)
            .ok_or_else(|| s.to_string())
    }
}
