//! Inspection result
//!
//! The outcome of one inspection. Exactly two values are accepted; new
//! outcomes must be added here explicitly.

use serde::{Deserialize, Serialize};

/// Outcome of an inspection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InspectionResult {
    /// Equipment passed inspection (`OK`)
    #[serde(rename = "OK")]
    Pass,
    /// Equipment failed inspection (`NG`)
    #[serde(rename = "NG")]
    Fail,
}

impl InspectionResult {
    /// The literal code written to the log file
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Pass => "OK",
            Self::Fail => "NG",
        }
    }
}

impl std::fmt::Display for InspectionResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for InspectionResult {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "OK" => Ok(Self::Pass),
            "NG" => Ok(Self::Fail),
            _ => Err(format!("Invalid result: {}. Use: OK, NG", s.trim())),
        }
    }
}
