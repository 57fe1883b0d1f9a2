//! Risk profile resolution.
//!
//! An identity (a PAN-style string) maps to exactly one risk profile
//! via its last character. The partition covers the full character
//! space with no gaps: anything outside 'A'..='P' — lowercase,
//! digits, symbols — lands in Fraud.

use serde::{Deserialize, Serialize};

/// Coarse behavioral category, ordered lowest to highest risk.
/// Assigned once per identity and immutable for the run; drives
/// every synthetic-data magnitude range in the behavior model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskProfile {
    Prime,
    NearPrime,
    MidRisk,
    SubPrime,
    Fraud,
}

impl RiskProfile {
    /// Resolve an identity to its risk profile.
    ///
    /// Case-sensitive on the last character. An empty identity falls
    /// back to MidRisk — an explicit default, not an error.
    pub fn resolve(identity: &str) -> Self {
        let Some(last) = identity.chars().last() else {
            return Self::MidRisk;
        };
        match last {
            'A'..='C' => Self::Prime,
            'D'..='F' => Self::NearPrime,
            'G'..='J' => Self::MidRisk,
            'K'..='P' => Self::SubPrime,
            _ => Self::Fraud,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Prime => "prime",
            Self::NearPrime => "near_prime",
            Self::MidRisk => "mid_risk",
            Self::SubPrime => "sub_prime",
            Self::Fraud => "fraud",
        }
    }
}
