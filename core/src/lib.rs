//! creditsim-core — synthetic bank-statement generation and
//! rule-based credit scoring.
//!
//! PIPELINE (fixed, documented, never reordered):
//!   1. Profile resolution   — identity string → risk profile
//!   2. Statement generation — 365-day lazy transaction stream
//!   3. Feature accumulation — single pass → feature vector
//!   4. Rule-based scoring   — feature vector → score in [300, 900]
//!
//! RULES:
//!   - All randomness flows through SimRng, seeded from the identity.
//!     Nothing in the pipeline may call a platform RNG.
//!   - Money is rust_decimal everywhere. Binary floats never touch
//!     a balance or an amount.
//!   - Stages communicate only through their output values. No stage
//!     reaches back into an earlier stage's state.

pub mod behavior;
pub mod error;
pub mod features;
pub mod profile;
pub mod rng;
pub mod scorer;
pub mod simulator;
pub mod transaction;
pub mod types;

use chrono::NaiveDate;

use crate::{
    error::SimResult,
    features::FeatureVector,
    simulator::StatementGenerator,
    transaction::Transaction,
};

/// Generate one year of synthetic transactions for an identity.
///
/// The returned generator is lazy and finite: it yields exactly the
/// transactions of 365 consecutive days starting at `start_date`, and
/// a second generator built from the same inputs replays an identical
/// sequence.
pub fn generate_one_year_statement(
    identity: &str,
    account_id: &str,
    start_date: NaiveDate,
) -> SimResult<StatementGenerator> {
    StatementGenerator::new(identity, account_id, start_date)
}

/// Reduce a transaction sequence to its underwriting feature vector.
/// Consumes the sequence exactly once, in order.
pub fn accumulate<I>(transactions: I) -> FeatureVector
where
    I: IntoIterator<Item = Transaction>,
{
    features::accumulate(transactions)
}

/// Score a feature vector. Callers wanting the fraud-guardrail
/// penalty annotate the vector via [`FeatureVector::with_anomaly`]
/// before calling — the anomaly model is an external collaborator,
/// never invoked from here.
pub fn score_from_features(features: &FeatureVector) -> i32 {
    scorer::score(features)
}
