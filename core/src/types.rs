//! Shared primitive types used across the entire pipeline.

/// An opaque bank-account reference. The pipeline never inspects it.
pub type AccountId = String;

/// Exact decimal money. All amounts and balances use this alias so
/// binary floating point can never creep into a balance update.
pub type Money = rust_decimal::Decimal;
