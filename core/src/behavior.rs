//! Profile-driven behavior model.
//!
//! Every magnitude in a synthetic statement comes from one of these
//! per-profile tables. The bounds are exact and load-bearing: the
//! scorer's bands were tuned against them, so changing a range
//! shifts the whole score distribution for that profile.

use crate::{profile::RiskProfile, rng::SimRng, types::Money};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Uniform draw in [base, base + spread).
fn draw(rng: &mut SimRng, base: u64, spread: u64) -> Money {
    Decimal::from(base + rng.next_u64_below(spread))
}

/// Opening balance band. Thins out as risk rises; the Fraud band
/// sits lowest of all — fraud accounts carry thin balances.
pub fn initial_balance(profile: RiskProfile, rng: &mut SimRng) -> Money {
    match profile {
        RiskProfile::Prime => draw(rng, 150_000, 50_000),
        RiskProfile::NearPrime => draw(rng, 80_000, 40_000),
        RiskProfile::MidRisk => draw(rng, 40_000, 30_000),
        RiskProfile::SubPrime => draw(rng, 20_000, 20_000),
        RiskProfile::Fraud => draw(rng, 5_000, 10_000),
    }
}

/// Salary credited on the 1st of each month.
///
/// Not monotone in risk: the Fraud band sits above SubPrime on
/// purpose. Fraud accounts often show deceptively moderate nominal
/// income — the fraud signal is velocity, not poverty.
pub fn monthly_income(profile: RiskProfile, rng: &mut SimRng) -> Money {
    match profile {
        RiskProfile::Prime => draw(rng, 180_000, 40_000),
        RiskProfile::NearPrime => draw(rng, 120_000, 30_000),
        RiskProfile::MidRisk => draw(rng, 90_000, 20_000),
        RiskProfile::SubPrime => draw(rng, 60_000, 20_000),
        RiskProfile::Fraud => draw(rng, 40_000, 30_000),
    }
}

/// Fixed EMI per profile, strictly increasing with risk. Riskier
/// borrowers carry heavier installments relative to income.
pub fn emi_amount(profile: RiskProfile) -> Money {
    match profile {
        RiskProfile::Prime => dec!(30_000),
        RiskProfile::NearPrime => dec!(40_000),
        RiskProfile::MidRisk => dec!(45_000),
        RiskProfile::SubPrime => dec!(50_000),
        RiskProfile::Fraud => dec!(55_000),
    }
}

/// Upper bound on discretionary spends for one day, strictly
/// increasing with risk. High-velocity chaotic spending is itself
/// a fraud signal.
pub fn daily_txn_count(profile: RiskProfile, rng: &mut SimRng) -> u64 {
    match profile {
        RiskProfile::Prime => 3 + rng.next_u64_below(3),
        RiskProfile::NearPrime => 4 + rng.next_u64_below(4),
        RiskProfile::MidRisk => 6 + rng.next_u64_below(4),
        RiskProfile::SubPrime => 8 + rng.next_u64_below(5),
        RiskProfile::Fraud => 15 + rng.next_u64_below(10),
    }
}

/// Single discretionary spend amount, strictly increasing with risk.
pub fn random_expense(profile: RiskProfile, rng: &mut SimRng) -> Money {
    match profile {
        RiskProfile::Prime => draw(rng, 1_000, 2_000),
        RiskProfile::NearPrime => draw(rng, 1_500, 3_000),
        RiskProfile::MidRisk => draw(rng, 2_000, 4_000),
        RiskProfile::SubPrime => draw(rng, 3_000, 5_000),
        RiskProfile::Fraud => draw(rng, 5_000, 10_000),
    }
}
