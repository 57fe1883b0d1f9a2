//! Single-pass feature extraction.
//!
//! The accumulator folds a transaction stream into running
//! aggregates — no buffering of the sequence, no backward lookups.
//! Memory is bounded by the number of distinct income months, not
//! the transaction count.
//!
//! Every degenerate case (no transactions, zero income, non-positive
//! variance) finalizes to a zero, never an error.

use crate::{
    transaction::{Transaction, TransactionDirection, TransactionNature},
    types::Money,
};
use chrono::{Datelike, NaiveDate};
use rust_decimal::{Decimal, MathematicalOps, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The fixed underwriting feature set for one account-year.
/// Built once from a complete statement, immutable afterwards,
/// consumed by the scorer.
///
///   avg_monthly_income  — repayment capacity
///   income_cv           — income stability
///   expense_ratio       — spending discipline
///   emi_ratio           — debt burden
///   avg_monthly_balance — liquidity
///   bounce_count        — repayment trust
///   account_age_months  — credit maturity
///   anomaly_detected    — fraud guardrail (external)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    pub avg_monthly_income: Money,
    pub income_cv: Money,
    pub expense_ratio: Money,
    pub emi_ratio: Money,
    pub avg_monthly_balance: Money,
    pub bounce_count: u32,
    pub account_age_months: u32,
    /// Always false out of this pipeline. The anomaly model is an
    /// external collaborator; callers annotate before scoring.
    pub anomaly_detected: bool,
}

impl FeatureVector {
    /// Annotate with the external anomaly model's verdict.
    pub fn with_anomaly(mut self, anomaly_detected: bool) -> Self {
        self.anomaly_detected = anomaly_detected;
        self
    }
}

/// Folds transactions into running aggregates. Feed every
/// transaction to [`accept`](Self::accept) exactly once, in order,
/// then call [`finish`](Self::finish).
#[derive(Debug, Default)]
pub struct FeatureAccumulator {
    total_income: Money,
    total_expenses: Money,
    total_emi: Money,
    /// Income keyed by month-of-year (1–12). Same-month income from
    /// different years merges into one bucket — acceptable for the
    /// one-year window this feeds on.
    monthly_income: BTreeMap<u32, Money>,
    balance_sum: Money,
    balance_count: u64,
    bounce_count: u32,
    first_date: Option<NaiveDate>,
    last_date: Option<NaiveDate>,
}

impl FeatureAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one transaction into the aggregates.
    pub fn accept(&mut self, txn: &Transaction) {
        let date = txn.date();
        if self.first_date.map_or(true, |d| date < d) {
            self.first_date = Some(date);
        }
        if self.last_date.map_or(true, |d| date > d) {
            self.last_date = Some(date);
        }

        // Average balance is over all transactions, not per calendar
        // month — the balance after each movement is the liquidity
        // sample.
        self.balance_sum += txn.balance_after();
        self.balance_count += 1;

        if txn.direction() == TransactionDirection::Inflow
            && matches!(
                txn.nature(),
                TransactionNature::Salary | TransactionNature::BusinessIncome
            )
        {
            self.total_income += txn.amount();
            *self
                .monthly_income
                .entry(date.month())
                .or_insert(Money::ZERO) += txn.amount();
        }

        // EMI total is direction-agnostic.
        if txn.nature() == TransactionNature::Emi {
            self.total_emi += txn.amount();
        }

        // "True" expenses: discipline spending only — debt service
        // and statutory/penalty outflows are excluded.
        if txn.direction() == TransactionDirection::Outflow
            && !matches!(
                txn.nature(),
                TransactionNature::Emi
                    | TransactionNature::BankCharges
                    | TransactionNature::TaxPayment
                    | TransactionNature::GstPayment
            )
        {
            self.total_expenses += txn.amount();
        }

        if txn.nature() == TransactionNature::BankCharges {
            self.bounce_count += 1;
        }
    }

    /// Finalize into the feature vector.
    pub fn finish(self) -> FeatureVector {
        let avg_monthly_income = if self.monthly_income.is_empty() {
            Money::ZERO
        } else {
            round2(self.total_income / Decimal::from(self.monthly_income.len() as u64))
        };

        let income_cv = coefficient_of_variation(&self.monthly_income);
        let expense_ratio = ratio4(self.total_expenses, self.total_income);
        let emi_ratio = ratio4(self.total_emi, self.total_income);

        let avg_monthly_balance = if self.balance_count == 0 {
            Money::ZERO
        } else {
            round2(self.balance_sum / Decimal::from(self.balance_count))
        };

        let account_age_months = match (self.first_date, self.last_date) {
            (Some(first), Some(last)) => whole_months_between(first, last),
            _ => 0,
        };

        FeatureVector {
            avg_monthly_income,
            income_cv,
            expense_ratio,
            emi_ratio,
            avg_monthly_balance,
            bounce_count: self.bounce_count,
            account_age_months,
            anomaly_detected: false,
        }
    }
}

/// Drain a full statement into a feature vector in one pass.
pub fn accumulate<I>(transactions: I) -> FeatureVector
where
    I: IntoIterator<Item = Transaction>,
{
    let mut acc = FeatureAccumulator::new();
    for txn in transactions {
        acc.accept(&txn);
    }
    acc.finish()
}

/// Population standard deviation over mean, as sqrt(E[x²] − E[x]²).
/// Floored at zero for non-positive variance so a rounding wobble
/// never turns into a negative-sqrt failure.
fn coefficient_of_variation(buckets: &BTreeMap<u32, Money>) -> Money {
    if buckets.is_empty() {
        return Money::ZERO;
    }
    let n = Decimal::from(buckets.len() as u64);
    let mut sum = Money::ZERO;
    let mut sum_sq = Money::ZERO;
    for value in buckets.values() {
        sum += *value;
        sum_sq += *value * *value;
    }
    let mean = sum / n;
    if mean.is_zero() {
        return Money::ZERO;
    }
    let variance = sum_sq / n - mean * mean;
    if variance <= Money::ZERO {
        return Money::ZERO;
    }
    match variance.sqrt() {
        Some(std_dev) => round4(std_dev / mean),
        None => Money::ZERO,
    }
}

/// Whole calendar months between two dates: month delta, minus one
/// when the closing day-of-month hasn't been reached yet.
fn whole_months_between(first: NaiveDate, last: NaiveDate) -> u32 {
    if last < first {
        return 0;
    }
    let mut months =
        (last.year() - first.year()) * 12 + last.month() as i32 - first.month() as i32;
    if last.day() < first.day() {
        months -= 1;
    }
    months.max(0) as u32
}

fn round2(value: Money) -> Money {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

fn round4(value: Money) -> Money {
    value.round_dp_with_strategy(4, RoundingStrategy::MidpointAwayFromZero)
}

/// Numerator over denominator at 4 decimals half-up, 0 on a zero
/// denominator.
fn ratio4(numerator: Money, denominator: Money) -> Money {
    if denominator.is_zero() {
        Money::ZERO
    } else {
        round4(numerator / denominator)
    }
}
