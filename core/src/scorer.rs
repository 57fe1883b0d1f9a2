//! Rule-based credit scoring.
//!
//! Base 500, seven independent band contributions plus the anomaly
//! penalty, clamped to [300, 900]. Within a factor the bands are
//! ordered first-match-wins comparisons, not disjoint ranges —
//! evaluation order is part of the contract.

use crate::features::FeatureVector;
use rust_decimal_macros::dec;

const BASE_SCORE: i32 = 500;
const MIN_SCORE: i32 = 300;
const MAX_SCORE: i32 = 900;

/// Map a feature vector to a score in [300, 900].
pub fn score(features: &FeatureVector) -> i32 {
    let mut score = BASE_SCORE;

    score += income_score(features);
    score += stability_score(features);
    score += expense_score(features);
    score += emi_score(features);
    score += balance_score(features);
    score += bounce_score(features);
    score += vintage_score(features);
    score += fraud_penalty(features);

    score.clamp(MIN_SCORE, MAX_SCORE)
}

/// Repayment capacity.
fn income_score(f: &FeatureVector) -> i32 {
    let income = f.avg_monthly_income;
    if income >= dec!(150_000) {
        return 120;
    }
    if income >= dec!(100_000) {
        return 80;
    }
    if income >= dec!(60_000) {
        return 40;
    }
    -40
}

/// Income stability — coefficient of variation, lower is steadier.
fn stability_score(f: &FeatureVector) -> i32 {
    let cv = f.income_cv;
    if cv < dec!(0.10) {
        return 40;
    }
    if cv < dec!(0.20) {
        return 20;
    }
    -30
}

/// Spending discipline.
fn expense_score(f: &FeatureVector) -> i32 {
    let ratio = f.expense_ratio;
    if ratio <= dec!(0.50) {
        return 80;
    }
    if ratio <= dec!(0.65) {
        return 40;
    }
    if ratio <= dec!(0.80) {
        return 0;
    }
    -60
}

/// Debt burden.
fn emi_score(f: &FeatureVector) -> i32 {
    let ratio = f.emi_ratio;
    if ratio <= dec!(0.30) {
        return 70;
    }
    if ratio <= dec!(0.40) {
        return 30;
    }
    if ratio <= dec!(0.50) {
        return -20;
    }
    -80
}

/// Liquidity buffer.
fn balance_score(f: &FeatureVector) -> i32 {
    let balance = f.avg_monthly_balance;
    if balance >= dec!(100_000) {
        return 60;
    }
    if balance >= dec!(50_000) {
        return 30;
    }
    if balance >= dec!(20_000) {
        return 0;
    }
    -40
}

/// Repayment trust.
fn bounce_score(f: &FeatureVector) -> i32 {
    match f.bounce_count {
        0 => 100,
        1 => 40,
        2..=3 => -50,
        _ => -120,
    }
}

/// Credit maturity.
fn vintage_score(f: &FeatureVector) -> i32 {
    let months = f.account_age_months;
    if months >= 60 {
        return 60;
    }
    if months >= 36 {
        return 40;
    }
    if months >= 12 {
        return 20;
    }
    -30
}

/// Fraud guardrail — the flag is set by an external anomaly model.
fn fraud_penalty(f: &FeatureVector) -> i32 {
    if f.anomaly_detected {
        -150
    } else {
        0
    }
}
