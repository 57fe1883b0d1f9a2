//! Statement structure tests: balance chaining, the day schedule,
//! and debit gating over a full 365-day run.

use chrono::{Datelike, Days, NaiveDate};
use creditsim_core::{
    generate_one_year_statement,
    transaction::{Transaction, TransactionChannel, TransactionDirection, TransactionNature},
    types::Money,
};
use rust_decimal_macros::dec;

fn start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date")
}

fn full_run(identity: &str) -> Vec<Transaction> {
    generate_one_year_statement(identity, "acc-1", start())
        .expect("generator")
        .collect()
}

#[test]
fn balance_chain_never_breaks() {
    let txns = full_run("ABCPE1234B");
    assert!(!txns.is_empty(), "Expected a non-empty statement");

    let mut prev_after: Option<Money> = None;
    for (i, txn) in txns.iter().enumerate() {
        let expected_after = match txn.direction() {
            TransactionDirection::Inflow => txn.balance_before() + txn.amount(),
            TransactionDirection::Outflow => txn.balance_before() - txn.amount(),
        };
        assert_eq!(
            txn.balance_after(),
            expected_after,
            "balance_after not derived from before+direction+amount at entry {i}"
        );
        if let Some(prev) = prev_after {
            assert_eq!(
                txn.balance_before(),
                prev,
                "Balance chain broke at entry {i}: before={} prev_after={prev}",
                txn.balance_before()
            );
        }
        prev_after = Some(txn.balance_after());
    }
}

#[test]
fn balance_never_goes_negative() {
    for identity in ["ABCPE1234B", "XXXXX0000J", "FXZPQ9821Z"] {
        for txn in full_run(identity) {
            assert!(
                txn.balance_after() >= Money::ZERO,
                "Negative balance {} on {} for {identity}",
                txn.balance_after(),
                txn.date()
            );
        }
    }
}

#[test]
fn amounts_are_never_negative() {
    for txn in full_run("FXZPQ9821Z") {
        assert!(
            txn.amount() >= Money::ZERO,
            "Negative amount {} on {}",
            txn.amount(),
            txn.date()
        );
    }
}

#[test]
fn salary_lands_on_the_first_of_each_month() {
    let txns = full_run("ABCPE1234B");
    let salaries: Vec<&Transaction> = txns
        .iter()
        .filter(|t| t.nature() == TransactionNature::Salary)
        .collect();

    assert_eq!(salaries.len(), 12, "Expected 12 salary credits in one year");
    for salary in salaries {
        assert_eq!(salary.date().day(), 1, "Salary off-schedule on {}", salary.date());
        assert_eq!(salary.direction(), TransactionDirection::Inflow);
        assert_eq!(salary.channel(), TransactionChannel::Neft);
    }
}

#[test]
fn emi_or_bounce_on_the_tenth_of_each_month() {
    let txns = full_run("ABCPE1234B");
    let debt_events: Vec<&Transaction> = txns
        .iter()
        .filter(|t| {
            matches!(
                t.nature(),
                TransactionNature::Emi | TransactionNature::BankCharges
            )
        })
        .collect();

    assert_eq!(
        debt_events.len(),
        12,
        "Expected exactly one EMI-or-bounce event per month"
    );
    for event in debt_events {
        assert_eq!(event.date().day(), 10, "Debt event off-schedule on {}", event.date());
        assert_eq!(event.direction(), TransactionDirection::Outflow);
        assert_eq!(event.channel(), TransactionChannel::Internal);
    }
}

#[test]
fn statement_stays_inside_the_365_day_window() {
    let txns = full_run("ABCPE1234B");
    let last_day = start() + Days::new(364);
    for txn in &txns {
        assert!(
            txn.date() >= start() && txn.date() <= last_day,
            "Transaction outside window on {}",
            txn.date()
        );
    }
    // Start date is a 1st, so the salary pins the first entry.
    assert_eq!(txns[0].date(), start());
}

#[test]
fn simulator_only_emits_its_three_channels() {
    for txn in full_run("XXXXX0000J") {
        assert!(
            matches!(
                txn.channel(),
                TransactionChannel::Upi | TransactionChannel::Neft | TransactionChannel::Internal
            ),
            "Unexpected channel {:?} on {}",
            txn.channel(),
            txn.date()
        );
    }
}

#[test]
fn bounce_fee_is_capped_by_remaining_balance() {
    // A mid-risk year spends itself to near zero before every EMI
    // date, so day-10 bounces land on a balance far below the flat
    // 500 fee. The charge must take only what is there.
    let txns = full_run("XXXXX0000J");
    let bounces: Vec<&Transaction> = txns
        .iter()
        .filter(|t| t.nature() == TransactionNature::BankCharges)
        .collect();

    assert!(!bounces.is_empty(), "Expected at least one bounce in a mid-risk year");
    for bounce in bounces {
        assert!(
            bounce.amount() <= dec!(500),
            "Bounce fee {} above the flat 500 on {}",
            bounce.amount(),
            bounce.date()
        );
        if bounce.balance_before() < dec!(500) {
            assert_eq!(
                bounce.amount(),
                bounce.balance_before(),
                "Fee not capped at remaining balance on {}",
                bounce.date()
            );
        }
        assert!(
            bounce.balance_after() >= Money::ZERO,
            "Bounce drove balance negative ({}) on {}",
            bounce.balance_after(),
            bounce.date()
        );
    }
}

#[test]
fn invalid_date_range_fails_fast() {
    let result = generate_one_year_statement("ABCPE1234B", "acc-1", NaiveDate::MAX);
    assert!(result.is_err(), "Expected InvalidDateRange near NaiveDate::MAX");
}

#[test]
fn prime_daily_spend_count_stays_in_band() {
    // Prime draws a bound of 3..=5 discretionary spends per day.
    // Gating can shorten a day, never lengthen it.
    let txns = full_run("ABCPE1234B");
    let mut per_day: std::collections::BTreeMap<NaiveDate, u32> = std::collections::BTreeMap::new();
    for txn in txns
        .iter()
        .filter(|t| t.nature() == TransactionNature::UpiTransfer)
    {
        *per_day.entry(txn.date()).or_insert(0) += 1;
    }
    for (date, count) in per_day {
        assert!(count <= 5, "Prime emitted {count} spends on {date}, bound is 5");
    }
}
