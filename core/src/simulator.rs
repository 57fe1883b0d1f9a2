//! One-year statement generation.
//!
//! The generator walks 365 consecutive days in order and emits
//! transactions lazily, one day buffered at a time. The running
//! balance is exclusively owned by the generator for the duration
//! of the run.
//!
//! DAY SCHEDULE (fixed, never reordered):
//!   1. Day-of-month 1:  salary credit (Inflow/Salary/Neft).
//!   2. Day-of-month 10: EMI debit if the balance covers it, else a
//!      flat bounce charge — an EMI is never partially paid.
//!   3. Up to `daily_txn_count` discretionary spends, each gated on
//!      balance sufficiency immediately before emission.
//!
//! Balance never goes negative: every debit is gated before it is
//! emitted, the EMI branch substitutes a bounce charge instead of
//! failing, and the bounce charge itself is capped at the remaining
//! balance. Running out of balance only shortens the day — it is a
//! deliberate outcome, never an error.

use crate::{
    behavior,
    error::{SimError, SimResult},
    profile::RiskProfile,
    rng::SimRng,
    transaction::{Transaction, TransactionChannel, TransactionDirection, TransactionNature},
    types::{AccountId, Money},
};
use chrono::{Datelike, Days, NaiveDate};
use rust_decimal_macros::dec;
use std::collections::VecDeque;

const SIMULATION_DAYS: u64 = 365;

/// Flat penalty charged in place of an EMI the balance can't cover,
/// capped at whatever balance remains.
const EMI_BOUNCE_FEE: Money = dec!(500);

/// Lazy, finite, restartable stream of one year's transactions.
///
/// The RNG is seeded from the identity, so two generators built from
/// the same (identity, account, start date) replay identical
/// sequences.
pub struct StatementGenerator {
    account_id: AccountId,
    profile: RiskProfile,
    rng: SimRng,
    balance: Money,
    current_day: NaiveDate,
    days_remaining: u64,
    pending: VecDeque<Transaction>,
}

impl StatementGenerator {
    /// Build a generator for one identity over 365 days from
    /// `start_date`. Fails only when the window overflows the
    /// calendar.
    pub fn new(identity: &str, account_id: &str, start_date: NaiveDate) -> SimResult<Self> {
        start_date
            .checked_add_days(Days::new(SIMULATION_DAYS))
            .ok_or(SimError::InvalidDateRange { start: start_date })?;

        let profile = RiskProfile::resolve(identity);
        let mut rng = SimRng::for_identity(identity);
        let balance = behavior::initial_balance(profile, &mut rng);

        log::debug!(
            "statement run: account={account_id} profile={} start={start_date} opening_balance={balance}",
            profile.name()
        );

        Ok(Self {
            account_id: account_id.to_string(),
            profile,
            rng,
            balance,
            current_day: start_date,
            days_remaining: SIMULATION_DAYS,
            pending: VecDeque::new(),
        })
    }

    pub fn profile(&self) -> RiskProfile {
        self.profile
    }

    /// Generate all of one day's transactions into the pending queue.
    fn generate_day(&mut self, date: NaiveDate) {
        if date.day() == 1 {
            let income = behavior::monthly_income(self.profile, &mut self.rng);
            self.emit(
                date,
                TransactionDirection::Inflow,
                TransactionNature::Salary,
                TransactionChannel::Neft,
                income,
                "Monthly Income",
            );
        }

        if date.day() == 10 {
            let emi = behavior::emi_amount(self.profile);
            if self.balance >= emi {
                self.emit(
                    date,
                    TransactionDirection::Outflow,
                    TransactionNature::Emi,
                    TransactionChannel::Internal,
                    emi,
                    "Loan EMI",
                );
            } else {
                // The penalty is capped at the remaining balance —
                // the bank takes what is there, the account is never
                // driven negative.
                let fee = EMI_BOUNCE_FEE.min(self.balance);
                log::debug!("{date} EMI bounce: balance {} < emi {emi}, fee {fee}", self.balance);
                self.emit(
                    date,
                    TransactionDirection::Outflow,
                    TransactionNature::BankCharges,
                    TransactionChannel::Internal,
                    fee,
                    "EMI Bounce Charge",
                );
            }
        }

        // Discretionary spends: the drawn count is an upper bound,
        // cut off at the first spend the balance can't cover.
        let count = behavior::daily_txn_count(self.profile, &mut self.rng);
        for _ in 0..count {
            let spend = behavior::random_expense(self.profile, &mut self.rng);
            if self.balance <= spend {
                break;
            }
            self.emit(
                date,
                TransactionDirection::Outflow,
                TransactionNature::UpiTransfer,
                TransactionChannel::Upi,
                spend,
                "Daily Expense",
            );
        }
    }

    /// Emit one transaction at the current balance and apply its
    /// effect. `balance_before` is snapshotted here; `balance_after`
    /// is derived by the Transaction constructor and becomes the new
    /// running balance.
    fn emit(
        &mut self,
        date: NaiveDate,
        direction: TransactionDirection,
        nature: TransactionNature,
        channel: TransactionChannel,
        amount: Money,
        description: &str,
    ) {
        let txn = Transaction::new(
            &self.account_id,
            date,
            direction,
            nature,
            channel,
            amount,
            self.balance,
            description,
        );
        self.balance = txn.balance_after();
        self.pending.push_back(txn);
    }
}

impl Iterator for StatementGenerator {
    type Item = Transaction;

    fn next(&mut self) -> Option<Transaction> {
        loop {
            if let Some(txn) = self.pending.pop_front() {
                return Some(txn);
            }
            if self.days_remaining == 0 {
                return None;
            }
            let date = self.current_day;
            // Window validated at construction; 365 increments fit.
            self.current_day = date
                .succ_opt()
                .expect("date range validated at construction");
            self.days_remaining -= 1;
            self.generate_day(date);
        }
    }
}
