//! The bank transaction value object and its closed vocabularies.
//!
//! RULE: amounts are magnitudes, never signed. Direction carries the
//! sign semantics. `balance_after` is always derived in the
//! constructor from `balance_before` + direction + amount, so the
//! two balances can never diverge.

use crate::types::{AccountId, Money};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionDirection {
    Inflow,
    Outflow,
}

/// Closed set of business natures. The simulator emits only five of
/// these; the rest exist for statements ingested from collaborators
/// and for the accumulator's expense filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionNature {
    Salary,
    BusinessIncome,
    Emi,
    Rent,
    Utilities,
    GstPayment,
    TaxPayment,
    CardSpend,
    UpiTransfer,
    CashWithdrawal,
    LoanDisbursal,
    BankCharges,
    Refund,
    InterestCredit,
    Other,
}

impl TransactionNature {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Salary => "salary",
            Self::BusinessIncome => "business_income",
            Self::Emi => "emi",
            Self::Rent => "rent",
            Self::Utilities => "utilities",
            Self::GstPayment => "gst_payment",
            Self::TaxPayment => "tax_payment",
            Self::CardSpend => "card_spend",
            Self::UpiTransfer => "upi_transfer",
            Self::CashWithdrawal => "cash_withdrawal",
            Self::LoanDisbursal => "loan_disbursal",
            Self::BankCharges => "bank_charges",
            Self::Refund => "refund",
            Self::InterestCredit => "interest_credit",
            Self::Other => "other",
        }
    }
}

/// Payment rail. The simulator only uses Upi, Neft and Internal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionChannel {
    Upi,
    Neft,
    Internal,
    Cash,
    Card,
}

/// One bank transaction. Immutable once constructed — accessors
/// only, no setters. The id is unique per construction and carries
/// no business meaning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    txn_id: String,
    account_id: AccountId,
    date: NaiveDate,
    direction: TransactionDirection,
    nature: TransactionNature,
    channel: TransactionChannel,
    amount: Money,
    balance_before: Money,
    balance_after: Money,
    description: String,
}

impl Transaction {
    /// Build a transaction and derive its closing balance.
    ///
    /// Panics if `amount` is negative — callers express debits via
    /// `Outflow`, never via a negative amount.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        account_id: &str,
        date: NaiveDate,
        direction: TransactionDirection,
        nature: TransactionNature,
        channel: TransactionChannel,
        amount: Money,
        balance_before: Money,
        description: &str,
    ) -> Self {
        assert!(
            amount >= Money::ZERO,
            "transaction amount must be non-negative, got {amount}"
        );
        let balance_after = match direction {
            TransactionDirection::Inflow => balance_before + amount,
            TransactionDirection::Outflow => balance_before - amount,
        };
        Self {
            txn_id: Uuid::new_v4().to_string(),
            account_id: account_id.to_string(),
            date,
            direction,
            nature,
            channel,
            amount,
            balance_before,
            balance_after,
            description: description.to_string(),
        }
    }

    pub fn txn_id(&self) -> &str {
        &self.txn_id
    }

    pub fn account_id(&self) -> &str {
        &self.account_id
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn direction(&self) -> TransactionDirection {
        self.direction
    }

    pub fn nature(&self) -> TransactionNature {
        self.nature
    }

    pub fn channel(&self) -> TransactionChannel {
        self.channel
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn balance_before(&self) -> Money {
        self.balance_before
    }

    pub fn balance_after(&self) -> Money {
        self.balance_after
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}
