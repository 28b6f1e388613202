use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::common::*;

/// Base account holding an identifier, a holder name and a balance.
///
/// Identity fields are fixed at construction; the balance only changes through
/// deposits, withdrawals and transfers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Account {
    account_number: String,
    account_holder: String,
    balance: f64,
}

impl Account {
    /// Creates a new account with a zero balance.
    pub fn new(account_number: impl Into<String>, account_holder: impl Into<String>) -> Self {
        Self {
            account_number: account_number.into(),
            account_holder: account_holder.into(),
            balance: 0.0,
        }
    }

    /// Sets the starting balance. Negative values are accepted.
    pub fn with_balance(mut self, balance: f64) -> Self {
        self.balance = balance;
        self
    }

    pub fn account_number(&self) -> &str {
        &self.account_number
    }

    pub fn account_holder(&self) -> &str {
        &self.account_holder
    }

    pub fn balance(&self) -> f64 {
        self.balance
    }

    pub(crate) fn credit(&mut self, amount: f64) {
        self.balance += amount;
        debug!(account = %self.account_number, amount, balance = self.balance, "deposit applied");
    }

    pub(crate) fn debit(&mut self, amount: f64) {
        self.balance -= amount;
        debug!(account = %self.account_number, amount, balance = self.balance, "withdrawal applied");
    }

    /// Report shared by every variant.
    pub(crate) fn base_details(&self) -> String {
        format!(
            "Account Details for Account (ID: {}):\n\tHolder: {}\n\tBalance: {}",
            self.account_number,
            self.account_holder,
            format_money(self.balance)
        )
    }
}

impl BankAccount for Account {
    fn base(&self) -> &Account {
        self
    }

    fn base_mut(&mut self) -> &mut Account {
        self
    }

    fn kind(&self) -> AccountKind {
        AccountKind::Basic
    }

    /// Soft rule: an overdrawing request is declined without an error.
    fn withdraw(&mut self, amount: f64) -> WithdrawResult {
        if self.balance - amount >= 0.0 {
            self.debit(amount);
            Ok(Withdrawal::Applied)
        } else {
            debug!(account = %self.account_number, amount, balance = self.balance, "withdrawal declined");
            Ok(Withdrawal::Declined)
        }
    }
}

impl std::fmt::Display for Account {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.details())
    }
}
