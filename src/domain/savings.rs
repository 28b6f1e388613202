use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::account::Account;
use crate::domain::common::*;
use crate::errors::AccountError;

/// Account that refuses any withdrawal taking the balance below zero.
///
/// The interest rate is informational; it is shown in the report but never
/// applied to the balance.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SavingsAccount {
    #[serde(flatten)]
    base: Account,
    interest_rate: f64,
}

impl SavingsAccount {
    pub fn new(
        account_number: impl Into<String>,
        account_holder: impl Into<String>,
        balance: f64,
        interest_rate: f64,
    ) -> Self {
        Self {
            base: Account::new(account_number, account_holder).with_balance(balance),
            interest_rate,
        }
    }

    /// Fractional rate, e.g. `0.02` for 2%.
    pub fn interest_rate(&self) -> f64 {
        self.interest_rate
    }
}

impl BankAccount for SavingsAccount {
    fn base(&self) -> &Account {
        &self.base
    }

    fn base_mut(&mut self) -> &mut Account {
        &mut self.base
    }

    fn kind(&self) -> AccountKind {
        AccountKind::Savings
    }

    fn withdraw(&mut self, amount: f64) -> WithdrawResult {
        let available = self.base.balance();
        if available - amount >= 0.0 {
            self.base.debit(amount);
            Ok(Withdrawal::Applied)
        } else {
            debug!(account = %self.base.account_number(), amount, available, "insufficient funds");
            Err(AccountError::InsufficientFunds {
                requested: amount,
                available,
            })
        }
    }

    fn details(&self) -> String {
        format!(
            "{}\n\tInterest Rate: {}",
            self.base.base_details(),
            format_rate(self.interest_rate)
        )
    }
}

impl std::fmt::Display for SavingsAccount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.details())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_withdrawal_beyond_balance() {
        let mut savings = SavingsAccount::new("S123", "John Doe", 700.0, 0.02);
        let err = savings.withdraw(800.0).unwrap_err();
        assert_eq!(
            err,
            AccountError::InsufficientFunds {
                requested: 800.0,
                available: 700.0
            }
        );
        assert_eq!(savings.balance(), 700.0);
    }

    #[test]
    fn interest_rate_never_touches_balance() {
        let mut savings = SavingsAccount::new("S123", "John Doe", 1000.0, 0.02);
        savings.deposit(500.0);
        savings.withdraw(500.0).unwrap();
        assert_eq!(savings.balance(), 1000.0);
        assert_eq!(savings.interest_rate(), 0.02);
    }

    #[test]
    fn details_append_interest_rate() {
        let savings = SavingsAccount::new("S123", "John Doe", 1000.0, 0.02);
        let details = savings.details();
        assert!(details.starts_with("Account Details for Account (ID: S123):\n"));
        assert!(details.ends_with("\n\tInterest Rate: 2.00%"));
        assert_eq!(details.lines().count(), 4);
    }

    #[test]
    fn serializes_flat_with_rate() {
        let savings = SavingsAccount::new("S123", "John Doe", 1000.0, 0.02);
        let json = serde_json::to_value(&savings).unwrap();
        assert_eq!(json["account_number"], "S123");
        assert_eq!(json["interest_rate"], 0.02);
    }
}
