use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::account::Account;
use crate::domain::common::*;
use crate::errors::AccountError;

/// Account whose balance may drop to `-overdraft_limit` but no further.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CurrentAccount {
    #[serde(flatten)]
    base: Account,
    overdraft_limit: f64,
}

impl CurrentAccount {
    pub fn new(
        account_number: impl Into<String>,
        account_holder: impl Into<String>,
        balance: f64,
        overdraft_limit: f64,
    ) -> Self {
        Self {
            base: Account::new(account_number, account_holder).with_balance(balance),
            overdraft_limit,
        }
    }

    pub fn overdraft_limit(&self) -> f64 {
        self.overdraft_limit
    }
}

impl BankAccount for CurrentAccount {
    fn base(&self) -> &Account {
        &self.base
    }

    fn base_mut(&mut self) -> &mut Account {
        &mut self.base
    }

    fn kind(&self) -> AccountKind {
        AccountKind::Current
    }

    fn withdraw(&mut self, amount: f64) -> WithdrawResult {
        let balance = self.base.balance();
        if balance - amount >= -self.overdraft_limit {
            self.base.debit(amount);
            Ok(Withdrawal::Applied)
        } else {
            debug!(
                account = %self.base.account_number(),
                amount,
                balance,
                overdraft_limit = self.overdraft_limit,
                "overdraft limit exceeded"
            );
            Err(AccountError::OverdraftExceeded {
                requested: amount,
                available: balance + self.overdraft_limit,
                overdraft_limit: self.overdraft_limit,
            })
        }
    }

    fn details(&self) -> String {
        format!(
            "{}\n\tOverdraft Limit: {}",
            self.base.base_details(),
            format_money(self.overdraft_limit)
        )
    }
}

impl std::fmt::Display for CurrentAccount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.details())
    }
}
