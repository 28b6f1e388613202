use tracing::warn;

use crate::domain::account::Account;
use crate::errors::AccountError;

/// Amount moved by the `+` transfer operator.
pub const DEFAULT_TRANSFER_AMOUNT: f64 = 300.0;

/// Outcome of a withdrawal that did not raise an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Withdrawal {
    /// The balance was reduced by the requested amount.
    Applied,
    /// The base rule refused to go below zero; the balance is untouched.
    Declined,
}

impl Withdrawal {
    pub fn is_applied(self) -> bool {
        matches!(self, Withdrawal::Applied)
    }
}

pub type WithdrawResult = Result<Withdrawal, AccountError>;

/// Enumerates the supported account variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountKind {
    Basic,
    Savings,
    Current,
}

/// Behaviour shared by every account variant.
///
/// The base [`Account`] withdraws permissively: an overdrawing request comes
/// back as `Ok(Withdrawal::Declined)`. Savings and current accounts are strict
/// and return an [`AccountError`] instead. Code that handles accounts through
/// this trait must treat both shapes as "nothing was withdrawn".
pub trait BankAccount {
    fn base(&self) -> &Account;

    fn base_mut(&mut self) -> &mut Account;

    fn kind(&self) -> AccountKind;

    /// Applies this variant's withdrawal rule.
    fn withdraw(&mut self, amount: f64) -> WithdrawResult;

    /// Multi-line report of the account; variants append their own fields.
    fn details(&self) -> String {
        self.base().base_details()
    }

    fn account_number(&self) -> &str {
        self.base().account_number()
    }

    fn account_holder(&self) -> &str {
        self.base().account_holder()
    }

    fn balance(&self) -> f64 {
        self.base().balance()
    }

    /// Adds `amount` to the balance. Negative amounts are accepted as-is.
    fn deposit(&mut self, amount: f64) {
        self.base_mut().credit(amount);
    }

    /// Moves `amount` from `source` into this account.
    ///
    /// The deposit happens only when the source applied the withdrawal, so a
    /// declined or rejected withdrawal leaves both balances unchanged.
    fn try_transfer_from<S>(&mut self, source: &mut S, amount: f64) -> WithdrawResult
    where
        Self: Sized,
        S: BankAccount + ?Sized,
    {
        let outcome = source.withdraw(amount)?;
        if outcome.is_applied() {
            self.deposit(amount);
        }
        Ok(outcome)
    }

    /// By-value transfer returning the receiver with its concrete type intact.
    ///
    /// A declined or rejected withdrawal is reported through `tracing::warn!`
    /// only; without an installed subscriber (see [`crate::init`]) nothing is
    /// emitted. Use [`BankAccount::try_transfer_from`] to observe the failure.
    fn transfer_from<S>(mut self, source: &mut S, amount: f64) -> Self
    where
        Self: Sized,
        S: BankAccount + ?Sized,
    {
        match self.try_transfer_from(&mut *source, amount) {
            Ok(Withdrawal::Applied) => {}
            Ok(Withdrawal::Declined) => warn!(
                "transfer of {} from `{}` to `{}` declined by source",
                format_money(amount),
                source.account_number(),
                self.account_number()
            ),
            Err(err) => warn!(
                "transfer of {} from `{}` to `{}` failed: {}",
                format_money(amount),
                source.account_number(),
                self.account_number(),
                err
            ),
        }
        self
    }
}

/// Formats a money amount as `$` followed by two decimals.
pub fn format_money(amount: f64) -> String {
    format!("${amount:.2}")
}

/// Formats a fractional rate as a percentage with two decimals.
pub fn format_rate(rate: f64) -> String {
    format!("{:.2}%", rate * 100.0)
}
