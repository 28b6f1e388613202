#![doc(test(attr(deny(warnings))))]

//! Bank Accounts models a base account and its savings and current variants,
//! each with its own withdrawal rule, plus transfers between them and
//! formatted account reports.
//!
//! ```
//! use bank_accounts::domain::{BankAccount, CurrentAccount, SavingsAccount};
//!
//! let mut savings = SavingsAccount::new("S123", "John Doe", 1000.0, 0.02);
//! let current = CurrentAccount::new("C456", "Jane Doe", 2000.0, 500.0);
//!
//! let current = current + &mut savings;
//! assert_eq!(savings.balance(), 700.0);
//! assert_eq!(current.balance(), 2300.0);
//! ```

pub mod cli;
pub mod config;
pub mod demo;
pub mod domain;
pub mod errors;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Bank Accounts tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
        super::init();
    }
}
