//! Fixed walkthrough exercising both account variants end to end.

use std::io::{self, Write};

use tracing::info;

use crate::cli::output::{write_message, MessageKind, OutputPreferences};
use crate::config::Config;
use crate::domain::{
    format_money, BankAccount, CurrentAccount, SavingsAccount, WithdrawResult, Withdrawal,
};
use crate::errors::DemoError;

const SAVINGS_DEPOSIT: f64 = 500.0;
const CURRENT_DEPOSIT: f64 = 600.0;
const OVERDRAFT_ATTEMPT: f64 = 2801.0;
const SAVINGS_ATTEMPT: f64 = 800.0;

/// Runs the scenario, writing every report to `out`.
///
/// Returns both accounts in their final state. The config is validated
/// before anything is written.
pub fn run(
    config: &Config,
    out: &mut impl Write,
) -> Result<(SavingsAccount, CurrentAccount), DemoError> {
    config.validate()?;
    let prefs = OutputPreferences::from(config.output);

    let mut savings = SavingsAccount::new("S123", "John Doe", 1000.0, 0.02);
    let mut current = CurrentAccount::new("C456", "Jane Doe", 2000.0, 500.0);
    info!("demo accounts opened");

    write_message(out, MessageKind::Section, "Opening balances", &prefs)?;
    write_pair(out, &savings, &current)?;

    savings.deposit(SAVINGS_DEPOSIT);
    current.deposit(CURRENT_DEPOSIT);
    write_message(out, MessageKind::Section, "After deposits", &prefs)?;
    write_pair(out, &savings, &current)?;

    write_message(out, MessageKind::Section, "After withdrawals", &prefs)?;
    let outcome = savings.withdraw(SAVINGS_DEPOSIT);
    report_withdrawal(out, &savings, outcome, &prefs)?;
    let outcome = current.withdraw(CURRENT_DEPOSIT);
    report_withdrawal(out, &current, outcome, &prefs)?;
    write_pair(out, &savings, &current)?;

    write_message(out, MessageKind::Section, "Balance inquiry", &prefs)?;
    writeln!(out, "{}", savings.details())?;
    writeln!(out)?;
    writeln!(out, "{}", current.details())?;

    let amount = config.transfer_amount;
    write_message(
        out,
        MessageKind::Section,
        format!(
            "Transfer {} from {} to {}",
            format_money(amount),
            savings.account_number(),
            current.account_number()
        ),
        &prefs,
    )?;
    match current.try_transfer_from(&mut savings, amount) {
        Ok(Withdrawal::Applied) => write_message(
            out,
            MessageKind::Info,
            format!("Transferred {}.", format_money(amount)),
            &prefs,
        )?,
        Ok(Withdrawal::Declined) => {
            write_message(out, MessageKind::Info, "Transfer declined.", &prefs)?
        }
        Err(err) => write_message(out, MessageKind::Error, err, &prefs)?,
    }
    write_pair(out, &savings, &current)?;

    write_message(out, MessageKind::Section, "Rejected withdrawals", &prefs)?;
    let outcome = current.withdraw(OVERDRAFT_ATTEMPT);
    report_withdrawal(out, &current, outcome, &prefs)?;
    let outcome = savings.withdraw(SAVINGS_ATTEMPT);
    report_withdrawal(out, &savings, outcome, &prefs)?;
    write_message(out, MessageKind::Separator, "", &prefs)?;

    Ok((savings, current))
}

fn write_pair(
    out: &mut impl Write,
    savings: &SavingsAccount,
    current: &CurrentAccount,
) -> io::Result<()> {
    writeln!(out, "{savings}")?;
    writeln!(out)?;
    writeln!(out, "{current}")
}

fn report_withdrawal(
    out: &mut impl Write,
    account: &impl BankAccount,
    result: WithdrawResult,
    prefs: &OutputPreferences,
) -> io::Result<()> {
    match result {
        Ok(Withdrawal::Applied) => Ok(()),
        Ok(Withdrawal::Declined) => write_message(
            out,
            MessageKind::Info,
            format!("Withdrawal from {} declined.", account.account_number()),
            prefs,
        ),
        Err(err) => write_message(out, MessageKind::Error, err, prefs),
    }
}
