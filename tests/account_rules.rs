use bank_accounts::{
    domain::{Account, AccountKind, BankAccount, CurrentAccount, SavingsAccount, Withdrawal},
    errors::AccountError,
};

fn all_variants() -> Vec<Box<dyn BankAccount>> {
    vec![
        Box::new(Account::new("A001", "Ada Lovelace").with_balance(250.0)),
        Box::new(SavingsAccount::new("S123", "John Doe", 250.0, 0.02)),
        Box::new(CurrentAccount::new("C456", "Jane Doe", 250.0, 500.0)),
    ]
}

#[test]
fn deposit_then_withdraw_restores_balance() {
    for mut account in all_variants() {
        let before = account.balance();
        account.deposit(125.0);
        assert_eq!(account.withdraw(125.0), Ok(Withdrawal::Applied));
        assert_eq!(account.balance(), before, "{:?}", account.kind());
    }
}

#[test]
fn overdrawing_each_variant_leaves_balance_untouched() {
    let mut outcomes = Vec::new();
    for mut account in all_variants() {
        let before = account.balance();
        outcomes.push((account.kind(), account.withdraw(1000.0)));
        assert_eq!(account.balance(), before);
    }

    assert_eq!(outcomes[0], (AccountKind::Basic, Ok(Withdrawal::Declined)));
    assert!(matches!(
        outcomes[1],
        (AccountKind::Savings, Err(AccountError::InsufficientFunds { .. }))
    ));
    assert!(matches!(
        outcomes[2],
        (AccountKind::Current, Err(AccountError::OverdraftExceeded { .. }))
    ));
}

#[test]
fn current_account_stops_at_negative_overdraft_limit() {
    let mut current = CurrentAccount::new("C456", "Jane Doe", 0.0, 500.0);
    assert_eq!(current.withdraw(499.0), Ok(Withdrawal::Applied));
    assert_eq!(current.balance(), -499.0);

    let err = current.withdraw(2.0).unwrap_err();
    assert_eq!(
        err,
        AccountError::OverdraftExceeded {
            requested: 2.0,
            available: 1.0,
            overdraft_limit: 500.0,
        }
    );
    assert_eq!(current.balance(), -499.0);

    assert_eq!(current.withdraw(1.0), Ok(Withdrawal::Applied));
    assert_eq!(current.balance(), -500.0);
}

#[test]
fn scenario_balances_follow_each_step() {
    let mut savings = SavingsAccount::new("S123", "John Doe", 1000.0, 0.02);
    let mut current = CurrentAccount::new("C456", "Jane Doe", 2000.0, 500.0);

    savings.deposit(500.0);
    current.deposit(600.0);
    assert_eq!((savings.balance(), current.balance()), (1500.0, 2600.0));

    savings.withdraw(500.0).unwrap();
    current.withdraw(600.0).unwrap();
    assert_eq!((savings.balance(), current.balance()), (1000.0, 2000.0));
}

#[test]
fn display_matches_details_for_every_variant() {
    let account = Account::new("A001", "Ada Lovelace").with_balance(12.345);
    let savings = SavingsAccount::new("S123", "John Doe", 1000.0, 0.02);
    let current = CurrentAccount::new("C456", "Jane Doe", 2000.0, 500.0);

    assert_eq!(account.to_string(), account.details());
    assert_eq!(savings.to_string(), savings.details());
    assert_eq!(current.to_string(), current.details());
}

#[test]
fn savings_report_has_base_lines_plus_rate() {
    let savings = SavingsAccount::new("S123", "John Doe", 1000.0, 0.0125);
    let details = savings.details();
    let lines: Vec<&str> = details.lines().collect();
    assert_eq!(
        lines,
        vec![
            "Account Details for Account (ID: S123):",
            "\tHolder: John Doe",
            "\tBalance: $1000.00",
            "\tInterest Rate: 1.25%",
        ]
    );
}

#[test]
fn identity_fields_are_kept_verbatim() {
    let mut account = Account::new("  id-7 ", "").with_balance(-10.0);
    account.deposit(10.0);
    assert_eq!(account.account_number(), "  id-7 ");
    assert_eq!(account.account_holder(), "");
    assert_eq!(account.balance(), 0.0);
}
