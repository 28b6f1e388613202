pub mod account;
pub mod common;
pub mod current;
pub mod savings;

pub use account::Account;
pub use common::{
    format_money, format_rate, AccountKind, BankAccount, WithdrawResult, Withdrawal,
    DEFAULT_TRANSFER_AMOUNT,
};
pub use current::CurrentAccount;
pub use savings::SavingsAccount;

/// `receiver + &mut source` transfers [`DEFAULT_TRANSFER_AMOUNT`] and yields
/// the receiver's own type.
macro_rules! impl_transfer_operator {
    ($($account:ty),+ $(,)?) => {
        $(
            impl<S: BankAccount + ?Sized> std::ops::Add<&mut S> for $account {
                type Output = $account;

                fn add(self, source: &mut S) -> Self::Output {
                    self.transfer_from(source, DEFAULT_TRANSFER_AMOUNT)
                }
            }
        )+
    };
}

impl_transfer_operator!(Account, SavingsAccount, CurrentAccount);
