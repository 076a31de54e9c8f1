//! Stateless operations over a single account.
//!
//! Deposits and withdrawals mutate the balance in place and report one
//! generic rejection each; the balance query is a pure read.

use rust_decimal::Decimal;

use crate::account::Account;
use crate::error::{CoreError, CoreResult};
use crate::money::format_currency;

/// Deposits `amount` into the account.
///
/// Succeeds iff `amount > 0`; returns the new balance. The balance is
/// untouched on rejection.
pub fn deposit(account: &mut Account, amount: Decimal) -> CoreResult<Decimal> {
    if amount <= Decimal::ZERO {
        return Err(CoreError::DepositRejected);
    }
    account.balance += amount;
    Ok(account.balance)
}

/// Withdraws `amount` from the account.
///
/// Succeeds iff `0 < amount <= balance`; returns the new balance. Both
/// a non-positive amount and an over-balance amount come back as the
/// same rejection, and the balance is untouched.
pub fn withdraw(account: &mut Account, amount: Decimal) -> CoreResult<Decimal> {
    if amount <= Decimal::ZERO || amount > account.balance {
        return Err(CoreError::WithdrawalRejected);
    }
    account.balance -= amount;
    Ok(account.balance)
}

/// Formats the current balance for display; no mutation.
pub fn check_balance(account: &Account) -> String {
    format_currency(account.balance)
}
