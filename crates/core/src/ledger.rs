//! The in-memory account registry (the "Banco").
//!
//! Holds the ordered account collection: insertion order is display
//! order. IBAN matching is case-insensitive everywhere; holder-name
//! lookup matches the first name only.

use rust_decimal::Decimal;

use crate::account::Account;
use crate::error::{CoreError, CoreResult};

/// Registry of all open accounts.
#[derive(Debug, Default)]
pub struct Ledger {
    accounts: Vec<Account>,
}

impl Ledger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self {
            accounts: Vec::new(),
        }
    }

    /// Rebuilds a ledger from a loaded collection, preserving order.
    pub fn from_accounts(accounts: Vec<Account>) -> Self {
        Self { accounts }
    }

    /// Opens an account, appending it to the registry.
    ///
    /// Rejects the open when the IBAN is already in use
    /// (case-insensitive). The error text speaks of an account limit,
    /// but the check is an IBAN-collision guard only.
    pub fn open(&mut self, account: Account) -> CoreResult<()> {
        if self.is_iban_in_use(&account.iban) {
            return Err(CoreError::AccountLimitReached {
                iban: account.iban,
            });
        }
        self.accounts.push(account);
        Ok(())
    }

    /// Removes the first account matching `iban` whose balance is
    /// exactly zero. Returns whether a removal happened; accounts with
    /// a non-zero balance are never removed.
    pub fn close(&mut self, iban: &str) -> bool {
        let position = self
            .accounts
            .iter()
            .position(|cuenta| cuenta.iban.eq_ignore_ascii_case(iban) && cuenta.balance == Decimal::ZERO);
        match position {
            Some(index) => {
                self.accounts.remove(index);
                true
            }
            None => false,
        }
    }

    /// First account whose holder's first name matches, ignoring case.
    pub fn find_by_holder_name(&self, name: &str) -> Option<&Account> {
        let needle = name.to_lowercase();
        self.accounts
            .iter()
            .find(|cuenta| cuenta.holder.name.to_lowercase() == needle)
    }

    /// First account whose IBAN matches, ignoring case.
    pub fn find_by_iban(&self, iban: &str) -> Option<&Account> {
        self.accounts
            .iter()
            .find(|cuenta| cuenta.iban.eq_ignore_ascii_case(iban))
    }

    /// Mutable lookup by IBAN, for deposits and withdrawals.
    pub fn find_by_iban_mut(&mut self, iban: &str) -> Option<&mut Account> {
        self.accounts
            .iter_mut()
            .find(|cuenta| cuenta.iban.eq_ignore_ascii_case(iban))
    }

    /// Whether any account already carries this IBAN.
    pub fn is_iban_in_use(&self, iban: &str) -> bool {
        self.find_by_iban(iban).is_some()
    }

    /// Number of open accounts.
    pub fn count(&self) -> usize {
        self.accounts.len()
    }

    /// True when no account is open.
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// Live view of the accounts, in insertion order.
    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::person::Person;
    use rust_decimal_macros::dec;

    fn savings(name: &str, iban: &str, balance: Decimal) -> Account {
        let holder = Person::new(name, "garcia", "", "12345678z").unwrap();
        Account::savings(holder, balance, iban.to_string(), dec!(2.5))
    }

    #[test]
    fn test_open_and_count() {
        let mut ledger = Ledger::new();
        assert!(ledger.is_empty());

        ledger.open(savings("ana", "ES0000000001", dec!(100))).unwrap();
        ledger.open(savings("eva", "ES0000000002", dec!(200))).unwrap();

        assert_eq!(ledger.count(), 2);
        assert!(ledger.is_iban_in_use("ES0000000001"));
        // Insertion order is display order.
        assert_eq!(ledger.accounts()[0].holder.name, "Ana");
        assert_eq!(ledger.accounts()[1].holder.name, "Eva");
    }

    #[test]
    fn test_open_rejects_duplicate_iban_case_insensitive() {
        let mut ledger = Ledger::new();
        ledger.open(savings("ana", "ES0000000001", dec!(100))).unwrap();

        let err = ledger
            .open(savings("eva", "es0000000001", dec!(200)))
            .unwrap_err();
        assert!(err.is_duplicate_iban());
        assert_eq!(ledger.count(), 1);
    }

    #[test]
    fn test_close_requires_zero_balance() {
        let mut ledger = Ledger::new();
        ledger.open(savings("ana", "ES0000000001", dec!(50))).unwrap();

        assert!(!ledger.close("ES0000000001"));
        assert_eq!(ledger.count(), 1);
        assert_eq!(ledger.accounts()[0].balance, dec!(50));
    }

    #[test]
    fn test_close_zero_balance_account() {
        let mut ledger = Ledger::new();
        ledger.open(savings("ana", "ES0000000001", dec!(0))).unwrap();

        assert!(ledger.close("es0000000001"));
        assert_eq!(ledger.count(), 0);
        assert!(!ledger.is_iban_in_use("ES0000000001"));
    }

    #[test]
    fn test_withdraw_to_zero_then_close() {
        let mut ledger = Ledger::new();
        ledger.open(savings("ana", "ES0000000001", dec!(50))).unwrap();
        assert!(!ledger.close("ES0000000001"));

        let cuenta = ledger.find_by_iban_mut("ES0000000001").unwrap();
        crate::ops::withdraw(cuenta, dec!(50)).unwrap();

        assert!(ledger.close("ES0000000001"));
        assert_eq!(ledger.count(), 0);
    }

    #[test]
    fn test_find_by_holder_name_ignores_case() {
        let mut ledger = Ledger::new();
        ledger.open(savings("ana", "ES0000000001", dec!(100))).unwrap();

        let cuenta = ledger.find_by_holder_name("ANA").unwrap();
        assert_eq!(cuenta.iban, "ES0000000001");
        assert!(ledger.find_by_holder_name("maría").is_none());
    }

    #[test]
    fn test_open_then_search_by_holder_scenario() {
        let holder = Person::new("ana", "garcia", "", "12345678z").unwrap();
        let cuenta = Account::savings(holder, dec!(100.0), "ES0012345678".to_string(), dec!(2.5));

        let mut ledger = Ledger::new();
        ledger.open(cuenta).unwrap();

        let encontrada = ledger.find_by_holder_name("ANA").unwrap();
        let detail = encontrada.detail();
        assert!(detail.contains("Ana Garcia"));
        assert!(detail.contains("ES0012345678"));
        assert!(detail.contains("100.00"));
        assert!(detail.contains("2.50%"));
    }

    #[test]
    fn test_find_by_iban_ignores_case() {
        let mut ledger = Ledger::new();
        ledger.open(savings("ana", "ES0000000001", dec!(100))).unwrap();

        assert!(ledger.find_by_iban("es0000000001").is_some());
        assert!(ledger.find_by_iban("ES0000000099").is_none());
    }
}
