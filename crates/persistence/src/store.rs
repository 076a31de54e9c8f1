//! JSON account store.
//!
//! The whole account collection lives in a single file; save overwrites
//! it completely. The process model is single-writer, single-reader, so
//! there is no locking and no temp-file dance.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use banco_core::Account;

use crate::error::{StoreError, StoreResult};

/// Store for the persisted account collection.
pub struct AccountStore {
    path: PathBuf,
}

impl AccountStore {
    /// Creates a store over the given ledger file path.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Path of the ledger file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the persisted account collection.
    ///
    /// A missing file comes back as [`StoreError::FileMissing`] so the
    /// caller can start a fresh ledger without treating it as a fault.
    /// Any other read or decode failure is an ordinary error.
    pub fn load(&self) -> StoreResult<Vec<Account>> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                return Err(StoreError::FileMissing(self.path.clone()));
            }
            Err(err) => return Err(StoreError::Io(err)),
        };

        let accounts = serde_json::from_reader(BufReader::new(file))?;
        Ok(accounts)
    }

    /// Serializes the full collection, overwriting any prior contents.
    pub fn save(&self, accounts: &[Account]) -> StoreResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let file = File::create(&self.path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, accounts)?;
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use banco_core::Person;
    use rust_decimal_macros::dec;
    use tempfile::tempdir;

    fn sample_accounts() -> Vec<Account> {
        let ana = Person::new("ana", "garcia", "lópez", "12345678z").unwrap();
        let juan = Person::new("juan", "pérez", "", "87654321A").unwrap();
        let eva = Person::new("eva", "santos", "ruiz", "11223344B").unwrap();

        vec![
            Account::savings(ana, dec!(100.50), "ES0000000001".into(), dec!(2.5)),
            Account::personal_checking(
                juan,
                dec!(0),
                "ES0000000002".into(),
                "BBVA, Iberdrola".into(),
                dec!(12),
            ),
            Account::business_checking(
                eva,
                dec!(9999.99),
                "ES0000000003".into(),
                "Endesa".into(),
                dec!(7.5),
                dec!(2000),
            ),
        ]
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let dir = tempdir().unwrap();
        let store = AccountStore::new(dir.path().join("cuentas.json"));

        let accounts = sample_accounts();
        store.save(&accounts).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded, accounts);
    }

    #[test]
    fn test_missing_file_is_distinguishable() {
        let dir = tempdir().unwrap();
        let store = AccountStore::new(dir.path().join("no-such-file.json"));

        let err = store.load().unwrap_err();
        assert!(err.is_missing_file());
    }

    #[test]
    fn test_corrupt_file_is_a_decode_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cuentas.json");
        fs::write(&path, "{ this is not json").unwrap();

        let store = AccountStore::new(&path);
        let err = store.load().unwrap_err();
        assert!(matches!(err, StoreError::Decode(_)));
        assert!(!err.is_missing_file());
    }

    #[test]
    fn test_save_overwrites_previous_contents() {
        let dir = tempdir().unwrap();
        let store = AccountStore::new(dir.path().join("cuentas.json"));

        let accounts = sample_accounts();
        store.save(&accounts).unwrap();
        store.save(&accounts[..1]).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].iban, "ES0000000001");
    }

    #[test]
    fn test_save_creates_parent_directory() {
        let dir = tempdir().unwrap();
        let store = AccountStore::new(dir.path().join("nested/dir/cuentas.json"));

        store.save(&sample_accounts()).unwrap();
        assert_eq!(store.load().unwrap().len(), 3);
    }
}
