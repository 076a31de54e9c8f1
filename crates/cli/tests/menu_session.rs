//! Full menu sessions driven through in-memory buffers.

use std::io::Cursor;
use std::path::PathBuf;

use rust_decimal_macros::dec;
use tempfile::{tempdir, TempDir};

use banco_cli::{menu, Console};
use banco_core::{AccountKind, Ledger};
use banco_persistence::AccountStore;

/// Runs a scripted session over an empty ledger in a fresh data dir.
/// Returns everything the shell printed, plus the store and listing
/// path for state assertions.
fn run_session(script: &str) -> (String, AccountStore, PathBuf, TempDir) {
    let dir = tempdir().unwrap();
    let store = AccountStore::new(dir.path().join("datoscuentasbancarias.json"));
    let listing_path = dir.path().join("ListadoClientesCCC.txt");

    let mut console = Console::new(Cursor::new(script.as_bytes().to_vec()), Vec::new());
    menu::run(&mut console, Ledger::new(), &store, &listing_path).unwrap();

    let output = String::from_utf8(console.into_output()).unwrap();
    (output, store, listing_path, dir)
}

#[test]
fn test_list_on_empty_ledger_then_exit() {
    let (output, store, _, _dir) = run_session("2\n9\n");

    assert!(output.contains("No hay cuentas registradas en el banco."));
    assert!(output.contains("Cuentas guardadas correctamente en el archivo:"));
    assert!(output.contains("Saliendo de la aplicación. ¡Hasta luego!"));

    // Exit persisted the (empty) ledger.
    assert_eq!(store.load().unwrap().len(), 0);
}

#[test]
fn test_open_savings_account_session() {
    // Open a savings account for "ana garcia", list it, exit.
    let script = "1\n1\nana\ngarcia\n\n12345678z\n100\n2,5\n4\n2\n9\n";
    let (output, store, _, _dir) = run_session(script);

    assert!(output.contains("Cuenta abierta con éxito. IBAN: ES"));
    assert!(output.contains("Listado de cuentas:"));
    assert!(output.contains("Titular: Ana Garcia"));
    assert!(output.contains("Saldo actual: 100.00 €"));

    let accounts = store.load().unwrap();
    assert_eq!(accounts.len(), 1);
    assert_eq!(accounts[0].holder.name, "Ana");
    assert_eq!(accounts[0].balance, dec!(100));
    assert_eq!(
        accounts[0].kind,
        AccountKind::Savings {
            interest_rate: dec!(2.5)
        }
    );
    assert!(accounts[0].iban.starts_with("ES"));
    assert_eq!(accounts[0].iban.len(), 12);
}

#[test]
fn test_close_unknown_iban_offers_retry() {
    let script = "7\nES9999999999\n2\n9\n";
    let (output, _, _, _dir) = run_session(script);

    assert!(output.contains("No se encontró ninguna cuenta con el IBAN proporcionado."));
    assert!(output.contains("¿Desea intentar eliminar otra cuenta? (1. Sí / 2. No): "));
    assert!(output.contains("Volviendo al menú principal..."));
}

#[test]
fn test_export_listing_from_menu() {
    let (output, _, listing_path, _dir) = run_session("8\n9\n");

    assert!(output.contains("Listado de clientes generado con éxito."));
    let listing = std::fs::read_to_string(&listing_path).unwrap();
    assert_eq!(listing, "Número total de cuentas: 0");
}

#[test]
fn test_invalid_menu_choice_reprompts() {
    let (output, _, _, _dir) = run_session("0\n9\n");

    assert!(output.contains("Por favor, ingrese un número válido entre 1 y 9."));
    assert!(output.contains("Saliendo de la aplicación. ¡Hasta luego!"));
}
