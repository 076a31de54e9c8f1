//! Banco - console-driven bank account ledger.
//!
//! Loads the persisted accounts, runs the interactive menu and saves on
//! exit. The data directory defaults to `~/banco` and can be overridden
//! with `--data-dir`.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use banco_cli::menu;
use banco_cli::Console;
use banco_core::Ledger;
use banco_persistence::AccountStore;

/// Ledger file inside the data directory.
const LEDGER_FILE: &str = "datoscuentasbancarias.json";
/// Customer listing export inside the data directory.
const LISTING_FILE: &str = "ListadoClientesCCC.txt";

/// Banco - console-driven bank account ledger
#[derive(Parser)]
#[command(name = "banco")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Data directory for the ledger file and exports
    #[arg(long)]
    data_dir: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let data_dir = cli.data_dir.unwrap_or_else(default_data_dir);
    std::fs::create_dir_all(&data_dir).ok();

    let store = AccountStore::new(data_dir.join(LEDGER_FILE));
    let ledger = load_ledger(&store);

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock());

    menu::run(&mut console, ledger, &store, &data_dir.join(LISTING_FILE))
}

/// Per-user default under the home directory.
fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("banco")
}

/// Loads the ledger, tolerating a missing file: the first run starts
/// empty and creates the file on exit. Any other failure is reported
/// and the session continues with an empty ledger.
fn load_ledger(store: &AccountStore) -> Ledger {
    match store.load() {
        Ok(accounts) => {
            println!(
                "Cuentas cargadas correctamente desde el archivo: {}",
                store.path().display()
            );
            Ledger::from_accounts(accounts)
        }
        Err(err) if err.is_missing_file() => {
            println!("No se encontró el archivo de cuentas. Se creará uno nuevo al salir.");
            Ledger::new()
        }
        Err(err) => {
            tracing::warn!(error = %err, "no se pudieron cargar las cuentas");
            println!("Error al cargar las cuentas: {err}");
            Ledger::new()
        }
    }
}
