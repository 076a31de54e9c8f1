//! Interactive menu loop.
//!
//! Iterative loops throughout: error paths print their message and fall
//! through to the next iteration instead of re-entering the menu
//! recursively. The loop only ends on the exit option, which saves the
//! ledger first.

use std::io::{BufRead, Write};
use std::path::Path;

use anyhow::Result;

use banco_core::{format_currency, generate_iban, ops, Account, Ledger, Person};
use banco_persistence::AccountStore;
use banco_reports::CustomerListing;

use crate::console::Console;

const MAIN_MENU: &str = "\n    1. Abrir una nueva cuenta.\n    2. Ver un listado de las cuentas disponibles (código de cuenta, titular y saldo actual).\n    3. Obtener los datos de una cuenta concreta.\n    4. Realizar un ingreso en una cuenta.\n    5. Retirar efectivo de una cuenta.\n    6. Consultar el saldo actual de una cuenta.\n    7. Eliminar una cuenta bancaria.\n    8. Crear listado de clientes `.txt`.\n    9. Salir de la aplicación.";

const ACCOUNTS_MENU: &str = "\n    1. Abrir una nueva cuenta de ahorro.\n    2. Abrir una nueva cuenta corriente personal.\n    3. Abrir una nueva cuenta corriente de empresa.\n    4. Volver atrás.";

const PROMPT_IBAN: &str = "Ingrese el IBAN de la cuenta:";

/// Runs the main menu until the user exits. Exit saves the ledger.
pub fn run<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    mut ledger: Ledger,
    store: &AccountStore,
    listing_path: &Path,
) -> Result<()> {
    loop {
        console.say(MAIN_MENU)?;
        let opcion = console.read_menu_choice("\nSeleccione una opción del menú principal: ", 1, 9)?;

        match opcion {
            1 => open_account_menu(console, &mut ledger)?,
            2 => list_accounts(console, &ledger)?,
            3 => show_account(console, &ledger)?,
            4 => make_deposit(console, &mut ledger)?,
            5 => withdraw_cash(console, &mut ledger)?,
            6 => query_balance(console, &ledger)?,
            7 => close_account(console, &mut ledger)?,
            8 => export_listing(console, &ledger, listing_path)?,
            9 => {
                save_accounts(console, store, &ledger)?;
                console.say("Saliendo de la aplicación. ¡Hasta luego!")?;
                return Ok(());
            }
            _ => unreachable!("choice already validated against the menu range"),
        }
    }
}

/// Account-opening submenu: loops until "volver atrás".
fn open_account_menu<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    ledger: &mut Ledger,
) -> Result<()> {
    loop {
        console.say(ACCOUNTS_MENU)?;
        let opcion = console.read_menu_choice("\nSeleccione una opción del menú de cuentas: ", 1, 4)?;

        let cuenta = match opcion {
            1 => {
                let (holder, balance) = read_holder_and_balance(console)?;
                let interest = console.read_positive_decimal("Ingrese el tipo de interés:")?;
                let iban = generate_iban(|iban| ledger.is_iban_in_use(iban));
                Account::savings(holder, balance, iban, interest)
            }
            2 => {
                let (holder, balance) = read_holder_and_balance(console)?;
                let entities =
                    console.read_text("Ingrese la lista de entidades autorizadas:")?;
                let fee =
                    console.read_positive_decimal("Ingrese la comisión de mantenimiento:")?;
                let iban = generate_iban(|iban| ledger.is_iban_in_use(iban));
                Account::personal_checking(holder, balance, iban, entities, fee)
            }
            3 => {
                let (holder, balance) = read_holder_and_balance(console)?;
                let entities =
                    console.read_text("Ingrese la lista de entidades autorizadas:")?;
                let rate = console
                    .read_positive_decimal("Ingrese el tipo de interés por descubierto:")?;
                let limit = console
                    .read_positive_decimal("Ingrese el máximo descubierto permitido:")?;
                let iban = generate_iban(|iban| ledger.is_iban_in_use(iban));
                Account::business_checking(holder, balance, iban, entities, rate, limit)
            }
            4 => {
                console.say("Volviendo al menú principal...")?;
                return Ok(());
            }
            _ => unreachable!("choice already validated against the menu range"),
        };

        let iban = cuenta.iban.clone();
        match ledger.open(cuenta) {
            Ok(()) => console.say(&format!("Cuenta abierta con éxito. IBAN: {iban}"))?,
            Err(err) => console.say(&err.to_string())?,
        }
    }
}

/// Prompts for the holder and the initial balance, the part every
/// variant shares. The balance must be strictly positive.
fn read_holder_and_balance<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> Result<(Person, rust_decimal::Decimal)> {
    let holder = read_person(console)?;
    let balance = console.read_positive_decimal("Ingrese el saldo inicial:")?;
    Ok((holder, balance))
}

/// Prompts for the holder fields until a valid person comes out.
fn read_person<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<Person> {
    loop {
        let nombre = console.read_text("Ingrese el nombre (no puede estar vacío):")?;
        let apellido1 =
            console.read_text("Ingrese el primer apellido (no puede estar vacío):")?;
        let apellido2 =
            console.read_optional_text("Ingrese el segundo apellido (puede ser vacío):")?;
        let dni = read_national_id(console)?;

        match Person::new(&nombre, &apellido1, &apellido2, &dni) {
            Ok(person) => return Ok(person),
            Err(err) => console.say(&err.to_string())?,
        }
    }
}

/// Prompts for the DNI until it matches 8 digits plus one letter.
fn read_national_id<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<String> {
    loop {
        let dni =
            console.read_text("Ingrese el DNI (debe tener 8 números seguidos por una letra):")?;
        if Person::is_valid_national_id(&dni) {
            return Ok(dni);
        }
        console.say("Por favor, ingrese un DNI válido.")?;
    }
}

/// Option 2: summary of every account, in insertion order.
fn list_accounts<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    ledger: &Ledger,
) -> Result<()> {
    if ledger.is_empty() {
        console.say("No hay cuentas registradas en el banco.")?;
        return Ok(());
    }

    console.say("Listado de cuentas:")?;
    for cuenta in ledger.accounts() {
        console.say(&cuenta.summary())?;
    }
    Ok(())
}

/// Option 3: detail view of one account, located by IBAN or by holder.
fn show_account<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    ledger: &Ledger,
) -> Result<()> {
    let modo = console.read_menu_choice("Buscar por: (1. IBAN / 2. Titular): ", 1, 2)?;

    if modo == 1 {
        let iban = console.read_text(PROMPT_IBAN)?;
        match ledger.find_by_iban(&iban) {
            Some(cuenta) => {
                console.say(&format!("Información de la cuenta para el IBAN {iban}:"))?;
                console.say(&cuenta.detail())?;
            }
            None => {
                console.say(&format!(
                    "No se encontró ninguna cuenta para el IBAN {iban}."
                ))?;
            }
        }
    } else {
        let titular = console.read_text("Ingrese el nombre del titular:")?;
        match ledger.find_by_holder_name(&titular) {
            Some(cuenta) => {
                console.say(&format!(
                    "Información de la cuenta para el titular {titular}:"
                ))?;
                console.say(&cuenta.detail())?;
            }
            None => {
                console.say(&format!(
                    "No se encontró ninguna cuenta para el titular {titular}."
                ))?;
            }
        }
    }
    Ok(())
}

/// Option 4: deposit into an account located by IBAN.
fn make_deposit<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    ledger: &mut Ledger,
) -> Result<()> {
    let iban = console.read_text(PROMPT_IBAN)?;
    match ledger.find_by_iban_mut(&iban) {
        Some(cuenta) => {
            let cantidad = console.read_decimal("Ingrese la cantidad a ingresar: ")?;
            match ops::deposit(cuenta, cantidad) {
                Ok(saldo) => console.say(&format!(
                    "Ingreso exitoso. Nuevo saldo: {}",
                    format_currency(saldo)
                ))?,
                Err(err) => console.say(&err.to_string())?,
            }
        }
        None => {
            console.say(&format!(
                "No se encontró ninguna cuenta para el IBAN {iban}."
            ))?;
        }
    }
    Ok(())
}

/// Option 5: withdraw from an account located by IBAN.
fn withdraw_cash<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    ledger: &mut Ledger,
) -> Result<()> {
    let iban = console.read_text(PROMPT_IBAN)?;
    match ledger.find_by_iban_mut(&iban) {
        Some(cuenta) => {
            let cantidad = console.read_decimal("Ingrese la cantidad a retirar: ")?;
            match ops::withdraw(cuenta, cantidad) {
                Ok(saldo) => console.say(&format!(
                    "Retiro exitoso. Nuevo saldo: {}",
                    format_currency(saldo)
                ))?,
                Err(err) => console.say(&err.to_string())?,
            }
        }
        None => {
            console.say(&format!(
                "No se encontró ninguna cuenta para el IBAN {iban}."
            ))?;
        }
    }
    Ok(())
}

/// Option 6: balance query.
fn query_balance<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    ledger: &Ledger,
) -> Result<()> {
    let iban = console.read_text(PROMPT_IBAN)?;
    match ledger.find_by_iban(&iban) {
        Some(cuenta) => {
            console.say(&format!(
                "Saldo actual de la cuenta: {}",
                ops::check_balance(cuenta)
            ))?;
        }
        None => {
            console.say(&format!(
                "No se encontró ninguna cuenta para el IBAN {iban}."
            ))?;
        }
    }
    Ok(())
}

/// Option 7: close an account. Only a zero-balance account can go; on a
/// miss the user may retry with another IBAN.
fn close_account<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    ledger: &mut Ledger,
) -> Result<()> {
    loop {
        console.say("\nEliminar Cuenta Bancaria:")?;
        let iban = console.read_text("Ingrese el IBAN de la cuenta a eliminar: ")?;

        if ledger.find_by_iban(&iban).is_none() {
            console.say("No se encontró ninguna cuenta con el IBAN proporcionado.")?;
            let opcion = console
                .read_menu_choice("¿Desea intentar eliminar otra cuenta? (1. Sí / 2. No): ", 1, 2)?;
            if opcion == 2 {
                console.say("Volviendo al menú principal...")?;
                return Ok(());
            }
            continue;
        }

        if ledger.close(&iban) {
            console.say(&format!("La cuenta con IBAN {iban} ha sido eliminada."))?;
        } else {
            console.say("No se pudo eliminar la cuenta. Asegúrate de que el saldo es 0.")?;
        }
        return Ok(());
    }
}

/// Option 8: write the customer listing.
fn export_listing<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    ledger: &Ledger,
    listing_path: &Path,
) -> Result<()> {
    let listing = CustomerListing::from_accounts(ledger.accounts());
    match listing.write_to(listing_path) {
        Ok(()) => {
            console.say("Listado de clientes generado con éxito.")?;
            console.say(&format!(
                "El archivo se ha creado en: {}",
                listing_path.display()
            ))?;
        }
        Err(err) => {
            tracing::warn!(error = %err, "no se pudo generar el listado de clientes");
            console.say(&format!(
                "Error al generar el listado de clientes: {err}"
            ))?;
        }
    }
    Ok(())
}

/// Saves the ledger on exit. Failures are reported, never retried; the
/// session still ends.
fn save_accounts<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    store: &AccountStore,
    ledger: &Ledger,
) -> Result<()> {
    match store.save(ledger.accounts()) {
        Ok(()) => {
            console.say(&format!(
                "Cuentas guardadas correctamente en el archivo: {}",
                store.path().display()
            ))?;
        }
        Err(err) => {
            tracing::warn!(error = %err, "no se pudieron guardar las cuentas");
            console.say(&format!("Error al guardar las cuentas: {err}"))?;
        }
    }
    Ok(())
}
