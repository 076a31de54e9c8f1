//! Account holders.
//!
//! A `Person` is the titular of exactly one account; the ledger never
//! shares a holder between accounts. All fields are validated and
//! normalized once, at construction, and never mutated afterwards.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{CoreError, CoreResult};

/// Holder of an account: first name, two surnames, national ID (DNI).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// First name, title-cased
    pub name: String,
    /// First surname, title-cased
    pub surname1: String,
    /// Second surname, title-cased; may be empty
    pub surname2: String,
    /// National ID: 8 digits followed by one letter, stored as entered
    pub national_id: String,
}

impl Person {
    /// Validates and normalizes the holder data.
    ///
    /// `name` and `surname1` must be non-blank; `surname2` may be left
    /// empty. Name fields are normalized to title case (first letter of
    /// each word uppercased, rest lowercased). The national ID must be
    /// 8 digits followed by exactly one letter, either case.
    pub fn new(name: &str, surname1: &str, surname2: &str, national_id: &str) -> CoreResult<Self> {
        let name = require_field("nombre", name)?;
        let surname1 = require_field("primer apellido", surname1)?;
        let surname2 = title_case(surname2);

        if !Self::is_valid_national_id(national_id) {
            return Err(CoreError::InvalidNationalId(national_id.to_string()));
        }

        Ok(Self {
            name,
            surname1,
            surname2,
            national_id: national_id.to_string(),
        })
    }

    /// Checks the DNI shape: 8 digits followed by exactly one letter.
    pub fn is_valid_national_id(id: &str) -> bool {
        let bytes = id.as_bytes();
        bytes.len() == 9
            && bytes[..8].iter().all(|b| b.is_ascii_digit())
            && bytes[8].is_ascii_alphabetic()
    }

    /// Full name as shown in account views.
    pub fn full_name(&self) -> String {
        if self.surname2.is_empty() {
            format!("{} {}", self.name, self.surname1)
        } else {
            format!("{} {} {}", self.name, self.surname1, self.surname2)
        }
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.full_name())
    }
}

/// Title-cases a required field, rejecting blank input.
fn require_field(field: &'static str, value: &str) -> CoreResult<String> {
    let normalized = title_case(value);
    if normalized.is_empty() {
        return Err(CoreError::EmptyField { field });
    }
    Ok(normalized)
}

/// Uppercases the first letter of each whitespace-delimited word and
/// lowercases the rest. Interior whitespace collapses to single spaces.
fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
