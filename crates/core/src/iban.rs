//! IBAN generation.
//!
//! Account codes are "ES" followed by a 10-digit zero-padded random
//! integer. Generation retries unbounded until the candidate is free;
//! the draw space is ~2^31, so collisions are vanishingly rare.

use rand::Rng;

/// Generates a free IBAN, drawing from the given RNG.
///
/// `is_in_use` is consulted for every candidate; busy candidates are
/// discarded and a new one drawn.
pub fn generate_iban_with<R, F>(rng: &mut R, is_in_use: F) -> String
where
    R: Rng,
    F: Fn(&str) -> bool,
{
    loop {
        let candidate = format!("ES{:010}", rng.gen_range(0..i32::MAX));
        if !is_in_use(&candidate) {
            return candidate;
        }
    }
}

/// Generates a free IBAN with the thread-local RNG.
pub fn generate_iban<F>(is_in_use: F) -> String
where
    F: Fn(&str) -> bool,
{
    generate_iban_with(&mut rand::thread_rng(), is_in_use)
}
