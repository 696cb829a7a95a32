//! Field generators for [`Transaction`](super::transactions::Transaction).
//!
//! Every generator draws from the `rng` it is handed and nothing else, so the
//! whole record is reproducible from a seeded generator.

use rand::Rng;

use super::transactions::{Currency, Status};

/// Leading digits of the generated card numbers (Visa-like, Mastercard-like).
pub const CARD_PREFIXES: [char; 2] = ['4', '5'];

/// Length of a generated card number, prefix included.
pub const CARD_NUMBER_LEN: usize = 16;

pub const MIN_VALUE: f64 = 1.0;
pub const MAX_VALUE: f64 = 5000.0;

/// Out of 100 draws, how many land on [`Status::Suspicious`].
pub const SUSPICIOUS_PERCENT: u32 = 10;

/// A random UUID v4 in canonical hyphenated form.
///
/// The 128 bits come from `rng` rather than the OS, only the version and
/// variant bits are fixed.
///
pub fn id<R: Rng + ?Sized>(rng: &mut R) -> String {
    let mut bytes = [0u8; 16];
    rng.fill(&mut bytes[..]);

    uuid::Builder::from_random_bytes(bytes)
        .into_uuid()
        .hyphenated()
        .to_string()
}

/// A 16 digit card number starting with `4` or `5`.
///
/// No checksum is applied, the number only looks plausible.
///
pub fn card_number<R: Rng + ?Sized>(rng: &mut R) -> String {
    let mut number = String::with_capacity(CARD_NUMBER_LEN);
    number.push(CARD_PREFIXES[rng.random_range(0..CARD_PREFIXES.len())]);

    for _ in 1..CARD_NUMBER_LEN {
        number.push(char::from(b'0' + rng.random_range(0..10u8)));
    }
    number
}

/// A monetary amount in `[MIN_VALUE, MAX_VALUE]` with two decimal places.
///
/// Rounds half away from zero.
///
pub fn value<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    let raw = rng.random_range(MIN_VALUE..MAX_VALUE);
    round_cents(raw)
}

pub fn currency<R: Rng + ?Sized>(rng: &mut R) -> Currency {
    Currency::ALL[rng.random_range(0..Currency::ALL.len())]
}

pub fn status<R: Rng + ?Sized>(rng: &mut R) -> Status {
    if rng.random_range(0..100u32) < SUSPICIOUS_PERCENT {
        Status::Suspicious
    } else {
        Status::Normal
    }
}

fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}
