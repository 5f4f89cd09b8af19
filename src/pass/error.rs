//! Error types for password generation.

use thiserror::Error;

use super::charset::Class;

#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum Error {
    #[error("requested {requested} unique {unit}s but only {available} are available; allow repeats or request fewer")]
    TooManyUnits {
        unit: &'static str,
        requested: usize,
        available: usize,
    },
    #[error("length {length} is too short, at least {minimum} needed to include every enabled character class")]
    LengthTooShort { length: usize, minimum: usize },
    #[error("gave up after {attempts} draws without finding an unused {unit}")]
    RetryExhausted { unit: &'static str, attempts: usize },
    #[error("invalid {class} pool: {reason}")]
    InvalidPool { class: Class, reason: String },
    #[error("wordlist is empty")]
    EmptyWordlist,
}

/// Result type for generation.
pub type Result<T> = std::result::Result<T, Error>;
