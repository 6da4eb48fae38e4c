use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by construction, parsing and arithmetic on a `BigInt`.
#[derive(Error, Debug)]
pub enum Error {
    /// The exact result needs more digits than the type can hold.
    #[error("BigIntegerOverflow")]
    Overflow,

    /// Reserved for division, which is not provided.
    #[error("BigIntegerDivisionByZero")]
    DivisionByZero,

    #[error("cannot parse BigInt from empty string")]
    Empty,

    #[error("invalid digit {found:?} at index {index}")]
    InvalidDigit { index: usize, found: char },

    /// A byte read from a stream that does not start a UTF-8 character.
    #[error("invalid byte {byte:#04x} at index {index}")]
    InvalidByte { index: usize, byte: u8 },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn is_overflow(&self) -> bool {
        matches!(self, Error::Overflow)
    }
}
