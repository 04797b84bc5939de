use thiserror::Error;

/// Error parsing a decimal literal into a [`BigInt`](crate::BigInt).
///
/// Empty input and a bare `-` parse to zero; any other non-digit
/// character is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseBigIntError {
    #[error("invalid digit `{0}` in decimal literal")]
    InvalidDigit(char),
}

/// Error reading one whitespace-delimited token from a stream.
#[derive(Debug, Error)]
pub enum ReadTokenError {
    #[error("failed to read token: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Parse(#[from] ParseBigIntError),
}
