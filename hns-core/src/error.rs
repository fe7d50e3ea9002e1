//! Error types for the core crate

use thiserror::Error;

/// Coarse classification of a [`CodecError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The stream ended before the required bytes were available
    Truncated,
    /// Enough bytes were present but their content is invalid
    Malformed,
    /// The caller passed an invalid argument before any I/O happened
    PreconditionViolation,
    /// The underlying stream failed for a reason other than end-of-input
    Io,
}

/// Codec and commitment errors
#[derive(Error, Debug)]
pub enum CodecError {
    #[error("Truncated input while reading {needed} byte(s)")]
    Truncated { needed: usize },

    #[error("Invalid address version: {0}")]
    InvalidAddressVersion(u8),

    #[error("Invalid address length: {0}")]
    InvalidAddressLength(usize),

    #[error("Varint overflows 64 bits")]
    VarintOverflow,

    #[error("Invalid UTF-8 string")]
    InvalidUtf8,

    #[error("Too many transactions: {count} exceeds maximum {max}")]
    TooManyTransactions { count: u64, max: u64 },

    #[error("Trailing bytes after value: {remaining}")]
    TrailingBytes { remaining: usize },

    #[error("Nonce must be 32 bytes long, got {0}")]
    InvalidNonceLength(usize),

    #[error("Hex decode error: {0}")]
    HexDecode(#[from] hex::FromHexError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CodecError {
    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            CodecError::Truncated { .. } => ErrorKind::Truncated,
            CodecError::InvalidAddressVersion(_)
            | CodecError::InvalidAddressLength(_)
            | CodecError::VarintOverflow
            | CodecError::InvalidUtf8
            | CodecError::TooManyTransactions { .. }
            | CodecError::TrailingBytes { .. }
            | CodecError::HexDecode(_) => ErrorKind::Malformed,
            CodecError::InvalidNonceLength(_) | CodecError::Config(_) => {
                ErrorKind::PreconditionViolation
            }
            CodecError::Io(_) => ErrorKind::Io,
        }
    }

    /// Map a failed `read_exact` of `needed` bytes into a codec error.
    pub(crate) fn from_read(err: std::io::Error, needed: usize) -> Self {
        if err.kind() == std::io::ErrorKind::UnexpectedEof {
            CodecError::Truncated { needed }
        } else {
            CodecError::Io(err)
        }
    }
}

/// Result type for codec operations
pub type CodecResult<T> = Result<T, CodecError>;
