//! Error types for orderwire
//!
//! `DecodeError` and `EncodeError` are the codec's own taxonomy;
//! `OrderWireError` unifies them with I/O, JSON and configuration failures
//! for the CLI and other collaborators.

use thiserror::Error;

/// Result type alias using OrderWireError
pub type Result<T> = std::result::Result<T, OrderWireError>;

/// Errors produced while decoding a byte stream
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("unexpected end of buffer")]
    UnexpectedEndOfBuffer,

    #[error("varint overflows 64 bits")]
    IntegerOverflow,

    #[error("invalid wire type: {0}")]
    InvalidWireType(u8),

    #[error("truncated payload: declared {expected} bytes, {remaining} remaining")]
    TruncatedPayload { expected: u64, remaining: usize },

    #[error("malformed {message}: {reason}")]
    MalformedMessage {
        message: &'static str,
        reason: String,
    },

    #[error("recursion limit of {0} nested messages exceeded")]
    RecursionLimitExceeded(usize),

    #[error("message too large: {size} bytes (max {max})")]
    MessageTooLarge { size: usize, max: usize },
}

impl DecodeError {
    /// True when the input ended before a field's declared or implied length
    pub fn is_truncation(&self) -> bool {
        matches!(
            self,
            DecodeError::UnexpectedEndOfBuffer | DecodeError::TruncatedPayload { .. }
        )
    }

    pub(crate) fn malformed(message: &'static str, reason: impl Into<String>) -> Self {
        DecodeError::MalformedMessage {
            message,
            reason: reason.into(),
        }
    }
}

/// Errors produced while encoding
///
/// Only reachable through the low-level tag API; record schemas are
/// checked when they are compiled.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    #[error("field number {0} out of range (1..=536870911)")]
    FieldNumberOutOfRange(u32),

    #[error("field number {0} is duplicated or declared out of order")]
    UnorderedFieldNumber(u32),
}

/// Unified error type for orderwire operations
#[derive(Debug, Error)]
pub enum OrderWireError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Codec Errors
    // -------------------------------------------------------------------------
    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),

    #[error("Encode error: {0}")]
    Encode(#[from] EncodeError),

    // -------------------------------------------------------------------------
    // Text Format Errors
    // -------------------------------------------------------------------------
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Hex error: {0}")]
    Hex(#[from] hex::FromHexError),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}
