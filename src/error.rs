//! Error handling for cookie-export

use thiserror::Error;

/// Main error type for cookie export operations
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Cookie database error: {0}")]
    Database(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid domain pattern: {0}")]
    InvalidPattern(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("File not found: {0}")]
    FileNotFound(String),
}

/// Failure to decrypt a single `v10` cookie value.
///
/// None of these abort an export: the affected cookie keeps an empty value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecryptError {
    #[error("Failed to create AES decryptor: {0}")]
    CipherInitFailed(String),

    #[error("Invalid padding length: {0}")]
    InvalidPadding(u8),

    #[error("Invalid ciphertext length: {0} bytes")]
    InvalidLength(usize),
}

/// A cookie row whose columns could not be read with the expected types.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Failed to read cookie {column}: {message}")]
pub struct RowDecodeError {
    pub column: &'static str,
    pub message: String,
}

impl RowDecodeError {
    pub fn new(column: &'static str, message: impl Into<String>) -> Self {
        Self {
            column,
            message: message.into(),
        }
    }
}

/// Result type alias for cookie export operations
pub type Result<T> = std::result::Result<T, ExportError>;
