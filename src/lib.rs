//! cookie-export - Chromium cookie extraction and decryption
//!
//! This crate reads the cookie database of a Chromium-family browser,
//! decrypts `v10` values with the key derived from the browser's master
//! secret, and emits the cookies as JSON records.

pub mod browser;
pub mod cli;
pub mod config;
pub mod cookies;
pub mod error;
pub mod exit_code;
pub mod logging;
pub mod output;
pub mod utils;

pub use error::{DecryptError, ExportError, Result, RowDecodeError};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
