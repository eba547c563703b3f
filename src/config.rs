//! Configuration management for cookie-export

use std::path::PathBuf;

use crate::browser::ChromiumBrowser;

/// Output configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    pub file: Option<PathBuf>,
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            file: None,
            pretty: true,
        }
    }
}

/// Main configuration struct
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportConfig {
    /// Cookie database to read; the browser's default profile when unset.
    /// `~` and `$VAR` are expanded at export time.
    pub cookie_path: Option<String>,
    pub browser: ChromiumBrowser,
    /// Master secret override, bypassing the keychain.
    pub password: Option<String>,
    /// Regular expression matched against cookie domains to drop.
    pub exclude_domains: Option<String>,
    pub output: OutputConfig,
}
