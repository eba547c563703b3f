//! Chromium cookie extraction
//!
//! Reading a cookie database takes four steps: derive the AES key from the
//! browser's master secret, read the raw rows, decrypt `v10` values, and
//! normalize each row into a [`CookieRecord`].

use crate::browser::keychain;
use crate::config::ExportConfig;
use crate::error::{ExportError, Result};
use crate::utils::FileUtils;
use regex::Regex;
use std::path::PathBuf;

pub mod decrypt;
pub mod key;
pub mod pipeline;
pub mod record;
pub mod store;

pub use decrypt::decrypt;
pub use key::{derive as derive_key, DerivedKey};
pub use pipeline::ExtractionPipeline;
pub use record::{normalize, CookieRecord, RawCookieRow, SameSite, ValueOrigin};
pub use store::CookieDatabase;

/// Main interface for exporting browser cookies
pub struct CookieExporter {
    config: ExportConfig,
}

impl CookieExporter {
    /// Create a new cookie exporter with the given configuration
    pub fn new(config: ExportConfig) -> Self {
        Self { config }
    }

    /// Read, decrypt and normalize every cookie in the configured database.
    pub fn export(&self) -> Result<Vec<CookieRecord>> {
        let exclude = self.exclude_pattern()?;
        let cookie_path = self.cookie_path()?;
        log::info!("Using cookie path: {:?}", cookie_path);

        let database = CookieDatabase::open(&cookie_path)?;
        let secret = keychain::master_secret(self.config.browser, self.config.password.as_deref());
        let key = DerivedKey::derive(secret.as_bytes());

        let rows = database.read_rows()?;
        let mut pipeline = ExtractionPipeline::new(key);
        if let Some(exclude) = exclude {
            pipeline = pipeline.with_exclude(exclude);
        }
        let records = pipeline.run(rows);
        if records.is_empty() {
            log::warn!("No cookies found in {:?}", cookie_path);
        }
        Ok(records)
    }

    fn cookie_path(&self) -> Result<PathBuf> {
        match &self.config.cookie_path {
            Some(path) => FileUtils::expand_path(path),
            None => self.config.browser.default_cookie_path(),
        }
    }

    fn exclude_pattern(&self) -> Result<Option<Regex>> {
        self.config
            .exclude_domains
            .as_deref()
            .map(str::trim)
            .filter(|pattern| !pattern.is_empty())
            .map(|pattern| {
                Regex::new(pattern).map_err(|e| ExportError::InvalidPattern(e.to_string()))
            })
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::CookieExporter;
    use crate::config::ExportConfig;
    use crate::error::ExportError;

    #[test]
    fn export_reports_missing_database() {
        let exporter = CookieExporter::new(ExportConfig {
            cookie_path: Some("/nonexistent/Cookies".to_string()),
            ..ExportConfig::default()
        });
        let err = exporter.export().expect_err("missing");
        assert!(matches!(err, ExportError::FileNotFound(_)));
    }

    #[test]
    fn export_rejects_invalid_exclude_pattern() {
        let exporter = CookieExporter::new(ExportConfig {
            cookie_path: Some("/nonexistent/Cookies".to_string()),
            exclude_domains: Some("(unclosed".to_string()),
            ..ExportConfig::default()
        });
        let err = exporter.export().expect_err("invalid pattern");
        assert!(matches!(err, ExportError::InvalidPattern(_)));
    }

    #[test]
    fn blank_exclude_pattern_is_ignored() {
        let exporter = CookieExporter::new(ExportConfig {
            exclude_domains: Some("  ".to_string()),
            ..ExportConfig::default()
        });
        assert!(exporter.exclude_pattern().expect("pattern").is_none());
    }
}
