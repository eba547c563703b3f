//! Utility functions and helpers

use crate::error::{ExportError, Result};
use regex::{Captures, Regex};
use std::env;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

static ENV_VAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$\{([^}]*)\}|\$([A-Za-z_][A-Za-z0-9_]*)").expect("valid env var pattern")
});

/// File system utilities
pub struct FileUtils;

impl FileUtils {
    /// Expand `$VAR`, `${VAR}` and a leading tilde (~) in file paths.
    ///
    /// Unset variables expand to the empty string.
    pub fn expand_path(path: &str) -> Result<PathBuf> {
        let expanded = Self::expand_env(path);
        if expanded == "~" {
            return Self::home_dir();
        }
        if let Some(rest) = expanded
            .strip_prefix("~/")
            .or_else(|| expanded.strip_prefix("~\\"))
        {
            return Ok(Self::home_dir()?.join(rest));
        }
        Ok(PathBuf::from(expanded))
    }

    fn expand_env(path: &str) -> String {
        ENV_VAR
            .replace_all(path, |caps: &Captures<'_>| {
                let name = caps
                    .get(1)
                    .or_else(|| caps.get(2))
                    .map_or("", |m| m.as_str());
                env::var(name).unwrap_or_default()
            })
            .into_owned()
    }

    fn home_dir() -> Result<PathBuf> {
        dirs::home_dir()
            .ok_or_else(|| ExportError::Config("Cannot determine home directory".to_string()))
    }

    /// Check if file exists and is readable
    pub fn check_file_readable(path: &Path) -> Result<()> {
        if !path.exists() {
            return Err(ExportError::FileNotFound(format!(
                "File not found: {:?}",
                path
            )));
        }

        if !path.is_file() {
            return Err(ExportError::Config(format!("Path is not a file: {:?}", path)));
        }

        std::fs::File::open(path).map_err(|e| {
            ExportError::PermissionDenied(format!("Cannot read file {:?}: {}", path, e))
        })?;

        Ok(())
    }
}
