//! Chromium-family browser settings
//!
//! Each browser differs only in where it keeps its profile data and under
//! which keychain account it stores the cookie master secret.

use crate::error::{ExportError, Result};
#[cfg(not(target_os = "macos"))]
use dirs::config_dir;
use dirs::home_dir;
use std::path::PathBuf;
use std::str::FromStr;

pub mod keychain;

/// Supported Chromium-based browsers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChromiumBrowser {
    #[default]
    Chrome,
    Chromium,
    Edge,
    Brave,
    Opera,
    Vivaldi,
    Whale,
}

impl FromStr for ChromiumBrowser {
    type Err = ExportError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "chrome" => Ok(ChromiumBrowser::Chrome),
            "chromium" => Ok(ChromiumBrowser::Chromium),
            "edge" => Ok(ChromiumBrowser::Edge),
            "brave" => Ok(ChromiumBrowser::Brave),
            "opera" => Ok(ChromiumBrowser::Opera),
            "vivaldi" => Ok(ChromiumBrowser::Vivaldi),
            "whale" => Ok(ChromiumBrowser::Whale),
            _ => Err(ExportError::Config(format!("Unsupported browser: {}", s))),
        }
    }
}

impl ChromiumBrowser {
    /// Keychain account holding the "<account> Safe Storage" password.
    pub fn keychain_account(self) -> &'static str {
        match self {
            ChromiumBrowser::Chrome => "Chrome",
            ChromiumBrowser::Chromium => "Chromium",
            ChromiumBrowser::Edge => "Microsoft Edge",
            ChromiumBrowser::Brave => "Brave",
            ChromiumBrowser::Opera => "Opera",
            ChromiumBrowser::Vivaldi => "Vivaldi",
            ChromiumBrowser::Whale => "Whale",
        }
    }

    /// Profile data directory relative to the platform's application data dir.
    fn relative_user_data_dir(self) -> &'static str {
        #[cfg(target_os = "macos")]
        {
            match self {
                ChromiumBrowser::Chrome => "Google/Chrome",
                ChromiumBrowser::Chromium => "Chromium",
                ChromiumBrowser::Edge => "Microsoft Edge",
                ChromiumBrowser::Brave => "BraveSoftware/Brave-Browser",
                ChromiumBrowser::Opera => "com.operasoftware.Opera",
                ChromiumBrowser::Vivaldi => "Vivaldi",
                ChromiumBrowser::Whale => "Naver/Whale",
            }
        }
        #[cfg(not(target_os = "macos"))]
        {
            match self {
                ChromiumBrowser::Chrome => "google-chrome",
                ChromiumBrowser::Chromium => "chromium",
                ChromiumBrowser::Edge => "microsoft-edge",
                ChromiumBrowser::Brave => "BraveSoftware/Brave-Browser",
                ChromiumBrowser::Opera => "opera",
                ChromiumBrowser::Vivaldi => "vivaldi",
                ChromiumBrowser::Whale => "naver-whale",
            }
        }
    }

    /// Opera keeps a single profile directly in its data dir.
    fn supports_profiles(self) -> bool {
        !matches!(self, ChromiumBrowser::Opera)
    }

    pub fn user_data_dir(self) -> Result<PathBuf> {
        #[cfg(target_os = "macos")]
        let base = home_dir().map(|home| home.join("Library/Application Support"));
        #[cfg(not(target_os = "macos"))]
        let base = config_dir().or_else(|| home_dir().map(|home| home.join(".config")));

        let base = base
            .ok_or_else(|| ExportError::Config("Cannot determine home directory".to_string()))?;
        Ok(base.join(self.relative_user_data_dir()))
    }

    /// Location of the default profile's cookie database.
    pub fn default_cookie_path(self) -> Result<PathBuf> {
        let user_data_dir = self.user_data_dir()?;
        if self.supports_profiles() {
            Ok(user_data_dir.join("Default").join("Cookies"))
        } else {
            Ok(user_data_dir.join("Cookies"))
        }
    }
}
