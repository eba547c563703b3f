//! Master secret retrieval.

use super::ChromiumBrowser;
use std::fmt;

/// Password Chromium falls back to when no keychain entry is available.
const FALLBACK_PASSWORD: &[u8] = b"peanuts";

/// The password protecting a browser's cookie encryption key.
#[derive(Clone, PartialEq, Eq)]
pub struct MasterSecret(Vec<u8>);

impl MasterSecret {
    /// Wrap raw credential bytes, trimming surrounding ASCII whitespace.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self(bytes.trim_ascii().to_vec())
    }

    pub fn fallback() -> Self {
        Self(FALLBACK_PASSWORD.to_vec())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for MasterSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("MasterSecret(..)")
    }
}

/// Find the master secret for `browser`.
///
/// An explicit `password` wins. Otherwise the macOS keychain entry
/// "<account> Safe Storage" is read; any failure falls back to the
/// well-known password.
pub fn master_secret(browser: ChromiumBrowser, password: Option<&str>) -> MasterSecret {
    if let Some(password) = password {
        log::debug!("Using master secret from configuration");
        return MasterSecret::from_bytes(password.as_bytes());
    }

    match read_keychain_password(browser) {
        Some(secret) => {
            log::debug!(
                "Using master secret from keychain account {}",
                browser.keychain_account()
            );
            secret
        }
        None => {
            log::debug!("Using fallback master secret");
            MasterSecret::fallback()
        }
    }
}

#[cfg(target_os = "macos")]
fn read_keychain_password(browser: ChromiumBrowser) -> Option<MasterSecret> {
    use security_framework::passwords::get_generic_password;

    let account = browser.keychain_account();
    let service = format!("{} Safe Storage", account);
    match get_generic_password(&service, account) {
        Ok(password) => Some(MasterSecret::from_bytes(&password)),
        Err(err) => {
            log::warn!("Failed to read keychain password for {}: {}", account, err);
            None
        }
    }
}

#[cfg(not(target_os = "macos"))]
fn read_keychain_password(browser: ChromiumBrowser) -> Option<MasterSecret> {
    log::debug!(
        "Skipping keychain lookup for {} outside macOS",
        browser.keychain_account()
    );
    None
}
