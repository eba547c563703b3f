//! Raw cookie rows and the canonical records they normalize into.

use super::decrypt::{decrypt, is_v10};
use super::key::DerivedKey;
use crate::error::DecryptError;
use serde::Serialize;

/// Seconds between 1601-01-01 and 1970-01-01, both UTC.
const WINDOWS_TO_UNIX_EPOCH_SECS: i64 = 11_644_473_600;

/// One row of the `cookies` table as read from disk.
///
/// Optional fields are `None` when the database schema has no such column.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawCookieRow {
    pub host: String,
    pub path: Option<String>,
    pub name: String,
    pub value: String,
    pub encrypted_value: Vec<u8>,
    pub secure: Option<i64>,
    pub http_only: Option<i64>,
    pub same_site: Option<i64>,
    /// Microseconds since 1601-01-01 UTC; 0 for session cookies.
    pub expires_utc: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SameSite {
    Strict,
    Lax,
    None,
}

impl SameSite {
    /// Map Chromium's `CookieSameSite` code. Unspecified (-1) and unknown
    /// codes have no attribute.
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            2 => Some(SameSite::Strict),
            1 => Some(SameSite::Lax),
            0 => Some(SameSite::None),
            _ => None,
        }
    }
}

struct CookieDefaults {
    path: &'static str,
    http_only: bool,
    secure: bool,
    same_site: Option<SameSite>,
}

const DEFAULTS: CookieDefaults = CookieDefaults {
    path: "/",
    http_only: true,
    secure: true,
    same_site: Some(SameSite::Lax),
};

/// An exported cookie.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CookieRecord {
    name: String,
    value: String,
    domain: String,
    path: String,
    expires: i64,
    http_only: bool,
    secure: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    same_site: Option<SameSite>,
}

impl CookieRecord {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Unix seconds, or 0 for a session cookie.
    pub fn expires(&self) -> i64 {
        self.expires
    }

    pub fn http_only(&self) -> bool {
        self.http_only
    }

    pub fn secure(&self) -> bool {
        self.secure
    }

    pub fn same_site(&self) -> Option<SameSite> {
        self.same_site
    }
}

/// Where a record's value came from.
///
/// The exported JSON cannot tell `Absent` from `Failed`; this can.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueOrigin {
    Plain,
    Decrypted,
    Absent,
    Failed(DecryptError),
}

/// Normalize one row, decrypting its value if needed.
pub fn normalize(row: RawCookieRow, key: &DerivedKey) -> CookieRecord {
    normalize_traced(row, key).0
}

/// Like [`normalize`], also reporting how the value was resolved.
pub fn normalize_traced(row: RawCookieRow, key: &DerivedKey) -> (CookieRecord, ValueOrigin) {
    let (value, origin) = resolve_value(&row, key);
    let record = CookieRecord {
        name: row.name,
        value,
        domain: row.host,
        path: row.path.unwrap_or_else(|| DEFAULTS.path.to_string()),
        expires: chromium_expires_to_unix_seconds(row.expires_utc),
        http_only: row.http_only.map_or(DEFAULTS.http_only, |flag| flag != 0),
        secure: row.secure.map_or(DEFAULTS.secure, |flag| flag != 0),
        same_site: row.same_site.map_or(DEFAULTS.same_site, SameSite::from_code),
    };
    (record, origin)
}

fn resolve_value(row: &RawCookieRow, key: &DerivedKey) -> (String, ValueOrigin) {
    if !row.value.is_empty() {
        return (row.value.clone(), ValueOrigin::Plain);
    }
    if row.encrypted_value.is_empty() || !is_v10(&row.encrypted_value) {
        return (String::new(), ValueOrigin::Absent);
    }
    match decrypt(&row.encrypted_value, key) {
        Ok(value) => (value, ValueOrigin::Decrypted),
        Err(err) => {
            log::debug!(
                "Failed to decrypt cookie {} for {}: {}",
                row.name,
                row.host,
                err
            );
            (String::new(), ValueOrigin::Failed(err))
        }
    }
}

/// Convert Chromium's 1601-based microsecond timestamp to Unix seconds.
pub fn chromium_expires_to_unix_seconds(expires_utc: i64) -> i64 {
    if expires_utc > 0 {
        (expires_utc / 1_000_000) - WINDOWS_TO_UNIX_EPOCH_SECS
    } else {
        0
    }
}
