//! Read-only access to a Chromium `Cookies` SQLite database.

use super::record::RawCookieRow;
use crate::error::{ExportError, Result, RowDecodeError};
use crate::utils::FileUtils;
use rusqlite::types::{FromSql, ValueRef};
use rusqlite::{Connection, OpenFlags, Row};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tempfile::{tempdir, TempDir};

/// A private copy of a cookie database.
///
/// The browser keeps its database locked while running, so every read goes
/// through a copy in a temp dir that is removed on drop. The copy is opened
/// read-only. Only the main database file is copied, so rows still sitting in
/// a `-wal` or `-journal` sidecar are not seen.
pub struct CookieDatabase {
    conn: Connection,
    _temp_dir: TempDir,
}

impl CookieDatabase {
    pub fn open(cookie_db: &Path) -> Result<Self> {
        FileUtils::check_file_readable(cookie_db)?;

        let temp_dir = tempdir()
            .map_err(|e| ExportError::Database(format!("Failed to create temp dir: {}", e)))?;
        let temp_db = temp_dir.path().join("chromium-cookies.sqlite");
        fs::copy(cookie_db, &temp_db).map_err(|e| {
            ExportError::PermissionDenied(format!(
                "Failed to copy cookies DB {:?}: {}",
                cookie_db, e
            ))
        })?;

        let conn = Connection::open_with_flags(&temp_db, OpenFlags::SQLITE_OPEN_READ_ONLY)
            .map_err(|e| ExportError::Database(format!("Failed to open cookies DB: {}", e)))?;

        Ok(Self {
            conn,
            _temp_dir: temp_dir,
        })
    }

    /// Read every row of the `cookies` table.
    ///
    /// Rows with unexpected column types come back as `Err` so the caller can
    /// skip them without losing the rest.
    pub fn read_rows(&self) -> Result<Vec<std::result::Result<RawCookieRow, RowDecodeError>>> {
        let columns = self.read_cookie_columns()?;
        let query = cookie_query(&columns);
        log::debug!("Cookie query: {}", query);

        let mut stmt = self
            .conn
            .prepare(&query)
            .map_err(|e| ExportError::Database(format!("Failed to prepare cookie query: {}", e)))?;
        let mut rows = stmt
            .query([])
            .map_err(|e| ExportError::Database(format!("Failed to query cookies: {}", e)))?;

        let mut decoded = Vec::new();
        while let Some(row) = rows
            .next()
            .map_err(|e| ExportError::Database(format!("Failed to read cookie row: {}", e)))?
        {
            decoded.push(decode_row(row));
        }
        Ok(decoded)
    }

    fn read_cookie_columns(&self) -> Result<HashSet<String>> {
        let mut stmt = self
            .conn
            .prepare("PRAGMA table_info(cookies)")
            .map_err(|e| ExportError::Database(format!("Failed to read cookie schema: {}", e)))?;
        let rows = stmt
            .query_map([], |row| row.get::<_, String>(1))
            .map_err(|e| ExportError::Database(format!("Failed to read cookie schema: {}", e)))?;
        let mut columns = HashSet::new();
        for row in rows {
            let name = row.map_err(|e| {
                ExportError::Database(format!("Failed to read cookie schema: {}", e))
            })?;
            columns.insert(name);
        }
        if columns.is_empty() {
            return Err(ExportError::Database(
                "Cookies database has no cookies table".to_string(),
            ));
        }
        Ok(columns)
    }
}

/// Build the cookie query for the columns this schema version has.
///
/// Older Chromium versions name the flags `secure`/`httponly` and predate the
/// `samesite` column; missing columns are selected as NULL.
fn cookie_query(columns: &HashSet<String>) -> String {
    let pick = |candidates: &[&'static str]| -> &'static str {
        candidates
            .iter()
            .copied()
            .find(|name| columns.contains(*name))
            .unwrap_or("NULL")
    };
    format!(
        "SELECT host_key, {}, {}, expires_utc, name, value, encrypted_value, {}, {} FROM cookies",
        pick(&["path"]),
        pick(&["is_secure", "secure"]),
        pick(&["is_httponly", "httponly"]),
        pick(&["samesite"]),
    )
}

fn decode_row(row: &Row<'_>) -> std::result::Result<RawCookieRow, RowDecodeError> {
    Ok(RawCookieRow {
        host: column(row, 0, "host")?,
        path: column(row, 1, "path")?,
        secure: column(row, 2, "secure flag")?,
        expires_utc: column(row, 3, "expiry")?,
        name: column(row, 4, "name")?,
        value: column(row, 5, "value")?,
        encrypted_value: read_encrypted_value(row)?,
        http_only: column(row, 7, "httponly flag")?,
        same_site: column(row, 8, "samesite")?,
    })
}

fn column<T: FromSql>(
    row: &Row<'_>,
    index: usize,
    name: &'static str,
) -> std::result::Result<T, RowDecodeError> {
    row.get(index)
        .map_err(|e| RowDecodeError::new(name, e.to_string()))
}

fn read_encrypted_value(row: &Row<'_>) -> std::result::Result<Vec<u8>, RowDecodeError> {
    let value = row
        .get_ref(6)
        .map_err(|e| RowDecodeError::new("ciphertext", e.to_string()))?;
    match value {
        ValueRef::Blob(bytes) => Ok(bytes.to_vec()),
        ValueRef::Text(text) => Ok(text.to_vec()),
        ValueRef::Null => Ok(Vec::new()),
        _ => Err(RowDecodeError::new(
            "ciphertext",
            "Unsupported cookie ciphertext type",
        )),
    }
}
