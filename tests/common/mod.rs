#![allow(dead_code)]

use aes::Aes128;
use cbc::cipher::{block_padding::Pkcs7, BlockEncryptMut, KeyIvInit};
use cookie_export::cookies::{derive_key, DerivedKey};
use rusqlite::{params, Connection};
use std::path::Path;

pub const SECRET: &str = "test-secret";
const AES_IV: &[u8; 16] = b"                ";

/// 2024-01-01T00:00:00Z in Chromium's 1601-based microseconds.
pub const JAN_2024_CHROMIUM: i64 = 13_348_540_800_000_000;
pub const JAN_2024_UNIX: i64 = 1_704_067_200;

pub fn test_key() -> DerivedKey {
    derive_key(SECRET.as_bytes())
}

pub fn encrypt_v10(plaintext: &[u8], key: &DerivedKey) -> Vec<u8> {
    let mut buffer = vec![0u8; (plaintext.len() / 16 + 1) * 16];
    buffer[..plaintext.len()].copy_from_slice(plaintext);
    let ciphertext = cbc::Encryptor::<Aes128>::new_from_slices(key.as_bytes(), AES_IV)
        .expect("encryptor")
        .encrypt_padded_mut::<Pkcs7>(&mut buffer, plaintext.len())
        .expect("encrypt");
    [b"v10".as_slice(), ciphertext].concat()
}

/// Encrypt a value the way current Chromium does, behind a 32-byte digest.
pub fn encrypt_v10_with_digest(value: &str, key: &DerivedKey) -> Vec<u8> {
    let mut plaintext = vec![0x5A; 32];
    plaintext.extend_from_slice(value.as_bytes());
    encrypt_v10(&plaintext, key)
}

/// A current-schema database with a mix of plain, encrypted and broken rows.
pub fn create_chrome_cookie_db(path: &Path) {
    let key = test_key();
    let conn = Connection::open(path).expect("open chrome db");
    conn.execute("CREATE TABLE meta (key TEXT, value TEXT)", [])
        .expect("create meta");
    conn.execute("INSERT INTO meta (key, value) VALUES ('version', '24')", [])
        .expect("insert meta");
    conn.execute(
        "CREATE TABLE cookies (
            creation_utc INTEGER,
            host_key TEXT,
            name TEXT,
            value TEXT,
            encrypted_value BLOB,
            path TEXT,
            expires_utc INTEGER,
            is_secure INTEGER,
            is_httponly INTEGER,
            samesite INTEGER
        )",
        [],
    )
    .expect("create cookies");

    let insert = "INSERT INTO cookies (
            creation_utc, host_key, name, value, encrypted_value, path, expires_utc,
            is_secure, is_httponly, samesite
        ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)";

    conn.execute(
        insert,
        params![1, ".example.com", "plain", "abc", Vec::<u8>::new(), "/", JAN_2024_CHROMIUM, 1, 1, 2],
    )
    .expect("insert plain cookie");
    conn.execute(
        insert,
        params![
            2,
            "example.com",
            "session",
            "",
            encrypt_v10_with_digest("decrypted-value", &key),
            "/app",
            0,
            0,
            0,
            0
        ],
    )
    .expect("insert encrypted cookie");
    conn.execute(
        insert,
        params![3, "broken.example", "broken", "x", Vec::<u8>::new(), "/", "soon", 1, 1, 1],
    )
    .expect("insert malformed cookie");
    conn.execute(
        insert,
        params![4, "ads.tracker.net", "tracking", "", b"v11opaque".to_vec(), "/", 0, 1, 0, -1],
    )
    .expect("insert untagged cookie");
    conn.execute(
        insert,
        params![5, "example.com", "short", "", encrypt_v10(b"tiny", &key), "/", 0, 1, 1, 1],
    )
    .expect("insert short encrypted cookie");
}

/// An old-schema database: legacy flag column names, no samesite column.
pub fn create_legacy_cookie_db(path: &Path) {
    let conn = Connection::open(path).expect("open legacy db");
    conn.execute(
        "CREATE TABLE cookies (
            host_key TEXT,
            name TEXT,
            value TEXT,
            encrypted_value BLOB,
            path TEXT,
            expires_utc INTEGER,
            secure INTEGER,
            httponly INTEGER
        )",
        [],
    )
    .expect("create cookies");
    conn.execute(
        "INSERT INTO cookies (host_key, name, value, encrypted_value, path, expires_utc, secure, httponly)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        params!["legacy.example", "old", "value", None::<Vec<u8>>, "/", 0, 0, 1],
    )
    .expect("insert legacy cookie");
}
