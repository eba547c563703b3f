//! `v10` cookie value decryption.
//!
//! Chromium on macOS stores cookie values as `"v10" || AES-128-CBC(plaintext)`
//! with a fixed IV of sixteen spaces. Newer databases prepend a 32-byte
//! SHA-256 digest of the host to the plaintext before encrypting.

use super::key::DerivedKey;
use crate::error::DecryptError;
use aes::Aes128;
use cbc::cipher::{block_padding::NoPadding, BlockDecryptMut, KeyIvInit};

pub const V10_PREFIX: &[u8] = b"v10";
const AES_IV: &[u8; 16] = b"                ";
const BLOCK_SIZE: usize = 16;
const HASH_PREFIX_LENGTH: usize = 32;

/// Whether `encrypted_value` carries the `v10` tag.
pub fn is_v10(encrypted_value: &[u8]) -> bool {
    encrypted_value.starts_with(V10_PREFIX)
}

/// Decrypt a raw `encrypted_value` column.
///
/// Values without the `v10` tag are not ours to decrypt and yield an empty
/// string rather than an error.
pub fn decrypt(encrypted_value: &[u8], key: &DerivedKey) -> Result<String, DecryptError> {
    decrypt_with_key(encrypted_value, key.as_bytes())
}

pub(crate) fn decrypt_with_key(encrypted_value: &[u8], key: &[u8]) -> Result<String, DecryptError> {
    let Some(ciphertext) = encrypted_value.strip_prefix(V10_PREFIX) else {
        return Ok(String::new());
    };

    let decryptor = cbc::Decryptor::<Aes128>::new_from_slices(key, AES_IV)
        .map_err(|e| DecryptError::CipherInitFailed(e.to_string()))?;

    if ciphertext.is_empty() || ciphertext.len() % BLOCK_SIZE != 0 {
        return Err(DecryptError::InvalidLength(ciphertext.len()));
    }

    let mut buffer = ciphertext.to_vec();
    let decrypted = decryptor
        .decrypt_padded_mut::<NoPadding>(&mut buffer)
        .map_err(|_| DecryptError::InvalidLength(ciphertext.len()))?;

    let unpadded = strip_padding(decrypted)?;
    let value = if unpadded.len() > HASH_PREFIX_LENGTH {
        &unpadded[HASH_PREFIX_LENGTH..]
    } else {
        unpadded
    };

    Ok(String::from_utf8_lossy(value).into_owned())
}

fn strip_padding(decrypted: &[u8]) -> Result<&[u8], DecryptError> {
    let padding = match decrypted.last() {
        Some(&padding) => padding,
        None => return Err(DecryptError::InvalidLength(0)),
    };
    if padding == 0 || usize::from(padding) > BLOCK_SIZE {
        return Err(DecryptError::InvalidPadding(padding));
    }
    Ok(&decrypted[..decrypted.len() - usize::from(padding)])
}
