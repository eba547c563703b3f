//! Master secret to AES key derivation.

use pbkdf2::pbkdf2_hmac;
use sha1::Sha1;
use std::fmt;

const KEY_DERIVE_SALT: &[u8] = b"saltysalt";
const KEY_DERIVE_ITERATIONS: u32 = 1003;
pub const KEY_LENGTH: usize = 16;

/// AES-128 key derived from a browser master secret.
#[derive(Clone, PartialEq, Eq)]
pub struct DerivedKey([u8; KEY_LENGTH]);

impl DerivedKey {
    /// Derive the key Chromium uses on macOS for `v10` cookies.
    ///
    /// The secret is used as given; callers trim keychain output first.
    pub fn derive(secret: &[u8]) -> Self {
        Self(pbkdf2_sha1(secret, KEY_DERIVE_ITERATIONS))
    }

    pub fn as_bytes(&self) -> &[u8; KEY_LENGTH] {
        &self.0
    }
}

impl fmt::Debug for DerivedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("DerivedKey(..)")
    }
}

/// Shorthand for [`DerivedKey::derive`].
pub fn derive(secret: &[u8]) -> DerivedKey {
    DerivedKey::derive(secret)
}

fn pbkdf2_sha1(secret: &[u8], iterations: u32) -> [u8; KEY_LENGTH] {
    let mut key = [0u8; KEY_LENGTH];
    pbkdf2_hmac::<Sha1>(secret, KEY_DERIVE_SALT, iterations, &mut key);
    key
}
