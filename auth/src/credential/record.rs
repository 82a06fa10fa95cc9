use serde::Deserialize;
use serde::Serialize;

use super::errors::RecordError;
use crate::codec;

/// Salt length in bytes, drawn fresh for every new password.
pub const SALT_LEN: usize = 16;

/// Derived hash length in bytes, matching the SHA-512 output size.
pub const HASH_LEN: usize = 64;

/// The salt, iteration count, and derived hash for one identity's password.
///
/// A record is created or replaced only when a new password is set, is
/// read-only during verification, and lives and dies with its owning
/// identity. When `valid` is false no password is configured: `salt` and
/// `hash` are meaningless and must never be compared against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialRecord {
    pub salt: [u8; SALT_LEN],
    pub iterations: u32,
    pub hash: [u8; HASH_LEN],
    pub valid: bool,
}

/// Serialization-boundary form of a [`CredentialRecord`].
///
/// Salt and hash travel as base64 text wherever a record crosses a
/// configuration or database boundary; the binary forms are only held
/// in memory during active use.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersistedCredential {
    pub salt: String,
    pub iterations: u32,
    pub hash: String,
}

impl CredentialRecord {
    /// The record of an identity with no password configured.
    pub fn unset() -> Self {
        Self {
            salt: [0; SALT_LEN],
            iterations: 1,
            hash: [0; HASH_LEN],
            valid: false,
        }
    }

    /// Produce the persisted text form of this record.
    ///
    /// # Returns
    /// The base64-encoded form, or None when no password is configured
    /// (an unset record carries nothing worth persisting)
    pub fn to_persisted(&self) -> Option<PersistedCredential> {
        if !self.valid {
            return None;
        }
        Some(PersistedCredential {
            salt: codec::encode(&self.salt),
            iterations: self.iterations,
            hash: codec::encode(&self.hash),
        })
    }

    /// Rebuild a record from its persisted text form.
    ///
    /// # Errors
    /// * `Format` - A field is not valid base64
    /// * `Length` - A field decoded to the wrong number of bytes
    pub fn from_persisted(persisted: &PersistedCredential) -> Result<Self, RecordError> {
        Ok(Self {
            salt: decode_field("salt", &persisted.salt)?,
            iterations: persisted.iterations,
            hash: decode_field("hash", &persisted.hash)?,
            valid: true,
        })
    }
}

fn decode_field<const N: usize>(field: &'static str, text: &str) -> Result<[u8; N], RecordError> {
    let bytes = codec::decode(text)?;
    let actual = bytes.len();

    <[u8; N]>::try_from(bytes).map_err(|_| RecordError::Length {
        field,
        expected: N,
        actual,
    })
}
