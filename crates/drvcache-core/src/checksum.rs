//! SHA-256 of the downloaded driver archive.
//!
//! Always logged; enforced only when the config pins an expected digest.

use crate::error::DriverError;
use sha2::{Digest, Sha256};

/// Lowercase hex SHA-256 of `bytes`.
pub fn sha256_hex(bytes: &[u8]) -> String {
    hex::encode(Sha256::digest(bytes))
}

/// Compares the archive digest against `expected` (case-insensitive hex).
pub fn verify_sha256(bytes: &[u8], expected: &str) -> Result<(), DriverError> {
    let actual = sha256_hex(bytes);
    if actual.eq_ignore_ascii_case(expected.trim()) {
        Ok(())
    } else {
        Err(DriverError::ChecksumMismatch {
            expected: expected.trim().to_ascii_lowercase(),
            actual,
        })
    }
}
