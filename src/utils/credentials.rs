//! Credential Utilities
//!
//! Passwords are stored as standard Base64 of their UTF-8 bytes. This is a
//! reversible encoding, not a hash: anyone with read access to the
//! `user_register` table can recover every password. Login decodes the stored
//! value and compares it with the submitted plaintext.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use thiserror::Error;

/// Errors raised while decoding a stored credential
#[derive(Error, Debug)]
pub enum CredentialError {
    #[error("stored credential is not valid base64: {0}")]
    InvalidEncoding(#[from] base64::DecodeError),

    #[error("stored credential is not valid UTF-8")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
}

/// Encode a raw password for storage
pub fn encode_password(raw: &str) -> String {
    STANDARD.encode(raw.as_bytes())
}

/// Recover the raw password from its stored encoding
pub fn decode_password(encoded: &str) -> Result<String, CredentialError> {
    let bytes = STANDARD.decode(encoded)?;
    Ok(String::from_utf8(bytes)?)
}

/// Check a submitted password against a stored encoding
///
/// Exact, case-sensitive byte comparison. A stored value that fails to decode
/// never matches.
pub fn password_matches(encoded: &str, candidate: &str) -> bool {
    match STANDARD.decode(encoded) {
        Ok(stored) => constant_time_eq(&stored, candidate.as_bytes()),
        Err(e) => {
            log::warn!("Stored credential could not be decoded: {}", e);
            false
        }
    }
}

/// Timing-safe byte comparison for equal-length inputs
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut result = 0u8;
    for (byte_a, byte_b) in a.iter().zip(b.iter()) {
        result |= byte_a ^ byte_b;
    }

    result == 0
}
