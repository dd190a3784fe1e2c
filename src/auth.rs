//! Password hashing for kiosk operator accounts.
//!
//! Operator accounts are defined in configuration with SHA-256 password
//! hashes; login compares the hash of the submitted password against the
//! stored hex digest. This is a self-contained hash+compare primitive,
//! not a session system.

use sha2::{Digest, Sha256};

/// Returns the SHA-256 hash of a password as a lowercase hex string.
///
/// # Examples
///
/// ```
/// use attendance_engine::auth::hash_password;
///
/// assert_eq!(
///     hash_password("abc"),
///     "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
/// );
/// ```
pub fn hash_password(password: &str) -> String {
    hex::encode(Sha256::digest(password.as_bytes()))
}

/// Verifies a password against a stored SHA-256 hex digest.
///
/// Comparison ignores the case of the stored digest so hashes pasted in
/// uppercase still match.
pub fn verify_password(password: &str, stored_hash: &str) -> bool {
    hash_password(password).eq_ignore_ascii_case(stored_hash)
}
