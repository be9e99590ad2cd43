//! Password digests.
//!
//! This is a salted rolling checksum, not a cryptographic hash. The store
//! never leaves the device and has no network exposure, so the checksum only
//! keeps passwords out of plain sight in the data files. `hash_password` and
//! `verify_password` make no assumption about the digest algorithm beyond
//! the `<salt>$<hex>` layout, so a real password hash can be swapped in
//! behind the same signatures.

use crate::constants::SALT_LEN;
use crate::id::generate_id;

/// Separator between the salt prefix and the checksum in a stored digest
const DIGEST_SEPARATOR: char = '$';

/// Compute the stored digest for a password.
///
/// Produces `<salt>$<hex>`, where the salt is a fresh random fragment and
/// the hex component is the rolling checksum of the password.
pub fn hash_password(password: &str) -> String {
    let salt: String = generate_id().chars().take(SALT_LEN).collect();
    format!("{salt}{DIGEST_SEPARATOR}{:x}", checksum(password))
}

/// Verify a password against a stored digest.
///
/// Splits the digest on the separator and compares the recomputed checksum
/// against the stored hex component. The salt prefix is parsed off but does
/// not enter the checksum, so two digests of the same password differ only
/// in their salt — see the tests pinning this down. Malformed digests never
/// verify.
pub fn verify_password(password: &str, stored: &str) -> bool {
    match stored.split_once(DIGEST_SEPARATOR) {
        Some((_salt, expected)) => format!("{:x}", checksum(password)) == expected,
        None => false,
    }
}

/// 32-bit rolling checksum over the password's UTF-16 code units.
///
/// Each step computes `h * 31 + unit` as `(h << 5) - h + unit` with
/// wrapping 32-bit arithmetic; the result is the absolute value.
fn checksum(password: &str) -> u32 {
    let mut hash: i32 = 0;
    for unit in password.encode_utf16() {
        hash = hash
            .wrapping_shl(5)
            .wrapping_sub(hash)
            .wrapping_add(i32::from(unit));
    }
    hash.unsigned_abs()
}
