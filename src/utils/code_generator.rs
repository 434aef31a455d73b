//! Short code generation utilities.
//!
//! Codes are drawn from a fixed 62-symbol alphabet using the thread-local
//! CSPRNG, which is seeded from the operating system. Predicting one code
//! gives no advantage in guessing another.

use rand::Rng;

/// Digits, then lowercase, then uppercase ASCII letters.
pub const ALPHABET: &[u8; 62] = b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Length of generated codes when none is configured.
pub const DEFAULT_CODE_LENGTH: usize = 8;

/// Codes that cannot be issued because they shadow other routes.
pub const RESERVED_CODES: &[&str] = &["", "api", "docs", "openapi.json", "redoc", "health"];

/// Generates a random code of `length` characters from [`ALPHABET`].
///
/// Every character is drawn independently and uniformly.
///
/// # Examples
///
/// ```ignore
/// let code = generate_code(8);
/// assert_eq!(code.len(), 8);
/// assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_code(length: usize) -> String {
    let mut rng = rand::rng();

    (0..length)
        .map(|_| char::from(ALPHABET[rng.random_range(0..ALPHABET.len())]))
        .collect()
}

/// Returns true if `code` must never be issued.
pub fn is_reserved(code: &str) -> bool {
    RESERVED_CODES.contains(&code)
}
