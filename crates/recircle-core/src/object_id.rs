//! 24-character hexadecimal object ids.
//!
//! The id convention is part of the external contract: ids are 24 hex chars
//! (a 4-byte big-endian unix-seconds prefix followed by 8 random bytes), so
//! they sort roughly by creation time.

use std::fmt::Write as _;

use rand::Rng;

/// Generate a fresh 24-hex object id.
#[must_use]
pub fn generate() -> String {
    let seconds = u32::try_from(chrono::Utc::now().timestamp().max(0)).unwrap_or(u32::MAX);
    let mut rng = rand::rng();
    let mut id = String::with_capacity(24);
    let _ = write!(id, "{seconds:08x}");
    for _ in 0..8 {
        let byte: u8 = rng.random();
        let _ = write!(id, "{byte:02x}");
    }
    id
}

/// Whether `id` is a well-formed 24-character hexadecimal object id.
#[must_use]
pub fn is_valid(id: &str) -> bool {
    id.len() == 24 && id.bytes().all(|b| b.is_ascii_hexdigit())
}
