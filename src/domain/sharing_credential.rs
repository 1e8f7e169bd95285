//! Opaque sharing credential granting anonymous read access to one board.

use serde::Serialize;
use std::fmt;

/// Number of random bytes behind a credential (128 bits).
pub const CREDENTIAL_BYTES: usize = 16;

/// Length of the hex-encoded credential.
pub const CREDENTIAL_LEN: usize = CREDENTIAL_BYTES * 2;

/// A random, fixed-length token bound to at most one board.
///
/// The value carries no embedded metadata; resolving it to a board always
/// requires a store lookup. `Debug` only prints a short prefix so credentials
/// do not end up in logs.
#[derive(Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct SharingCredential(String);

impl SharingCredential {
    /// Draws a fresh credential from the OS random source.
    ///
    /// # Errors
    ///
    /// Returns the underlying error if the system RNG is unavailable.
    pub fn random() -> Result<Self, getrandom::Error> {
        let mut buffer = [0u8; CREDENTIAL_BYTES];
        getrandom::fill(&mut buffer)?;
        Ok(Self(hex::encode(buffer)))
    }

    /// Parses untrusted input. Returns `None` unless it is exactly
    /// [`CREDENTIAL_LEN`] lowercase hex characters.
    pub fn parse(raw: &str) -> Option<Self> {
        let well_formed = raw.len() == CREDENTIAL_LEN
            && raw.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'));

        well_formed.then(|| Self(raw.to_string()))
    }

    /// Wraps a value read back from the board store.
    pub fn from_stored(value: String) -> Self {
        Self(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// First eight characters, safe to log.
    pub fn prefix(&self) -> &str {
        self.0.get(..8).unwrap_or(&self.0)
    }
}

impl fmt::Debug for SharingCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SharingCredential({}…)", self.prefix())
    }
}
