//! Reference credential wrapper

use zeroize::{Zeroize, ZeroizeOnDrop};

/// The reference credential a guard compares candidates against
///
/// The inner value is wiped from memory on drop and never appears in
/// `Debug` output.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Credential(String);

impl Credential {
    /// Wrap a credential value
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Compare a candidate against the reference using exact value equality
    ///
    /// An absent candidate never matches, not even an empty reference.
    pub fn matches(&self, candidate: Option<&str>) -> bool {
        match candidate {
            Some(candidate) => candidate == self.0,
            None => false,
        }
    }

    /// Length of the credential in bytes
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if the credential is the empty string
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for Credential {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Credential {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl core::fmt::Debug for Credential {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("Credential(<redacted>)")
    }
}
