//! Secret type.
//!
//! Holds secret material fetched from a [`SecretSource`]. The value is wiped
//! from memory on drop and never printed by `Debug` or `Display`.
//!
//! [`SecretSource`]: crate::core::source::SecretSource

use zeroize::Zeroizing;

/// A secret value
#[derive(Clone, PartialEq, Eq)]
pub struct Secret(Zeroizing<String>);

impl Secret {
    /// Wrap a secret value
    pub fn new(value: impl Into<String>) -> Self {
        Self(Zeroizing::new(value.into()))
    }

    /// The secret material.
    ///
    /// Callers should use the returned slice immediately and not copy it
    /// into long-lived storage.
    pub fn expose(&self) -> &str {
        self.0.as_str()
    }

    /// Whether the value is empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Debug for Secret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Secret(***)")
    }
}

impl std::fmt::Display for Secret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("***")
    }
}

impl From<String> for Secret {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<&str> for Secret {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}
