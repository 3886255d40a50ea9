//! Account address type — the opaque identity of every caller.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An account address as asserted by the execution environment.
///
/// Addresses are opaque strings. Hex account addresses are case-insensitive
/// (checksum casing varies per wallet), so the canonical form is lower-case:
/// two addresses are the same identity iff their lower-cased representations
/// match. Canonicalisation happens once, at construction.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AccountAddress(String);

impl AccountAddress {
    /// Reserved resolver identity for auto-verified requests.
    ///
    /// This value is never produced by the execution environment's caller
    /// authentication (signature recovery yields hex account addresses), and
    /// no shipped path accepts it as an owner or verifier.
    const SYSTEM: &'static str = "system";

    /// Create an address from a raw string, canonicalising to lower-case.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into().to_lowercase())
    }

    /// The sentinel identity recorded as the resolver of auto-verified
    /// requests.
    pub fn system() -> Self {
        Self(Self::SYSTEM.to_string())
    }

    /// Whether this is the reserved system sentinel.
    pub fn is_system(&self) -> bool {
        self.0 == Self::SYSTEM
    }

    /// The canonical (lower-cased) address string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for AccountAddress {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for AccountAddress {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}
