//! Content identifier type for externally stored documents.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An identifier naming a piece of content in the external
/// content-addressed store (the pinning service returns these).
///
/// Treated as an unstructured token: never parsed, hashed, or validated
/// here. Equality is exact string match — unlike [`crate::AccountAddress`],
/// no canonicalisation is applied, because the store's identifiers are
/// case-sensitive.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContentId(String);

impl ContentId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the identifier is the empty string. Empty identifiers are
    /// accepted by the ledger; this exists for presentation layers that
    /// want to flag them.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ContentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ContentId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for ContentId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}
