//! Trusted-identifier allowlist for auto-verification.

use docuchain_types::ContentId;
use serde::{Deserialize, Serialize};

/// Content identifiers pre-approved by the owner. A submission whose
/// identifier is on the list at submission time bypasses manual review.
///
/// Membership is consulted only when a request is submitted: removing an
/// entry later never un-verifies requests that already matched it.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct TrustedAllowlist {
    /// Entries in insertion order.
    entries: Vec<ContentId>,
}

impl TrustedAllowlist {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an identifier. Returns false (no-op) if already listed.
    pub fn insert(&mut self, content_id: ContentId) -> bool {
        if self.entries.contains(&content_id) {
            return false;
        }
        self.entries.push(content_id);
        true
    }

    /// Remove an identifier. Returns false (no-op) if not listed.
    pub fn remove(&mut self, content_id: &ContentId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|c| c != content_id);
        self.entries.len() != before
    }

    pub fn is_trusted(&self, content_id: &ContentId) -> bool {
        self.entries.contains(content_id)
    }

    /// Listed identifiers in insertion order.
    pub fn entries(&self) -> &[ContentId] {
        &self.entries
    }
}
