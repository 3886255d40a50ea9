//! Per-submitter store of uploaded document identifiers.

use docuchain_types::{AccountAddress, ContentId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The content identifiers each submitter has stored, in upload order.
///
/// Submitters record an identifier here before requesting verification for
/// it; the download-authorization gate uses this store to confirm a
/// document actually belongs to the submitter it is requested under.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct DocumentStore {
    documents: HashMap<AccountAddress, Vec<ContentId>>,
}

impl DocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a stored document for a submitter. Returns false (no-op) if
    /// the submitter already stored this identifier.
    pub fn store(&mut self, submitter: AccountAddress, content_id: ContentId) -> bool {
        let list = self.documents.entry(submitter).or_default();
        if list.contains(&content_id) {
            return false;
        }
        list.push(content_id);
        true
    }

    /// The submitter's stored identifiers in upload order; empty for an
    /// unknown submitter.
    pub fn documents_of(&self, submitter: &AccountAddress) -> &[ContentId] {
        self.documents
            .get(submitter)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn contains(&self, submitter: &AccountAddress, content_id: &ContentId) -> bool {
        self.documents
            .get(submitter)
            .is_some_and(|list| list.contains(content_id))
    }
}
