//! Append-only ledger of verification requests.

use crate::error::RegistryError;
use docuchain_types::{AccountAddress, ContentId, RequestStatus, Timestamp};
use serde::{Deserialize, Serialize};

/// One submitted verification request.
///
/// `content_id`, `submitter`, `document_name`, `created_at`, and
/// `auto_verified` are fixed at creation. `status` and `resolver` change
/// together, exactly once, when the request is resolved.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VerificationRequest {
    pub content_id: ContentId,
    pub submitter: AccountAddress,
    pub status: RequestStatus,
    /// None while pending; the resolving verifier or owner afterwards, or
    /// the system sentinel for auto-verified requests.
    pub resolver: Option<AccountAddress>,
    pub document_name: String,
    pub created_at: Timestamp,
    /// True iff the content id matched the trusted allowlist at submission
    /// time. Never changes afterwards, even if the allowlist does.
    pub auto_verified: bool,
}

/// The ordered, append-only sequence of verification requests.
///
/// Request ids are 0-based insertion indices: never reused, never
/// reordered, never deleted. The ledger is the single source of truth for
/// request state; callers iterate by id (`len` then `get`).
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct RequestLedger {
    requests: Vec<VerificationRequest>,
}

impl RequestLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a request, returning its id.
    ///
    /// A trusted submission is created already `Approved` with the system
    /// sentinel as resolver; anything else starts `Pending` and unresolved.
    /// Duplicate and empty content ids are appended as distinct records —
    /// the ledger never deduplicates.
    pub fn append(
        &mut self,
        content_id: ContentId,
        submitter: AccountAddress,
        document_name: String,
        created_at: Timestamp,
        trusted: bool,
    ) -> u64 {
        let id = self.requests.len() as u64;
        self.requests.push(VerificationRequest {
            content_id,
            submitter,
            status: if trusted {
                RequestStatus::Approved
            } else {
                RequestStatus::Pending
            },
            resolver: trusted.then(AccountAddress::system),
            document_name,
            created_at,
            auto_verified: trusted,
        });
        id
    }

    /// Resolve a pending request to its terminal state.
    ///
    /// Preconditions are checked in order: the id must exist (`NotFound`),
    /// the record must still be pending (`InvalidState` — auto-verified and
    /// already-resolved records can never be resolved again), and
    /// `may_resolve` must accept the resolver (`Unauthorized`). A failed
    /// call leaves the record untouched.
    pub fn resolve(
        &mut self,
        id: u64,
        approve: bool,
        resolver: AccountAddress,
        may_resolve: impl FnOnce(&AccountAddress) -> bool,
    ) -> Result<&VerificationRequest, RegistryError> {
        let request = self
            .requests
            .get_mut(id as usize)
            .ok_or(RegistryError::NotFound(id))?;
        if !request.status.is_pending() {
            return Err(RegistryError::InvalidState {
                id,
                status: request.status,
            });
        }
        if !may_resolve(&resolver) {
            return Err(RegistryError::Unauthorized(resolver.to_string()));
        }
        request.status = if approve {
            RequestStatus::Approved
        } else {
            RequestStatus::Rejected
        };
        request.resolver = Some(resolver);
        Ok(request)
    }

    /// Current ledger length.
    pub fn len(&self) -> u64 {
        self.requests.len() as u64
    }

    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }

    pub fn get(&self, id: u64) -> Result<&VerificationRequest, RegistryError> {
        self.requests
            .get(id as usize)
            .ok_or(RegistryError::NotFound(id))
    }

    /// All requests from one submitter, in ledger order.
    pub fn by_submitter(&self, submitter: &AccountAddress) -> Vec<&VerificationRequest> {
        self.requests
            .iter()
            .filter(|r| &r.submitter == submitter)
            .collect()
    }

    /// Requests that are not rejected (pending + approved).
    pub fn active_count(&self) -> u64 {
        self.requests.iter().filter(|r| r.status.is_active()).count() as u64
    }

    /// Non-rejected requests created at or after `since`.
    pub fn active_count_since(&self, since: Timestamp) -> u64 {
        self.requests
            .iter()
            .filter(|r| r.status.is_active() && r.created_at >= since)
            .count() as u64
    }

    pub fn is_auto_verified(&self, id: u64) -> Result<bool, RegistryError> {
        self.get(id).map(|r| r.auto_verified)
    }
}
