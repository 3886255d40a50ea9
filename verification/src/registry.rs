//! Registry coordinator — ties access control, the allowlist, the document
//! store, and the request ledger into the single authoritative state
//! object.
//!
//! Every mutating method takes `&mut self`, so the
//! allowlist-check-then-append sequence in [`DocumentRegistry::submit_request`]
//! and the pending-check-then-write sequence in
//! [`DocumentRegistry::resolve_request`] are indivisible once the owner of
//! the instance serialises mutations (one write lock, one actor — see the
//! node crate). Caller identities arrive pre-authenticated from the
//! execution environment; this type only decides what each identity may do.

use crate::access::AccessControl;
use crate::allowlist::TrustedAllowlist;
use crate::documents::DocumentStore;
use crate::error::RegistryError;
use crate::events::RegistryEvent;
use crate::ledger::{RequestLedger, VerificationRequest};
use docuchain_types::{AccountAddress, ContentId, Timestamp};
use serde::{Deserialize, Serialize};

/// The document-verification registry.
pub struct DocumentRegistry {
    access: AccessControl,
    allowlist: TrustedAllowlist,
    documents: DocumentStore,
    ledger: RequestLedger,
    /// Events awaiting the shell; see [`DocumentRegistry::drain_events`].
    pending_events: Vec<RegistryEvent>,
}

impl DocumentRegistry {
    /// Create an empty registry owned by `owner`.
    pub fn new(owner: AccountAddress) -> Self {
        Self {
            access: AccessControl::new(owner),
            allowlist: TrustedAllowlist::new(),
            documents: DocumentStore::new(),
            ledger: RequestLedger::new(),
            pending_events: Vec::new(),
        }
    }

    fn require_owner(&self, caller: &AccountAddress) -> Result<(), RegistryError> {
        if self.access.is_owner(caller) {
            Ok(())
        } else {
            Err(RegistryError::Unauthorized(caller.to_string()))
        }
    }

    // ── Verifier management ────────────────────────────────────────────

    /// Add a verifier. Owner only; re-adding a member is a no-op.
    pub fn add_verifier(
        &mut self,
        caller: &AccountAddress,
        verifier: AccountAddress,
    ) -> Result<bool, RegistryError> {
        self.require_owner(caller)?;
        let changed = self.access.insert_verifier(verifier.clone());
        if changed {
            tracing::debug!(%verifier, "verifier added");
            self.pending_events
                .push(RegistryEvent::VerifierAdded { verifier });
        }
        Ok(changed)
    }

    /// Remove a verifier. Owner only; removing a non-member is a no-op.
    /// Requests the verifier already resolved are not touched.
    pub fn remove_verifier(
        &mut self,
        caller: &AccountAddress,
        verifier: &AccountAddress,
    ) -> Result<bool, RegistryError> {
        self.require_owner(caller)?;
        let changed = self.access.remove_verifier(verifier);
        if changed {
            tracing::debug!(%verifier, "verifier removed");
            self.pending_events.push(RegistryEvent::VerifierRemoved {
                verifier: verifier.clone(),
            });
        }
        Ok(changed)
    }

    pub fn is_verifier(&self, identity: &AccountAddress) -> bool {
        self.access.is_verifier(identity)
    }

    /// Verifiers in insertion order.
    pub fn verifiers(&self) -> &[AccountAddress] {
        self.access.verifiers()
    }

    pub fn owner(&self) -> &AccountAddress {
        self.access.owner()
    }

    // ── Trusted allowlist ──────────────────────────────────────────────

    /// Add a content identifier to the trusted allowlist. Owner only;
    /// idempotent.
    pub fn add_trusted_identifier(
        &mut self,
        caller: &AccountAddress,
        content_id: ContentId,
    ) -> Result<bool, RegistryError> {
        self.require_owner(caller)?;
        let changed = self.allowlist.insert(content_id.clone());
        if changed {
            tracing::debug!(%content_id, "trusted identifier added");
            self.pending_events
                .push(RegistryEvent::TrustedIdentifierAdded { content_id });
        }
        Ok(changed)
    }

    /// Remove a content identifier from the allowlist. Owner only;
    /// idempotent. Requests auto-verified while the identifier was listed
    /// stay approved.
    pub fn remove_trusted_identifier(
        &mut self,
        caller: &AccountAddress,
        content_id: &ContentId,
    ) -> Result<bool, RegistryError> {
        self.require_owner(caller)?;
        let changed = self.allowlist.remove(content_id);
        if changed {
            tracing::debug!(%content_id, "trusted identifier removed");
            self.pending_events
                .push(RegistryEvent::TrustedIdentifierRemoved {
                    content_id: content_id.clone(),
                });
        }
        Ok(changed)
    }

    pub fn is_trusted(&self, content_id: &ContentId) -> bool {
        self.allowlist.is_trusted(content_id)
    }

    /// Allowlisted identifiers in insertion order.
    pub fn trusted_identifiers(&self) -> &[ContentId] {
        self.allowlist.entries()
    }

    // ── Document store ─────────────────────────────────────────────────

    /// Record a stored document for the calling submitter. Duplicates are
    /// ignored.
    pub fn store_document(&mut self, submitter: AccountAddress, content_id: ContentId) -> bool {
        let changed = self
            .documents
            .store(submitter.clone(), content_id.clone());
        if changed {
            tracing::debug!(%submitter, %content_id, "document stored");
            self.pending_events.push(RegistryEvent::DocumentStored {
                submitter,
                content_id,
            });
        }
        changed
    }

    /// The submitter's stored identifiers in upload order.
    pub fn documents_of(&self, submitter: &AccountAddress) -> &[ContentId] {
        self.documents.documents_of(submitter)
    }

    // ── Verification requests ──────────────────────────────────────────

    /// Submit a verification request, returning its ledger id.
    ///
    /// The allowlist is consulted and the record appended in one step: a
    /// matching identifier yields a record born `Approved` with the system
    /// sentinel as resolver, anything else a `Pending` one. Submission has
    /// no preconditions and never fails; retrying it creates a second,
    /// distinct record.
    pub fn submit_request(
        &mut self,
        submitter: AccountAddress,
        content_id: ContentId,
        document_name: impl Into<String>,
        now: Timestamp,
    ) -> u64 {
        let trusted = self.allowlist.is_trusted(&content_id);
        let id = self.ledger.append(
            content_id,
            submitter.clone(),
            document_name.into(),
            now,
            trusted,
        );
        tracing::debug!(id, %submitter, auto_verified = trusted, "request submitted");
        self.pending_events.push(RegistryEvent::RequestSubmitted {
            id,
            submitter,
            auto_verified: trusted,
        });
        id
    }

    /// Resolve a pending request. `resolver` must be the owner or a
    /// current verifier; the transition is terminal.
    pub fn resolve_request(
        &mut self,
        id: u64,
        approve: bool,
        resolver: AccountAddress,
    ) -> Result<(), RegistryError> {
        let access = &self.access;
        self.ledger
            .resolve(id, approve, resolver.clone(), |r| access.can_resolve(r))?;
        tracing::debug!(id, approve, %resolver, "request resolved");
        self.pending_events.push(RegistryEvent::RequestResolved {
            id,
            approved: approve,
            resolver,
        });
        Ok(())
    }

    pub fn request_count(&self) -> u64 {
        self.ledger.len()
    }

    pub fn request(&self, id: u64) -> Result<&VerificationRequest, RegistryError> {
        self.ledger.get(id)
    }

    /// All requests from one submitter, in ledger order.
    pub fn requests_by_submitter(
        &self,
        submitter: &AccountAddress,
    ) -> Vec<&VerificationRequest> {
        self.ledger.by_submitter(submitter)
    }

    /// Requests that are not rejected (pending + approved).
    pub fn active_document_count(&self) -> u64 {
        self.ledger.active_count()
    }

    /// Non-rejected requests created at or after `since`.
    pub fn active_documents_since(&self, since: Timestamp) -> u64 {
        self.ledger.active_count_since(since)
    }

    pub fn is_auto_verified(&self, id: u64) -> Result<bool, RegistryError> {
        self.ledger.is_auto_verified(id)
    }

    // ── View permissions ───────────────────────────────────────────────

    /// Grant `verifier` view access to `submitter`'s documents. Only the
    /// submitter themselves or the owner may grant.
    pub fn grant_permission(
        &mut self,
        caller: &AccountAddress,
        verifier: AccountAddress,
        submitter: AccountAddress,
    ) -> Result<bool, RegistryError> {
        if caller != &submitter && !self.access.is_owner(caller) {
            return Err(RegistryError::Unauthorized(caller.to_string()));
        }
        let changed = self
            .access
            .insert_grant(verifier.clone(), submitter.clone());
        if changed {
            tracing::debug!(%verifier, %submitter, "permission granted");
            self.pending_events.push(RegistryEvent::PermissionGranted {
                verifier,
                submitter,
            });
        }
        Ok(changed)
    }

    /// Revoke a previously granted view permission. Only the submitter
    /// themselves or the owner may revoke.
    pub fn revoke_permission(
        &mut self,
        caller: &AccountAddress,
        verifier: &AccountAddress,
        submitter: &AccountAddress,
    ) -> Result<bool, RegistryError> {
        if caller != submitter && !self.access.is_owner(caller) {
            return Err(RegistryError::Unauthorized(caller.to_string()));
        }
        let changed = self.access.remove_grant(verifier, submitter);
        if changed {
            tracing::debug!(%verifier, %submitter, "permission revoked");
            self.pending_events.push(RegistryEvent::PermissionRevoked {
                verifier: verifier.clone(),
                submitter: submitter.clone(),
            });
        }
        Ok(changed)
    }

    /// Whether `verifier` may view `submitter`'s documents (explicit grant,
    /// or the implicit self-access every submitter has).
    pub fn has_permission(
        &self,
        verifier: &AccountAddress,
        submitter: &AccountAddress,
    ) -> bool {
        self.access.has_permission(verifier, submitter)
    }

    /// Download gate: `viewer` may fetch `content_id` under `submitter`
    /// iff they hold view access and the document is actually the
    /// submitter's.
    pub fn authorize_download(
        &self,
        viewer: &AccountAddress,
        submitter: &AccountAddress,
        content_id: &ContentId,
    ) -> bool {
        self.access.has_permission(viewer, submitter)
            && self.documents.contains(submitter, content_id)
    }

    // ── Events & persistence ───────────────────────────────────────────

    /// Drain buffered events for the shell to process.
    pub fn drain_events(&mut self) -> Vec<RegistryEvent> {
        std::mem::take(&mut self.pending_events)
    }

    /// Serializable copy of the whole registry state. Pending events are
    /// not part of the snapshot — they belong to the running shell.
    pub fn snapshot(&self) -> RegistrySnapshot {
        RegistrySnapshot {
            access: self.access.clone(),
            allowlist: self.allowlist.clone(),
            documents: self.documents.clone(),
            ledger: self.ledger.clone(),
        }
    }

    /// Rebuild a registry from a persisted snapshot.
    pub fn restore(snapshot: RegistrySnapshot) -> Self {
        Self {
            access: snapshot.access,
            allowlist: snapshot.allowlist,
            documents: snapshot.documents,
            ledger: snapshot.ledger,
            pending_events: Vec::new(),
        }
    }
}

/// Serializable snapshot of registry state for persistence across restarts.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RegistrySnapshot {
    pub access: AccessControl,
    pub allowlist: TrustedAllowlist,
    pub documents: DocumentStore,
    pub ledger: RequestLedger,
}

#[cfg(test)]
mod tests {
    use super::*;
    use docuchain_types::RequestStatus;

    const OWNER: &str = "0xowner";

    fn addr(s: &str) -> AccountAddress {
        AccountAddress::new(s)
    }

    fn cid(s: &str) -> ContentId {
        ContentId::new(s)
    }

    fn registry() -> DocumentRegistry {
        DocumentRegistry::new(addr(OWNER))
    }

    /// Helper: registry with verifier V already added.
    fn registry_with_verifier() -> (DocumentRegistry, AccountAddress) {
        let mut reg = registry();
        let v = addr("0xverifier");
        reg.add_verifier(&addr(OWNER), v.clone()).unwrap();
        (reg, v)
    }

    // ── Verifier management ────────────────────────────────────────────

    #[test]
    fn only_owner_adds_verifiers() {
        let mut reg = registry();
        let result = reg.add_verifier(&addr("0xintruder"), addr("0xv1"));
        assert!(matches!(result, Err(RegistryError::Unauthorized(_))));
        assert!(reg.verifiers().is_empty());
    }

    #[test]
    fn only_owner_removes_verifiers() {
        let (mut reg, v) = registry_with_verifier();
        let result = reg.remove_verifier(&addr("0xintruder"), &v);
        assert!(matches!(result, Err(RegistryError::Unauthorized(_))));
        assert!(reg.is_verifier(&v));
    }

    #[test]
    fn owner_can_resolve_without_membership() {
        let mut reg = registry();
        let id = reg.submit_request(addr("0xs1"), cid("QmA"), "a.pdf", Timestamp::new(1));
        reg.resolve_request(id, true, addr(OWNER)).unwrap();
        assert_eq!(reg.request(id).unwrap().status, RequestStatus::Approved);
    }

    // ── Allowlist gating ───────────────────────────────────────────────

    #[test]
    fn only_owner_mutates_allowlist() {
        let mut reg = registry();
        let result = reg.add_trusted_identifier(&addr("0xintruder"), cid("QmT"));
        assert!(matches!(result, Err(RegistryError::Unauthorized(_))));

        reg.add_trusted_identifier(&addr(OWNER), cid("QmT")).unwrap();
        let result = reg.remove_trusted_identifier(&addr("0xintruder"), &cid("QmT"));
        assert!(matches!(result, Err(RegistryError::Unauthorized(_))));
        assert!(reg.is_trusted(&cid("QmT")));
    }

    #[test]
    fn verifier_cannot_mutate_allowlist() {
        let (mut reg, v) = registry_with_verifier();
        let result = reg.add_trusted_identifier(&v, cid("QmT"));
        assert!(matches!(result, Err(RegistryError::Unauthorized(_))));
    }

    // ── Scenario A: manual verification flow ───────────────────────────

    #[test]
    fn manual_flow_pending_then_approved_by_verifier() {
        let (mut reg, v) = registry_with_verifier();

        let id = reg.submit_request(addr("0xsub"), cid("cidX"), "doc.pdf", Timestamp::new(100));
        assert_eq!(reg.request_count(), 1);
        let request = reg.request(id).unwrap();
        assert_eq!(request.status, RequestStatus::Pending);
        assert!(!request.auto_verified);

        reg.resolve_request(id, true, v.clone()).unwrap();
        let request = reg.request(id).unwrap();
        assert_eq!(request.status, RequestStatus::Approved);
        assert_eq!(request.resolver.as_ref().unwrap(), &v);
    }

    // ── Scenario B: auto-verification ──────────────────────────────────

    #[test]
    fn trusted_identifier_auto_verifies_without_resolution() {
        let mut reg = registry();
        reg.add_trusted_identifier(&addr(OWNER), cid("cidY")).unwrap();

        let id = reg.submit_request(addr("0xsub"), cid("cidY"), "doc.pdf", Timestamp::new(1));
        let request = reg.request(id).unwrap();
        assert_eq!(request.status, RequestStatus::Approved);
        assert!(request.auto_verified);
        assert!(request.resolver.as_ref().unwrap().is_system());
        assert!(reg.is_auto_verified(id).unwrap());
    }

    #[test]
    fn untrusted_identifier_requires_manual_review() {
        let mut reg = registry();
        reg.add_trusted_identifier(&addr(OWNER), cid("cidY")).unwrap();

        let id = reg.submit_request(addr("0xsub"), cid("cidZ"), "doc.pdf", Timestamp::new(1));
        let request = reg.request(id).unwrap();
        assert_eq!(request.status, RequestStatus::Pending);
        assert!(!request.auto_verified);
        assert!(!reg.is_auto_verified(id).unwrap());
    }

    #[test]
    fn allowlist_removal_is_not_retroactive() {
        let mut reg = registry();
        reg.add_trusted_identifier(&addr(OWNER), cid("QmT")).unwrap();
        let id = reg.submit_request(addr("0xsub"), cid("QmT"), "t.pdf", Timestamp::new(1));

        reg.remove_trusted_identifier(&addr(OWNER), &cid("QmT")).unwrap();
        let request = reg.request(id).unwrap();
        assert_eq!(request.status, RequestStatus::Approved);
        assert!(request.auto_verified);

        // New submissions of the same identifier are pending again.
        let id2 = reg.submit_request(addr("0xsub"), cid("QmT"), "t.pdf", Timestamp::new(2));
        assert_eq!(reg.request(id2).unwrap().status, RequestStatus::Pending);
    }

    // ── Scenario C: unauthorized resolution ────────────────────────────

    #[test]
    fn unauthorized_resolver_is_rejected_and_record_stays_pending() {
        let mut reg = registry();
        let id = reg.submit_request(addr("0xsub"), cid("QmA"), "a.pdf", Timestamp::new(1));

        let result = reg.resolve_request(id, true, addr("0xrandom"));
        assert!(matches!(result, Err(RegistryError::Unauthorized(_))));
        assert_eq!(reg.request(id).unwrap().status, RequestStatus::Pending);
    }

    #[test]
    fn removed_verifier_can_no_longer_resolve() {
        let (mut reg, v) = registry_with_verifier();
        let id = reg.submit_request(addr("0xsub"), cid("QmA"), "a.pdf", Timestamp::new(1));

        reg.remove_verifier(&addr(OWNER), &v).unwrap();
        let result = reg.resolve_request(id, true, v);
        assert!(matches!(result, Err(RegistryError::Unauthorized(_))));
    }

    #[test]
    fn removed_verifier_past_resolutions_stand() {
        let (mut reg, v) = registry_with_verifier();
        let id = reg.submit_request(addr("0xsub"), cid("QmA"), "a.pdf", Timestamp::new(1));
        reg.resolve_request(id, true, v.clone()).unwrap();

        reg.remove_verifier(&addr(OWNER), &v).unwrap();
        let request = reg.request(id).unwrap();
        assert_eq!(request.status, RequestStatus::Approved);
        assert_eq!(request.resolver.as_ref().unwrap(), &v);
    }

    // ── Scenario D/E: not found & invalid state ────────────────────────

    #[test]
    fn resolving_out_of_range_id_is_not_found() {
        let (mut reg, v) = registry_with_verifier();
        for i in 0..3 {
            reg.submit_request(addr("0xsub"), cid(&format!("Qm{i}")), "d.pdf", Timestamp::new(i));
        }
        let result = reg.resolve_request(5, true, v);
        assert!(matches!(result, Err(RegistryError::NotFound(5))));
    }

    #[test]
    fn resolving_a_resolved_request_is_invalid_state() {
        let (mut reg, v) = registry_with_verifier();
        let id = reg.submit_request(addr("0xsub"), cid("QmA"), "a.pdf", Timestamp::new(1));
        reg.resolve_request(id, true, v.clone()).unwrap();

        let result = reg.resolve_request(id, false, v);
        assert!(matches!(
            result,
            Err(RegistryError::InvalidState {
                id: 0,
                status: RequestStatus::Approved,
            })
        ));
    }

    // ── Case-insensitive identities through the registry ───────────────

    #[test]
    fn checksum_cased_caller_matches_owner() {
        let mut reg = DocumentRegistry::new(addr("0xOwNeR"));
        reg.add_verifier(&addr("0XOWNER"), addr("0xv1")).unwrap();
        assert!(reg.is_verifier(&addr("0xV1")));
    }

    // ── Permissions & download gate ────────────────────────────────────

    #[test]
    fn submitter_grants_and_revokes_own_permission() {
        let mut reg = registry();
        let (viewer, sub) = (addr("0xdoc"), addr("0xpat"));

        assert!(reg.grant_permission(&sub, viewer.clone(), sub.clone()).unwrap());
        assert!(reg.has_permission(&viewer, &sub));
        assert!(reg.revoke_permission(&sub, &viewer, &sub).unwrap());
        assert!(!reg.has_permission(&viewer, &sub));
    }

    #[test]
    fn owner_may_manage_permissions_for_others() {
        let mut reg = registry();
        let (viewer, sub) = (addr("0xdoc"), addr("0xpat"));
        assert!(reg
            .grant_permission(&addr(OWNER), viewer.clone(), sub.clone())
            .unwrap());
        assert!(reg.has_permission(&viewer, &sub));
    }

    #[test]
    fn third_party_cannot_grant_permission() {
        let mut reg = registry();
        let result = reg.grant_permission(&addr("0xmallory"), addr("0xdoc"), addr("0xpat"));
        assert!(matches!(result, Err(RegistryError::Unauthorized(_))));

        let result = reg.revoke_permission(&addr("0xmallory"), &addr("0xdoc"), &addr("0xpat"));
        assert!(matches!(result, Err(RegistryError::Unauthorized(_))));
    }

    #[test]
    fn download_gate_needs_permission_and_ownership() {
        let mut reg = registry();
        let (viewer, sub) = (addr("0xdoc"), addr("0xpat"));
        reg.store_document(sub.clone(), cid("QmA"));

        // No grant yet: only the submitter themselves may download.
        assert!(reg.authorize_download(&sub, &sub, &cid("QmA")));
        assert!(!reg.authorize_download(&viewer, &sub, &cid("QmA")));

        reg.grant_permission(&sub, viewer.clone(), sub.clone()).unwrap();
        assert!(reg.authorize_download(&viewer, &sub, &cid("QmA")));

        // Granted or not, a document the submitter never stored is denied.
        assert!(!reg.authorize_download(&viewer, &sub, &cid("QmZ")));
        assert!(!reg.authorize_download(&sub, &sub, &cid("QmZ")));
    }

    // ── Events ─────────────────────────────────────────────────────────

    #[test]
    fn effective_mutations_emit_one_event_each() {
        let (mut reg, v) = registry_with_verifier();
        reg.drain_events();

        let id = reg.submit_request(addr("0xsub"), cid("QmA"), "a.pdf", Timestamp::new(1));
        reg.resolve_request(id, false, v.clone()).unwrap();

        let events = reg.drain_events();
        assert_eq!(
            events,
            vec![
                RegistryEvent::RequestSubmitted {
                    id,
                    submitter: addr("0xsub"),
                    auto_verified: false,
                },
                RegistryEvent::RequestResolved {
                    id,
                    approved: false,
                    resolver: v,
                },
            ]
        );
    }

    #[test]
    fn idempotent_noops_emit_no_events() {
        let (mut reg, v) = registry_with_verifier();
        reg.add_trusted_identifier(&addr(OWNER), cid("QmT")).unwrap();
        reg.store_document(addr("0xsub"), cid("QmA"));
        reg.drain_events();

        reg.add_verifier(&addr(OWNER), v).unwrap();
        reg.add_trusted_identifier(&addr(OWNER), cid("QmT")).unwrap();
        reg.remove_trusted_identifier(&addr(OWNER), &cid("QmZ")).unwrap();
        reg.store_document(addr("0xsub"), cid("QmA"));

        assert!(reg.drain_events().is_empty());
    }

    #[test]
    fn failed_calls_emit_no_events() {
        let mut reg = registry();
        let id = reg.submit_request(addr("0xsub"), cid("QmA"), "a.pdf", Timestamp::new(1));
        reg.drain_events();

        let _ = reg.resolve_request(id, true, addr("0xrandom"));
        let _ = reg.resolve_request(99, true, addr(OWNER));
        let _ = reg.add_verifier(&addr("0xrandom"), addr("0xv1"));

        assert!(reg.drain_events().is_empty());
    }

    #[test]
    fn drain_events_clears_buffer() {
        let mut reg = registry();
        reg.submit_request(addr("0xsub"), cid("QmA"), "a.pdf", Timestamp::new(1));
        assert!(!reg.drain_events().is_empty());
        assert!(reg.drain_events().is_empty());
    }

    // ── Snapshot / restore ─────────────────────────────────────────────

    #[test]
    fn snapshot_restore_reproduces_state() {
        let (mut reg, v) = registry_with_verifier();
        reg.add_trusted_identifier(&addr(OWNER), cid("QmT")).unwrap();
        reg.store_document(addr("0xsub"), cid("QmA"));
        reg.grant_permission(&addr("0xsub"), addr("0xdoc"), addr("0xsub"))
            .unwrap();
        reg.submit_request(addr("0xsub"), cid("QmT"), "t.pdf", Timestamp::new(1));
        let pending = reg.submit_request(addr("0xsub"), cid("QmA"), "a.pdf", Timestamp::new(2));
        reg.resolve_request(pending, false, v.clone()).unwrap();

        let restored = DocumentRegistry::restore(reg.snapshot());

        assert_eq!(restored.owner(), &addr(OWNER));
        assert!(restored.is_verifier(&v));
        assert!(restored.is_trusted(&cid("QmT")));
        assert_eq!(restored.documents_of(&addr("0xsub")), &[cid("QmA")]);
        assert!(restored.has_permission(&addr("0xdoc"), &addr("0xsub")));
        assert_eq!(restored.request_count(), 2);
        assert!(restored.is_auto_verified(0).unwrap());
        assert_eq!(
            restored.request(1).unwrap().status,
            RequestStatus::Rejected
        );
        // The restored registry accepts further mutations exactly where
        // the snapshot left off.
        let mut restored = restored;
        let next = restored.submit_request(addr("0xs2"), cid("QmB"), "b.pdf", Timestamp::new(3));
        assert_eq!(next, 2);
    }
}
