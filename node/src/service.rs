//! Synchronized registry service — the execution environment around the
//! verification core.
//!
//! The core registry processes state-mutating calls one at a time, in a
//! single total order. The service enforces that with one `RwLock`: every
//! mutation takes the write lock (so the allowlist-check-then-append and
//! pending-check-then-write sequences inside the core can never
//! interleave), while read-only queries share the read lock and always
//! observe a fully-applied snapshot. Timestamps are stamped here — the
//! core never reads the clock.

use crate::error::NodeError;
use crate::NodeConfig;
use docuchain_types::{AccountAddress, ContentId, Timestamp};
use docuchain_verification::{
    DocumentRegistry, RegistryEvent, RegistrySnapshot, VerificationRequest,
};
use std::path::Path;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Shared handle to the single registry instance.
///
/// Cloning the service clones the handle, not the state.
#[derive(Clone)]
pub struct RegistryService {
    inner: Arc<RwLock<DocumentRegistry>>,
}

impl RegistryService {
    /// Fresh registry owned by `owner`.
    pub fn new(owner: AccountAddress) -> Self {
        Self {
            inner: Arc::new(RwLock::new(DocumentRegistry::new(owner))),
        }
    }

    /// Service from configuration: restores the snapshot at
    /// `config.snapshot_path` when one exists, otherwise starts empty.
    pub fn open(config: &NodeConfig) -> Result<Self, NodeError> {
        if let Some(path) = &config.snapshot_path {
            if path.exists() {
                let snapshot = Self::load_snapshot(path)?;
                tracing::info!(path = %path.display(), "registry restored from snapshot");
                return Ok(Self {
                    inner: Arc::new(RwLock::new(DocumentRegistry::restore(snapshot))),
                });
            }
        }
        Ok(Self::new(AccountAddress::new(&config.owner)))
    }

    fn read(&self) -> RwLockReadGuard<'_, DocumentRegistry> {
        self.inner.read().expect("registry lock poisoned")
    }

    fn write(&self) -> RwLockWriteGuard<'_, DocumentRegistry> {
        self.inner.write().expect("registry lock poisoned")
    }

    // ── Mutations (serialised through the write lock) ──────────────────

    pub fn add_verifier(
        &self,
        caller: &AccountAddress,
        verifier: AccountAddress,
    ) -> Result<bool, NodeError> {
        let changed = self.write().add_verifier(caller, verifier.clone())?;
        if changed {
            tracing::info!(%verifier, "verifier added");
        }
        Ok(changed)
    }

    pub fn remove_verifier(
        &self,
        caller: &AccountAddress,
        verifier: &AccountAddress,
    ) -> Result<bool, NodeError> {
        let changed = self.write().remove_verifier(caller, verifier)?;
        if changed {
            tracing::info!(%verifier, "verifier removed");
        }
        Ok(changed)
    }

    pub fn add_trusted_identifier(
        &self,
        caller: &AccountAddress,
        content_id: ContentId,
    ) -> Result<bool, NodeError> {
        let changed = self
            .write()
            .add_trusted_identifier(caller, content_id.clone())?;
        if changed {
            tracing::info!(%content_id, "trusted identifier added");
        }
        Ok(changed)
    }

    pub fn remove_trusted_identifier(
        &self,
        caller: &AccountAddress,
        content_id: &ContentId,
    ) -> Result<bool, NodeError> {
        let changed = self.write().remove_trusted_identifier(caller, content_id)?;
        if changed {
            tracing::info!(%content_id, "trusted identifier removed");
        }
        Ok(changed)
    }

    pub fn store_document(&self, submitter: AccountAddress, content_id: ContentId) -> bool {
        self.write().store_document(submitter, content_id)
    }

    /// Submit a verification request stamped with the current time.
    pub fn submit_request(
        &self,
        submitter: AccountAddress,
        content_id: ContentId,
        document_name: impl Into<String>,
    ) -> u64 {
        self.submit_request_at(submitter, content_id, document_name, Timestamp::now())
    }

    /// Submit a verification request with an explicit timestamp (tests,
    /// replays).
    pub fn submit_request_at(
        &self,
        submitter: AccountAddress,
        content_id: ContentId,
        document_name: impl Into<String>,
        now: Timestamp,
    ) -> u64 {
        let id = self
            .write()
            .submit_request(submitter.clone(), content_id, document_name, now);
        tracing::info!(id, %submitter, "verification request submitted");
        id
    }

    pub fn resolve_request(
        &self,
        id: u64,
        approve: bool,
        resolver: AccountAddress,
    ) -> Result<(), NodeError> {
        self.write().resolve_request(id, approve, resolver.clone())?;
        tracing::info!(id, approve, %resolver, "verification request resolved");
        Ok(())
    }

    pub fn grant_permission(
        &self,
        caller: &AccountAddress,
        verifier: AccountAddress,
        submitter: AccountAddress,
    ) -> Result<bool, NodeError> {
        Ok(self.write().grant_permission(caller, verifier, submitter)?)
    }

    pub fn revoke_permission(
        &self,
        caller: &AccountAddress,
        verifier: &AccountAddress,
        submitter: &AccountAddress,
    ) -> Result<bool, NodeError> {
        Ok(self.write().revoke_permission(caller, verifier, submitter)?)
    }

    /// Drain buffered registry events for downstream consumers.
    pub fn drain_events(&self) -> Vec<RegistryEvent> {
        self.write().drain_events()
    }

    // ── Queries (shared read lock; values are copied out) ──────────────

    pub fn request_count(&self) -> u64 {
        self.read().request_count()
    }

    pub fn request(&self, id: u64) -> Result<VerificationRequest, NodeError> {
        Ok(self.read().request(id)?.clone())
    }

    pub fn requests_by_submitter(&self, submitter: &AccountAddress) -> Vec<VerificationRequest> {
        self.read()
            .requests_by_submitter(submitter)
            .into_iter()
            .cloned()
            .collect()
    }

    pub fn active_document_count(&self) -> u64 {
        self.read().active_document_count()
    }

    pub fn active_documents_since(&self, since: Timestamp) -> u64 {
        self.read().active_documents_since(since)
    }

    pub fn is_auto_verified(&self, id: u64) -> Result<bool, NodeError> {
        Ok(self.read().is_auto_verified(id)?)
    }

    pub fn owner(&self) -> AccountAddress {
        self.read().owner().clone()
    }

    pub fn is_verifier(&self, identity: &AccountAddress) -> bool {
        self.read().is_verifier(identity)
    }

    pub fn verifiers(&self) -> Vec<AccountAddress> {
        self.read().verifiers().to_vec()
    }

    pub fn is_trusted(&self, content_id: &ContentId) -> bool {
        self.read().is_trusted(content_id)
    }

    pub fn trusted_identifiers(&self) -> Vec<ContentId> {
        self.read().trusted_identifiers().to_vec()
    }

    pub fn has_permission(&self, verifier: &AccountAddress, submitter: &AccountAddress) -> bool {
        self.read().has_permission(verifier, submitter)
    }

    pub fn documents_of(&self, submitter: &AccountAddress) -> Vec<ContentId> {
        self.read().documents_of(submitter).to_vec()
    }

    pub fn authorize_download(
        &self,
        viewer: &AccountAddress,
        submitter: &AccountAddress,
        content_id: &ContentId,
    ) -> bool {
        self.read().authorize_download(viewer, submitter, content_id)
    }

    // ── Persistence ────────────────────────────────────────────────────

    /// Write the current registry state to `path` as a bincode snapshot.
    pub fn save_snapshot(&self, path: &Path) -> Result<(), NodeError> {
        let snapshot = self.read().snapshot();
        let bytes = bincode::serialize(&snapshot)?;
        std::fs::write(path, bytes)?;
        tracing::info!(path = %path.display(), "registry snapshot saved");
        Ok(())
    }

    fn load_snapshot(path: &Path) -> Result<RegistrySnapshot, NodeError> {
        let bytes = std::fs::read(path)?;
        Ok(bincode::deserialize(&bytes)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn addr(s: &str) -> AccountAddress {
        AccountAddress::new(s)
    }

    fn cid(s: &str) -> ContentId {
        ContentId::new(s)
    }

    #[test]
    fn clone_shares_state() {
        let service = RegistryService::new(addr("0xowner"));
        let other = service.clone();

        service.submit_request_at(addr("0xsub"), cid("QmA"), "a.pdf", Timestamp::new(1));
        assert_eq!(other.request_count(), 1);
    }

    #[test]
    fn submit_request_stamps_current_time() {
        let service = RegistryService::new(addr("0xowner"));
        let before = Timestamp::now();
        let id = service.submit_request(addr("0xsub"), cid("QmA"), "a.pdf");
        let created_at = service.request(id).unwrap().created_at;
        assert!(created_at >= before);
        assert!(created_at <= Timestamp::now());
    }

    #[test]
    fn concurrent_submitters_get_distinct_ids() {
        let service = RegistryService::new(addr("0xowner"));
        let mut handles = Vec::new();

        for t in 0..8 {
            let service = service.clone();
            handles.push(std::thread::spawn(move || {
                for i in 0..25 {
                    service.submit_request_at(
                        addr(&format!("0xsub{t}")),
                        cid(&format!("Qm{t}x{i}")),
                        "doc.pdf",
                        Timestamp::new(i),
                    );
                }
            }));
        }
        for handle in handles {
            handle.join().unwrap();
        }

        // Every id was assigned exactly once and every record is intact.
        assert_eq!(service.request_count(), 200);
        for t in 0..8 {
            assert_eq!(
                service.requests_by_submitter(&addr(&format!("0xsub{t}"))).len(),
                25
            );
        }
    }

    #[test]
    fn snapshot_survives_restart() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("registry.bin");

        let owner = addr("0xowner");
        let service = RegistryService::new(owner.clone());
        service.add_verifier(&owner, addr("0xv1")).unwrap();
        service
            .add_trusted_identifier(&owner, cid("QmT"))
            .unwrap();
        service.submit_request_at(addr("0xsub"), cid("QmT"), "t.pdf", Timestamp::new(5));
        service.save_snapshot(&path).unwrap();

        let config = NodeConfig {
            owner: "0xignored-when-snapshot-exists".into(),
            snapshot_path: Some(path),
            ..NodeConfig::with_owner("")
        };
        let restored = RegistryService::open(&config).unwrap();
        assert_eq!(restored.owner(), owner);
        assert!(restored.is_verifier(&addr("0xv1")));
        assert_eq!(restored.request_count(), 1);
        assert!(restored.is_auto_verified(0).unwrap());
    }

    #[test]
    fn open_without_snapshot_starts_empty() {
        let config = NodeConfig::with_owner("0xOwner");
        let service = RegistryService::open(&config).unwrap();
        assert_eq!(service.owner(), addr("0xowner"));
        assert_eq!(service.request_count(), 0);
    }
}
