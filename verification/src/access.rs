//! Owner, verifier set, and delegated view permissions.

use docuchain_types::AccountAddress;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Role state for the registry: the owner, the verifier set, and the
/// per-verifier view-permission grants.
///
/// This is pure state — caller authorization for mutations is enforced by
/// [`crate::registry::DocumentRegistry`], which owns the single instance.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AccessControl {
    /// The owner, fixed at construction. Implicitly privileged for every
    /// gated operation, independent of verifier membership.
    owner: AccountAddress,
    /// Verifiers in insertion order.
    verifiers: Vec<AccountAddress>,
    /// Grants: verifier → submitters whose documents it may view.
    grants: HashMap<AccountAddress, HashSet<AccountAddress>>,
}

impl AccessControl {
    pub fn new(owner: AccountAddress) -> Self {
        Self {
            owner,
            verifiers: Vec::new(),
            grants: HashMap::new(),
        }
    }

    pub fn owner(&self) -> &AccountAddress {
        &self.owner
    }

    pub fn is_owner(&self, identity: &AccountAddress) -> bool {
        &self.owner == identity
    }

    /// Add a verifier. Returns false (no-op) if already a member.
    pub fn insert_verifier(&mut self, verifier: AccountAddress) -> bool {
        if self.verifiers.contains(&verifier) {
            return false;
        }
        self.verifiers.push(verifier);
        true
    }

    /// Remove a verifier. Returns false (no-op) if not a member.
    ///
    /// Removal only revokes the ability to resolve future requests; records
    /// this verifier already resolved are untouched.
    pub fn remove_verifier(&mut self, verifier: &AccountAddress) -> bool {
        let before = self.verifiers.len();
        self.verifiers.retain(|v| v != verifier);
        self.verifiers.len() != before
    }

    pub fn is_verifier(&self, identity: &AccountAddress) -> bool {
        self.verifiers.contains(identity)
    }

    /// Verifiers in insertion order.
    pub fn verifiers(&self) -> &[AccountAddress] {
        &self.verifiers
    }

    /// Whether this identity may resolve pending requests: the owner or a
    /// current verifier.
    pub fn can_resolve(&self, identity: &AccountAddress) -> bool {
        self.is_owner(identity) || self.is_verifier(identity)
    }

    /// Grant `verifier` view access to `submitter`'s documents.
    /// Returns false if the grant already existed.
    pub fn insert_grant(
        &mut self,
        verifier: AccountAddress,
        submitter: AccountAddress,
    ) -> bool {
        self.grants.entry(verifier).or_default().insert(submitter)
    }

    /// Revoke a grant. Returns false if no such grant existed.
    pub fn remove_grant(
        &mut self,
        verifier: &AccountAddress,
        submitter: &AccountAddress,
    ) -> bool {
        let Some(set) = self.grants.get_mut(verifier) else {
            return false;
        };
        let removed = set.remove(submitter);
        if set.is_empty() {
            self.grants.remove(verifier);
        }
        removed
    }

    /// Whether `verifier` may view `submitter`'s documents.
    ///
    /// A submitter always has access to their own documents — no explicit
    /// grant is required for `verifier == submitter`.
    pub fn has_permission(
        &self,
        verifier: &AccountAddress,
        submitter: &AccountAddress,
    ) -> bool {
        verifier == submitter
            || self
                .grants
                .get(verifier)
                .is_some_and(|set| set.contains(submitter))
    }

    /// All submitters this verifier holds explicit grants for.
    pub fn permitted_submitters(&self, verifier: &AccountAddress) -> Vec<&AccountAddress> {
        self.grants
            .get(verifier)
            .map(|set| set.iter().collect())
            .unwrap_or_default()
    }
}
