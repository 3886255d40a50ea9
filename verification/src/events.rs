//! Events emitted by the registry for the presentation layer.

use docuchain_types::{AccountAddress, ContentId};
use serde::{Deserialize, Serialize};

/// One observable state change in the registry.
///
/// Events are emitted only for effective mutations — idempotent no-ops
/// (re-adding a verifier, re-trusting an identifier) emit nothing. The
/// surrounding shell drains the buffer and feeds whatever transaction
/// history or notification surface it maintains.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RegistryEvent {
    VerifierAdded {
        verifier: AccountAddress,
    },
    VerifierRemoved {
        verifier: AccountAddress,
    },
    TrustedIdentifierAdded {
        content_id: ContentId,
    },
    TrustedIdentifierRemoved {
        content_id: ContentId,
    },
    DocumentStored {
        submitter: AccountAddress,
        content_id: ContentId,
    },
    RequestSubmitted {
        id: u64,
        submitter: AccountAddress,
        auto_verified: bool,
    },
    RequestResolved {
        id: u64,
        approved: bool,
        resolver: AccountAddress,
    },
    PermissionGranted {
        verifier: AccountAddress,
        submitter: AccountAddress,
    },
    PermissionRevoked {
        verifier: AccountAddress,
        submitter: AccountAddress,
    },
}
