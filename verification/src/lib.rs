//! Document verification lifecycle and trust model.
//!
//! All authoritative state lives in one [`DocumentRegistry`]:
//! - **Access control** — an owner fixed at construction, a verifier set
//!   only the owner mutates, and per-verifier view permissions over
//!   submitter documents.
//! - **Trusted allowlist** — content identifiers pre-approved by the owner;
//!   a submission matching the list at submission time is auto-verified.
//! - **Request ledger** — append-only records, each resolved at most once
//!   from `Pending` to `Approved` or `Rejected`.
//!
//! The registry is a plain `&mut self` state machine: the execution
//! environment around it (the node crate here) serialises mutations and
//! supplies pre-authenticated caller identities and timestamps.

pub mod access;
pub mod allowlist;
pub mod documents;
pub mod error;
pub mod events;
pub mod ledger;
pub mod registry;

pub use access::AccessControl;
pub use allowlist::TrustedAllowlist;
pub use documents::DocumentStore;
pub use error::RegistryError;
pub use events::RegistryEvent;
pub use ledger::{RequestLedger, VerificationRequest};
pub use registry::{DocumentRegistry, RegistrySnapshot};
