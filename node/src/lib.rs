//! DocuChain node shell — hosts the verification registry.
//!
//! The node is the execution environment the core assumes:
//! - serialises mutations into a single total order ([`RegistryService`])
//! - asserts caller identities (authenticated upstream of this crate)
//! - stamps timestamps at the call boundary
//! - loads configuration and initialises structured logging
//! - persists and restores registry snapshots

pub mod config;
pub mod error;
pub mod logging;
pub mod service;

pub use config::NodeConfig;
pub use error::NodeError;
pub use logging::{init_logging, LogFormat};
pub use service::RegistryService;
