//! Status enum for verification requests.

use serde::{Deserialize, Serialize};

/// The status of a verification request.
///
/// A request starts `Pending` (or `Approved` when auto-verified) and
/// transitions at most once, to `Approved` or `Rejected`. Both of those are
/// terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RequestStatus {
    /// Awaiting a verifier's decision.
    Pending,
    /// Accepted, either by a verifier/owner or by the trusted allowlist.
    Approved,
    /// Declined by a verifier or the owner.
    Rejected,
}

impl RequestStatus {
    /// Whether the request is still awaiting resolution.
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    /// Whether the status admits no further transition.
    pub fn is_terminal(&self) -> bool {
        !self.is_pending()
    }

    /// Whether the request counts as an active document (pending or
    /// approved).
    pub fn is_active(&self) -> bool {
        !matches!(self, Self::Rejected)
    }

    /// Stable numeric code for presentation layers (0 pending, 1 approved,
    /// 2 rejected).
    pub fn code(&self) -> u8 {
        match self {
            Self::Pending => 0,
            Self::Approved => 1,
            Self::Rejected => 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_is_the_only_non_terminal_status() {
        assert!(RequestStatus::Pending.is_pending());
        assert!(!RequestStatus::Pending.is_terminal());
        assert!(RequestStatus::Approved.is_terminal());
        assert!(RequestStatus::Rejected.is_terminal());
    }

    #[test]
    fn rejected_is_the_only_inactive_status() {
        assert!(RequestStatus::Pending.is_active());
        assert!(RequestStatus::Approved.is_active());
        assert!(!RequestStatus::Rejected.is_active());
    }

    #[test]
    fn codes_are_stable() {
        assert_eq!(RequestStatus::Pending.code(), 0);
        assert_eq!(RequestStatus::Approved.code(), 1);
        assert_eq!(RequestStatus::Rejected.code(), 2);
    }
}
