//! Permission collaborator.

use super::permissions_model::Caller;

/// Evaluates permission codes for a caller.
///
/// A `false` result is an ordinary denial, not an error.
pub trait PermissionCheckerTrait: Send + Sync {
    /// Returns true if the caller holds any of the given codes.
    fn check_member(&self, caller: &Caller, codes: &[&str]) -> bool;
}
