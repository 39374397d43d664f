//! Deferred quick-fix actions
//!
//! A fix is recorded while analyzing and applied later, possibly after the
//! model changed underneath it. Application therefore re-validates before
//! touching anything: a fix that no longer holds reports why and leaves
//! the model untouched instead of failing.

use std::fmt;

use javelint_model::{CancelToken, Cancelled, FileModel};

/// Why a fix declined to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StaleReason {
    /// The declaration behind the fix no longer exists
    DeclarationMissing,
    /// The declaration no longer passes the inspection's check
    NoLongerEligible,
    /// The flagged call vanished from the tree
    CallMissing,
}

impl fmt::Display for StaleReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StaleReason::DeclarationMissing => write!(f, "declaration missing"),
            StaleReason::NoLongerEligible => write!(f, "no longer eligible"),
            StaleReason::CallMissing => write!(f, "flagged call missing"),
        }
    }
}

/// Result of applying a fix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixOutcome {
    /// The rewrite ran to completion
    Applied,
    /// Re-validation failed; the model was left untouched
    Stale(StaleReason),
}

/// A rewrite action bound to a diagnostic.
pub trait QuickFix: fmt::Debug + Send + Sync {
    /// User-visible action name
    fn name(&self) -> String;

    /// Group name under which batch application collects related fixes
    fn family_name(&self) -> String;

    /// Re-validate against the live model and rewrite if still applicable.
    fn apply(
        &self,
        model: &mut FileModel,
        token: &CancelToken,
    ) -> Result<FixOutcome, Cancelled>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stale_reason_display() {
        assert_eq!(
            FixOutcome::Stale(StaleReason::DeclarationMissing),
            FixOutcome::Stale(StaleReason::DeclarationMissing)
        );
        assert_eq!(StaleReason::NoLongerEligible.to_string(), "no longer eligible");
        assert_eq!(StaleReason::CallMissing.to_string(), "flagged call missing");
        assert_eq!(
            StaleReason::DeclarationMissing.to_string(),
            "declaration missing"
        );
    }
}
