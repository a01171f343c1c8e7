//! Common error infrastructure for build-core.
//!
//! This module provides the shared severity classification and reporting
//! trait. Domain-specific errors (e.g. `AttributeError`, `AllocationError`)
//! are defined in their respective modules alongside the operations they
//! guard.

/// Severity level of an error, used for categorization and recovery strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: non-positive attribute value, point budget below minimum
    Validation,

    /// Internal error - unexpected state inconsistency.
    ///
    /// These indicate bugs and should be investigated.
    Internal,

    /// Fatal error - build state corrupted, cannot continue.
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Implemented by every error type in the build system.
///
/// Gives callers a uniform way to classify failures and map them to stable
/// diagnostic codes without matching on each concrete error enum.
pub trait BuildError {
    /// Severity classification for recovery decisions.
    fn severity(&self) -> ErrorSeverity;

    /// Stable machine-readable error code.
    fn error_code(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_classification() {
        assert_eq!(ErrorSeverity::Validation.as_str(), "validation");
        assert!(!ErrorSeverity::Validation.is_internal());
        assert!(ErrorSeverity::Internal.is_internal());
        assert!(ErrorSeverity::Fatal.is_internal());
    }
}
