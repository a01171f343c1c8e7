//! Facade errors.

use build_core::{AllocationError, AttributeError, BuildError, ErrorSeverity};

pub type Result<T> = core::result::Result<T, BuilderError>;

/// Errors surfaced by the caller-facing builder API.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BuilderError {
    /// The requested name is not a supported character class.
    #[error("character class not supported: '{0}'")]
    UnsupportedClass(String),

    /// Attribute validation failed, either on build construction or on a
    /// pinned proportion supplied through the options.
    #[error(transparent)]
    Attribute(#[from] AttributeError),

    /// The allocation round was rejected.
    #[error(transparent)]
    Allocation(#[from] AllocationError),

    /// A class preset expanded into an incomplete build spec.
    #[error("class preset produced an incomplete build spec")]
    IncompleteSpec,
}

impl BuildError for BuilderError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::UnsupportedClass(_) => ErrorSeverity::Validation,
            Self::Attribute(err) => err.severity(),
            Self::Allocation(err) => err.severity(),
            Self::IncompleteSpec => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnsupportedClass(_) => "BUILDER_UNSUPPORTED_CLASS",
            Self::Attribute(err) => err.error_code(),
            Self::Allocation(err) => err.error_code(),
            Self::IncompleteSpec => "BUILDER_INCOMPLETE_SPEC",
        }
    }
}
