//! Character build construction and point allocation.
//!
//! `buildmaker` is the caller-facing surface over the deterministic
//! `build-core` allocator: it resolves class presets, normalizes options,
//! and hands out [`BuildHandle`]s that advance a build one point budget at a
//! time.
//!
//! ```
//! use buildmaker::{BuildOptions, RoundingStrategy, build};
//!
//! let mut handle = build(
//!     "warrior",
//!     BuildOptions {
//!         strategy: Some(RoundingStrategy::Affinity),
//!         ..BuildOptions::default()
//!     },
//! )?;
//!
//! let after = handle.advance(5)?;
//! assert_eq!(after.attribute.total(), 90);
//! # Ok::<(), buildmaker::BuilderError>(())
//! ```

pub mod error;
pub mod handle;
pub mod options;

use tracing::debug;

pub use build_content::{CharacterClass, ClassPreset};
pub use build_core::{
    AllocationError, AttributeError, AttributeKind, AttributeVector, BuildError, BuildSpec,
    BuildStatus, CharacterBuild, ErrorSeverity, ProportionBasis, ProportionVector,
    RoundingStrategy,
};
pub use error::{BuilderError, Result};
pub use handle::{AllocationRecord, BuildHandle};
pub use options::BuildOptions;

/// Constructs a build handle for a class given by name.
///
/// Unsupported names fail with [`BuilderError::UnsupportedClass`]; name
/// matching is case-insensitive.
pub fn build(class: &str, options: BuildOptions) -> Result<BuildHandle> {
    let class = class
        .parse::<CharacterClass>()
        .map_err(|_| BuilderError::UnsupportedClass(class.to_string()))?;

    build_class(class, options)
}

/// Typed variant of [`build`].
pub fn build_class(class: CharacterClass, options: BuildOptions) -> Result<BuildHandle> {
    let normalized = options::normalize(options)?;
    let preset = ClassPreset::of(class);
    let spec = preset.to_spec(normalized.proportion);

    let build = CharacterBuild::from_spec(spec)?.ok_or(BuilderError::IncompleteSpec)?;
    debug!(%class, strategy = %normalized.strategy, "character build created");

    Ok(BuildHandle::new(build, normalized.strategy))
}

/// Supported rounding strategies, in the order exposed to callers.
pub fn strategies() -> [RoundingStrategy; RoundingStrategy::COUNT] {
    RoundingStrategy::all()
}
