//! Deterministic point-allocation logic and data types.
//!
//! `build-core` defines the canonical rules of attribute point allocation
//! (attribute vectors, proportion derivation, rounding strategies) and
//! exposes pure APIs reused by the caller-facing `buildmaker` crate. All
//! attribute mutation flows through [`allocator::advance_with`]. Nothing in
//! this crate logs, draws randomness, or performs I/O.
pub mod allocator;
pub mod attribute;
pub mod build;
pub mod config;
pub mod error;
pub mod proportion;
pub mod rounding;

pub use allocator::{AllocationError, RoundingPlan, advance_with};
pub use attribute::{AttributeError, AttributeKind, AttributeVector};
pub use build::{BuildSpec, BuildStatus, CharacterBuild};
pub use config::AllocatorConfig;
pub use error::{BuildError, ErrorSeverity};
pub use proportion::{ProportionBasis, ProportionVector};
pub use rounding::{RoundingStrategy, ShareVector};
