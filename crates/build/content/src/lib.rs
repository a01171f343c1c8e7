//! Static class content consumed by the build facade.
//!
//! This crate houses the fixed starting configuration of the playable
//! classes: attribute spreads plus affinity/deficiency pairings. Content is
//! plain configuration resolved at construction time and never appears in
//! allocation state.
pub mod presets;

pub use presets::{CharacterClass, ClassPreset};
