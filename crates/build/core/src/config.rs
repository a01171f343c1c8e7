/// Allocator configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AllocatorConfig {
    /// Smallest point budget a single allocation round accepts.
    pub min_points: u32,
}

impl AllocatorConfig {
    // ===== compile-time constants =====
    /// Tolerance used when checking that a proportion sums to 1.0.
    pub const PROPORTION_TOLERANCE: f64 = 1e-9;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_MIN_POINTS: u32 = 5;

    pub fn new() -> Self {
        Self {
            min_points: Self::DEFAULT_MIN_POINTS,
        }
    }

    pub fn with_min_points(min_points: u32) -> Self {
        Self { min_points }
    }
}

impl Default for AllocatorConfig {
    fn default() -> Self {
        Self::new()
    }
}
