//! Point allocation over a character build.
//!
//! The allocator is the only place that mutates a build's attributes:
//! it validates the point budget, computes the fractional shares from the
//! build's fixed proportion, dispatches to the selected rounding variant,
//! and applies the resulting increments in place.

use crate::attribute::{AttributeKind, AttributeVector};
use crate::build::CharacterBuild;
use crate::config::AllocatorConfig;
use crate::error::{BuildError, ErrorSeverity};
use crate::rounding::{self, ShareVector};

/// A strategy resolved into the concrete plan for one allocation round.
///
/// The random strategy needs its secondary target chosen up front so the
/// allocator itself stays deterministic.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundingPlan {
    Normal,
    Affinity,
    Random { secondary: AttributeKind },
}

/// Errors raised while advancing a build.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AllocationError {
    /// The point budget is below the allocator's minimum.
    #[error("invalid minimum number of points: {points} (minimum {min})")]
    BelowMinimum {
        /// The rejected budget.
        points: u32,
        /// The configured minimum.
        min: u32,
    },
}

impl BuildError for AllocationError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::BelowMinimum { .. } => "ALLOC_BELOW_MINIMUM",
        }
    }
}

/// Distributes `points` across the build's attributes according to its fixed
/// proportion and the given rounding plan.
///
/// Validation happens before any mutation, so a rejected call leaves the
/// build unchanged. On success the increments are added into
/// `build.attribute` in place and returned to the caller. A `Random` plan
/// without an eligible secondary target applies nothing and returns the zero
/// vector.
pub fn advance_with(
    points: u32,
    build: &mut CharacterBuild,
    plan: RoundingPlan,
    config: &AllocatorConfig,
) -> Result<AttributeVector, AllocationError> {
    if points < config.min_points {
        return Err(AllocationError::BelowMinimum {
            points,
            min: config.min_points,
        });
    }

    let shares = ShareVector::compute(&build.basis.proportion, points);
    let affinity = build.status.affinity;

    let increments = match plan {
        RoundingPlan::Normal => rounding::normal_rounding(&shares),
        RoundingPlan::Affinity => rounding::affinity_rounding(&shares, affinity, points),
        RoundingPlan::Random { secondary } => {
            match rounding::random_rounding(&shares, affinity, secondary, points) {
                Some(increments) => increments,
                // No eligible secondary target: the round is a silent no-op.
                None => AttributeVector::ZERO,
            }
        }
    };

    build.attribute.accrue(&increments);
    Ok(increments)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::{BuildSpec, BuildStatus};

    fn rogue_build() -> CharacterBuild {
        CharacterBuild::from_spec(BuildSpec {
            status: Some(BuildStatus {
                affinity: AttributeKind::Dexterity,
                deficiency: AttributeKind::Vitality,
            }),
            attribute: Some(AttributeVector::new(20, 15, 30, 20)),
            proportion: None,
        })
        .unwrap()
        .unwrap()
    }

    #[test]
    fn budgets_below_the_minimum_are_rejected_without_mutation() {
        let mut build = rogue_build();
        let before = build.attribute;

        let err = advance_with(4, &mut build, RoundingPlan::Affinity, &AllocatorConfig::default())
            .unwrap_err();

        assert_eq!(err, AllocationError::BelowMinimum { points: 4, min: 5 });
        assert_eq!(build.attribute, before);
    }

    #[test]
    fn affinity_rounds_accrue_into_the_build() {
        let mut build = rogue_build();

        let increments =
            advance_with(10, &mut build, RoundingPlan::Affinity, &AllocatorConfig::default())
                .unwrap();

        assert_eq!(increments, AttributeVector::new(2, 1, 5, 2));
        assert_eq!(build.attribute, AttributeVector::new(22, 16, 35, 22));
        assert_eq!(build.attribute.total(), 95);
    }

    #[test]
    fn the_proportion_basis_survives_allocation() {
        let mut build = rogue_build();
        let basis = build.basis;

        advance_with(10, &mut build, RoundingPlan::Affinity, &AllocatorConfig::default())
            .unwrap();

        assert_eq!(build.basis, basis);
    }

    #[test]
    fn a_random_plan_without_an_eligible_target_is_a_no_op() {
        let mut build = rogue_build();
        let before = build.attribute;

        let increments = advance_with(
            10,
            &mut build,
            RoundingPlan::Random {
                secondary: AttributeKind::Dexterity,
            },
            &AllocatorConfig::default(),
        )
        .unwrap();

        assert_eq!(increments, AttributeVector::ZERO);
        assert_eq!(build.attribute, before);
    }

    #[test]
    fn a_tightened_minimum_is_honored() {
        let mut build = rogue_build();
        let config = AllocatorConfig::with_min_points(20);

        assert!(advance_with(10, &mut build, RoundingPlan::Affinity, &config).is_err());
        assert!(advance_with(20, &mut build, RoundingPlan::Affinity, &config).is_ok());
    }
}
