//! Option normalization for the builder entry points.

use build_core::{
    AllocatorConfig, AttributeError, AttributeVector, ProportionVector, RoundingStrategy,
};
use tracing::{info, warn};

/// Divisor applied to caller-supplied percentage proportions.
const PERCENT_SCALE: f64 = 100.0;

/// Caller options accepted by [`build`](crate::build).
#[derive(Clone, Copy, Debug, Default)]
pub struct BuildOptions {
    /// Rounding strategy applied to every allocation round. Defaults to
    /// [`RoundingStrategy::Normal`] when unset.
    pub strategy: Option<RoundingStrategy>,
    /// Target proportion in percentage units, pinned in place of the
    /// proportion derived from the class preset's starting attributes.
    pub proportion: Option<AttributeVector>,
}

/// Options after validation and unit conversion.
#[derive(Clone, Copy, Debug)]
pub(crate) struct NormalizedOptions {
    pub strategy: RoundingStrategy,
    pub proportion: Option<ProportionVector>,
}

/// Validates the options and converts percentage proportions to fractions.
///
/// A pinned proportion with non-positive fields fails with the same
/// validation error that build construction raises.
pub(crate) fn normalize(options: BuildOptions) -> Result<NormalizedOptions, AttributeError> {
    let strategy = match options.strategy {
        Some(strategy) => {
            info!(%strategy, "rounding strategy selected");
            strategy
        }
        None => RoundingStrategy::default(),
    };

    let proportion = match options.proportion {
        Some(percentages) => {
            percentages.validate()?;
            info!("points will be distributed along the caller-supplied proportion");

            let pinned = ProportionVector::new(
                f64::from(percentages.strength) / PERCENT_SCALE,
                f64::from(percentages.magic) / PERCENT_SCALE,
                f64::from(percentages.dexterity) / PERCENT_SCALE,
                f64::from(percentages.vitality) / PERCENT_SCALE,
            );

            if !pinned.is_normalized(AllocatorConfig::PROPORTION_TOLERANCE) {
                warn!(
                    total = pinned.total(),
                    "pinned proportion does not sum to one"
                );
            }

            Some(pinned)
        }
        None => None,
    };

    Ok(NormalizedOptions {
        strategy,
        proportion,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use build_core::AttributeKind;

    #[test]
    fn defaults_to_the_normal_strategy() {
        let normalized = normalize(BuildOptions::default()).unwrap();
        assert_eq!(normalized.strategy, RoundingStrategy::Normal);
        assert!(normalized.proportion.is_none());
    }

    #[test]
    fn percentages_are_scaled_down_verbatim() {
        let normalized = normalize(BuildOptions {
            strategy: Some(RoundingStrategy::Affinity),
            proportion: Some(AttributeVector::new(10, 60, 15, 15)),
        })
        .unwrap();

        assert_eq!(normalized.strategy, RoundingStrategy::Affinity);
        assert_eq!(
            normalized.proportion,
            Some(ProportionVector::new(0.10, 0.60, 0.15, 0.15))
        );
    }

    #[test]
    fn non_positive_percentages_are_rejected() {
        let err = normalize(BuildOptions {
            strategy: None,
            proportion: Some(AttributeVector::new(10, -60, 15, 15)),
        })
        .unwrap_err();

        assert_eq!(
            err,
            AttributeError::NonPositive {
                kind: AttributeKind::Magic,
                value: -60
            }
        );
    }
}
