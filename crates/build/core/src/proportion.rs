//! Target proportion derivation.
//!
//! A build's proportion is the normalized share of each attribute in the
//! attribute total, fixed when the build is created. Allocation always
//! distributes against this target, never against the mutated attribute
//! values.

use crate::attribute::{AttributeKind, AttributeVector};

/// Normalized per-attribute fractions.
///
/// Fields are non-negative and sum to 1.0 within floating-point tolerance
/// when derived; caller-pinned proportions are expected to honor the same
/// invariant.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProportionVector {
    pub strength: f64,
    pub magic: f64,
    pub dexterity: f64,
    pub vitality: f64,
}

impl ProportionVector {
    /// Create a proportion vector with the specified fractions.
    pub const fn new(strength: f64, magic: f64, dexterity: f64, vitality: f64) -> Self {
        Self {
            strength,
            magic,
            dexterity,
            vitality,
        }
    }

    /// Fraction for a single attribute.
    #[inline]
    pub const fn get(&self, kind: AttributeKind) -> f64 {
        match kind {
            AttributeKind::Strength => self.strength,
            AttributeKind::Magic => self.magic,
            AttributeKind::Dexterity => self.dexterity,
            AttributeKind::Vitality => self.vitality,
        }
    }

    /// Sum of all four fractions.
    pub fn total(&self) -> f64 {
        self.strength + self.magic + self.dexterity + self.vitality
    }

    /// True when the fractions sum to 1.0 within `tolerance`.
    pub fn is_normalized(&self, tolerance: f64) -> bool {
        (self.total() - 1.0).abs() <= tolerance
    }
}

/// A proportion paired with the attribute total it was computed against.
///
/// The pairing is fixed for the lifetime of a build: allocation mutates the
/// attribute vector but never re-derives the basis, so the proportion keeps
/// describing the *target* ratio rather than the current one.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProportionBasis {
    /// Attribute total at derivation time.
    pub sum: i32,
    /// Target distribution of future points.
    pub proportion: ProportionVector,
}

impl ProportionBasis {
    /// Derives the proportion from current attribute values.
    ///
    /// Each fraction is `attribute[k] / sum`. Returns `None` when the
    /// attribute total is not positive, meaning no proportion is derivable.
    pub fn derive(attribute: &AttributeVector) -> Option<Self> {
        let sum = attribute.total();
        if sum <= 0 {
            return None;
        }

        let total = f64::from(sum);
        Some(Self {
            sum,
            proportion: ProportionVector::new(
                f64::from(attribute.strength) / total,
                f64::from(attribute.magic) / total,
                f64::from(attribute.dexterity) / total,
                f64::from(attribute.vitality) / total,
            ),
        })
    }

    /// Pairs a caller-pinned proportion with the current attribute total,
    /// bypassing derivation.
    pub fn pinned(proportion: ProportionVector, attribute: &AttributeVector) -> Self {
        Self {
            sum: attribute.total(),
            proportion,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    #[test]
    fn derived_proportion_sums_to_one() {
        let attribute = AttributeVector::new(30, 10, 20, 25);
        let basis = ProportionBasis::derive(&attribute).unwrap();

        assert_eq!(basis.sum, 85);
        assert!(basis.proportion.is_normalized(TOLERANCE));
        assert!((basis.proportion.get(AttributeKind::Strength) - 30.0 / 85.0).abs() <= TOLERANCE);
        assert!((basis.proportion.get(AttributeKind::Vitality) - 25.0 / 85.0).abs() <= TOLERANCE);
    }

    #[test]
    fn derivation_fails_without_a_positive_total() {
        assert!(ProportionBasis::derive(&AttributeVector::ZERO).is_none());
        assert!(ProportionBasis::derive(&AttributeVector::new(5, -10, 3, 2)).is_none());
    }

    #[test]
    fn pinned_proportion_keeps_the_attribute_total() {
        let attribute = AttributeVector::new(15, 35, 15, 20);
        let pinned = ProportionVector::new(0.10, 0.60, 0.15, 0.15);
        let basis = ProportionBasis::pinned(pinned, &attribute);

        assert_eq!(basis.sum, 85);
        assert_eq!(basis.proportion, pinned);
        assert!(basis.proportion.is_normalized(TOLERANCE));
    }
}
