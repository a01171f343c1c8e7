//! Rounding strategies.
//!
//! Multiplying a proportion by a point budget leaves fractional shares per
//! attribute; a rounding strategy resolves them into whole increments. Only
//! the affinity and random variants keep the increment total pinned to the
//! budget. The normal variant rounds each share independently and may drift
//! from the budget; that weaker contract is deliberate and documented on
//! [`normal_rounding`].

use crate::attribute::{AttributeKind, AttributeVector};
use crate::proportion::ProportionVector;

/// Selectable rounding strategies, in the order exposed to callers.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum RoundingStrategy {
    /// Round every share independently; the total may drift from the budget.
    #[default]
    Normal,
    /// Floor fractional shares and credit what they leave unspent to the
    /// affinity attribute; the total always equals the budget.
    Affinity,
    /// Floor all shares and split the unspent remainder between the affinity
    /// attribute and one randomly chosen secondary target.
    Random,
}

impl RoundingStrategy {
    /// Total number of strategies.
    pub const COUNT: usize = 3;

    /// Returns all strategies in canonical order.
    pub const fn all() -> [RoundingStrategy; Self::COUNT] {
        [
            RoundingStrategy::Normal,
            RoundingStrategy::Affinity,
            RoundingStrategy::Random,
        ]
    }
}

/// Fractional ideal share of one point budget per attribute.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShareVector {
    strength: f64,
    magic: f64,
    dexterity: f64,
    vitality: f64,
}

impl ShareVector {
    /// `proportion[k] * points` for every attribute.
    pub fn compute(proportion: &ProportionVector, points: u32) -> Self {
        let budget = f64::from(points);
        Self {
            strength: proportion.strength * budget,
            magic: proportion.magic * budget,
            dexterity: proportion.dexterity * budget,
            vitality: proportion.vitality * budget,
        }
    }

    /// Share for a single attribute.
    #[inline]
    pub fn get(&self, kind: AttributeKind) -> f64 {
        match kind {
            AttributeKind::Strength => self.strength,
            AttributeKind::Magic => self.magic,
            AttributeKind::Dexterity => self.dexterity,
            AttributeKind::Vitality => self.vitality,
        }
    }
}

/// Distance from a share to the next whole value, as used by the affinity
/// classification: `(floor(share) + 1) mod share`.
///
/// A share of exactly 1.0 reports a zero deficit and therefore floors;
/// degenerate (zero or negative) shares also floor.
fn rounding_deficit(share: f64) -> f64 {
    if share > 0.0 {
        (share.floor() + 1.0) % share
    } else {
        0.0
    }
}

/// Independent rounding of every share, half away from zero.
///
/// The weakest contract of the three: no correction is applied afterwards,
/// so the increment total can land one or more points off the budget.
/// Callers that need the budget honored exactly must pick another strategy.
pub fn normal_rounding(shares: &ShareVector) -> AttributeVector {
    let mut increments = AttributeVector::ZERO;
    for kind in AttributeKind::all() {
        *increments.get_mut(kind) = shares.get(kind).round() as i32;
    }
    increments
}

/// Affinity rounding: floor the non-affinity shares that sit closer to their
/// floor, round the rest, and let the affinity attribute absorb every point
/// left unspent.
///
/// The increment total equals `points` exactly for every well-formed share
/// vector, which is the primary correctness guarantee of the allocator.
pub fn affinity_rounding(
    shares: &ShareVector,
    affinity: AttributeKind,
    points: u32,
) -> AttributeVector {
    let mut increments = AttributeVector::ZERO;
    let mut spent: i32 = 0;

    for kind in AttributeKind::all() {
        if kind == affinity {
            continue;
        }

        let share = shares.get(kind);
        let increment = if rounding_deficit(share) < 0.5 {
            share.floor() as i32
        } else {
            share.round() as i32
        };

        *increments.get_mut(kind) = increment;
        spent += increment;
    }

    let mut leftover = points as i32 - spent;

    // A pinned proportion with a tiny affinity share can make the rounded
    // shares overshoot the budget; pull the excess back from the largest
    // increments so the total stays exact.
    while leftover < 0 {
        let Some(kind) = largest_increment(&increments, affinity) else {
            break;
        };
        *increments.get_mut(kind) -= 1;
        leftover += 1;
    }

    *increments.get_mut(affinity) = leftover.max(0);
    increments
}

fn largest_increment(increments: &AttributeVector, affinity: AttributeKind) -> Option<AttributeKind> {
    AttributeKind::all()
        .into_iter()
        .filter(|kind| *kind != affinity && increments.get(*kind) > 0)
        .max_by_key(|kind| increments.get(*kind))
}

/// Random rounding: floor every share, then split the unspent remainder
/// between the affinity attribute and the chosen secondary target, the
/// affinity taking the larger half.
///
/// Returns `None` when `secondary` is not an eligible target (it must differ
/// from the affinity attribute); callers treat that round as a no-op.
pub fn random_rounding(
    shares: &ShareVector,
    affinity: AttributeKind,
    secondary: AttributeKind,
    points: u32,
) -> Option<AttributeVector> {
    if secondary == affinity {
        return None;
    }

    let mut increments = AttributeVector::ZERO;
    let mut spent: i32 = 0;

    for kind in AttributeKind::all() {
        let increment = (shares.get(kind).floor() as i32).max(0);
        *increments.get_mut(kind) = increment;
        spent += increment;
    }

    let leftover = (points as i32 - spent).max(0);
    let secondary_cut = leftover / 2;
    *increments.get_mut(secondary) += secondary_cut;
    *increments.get_mut(affinity) += leftover - secondary_cut;

    Some(increments)
}
