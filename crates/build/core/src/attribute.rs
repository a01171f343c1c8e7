//! Attribute identity and vectors.
//!
//! The four attributes are the only quantities a build permanently stores;
//! everything else (proportions, shares, increments) is derived from them.

use crate::error::{BuildError, ErrorSeverity};

/// The four attributes a character build distributes points across.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum AttributeKind {
    /// Physical power; the warrior's leading attribute.
    Strength,
    /// Spell potency; the sorcerer's leading attribute.
    Magic,
    /// Speed and precision; the rogue's leading attribute.
    Dexterity,
    /// Health and endurance.
    Vitality,
}

impl AttributeKind {
    /// Total number of attributes.
    pub const COUNT: usize = 4;

    /// Returns all attribute kinds in canonical order.
    pub const fn all() -> [AttributeKind; Self::COUNT] {
        [
            AttributeKind::Strength,
            AttributeKind::Magic,
            AttributeKind::Dexterity,
            AttributeKind::Vitality,
        ]
    }
}

/// One value per attribute.
///
/// Doubles as a build's current attribute values (all positive once
/// validated) and as the per-round increment vector produced by rounding
/// (non-negative).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttributeVector {
    pub strength: i32,
    pub magic: i32,
    pub dexterity: i32,
    pub vitality: i32,
}

impl AttributeVector {
    /// The all-zero vector.
    pub const ZERO: AttributeVector = AttributeVector::new(0, 0, 0, 0);

    /// Create a vector with the specified values.
    pub const fn new(strength: i32, magic: i32, dexterity: i32, vitality: i32) -> Self {
        Self {
            strength,
            magic,
            dexterity,
            vitality,
        }
    }

    /// Value for a single attribute.
    #[inline]
    pub const fn get(&self, kind: AttributeKind) -> i32 {
        match kind {
            AttributeKind::Strength => self.strength,
            AttributeKind::Magic => self.magic,
            AttributeKind::Dexterity => self.dexterity,
            AttributeKind::Vitality => self.vitality,
        }
    }

    /// Mutable access to a single attribute.
    #[inline]
    pub fn get_mut(&mut self, kind: AttributeKind) -> &mut i32 {
        match kind {
            AttributeKind::Strength => &mut self.strength,
            AttributeKind::Magic => &mut self.magic,
            AttributeKind::Dexterity => &mut self.dexterity,
            AttributeKind::Vitality => &mut self.vitality,
        }
    }

    /// Sum of all four values.
    pub const fn total(&self) -> i32 {
        self.strength + self.magic + self.dexterity + self.vitality
    }

    /// Checks the all-positive creation invariant.
    ///
    /// A build cannot be created from zero or negative attribute values;
    /// the first offending attribute (in canonical order) is reported.
    pub fn validate(&self) -> Result<(), AttributeError> {
        for kind in AttributeKind::all() {
            let value = self.get(kind);
            if value <= 0 {
                return Err(AttributeError::NonPositive { kind, value });
            }
        }
        Ok(())
    }

    /// Adds `delta` element-wise into this vector.
    pub fn accrue(&mut self, delta: &AttributeVector) {
        self.strength += delta.strength;
        self.magic += delta.magic;
        self.dexterity += delta.dexterity;
        self.vitality += delta.vitality;
    }
}

/// Errors raised while validating attribute values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AttributeError {
    /// An attribute field is present but zero or negative.
    #[error("attribute '{kind}' must be positive (got {value})")]
    NonPositive {
        /// The offending attribute.
        kind: AttributeKind,
        /// The rejected value.
        value: i32,
    },
}

impl BuildError for AttributeError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NonPositive { .. } => "ATTR_NON_POSITIVE",
        }
    }
}
