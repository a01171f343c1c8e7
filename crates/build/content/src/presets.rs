//! Class presets.
//!
//! Each playable class starts from a fixed attribute spread and a fixed
//! affinity/deficiency pairing. The affinity attribute is the one the
//! class's allocation favors when rounding leaves remainders.

use build_core::{AttributeKind, AttributeVector, BuildSpec, BuildStatus, ProportionVector};

/// The three playable character classes.
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
pub enum CharacterClass {
    /// Melee fighter led by strength.
    Warrior,
    /// Skirmisher led by dexterity.
    Rogue,
    /// Caster led by magic.
    Sorcerer,
}

impl CharacterClass {
    /// Total number of classes.
    pub const COUNT: usize = 3;

    /// Returns all classes in canonical order.
    pub const fn all() -> [CharacterClass; Self::COUNT] {
        [
            CharacterClass::Warrior,
            CharacterClass::Rogue,
            CharacterClass::Sorcerer,
        ]
    }
}

/// Fixed starting configuration for one class.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClassPreset {
    pub class: CharacterClass,
    pub status: BuildStatus,
    pub attribute: AttributeVector,
}

impl ClassPreset {
    /// Looks up the preset table for `class`.
    pub const fn of(class: CharacterClass) -> ClassPreset {
        match class {
            CharacterClass::Warrior => ClassPreset {
                class,
                status: BuildStatus {
                    affinity: AttributeKind::Strength,
                    deficiency: AttributeKind::Magic,
                },
                attribute: AttributeVector::new(30, 10, 20, 25),
            },
            CharacterClass::Rogue => ClassPreset {
                class,
                status: BuildStatus {
                    affinity: AttributeKind::Dexterity,
                    deficiency: AttributeKind::Vitality,
                },
                attribute: AttributeVector::new(20, 15, 30, 20),
            },
            CharacterClass::Sorcerer => ClassPreset {
                class,
                status: BuildStatus {
                    affinity: AttributeKind::Magic,
                    deficiency: AttributeKind::Strength,
                },
                attribute: AttributeVector::new(15, 35, 15, 20),
            },
        }
    }

    /// Expands the preset into a build spec, optionally pinning a target
    /// proportion in place of the one derived from the starting attributes.
    pub fn to_spec(&self, proportion: Option<ProportionVector>) -> BuildSpec {
        BuildSpec {
            status: Some(self.status),
            attribute: Some(self.attribute),
            proportion,
        }
    }
}
