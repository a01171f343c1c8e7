//! The character build entity.

use crate::attribute::{AttributeError, AttributeKind, AttributeVector};
use crate::proportion::{ProportionBasis, ProportionVector};

/// Role markers for a build: which attribute leads and which lags.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BuildStatus {
    /// Attribute privileged to absorb rounding remainders.
    pub affinity: AttributeKind,
    /// The class's weak attribute. Informational only; the allocator never
    /// consumes it.
    pub deficiency: AttributeKind,
}

/// Construction input for a character build.
///
/// Parts are optional: a spec missing its status or attributes is malformed
/// and yields no build rather than an error.
#[derive(Clone, Copy, Debug, Default)]
pub struct BuildSpec {
    pub status: Option<BuildStatus>,
    pub attribute: Option<AttributeVector>,
    /// Pins the target proportion instead of deriving it from `attribute`.
    pub proportion: Option<ProportionVector>,
}

/// A character build: current attribute values plus the fixed target
/// proportion that allocation distributes against.
///
/// A build is owned exclusively by the caller that created it and is mutated
/// in place by repeated allocation rounds; `attribute` only ever grows while
/// `basis` never changes.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CharacterBuild {
    pub status: BuildStatus,
    pub attribute: AttributeVector,
    pub basis: ProportionBasis,
}

impl CharacterBuild {
    /// Constructs a build from a spec.
    ///
    /// Returns `Ok(None)` when the spec is missing its status or attributes
    /// (a non-exceptional "no build" outcome). Fails only when attribute
    /// values are present but not positive. A pinned proportion wins over
    /// derivation and is stored verbatim.
    pub fn from_spec(spec: BuildSpec) -> Result<Option<Self>, AttributeError> {
        let (Some(status), Some(attribute)) = (spec.status, spec.attribute) else {
            return Ok(None);
        };

        attribute.validate()?;

        let basis = match spec.proportion {
            Some(proportion) => ProportionBasis::pinned(proportion, &attribute),
            None => {
                let Some(basis) = ProportionBasis::derive(&attribute) else {
                    return Ok(None);
                };
                basis
            }
        };

        Ok(Some(Self {
            status,
            attribute,
            basis,
        }))
    }

    /// The attribute that absorbs rounding remainders.
    pub fn affinity(&self) -> AttributeKind {
        self.status.affinity
    }
}
