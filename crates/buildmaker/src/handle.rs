//! Caller-facing build handle.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use build_core::{
    AllocatorConfig, AttributeKind, AttributeVector, CharacterBuild, RoundingPlan,
    RoundingStrategy, advance_with,
};

use crate::error::Result;

/// One allocation round as recorded by the handle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AllocationRecord {
    /// Point budget the round spent.
    pub points: u32,
    /// Strategy in effect for the round.
    pub strategy: RoundingStrategy,
    /// Increments applied to the build's attributes.
    pub increments: AttributeVector,
}

/// Client-facing handle owning one character build.
///
/// The handle owns the build, the selected strategy, and the in-session
/// allocation history. Repeated [`advance`](Self::advance) calls mutate the
/// build in place; the handle is not meant to be shared across threads of
/// control, so callers serialize rounds by construction.
#[derive(Debug)]
pub struct BuildHandle {
    build: CharacterBuild,
    strategy: RoundingStrategy,
    config: AllocatorConfig,
    rng: StdRng,
    history: Vec<AllocationRecord>,
}

impl BuildHandle {
    pub(crate) fn new(build: CharacterBuild, strategy: RoundingStrategy) -> Self {
        Self {
            build,
            strategy,
            config: AllocatorConfig::default(),
            rng: StdRng::from_entropy(),
            history: Vec::new(),
        }
    }

    /// Applies one allocation round of `points` to the build.
    ///
    /// Fails with the range failure when `points` is below the configured
    /// minimum; the build is untouched in that case. Successful rounds are
    /// appended to the handle's history.
    pub fn advance(&mut self, points: u32) -> Result<&CharacterBuild> {
        let plan = self.resolve_plan();
        let increments = advance_with(points, &mut self.build, plan, &self.config)?;

        self.history.push(AllocationRecord {
            points,
            strategy: self.strategy,
            increments,
        });
        tracing::debug!(points, strategy = %self.strategy, "allocation round applied");

        Ok(&self.build)
    }

    /// Resolves the configured strategy into a per-round plan, picking the
    /// random strategy's secondary target uniformly from the non-affinity
    /// attributes.
    fn resolve_plan(&mut self) -> RoundingPlan {
        match self.strategy {
            RoundingStrategy::Normal => RoundingPlan::Normal,
            RoundingStrategy::Affinity => RoundingPlan::Affinity,
            RoundingStrategy::Random => {
                let affinity = self.build.status.affinity;
                let eligible: Vec<AttributeKind> = AttributeKind::all()
                    .into_iter()
                    .filter(|kind| *kind != affinity)
                    .collect();

                // An empty pool collapses the round to a no-op downstream.
                let secondary = eligible.choose(&mut self.rng).copied().unwrap_or(affinity);
                RoundingPlan::Random { secondary }
            }
        }
    }

    /// The build in its current state.
    pub fn build(&self) -> &CharacterBuild {
        &self.build
    }

    /// Strategy applied to every round.
    pub fn strategy(&self) -> RoundingStrategy {
        self.strategy
    }

    /// Allocation rounds applied so far, oldest first.
    ///
    /// The history lives only for this session; nothing is persisted.
    pub fn history(&self) -> &[AllocationRecord] {
        &self.history
    }
}
