//! Deployment cell selection.

use crate::engine::arena::Coord;
use crate::engine::config::{UnitClass, UnitRoster};
use crate::engine::state::TurnState;
use crate::strategy::layouts::{LEFT_ANCHOR, LEFT_PROBE, RIGHT_ANCHOR, RIGHT_PROBE};
use crate::strategy::threat::ThreatModel;
use crate::strategy::StrategyError;

pub struct SpawnSelector<'r> {
    threat: ThreatModel<'r>,
}

impl<'r> SpawnSelector<'r> {
    pub fn new(roster: &'r UnitRoster) -> Self {
        Self {
            threat: ThreatModel::new(roster),
        }
    }

    /// The candidate whose routed path takes the least expected damage.
    /// Ties resolve to the earliest candidate in the input, so callers
    /// control preference order. An empty candidate list is a caller
    /// bug; it fails loudly under test and callers in the turn loop
    /// degrade it to a skipped branch.
    pub fn least_damage_spawn(
        &self,
        state: &TurnState<'_>,
        candidates: &[Coord],
    ) -> Result<Coord, StrategyError> {
        let mut best: Option<(Coord, f64)> = None;
        for &candidate in candidates {
            let path = state.path_to_edge(candidate);
            let damage = self
                .threat
                .estimate_path_damage(state, &path, UnitClass::Destructor);
            if best.map_or(true, |(_, best_damage)| damage < best_damage) {
                best = Some((candidate, damage));
            }
        }
        best.map(|(at, _)| at).ok_or(StrategyError::EmptyCandidates)
    }

    /// Spawn points that hug our own wall instead of the literal edge.
    ///
    /// From each bottom anchor, walk the diagonal probe run outward and
    /// keep advancing while the probed cell holds a stationary unit;
    /// the first gap ends the walk. The result is the far end of the
    /// contiguous occupied run, or the anchor itself when the nearest
    /// probe is empty.
    pub fn wall_hugging_spawns(&self, state: &TurnState<'_>) -> (Coord, Coord) {
        (
            probe_run(state, LEFT_ANCHOR, &LEFT_PROBE),
            probe_run(state, RIGHT_ANCHOR, &RIGHT_PROBE),
        )
    }
}

fn probe_run(state: &TurnState<'_>, anchor: Coord, probes: &[Coord]) -> Coord {
    let mut last = anchor;
    for &cell in probes {
        if state.contains_stationary_unit(cell) {
            last = cell;
        } else {
            break;
        }
    }
    last
}
