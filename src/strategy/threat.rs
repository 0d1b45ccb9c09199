//! Expected-damage estimate for a mobile unit's route.

use crate::engine::arena::Coord;
use crate::engine::config::{UnitClass, UnitRoster};
use crate::engine::state::TurnState;

pub struct ThreatModel<'r> {
    roster: &'r UnitRoster,
}

impl<'r> ThreatModel<'r> {
    pub fn new(roster: &'r UnitRoster) -> Self {
        Self { roster }
    }

    /// Sum, over every cell of `path`, the number of enemy stationary
    /// attackers covering that cell times `tower`'s per-hit damage.
    ///
    /// Deliberately an approximation, not a survival simulation: the
    /// full path is always summed even when the running total already
    /// exceeds any unit's effective health, and an empty path scores 0.
    pub fn estimate_path_damage(
        &self,
        state: &TurnState<'_>,
        path: &[Coord],
        tower: UnitClass,
    ) -> f64 {
        let per_hit = self.roster.attrs(tower).damage;
        path.iter()
            .map(|&cell| state.attackers_of(cell) as f64 * per_hit)
            .sum()
    }
}
