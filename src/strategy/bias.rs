//! Directional signal: which flank to reinforce, which approach to
//! attack.

use crate::engine::arena::{Coord, HALF_ARENA};
use crate::engine::config::UnitRoster;
use crate::engine::state::TurnState;
use crate::strategy::layouts::{LEFT_PROJECTION, MID_PROJECTION, RIGHT_PROJECTION};
use crate::strategy::ledger::BreachLedger;
use crate::strategy::Side;

/// The flank the opponent has breached strictly more often. A tie —
/// including an empty history — yields `Center`.
pub fn pick_defense_side(ledger: &BreachLedger) -> Side {
    let mut lefts = 0u32;
    let mut rights = 0u32;
    for event in ledger.history() {
        if event.location.x < HALF_ARENA {
            lefts += 1;
        } else {
            rights += 1;
        }
    }
    if lefts > rights {
        Side::Left
    } else if rights > lefts {
        Side::Right
    } else {
        Side::Center
    }
}

/// The least-defended enemy approach, rating each projection zone by
/// the damage x range potential of every stationary unit inside it.
/// Ties resolve in evaluation order: left, then right, then center.
pub fn pick_attack_side(state: &TurnState<'_>, roster: &UnitRoster) -> Side {
    let left = zone_pressure(state, roster, &LEFT_PROJECTION);
    let right = zone_pressure(state, roster, &RIGHT_PROJECTION);
    let mid = zone_pressure(state, roster, &MID_PROJECTION);

    let min = left.min(right).min(mid);
    if min == left {
        Side::Left
    } else if min == right {
        Side::Right
    } else {
        Side::Center
    }
}

fn zone_pressure(state: &TurnState<'_>, roster: &UnitRoster, zone: &[Coord]) -> f64 {
    state
        .units()
        .iter()
        .filter(|unit| unit.class.is_stationary() && zone.contains(&unit.at))
        .map(|unit| {
            let attrs = roster.attrs(unit.class);
            attrs.damage * attrs.range
        })
        .sum()
}
