//! Stationary defense construction: baseline, reactive, and funnel
//! layers, plus the standoff siege line.

use crate::engine::arena::{c, Coord};
use crate::engine::config::UnitClass;
use crate::engine::state::TurnState;
use crate::strategy::layouts::{
    self, important_points, in_keepout, REACTIVE_RADIUS, SIEGE_EMP_SPAWN, SIEGE_ROW,
};
use crate::strategy::ledger::BreachLedger;
use crate::strategy::Side;

#[derive(Debug, Default)]
pub struct DefenseBuilder;

impl DefenseBuilder {
    pub fn new() -> Self {
        Self
    }

    /// One defensive pass: baseline rings, breach-reactive towers, then
    /// the directional funnel. Placement requests against occupied
    /// cells are no-ops, so reapplying the whole stack every turn is
    /// safe and keeps destroyed structures repaired.
    pub fn apply(&self, state: &mut TurnState<'_>, ledger: &BreachLedger, side: Side) {
        self.apply_baseline(state);
        self.apply_reactive(state, ledger);
        self.apply_funnel(state, side);
    }

    fn apply_baseline(&self, state: &mut TurnState<'_>) {
        for at in layouts::BASELINE_SHIELDS {
            state.attempt_spawn(UnitClass::Encryptor, at, 1);
        }
        for at in layouts::BASELINE_TOWERS {
            state.attempt_spawn(UnitClass::Destructor, at, 1);
        }
    }

    /// Towers near every recorded breach. The full history is rescanned
    /// each turn; repeated breaches at a cell re-request the same
    /// towers, which the occupancy no-op absorbs. Nothing is ever
    /// placed inside the spawn-lane keepout.
    fn apply_reactive(&self, state: &mut TurnState<'_>, ledger: &BreachLedger) {
        for event in ledger.history() {
            for point in important_points() {
                if event.location.distance(point) >= REACTIVE_RADIUS {
                    continue;
                }
                if !in_keepout(point) {
                    state.attempt_spawn(UnitClass::Destructor, point, 1);
                }
                let inner = c(point.x, point.y - 1);
                if !in_keepout(inner) {
                    state.attempt_spawn(UnitClass::Destructor, inner, 1);
                }
            }
        }
    }

    /// Directional funnel walling one flank. A `Center` bias builds no
    /// funnel at all; see DESIGN.md for why that degenerate case is
    /// kept.
    fn apply_funnel(&self, state: &mut TurnState<'_>, side: Side) {
        let (shields, towers): (&[Coord], &[Coord]) = match side {
            Side::Right => (&layouts::FUNNEL_RIGHT_SHIELDS, &layouts::FUNNEL_RIGHT_TOWERS),
            Side::Left => (&layouts::FUNNEL_LEFT_SHIELDS, &layouts::FUNNEL_LEFT_TOWERS),
            Side::Center => return,
        };
        for &at in shields {
            state.attempt_spawn(UnitClass::Encryptor, at, 1);
        }
        for &at in towers {
            state.attempt_spawn(UnitClass::Destructor, at, 1);
        }
    }

    /// Standoff barrage: wall the siege row with the cheapest stationary
    /// unit so heavy Emp units hold range on the enemy front, then
    /// deploy as many Emps as bits allow behind it.
    pub fn siege_line(&self, state: &mut TurnState<'_>) {
        let cheapest = state.roster().cheapest_stationary();
        for x in (6..=27).rev() {
            state.attempt_spawn(cheapest, c(x, SIEGE_ROW), 1);
        }
        state.attempt_spawn(UnitClass::Emp, SIEGE_EMP_SPAWN, 1000);
    }
}
