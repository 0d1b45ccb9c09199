//! Per-turn sequencing of the decision core.

use crate::engine::config::{UnitClass, UnitRoster};
use crate::engine::state::TurnState;
use crate::strategy::bias;
use crate::strategy::defense::DefenseBuilder;
use crate::strategy::ledger::BreachLedger;
use crate::strategy::spawn::SpawnSelector;
use crate::strategy::threshold::ThresholdController;
use log::{debug, warn};

/// Ceiling on mobile-fast units committed in one offensive wave.
const OFFENSE_WAVE_CAP: u32 = 100;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnPhase {
    AwaitingTurn,
    Deciding,
    Submitted,
}

/// Cross-turn decision state owned by the agent instance: the
/// commitment gate and the breach history. Created once at match
/// start, mutated once per turn, dropped at process end.
#[derive(Clone, Debug)]
pub struct AgentState {
    pub threshold: ThresholdController,
    pub ledger: BreachLedger,
}

impl AgentState {
    pub fn new(starting_enemy_health: f64) -> Self {
        Self {
            threshold: ThresholdController::new(starting_enemy_health),
            ledger: BreachLedger::new(),
        }
    }
}

pub struct TurnOrchestrator<'r> {
    roster: &'r UnitRoster,
    defense: DefenseBuilder,
    spawner: SpawnSelector<'r>,
    phase: TurnPhase,
}

impl<'r> TurnOrchestrator<'r> {
    pub fn new(roster: &'r UnitRoster) -> Self {
        Self {
            roster,
            defense: DefenseBuilder::new(),
            spawner: SpawnSelector::new(roster),
            phase: TurnPhase::AwaitingTurn,
        }
    }

    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    /// One full decision pass against a deploy-frame snapshot. Order
    /// matters: defenses first, then the gate update, then the three
    /// spending branches in sequence, sharing one purse.
    pub fn decide(&mut self, state: &mut TurnState<'_>, agent: &mut AgentState) {
        self.phase = TurnPhase::Deciding;

        let side = bias::pick_defense_side(&agent.ledger);
        debug!(
            "turn {}: defense side {side:?}, {} breaches on record",
            state.turn_number(),
            agent.ledger.len()
        );
        self.defense.apply(state, &agent.ledger, side);

        agent.threshold.observe_turn(state.enemy_health());

        // Every gate reads the turn's opening bits: a pass that runs
        // later in the sequence is not disqualified by an earlier
        // pass's spending, it just places fewer units (or none, once
        // the purse is empty and the requests absorb as no-ops).
        let bits = state.opening_bits();
        let gated = agent.threshold.allows(bits);

        // Behind on health: screen first, attack with what is left.
        if gated && state.my_health() < state.enemy_health() {
            self.harass(state, &agent.threshold);
        }

        if gated {
            self.offense(state);
            agent.threshold.record_offense(true);
        } else {
            agent.threshold.record_offense(false);
        }

        // Ahead or even: the screening wave goes out after the attack.
        if gated && state.my_health() >= state.enemy_health() {
            self.harass(state, &agent.threshold);
        }
    }

    pub fn mark_submitted(&mut self) {
        self.phase = TurnPhase::Submitted;
    }

    pub fn mark_awaiting(&mut self) {
        self.phase = TurnPhase::AwaitingTurn;
    }

    fn harass(&self, state: &mut TurnState<'_>, gate: &ThresholdController) {
        let (left, right) = self.spawner.wall_hugging_spawns(state);
        let per_anchor = gate.harasser_count();
        state.attempt_spawn(UnitClass::Scrambler, left, per_anchor);
        state.attempt_spawn(UnitClass::Scrambler, right, per_anchor);
    }

    /// Full-commitment wave: pick the safer of the two wall-hugging
    /// spawn points and pour mobile-fast units through it until bits or
    /// the wave cap run out.
    fn offense(&self, state: &mut TurnState<'_>) {
        let (left, right) = self.spawner.wall_hugging_spawns(state);
        let spawn = match self.spawner.least_damage_spawn(state, &[left, right]) {
            Ok(at) => at,
            Err(err) => {
                warn!("offensive pass skipped: {err}");
                return;
            }
        };

        let cost = self.roster.cost(UnitClass::Ping);
        let affordable = if cost > 0.0 {
            (state.my_bits() / cost) as u32
        } else {
            OFFENSE_WAVE_CAP
        };
        let wave = affordable.min(OFFENSE_WAVE_CAP);
        for _ in 0..wave {
            state.attempt_spawn(UnitClass::Ping, spawn, 1);
        }
    }
}
