//! Adaptive resource-commitment gate.

/// Bits required before the agent commits a mobile wave.
pub const INITIAL_COMMIT_THRESHOLD: u32 = 6;

/// Escalation factor applied when a full-commitment attack moved
/// nothing.
const ESCALATION_FACTOR: f64 = 1.5;

/// Tracks whether the last offensive wave achieved anything and raises
/// the bar when it did not: an attack that left enemy health untouched
/// means the next one must be bigger. The threshold is monotone — it
/// never comes back down within a match.
#[derive(Clone, Debug)]
pub struct ThresholdController {
    minimum: u32,
    offense_committed_last_turn: bool,
    last_observed_enemy_health: f64,
}

impl ThresholdController {
    pub fn new(starting_enemy_health: f64) -> Self {
        Self {
            minimum: INITIAL_COMMIT_THRESHOLD,
            offense_committed_last_turn: false,
            last_observed_enemy_health: starting_enemy_health,
        }
    }

    /// Once per turn, before any spending decision: escalate if the
    /// previous turn's offense made no measurable progress, then record
    /// the health reading the next turn will be judged against.
    pub fn observe_turn(&mut self, enemy_health: f64) {
        if self.offense_committed_last_turn && enemy_health == self.last_observed_enemy_health {
            self.minimum = (self.minimum as f64 * ESCALATION_FACTOR) as u32;
        }
        self.last_observed_enemy_health = enemy_health;
    }

    /// Record whether this turn committed an offensive wave; consumed
    /// by the next turn's `observe_turn`.
    pub fn record_offense(&mut self, committed: bool) {
        self.offense_committed_last_turn = committed;
    }

    pub fn minimum(&self) -> u32 {
        self.minimum
    }

    pub fn allows(&self, bits: f64) -> bool {
        bits >= self.minimum as f64
    }

    /// Harasser count per anchor scales with the gate: the more bits we
    /// insist on banking, the heavier the screening wave.
    pub fn harasser_count(&self) -> u32 {
        self.minimum / INITIAL_COMMIT_THRESHOLD
    }

    pub fn offense_committed_last_turn(&self) -> bool {
        self.offense_committed_last_turn
    }
}
