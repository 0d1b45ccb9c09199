//! The per-turn decision core.
//!
//! Leaf to root: `threat` scores a path's expected incoming damage,
//! `spawn` picks the least-risky deployment cell, `ledger` accumulates
//! where the opponent has breached us, `defense` turns that history
//! into placements, `bias` aggregates directional signal, `threshold`
//! adapts the commitment gate, and `orchestrator` sequences the lot
//! once per deploy frame.

pub mod bias;
pub mod defense;
pub mod layouts;
pub mod ledger;
pub mod orchestrator;
pub mod spawn;
pub mod threat;
pub mod threshold;

use thiserror::Error;

pub use defense::DefenseBuilder;
pub use ledger::{BreachEvent, BreachLedger};
pub use orchestrator::{AgentState, TurnOrchestrator, TurnPhase};
pub use spawn::SpawnSelector;
pub use threat::ThreatModel;
pub use threshold::ThresholdController;

/// Directional emphasis shared by defense and offense decisions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
    Center,
}

#[derive(Debug, Error)]
pub enum StrategyError {
    #[error("spawn selection requires at least one candidate")]
    EmptyCandidates,
}
