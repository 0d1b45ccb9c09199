//! Adapters for everything the decision core treats as external: the
//! match config, board geometry and occupancy queries, per-turn state
//! ingestion, and the line-oriented engine channel.

pub mod arena;
pub mod config;
pub mod io;
pub mod state;

use thiserror::Error;

pub use arena::{c, Coord, Edge, ARENA_SIZE, HALF_ARENA};
pub use config::{UnitClass, UnitRoster};
pub use io::Channel;
pub use state::{BreachReport, FramePhase, Owner, PlacedUnit, TurnState};

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("malformed match config: {0}")]
    MalformedConfig(String),
    #[error("malformed turn snapshot: {0}")]
    MalformedSnapshot(String),
    #[error("engine channel failure: {0}")]
    Channel(#[from] std::io::Error),
}
