//! Autopilot agent for a two-lane, turn-based tower-defense arena.
//!
//! Each round both players spend a resource currency ("bits") placing
//! stationary defenses and mobile attackers on a shared diamond board,
//! trying to breach the opposing edge. This crate is the agent side of
//! that loop: `engine` adapts the wire protocol, board queries, and the
//! match config; `strategy` holds the per-turn decision core (threat
//! scoring, reactive defense, side bias, commitment threshold); `agent`
//! drives a full match over a line-oriented channel.

pub mod agent;
pub mod engine;
pub mod strategy;
