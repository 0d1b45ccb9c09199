//! Append-only history of opponent breaches against our edge.

use crate::engine::arena::Coord;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BreachEvent {
    pub location: Coord,
    pub turn: u32,
}

/// Grows for the whole match and is never pruned or deduplicated:
/// repeated breaches at the same cell are meant to accumulate, so the
/// reactive layer leans hardest on the cells we keep losing.
#[derive(Clone, Debug, Default)]
pub struct BreachLedger {
    events: Vec<BreachEvent>,
}

impl BreachLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, location: Coord, turn: u32) {
        self.events.push(BreachEvent { location, turn });
    }

    pub fn history(&self) -> &[BreachEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
