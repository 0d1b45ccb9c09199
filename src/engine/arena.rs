//! Geometry of the diamond arena.
//!
//! The board is a 28x28 grid clipped to a diamond. The agent owns the
//! bottom half (y < 14); mobile units spawn on the two bottom diagonal
//! edges and travel toward the opposite top edge.

use serde::{Deserialize, Serialize};

pub const ARENA_SIZE: i32 = 28;
pub const HALF_ARENA: i32 = 14;

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

/// Shorthand constructor, used heavily by the fixed layout tables.
pub const fn c(x: i32, y: i32) -> Coord {
    Coord { x, y }
}

impl Coord {
    pub fn distance(self, other: Coord) -> f64 {
        let dx = (self.x - other.x) as f64;
        let dy = (self.y - other.y) as f64;
        (dx * dx + dy * dy).sqrt()
    }

    pub fn in_arena(self) -> bool {
        if self.y < 0 || self.y >= ARENA_SIZE {
            return false;
        }
        let (lo, hi) = row_bounds(self.y);
        self.x >= lo && self.x <= hi
    }

    pub fn on_friendly_side(self) -> bool {
        self.in_arena() && self.y < HALF_ARENA
    }

    /// Cells a mobile unit may be deployed from: the two bottom diagonals.
    pub fn on_friendly_edge(self) -> bool {
        self.in_arena() && self.y < HALF_ARENA && {
            let (lo, hi) = row_bounds(self.y);
            self.x == lo || self.x == hi
        }
    }

    pub fn neighbors(self) -> [Coord; 4] {
        [
            c(self.x, self.y + 1),
            c(self.x, self.y - 1),
            c(self.x - 1, self.y),
            c(self.x + 1, self.y),
        ]
    }
}

/// Inclusive x-range of valid cells in a row.
fn row_bounds(y: i32) -> (i32, i32) {
    if y < HALF_ARENA {
        (HALF_ARENA - 1 - y, HALF_ARENA + y)
    } else {
        (y - HALF_ARENA, ARENA_SIZE - 1 + HALF_ARENA - y)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Edge {
    BottomLeft,
    BottomRight,
    TopLeft,
    TopRight,
}

impl Edge {
    pub fn cells(self) -> Vec<Coord> {
        let half = HALF_ARENA;
        (0..half)
            .map(|i| match self {
                Edge::BottomLeft => c(half - 1 - i, i),
                Edge::BottomRight => c(half + i, i),
                Edge::TopLeft => c(i, half + i),
                Edge::TopRight => c(ARENA_SIZE - 1 - i, half + i),
            })
            .collect()
    }

    /// Where a mobile unit spawned at `start` is headed.
    pub fn target_for(start: Coord) -> Edge {
        if start.x < HALF_ARENA {
            Edge::TopRight
        } else {
            Edge::TopLeft
        }
    }
}
