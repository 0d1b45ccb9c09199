//! Fixed coordinate tables the decision core works from.
//!
//! These are tuned for the 28x28 diamond and move together: the
//! baseline rings, the funnels, and the keepout set all assume the
//! central spawn lane stays clear.

use crate::engine::arena::{c, Coord};

/// Baseline stationary-attacker ring.
pub const BASELINE_TOWERS: [Coord; 14] = [
    c(0, 13),
    c(1, 13),
    c(2, 13),
    c(25, 13),
    c(26, 13),
    c(27, 13),
    c(5, 10),
    c(22, 10),
    c(8, 7),
    c(19, 7),
    c(11, 4),
    c(16, 4),
    c(12, 3),
    c(15, 3),
];

/// Baseline shield ring, interleaved one step inside the towers.
pub const BASELINE_SHIELDS: [Coord; 12] = [
    c(3, 12),
    c(24, 12),
    c(4, 11),
    c(23, 11),
    c(6, 9),
    c(21, 9),
    c(7, 8),
    c(20, 8),
    c(9, 6),
    c(18, 6),
    c(10, 5),
    c(17, 5),
];

/// Cells reactive defense may anchor to: the union of both baselines.
pub fn important_points() -> impl Iterator<Item = Coord> {
    BASELINE_TOWERS.into_iter().chain(BASELINE_SHIELDS)
}

/// Breaches closer than this to an important point trigger reactive
/// towers there.
pub const REACTIVE_RADIUS: f64 = 4.0;

/// Central spawn lane kept clear of our own structures so mobile waves
/// always have a launch corridor.
pub const SPAWN_LANE_KEEPOUT: [Coord; 16] = [
    c(10, 3),
    c(11, 3),
    c(16, 3),
    c(17, 3),
    c(11, 2),
    c(12, 2),
    c(13, 2),
    c(14, 2),
    c(15, 2),
    c(16, 2),
    c(12, 1),
    c(13, 1),
    c(14, 1),
    c(15, 1),
    c(13, 0),
    c(14, 0),
];

pub fn in_keepout(at: Coord) -> bool {
    SPAWN_LANE_KEEPOUT.contains(&at)
}

/// Right-biased funnel: shields walling the center-right, towers down
/// the x=14 seam.
pub const FUNNEL_RIGHT_SHIELDS: [Coord; 19] = [
    c(15, 13),
    c(16, 13),
    c(17, 13),
    c(18, 13),
    c(19, 13),
    c(20, 13),
    c(21, 13),
    c(22, 13),
    c(21, 12),
    c(14, 11),
    c(20, 11),
    c(14, 10),
    c(19, 10),
    c(18, 9),
    c(14, 8),
    c(17, 8),
    c(14, 7),
    c(16, 7),
    c(15, 6),
];

pub const FUNNEL_RIGHT_TOWERS: [Coord; 5] =
    [c(14, 13), c(14, 12), c(14, 9), c(14, 6), c(14, 5)];

/// Left-biased funnel mirror.
pub const FUNNEL_LEFT_SHIELDS: [Coord; 17] = [
    c(5, 13),
    c(6, 13),
    c(7, 13),
    c(8, 13),
    c(9, 13),
    c(10, 13),
    c(11, 13),
    c(6, 12),
    c(7, 11),
    c(12, 11),
    c(8, 10),
    c(9, 9),
    c(12, 9),
    c(10, 8),
    c(12, 8),
    c(11, 7),
    c(12, 6),
];

pub const FUNNEL_LEFT_TOWERS: [Coord; 4] = [c(12, 13), c(12, 12), c(12, 10), c(12, 7)];

/// Mobile spawn anchors at the bottom tip of the diamond.
pub const LEFT_ANCHOR: Coord = c(13, 0);
pub const RIGHT_ANCHOR: Coord = c(14, 0);

/// Diagonal probe runs used to walk spawn points up our own wall,
/// ordered nearest anchor first.
pub const LEFT_PROBE: [Coord; 5] = [c(12, 1), c(11, 2), c(10, 3), c(9, 4), c(8, 5)];
pub const RIGHT_PROBE: [Coord; 5] = [c(15, 1), c(16, 2), c(17, 3), c(18, 4), c(19, 5)];

/// Enemy-half projection zones used to rate how defended each approach
/// is. Disjoint by construction.
pub const LEFT_PROJECTION: [Coord; 24] = [
    c(4, 18),
    c(5, 18),
    c(3, 17),
    c(4, 17),
    c(5, 17),
    c(6, 17),
    c(2, 16),
    c(3, 16),
    c(4, 16),
    c(5, 16),
    c(6, 16),
    c(1, 15),
    c(2, 15),
    c(3, 15),
    c(4, 15),
    c(5, 15),
    c(6, 15),
    c(0, 14),
    c(1, 14),
    c(2, 14),
    c(3, 14),
    c(4, 14),
    c(5, 14),
    c(6, 14),
];

pub const RIGHT_PROJECTION: [Coord; 24] = [
    c(22, 18),
    c(23, 18),
    c(21, 17),
    c(22, 17),
    c(23, 17),
    c(24, 17),
    c(21, 16),
    c(22, 16),
    c(23, 16),
    c(24, 16),
    c(25, 16),
    c(21, 15),
    c(22, 15),
    c(23, 15),
    c(24, 15),
    c(25, 15),
    c(26, 15),
    c(21, 14),
    c(22, 14),
    c(23, 14),
    c(24, 14),
    c(25, 14),
    c(26, 14),
    c(27, 14),
];

pub const MID_PROJECTION: [Coord; 72] = [
    c(13, 27),
    c(14, 27),
    c(12, 26),
    c(13, 26),
    c(14, 26),
    c(15, 26),
    c(11, 25),
    c(12, 25),
    c(13, 25),
    c(14, 25),
    c(15, 25),
    c(16, 25),
    c(10, 24),
    c(11, 24),
    c(12, 24),
    c(13, 24),
    c(14, 24),
    c(15, 24),
    c(16, 24),
    c(17, 24),
    c(9, 23),
    c(10, 23),
    c(11, 23),
    c(12, 23),
    c(13, 23),
    c(14, 23),
    c(15, 23),
    c(16, 23),
    c(17, 23),
    c(18, 23),
    c(8, 22),
    c(9, 22),
    c(10, 22),
    c(11, 22),
    c(12, 22),
    c(13, 22),
    c(14, 22),
    c(15, 22),
    c(16, 22),
    c(17, 22),
    c(18, 22),
    c(19, 22),
    c(9, 21),
    c(10, 21),
    c(11, 21),
    c(12, 21),
    c(13, 21),
    c(14, 21),
    c(15, 21),
    c(16, 21),
    c(17, 21),
    c(18, 21),
    c(10, 20),
    c(11, 20),
    c(12, 20),
    c(13, 20),
    c(14, 20),
    c(15, 20),
    c(16, 20),
    c(17, 20),
    c(11, 19),
    c(12, 19),
    c(13, 19),
    c(14, 19),
    c(15, 19),
    c(16, 19),
    c(12, 18),
    c(13, 18),
    c(14, 18),
    c(15, 18),
    c(13, 17),
    c(14, 17),
];

/// Siege line: a wall along this row lets heavy units shell the enemy
/// front from standoff range.
pub const SIEGE_ROW: i32 = 11;
pub const SIEGE_EMP_SPAWN: Coord = c(24, 10);
