//! Per-turn state snapshot and placement bookkeeping.
//!
//! One snapshot arrives per frame. Deploy frames (phase 0) carry the
//! full board and trigger a decision pass; action frames (phase 1)
//! carry sub-events such as breaches. The snapshot is read-only input;
//! the placement queue layered on top mirrors the engine's legality
//! contract, so a request against an occupied cell or an empty purse
//! is a silent no-op rather than an error.

use crate::engine::arena::{c, Coord, Edge};
use crate::engine::config::{UnitClass, UnitRoster};
use crate::engine::EngineError;
use serde::Deserialize;
use serde_json::Value;
use std::collections::{HashMap, HashSet, VecDeque};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FramePhase {
    Deploy,
    Action,
    EndOfRound,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Owner {
    Us,
    Them,
}

#[derive(Clone, Debug)]
pub struct PlacedUnit {
    pub class: UnitClass,
    pub at: Coord,
    pub owner: Owner,
    pub stability: f64,
}

/// A breach sub-event: some mobile unit reached an edge this frame.
/// `by_us` distinguishes our breach of their edge from theirs of ours.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BreachReport {
    pub location: Coord,
    pub by_us: bool,
}

#[derive(Clone, Copy, Debug, Default)]
struct PlayerStats {
    health: f64,
    cores: f64,
    bits: f64,
}

#[derive(Debug, Deserialize)]
struct RawSnapshot {
    #[serde(rename = "turnInfo")]
    turn_info: Vec<f64>,
    #[serde(rename = "p1Stats")]
    p1_stats: Vec<f64>,
    #[serde(rename = "p2Stats")]
    p2_stats: Vec<f64>,
    #[serde(rename = "p1Units", default)]
    p1_units: Vec<Vec<Vec<Value>>>,
    #[serde(rename = "p2Units", default)]
    p2_units: Vec<Vec<Vec<Value>>>,
    #[serde(default)]
    events: RawEvents,
}

#[derive(Debug, Deserialize, Default)]
struct RawEvents {
    #[serde(default)]
    breach: Vec<Vec<Value>>,
}

pub struct TurnState<'r> {
    roster: &'r UnitRoster,
    turn_number: u32,
    phase: FramePhase,
    us: PlayerStats,
    them: PlayerStats,
    units: Vec<PlacedUnit>,
    occupied: HashSet<Coord>,
    breaches: Vec<BreachReport>,
    build_queue: Vec<(UnitClass, Coord)>,
    deploy_queue: Vec<(UnitClass, Coord)>,
    bits_remaining: f64,
    cores_remaining: f64,
}

impl<'r> TurnState<'r> {
    pub fn parse(roster: &'r UnitRoster, raw: &str) -> Result<Self, EngineError> {
        let snapshot: RawSnapshot = serde_json::from_str(raw)
            .map_err(|err| EngineError::MalformedSnapshot(err.to_string()))?;

        let phase = match snapshot.turn_info.first().copied() {
            Some(p) if p == 0.0 => FramePhase::Deploy,
            Some(p) if p == 1.0 => FramePhase::Action,
            Some(p) if p == 2.0 => FramePhase::EndOfRound,
            other => {
                return Err(EngineError::MalformedSnapshot(format!(
                    "unrecognized frame phase {other:?}"
                )))
            }
        };
        let turn_number = snapshot.turn_info.get(1).copied().unwrap_or(0.0) as u32;

        let us = parse_stats(&snapshot.p1_stats, "p1Stats")?;
        let them = parse_stats(&snapshot.p2_stats, "p2Stats")?;

        let mut units = Vec::new();
        parse_units(&snapshot.p1_units, Owner::Us, &mut units)?;
        parse_units(&snapshot.p2_units, Owner::Them, &mut units)?;
        let occupied = units
            .iter()
            .filter(|unit| unit.class.is_stationary())
            .map(|unit| unit.at)
            .collect();

        let breaches = parse_breaches(&snapshot.events.breach)?;

        Ok(Self {
            roster,
            turn_number,
            phase,
            us,
            them,
            units,
            occupied,
            breaches,
            build_queue: Vec::new(),
            deploy_queue: Vec::new(),
            bits_remaining: us.bits,
            cores_remaining: us.cores,
        })
    }

    pub fn roster(&self) -> &UnitRoster {
        self.roster
    }

    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    pub fn phase(&self) -> FramePhase {
        self.phase
    }

    pub fn my_health(&self) -> f64 {
        self.us.health
    }

    pub fn enemy_health(&self) -> f64 {
        self.them.health
    }

    /// Bits still unspent this turn; placement requests draw this down.
    pub fn my_bits(&self) -> f64 {
        self.bits_remaining
    }

    /// Bits we entered the turn with, untouched by this turn's spending.
    /// Commitment gates read this so a branch is not starved by an
    /// earlier branch's placements; the actual spend still comes out of
    /// `my_bits`.
    pub fn opening_bits(&self) -> f64 {
        self.us.bits
    }

    pub fn my_cores(&self) -> f64 {
        self.cores_remaining
    }

    pub fn enemy_bits(&self) -> f64 {
        self.them.bits
    }

    pub fn units(&self) -> &[PlacedUnit] {
        &self.units
    }

    pub fn breaches(&self) -> &[BreachReport] {
        &self.breaches
    }

    pub fn contains_stationary_unit(&self, at: Coord) -> bool {
        self.occupied.contains(&at)
    }

    /// Count of enemy stationary attackers whose range covers `cell`.
    /// Range and targeting rules belong to the engine; this adapter
    /// applies the plain euclidean-radius reading of the config.
    pub fn attackers_of(&self, cell: Coord) -> usize {
        let range = self.roster.attrs(UnitClass::Destructor).range;
        self.units
            .iter()
            .filter(|unit| {
                unit.owner == Owner::Them
                    && unit.class == UnitClass::Destructor
                    && unit.at.distance(cell) <= range
            })
            .count()
    }

    /// Enemy stationary census, optionally filtered by class and by
    /// x / y coordinate sets.
    pub fn count_enemy_units(
        &self,
        class: Option<UnitClass>,
        valid_x: Option<&[i32]>,
        valid_y: Option<&[i32]>,
    ) -> usize {
        self.units
            .iter()
            .filter(|unit| unit.owner == Owner::Them && unit.class.is_stationary())
            .filter(|unit| class.map_or(true, |want| unit.class == want))
            .filter(|unit| valid_x.map_or(true, |xs| xs.contains(&unit.at.x)))
            .filter(|unit| valid_y.map_or(true, |ys| ys.contains(&unit.at.y)))
            .count()
    }

    /// Route a mobile unit from `start` to its target edge.
    ///
    /// Stand-in router: deterministic breadth-first shortest path over
    /// unblocked cells, falling back to the deepest reachable cell when
    /// the edge is walled off. The decision core only consumes the
    /// resulting cell sequence.
    pub fn path_to_edge(&self, start: Coord) -> Vec<Coord> {
        if !start.in_arena() || self.contains_stationary_unit(start) {
            return Vec::new();
        }
        let targets: HashSet<Coord> = Edge::target_for(start).cells().into_iter().collect();

        let mut parents: HashMap<Coord, Coord> = HashMap::new();
        let mut queue = VecDeque::new();
        parents.insert(start, start);
        queue.push_back(start);

        let mut deepest = start;
        while let Some(cell) = queue.pop_front() {
            if targets.contains(&cell) {
                return rebuild_path(&parents, start, cell);
            }
            if (cell.y, -cell.x) > (deepest.y, -deepest.x) {
                deepest = cell;
            }
            for next in cell.neighbors() {
                if next.in_arena()
                    && !self.contains_stationary_unit(next)
                    && !parents.contains_key(&next)
                {
                    parents.insert(next, cell);
                    queue.push_back(next);
                }
            }
        }
        rebuild_path(&parents, start, deepest)
    }

    /// Queue a placement if the engine would accept it; returns how many
    /// of `count` were actually queued. Never errors: an occupied cell,
    /// an out-of-bounds or wrong-side location, or an empty purse all
    /// absorb the request silently.
    pub fn attempt_spawn(&mut self, class: UnitClass, at: Coord, count: u32) -> u32 {
        let mut placed = 0;
        for _ in 0..count {
            if !self.can_spawn(class, at) {
                break;
            }
            if class.is_stationary() {
                self.cores_remaining -= self.roster.cost(class);
                self.occupied.insert(at);
                self.build_queue.push((class, at));
            } else {
                self.bits_remaining -= self.roster.cost(class);
                self.deploy_queue.push((class, at));
            }
            placed += 1;
        }
        placed
    }

    fn can_spawn(&self, class: UnitClass, at: Coord) -> bool {
        if !at.on_friendly_side() || self.contains_stationary_unit(at) {
            return false;
        }
        if class.is_stationary() {
            self.cores_remaining >= self.roster.cost(class)
        } else {
            at.on_friendly_edge() && self.bits_remaining >= self.roster.cost(class)
        }
    }

    pub fn queued_builds(&self) -> &[(UnitClass, Coord)] {
        &self.build_queue
    }

    pub fn queued_deploys(&self) -> &[(UnitClass, Coord)] {
        &self.deploy_queue
    }

    /// The two submission frames: stationary placements, then mobile
    /// deployments, each `[[shorthand, x, y], ...]`.
    pub fn submission_lines(&self) -> (String, String) {
        (
            encode_placements(self.roster, &self.build_queue),
            encode_placements(self.roster, &self.deploy_queue),
        )
    }
}

fn parse_stats(raw: &[f64], label: &str) -> Result<PlayerStats, EngineError> {
    if raw.len() < 3 {
        return Err(EngineError::MalformedSnapshot(format!(
            "{label} needs [health, cores, bits], got {} fields",
            raw.len()
        )));
    }
    Ok(PlayerStats {
        health: raw[0],
        cores: raw[1],
        bits: raw[2],
    })
}

fn parse_units(
    raw: &[Vec<Vec<Value>>],
    owner: Owner,
    out: &mut Vec<PlacedUnit>,
) -> Result<(), EngineError> {
    for (index, group) in raw.iter().enumerate() {
        // Trailing groups (pending removals) have no archetype.
        let Some(class) = UnitClass::from_index(index) else {
            continue;
        };
        for entry in group {
            let x = number_at(entry, 0, "unit x")?;
            let y = number_at(entry, 1, "unit y")?;
            let stability = entry.get(2).and_then(Value::as_f64).unwrap_or(0.0);
            out.push(PlacedUnit {
                class,
                at: c(x as i32, y as i32),
                owner,
                stability,
            });
        }
    }
    Ok(())
}

fn parse_breaches(raw: &[Vec<Value>]) -> Result<Vec<BreachReport>, EngineError> {
    let mut out = Vec::with_capacity(raw.len());
    for entry in raw {
        let location = entry
            .first()
            .and_then(Value::as_array)
            .filter(|pair| pair.len() >= 2)
            .ok_or_else(|| {
                EngineError::MalformedSnapshot("breach event missing location".to_string())
            })?;
        let x = location[0].as_f64().ok_or_else(|| {
            EngineError::MalformedSnapshot("breach x is not a number".to_string())
        })?;
        let y = location[1].as_f64().ok_or_else(|| {
            EngineError::MalformedSnapshot("breach y is not a number".to_string())
        })?;
        // Owner token: 1 = the reporting player's own unit, 2 = opponent.
        let owner = entry.get(4).and_then(Value::as_f64).unwrap_or(0.0);
        out.push(BreachReport {
            location: c(x as i32, y as i32),
            by_us: owner == 1.0,
        });
    }
    Ok(out)
}

fn number_at(entry: &[Value], index: usize, label: &str) -> Result<f64, EngineError> {
    entry
        .get(index)
        .and_then(Value::as_f64)
        .ok_or_else(|| EngineError::MalformedSnapshot(format!("{label} is not a number")))
}

fn rebuild_path(parents: &HashMap<Coord, Coord>, start: Coord, end: Coord) -> Vec<Coord> {
    let mut path = vec![end];
    let mut cursor = end;
    while cursor != start {
        cursor = parents[&cursor];
        path.push(cursor);
    }
    path.reverse();
    path
}

fn encode_placements(roster: &UnitRoster, queue: &[(UnitClass, Coord)]) -> String {
    let frames: Vec<Value> = queue
        .iter()
        .map(|(class, at)| {
            serde_json::json!([roster.shorthand(*class), at.x, at.y])
        })
        .collect();
    Value::Array(frames).to_string()
}
