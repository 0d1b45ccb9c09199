//! Match-start configuration.
//!
//! The engine sends one config document per match mapping the six unit
//! archetypes to their shorthand tokens and stats. It is resolved once
//! into a [`UnitRoster`] held by the agent and passed by reference to
//! every component; nothing in the crate reads archetype data from
//! global state.

use crate::engine::EngineError;
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UnitClass {
    Filter,
    Encryptor,
    Destructor,
    Ping,
    Emp,
    Scrambler,
}

impl UnitClass {
    /// Config order: the engine lists archetypes in this fixed sequence.
    pub const ALL: [UnitClass; 6] = [
        UnitClass::Filter,
        UnitClass::Encryptor,
        UnitClass::Destructor,
        UnitClass::Ping,
        UnitClass::Emp,
        UnitClass::Scrambler,
    ];

    pub const STATIONARY: [UnitClass; 3] =
        [UnitClass::Filter, UnitClass::Encryptor, UnitClass::Destructor];

    pub fn is_stationary(self) -> bool {
        matches!(
            self,
            UnitClass::Filter | UnitClass::Encryptor | UnitClass::Destructor
        )
    }

    pub fn index(self) -> usize {
        match self {
            UnitClass::Filter => 0,
            UnitClass::Encryptor => 1,
            UnitClass::Destructor => 2,
            UnitClass::Ping => 3,
            UnitClass::Emp => 4,
            UnitClass::Scrambler => 5,
        }
    }

    pub fn from_index(index: usize) -> Option<UnitClass> {
        Self::ALL.get(index).copied()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            UnitClass::Filter => "filter",
            UnitClass::Encryptor => "encryptor",
            UnitClass::Destructor => "destructor",
            UnitClass::Ping => "ping",
            UnitClass::Emp => "emp",
            UnitClass::Scrambler => "scrambler",
        }
    }

    pub fn role(self) -> &'static str {
        match self {
            UnitClass::Filter => "stationary blocker",
            UnitClass::Encryptor => "stationary shield",
            UnitClass::Destructor => "stationary attacker",
            UnitClass::Ping => "mobile fast attacker",
            UnitClass::Emp => "mobile heavy attacker",
            UnitClass::Scrambler => "mobile harasser",
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawConfig {
    #[serde(rename = "unitInformation")]
    unit_information: Vec<RawUnitInfo>,
    #[serde(default)]
    resources: RawResources,
}

#[derive(Debug, Deserialize)]
struct RawUnitInfo {
    shorthand: String,
    cost: f64,
    #[serde(default)]
    damage: f64,
    #[serde(default)]
    range: f64,
}

#[derive(Debug, Deserialize)]
struct RawResources {
    #[serde(rename = "startingHP", default = "default_starting_hp")]
    starting_hp: f64,
}

impl Default for RawResources {
    fn default() -> Self {
        Self {
            starting_hp: default_starting_hp(),
        }
    }
}

fn default_starting_hp() -> f64 {
    30.0
}

#[derive(Clone, Debug)]
pub struct UnitAttributes {
    pub shorthand: String,
    pub cost: f64,
    pub damage: f64,
    pub range: f64,
}

/// The six archetypes resolved for this match. Immutable once built.
#[derive(Clone, Debug)]
pub struct UnitRoster {
    units: Vec<UnitAttributes>,
    starting_health: f64,
}

impl UnitRoster {
    pub fn from_config_str(raw: &str) -> Result<Self, EngineError> {
        let config: RawConfig = serde_json::from_str(raw)
            .map_err(|err| EngineError::MalformedConfig(err.to_string()))?;
        if config.unit_information.len() < UnitClass::ALL.len() {
            return Err(EngineError::MalformedConfig(format!(
                "expected {} unit archetypes, got {}",
                UnitClass::ALL.len(),
                config.unit_information.len()
            )));
        }
        let units = config
            .unit_information
            .into_iter()
            .take(UnitClass::ALL.len())
            .map(|info| UnitAttributes {
                shorthand: info.shorthand,
                cost: info.cost,
                damage: info.damage,
                range: info.range,
            })
            .collect();
        Ok(Self {
            units,
            starting_health: config.resources.starting_hp,
        })
    }

    pub fn from_config_file(path: &Path) -> Result<Self, EngineError> {
        let raw = fs::read_to_string(path)?;
        Self::from_config_str(&raw)
    }

    pub fn attrs(&self, class: UnitClass) -> &UnitAttributes {
        &self.units[class.index()]
    }

    pub fn cost(&self, class: UnitClass) -> f64 {
        self.attrs(class).cost
    }

    pub fn shorthand(&self, class: UnitClass) -> &str {
        &self.attrs(class).shorthand
    }

    pub fn class_for(&self, shorthand: &str) -> Option<UnitClass> {
        UnitClass::ALL
            .into_iter()
            .find(|class| self.attrs(*class).shorthand == shorthand)
    }

    pub fn starting_health(&self) -> f64 {
        self.starting_health
    }

    pub fn cheapest_stationary(&self) -> UnitClass {
        let mut best = UnitClass::Filter;
        for class in UnitClass::STATIONARY {
            if self.cost(class) < self.cost(best) {
                best = class;
            }
        }
        best
    }
}
