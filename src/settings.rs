//! Simulation settings
//!
//! Persisted as a JSON document next to the level schemas.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::SIM_DT;
use crate::error::SimError;
use crate::sim::{ActorClass, ActorRegistry, LevelParser, default_symbols};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Seed for coin spring phases (random when unset)
    pub seed: Option<u64>,
    /// Symbol dictionary used when parsing plans
    pub symbols: BTreeMap<char, ActorClass>,
    /// Harness tick length in seconds
    pub step: f32,
    /// Harness gives up on a level after this many ticks
    pub max_ticks: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: None,
            symbols: default_symbols(),
            step: SIM_DT,
            max_ticks: 60 * 60,
        }
    }
}

impl Settings {
    /// Load settings from a JSON file. A missing file yields the defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SimError> {
        let path = path.as_ref();
        if !path.exists() {
            log::info!("No settings at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    pub fn from_json(json: &str) -> Result<Self, SimError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reject values the harness cannot run with
    pub fn validate(&self) -> Result<(), SimError> {
        if !self.step.is_finite() || self.step <= 0.0 {
            return Err(SimError::InvalidSetting {
                name: "step",
                reason: format!("must be a positive number of seconds, got {}", self.step),
            });
        }
        Ok(())
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), SimError> {
        self.validate()?;
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path.as_ref(), json)?;
        log::info!("Settings saved");
        Ok(())
    }

    pub fn registry(&self) -> ActorRegistry {
        ActorRegistry::from_classes(&self.symbols, self.seed)
    }

    pub fn parser(&self) -> LevelParser {
        LevelParser::new(self.registry())
    }
}
