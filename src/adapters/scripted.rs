//! Scripted scenario source.
//!
//! Replays a fixed list of raw readings, one per cycle.  [`presets`]
//! reproduces the eight canonical field scenarios used for commissioning;
//! [`from_json`] loads any list of readings from a fixture file.
//!
//! [`presets`]: ScriptedScenarios::presets
//! [`from_json`]: ScriptedScenarios::from_json

use anyhow::{Context, Result, ensure};

use crate::app::ports::ScenarioSource;
use crate::sensors::thresholds::RawReadings;

/// Canonical commissioning scenarios, in order:
///
/// 0. baseline
/// 1. nutrient low
/// 2. water alarm
/// 3. overheating with a water alarm
/// 4. poor NDVI with overheating
/// 5. conductivity alarm
/// 6. ethylene with low nutrient and overheating
/// 7. every alarm at once
pub const PRESETS: [RawReadings; 8] = {
    let base = RawReadings::nominal();
    [
        base,
        RawReadings {
            nutrient_v: 3.6,
            ..base
        },
        RawReadings {
            water_adc: 800.0,
            ..base
        },
        RawReadings {
            temperature_c: 35.0,
            water_adc: 900.0,
            ..base
        },
        RawReadings {
            ndvi: 0.2,
            temperature_c: 33.0,
            ..base
        },
        RawReadings {
            ec_ds_per_m: 2.0,
            ..base
        },
        RawReadings {
            gas_ppm: 18.0,
            nutrient_v: 3.6,
            temperature_c: 38.0,
            ..base
        },
        RawReadings {
            nutrient_v: 3.6,
            water_adc: 900.0,
            temperature_c: 45.0,
            ndvi: 0.1,
            ec_ds_per_m: 2.5,
            gas_ppm: 20.0,
        },
    ]
};

/// Replays readings in order, then reports exhaustion.
#[derive(Debug, Clone)]
pub struct ScriptedScenarios {
    readings: Vec<RawReadings>,
    cursor: usize,
}

impl ScriptedScenarios {
    pub fn new(readings: Vec<RawReadings>) -> Self {
        Self {
            readings,
            cursor: 0,
        }
    }

    /// The eight commissioning scenarios, once each.
    pub fn presets() -> Self {
        Self::new(PRESETS.to_vec())
    }

    /// Parse a JSON array of readings.
    pub fn from_json(json: &str) -> Result<Self> {
        let readings: Vec<RawReadings> =
            serde_json::from_str(json).context("scenario fixture is not a list of readings")?;
        ensure!(!readings.is_empty(), "scenario fixture is empty");
        Ok(Self::new(readings))
    }

    /// Readings not yet replayed.
    pub fn remaining(&self) -> usize {
        self.readings.len() - self.cursor
    }

    /// Start again from the first reading.
    pub fn rewind(&mut self) {
        self.cursor = 0;
    }
}

impl ScenarioSource for ScriptedScenarios {
    fn next_readings(&mut self) -> Option<RawReadings> {
        let next = self.readings.get(self.cursor).copied()?;
        self.cursor += 1;
        Some(next)
    }
}
