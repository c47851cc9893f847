//! Controller configuration parameters
//!
//! Alarm thresholds for the six greenhouse sensors plus reporting cadence.
//! The priority encoder never reads this; it only shapes how raw
//! measurements become alarm booleans.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Core controller configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControllerConfig {
    // --- S1 Nutrient ---
    /// NPK probe voltage below which nutrient injection is requested (V)
    pub nutrient_min_v: f32,

    // --- S2 Water ---
    /// Lower edge of the water alarm window (ADC count, exclusive)
    pub water_alarm_min_adc: f32,
    /// Upper edge of the water alarm window (ADC count, exclusive)
    pub water_alarm_max_adc: f32,

    // --- S3 Temperature ---
    /// Air temperature above which the fan runs (Celsius)
    pub temperature_max_c: f32,

    // --- S4 Vegetation ---
    /// NDVI below which the sprinklers run
    pub ndvi_min: f32,

    // --- S5 Conductivity ---
    /// Lower edge of the EC flush window (dS/m, inclusive)
    pub ec_alarm_min_ds_per_m: f32,
    /// Upper edge of the EC flush window (dS/m, inclusive)
    pub ec_alarm_max_ds_per_m: f32,

    // --- S6 Gas ---
    /// Ethylene concentration at or above which the 1-MCP dispenser fires (ppm)
    pub gas_max_ppm: f32,

    // --- Reporting ---
    /// Emit a cycle report every N evaluation cycles
    pub report_interval_cycles: u32,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            nutrient_min_v: 3.8,

            water_alarm_min_adc: 600.0,
            water_alarm_max_adc: 1000.0,

            temperature_max_c: 30.0,

            ndvi_min: 0.3,

            ec_alarm_min_ds_per_m: 0.5,
            ec_alarm_max_ds_per_m: 3.9,

            gas_max_ppm: 14.0,

            report_interval_cycles: 1,
        }
    }
}

impl ControllerConfig {
    /// Reject values that would make classification meaningless.
    pub fn validate(&self) -> Result<()> {
        let thresholds = [
            self.nutrient_min_v,
            self.water_alarm_min_adc,
            self.water_alarm_max_adc,
            self.temperature_max_c,
            self.ndvi_min,
            self.ec_alarm_min_ds_per_m,
            self.ec_alarm_max_ds_per_m,
            self.gas_max_ppm,
        ];
        if thresholds.iter().any(|t| !t.is_finite()) {
            return Err(Error::Config("thresholds must be finite"));
        }
        if self.water_alarm_min_adc >= self.water_alarm_max_adc {
            return Err(Error::Config("water alarm window is empty"));
        }
        if self.ec_alarm_min_ds_per_m > self.ec_alarm_max_ds_per_m {
            return Err(Error::Config("conductivity alarm window is inverted"));
        }
        if self.report_interval_cycles == 0 {
            return Err(Error::Config("report interval must be non-zero"));
        }
        Ok(())
    }
}
