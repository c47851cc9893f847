//! Raw measurement → alarm boolean classification.
//!
//! Each sensor reports one physical quantity.  The comparison rules mirror
//! the field installation:
//!
//! | Sensor | Alarm when                           |
//! |--------|--------------------------------------|
//! | S1     | voltage `<` nutrient minimum         |
//! | S2     | ADC strictly inside the water window |
//! | S3     | temperature `>` maximum              |
//! | S4     | NDVI `<` minimum                     |
//! | S5     | EC inside the window (inclusive)     |
//! | S6     | gas `>=` maximum                     |
//!
//! A non-finite reading is rejected instead of being folded into a `false`.

use serde::{Deserialize, Serialize};

use super::{Sensor, SensorVector};
use crate::config::ControllerConfig;
use crate::error::SensorError;

/// One raw measurement per sensor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RawReadings {
    /// S1 nutrient probe output (V).
    pub nutrient_v: f32,
    /// S2 soil moisture ADC count.
    pub water_adc: f32,
    /// S3 air temperature (°C).
    pub temperature_c: f32,
    /// S4 normalised difference vegetation index.
    pub ndvi: f32,
    /// S5 electrical conductivity (dS/m).
    pub ec_ds_per_m: f32,
    /// S6 ethylene concentration (ppm).
    pub gas_ppm: f32,
}

impl RawReadings {
    /// Readings of a healthy greenhouse: every value well clear of its alarm.
    pub const fn nominal() -> Self {
        Self {
            nutrient_v: 4.0,
            water_adc: 400.0,
            temperature_c: 28.0,
            ndvi: 0.8,
            ec_ds_per_m: 6.0,
            gas_ppm: 5.0,
        }
    }

    /// The raw value behind `sensor`.
    pub const fn value(&self, sensor: Sensor) -> f32 {
        match sensor {
            Sensor::Nutrient => self.nutrient_v,
            Sensor::Water => self.water_adc,
            Sensor::Temperature => self.temperature_c,
            Sensor::Vegetation => self.ndvi,
            Sensor::Conductivity => self.ec_ds_per_m,
            Sensor::Gas => self.gas_ppm,
        }
    }
}

impl Default for RawReadings {
    fn default() -> Self {
        Self::nominal()
    }
}

/// Threshold every reading into an alarm flag.
pub fn classify(
    config: &ControllerConfig,
    readings: &RawReadings,
) -> Result<SensorVector, SensorError> {
    for sensor in Sensor::ALL {
        if !readings.value(sensor).is_finite() {
            return Err(SensorError::NonFinite(sensor));
        }
    }

    Ok(SensorVector {
        nutrient: readings.nutrient_v < config.nutrient_min_v,
        water: config.water_alarm_min_adc < readings.water_adc
            && readings.water_adc < config.water_alarm_max_adc,
        temperature: readings.temperature_c > config.temperature_max_c,
        vegetation: readings.ndvi < config.ndvi_min,
        conductivity: (config.ec_alarm_min_ds_per_m..=config.ec_alarm_max_ds_per_m)
            .contains(&readings.ec_ds_per_m),
        gas: readings.gas_ppm >= config.gas_max_ppm,
    })
}
