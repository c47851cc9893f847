//! Sensor catalogue and the per-cycle [`SensorVector`].
//!
//! Six independent alarm conditions feed the priority encoder.  Each one is
//! the result of comparing a raw measurement against a fixed threshold
//! (see [`thresholds`]); the encoder only ever sees the booleans.
//!
//! ```text
//!  S1 NPK ──┐
//!  S2 Water ┤
//!  S3 Temp ─┤   SensorVector   ┌──────────────────┐
//!  S4 NDVI ─┼──────────────────▶ priority encoder │──▶ SystemState
//!  S5 EC ───┤                  └──────────────────┘
//!  S6 Gas ──┘   (S6 outranks S5 … outranks S1)
//! ```

pub mod thresholds;

use serde::{Deserialize, Serialize};

use crate::fsm::SystemState;

// ---------------------------------------------------------------------------
// Sensor identity
// ---------------------------------------------------------------------------

/// One of the six alarm inputs, in ascending override priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum Sensor {
    /// S1: nutrient (NPK) deficiency.
    Nutrient = 0,
    /// S2: soil water alarm.
    Water = 1,
    /// S3: air temperature alarm.
    Temperature = 2,
    /// S4: vegetation index (NDVI) alarm.
    Vegetation = 3,
    /// S5: electrical conductivity alarm.
    Conductivity = 4,
    /// S6: ethylene gas alarm.
    Gas = 5,
}

impl Sensor {
    /// Total number of sensors.
    pub const COUNT: usize = 6;

    /// Every sensor, lowest override priority first.
    pub const ALL: [Self; Self::COUNT] = [
        Self::Nutrient,
        Self::Water,
        Self::Temperature,
        Self::Vegetation,
        Self::Conductivity,
        Self::Gas,
    ];

    /// Zero-based position (S1 = 0).
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Short display label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Nutrient => "S1 NPK",
            Self::Water => "S2 Water",
            Self::Temperature => "S3 Temp",
            Self::Vegetation => "S4 NDVI",
            Self::Conductivity => "S5 EC",
            Self::Gas => "S6 Gas",
        }
    }

    /// Unit of the raw measurement behind this alarm.
    pub const fn unit(self) -> &'static str {
        match self {
            Self::Nutrient => "V",
            Self::Water => "ADC",
            Self::Temperature => "\u{00b0}C",
            Self::Vegetation => "NDVI",
            Self::Conductivity => "dS/m",
            Self::Gas => "ppm",
        }
    }

    /// The state this sensor selects when it is the highest active alarm.
    pub const fn target_state(self) -> SystemState {
        match self {
            Self::Nutrient => SystemState::Nutrient,
            Self::Water => SystemState::Water,
            Self::Temperature => SystemState::Temperature,
            Self::Vegetation => SystemState::Spray,
            Self::Conductivity => SystemState::Flush,
            Self::Gas => SystemState::Gas,
        }
    }
}

// ---------------------------------------------------------------------------
// SensorVector
// ---------------------------------------------------------------------------

/// The six alarm booleans for a single evaluation cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SensorVector {
    /// S1: nutrient voltage below threshold.
    pub nutrient: bool,
    /// S2: water ADC inside the alarm window.
    pub water: bool,
    /// S3: temperature above threshold.
    pub temperature: bool,
    /// S4: NDVI below threshold.
    pub vegetation: bool,
    /// S5: conductivity inside the alarm window.
    pub conductivity: bool,
    /// S6: gas concentration at or above threshold.
    pub gas: bool,
}

impl SensorVector {
    /// No alarms.
    pub const fn quiet() -> Self {
        Self {
            nutrient: false,
            water: false,
            temperature: false,
            vegetation: false,
            conductivity: false,
            gas: false,
        }
    }

    /// Build from positional flags `[S1, S2, S3, S4, S5, S6]`.
    pub const fn from_array(flags: [bool; Sensor::COUNT]) -> Self {
        Self {
            nutrient: flags[0],
            water: flags[1],
            temperature: flags[2],
            vegetation: flags[3],
            conductivity: flags[4],
            gas: flags[5],
        }
    }

    /// Positional flags `[S1, S2, S3, S4, S5, S6]`.
    pub const fn to_array(self) -> [bool; Sensor::COUNT] {
        [
            self.nutrient,
            self.water,
            self.temperature,
            self.vegetation,
            self.conductivity,
            self.gas,
        ]
    }

    /// Build from a mask where bit `i` is sensor S(i+1).  Bits 6 and 7 are
    /// ignored.
    pub const fn from_bits(mask: u8) -> Self {
        Self::from_array([
            mask & 0b00_0001 != 0,
            mask & 0b00_0010 != 0,
            mask & 0b00_0100 != 0,
            mask & 0b00_1000 != 0,
            mask & 0b01_0000 != 0,
            mask & 0b10_0000 != 0,
        ])
    }

    /// Inverse of [`from_bits`](Self::from_bits).
    pub fn bits(self) -> u8 {
        self.to_array()
            .iter()
            .enumerate()
            .fold(0, |mask, (i, &on)| if on { mask | (1u8 << i) } else { mask })
    }

    /// Single-alarm vector.
    pub fn only(sensor: Sensor) -> Self {
        Self::from_bits(1u8 << sensor.index())
    }

    pub const fn is_active(&self, sensor: Sensor) -> bool {
        self.to_array()[sensor.index()]
    }

    /// True when all six alarms are raised at once.
    pub const fn all_active(&self) -> bool {
        self.nutrient
            && self.water
            && self.temperature
            && self.vegetation
            && self.conductivity
            && self.gas
    }

    pub const fn any_active(&self) -> bool {
        self.nutrient
            || self.water
            || self.temperature
            || self.vegetation
            || self.conductivity
            || self.gas
    }

    /// Active sensors, lowest priority first.
    pub fn active(&self) -> heapless::Vec<Sensor, { Sensor::COUNT }> {
        Sensor::ALL
            .into_iter()
            .filter(|&s| self.is_active(s))
            .collect()
    }
}
