//! Fixed-priority greenhouse state machine.
//!
//! Six alarm booleans resolve to exactly one of eight states.  Each state
//! is addressed by a 3-bit code and fires at most one actuator:
//!
//! ```text
//! ┌──────┬──────────────┬──────────────────────┐
//! │ code │ SystemState  │ actuator             │
//! ├──────┼──────────────┼──────────────────────┤
//! │ 000  │ Idle         │ —                    │
//! │ 001  │ Nutrient     │ Injector             │
//! │ 010  │ Water        │ Pump                 │
//! │ 011  │ Temperature  │ Fan                  │
//! │ 100  │ Spray        │ Sprinkler            │
//! │ 101  │ Flush        │ Valve                │
//! │ 110  │ Gas          │ Mcp (anti-ethylene)  │
//! │ 111  │ Shutdown     │ — (critical alarm)   │
//! └──────┴──────────────┴──────────────────────┘
//! ```
//!
//! The machine has no memory: every cycle is resolved from scratch by
//! [`encoder::evaluate`], which returns a fresh [`Decision`].

pub mod actuators;
pub mod encoder;

use serde::{Deserialize, Serialize};

use actuators::{Actuator, ActuatorSet};

pub use encoder::{evaluate, evaluate_flags, resolve_state};

// ---------------------------------------------------------------------------
// State identity
// ---------------------------------------------------------------------------

/// Enumeration of all system states.  The discriminant is the state code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum SystemState {
    Idle = 0b000,
    Nutrient = 0b001,
    Water = 0b010,
    Temperature = 0b011,
    Spray = 0b100,
    Flush = 0b101,
    Gas = 0b110,
    Shutdown = 0b111,
}

impl SystemState {
    /// Total number of states.
    pub const COUNT: usize = 8;

    /// Every state in code order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::Idle,
        Self::Nutrient,
        Self::Water,
        Self::Temperature,
        Self::Spray,
        Self::Flush,
        Self::Gas,
        Self::Shutdown,
    ];

    /// The 3-bit state code.
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// The code split into `(q2, q1, q0)`.
    pub const fn bits(self) -> (bool, bool, bool) {
        let c = self.code();
        (c & 0b100 != 0, c & 0b010 != 0, c & 0b001 != 0)
    }

    /// Convert a state code back to a state.  Codes above `0b111` have no
    /// state.
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Idle),
            1 => Some(Self::Nutrient),
            2 => Some(Self::Water),
            3 => Some(Self::Temperature),
            4 => Some(Self::Spray),
            5 => Some(Self::Flush),
            6 => Some(Self::Gas),
            7 => Some(Self::Shutdown),
            _ => None,
        }
    }

    /// Operator-facing state label.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Idle => "SS0_IDLE",
            Self::Nutrient => "SS1_NUTRI",
            Self::Water => "SS2_WATER",
            Self::Temperature => "SS3_TEMP",
            Self::Spray => "SS4_SPRAY",
            Self::Flush => "SS5_FLUSH",
            Self::Gas => "SS6_GAS",
            Self::Shutdown => "SS7_SHUTDOWN",
        }
    }

    /// What the controller does while in this state.
    pub const fn action(self) -> &'static str {
        match self {
            Self::Idle => "Standby (monitoring)",
            Self::Nutrient => "Injecting nutrients (Injector ON)",
            Self::Water => "Watering (Pump ON)",
            Self::Temperature => "Exhausting heat (Fan ON)",
            Self::Spray => "Spraying foliage (Sprinkler ON)",
            Self::Flush => "Flushing substrate (Valve ON)",
            Self::Gas => "Dispensing anti-ethylene (1-MCP ON)",
            Self::Shutdown => "CRITICAL FAILURE: EMERGENCY SHUTDOWN",
        }
    }

    /// The single actuator this state drives, if any.
    pub const fn actuator(self) -> Option<Actuator> {
        match self {
            Self::Idle | Self::Shutdown => None,
            Self::Nutrient => Some(Actuator::Injector),
            Self::Water => Some(Actuator::Pump),
            Self::Temperature => Some(Actuator::Fan),
            Self::Spray => Some(Actuator::Sprinkler),
            Self::Flush => Some(Actuator::Valve),
            Self::Gas => Some(Actuator::Mcp),
        }
    }

    /// Any state other than Idle.
    pub const fn is_alarm(self) -> bool {
        !matches!(self, Self::Idle)
    }

    /// Shutdown: every alarm raised at once; no actuator may fire.
    pub const fn is_critical(self) -> bool {
        matches!(self, Self::Shutdown)
    }
}

impl core::fmt::Display for SystemState {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// Decision
// ---------------------------------------------------------------------------

/// Outcome of one evaluation: the resolved state and the outputs it drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Decision {
    pub state: SystemState,
    pub actuators: ActuatorSet,
}

impl Decision {
    /// The decision implied by `state` alone.
    pub const fn for_state(state: SystemState) -> Self {
        let actuators = match state.actuator() {
            Some(a) => ActuatorSet::only(a),
            None => ActuatorSet::none(),
        };
        Self { state, actuators }
    }
}
