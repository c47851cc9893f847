//! Actuator identities and the per-cycle output set.
//!
//! An [`ActuatorSet`] is built fresh for every decision.  It is never
//! patched in place, so no output can leak from one cycle into the next.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Actuator identity
// ---------------------------------------------------------------------------

/// A single-purpose output device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum Actuator {
    /// A1: fertigation injector.
    Injector = 0,
    /// A2: irrigation pump.
    Pump = 1,
    /// A3: exhaust fan.
    Fan = 2,
    /// A4: foliar sprinkler.
    Sprinkler = 3,
    /// A5: substrate flush valve.
    Valve = 4,
    /// A6: 1-MCP anti-ethylene dispenser.
    Mcp = 5,
}

impl Actuator {
    pub const COUNT: usize = 6;

    pub const ALL: [Self; Self::COUNT] = [
        Self::Injector,
        Self::Pump,
        Self::Fan,
        Self::Sprinkler,
        Self::Valve,
        Self::Mcp,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Injector => "Injector",
            Self::Pump => "Pump",
            Self::Fan => "Fan",
            Self::Sprinkler => "Sprinkler",
            Self::Valve => "Valve",
            Self::Mcp => "1-MCP",
        }
    }
}

// ---------------------------------------------------------------------------
// ActuatorSet
// ---------------------------------------------------------------------------

/// Six independent on/off outputs.
///
/// The fields are plain flags; [`ActuatorSet::only`] and
/// [`ActuatorSet::none`] are the constructors that keep at most one on, and
/// they are the only ones the encoder uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActuatorSet {
    pub injector: bool,
    pub pump: bool,
    pub fan: bool,
    pub sprinkler: bool,
    pub valve: bool,
    pub mcp: bool,
}

impl ActuatorSet {
    /// Everything off.
    pub const fn none() -> Self {
        Self {
            injector: false,
            pump: false,
            fan: false,
            sprinkler: false,
            valve: false,
            mcp: false,
        }
    }

    /// Exactly `actuator` on.
    pub const fn only(actuator: Actuator) -> Self {
        let mut set = Self::none();
        match actuator {
            Actuator::Injector => set.injector = true,
            Actuator::Pump => set.pump = true,
            Actuator::Fan => set.fan = true,
            Actuator::Sprinkler => set.sprinkler = true,
            Actuator::Valve => set.valve = true,
            Actuator::Mcp => set.mcp = true,
        }
        set
    }

    pub const fn is_on(&self, actuator: Actuator) -> bool {
        match actuator {
            Actuator::Injector => self.injector,
            Actuator::Pump => self.pump,
            Actuator::Fan => self.fan,
            Actuator::Sprinkler => self.sprinkler,
            Actuator::Valve => self.valve,
            Actuator::Mcp => self.mcp,
        }
    }

    /// Every actuator paired with its commanded level.
    pub fn iter(&self) -> impl Iterator<Item = (Actuator, bool)> + '_ {
        Actuator::ALL.into_iter().map(|a| (a, self.is_on(a)))
    }

    pub fn count_active(&self) -> usize {
        self.iter().filter(|&(_, on)| on).count()
    }

    /// The lowest-indexed actuator that is on.
    pub fn active(&self) -> Option<Actuator> {
        self.iter().find_map(|(a, on)| on.then_some(a))
    }
}
