//! Mock adapters for integration tests.
//!
//! Records every actuator write and every emitted event so tests can assert
//! on the full history without touching real GPIO.

use greenhouse::app::events::AppEvent;
use greenhouse::app::ports::{ActuatorPort, EventSink};
use greenhouse::error::{ActuatorError, Result};
use greenhouse::fsm::actuators::Actuator;

// ── Actuator call record ──────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActuatorCall {
    pub actuator: Actuator,
    pub on: bool,
}

// ── MockHardware ──────────────────────────────────────────────

pub struct MockHardware {
    pub calls: Vec<ActuatorCall>,
    /// Writes to this actuator fail.
    pub broken: Option<Actuator>,
}

#[allow(dead_code)]
impl MockHardware {
    pub fn new() -> Self {
        Self {
            calls: Vec::new(),
            broken: None,
        }
    }

    pub fn with_broken(actuator: Actuator) -> Self {
        Self {
            calls: Vec::new(),
            broken: Some(actuator),
        }
    }

    /// Latest commanded level of `actuator` (off if never written).
    pub fn is_on(&self, actuator: Actuator) -> bool {
        self.calls
            .iter()
            .rev()
            .find(|c| c.actuator == actuator)
            .is_some_and(|c| c.on)
    }

    /// Actuators currently commanded on.
    pub fn energised(&self) -> Vec<Actuator> {
        Actuator::ALL
            .into_iter()
            .filter(|&a| self.is_on(a))
            .collect()
    }
}

impl Default for MockHardware {
    fn default() -> Self {
        Self::new()
    }
}

impl ActuatorPort for MockHardware {
    fn set(&mut self, actuator: Actuator, on: bool) -> Result<()> {
        if self.broken == Some(actuator) {
            return Err(ActuatorError::GpioWriteFailed(actuator).into());
        }
        self.calls.push(ActuatorCall { actuator, on });
        Ok(())
    }
}

// ── RecordingSink ─────────────────────────────────────────────

pub struct RecordingSink {
    pub events: Vec<AppEvent>,
}

#[allow(dead_code)]
impl RecordingSink {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn count(&self, pred: impl Fn(&AppEvent) -> bool) -> usize {
        self.events.iter().filter(|e| pred(e)).count()
    }
}

impl Default for RecordingSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &AppEvent) {
        self.events.push(event.clone());
    }
}
