//! Port traits: the hexagonal boundary between domain logic and the outside world.
//!
//! ```text
//!   ScenarioSource ──▶ ControllerService ──▶ ActuatorPort
//!                              │
//!                              └──────────▶ EventSink
//! ```
//!
//! Driven adapters (scenario fixtures, GPIO banks, log sinks) implement
//! these traits.  The [`ControllerService`](super::service::ControllerService)
//! consumes them via generics, so the domain core never touches hardware
//! directly.

use crate::error::Result;
use crate::fsm::actuators::{Actuator, ActuatorSet};
use crate::sensors::thresholds::RawReadings;

// ───────────────────────────────────────────────────────────────
// Scenario port (driven adapter: field/fixture → domain)
// ───────────────────────────────────────────────────────────────

/// Supplies one set of raw measurements per evaluation cycle.
pub trait ScenarioSource {
    /// The next readings, or `None` when the source is exhausted.
    fn next_readings(&mut self) -> Option<RawReadings>;
}

// ───────────────────────────────────────────────────────────────
// Actuator port (driven adapter: domain → hardware)
// ───────────────────────────────────────────────────────────────

/// Write-side port: the domain calls this to command actuators.
pub trait ActuatorPort {
    /// Drive a single output.
    fn set(&mut self, actuator: Actuator, on: bool) -> Result<()>;

    /// Write all six outputs.  Every output is written, including the ones
    /// that are off, so nothing carries over from an earlier cycle.
    ///
    /// Outputs going off are written before the output going on, so two
    /// outputs are never energised together.  If any off-write fails the
    /// remaining offs are still attempted, nothing is switched on, and the
    /// first error is returned.
    fn apply(&mut self, outputs: &ActuatorSet) -> Result<()> {
        let mut first_err = None;
        for (actuator, _) in outputs.iter().filter(|&(_, on)| !on) {
            if let Err(e) = self.set(actuator, false) {
                first_err.get_or_insert(e);
            }
        }
        if let Some(e) = first_err {
            return Err(e);
        }
        for (actuator, _) in outputs.iter().filter(|&(_, on)| on) {
            self.set(actuator, true)?;
        }
        Ok(())
    }

    /// Kill every output.  A failing output does not stop the others from
    /// being written; the first failure is returned.
    fn all_off(&mut self) -> Result<()> {
        self.apply(&ActuatorSet::none())
    }
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging / display)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`AppEvent`](super::events::AppEvent)s
/// through this port.  Adapters decide where they go (log, display,
/// telemetry).
pub trait EventSink {
    fn emit(&mut self, event: &super::events::AppEvent);
}
