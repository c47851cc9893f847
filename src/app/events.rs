//! Outbound application events.
//!
//! The [`ControllerService`](super::service::ControllerService) emits these
//! through the [`EventSink`](super::ports::EventSink) port.  Adapters on the
//! other side decide what to do with them.

use serde::Serialize;

use crate::error::SensorError;
use crate::fsm::SystemState;
use crate::fsm::actuators::ActuatorSet;
use crate::sensors::SensorVector;

/// Structured events emitted by the application core.
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    /// The service has started.
    Started,

    /// Periodic per-cycle report.
    Cycle(CycleReport),

    /// The resolved state differs from the previous cycle's.
    StateChanged { from: SystemState, to: SystemState },

    /// The cycle resolved to Shutdown; all outputs were forced off.
    Shutdown { cycle: u64 },

    /// A raw reading could not be classified; all outputs were forced off.
    ReadingRejected(SensorError),

    /// A new configuration was accepted.
    ConfigUpdated,
}

/// Everything a display needs about one evaluation cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CycleReport {
    pub cycle: u64,
    pub sensors: SensorVector,
    pub state: SystemState,
    pub actuators: ActuatorSet,
}
