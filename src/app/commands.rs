//! Inbound commands to the application service.
//!
//! These represent actions requested by the outside world (operator panel,
//! test harness) that the [`ControllerService`](super::service::ControllerService)
//! interprets and acts upon.

use crate::config::ControllerConfig;
use crate::sensors::SensorVector;

/// Commands that external adapters can send into the application core.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Run one cycle on already-thresholded alarms, bypassing classification.
    Evaluate(SensorVector),

    /// Hot-reload thresholds.  Rejected if validation fails.
    UpdateConfig(ControllerConfig),

    /// Force every output off without evaluating.
    AllOff,
}
