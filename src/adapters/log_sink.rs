//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured application events to
//! the `log` facade.  Whatever logger the host installs decides where the
//! lines end up.

use log::{info, warn};

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;
use crate::sensors::Sensor;

/// Adapter that logs every [`AppEvent`] as a single line.
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LogEventSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Started => {
                info!("START | monitoring {} sensors", Sensor::COUNT);
            }
            AppEvent::Cycle(r) => {
                let active = r
                    .actuators
                    .active()
                    .map_or("none", |a| a.label());
                info!(
                    "CYCLE | #{} | sensors=0b{:06b} | state={} | actuator={} | {}",
                    r.cycle,
                    r.sensors.bits(),
                    r.state,
                    active,
                    r.state.action(),
                );
            }
            AppEvent::StateChanged { from, to } => {
                info!("STATE | {} -> {}", from, to);
            }
            AppEvent::Shutdown { cycle } => {
                warn!("SHUTDOWN | cycle #{} | all alarms raised, outputs off", cycle);
            }
            AppEvent::ReadingRejected(e) => {
                warn!("REJECT | {}", e);
            }
            AppEvent::ConfigUpdated => {
                info!("CONFIG | thresholds updated");
            }
        }
    }
}
