//! Application service, the hexagonal core.
//!
//! [`ControllerService`] owns the configuration and the cycle counter.
//! The state decision itself comes from the stateless priority encoder;
//! the service only remembers the previous state so it can report
//! transitions.  All I/O flows through port traits injected at call sites,
//! making the entire service testable with mock adapters.
//!
//! ```text
//!  ScenarioSource ──▶ ┌──────────────────────────────┐ ──▶ EventSink
//!                     │       ControllerService      │
//!   ActuatorPort ◀────│  classify · encode · report  │
//!                     └──────────────────────────────┘
//! ```

use log::{debug, info, warn};

use crate::config::ControllerConfig;
use crate::error::{Error, Result};
use crate::fsm::{self, Decision, SystemState};
use crate::sensors::SensorVector;
use crate::sensors::thresholds::classify;

use super::commands::AppCommand;
use super::events::{AppEvent, CycleReport};
use super::ports::{ActuatorPort, EventSink, ScenarioSource};

// ───────────────────────────────────────────────────────────────
// ControllerService
// ───────────────────────────────────────────────────────────────

/// The application service orchestrates one control cycle at a time.
pub struct ControllerService {
    config: ControllerConfig,
    cycle_count: u64,
    /// State resolved by the previous cycle (Idle before the first).
    last_state: SystemState,
    last_report: Option<CycleReport>,
}

impl ControllerService {
    /// Construct the service from a validated configuration.
    pub fn new(config: ControllerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            cycle_count: 0,
            last_state: SystemState::Idle,
            last_report: None,
        })
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Put every output in its safe state and announce readiness.
    pub fn start(&mut self, hw: &mut impl ActuatorPort, sink: &mut impl EventSink) -> Result<()> {
        hw.all_off()?;
        sink.emit(&AppEvent::Started);
        info!("ControllerService started in {}", self.last_state);
        Ok(())
    }

    // ── Per-cycle orchestration ───────────────────────────────

    /// Run one full cycle: read → classify → evaluate → actuate → report.
    ///
    /// Returns `Ok(None)` once the source is exhausted.  A reading that
    /// cannot be classified forces every output off and is returned as an
    /// error after being reported.
    pub fn tick(
        &mut self,
        source: &mut impl ScenarioSource,
        hw: &mut impl ActuatorPort,
        sink: &mut impl EventSink,
    ) -> Result<Option<Decision>> {
        let Some(readings) = source.next_readings() else {
            return Ok(None);
        };

        let sensors = match classify(&self.config, &readings) {
            Ok(sensors) => sensors,
            Err(e) => {
                warn!("Reading rejected: {e}; holding all outputs off");
                sink.emit(&AppEvent::ReadingRejected(e));
                if let Err(hw_err) = hw.all_off() {
                    warn!("Could not force outputs off after rejected reading: {hw_err}");
                }
                return Err(e.into());
            }
        };

        self.run_cycle(sensors, hw, sink).map(Some)
    }

    /// Evaluate already-thresholded alarms and drive the outputs.
    ///
    /// The resolved state is recorded and reported before any output is
    /// written, so a Shutdown is announced even when the hardware fails.
    /// A failed write is followed by a best-effort `all_off`.
    pub fn run_cycle(
        &mut self,
        sensors: SensorVector,
        hw: &mut impl ActuatorPort,
        sink: &mut impl EventSink,
    ) -> Result<Decision> {
        self.cycle_count += 1;
        let decision = fsm::evaluate(sensors);

        if decision.state != self.last_state {
            info!("State {} -> {}", self.last_state, decision.state);
            sink.emit(&AppEvent::StateChanged {
                from: self.last_state,
                to: decision.state,
            });
            self.last_state = decision.state;
        }

        // Shutdown is signalled, never actuated.
        let critical = decision.state.is_critical();
        if critical {
            warn!(
                "Cycle {}: every alarm raised, outputs held off",
                self.cycle_count
            );
            sink.emit(&AppEvent::Shutdown {
                cycle: self.cycle_count,
            });
        }

        let report = CycleReport {
            cycle: self.cycle_count,
            sensors,
            state: decision.state,
            actuators: decision.actuators,
        };
        self.last_report = Some(report);
        debug!(
            "Cycle {}: sensors=0b{:06b} state={}",
            self.cycle_count,
            sensors.bits(),
            decision.state
        );

        if self.cycle_count % u64::from(self.config.report_interval_cycles) == 0 {
            sink.emit(&AppEvent::Cycle(report));
        }

        let written = if critical {
            hw.all_off()
        } else {
            hw.apply(&decision.actuators)
        };
        if let Err(e) = written {
            warn!("Cycle {}: {e}; forcing outputs off", self.cycle_count);
            if !critical {
                if let Err(off_err) = hw.all_off() {
                    warn!("Could not force outputs off: {off_err}");
                }
            }
            return Err(e);
        }

        Ok(decision)
    }

    /// Drain `source`, returning how many cycles were evaluated.
    ///
    /// Rejected readings are reported and skipped; an actuator failure
    /// stops the run.
    pub fn run_to_end(
        &mut self,
        source: &mut impl ScenarioSource,
        hw: &mut impl ActuatorPort,
        sink: &mut impl EventSink,
    ) -> Result<u64> {
        let mut evaluated = 0;
        loop {
            match self.tick(source, hw, sink) {
                Ok(Some(_)) => evaluated += 1,
                Ok(None) => return Ok(evaluated),
                Err(Error::Sensor(_)) => {}
                Err(e) => return Err(e),
            }
        }
    }

    // ── Command handling ──────────────────────────────────────

    /// Process an external command.  Returns the decision when the command
    /// ran a cycle.
    pub fn handle_command(
        &mut self,
        cmd: AppCommand,
        hw: &mut impl ActuatorPort,
        sink: &mut impl EventSink,
    ) -> Result<Option<Decision>> {
        match cmd {
            AppCommand::Evaluate(sensors) => self.run_cycle(sensors, hw, sink).map(Some),
            AppCommand::UpdateConfig(new_config) => {
                new_config.validate()?;
                self.config = new_config;
                sink.emit(&AppEvent::ConfigUpdated);
                info!("Configuration updated at runtime");
                Ok(None)
            }
            AppCommand::AllOff => {
                hw.all_off()?;
                info!("All outputs forced off");
                Ok(None)
            }
        }
    }

    // ── Queries ───────────────────────────────────────────────

    /// State resolved by the most recent cycle.
    pub fn state(&self) -> SystemState {
        self.last_state
    }

    /// Total cycles evaluated since construction.
    pub fn cycle_count(&self) -> u64 {
        self.cycle_count
    }

    /// Report of the most recent cycle, if any ran.
    pub fn last_report(&self) -> Option<&CycleReport> {
        self.last_report.as_ref()
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }
}
