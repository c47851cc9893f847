//! Fuzz target: JSON scenario fixtures through the control service
//!
//! Arbitrary text is offered to `ScriptedScenarios::from_json`.  Anything
//! that parses is replayed through a `ControllerService`; the run must
//! never panic and must never leave more than one output energised.
//!
//! cargo fuzz run fuzz_scenario_fixture

#![no_main]

use greenhouse::adapters::scripted::ScriptedScenarios;
use greenhouse::app::events::AppEvent;
use greenhouse::app::ports::{ActuatorPort, EventSink};
use greenhouse::app::service::ControllerService;
use greenhouse::config::ControllerConfig;
use greenhouse::error::Result;
use greenhouse::fsm::actuators::Actuator;
use libfuzzer_sys::fuzz_target;

struct Outputs([bool; Actuator::COUNT]);

impl ActuatorPort for Outputs {
    fn set(&mut self, actuator: Actuator, on: bool) -> Result<()> {
        self.0[actuator.index()] = on;
        Ok(())
    }
}

struct Discard;

impl EventSink for Discard {
    fn emit(&mut self, _event: &AppEvent) {}
}

fuzz_target!(|data: &[u8]| {
    let Ok(text) = core::str::from_utf8(data) else {
        return;
    };
    let Ok(mut source) = ScriptedScenarios::from_json(text) else {
        return;
    };

    let Ok(mut app) = ControllerService::new(ControllerConfig::default()) else {
        return;
    };
    let mut hw = Outputs([false; Actuator::COUNT]);
    let mut sink = Discard;

    loop {
        match app.tick(&mut source, &mut hw, &mut sink) {
            Ok(Some(_)) | Err(_) => {
                assert!(hw.0.iter().filter(|&&on| on).count() <= 1);
            }
            Ok(None) => break,
        }
    }
});
