//! End-to-end flows: raw readings → thresholds → encoder → outputs.

use crate::mock_hw::{MockHardware, RecordingSink};

use greenhouse::adapters::gpio::GpioActuatorBank;
use greenhouse::adapters::log_sink::LogEventSink;
use greenhouse::adapters::scripted::ScriptedScenarios;
use greenhouse::app::events::AppEvent;
use greenhouse::app::service::ControllerService;
use greenhouse::config::ControllerConfig;
use greenhouse::error::{Error, SensorError};
use greenhouse::fsm::SystemState;
use greenhouse::fsm::actuators::Actuator;
use greenhouse::sensors::Sensor;

fn service() -> ControllerService {
    ControllerService::new(ControllerConfig::default()).unwrap()
}

#[test]
fn presets_walk_through_every_state() {
    let mut app = service();
    let mut source = ScriptedScenarios::presets();
    let mut hw = MockHardware::new();
    let mut sink = RecordingSink::new();

    let mut states = Vec::new();
    while let Some(d) = app.tick(&mut source, &mut hw, &mut sink).unwrap() {
        states.push(d.state);
        assert!(hw.energised().len() <= 1);
        assert_eq!(hw.energised().first().copied(), d.state.actuator());
    }
    assert_eq!(states, SystemState::ALL.to_vec());
    assert_eq!(sink.count(|e| matches!(e, AppEvent::Shutdown { .. })), 1);
}

#[test]
fn exhausted_source_yields_none() {
    let mut app = service();
    let mut source = ScriptedScenarios::new(Vec::new());
    let mut hw = MockHardware::new();
    let mut sink = RecordingSink::new();

    assert_eq!(app.tick(&mut source, &mut hw, &mut sink).unwrap(), None);
    assert_eq!(app.cycle_count(), 0);
}

#[test]
fn json_fixture_with_bad_reading_is_skipped_by_run() {
    let json = r#"[
        {"nutrient_v": 3.5, "water_adc": 400.0, "temperature_c": 28.0,
         "ndvi": 0.8, "ec_ds_per_m": 6.0, "gas_ppm": 5.0},
        {"nutrient_v": 4.0, "water_adc": 400.0, "temperature_c": 1e39,
         "ndvi": 0.8, "ec_ds_per_m": 6.0, "gas_ppm": 5.0},
        {"nutrient_v": 4.0, "water_adc": 700.0, "temperature_c": 31.0,
         "ndvi": 0.8, "ec_ds_per_m": 6.0, "gas_ppm": 5.0}
    ]"#;
    let mut source = ScriptedScenarios::from_json(json).unwrap();
    let mut app = service();
    let mut hw = MockHardware::new();
    let mut sink = RecordingSink::new();

    let evaluated = app.run_to_end(&mut source, &mut hw, &mut sink).unwrap();
    assert_eq!(evaluated, 2);
    assert_eq!(app.state(), SystemState::Temperature);
    assert_eq!(hw.energised(), vec![Actuator::Fan]);
    assert!(sink.events.contains(&AppEvent::ReadingRejected(
        SensorError::NonFinite(Sensor::Temperature)
    )));
}

#[test]
fn rejected_reading_forces_outputs_off() {
    let json = r#"[
        {"nutrient_v": 4.0, "water_adc": 400.0, "temperature_c": 28.0,
         "ndvi": 0.8, "ec_ds_per_m": 6.0, "gas_ppm": 20.0},
        {"nutrient_v": 4.0, "water_adc": 400.0, "temperature_c": 28.0,
         "ndvi": 0.8, "ec_ds_per_m": 6.0, "gas_ppm": -1e39}
    ]"#;
    let mut source = ScriptedScenarios::from_json(json).unwrap();
    let mut app = service();
    let mut hw = MockHardware::new();
    let mut sink = RecordingSink::new();

    app.tick(&mut source, &mut hw, &mut sink).unwrap();
    assert_eq!(hw.energised(), vec![Actuator::Mcp]);

    let err = app.tick(&mut source, &mut hw, &mut sink).unwrap_err();
    assert_eq!(err, Error::Sensor(SensorError::NonFinite(Sensor::Gas)));
    assert!(hw.energised().is_empty());
}

#[test]
fn raised_gas_threshold_changes_outcome() {
    let config = ControllerConfig {
        gas_max_ppm: 19.0,
        ..ControllerConfig::default()
    };
    let mut app = ControllerService::new(config).unwrap();
    let mut source = ScriptedScenarios::presets();
    let mut hw = MockHardware::new();
    let mut sink = RecordingSink::new();

    let states: Vec<_> = std::iter::from_fn(|| app.tick(&mut source, &mut hw, &mut sink).unwrap())
        .map(|d| d.state)
        .collect();
    // Scenario 6 (18 ppm) now falls to Temperature; scenario 7 (20 ppm) still shuts down.
    assert_eq!(states[6], SystemState::Temperature);
    assert_eq!(states[7], SystemState::Shutdown);
}

#[test]
fn gpio_bank_and_log_sink_run_presets() {
    use core::convert::Infallible;
    use embedded_hal::digital::{ErrorType, OutputPin};

    #[derive(Default)]
    struct Pin(bool);
    impl ErrorType for Pin {
        type Error = Infallible;
    }
    impl OutputPin for Pin {
        fn set_low(&mut self) -> Result<(), Infallible> {
            self.0 = false;
            Ok(())
        }
        fn set_high(&mut self) -> Result<(), Infallible> {
            self.0 = true;
            Ok(())
        }
    }

    let mut app = service();
    let mut source = ScriptedScenarios::presets();
    let mut bank = GpioActuatorBank::new(<[Pin; Actuator::COUNT]>::default());
    let mut sink = LogEventSink::new();

    app.start(&mut bank, &mut sink).unwrap();
    assert_eq!(app.run_to_end(&mut source, &mut bank, &mut sink).unwrap(), 8);
    // Last preset is Shutdown: every pin low.
    assert!(bank.release().iter().all(|p| !p.0));
}

#[test]
fn rejected_reading_is_reported_when_outputs_fail() {
    let json = r#"[
        {"nutrient_v": 4.0, "water_adc": 400.0, "temperature_c": 28.0,
         "ndvi": 0.8, "ec_ds_per_m": 6.0, "gas_ppm": 1e39}
    ]"#;
    let mut source = ScriptedScenarios::from_json(json).unwrap();
    let mut app = service();
    let mut hw = MockHardware::with_broken(Actuator::Valve);
    let mut sink = RecordingSink::new();

    let err = app.tick(&mut source, &mut hw, &mut sink).unwrap_err();
    assert_eq!(err, Error::Sensor(SensorError::NonFinite(Sensor::Gas)));
    assert_eq!(
        sink.events,
        vec![AppEvent::ReadingRejected(SensorError::NonFinite(Sensor::Gas))]
    );

    // The run skips the reading instead of stopping on the output fault.
    source.rewind();
    assert_eq!(app.run_to_end(&mut source, &mut hw, &mut sink).unwrap(), 0);
    assert_eq!(sink.count(|e| matches!(e, AppEvent::ReadingRejected(_))), 2);
}
