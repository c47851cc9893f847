//! Fuzz target: `fsm::evaluate`
//!
//! Treats every input byte as a sensor mask and asserts that each decision
//! drives at most one actuator, matches the state's actuator table entry,
//! and does not depend on the bytes that came before it.
//!
//! cargo fuzz run fuzz_encoder

#![no_main]

use greenhouse::fsm::{Decision, evaluate};
use greenhouse::sensors::SensorVector;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    for &mask in data {
        let sensors = SensorVector::from_bits(mask);
        let d = evaluate(sensors);

        assert!(d.actuators.count_active() <= 1, "two actuators on for {mask:#010b}");
        assert_eq!(d.actuators.active(), d.state.actuator());
        assert_eq!(d, Decision::for_state(d.state));
        assert_eq!(d.state.is_critical(), sensors.all_active());
    }

    // Replaying in reverse must give identical per-byte results.
    let forward: Vec<_> = data.iter().map(|&m| evaluate(SensorVector::from_bits(m))).collect();
    let mut backward: Vec<_> = data.iter().rev().map(|&m| evaluate(SensorVector::from_bits(m))).collect();
    backward.reverse();
    assert_eq!(forward, backward);
});
