//! Priority encoder: six alarms → one state → at most one actuator.
//!
//! Resolution is a strict override cascade.  Sensors are visited from the
//! lowest priority (S1) to the highest (S6); every active sensor replaces
//! the pending state outright, it never merges with it.  A separate final
//! check promotes the all-six-active case to [`SystemState::Shutdown`].
//!
//! ```text
//!  pending = Idle
//!  S1 ─▶ Nutrient     (001)
//!  S2 ─▶ Water        (010)   replaces anything above
//!  S3 ─▶ Temperature  (011)
//!  S4 ─▶ Spray        (100)
//!  S5 ─▶ Flush        (101)
//!  S6 ─▶ Gas          (110)
//!  S1∧S2∧S3∧S4∧S5∧S6 ─▶ Shutdown (111)   always last, always wins
//! ```
//!
//! The cascade alone would resolve the all-active vector to Gas; the
//! Shutdown promotion is an explicit extra rule, not a consequence of the
//! ordering.
//!
//! Everything here is a pure function of its input.  There is no encoder
//! instance and no shared state, so concurrent callers cannot interfere.

use super::{Decision, SystemState};
use crate::sensors::{Sensor, SensorVector};

/// Resolve the state for one cycle.
pub fn resolve_state(sensors: &SensorVector) -> SystemState {
    let cascaded = Sensor::ALL
        .into_iter()
        .fold(SystemState::Idle, |pending, sensor| {
            if sensors.is_active(sensor) {
                sensor.target_state()
            } else {
                pending
            }
        });

    if sensors.all_active() {
        SystemState::Shutdown
    } else {
        cascaded
    }
}

/// Resolve the state and derive the actuator outputs for one cycle.
pub fn evaluate(sensors: SensorVector) -> Decision {
    Decision::for_state(resolve_state(&sensors))
}

/// Positional form of [`evaluate`] taking S1..S6 directly.
pub fn evaluate_flags(s1: bool, s2: bool, s3: bool, s4: bool, s5: bool, s6: bool) -> Decision {
    evaluate(SensorVector::from_array([s1, s2, s3, s4, s5, s6]))
}
