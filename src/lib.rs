//! Greenhouse environment controller library.
//!
//! Six sensor alarms resolve, through a fixed-priority override cascade,
//! to one of eight system states; each state drives at most one actuator.
//! The decision core ([`fsm`]) is a pure function.  Everything around it
//! (threshold classification, the control-cycle service, adapters) exists
//! to feed it inputs and carry its outputs.

#![deny(unused_must_use)]

pub mod adapters;
pub mod app;
pub mod config;
pub mod error;
pub mod fsm;
pub mod sensors;

pub use fsm::actuators::{Actuator, ActuatorSet};
pub use fsm::{Decision, SystemState, evaluate};
pub use sensors::{Sensor, SensorVector};
