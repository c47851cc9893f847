//! Application core: pure domain logic, zero I/O.
//!
//! This module wires the stateless priority encoder into a control cycle:
//! read raw measurements, classify them, resolve a state, drive the
//! actuators, report.  All interaction with the outside world happens
//! through **port traits** defined in [`ports`], keeping this layer fully
//! testable without real peripherals.

pub mod commands;
pub mod events;
pub mod ports;
pub mod service;
