//! GPIO actuator bank.
//!
//! Each actuator is a single relay or MOSFET gate driven by one digital
//! output.  The bank holds six `embedded-hal` output pins in
//! [`Actuator::ALL`] order and implements [`ActuatorPort`] on top of them,
//! so any HAL (or a test double) can sit underneath.
//!
//! Active-high: `on` drives the pin high.

use embedded_hal::digital::{OutputPin, PinState};
use log::debug;

use crate::app::ports::ActuatorPort;
use crate::error::{ActuatorError, Result};
use crate::fsm::actuators::Actuator;

/// Six output pins, one per actuator.
pub struct GpioActuatorBank<P> {
    pins: [P; Actuator::COUNT],
}

impl<P: OutputPin> GpioActuatorBank<P> {
    /// `pins` must be ordered Injector, Pump, Fan, Sprinkler, Valve, Mcp.
    pub fn new(pins: [P; Actuator::COUNT]) -> Self {
        Self { pins }
    }

    /// Borrow the pin behind `actuator`.
    pub fn pin(&self, actuator: Actuator) -> &P {
        &self.pins[actuator.index()]
    }

    /// Give the pins back.
    pub fn release(self) -> [P; Actuator::COUNT] {
        self.pins
    }
}

impl<P: OutputPin> ActuatorPort for GpioActuatorBank<P> {
    fn set(&mut self, actuator: Actuator, on: bool) -> Result<()> {
        self.pins[actuator.index()]
            .set_state(PinState::from(on))
            .map_err(|_| ActuatorError::GpioWriteFailed(actuator))?;
        debug!("GPIO {} -> {}", actuator.label(), if on { "ON" } else { "OFF" });
        Ok(())
    }
}
