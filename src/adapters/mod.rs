//! Adapters: concrete implementations of the hexagonal port traits.
//!
//! | Adapter     | Implements      | Connects to                        |
//! |-------------|-----------------|------------------------------------|
//! | `gpio`      | ActuatorPort    | six `embedded-hal` output pins     |
//! | `log_sink`  | EventSink       | `log` facade                       |
//! | `scripted`  | ScenarioSource  | canned scenarios / JSON fixtures   |

pub mod gpio;
pub mod log_sink;
pub mod scripted;
