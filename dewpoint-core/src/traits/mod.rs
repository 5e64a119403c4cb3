//! Collaborator traits
//!
//! These traits define the interface between the poll-cycle logic
//! and hardware-specific implementations.

pub mod clock;
pub mod display;
pub mod sensor;

pub use clock::{elapsed_ms, Clock};
pub use display::{Color, Font, Rotation, StatusDisplay, TextStyle};
pub use sensor::{HumitureSensor, SensorError};
