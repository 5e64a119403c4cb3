//! Board-agnostic core logic for the Dewpoint status display
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Collaborator traits (humidity/temperature sensor, text display, clock)
//! - Tagged sensor readings and change detection
//! - Poll-cycle state machine (sample, render, idle)
//! - Render strategies (full and partial repaint) and value formatting
//! - Compile-time configuration

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod controller;
pub mod reading;
pub mod render;
pub mod state;
pub mod traits;

#[cfg(test)]
mod testing;

pub use controller::{ControllerState, PollCycleController};
pub use reading::Reading;
pub use state::{Event, Phase};
