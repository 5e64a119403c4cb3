//! Configuration types
//!
//! Compile-time configuration: poll timing, render mode, screen layout
//! and board wiring.

pub mod hardware;
pub mod layout;
pub mod types;

pub use hardware::*;
pub use layout::*;
pub use types::*;
