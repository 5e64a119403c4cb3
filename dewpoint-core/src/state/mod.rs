//! Poll-cycle state machine
//!
//! The machine is explicit, finite and never terminates:
//! sample, render, then idle until the interval has elapsed.

pub mod events;
pub mod machine;

pub use events::Event;
pub use machine::Phase;
