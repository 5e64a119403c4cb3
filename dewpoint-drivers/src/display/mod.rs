//! Display drivers

pub mod console;

pub use console::{mono_font, rgb565, GraphicsConsole};
