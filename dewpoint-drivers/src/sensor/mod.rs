//! Temperature/humidity sensor drivers

pub mod dht;

pub use dht::{Dht, DhtError, DhtModel, Measurement};
