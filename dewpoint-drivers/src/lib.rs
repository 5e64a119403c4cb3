//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in dewpoint-core:
//!
//! - Temperature/humidity sensors (DHT11, DHT22 single-wire)
//! - Text console over any `embedded-graphics` RGB565 draw target

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod display;
pub mod sensor;
