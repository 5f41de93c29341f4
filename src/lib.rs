//! Sensor and actuator building blocks for an educational automatic light
//! switch: hysteresis-based dark/bright classification, median-filtered
//! analog sampling, and thin wrappers around the remaining board blocks
//! (switch output, motion input, charge readout, temperature and shake
//! comparisons).
//!
//! Hardware access is abstracted behind `embedded-hal` 0.2 traits and the
//! board traits in [`board`], so the logic runs unchanged on any board
//! support crate and under the host test suite.
#![cfg_attr(not(test), no_std)]

pub mod ambient_light;
pub mod board;
pub mod charge;
pub mod errors;
pub mod sampling;
pub mod sensors;
pub mod switch;

pub use ambient_light::{AmbientLight, Polarity, Thresholds};
pub use charge::ChargeMonitor;
pub use errors::Error;
pub use switch::{MotionSensor, Switch};

#[cfg(test)]
mod testutil;
