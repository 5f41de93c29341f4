//! Threshold comparisons over the remaining on-board sensors.

use crate::board::{Accelerometer, Thermometer};

/// Whether the board temperature is above `threshold` degrees Celsius.
pub fn is_hotter_than<T: Thermometer>(sensor: &mut T, threshold: i32) -> bool {
    sensor.temperature() > threshold
}

/// Whether the board temperature is below `threshold` degrees Celsius.
pub fn is_colder_than<T: Thermometer>(sensor: &mut T, threshold: i32) -> bool {
    sensor.temperature() < threshold
}

/// Whether the board is being shaken harder than `threshold` milli-g.
pub fn is_shaken_harder_than<A: Accelerometer>(sensor: &mut A, threshold: u32) -> bool {
    sensor.strength() > threshold
}
