//! Traits for the board facilities the blocks are built on.
//!
//! Digital pins and delays go through `embedded-hal` directly; the traits
//! here cover the on-board sensors and the display, which embedded-hal 0.2
//! has no model for. Production code implements them on top of the board
//! support crate, tests use scripted in-memory fakes.

/// Ambient light sensor.
pub trait LightSensor {
    /// Instantaneous brightness, 0 (dark) to 255 (bright).
    fn light_level(&mut self) -> u8;
}

/// On-board thermometer.
pub trait Thermometer {
    /// Temperature in degrees Celsius.
    fn temperature(&mut self) -> i32;
}

/// On-board accelerometer.
pub trait Accelerometer {
    /// Magnitude of the current acceleration vector, in milli-g.
    fn strength(&mut self) -> u32;
}

/// A single analog input channel with an 8-bit reading.
pub trait AnalogSource {
    type Error;

    /// Read the raw converter value, 0 to 255.
    fn read(&mut self) -> nb::Result<u8, Self::Error>;
}

/// The board display, reduced to the one call the blocks use.
pub trait BarGraph {
    /// Plot `value` as a bar graph scaled against `high`.
    fn plot_bar_graph(&mut self, value: u32, high: u32);
}
