//! Scripted in-memory fakes shared by the unit tests.

use core::convert::Infallible;

use embedded_hal::blocking::delay::DelayMs;
use embedded_hal::digital::v2::{InputPin, OutputPin};

use crate::board::{Accelerometer, AnalogSource, BarGraph, LightSensor, Thermometer};

/// Light sensor reporting a constant level, adjustable between calls.
pub struct FakeLight {
    pub level: u8,
}

impl FakeLight {
    pub fn new(level: u8) -> Self {
        Self { level }
    }
}

impl LightSensor for FakeLight {
    fn light_level(&mut self) -> u8 {
        self.level
    }
}

/// Light sensor cycling through a fixed sequence of readings.
pub struct SequenceLight {
    values: Vec<u8>,
    pos: usize,
}

impl SequenceLight {
    pub fn new(values: &[u8]) -> Self {
        Self {
            values: values.to_vec(),
            pos: 0,
        }
    }
}

impl LightSensor for SequenceLight {
    fn light_level(&mut self) -> u8 {
        let value = self.values[self.pos % self.values.len()];
        self.pos += 1;
        value
    }
}

/// Delay that returns immediately.
pub struct NoopDelay;

impl DelayMs<u16> for NoopDelay {
    fn delay_ms(&mut self, _ms: u16) {}
}

/// Delay that records the total requested pause.
pub struct CountingDelay {
    total_ms: u32,
}

impl CountingDelay {
    pub fn new() -> Self {
        Self { total_ms: 0 }
    }

    pub fn total_ms(&self) -> u32 {
        self.total_ms
    }
}

impl DelayMs<u16> for CountingDelay {
    fn delay_ms(&mut self, ms: u16) {
        self.total_ms += u32::from(ms);
    }
}

/// Analog source replaying a fixed sequence, sticking at the last value.
pub struct FakeAdc {
    readings: Vec<u8>,
    pos: usize,
}

impl FakeAdc {
    pub fn new(readings: &[u8]) -> Self {
        Self {
            readings: readings.to_vec(),
            pos: 0,
        }
    }

    /// Number of reads performed so far.
    pub fn reads(&self) -> usize {
        self.pos
    }
}

impl AnalogSource for FakeAdc {
    type Error = Infallible;

    fn read(&mut self) -> nb::Result<u8, Self::Error> {
        let value = self.readings[self.pos.min(self.readings.len() - 1)];
        self.pos += 1;
        Ok(value)
    }
}

/// Digital pin backed by a plain bool.
pub struct FakePin {
    pub state: bool,
}

impl FakePin {
    pub fn new(state: bool) -> Self {
        Self { state }
    }
}

impl OutputPin for FakePin {
    type Error = Infallible;

    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.state = false;
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.state = true;
        Ok(())
    }
}

impl InputPin for FakePin {
    type Error = Infallible;

    fn is_high(&self) -> Result<bool, Self::Error> {
        Ok(self.state)
    }

    fn is_low(&self) -> Result<bool, Self::Error> {
        Ok(!self.state)
    }
}

/// Digital pin whose every operation fails.
pub struct BrokenPin;

impl OutputPin for BrokenPin {
    type Error = ();

    fn set_low(&mut self) -> Result<(), Self::Error> {
        Err(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        Err(())
    }
}

impl InputPin for BrokenPin {
    type Error = ();

    fn is_high(&self) -> Result<bool, Self::Error> {
        Err(())
    }

    fn is_low(&self) -> Result<bool, Self::Error> {
        Err(())
    }
}

/// Thermometer reporting a constant temperature.
pub struct FakeThermometer {
    temperature: i32,
}

impl FakeThermometer {
    pub fn new(temperature: i32) -> Self {
        Self { temperature }
    }
}

impl Thermometer for FakeThermometer {
    fn temperature(&mut self) -> i32 {
        self.temperature
    }
}

/// Accelerometer reporting a constant strength.
pub struct FakeAccelerometer {
    strength: u32,
}

impl FakeAccelerometer {
    pub fn new(strength: u32) -> Self {
        Self { strength }
    }
}

impl Accelerometer for FakeAccelerometer {
    fn strength(&mut self) -> u32 {
        self.strength
    }
}

/// Display recording every bar graph call.
pub struct RecordingDisplay {
    plots: Vec<(u32, u32)>,
}

impl RecordingDisplay {
    pub fn new() -> Self {
        Self { plots: Vec::new() }
    }

    pub fn plots(&self) -> &[(u32, u32)] {
        &self.plots
    }
}

impl BarGraph for RecordingDisplay {
    fn plot_bar_graph(&mut self, value: u32, high: u32) {
        self.plots.push((value, high));
    }
}
