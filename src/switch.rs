//! The switch output and the motion sensor input.

use embedded_hal::digital::v2::{InputPin, OutputPin};

use crate::errors::Error;

/// The relay-style switch output controlled by the blocks.
pub struct Switch<P> {
    pin: P,
}

impl<P: OutputPin> Switch<P> {
    pub fn new(pin: P) -> Self {
        Self { pin }
    }

    /// Turn the switch on.
    pub fn on(&mut self) -> Result<(), Error> {
        self.pin.set_high().map_err(|_| Error::SwitchGpioWriteError)
    }

    /// Turn the switch off.
    pub fn off(&mut self) -> Result<(), Error> {
        self.pin.set_low().map_err(|_| Error::SwitchGpioWriteError)
    }
}

/// The PIR motion sensor connected to a digital input.
pub struct MotionSensor<P> {
    pin: P,
}

impl<P: InputPin> MotionSensor<P> {
    pub fn new(pin: P) -> Self {
        Self { pin }
    }

    /// Whether somebody moved in front of the sensor.
    pub fn detected(&self) -> Result<bool, Error> {
        // The PIR module drives its output high while motion is detected.
        self.pin.is_high().map_err(|_| Error::MotionGpioReadError)
    }
}
