//! Stored-charge readout for the capacitor bank powering the switch.

use crate::board::{AnalogSource, BarGraph};
use crate::errors::Error;
use crate::sampling::median_read;

/// Full-scale value the bar graph display is scaled against.
const DISPLAY_SCALE: u32 = 255;

/// Reads the stored charge from an analog input.
pub struct ChargeMonitor<P> {
    pin: P,
}

impl<P: AnalogSource> ChargeMonitor<P> {
    pub fn new(pin: P) -> Self {
        Self { pin }
    }

    /// Current charge level, 0 to 254, median-filtered to suppress
    /// interference from the display output.
    pub fn level(&mut self) -> Result<u8, Error> {
        median_read(&mut self.pin)
    }

    /// Whether the stored charge has reached `threshold`.
    pub fn is_at_least(&mut self, threshold: u8) -> Result<bool, Error> {
        Ok(self.level()? >= threshold)
    }

    /// Plot the current charge level on the display as a bar graph.
    pub fn show<D: BarGraph>(&mut self, display: &mut D) -> Result<(), Error> {
        let level = self.level()?;
        display.plot_bar_graph(u32::from(level), DISPLAY_SCALE);
        Ok(())
    }
}
