//! Sensor sampling helpers: median-filtered analog reads and averaged
//! light-level measurements.

use embedded_hal::blocking::delay::DelayMs;
use heapless::Vec;
use nb::block;

use crate::board::{AnalogSource, LightSensor};
use crate::errors::Error;

/// Full-scale converter value that shows up when a co-located output drives
/// the shared line; never a real measurement.
pub const SATURATION_SENTINEL: u8 = 255;

/// Number of light-level samples averaged per measurement.
pub const LIGHT_SAMPLE_COUNT: u32 = 50;

/// Pause between two consecutive light-level samples.
pub const LIGHT_SAMPLE_PAUSE_MS: u16 = 1;

/// Read `source` until 3 readings other than [`SATURATION_SENTINEL`] have
/// been collected, then return their median (0 to 254).
///
/// Blocks without timeout: a source that only ever returns the sentinel
/// makes this loop forever. Deliberate — a watchdog, if wanted, belongs to
/// the caller.
pub fn median_read<P: AnalogSource>(source: &mut P) -> Result<u8, Error> {
    let mut samples: Vec<u8, 3> = Vec::new();
    while !samples.is_full() {
        let raw = block!(source.read()).map_err(|_| Error::AnalogReadError)?;
        if raw != SATURATION_SENTINEL {
            // Capacity checked by the loop condition
            samples.push(raw).ok();
        }
    }
    samples.sort_unstable();
    Ok(samples[1])
}

/// Average [`LIGHT_SAMPLE_COUNT`] consecutive light-level readings, pausing
/// [`LIGHT_SAMPLE_PAUSE_MS`] between samples.
pub fn average_light_level<S, D>(sensor: &mut S, delay: &mut D) -> f32
where
    S: LightSensor,
    D: DelayMs<u16>,
{
    let mut accum: u32 = 0;
    for _ in 0..LIGHT_SAMPLE_COUNT {
        accum += u32::from(sensor.light_level());
        delay.delay_ms(LIGHT_SAMPLE_PAUSE_MS);
    }
    accum as f32 / LIGHT_SAMPLE_COUNT as f32
}
