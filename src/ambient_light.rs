//! Ambient light classifier with hysteresis.
//!
//! Two thresholds span a dead band: averaged brightness below the dark
//! threshold flips the state to dark, above the bright threshold back to
//! bright. Values inside the band keep the previous answer, so a level
//! hovering near a single threshold cannot make the switch chatter.
//!
//! The classifier starts out assuming a bright environment.

use embedded_hal::blocking::delay::DelayMs;

use crate::board::LightSensor;
use crate::sampling::average_light_level;

/// Default threshold below which the environment is considered dark.
pub const DARK_THRESHOLD: u8 = 20;

/// Default threshold above which the environment is considered bright again.
pub const BRIGHT_THRESHOLD: u8 = 25;

/// Width of the default dead band. Underflows at compile time if the
/// defaults are ever misordered.
pub const HYSTERESIS_GAP: u8 = BRIGHT_THRESHOLD - DARK_THRESHOLD;

/// A validated pair of classification bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Thresholds {
    /// Brightness values below this are considered dark
    dark: u8,
    /// Brightness values above this are considered bright
    bright: u8,
}

impl Thresholds {
    /// Create a threshold pair.
    ///
    /// Panics when `dark > bright`: misordered bounds are a configuration
    /// error, not a runtime condition to recover from.
    pub fn new(dark: u8, bright: u8) -> Self {
        assert!(dark <= bright, "threshold is abnormal");
        Self { dark, bright }
    }

    /// Derive a pair from a single user-facing level by shifting it by
    /// [`HYSTERESIS_GAP`] in the direction the polarity asks about.
    ///
    /// The level is clamped into 0..=255 rather than rejected, as are the
    /// shifted bounds.
    pub fn from_level(level: i32, polarity: Polarity) -> Self {
        let level = level.clamp(0, 255);
        let gap = i32::from(HYSTERESIS_GAP);
        match polarity {
            Polarity::Dark => Self::new(level as u8, (level + gap).clamp(0, 255) as u8),
            Polarity::Bright => Self::new((level - gap).clamp(0, 255) as u8, level as u8),
        }
    }

    pub fn dark(&self) -> u8 {
        self.dark
    }

    pub fn bright(&self) -> u8 {
        self.bright
    }
}

impl Default for Thresholds {
    fn default() -> Self {
        Self::new(DARK_THRESHOLD, BRIGHT_THRESHOLD)
    }
}

/// Which side of a user-facing level a block asks about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    /// "Darker than the level?"
    Dark,
    /// "Brighter than the level?"
    Bright,
}

/// Dark/bright classifier, one instance per light sensor.
///
/// Every classification both reads and updates the stored state, so calls
/// must be serialized through the single `&mut self` owner.
pub struct AmbientLight {
    /// Previous decision, used to implement hysteresis
    was_dark: bool,
}

impl AmbientLight {
    /// Classifier assuming a bright environment at startup.
    pub fn new() -> Self {
        Self { was_dark: false }
    }

    /// Classifier assuming a dark environment at startup, for boards that
    /// power up with the lights off.
    pub fn starting_dark() -> Self {
        Self { was_dark: true }
    }

    /// Feed one averaged brightness value through the hysteresis step and
    /// return whether the environment is now considered dark.
    pub fn step(&mut self, brightness: f32, thresholds: Thresholds) -> bool {
        if self.was_dark {
            if brightness > f32::from(thresholds.bright) {
                self.was_dark = false;
            }
        } else if brightness < f32::from(thresholds.dark) {
            self.was_dark = true;
        }
        self.was_dark
    }

    /// Measure the averaged brightness and classify it against `thresholds`.
    pub fn classify<S, D>(&mut self, sensor: &mut S, delay: &mut D, thresholds: Thresholds) -> bool
    where
        S: LightSensor,
        D: DelayMs<u16>,
    {
        let brightness = average_light_level(sensor, delay);
        self.step(brightness, thresholds)
    }

    /// Classify against the default thresholds: "is it dark?"
    pub fn is_dark<S, D>(&mut self, sensor: &mut S, delay: &mut D) -> bool
    where
        S: LightSensor,
        D: DelayMs<u16>,
    {
        self.classify(sensor, delay, Thresholds::default())
    }

    /// Answer "darker than `level`?" or "brighter than `level`?" depending
    /// on `polarity`.
    ///
    /// The bounds are derived via [`Thresholds::from_level`]; the bright
    /// polarity negates the dark classification, since "brighter than" is
    /// its dual.
    pub fn detect<S, D>(&mut self, sensor: &mut S, delay: &mut D, level: i32, polarity: Polarity) -> bool
    where
        S: LightSensor,
        D: DelayMs<u16>,
    {
        let thresholds = Thresholds::from_level(level, polarity);
        let dark = self.classify(sensor, delay, thresholds);
        match polarity {
            Polarity::Dark => dark,
            Polarity::Bright => !dark,
        }
    }
}

impl Default for AmbientLight {
    fn default() -> Self {
        Self::new()
    }
}
