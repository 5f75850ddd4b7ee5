//! `SimConfig` — the day's clock bounds and the fleet speed.

use fleet_core::Minute;

/// Global run parameters.
///
/// One config drives one simulated working day.  Speed is uniform across
/// the fleet — per-vehicle speeds would change every delivery timestamp, so
/// introducing them is a deliberate policy decision, not a config tweak.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Minute of day at which the clock starts (first dispatches fire here).
    pub start: Minute,

    /// Hard stop: `run` never advances the clock past this minute, whether
    /// or not every package is delivered.
    pub end_of_day: Minute,

    /// Vehicle speed in distance units per hour.
    pub speed: f64,
}

impl SimConfig {
    /// Distance covered in one simulated minute.
    #[inline]
    pub fn quantum(&self) -> f64 {
        self.speed / 60.0
    }
}

impl Default for SimConfig {
    /// 08:00 start, 17:00 end of day, 18 distance units per hour.
    fn default() -> Self {
        Self {
            start:      Minute::hm(8, 0),
            end_of_day: Minute::hm(17, 0),
            speed:      18.0,
        }
    }
}
