//! Simulation time model.
//!
//! # Design
//!
//! Time is represented as a monotonically increasing minute-of-day counter.
//! The whole simulation spans a single working day, advanced one minute per
//! tick, so an integer minute is the canonical unit: all deadline and
//! dispatch arithmetic is exact (no floating-point drift) and comparisons
//! are O(1).  Distances stay `f64`; time never does.

use std::fmt;

use crate::{FleetError, FleetResult};

// ── Minute ────────────────────────────────────────────────────────────────────

/// A minute-of-day timestamp: minutes since midnight.
///
/// `Minute(480)` is 08:00.  Stored as `u32` so day-overflow arithmetic in
/// tests cannot wrap.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Minute(pub u32);

impl Minute {
    pub const MIDNIGHT: Minute = Minute(0);

    /// Build from clock components: `Minute::hm(8, 0)` is 08:00.
    #[inline]
    pub const fn hm(hours: u32, minutes: u32) -> Minute {
        Minute(hours * 60 + minutes)
    }

    /// Hour-of-day component (0–23 for in-day values).
    #[inline]
    pub fn hours(self) -> u32 {
        self.0 / 60
    }

    /// Minute-of-hour component (0–59).
    #[inline]
    pub fn minutes(self) -> u32 {
        self.0 % 60
    }

    /// Parse a time-of-day string.
    ///
    /// Accepts `"8:00"`, `"08:00"`, `"9:05 am"`, `"10:30 AM"`, `"5:00 PM"`.
    /// A 12-hour form requires the meridiem suffix; without one the hour is
    /// taken as 24-hour clock.
    pub fn parse(s: &str) -> FleetResult<Minute> {
        let text = s.trim();
        let (clock, meridiem) = match text.to_ascii_lowercase() {
            t if t.ends_with("am") => (text[..text.len() - 2].trim_end().to_owned(), Some(false)),
            t if t.ends_with("pm") => (text[..text.len() - 2].trim_end().to_owned(), Some(true)),
            _ => (text.to_owned(), None),
        };

        let (h, m) = clock
            .split_once(':')
            .ok_or_else(|| FleetError::Parse(format!("invalid time of day {s:?}")))?;
        let hours: u32 = h
            .trim()
            .parse()
            .map_err(|_| FleetError::Parse(format!("invalid hour in {s:?}")))?;
        let minutes: u32 = m
            .trim()
            .parse()
            .map_err(|_| FleetError::Parse(format!("invalid minute in {s:?}")))?;
        if minutes > 59 {
            return Err(FleetError::Parse(format!("minute out of range in {s:?}")));
        }

        let hours = match meridiem {
            None => hours,
            Some(pm) => {
                if hours == 0 || hours > 12 {
                    return Err(FleetError::Parse(format!("12-hour clock hour out of range in {s:?}")));
                }
                // 12 AM → 0, 12 PM → 12.
                match (pm, hours) {
                    (false, 12) => 0,
                    (false, h) => h,
                    (true, 12) => 12,
                    (true, h) => h + 12,
                }
            }
        };
        if hours > 23 {
            return Err(FleetError::Parse(format!("hour out of range in {s:?}")));
        }

        Ok(Minute::hm(hours, minutes))
    }
}

impl std::ops::Add<u32> for Minute {
    type Output = Minute;
    #[inline]
    fn add(self, rhs: u32) -> Minute {
        Minute(self.0 + rhs)
    }
}

impl std::ops::Sub for Minute {
    type Output = u32;
    #[inline]
    fn sub(self, rhs: Minute) -> u32 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Minute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hours(), self.minutes())
    }
}

// ── DayClock ──────────────────────────────────────────────────────────────────

/// The single logical clock driving a simulation run.
///
/// `DayClock` is cheap to copy and intentionally holds no heap data.  The
/// tick loop advances it by exactly one minute per iteration; everything
/// that happens during that iteration is stamped with the post-advance
/// `current` value, so a ten-minute leg dispatched at 08:00 completes at
/// 08:10, not 08:09.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DayClock {
    /// Minute of day at which the run started (tick 0).
    pub start: Minute,
    /// The current simulated minute.
    pub current: Minute,
}

impl DayClock {
    /// Create a clock positioned at `start`.
    pub fn new(start: Minute) -> Self {
        Self { start, current: start }
    }

    /// Advance the clock by one minute.
    #[inline]
    pub fn advance(&mut self) {
        self.current = Minute(self.current.0 + 1);
    }

    /// Simulated minutes elapsed since the run started.
    #[inline]
    pub fn elapsed(&self) -> u32 {
        self.current - self.start
    }
}

impl fmt::Display for DayClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (+{} min)", self.current, self.elapsed())
    }
}
