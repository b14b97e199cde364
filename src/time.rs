//! Wall-clock time as read by the clock face.
//!
//! The face only needs hours, minutes and seconds of the current day.
//! Where the time comes from is up to the host, see [`ClockSource`].

use core::fmt;

/// Seconds in one day
pub const SECONDS_PER_DAY: u32 = 24 * 60 * 60;

/// Time of day with validated components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WallTime {
    hours: u8,
    minutes: u8,
    seconds: u8,
}

/// Error returned when a time component is out of range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidTime {
    pub hours: u8,
    pub minutes: u8,
    pub seconds: u8,
}

impl fmt::Display for InvalidTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid time of day {:02}:{:02}:{:02}",
            self.hours, self.minutes, self.seconds
        )
    }
}

impl core::error::Error for InvalidTime {}

impl WallTime {
    /// Midnight
    pub const MIDNIGHT: Self = Self {
        hours: 0,
        minutes: 0,
        seconds: 0,
    };

    /// Create a new time of day
    ///
    /// Returns `InvalidTime` unless `hours < 24`, `minutes < 60` and `seconds < 60`.
    pub const fn new(hours: u8, minutes: u8, seconds: u8) -> Result<Self, InvalidTime> {
        if hours > 23 || minutes > 59 || seconds > 59 {
            return Err(InvalidTime {
                hours,
                minutes,
                seconds,
            });
        }
        Ok(Self {
            hours,
            minutes,
            seconds,
        })
    }

    /// Build a time of day from seconds elapsed since midnight.
    ///
    /// Values of a day or more wrap around.
    #[allow(clippy::cast_possible_truncation)]
    pub const fn from_seconds_of_day(secs: u32) -> Self {
        let secs = secs % SECONDS_PER_DAY;
        Self {
            hours: (secs / 3600) as u8,
            minutes: (secs / 60 % 60) as u8,
            seconds: (secs % 60) as u8,
        }
    }

    pub const fn hours(self) -> u8 {
        self.hours
    }

    pub const fn minutes(self) -> u8 {
        self.minutes
    }

    pub const fn seconds(self) -> u8 {
        self.seconds
    }

    /// Seconds elapsed since midnight
    pub const fn seconds_of_day(self) -> u32 {
        self.hours as u32 * 3600 + self.minutes as u32 * 60 + self.seconds as u32
    }
}

impl fmt::Display for WallTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hours, self.minutes, self.seconds)
    }
}

/// Source of the current time of day
///
/// Implement this trait to read time from a system clock, an RTC chip,
/// or anything else the platform provides.
pub trait ClockSource {
    /// Get the current time of day
    fn now(&mut self) -> WallTime;
}

/// Clock source that always reports the same time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub WallTime);

impl ClockSource for FixedClock {
    fn now(&mut self) -> WallTime {
        self.0
    }
}
