//! Time to lamp magnitudes.
//!
//! Hours and minutes are split into a count of five-unit lamps and a
//! count of one-unit lamps. The top lamp toggles with the seconds.

use crate::face::Row;
use crate::time::WallTime;

/// Number of lit lamps in every row of the face
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LampState {
    /// Seconds lamp, 0 or 1
    pub blink: u8,
    /// Five-hour lamps, 0..=4
    pub hours5: u8,
    /// One-hour lamps, 0..=4
    pub hours1: u8,
    /// Five-minute lamps, 0..=11
    pub minutes5: u8,
    /// One-minute lamps, 0..=4
    pub minutes1: u8,
}

/// Encode a time of day into lamp magnitudes.
///
/// Inputs are expected in wall-clock ranges. Out of range values are not
/// rejected here; use [`WallTime::new`] for checked input.
pub const fn encode(hours: u8, minutes: u8, seconds: u8) -> LampState {
    LampState {
        blink: (seconds / 2) % 2,
        hours5: hours / 5,
        hours1: hours % 5,
        minutes5: minutes / 5,
        minutes1: minutes % 5,
    }
}

impl LampState {
    /// Magnitudes in display order: blink, hours5, hours1, minutes5, minutes1
    pub const fn to_array(self) -> [u8; 5] {
        [
            self.blink,
            self.hours5,
            self.hours1,
            self.minutes5,
            self.minutes1,
        ]
    }

    /// Magnitude of a single row
    pub const fn magnitude(self, row: Row) -> u8 {
        match row {
            Row::Blink => self.blink,
            Row::Hours5 => self.hours5,
            Row::Hours1 => self.hours1,
            Row::Minutes5 => self.minutes5,
            Row::Minutes1 => self.minutes1,
        }
    }
}

impl From<WallTime> for LampState {
    fn from(time: WallTime) -> Self {
        encode(time.hours(), time.minutes(), time.seconds())
    }
}
