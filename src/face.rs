//! Lamp rows of the clock face.
//!
//! Every row uses a thermometer encoding: the lamp at 1-based position `i`
//! is lit iff the row magnitude is at least `i`, so lamps always light up
//! from left to right without gaps.

use core::fmt;

use heapless::Vec;

use crate::encoder::LampState;

/// Length of the longest row
pub const MAX_ROW_LEN: usize = 11;

/// Total number of lamps on the face
pub const LAMP_COUNT: usize = 1 + 4 + 4 + 11 + 4;

const LIT_CHAR: char = 'R';
const UNLIT_CHAR: char = 'O';

/// Rows of the face from top to bottom
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Row {
    /// Single seconds lamp on top
    Blink,
    /// Four lamps worth five hours each
    Hours5,
    /// Four lamps worth one hour each
    Hours1,
    /// Eleven lamps worth five minutes each
    Minutes5,
    /// Four lamps worth one minute each
    Minutes1,
}

impl Row {
    /// All rows in display order
    pub const ALL: [Row; 5] = [
        Row::Blink,
        Row::Hours5,
        Row::Hours1,
        Row::Minutes5,
        Row::Minutes1,
    ];

    /// Number of lamps in the row
    #[allow(clippy::len_without_is_empty)]
    pub const fn len(self) -> u8 {
        match self {
            Self::Blink => 1,
            Self::Hours5 | Self::Hours1 | Self::Minutes1 => 4,
            Self::Minutes5 => 11,
        }
    }

    /// Whether the lamp marks a quarter hour (3rd, 6th and 9th five-minute lamp)
    ///
    /// This only affects how the lamp is colored, never whether it is lit.
    pub const fn is_quarter(self, position: u8) -> bool {
        matches!(self, Self::Minutes5) && matches!(position, 3 | 6 | 9)
    }
}

/// Whether a lamp at the 1-based `position` is lit for the given magnitude
pub const fn is_lit(magnitude: u8, position: u8) -> bool {
    magnitude >= position
}

/// Lit states of one row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LampRow {
    row: Row,
    lamps: Vec<bool, MAX_ROW_LEN>,
}

impl LampRow {
    /// Expand a magnitude into the lamps of `row`
    ///
    /// Magnitudes larger than the row saturate: every lamp is lit.
    pub fn new(row: Row, magnitude: u8) -> Self {
        let lamps = (1..=row.len())
            .map(|position| is_lit(magnitude, position))
            .collect();
        Self { row, lamps }
    }

    pub const fn row(&self) -> Row {
        self.row
    }

    /// Lamp states from left to right
    pub fn lamps(&self) -> &[bool] {
        &self.lamps
    }

    /// Lamps with their 1-based position
    #[allow(clippy::cast_possible_truncation)]
    pub fn iter(&self) -> impl Iterator<Item = (u8, bool)> + '_ {
        self.lamps
            .iter()
            .enumerate()
            .map(|(index, lit)| (index as u8 + 1, *lit))
    }

    /// Number of lit lamps
    pub fn lit_count(&self) -> usize {
        self.lamps.iter().filter(|lit| **lit).count()
    }
}

impl fmt::Display for LampRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for lit in &self.lamps {
            let ch = if *lit { LIT_CHAR } else { UNLIT_CHAR };
            fmt::Write::write_char(f, ch)?;
        }
        Ok(())
    }
}

/// All lamp rows for a single instant
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockFace {
    rows: [LampRow; 5],
}

impl ClockFace {
    /// Build the face from encoded magnitudes
    pub fn from_state(state: &LampState) -> Self {
        Self {
            rows: Row::ALL.map(|row| LampRow::new(row, state.magnitude(row))),
        }
    }

    /// Rows in display order
    pub fn rows(&self) -> &[LampRow] {
        &self.rows
    }

    /// Get a single row
    pub fn row(&self, row: Row) -> &LampRow {
        let index = match row {
            Row::Blink => 0,
            Row::Hours5 => 1,
            Row::Hours1 => 2,
            Row::Minutes5 => 3,
            Row::Minutes1 => 4,
        };
        &self.rows[index]
    }

    /// Every lamp state, top to bottom and left to right
    pub fn lamps(&self) -> impl Iterator<Item = bool> + '_ {
        self.rows.iter().flat_map(|row| row.lamps().iter().copied())
    }
}

impl Default for ClockFace {
    fn default() -> Self {
        Self::from_state(&LampState::default())
    }
}

impl From<&LampState> for ClockFace {
    fn from(state: &LampState) -> Self {
        Self::from_state(state)
    }
}

/// Canonical text pattern, one line per row
///
/// ```text
/// O
/// RROO
/// RRRO
/// RRROOOOOOOO
/// RROO
/// ```
impl fmt::Display for ClockFace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, row) in self.rows.iter().enumerate() {
            if index > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{row}")?;
        }
        Ok(())
    }
}
