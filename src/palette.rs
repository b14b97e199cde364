//! Lamp colors
//!
//! Whether a lamp is lit is decided by the face. The palette only decides
//! which color a lit or unlit lamp is drawn with.

use crate::color::{DARK_GRAY, GRAY, RED, Rgb, YELLOW};
use crate::face::Row;

const PALETTE_NAME_CLASSIC: &str = "classic";
const PALETTE_NAME_MONOCHROME: &str = "monochrome";

const PALETTE_ID_CLASSIC: u8 = 0;
const PALETTE_ID_MONOCHROME: u8 = 1;

/// Role of a lamp in the palette
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LampColor {
    Blink,
    Hours,
    Minutes,
    Quarter,
}

impl LampColor {
    /// Role of the lamp at the 1-based `position` of `row`
    pub const fn of(row: Row, position: u8) -> Self {
        match row {
            Row::Blink => Self::Blink,
            Row::Hours5 | Row::Hours1 => Self::Hours,
            Row::Minutes5 if row.is_quarter(position) => Self::Quarter,
            Row::Minutes5 | Row::Minutes1 => Self::Minutes,
        }
    }
}

/// Colors for every lamp role
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Color of every unlit lamp
    pub off: Rgb,
    pub blink: Rgb,
    pub hours: Rgb,
    pub minutes: Rgb,
    pub quarter: Rgb,
}

impl Palette {
    /// Yellow seconds and minutes, red hours and quarter marks
    pub const CLASSIC: Self = Self {
        off: DARK_GRAY,
        blink: YELLOW,
        hours: RED,
        minutes: YELLOW,
        quarter: RED,
    };

    /// Every lit lamp red, unlit lamps gray
    pub const MONOCHROME: Self = Self {
        off: GRAY,
        blink: RED,
        hours: RED,
        minutes: RED,
        quarter: RED,
    };

    /// Color of a lit lamp with the given role
    pub const fn lit(&self, role: LampColor) -> Rgb {
        match role {
            LampColor::Blink => self.blink,
            LampColor::Hours => self.hours,
            LampColor::Minutes => self.minutes,
            LampColor::Quarter => self.quarter,
        }
    }

    /// Color of the lamp at the 1-based `position` of `row`
    pub const fn color(&self, row: Row, position: u8, lit: bool) -> Rgb {
        if lit {
            self.lit(LampColor::of(row, position))
        } else {
            self.off
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::CLASSIC
    }
}

/// Known palette ids that can be requested.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum PaletteId {
    #[default]
    Classic = PALETTE_ID_CLASSIC,
    Monochrome = PALETTE_ID_MONOCHROME,
}

impl PaletteId {
    pub const ALL: [PaletteId; 2] = [PaletteId::Classic, PaletteId::Monochrome];

    pub const fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            PALETTE_ID_CLASSIC => Self::Classic,
            PALETTE_ID_MONOCHROME => Self::Monochrome,
            _ => return None,
        })
    }

    pub const fn palette(self) -> Palette {
        match self {
            Self::Classic => Palette::CLASSIC,
            Self::Monochrome => Palette::MONOCHROME,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Classic => PALETTE_NAME_CLASSIC,
            Self::Monochrome => PALETTE_NAME_MONOCHROME,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            PALETTE_NAME_CLASSIC => Some(Self::Classic),
            PALETTE_NAME_MONOCHROME => Some(Self::Monochrome),
            _ => None,
        }
    }
}
