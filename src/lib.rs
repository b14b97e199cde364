#![no_std]

pub mod color;
pub mod encoder;
pub mod face;
pub mod palette;
pub mod renderer;
pub mod tick_scheduler;
pub mod time;

pub use encoder::{LampState, encode};
pub use face::{ClockFace, LAMP_COUNT, LampRow, Row, is_lit};
pub use palette::{LampColor, Palette, PaletteId};
pub use renderer::Renderer;
pub use tick_scheduler::{DEFAULT_TICK_INTERVAL, TickResult, TickScheduler};
pub use time::{ClockSource, FixedClock, InvalidTime, WallTime};

pub use color::Rgb;
pub use embassy_time::{Duration, Instant};

/// Abstract lamp output trait
///
/// Implement this trait to draw the face on a window, a terminal,
/// or an LED strip. The tick scheduler is generic over this trait.
pub trait OutputDriver {
    /// Write one color per lamp, top to bottom and left to right
    fn write(&mut self, colors: &[Rgb]);
}
