//! Fixed-interval tick scheduling.
//!
//! Drives the clock face on a fixed cadence without async/await or
//! platform-specific timers. The caller is responsible for sleeping or
//! waiting between ticks.

use embassy_time::{Duration, Instant};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::time::ClockSource;
use crate::{OutputDriver, Renderer};

/// Default interval between two face updates.
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(2000);

/// Result of a tick operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickResult {
    /// The deadline for the next tick.
    pub next_deadline: Instant,
    /// How long to wait until the next tick (zero if behind schedule).
    pub sleep_duration: Duration,
}

/// Portable tick scheduler
///
/// Owns the renderer, the clock source and the output driver for as long
/// as the face is shown. Dropping the scheduler releases all three.
///
/// # Usage
///
/// ```ignore
/// let mut scheduler = TickScheduler::new(renderer, clock, driver);
///
/// loop {
///     let result = scheduler.tick(Instant::now());
///     sleep(result.sleep_duration);
/// }
/// ```
pub struct TickScheduler<C: ClockSource, O: OutputDriver> {
    clock: C,
    output: O,
    renderer: Renderer,
    next_tick: Instant,
    interval: Duration,
}

impl<C: ClockSource, O: OutputDriver> TickScheduler<C, O> {
    /// Create a new scheduler ticking every `DEFAULT_TICK_INTERVAL`.
    pub fn new(renderer: Renderer, clock: C, driver: O) -> Self {
        Self::with_interval(renderer, clock, driver, DEFAULT_TICK_INTERVAL)
    }

    /// Create a new scheduler with a custom tick interval.
    pub fn with_interval(
        renderer: Renderer,
        clock: C,
        driver: O,
        interval: Duration,
    ) -> Self {
        Self {
            clock,
            output: driver,
            renderer,
            next_tick: Instant::from_millis(0),
            interval,
        }
    }

    /// Whether the next tick is due at `now`.
    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.next_tick
    }

    /// Update the face once and return timing information.
    ///
    /// If the caller fell behind by more than two intervals, the schedule
    /// restarts from `now` instead of catching up with a burst of ticks.
    pub fn tick(&mut self, now: Instant) -> TickResult {
        let max_drift = self.interval * 2;
        if now > self.next_tick + max_drift {
            #[cfg(feature = "esp32-log")]
            println!(
                "[berlin-uhr] tick late by {}ms, resetting schedule",
                (now - self.next_tick).as_millis()
            );
            self.next_tick = now;
        }

        let time = self.clock.now();
        let frame = self.renderer.render(time);
        self.output.write(frame);

        self.next_tick += self.interval;

        let sleep_duration = if self.next_tick > now {
            self.next_tick - now
        } else {
            Duration::from_millis(0)
        };

        TickResult {
            next_deadline: self.next_tick,
            sleep_duration,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    pub fn output(&self) -> &O {
        &self.output
    }

    /// Release the owned clock source and output driver.
    pub fn into_parts(self) -> (C, O) {
        (self.clock, self.output)
    }
}
