//! Desktop preview app for the Berlin Uhr face
//!
//! Reads the local system clock, drives the renderer through a single
//! `TickScheduler` and paints the lamps in a window.

use std::time::Instant as StdInstant;

use berlin_uhr::{
    ClockSource, Instant, LAMP_COUNT, OutputDriver, PaletteId, Renderer, Rgb, Row,
    TickScheduler, WallTime,
};
use chrono::Timelike;
use eframe::egui;
use log::{debug, info};

const PALETTE: PaletteId = PaletteId::Classic;

/// Width of the painted face in pixels
const FACE_WIDTH: f32 = 380.0;

/// Height of a rectangular lamp
const LAMP_HEIGHT: f32 = 44.0;

/// Gap between lamps
const LAMP_GAP: f32 = 6.0;

/// Radius of the seconds lamp
const BLINK_RADIUS: f32 = 30.0;

const FACE_BACKGROUND: egui::Color32 = egui::Color32::from_rgb(18, 18, 18);

/// Local system time
struct SystemClock;

impl ClockSource for SystemClock {
    fn now(&mut self) -> WallTime {
        let now = chrono::Local::now();
        WallTime::from_seconds_of_day(now.num_seconds_from_midnight())
    }
}

/// Keeps the last written frame for painting
struct FrameSink {
    colors: [Rgb; LAMP_COUNT],
}

impl OutputDriver for FrameSink {
    fn write(&mut self, colors: &[Rgb]) {
        for (slot, color) in self.colors.iter_mut().zip(colors) {
            *slot = *color;
        }
    }
}

fn main() -> eframe::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([420.0, 560.0])
            .with_title("Berlin Uhr"),
        ..Default::default()
    };

    info!("starting preview, palette {}", PALETTE.as_str());

    eframe::run_native(
        "berlin-uhr-preview",
        options,
        Box::new(|_cc| Ok(Box::new(PreviewApp::new()))),
    )
}

struct PreviewApp {
    /// Drives the face; dropped together with the app
    scheduler: TickScheduler<SystemClock, FrameSink>,
    /// Wall-clock reference for scheduler time
    started: StdInstant,
    /// Deadline returned by the last tick
    next_deadline: Instant,
}

impl PreviewApp {
    fn new() -> Self {
        let sink = FrameSink {
            colors: [Rgb::default(); LAMP_COUNT],
        };
        let scheduler = TickScheduler::new(Renderer::new(PALETTE), SystemClock, sink);

        Self {
            scheduler,
            started: StdInstant::now(),
            next_deadline: Instant::from_millis(0),
        }
    }

    /// Milliseconds since the app started, as scheduler time
    #[allow(clippy::cast_possible_truncation)]
    fn now(&self) -> Instant {
        Instant::from_millis(self.started.elapsed().as_millis() as u64)
    }
}

impl eframe::App for PreviewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = self.now();
        if self.scheduler.is_due(now) {
            let result = self.scheduler.tick(now);
            self.next_deadline = result.next_deadline;
            debug!(
                "tick: {}",
                self.scheduler.renderer().face().to_string().replace('\n', " / ")
            );
        }

        // Wake up again for the next tick
        let until_next = self.next_deadline.saturating_duration_since(now);
        ctx.request_repaint_after(std::time::Duration::from_millis(until_next.as_millis()));

        egui::CentralPanel::default().show(ctx, |ui| {
            paint_face(ui, &self.scheduler.output().colors);

            ui.add_space(8.0);

            ui.monospace(self.scheduler.renderer().face().to_string());
        });
    }
}

fn to_color32(color: Rgb) -> egui::Color32 {
    egui::Color32::from_rgb(color.r, color.g, color.b)
}

/// Paint the lamps row by row; `colors` is in face order
#[allow(clippy::cast_precision_loss)]
fn paint_face(ui: &mut egui::Ui, colors: &[Rgb]) {
    let height = BLINK_RADIUS * 2.0 + LAMP_GAP + 4.0 * (LAMP_HEIGHT + LAMP_GAP);
    let (response, painter) =
        ui.allocate_painter(egui::vec2(FACE_WIDTH, height), egui::Sense::hover());
    let origin = response.rect.min;
    painter.rect_filled(response.rect, 8.0, FACE_BACKGROUND);

    let mut offset = 0;
    let mut y = origin.y + LAMP_GAP;
    for row in Row::ALL {
        let len = usize::from(row.len());
        let lamps = &colors[offset..offset + len];
        offset += len;

        if row == Row::Blink {
            let center = egui::pos2(origin.x + FACE_WIDTH / 2.0, y + BLINK_RADIUS - LAMP_GAP);
            painter.circle_filled(center, BLINK_RADIUS - LAMP_GAP, to_color32(lamps[0]));
            y += BLINK_RADIUS * 2.0 - LAMP_GAP;
            continue;
        }

        let count = len as f32;
        let width = (FACE_WIDTH - LAMP_GAP * (count + 1.0)) / count;
        for (index, color) in lamps.iter().enumerate() {
            let x = origin.x + LAMP_GAP + index as f32 * (width + LAMP_GAP);
            let rect = egui::Rect::from_min_size(
                egui::pos2(x, y),
                egui::vec2(width, LAMP_HEIGHT),
            );
            painter.rect_filled(rect, 4.0, to_color32(*color));
        }
        y += LAMP_HEIGHT + LAMP_GAP;
    }
}
