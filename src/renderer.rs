use crate::color::Rgb;
use crate::encoder::LampState;
use crate::face::{ClockFace, LAMP_COUNT};
use crate::palette::{Palette, PaletteId};
use crate::time::WallTime;

/// Clock renderer - turns a time of day into lamp colors
pub struct Renderer {
    palette_id: PaletteId,
    palette: Palette,

    // Internal state
    face: ClockFace,
    frame_buffer: [Rgb; LAMP_COUNT],
}

impl Renderer {
    /// Create a renderer drawing with a fixed palette
    pub fn new(palette: PaletteId) -> Self {
        Self {
            palette_id: palette,
            palette: palette.palette(),
            face: ClockFace::default(),
            frame_buffer: [Rgb::default(); LAMP_COUNT],
        }
    }

    /// Render the face for `time`
    ///
    /// Returns one color per lamp, top to bottom and left to right.
    pub fn render(&mut self, time: WallTime) -> &[Rgb] {
        let state = LampState::from(time);
        self.face = ClockFace::from_state(&state);

        let lamps = self
            .face
            .rows()
            .iter()
            .flat_map(|row| row.iter().map(move |(position, lit)| (row.row(), position, lit)));
        let colors = lamps.map(|(row, position, lit)| self.palette.color(row, position, lit));

        for (slot, color) in self.frame_buffer.iter_mut().zip(colors) {
            *slot = color;
        }

        &self.frame_buffer
    }

    /// Face produced by the last render
    pub fn face(&self) -> &ClockFace {
        &self.face
    }

    pub fn palette_id(&self) -> PaletteId {
        self.palette_id
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(PaletteId::default())
    }
}
