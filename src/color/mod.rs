use smart_leds::RGB8;

pub type Rgb = RGB8;

/// Build a color from a `0xRRGGBB` value
#[allow(clippy::cast_possible_truncation)]
pub const fn rgb_from_u32(value: u32) -> Rgb {
    Rgb {
        r: (value >> 16) as u8,
        g: (value >> 8) as u8,
        b: value as u8,
    }
}

pub const RED: Rgb = rgb_from_u32(0xFF_00_00);
pub const YELLOW: Rgb = rgb_from_u32(0xFF_CC_00);
pub const GRAY: Rgb = rgb_from_u32(0x88_88_88);
pub const DARK_GRAY: Rgb = rgb_from_u32(0x2A_2A_2A);
