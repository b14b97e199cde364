mod tests {
    use berlin_uhr::color::{DARK_GRAY, GRAY, RED, YELLOW, rgb_from_u32};
    use berlin_uhr::{LampColor, Palette, PaletteId, Rgb, Row};

    #[test]
    fn test_rgb_from_u32() {
        assert_eq!(rgb_from_u32(0x12_34_56), Rgb::new(0x12, 0x34, 0x56));
    }

    #[test]
    fn test_lamp_roles() {
        assert_eq!(LampColor::of(Row::Blink, 1), LampColor::Blink);
        assert_eq!(LampColor::of(Row::Hours5, 2), LampColor::Hours);
        assert_eq!(LampColor::of(Row::Hours1, 4), LampColor::Hours);
        assert_eq!(LampColor::of(Row::Minutes5, 1), LampColor::Minutes);
        assert_eq!(LampColor::of(Row::Minutes5, 3), LampColor::Quarter);
        assert_eq!(LampColor::of(Row::Minutes5, 9), LampColor::Quarter);
        assert_eq!(LampColor::of(Row::Minutes1, 3), LampColor::Minutes);
    }

    #[test]
    fn test_classic_palette() {
        let palette = Palette::default();
        assert_eq!(palette, Palette::CLASSIC);
        assert_eq!(palette.color(Row::Blink, 1, true), YELLOW);
        assert_eq!(palette.color(Row::Hours5, 1, true), RED);
        assert_eq!(palette.color(Row::Minutes5, 2, true), YELLOW);
        assert_eq!(palette.color(Row::Minutes5, 6, true), RED);
        assert_eq!(palette.color(Row::Minutes5, 6, false), DARK_GRAY);
    }

    #[test]
    fn test_monochrome_palette() {
        let palette = Palette::MONOCHROME;
        for row in Row::ALL {
            for position in 1..=row.len() {
                assert_eq!(palette.color(row, position, true), RED);
                assert_eq!(palette.color(row, position, false), GRAY);
            }
        }
    }

    #[test]
    fn test_palette_id_names() {
        for id in PaletteId::ALL {
            assert_eq!(PaletteId::parse_from_str(id.as_str()), Some(id));
            assert_eq!(PaletteId::from_raw(id as u8), Some(id));
        }
        assert_eq!(PaletteId::parse_from_str("monochrome"), Some(PaletteId::Monochrome));
        assert_eq!(PaletteId::parse_from_str("neon"), None);
        assert_eq!(PaletteId::from_raw(2), None);
        assert_eq!(PaletteId::Monochrome.palette(), Palette::MONOCHROME);
    }
}
