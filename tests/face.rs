mod tests {
    use berlin_uhr::{ClockFace, LAMP_COUNT, LampRow, Row, encode, is_lit};

    fn face_at(hours: u8, minutes: u8, seconds: u8) -> ClockFace {
        ClockFace::from_state(&encode(hours, minutes, seconds))
    }

    #[test]
    fn test_is_lit() {
        assert!(is_lit(3, 1));
        assert!(is_lit(3, 3));
        assert!(!is_lit(3, 4));
        assert!(!is_lit(0, 1));
    }

    #[test]
    fn test_thermometer_property() {
        for row in Row::ALL {
            let len = row.len();
            for magnitude in 0..=len + 2 {
                let lamps = LampRow::new(row, magnitude);
                assert_eq!(lamps.lamps().len(), usize::from(len));
                assert_eq!(lamps.lit_count(), usize::from(magnitude.min(len)));
                for (position, lit) in lamps.iter() {
                    assert_eq!(lit, position <= magnitude, "{row:?} {magnitude} {position}");
                }
            }
        }
    }

    #[test]
    fn test_canonical_pattern() {
        let face = face_at(13, 17, 1);
        assert_eq!(face.to_string(), "O\nRROO\nRRRO\nRRROOOOOOOO\nRROO");
    }

    #[test]
    fn test_midnight_all_off() {
        let face = face_at(0, 0, 0);
        assert_eq!(face.lamps().count(), LAMP_COUNT);
        assert!(face.lamps().all(|lit| !lit));
        assert_eq!(face, ClockFace::default());
    }

    #[test]
    fn test_last_second_of_day_saturates() {
        let face = face_at(23, 59, 59);
        assert_eq!(face.to_string(), "R\nRRRR\nRRRO\nRRRRRRRRRRR\nRRRR");
        assert_eq!(face.row(Row::Minutes5).lit_count(), 11);
        assert_eq!(face.row(Row::Minutes1).lit_count(), 4);
    }

    #[test]
    fn test_rows_in_display_order() {
        let face = face_at(13, 17, 1);
        let rows: Vec<Row> = face.rows().iter().map(LampRow::row).collect();
        assert_eq!(rows, Row::ALL);
        assert_eq!(face.row(Row::Hours1).lit_count(), 3);
    }

    #[test]
    fn test_quarter_lamps() {
        let quarters: Vec<u8> = (1..=Row::Minutes5.len())
            .filter(|position| Row::Minutes5.is_quarter(*position))
            .collect();
        assert_eq!(quarters, [3, 6, 9]);
        assert!(!Row::Minutes1.is_quarter(3));
        assert!(!Row::Hours5.is_quarter(3));
    }
}
