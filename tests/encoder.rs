mod tests {
    use berlin_uhr::{LampState, Row, WallTime, encode};

    #[test]
    fn test_encode_afternoon() {
        let state = encode(13, 17, 1);
        assert_eq!(
            state,
            LampState {
                blink: 0,
                hours5: 2,
                hours1: 3,
                minutes5: 3,
                minutes1: 2,
            }
        );
        assert_eq!(state.to_array(), [0, 2, 3, 3, 2]);
    }

    #[test]
    fn test_encode_midnight() {
        assert_eq!(encode(0, 0, 0).to_array(), [0; 5]);
    }

    #[test]
    fn test_encode_last_second_of_day() {
        assert_eq!(encode(23, 59, 59).to_array(), [1, 4, 3, 11, 4]);
    }

    #[test]
    fn test_blink_follows_four_second_cycle() {
        let blinks: Vec<u8> = (0..8).map(|s| encode(0, 0, s).blink).collect();
        assert_eq!(blinks, [0, 0, 1, 1, 0, 0, 1, 1]);

        for seconds in 0..60 {
            let lit = encode(12, 0, seconds).blink == 1;
            assert_eq!(lit, matches!(seconds % 4, 2 | 3), "seconds = {seconds}");
        }
    }

    #[test]
    fn test_hours_reconstruct() {
        for hours in 0..24 {
            let state = encode(hours, 0, 0);
            assert!(state.hours5 <= 4);
            assert!(state.hours1 <= 4);
            assert_eq!(5 * state.hours5 + state.hours1, hours);
        }
    }

    #[test]
    fn test_minutes_reconstruct() {
        for minutes in 0..60 {
            let state = encode(0, minutes, 0);
            assert!(state.minutes5 <= 11);
            assert!(state.minutes1 <= 4);
            assert_eq!(5 * state.minutes5 + state.minutes1, minutes);
        }
    }

    #[test]
    fn test_encode_is_idempotent() {
        assert_eq!(encode(7, 42, 13), encode(7, 42, 13));
    }

    #[test]
    fn test_from_wall_time() {
        let time = WallTime::new(13, 17, 1).unwrap();
        assert_eq!(LampState::from(time), encode(13, 17, 1));
    }

    #[test]
    fn test_magnitude_by_row() {
        let state = encode(13, 17, 3);
        assert_eq!(state.magnitude(Row::Blink), 1);
        assert_eq!(state.magnitude(Row::Hours5), 2);
        assert_eq!(state.magnitude(Row::Hours1), 3);
        assert_eq!(state.magnitude(Row::Minutes5), 3);
        assert_eq!(state.magnitude(Row::Minutes1), 2);
    }
}
