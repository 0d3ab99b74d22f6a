//! Scenario tests for joint presence
//!
//! Each case is a lesson window with pupil and tutor timestamps and the
//! expected time both were present.

use copresence::{compute_total_presence, IntervalMap, PresenceError};

fn intervals(lesson: &[u64], pupil: &[u64], tutor: &[u64]) -> IntervalMap {
    let mut map = IntervalMap::new();
    map.insert("lesson".to_string(), lesson.to_vec());
    map.insert("pupil".to_string(), pupil.to_vec());
    map.insert("tutor".to_string(), tutor.to_vec());
    map
}

fn presence(lesson: &[u64], pupil: &[u64], tutor: &[u64]) -> u64 {
    compute_total_presence(&intervals(lesson, pupil, tutor)).unwrap()
}

#[test]
fn test_basic_case() {
    assert_eq!(
        presence(&[100, 200], &[50, 150, 180, 250], &[80, 120, 160, 220]),
        40
    );
}

#[test]
fn test_all_outside_lesson() {
    assert_eq!(
        presence(&[100, 200], &[50, 90, 210, 250], &[80, 99, 201, 220]),
        0
    );
}

#[test]
fn test_touching_pupil_spans_merge() {
    assert_eq!(presence(&[100, 200], &[100, 150, 150, 200], &[100, 200]), 100);
}

#[test]
fn test_touching_across_participants_is_zero() {
    assert_eq!(presence(&[100, 200], &[80, 150], &[150, 250]), 0);
}

#[test]
fn test_empty_pupil() {
    assert_eq!(presence(&[100, 200], &[], &[150, 180]), 0);
}

#[test]
fn test_multiple_intervals() {
    assert_eq!(
        presence(
            &[100, 500],
            &[50, 150, 200, 300, 400, 550],
            &[120, 180, 250, 350, 450, 600]
        ),
        130
    );
}

#[test]
fn test_completely_inside() {
    assert_eq!(presence(&[100, 200], &[120, 180], &[110, 190]), 60);
}

#[test]
fn test_recorded_lesson_fragmented_pupil() {
    assert_eq!(
        presence(
            &[1594663200, 1594666800],
            &[1594663340, 1594663389, 1594663390, 1594663395, 1594663396, 1594666472],
            &[1594663290, 1594663430, 1594663443, 1594666473],
        ),
        3117
    );
}

#[test]
fn test_recorded_lesson_overlapping_reconnects() {
    assert_eq!(
        presence(
            &[1594702800, 1594706400],
            &[
                1594702789, 1594704500, 1594702807, 1594704542, 1594704512, 1594704513,
                1594704564, 1594705150, 1594704581, 1594704582, 1594704734, 1594705009,
                1594705095, 1594705096, 1594705106, 1594706480, 1594705158, 1594705773,
                1594705849, 1594706480, 1594706500, 1594706875, 1594706502, 1594706503,
                1594706524, 1594706524, 1594706579, 1594706641,
            ],
            &[1594700035, 1594700364, 1594702749, 1594705148, 1594705149, 1594706463],
        ),
        3577
    );
}

#[test]
fn test_recorded_lesson_overrun() {
    assert_eq!(
        presence(
            &[1594692000, 1594695600],
            &[1594692033, 1594696347],
            &[1594692017, 1594692066, 1594692068, 1594696341],
        ),
        3565
    );
}

#[test]
fn test_missing_lesson_is_error() {
    let mut map = intervals(&[100, 200], &[100, 200], &[100, 200]);
    map.remove("lesson");

    assert_eq!(
        compute_total_presence(&map),
        Err(PresenceError::MissingKey("lesson".to_string()))
    );
}

#[test]
fn test_malformed_inputs_are_errors() {
    let cases = [
        intervals(&[100, 200], &[100], &[]),
        intervals(&[100], &[], &[]),
        intervals(&[300, 200], &[], &[]),
        intervals(&[100, 200], &[], &[180, 120]),
    ];

    for map in &cases {
        assert!(
            matches!(
                compute_total_presence(map),
                Err(PresenceError::InvalidInput(_))
            ),
            "expected invalid input for {:?}",
            map
        );
    }
}
