use super::*;
use crate::landmarks::{
    HAND_POINTS, INDEX_PIP, INDEX_TIP, LandmarkSnapshot, MIDDLE_PIP, MIDDLE_TIP, PINKY_PIP,
    PINKY_TIP, RING_PIP, RING_TIP, synthetic_hand,
};
use crate::types::Point;

/// Every tip below its joint and the thumb tucked to the right: a fist.
fn fist() -> Vec<Point> {
    let mut pts = vec![Point::new(200, 200); HAND_POINTS];
    let fingers = [
        (INDEX_TIP, INDEX_PIP),
        (MIDDLE_TIP, MIDDLE_PIP),
        (RING_TIP, RING_PIP),
        (PINKY_TIP, PINKY_PIP),
    ];
    for (tip, pip) in fingers {
        pts[pip] = Point::new(200, 150);
        pts[tip] = Point::new(200, 180);
    }
    pts[THUMB_IP] = Point::new(150, 200);
    pts[THUMB_TIP] = Point::new(170, 200);
    pts
}

// =============================================================
// classify
// =============================================================

#[test]
fn empty_snapshot_is_all_down() {
    assert_eq!(classify(&LandmarkSnapshot::empty()), FingerUpVector::NONE);
    assert_eq!(classify(&LandmarkSnapshot::empty()).count(), 0);
}

#[test]
fn fist_is_all_down() {
    let s = LandmarkSnapshot::from_pixels(&fist());
    assert_eq!(classify(&s), FingerUpVector::from_flags([0, 0, 0, 0, 0]));
}

#[test]
fn index_above_pip_only() {
    let mut pts = fist();
    pts[INDEX_TIP] = Point::new(200, 100);
    let s = LandmarkSnapshot::from_pixels(&pts);
    assert_eq!(classify(&s), FingerUpVector::from_flags([0, 1, 0, 0, 0]));
}

#[test]
fn tip_level_with_joint_is_down() {
    let mut pts = fist();
    pts[MIDDLE_TIP] = pts[MIDDLE_PIP];
    pts[THUMB_TIP] = pts[THUMB_IP];
    let s = LandmarkSnapshot::from_pixels(&pts);
    assert_eq!(classify(&s), FingerUpVector::NONE);
}

#[test]
fn thumb_uses_x_left_of_ip() {
    let mut pts = fist();
    pts[THUMB_TIP] = Point::new(120, 260);
    let s = LandmarkSnapshot::from_pixels(&pts);
    assert_eq!(classify(&s), FingerUpVector::from_flags([1, 0, 0, 0, 0]));
}

#[test]
fn thumb_right_of_ip_is_down_even_when_raised() {
    // Fixed mirrored-right-hand rule: a thumb pointing right never counts.
    let mut pts = fist();
    pts[THUMB_TIP] = Point::new(260, 10);
    let s = LandmarkSnapshot::from_pixels(&pts);
    assert!(!classify(&s).bits()[0]);
}

#[test]
fn open_palm_is_all_up() {
    let mut pts = fist();
    for tip in [INDEX_TIP, MIDDLE_TIP, RING_TIP, PINKY_TIP] {
        pts[tip].y = 50;
    }
    pts[THUMB_TIP].x = 100;
    let s = LandmarkSnapshot::from_pixels(&pts);
    assert_eq!(classify(&s), FingerUpVector::ALL);
    assert_eq!(classify(&s).count(), 5);
}

#[test]
fn synthetic_hand_round_trips_every_pattern() {
    for mask in 0..32u8 {
        let pattern = FingerUpVector::from_mask(mask);
        let s = synthetic_hand(pattern, Point::new(400, 300));
        assert_eq!(classify(&s), pattern, "mask {mask:05b}");
    }
}

// =============================================================
// FingerUpVector
// =============================================================

#[test]
fn display_uses_flag_form() {
    assert_eq!(FingerUpVector::from_flags([0, 1, 1, 0, 0]).to_string(), "[0,1,1,0,0]");
    assert_eq!(FingerUpVector::ALL.to_string(), "[1,1,1,1,1]");
}

#[test]
fn mask_bit_zero_is_thumb() {
    assert_eq!(FingerUpVector::from_mask(0b00001).bits(), [true, false, false, false, false]);
    assert_eq!(FingerUpVector::from_mask(0b10000).bits(), [false, false, false, false, true]);
    assert_eq!(FingerUpVector::from_mask(0b00110).count(), 2);
}
