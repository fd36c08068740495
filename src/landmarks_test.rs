use super::*;
use crate::fingers::FingerUpVector;

fn hand_points() -> Vec<Point> {
    (0..HAND_POINTS as i32).map(|i| Point::new(i * 10, i * 5)).collect()
}

// =============================================================
// Construction
// =============================================================

#[test]
fn default_is_empty() {
    let s = LandmarkSnapshot::default();
    assert!(s.is_empty());
    assert_eq!(s.index_tip(), None);
    assert_eq!(s.get(WRIST), None);
}

#[test]
fn full_hand_keeps_every_point_in_order() {
    let s = LandmarkSnapshot::from_pixels(&hand_points());
    assert!(!s.is_empty());
    for id in 0..HAND_POINTS {
        assert_eq!(s.get(id), Some(Point::new(id as i32 * 10, id as i32 * 5)));
    }
    assert_eq!(s.get(HAND_POINTS), None);
    assert_eq!(s.index_tip(), Some(Point::new(80, 40)));
}

#[test]
fn partial_hand_is_treated_as_no_hand() {
    let mut pts = hand_points();
    pts.pop();
    assert!(LandmarkSnapshot::from_pixels(&pts).is_empty());
    assert!(LandmarkSnapshot::from_pixels(&[]).is_empty());
}

#[test]
fn extra_points_are_treated_as_no_hand() {
    let mut pts = hand_points();
    pts.push(Point::new(1, 1));
    assert!(LandmarkSnapshot::from_pixels(&pts).is_empty());
}

#[test]
fn get_out_of_range_id_is_none() {
    let s = LandmarkSnapshot::from_pixels(&hand_points());
    assert_eq!(s.get(HAND_POINTS), None);
    assert_eq!(s.get(WRIST), Some(Point::new(0, 0)));
}

#[test]
fn normalized_points_scale_and_truncate() {
    let mut pts = vec![(0.0, 0.0); HAND_POINTS];
    pts[INDEX_TIP] = (0.5, 0.25);
    pts[WRIST] = (0.999, 0.999);
    let s = LandmarkSnapshot::from_normalized(&pts, 640, 480);
    assert_eq!(s.index_tip(), Some(Point::new(320, 120)));
    assert_eq!(s.get(WRIST), Some(Point::new(639, 479)));
}

#[test]
fn normalized_short_list_is_no_hand() {
    let pts = vec![(0.5, 0.5); 5];
    assert!(LandmarkSnapshot::from_normalized(&pts, 640, 480).is_empty());
}

// =============================================================
// synthetic_hand
// =============================================================

#[test]
fn synthetic_hand_puts_index_tip_at_cursor() {
    let tip = Point::new(300, 200);
    for mask in 0..32u8 {
        let s = synthetic_hand(FingerUpVector::from_mask(mask), tip);
        assert_eq!(s.index_tip(), Some(tip), "mask {mask:05b}");
        assert!(!s.is_empty());
    }
}

#[test]
fn synthetic_hand_tip_ids_match_topology() {
    assert_eq!(TIP_IDS, [THUMB_TIP, INDEX_TIP, MIDDLE_TIP, RING_TIP, PINKY_TIP]);
    assert_eq!(INDEX_TIP - 2, INDEX_PIP);
    assert_eq!(PINKY_TIP - 2, PINKY_PIP);
    assert_eq!(THUMB_TIP - 1, THUMB_IP);
}
