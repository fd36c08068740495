use super::*;

#[test]
fn selection_pattern() {
    assert_eq!(resolve(FingerUpVector::from_flags([0, 1, 1, 0, 0])), Gesture::Selection);
}

#[test]
fn drawing_pattern() {
    assert_eq!(resolve(FingerUpVector::from_flags([0, 1, 0, 0, 0])), Gesture::Drawing);
}

#[test]
fn clear_pattern() {
    assert_eq!(resolve(FingerUpVector::ALL), Gesture::Clear);
}

#[test]
fn eraser_pattern() {
    assert_eq!(resolve(FingerUpVector::NONE), Gesture::Eraser);
}

#[test]
fn every_other_pattern_is_idle() {
    let active = [0b00110u8, 0b00010, 0b11111, 0b00000];
    let mut idle = 0;
    for mask in 0..32u8 {
        let g = resolve(FingerUpVector::from_mask(mask));
        if active.contains(&mask) {
            assert_ne!(g, Gesture::Idle, "mask {mask:05b}");
        } else {
            assert_eq!(g, Gesture::Idle, "mask {mask:05b}");
            idle += 1;
        }
    }
    assert_eq!(idle, 28);
}

#[test]
fn thumb_plus_pointer_is_not_drawing() {
    assert_eq!(resolve(FingerUpVector::from_flags([1, 1, 0, 0, 0])), Gesture::Idle);
    assert_eq!(resolve(FingerUpVector::from_flags([1, 1, 1, 0, 0])), Gesture::Idle);
}

#[test]
fn labels() {
    assert_eq!(Gesture::Selection.label(), "SELECTION");
    assert_eq!(Gesture::Drawing.to_string(), "DRAWING");
    assert_eq!(Gesture::Idle.to_string(), "IDLE");
}
