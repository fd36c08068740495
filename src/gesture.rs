// Finger pattern -> drawing mode.

#[cfg(test)]
#[path = "gesture_test.rs"]
mod gesture_test;

use std::fmt;

use crate::fingers::FingerUpVector;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Gesture {
    /// Index + middle up: hover the palette.
    Selection,
    /// Index up: paint with the fingertip.
    Drawing,
    /// Open palm: wipe the canvas.
    Clear,
    /// Fist: switch to the eraser.
    Eraser,
    /// Anything else, or no hand.
    Idle,
}

/// Exact patterns, checked in order. They are disjoint, so order only
/// documents priority.
const PATTERNS: [(FingerUpVector, Gesture); 4] = [
    (FingerUpVector::from_flags([0, 1, 1, 0, 0]), Gesture::Selection),
    (FingerUpVector::from_flags([0, 1, 0, 0, 0]), Gesture::Drawing),
    (FingerUpVector::from_flags([1, 1, 1, 1, 1]), Gesture::Clear),
    (FingerUpVector::from_flags([0, 0, 0, 0, 0]), Gesture::Eraser),
];

impl Gesture {
    /// Short upper-case label for the HUD.
    pub fn label(self) -> &'static str {
        match self {
            Self::Selection => "SELECTION",
            Self::Drawing => "DRAWING",
            Self::Clear => "CLEAR",
            Self::Eraser => "ERASER",
            Self::Idle => "IDLE",
        }
    }
}

impl fmt::Display for Gesture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

pub fn resolve(fingers: FingerUpVector) -> Gesture {
    PATTERNS
        .iter()
        .find(|(pattern, _)| *pattern == fingers)
        .map_or(Gesture::Idle, |&(_, gesture)| gesture)
}
