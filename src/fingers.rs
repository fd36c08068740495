// Which fingers are raised, decided from one frame of landmarks.

#[cfg(test)]
#[path = "fingers_test.rs"]
mod fingers_test;

use std::fmt;

use crate::landmarks::{LandmarkSnapshot, THUMB_IP, THUMB_TIP, TIP_IDS};

/// Up/down per finger, ordered [thumb, index, middle, ring, pinky].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct FingerUpVector([bool; 5]);

impl FingerUpVector {
    pub const NONE: Self = Self([false; 5]);
    pub const ALL: Self = Self([true; 5]);

    pub const fn new(bits: [bool; 5]) -> Self {
        Self(bits)
    }

    /// From the 0/1 form, e.g. `[0, 1, 0, 0, 0]`. Any nonzero entry counts as up.
    pub const fn from_flags(flags: [u8; 5]) -> Self {
        Self([flags[0] != 0, flags[1] != 0, flags[2] != 0, flags[3] != 0, flags[4] != 0])
    }

    /// Bit `i` of `mask` is finger `i` (bit 0 = thumb).
    pub const fn from_mask(mask: u8) -> Self {
        Self([mask & 1 != 0, mask & 2 != 0, mask & 4 != 0, mask & 8 != 0, mask & 16 != 0])
    }

    pub const fn bits(self) -> [bool; 5] {
        self.0
    }

    /// Number of raised fingers (0..=5).
    pub fn count(self) -> usize {
        self.0.iter().filter(|&&up| up).count()
    }
}

impl fmt::Display for FingerUpVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [t, i, m, r, p] = self.0.map(u8::from);
        write!(f, "[{t},{i},{m},{r},{p}]")
    }
}

/// Finger states for one hand.
///
/// Thumb: up when its tip is left of the IP joint. This assumes a right hand
/// seen in a mirrored feed and does not look at handedness.
/// Other fingers: up when the tip is above (smaller y than) the PIP joint two
/// points back along the same finger.
pub fn classify(snapshot: &LandmarkSnapshot) -> FingerUpVector {
    let Some(pts) = snapshot.points() else {
        return FingerUpVector::NONE;
    };

    let mut bits = [false; 5];
    bits[0] = pts[THUMB_TIP].x < pts[THUMB_IP].x;
    for (finger, &tip) in TIP_IDS.iter().enumerate().skip(1) {
        bits[finger] = pts[tip].y < pts[tip - 2].y;
    }
    FingerUpVector(bits)
}
