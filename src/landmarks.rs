// Per-frame hand landmarks in pixel space.
// A snapshot is either empty (no hand this frame) or holds all 21 points of the
// standard hand topology; anything in between is treated as no hand.

#[cfg(test)]
#[path = "landmarks_test.rs"]
mod landmarks_test;

use crate::fingers::FingerUpVector;
use crate::types::Point;

/// Number of points in one tracked hand.
pub const HAND_POINTS: usize = 21;

pub const WRIST: usize = 0;
pub const THUMB_CMC: usize = 1;
pub const THUMB_MCP: usize = 2;
pub const THUMB_IP: usize = 3;
pub const THUMB_TIP: usize = 4;
pub const INDEX_MCP: usize = 5;
pub const INDEX_PIP: usize = 6;
pub const INDEX_DIP: usize = 7;
pub const INDEX_TIP: usize = 8;
pub const MIDDLE_MCP: usize = 9;
pub const MIDDLE_PIP: usize = 10;
pub const MIDDLE_DIP: usize = 11;
pub const MIDDLE_TIP: usize = 12;
pub const RING_MCP: usize = 13;
pub const RING_PIP: usize = 14;
pub const RING_DIP: usize = 15;
pub const RING_TIP: usize = 16;
pub const PINKY_MCP: usize = 17;
pub const PINKY_PIP: usize = 18;
pub const PINKY_DIP: usize = 19;
pub const PINKY_TIP: usize = 20;

/// Fingertips in vector order: [thumb, index, middle, ring, pinky].
pub const TIP_IDS: [usize; 5] = [THUMB_TIP, INDEX_TIP, MIDDLE_TIP, RING_TIP, PINKY_TIP];

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LandmarkSnapshot {
    points: Option<[Point; HAND_POINTS]>,
}

impl LandmarkSnapshot {
    /// No hand in this frame.
    pub const fn empty() -> Self {
        Self { points: None }
    }

    /// Build from points already in pixel space, ordered by landmark id.
    /// Any count other than 21 gives the empty snapshot.
    pub fn from_pixels(points: &[Point]) -> Self {
        match <[Point; HAND_POINTS]>::try_from(points) {
            Ok(points) => Self { points: Some(points) },
            Err(_) => Self::empty(),
        }
    }

    /// Build from detector output normalized to [0,1], scaled to the frame
    /// and truncated to whole pixels.
    pub fn from_normalized(points: &[(f32, f32)], width: usize, height: usize) -> Self {
        let (w, h) = (width as f32, height as f32);
        let pixels: Vec<Point> = points
            .iter()
            .map(|&(nx, ny)| Point::new((nx * w).floor() as i32, (ny * h).floor() as i32))
            .collect();
        Self::from_pixels(&pixels)
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_none()
    }

    /// Position of landmark `id`, None when there is no hand or `id` is not a landmark.
    pub fn get(&self, id: usize) -> Option<Point> {
        self.points.as_ref().and_then(|p| p.get(id).copied())
    }

    pub(crate) fn points(&self) -> Option<&[Point; HAND_POINTS]> {
        self.points.as_ref()
    }

    /// The index fingertip, used as the cursor for every gesture.
    pub fn index_tip(&self) -> Option<Point> {
        self.get(INDEX_TIP)
    }
}

/// A plausible upright hand whose fingers match `pattern`, with the index
/// fingertip placed exactly at `index_tip`.
///
/// Used by the pointer-driven hand when no real detector is configured.
pub fn synthetic_hand(pattern: FingerUpVector, index_tip: Point) -> LandmarkSnapshot {
    const FINGER_SPACING: i32 = 25;
    const TIP_DOWN: i32 = 90;
    const DIP_UP: i32 = 35;
    const DIP_DOWN: i32 = 80;
    const PIP: i32 = 70;
    const MCP: i32 = 100;

    let bits = pattern.bits();
    // Origin sits where an extended index tip would be.
    let oy = index_tip.y - if bits[1] { 0 } else { TIP_DOWN };
    let ox = index_tip.x;

    let mut pts = [Point::default(); HAND_POINTS];
    pts[WRIST] = Point::new(ox + 35, oy + 160);

    pts[THUMB_CMC] = Point::new(ox - 10, oy + 140);
    pts[THUMB_MCP] = Point::new(ox - 30, oy + 115);
    pts[THUMB_IP] = Point::new(ox - 40, oy + 90);
    let thumb_dx = if bits[0] { -25 } else { 15 };
    pts[THUMB_TIP] = Point::new(ox - 40 + thumb_dx, oy + 80);

    for (finger, &tip_id) in TIP_IDS.iter().enumerate().skip(1) {
        let x = ox + (finger as i32 - 1) * FINGER_SPACING;
        let up = bits[finger];
        pts[tip_id - 3] = Point::new(x, oy + MCP);
        pts[tip_id - 2] = Point::new(x, oy + PIP);
        pts[tip_id - 1] = Point::new(x, oy + if up { DIP_UP } else { DIP_DOWN });
        pts[tip_id] = Point::new(x, oy + if up { 0 } else { TIP_DOWN });
    }

    LandmarkSnapshot { points: Some(pts) }
}
