// Core pixel types shared by the canvas, the palette and the window.

/// Background value for both the stroke canvas and "no color".
pub const BACKGROUND: u32 = 0x00_00_00_00;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameBuffer {
    pub width: usize,      // how wide the frame is on screen (pixels)
    pub height: usize,     // how tall the frame is on screen (pixels)
    pub pixels: Vec<u32>,  // each entry is 0x00RRGGBB for minifb
}

impl FrameBuffer {
    /// A frame filled with one color.
    pub fn filled(width: usize, height: usize, color: u32) -> Self {
        Self { width, height, pixels: vec![color; width * height] }
    }

    /// An all-background frame.
    pub fn blank(width: usize, height: usize) -> Self {
        Self::filled(width, height, BACKGROUND)
    }

    /// Pixel at (x,y), or None when outside the frame.
    pub fn get(&self, x: i32, y: i32) -> Option<u32> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[y * self.width + x])
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }
}

/// Integer pixel position (origin top-left, y grows downward).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Pack 8-bit channels as 0x00RRGGBB.
#[inline]
pub const fn rgb(r: u8, g: u8, b: u8) -> u32 {
    ((r as u32) << 16) | ((g as u32) << 8) | (b as u32)
}

/// Split 0x00RRGGBB back into channels.
#[inline]
pub const fn channels(px: u32) -> (u8, u8, u8) {
    (((px >> 16) & 0xFF) as u8, ((px >> 8) & 0xFF) as u8, (px & 0xFF) as u8)
}

/// Integer BT.601 luma, the same weights a grayscale conversion uses.
#[inline]
pub fn luminance(px: u32) -> u8 {
    let (r, g, b) = channels(px);
    ((299 * r as u32 + 587 * g as u32 + 114 * b as u32) / 1000) as u8
}
