// The color header strip across the top of the frame.
// Visual: N equal boxes (5 colors + eraser); hovering one with two fingers picks it.

#[cfg(test)]
#[path = "palette_test.rs"]
mod palette_test;

use crate::raster::{draw_text, fill_rect, stroke_rect, text_width};
use crate::types::{BACKGROUND, FrameBuffer, rgb};

pub const PURPLE: u32 = rgb(255, 0, 255);
pub const BLUE: u32 = rgb(0, 0, 255);
pub const GREEN: u32 = rgb(0, 255, 0);
pub const RED: u32 = rgb(255, 0, 0);
pub const YELLOW: u32 = rgb(255, 255, 0);
const WHITE: u32 = rgb(255, 255, 255);

/// What picking a swatch gives you.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tool {
    Color(u32),
    /// Paints background, so strokes under it disappear.
    Eraser,
}

impl Tool {
    /// The pixel value this tool paints with.
    pub fn paint(self) -> u32 {
        match self {
            Tool::Color(c) => c,
            Tool::Eraser => BACKGROUND,
        }
    }
}

/// Closed box in header pixels: x0..=x1, y0..=y1.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SwatchBox {
    pub x0: i32,
    pub x1: i32,
    pub y0: i32,
    pub y1: i32,
}

impl SwatchBox {
    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.x0 <= x && x <= self.x1 && self.y0 <= y && y <= self.y1
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Swatch {
    pub name: &'static str,
    pub tool: Tool,
    pub bounds: SwatchBox,
}

/// Default swatches, left to right.
pub const DEFAULT_SWATCHES: [(&str, Tool); 6] = [
    ("Purple", Tool::Color(PURPLE)),
    ("Blue", Tool::Color(BLUE)),
    ("Green", Tool::Color(GREEN)),
    ("Red", Tool::Color(RED)),
    ("Yellow", Tool::Color(YELLOW)),
    ("Eraser", Tool::Eraser),
];

#[derive(Clone, Debug)]
pub struct PaletteRegion {
    header_height: i32,
    swatches: Vec<Swatch>,
}

impl PaletteRegion {
    /// The default five colors plus eraser across `width` pixels.
    pub fn new(width: usize, header_height: usize) -> Self {
        Self::with_swatches(width, header_height, &DEFAULT_SWATCHES)
    }

    /// Lay `swatches` out as equal-width boxes, `width / n` pixels each.
    pub fn with_swatches(
        width: usize,
        header_height: usize,
        swatches: &[(&'static str, Tool)],
    ) -> Self {
        let header_height = header_height as i32;
        let box_width = if swatches.is_empty() { 0 } else { (width / swatches.len()) as i32 };
        let swatches = swatches
            .iter()
            .enumerate()
            .map(|(i, &(name, tool))| Swatch {
                name,
                tool,
                bounds: SwatchBox {
                    x0: i as i32 * box_width,
                    x1: (i as i32 + 1) * box_width,
                    y0: 0,
                    y1: header_height,
                },
            })
            .collect();
        Self { header_height, swatches }
    }

    pub fn header_height(&self) -> i32 {
        self.header_height
    }

    pub fn swatches(&self) -> &[Swatch] {
        &self.swatches
    }

    /// Swatch under (x,y), if any.
    ///
    /// Boxes are closed on both edges; a shared edge belongs to the left box.
    /// Anything below the header band is never a selection.
    pub fn test_selection(&self, x: i32, y: i32) -> Option<&Swatch> {
        if y > self.header_height {
            return None;
        }
        self.swatches.iter().find(|s| s.bounds.contains(x, y))
    }

    /// Swatch by case-insensitive name (keyboard shortcuts use this).
    pub fn find(&self, name: &str) -> Option<&Swatch> {
        self.swatches.iter().find(|s| s.name.eq_ignore_ascii_case(name))
    }

    /// Draw the header onto `fb` with the same boxes `test_selection` uses.
    /// Visual: filled boxes with white borders, the active one gets an inner ring,
    /// and each box carries its name.
    pub fn render(&self, fb: &mut FrameBuffer, active: Option<Tool>) {
        let scale = if self.header_height >= 60 { 2 } else { 1 };
        for s in &self.swatches {
            let b = s.bounds;
            fill_rect(fb, b.x0, b.y0, b.x1, b.y1, s.tool.paint());
            stroke_rect(fb, b.x0, b.y0, b.x1, b.y1, 2, WHITE);

            if active == Some(s.tool) {
                stroke_rect(fb, b.x0 + 5, b.y0 + 5, b.x1 - 5, b.y1 - 5, 4, WHITE);
            }

            let text_color = if s.tool == Tool::Eraser { WHITE } else { BACKGROUND };
            let label = s.name.to_ascii_uppercase();
            let tx = b.x0 + ((b.x1 - b.x0) - text_width(&label, scale)).max(20) / 2;
            let ty = b.y0 + (b.y1 - b.y0) / 2 - 7 * scale / 2;
            draw_text(fb, tx, ty, &label, text_color, scale);
        }
    }
}
