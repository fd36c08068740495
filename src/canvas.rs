// The persistent drawing layer.
// Visual: strokes live here, not on the camera frame, so they survive from
// frame to frame and get laid over whatever the camera shows next.

#[cfg(test)]
#[path = "canvas_test.rs"]
mod canvas_test;

use std::path::{Path, PathBuf};

use image::{ImageBuffer, Rgb, RgbImage};
use time::OffsetDateTime;
use time::macros::format_description;

use crate::error::Error;
use crate::raster::draw_thick_line;
use crate::types::{BACKGROUND, FrameBuffer, Point, channels, luminance};

/// Canvas pixels at or below this luma count as empty when compositing.
pub const MASK_THRESHOLD: u8 = 20;

pub struct StrokeCanvas {
    raster: FrameBuffer,
}

impl StrokeCanvas {
    /// All-background canvas matching the camera frame size.
    pub fn new(width: usize, height: usize) -> Self {
        Self { raster: FrameBuffer::blank(width, height) }
    }

    pub fn dimensions(&self) -> (usize, usize) {
        self.raster.dimensions()
    }

    /// Rasterize one straight piece of a stroke.
    /// Visual: calling this with consecutive fingertip positions draws a freehand line.
    pub fn append_segment(&mut self, from: Point, to: Point, color: u32, thickness: u32) {
        draw_thick_line(&mut self.raster, from, to, color, thickness);
    }

    /// Back to all background.
    pub fn clear(&mut self) {
        self.raster.pixels.fill(BACKGROUND);
    }

    pub fn is_blank(&self) -> bool {
        self.raster.pixels.iter().all(|&p| p == BACKGROUND)
    }

    /// The raster as it stands, for export.
    pub fn snapshot(&self) -> &FrameBuffer {
        &self.raster
    }

    /// Lay the strokes over `frame`.
    ///
    /// Pixels whose canvas luma is above [`MASK_THRESHOLD`] knock out the
    /// camera pixel, then the canvas is OR-ed on top. Pure black strokes are
    /// indistinguishable from empty canvas.
    pub fn composite_onto(&self, frame: &FrameBuffer) -> Result<FrameBuffer, Error> {
        if frame.dimensions() != self.raster.dimensions() {
            return Err(Error::FrameSize {
                expected: self.raster.dimensions(),
                actual: frame.dimensions(),
            });
        }

        let pixels = frame
            .pixels
            .iter()
            .zip(&self.raster.pixels)
            .map(|(&cam, &ink)| {
                let keep = if luminance(ink) > MASK_THRESHOLD { 0 } else { 0x00_FF_FF_FF };
                (cam & keep) | ink
            })
            .collect();

        Ok(FrameBuffer { width: frame.width, height: frame.height, pixels })
    }

    /// The raster as an RGB image.
    pub fn to_image(&self) -> RgbImage {
        let (w, h) = (self.raster.width as u32, self.raster.height as u32);
        ImageBuffer::from_fn(w, h, |x, y| {
            let idx = y as usize * self.raster.width + x as usize;
            let (r, g, b) = channels(self.raster.pixels[idx]);
            Rgb([r, g, b])
        })
    }

    /// Write the canvas as `drawing_<timestamp>.png` inside `dir`, creating it if needed.
    /// The canvas itself is never touched, so a failed save can simply be retried.
    pub fn save_png(&self, dir: &Path) -> Result<PathBuf, Error> {
        std::fs::create_dir_all(dir)?;
        let path = dir.join(format!("drawing_{}.png", timestamp()));
        self.to_image()
            .save(&path)
            .map_err(|source| Error::Save { path: path.clone(), source })?;
        Ok(path)
    }
}

fn timestamp() -> String {
    let fmt = format_description!("[year][month][day]_[hour][minute][second]_[subsecond digits:3]");
    let now = OffsetDateTime::now_utc();
    now.format(&fmt).unwrap_or_else(|_| now.unix_timestamp().to_string())
}
