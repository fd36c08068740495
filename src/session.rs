// One drawing session: the canvas, the palette and the brush, driven one frame at a time.
//
// Per frame: landmarks -> finger states -> gesture -> one action on the canvas
// or the brush -> composite for display.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use crate::canvas::StrokeCanvas;
use crate::error::Error;
use crate::fingers::{FingerUpVector, classify};
use crate::gesture::{Gesture, resolve};
use crate::landmarks::LandmarkSnapshot;
use crate::palette::{PURPLE, PaletteRegion, Tool};
use crate::raster::{draw_crosshair, draw_text, fill_disc, stroke_rect};
use crate::types::{FrameBuffer, Point, rgb};

const HUD_TEXT: u32 = rgb(255, 255, 255);
const DRAW_CURSOR_RADIUS: i32 = 10;
const SELECT_CURSOR_HALF: i32 = 15;

/// Brush sizes and header layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Settings {
    pub header_height: usize,
    pub brush_thickness: u32,
    pub eraser_thickness: u32,
    pub min_brush: u32,
    pub max_brush: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            header_height: 100,
            brush_thickness: 15,
            eraser_thickness: 50,
            min_brush: 5,
            max_brush: 50,
        }
    }
}

/// Brush plus the stroke in progress.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DrawingState {
    pub tool: Tool,
    pub thickness: u32,
    /// Last fingertip position of the current stroke; None starts a new stroke.
    pub prev: Option<Point>,
}

impl DrawingState {
    pub fn is_eraser(&self) -> bool {
        self.tool == Tool::Eraser
    }
}

/// What one frame decided.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameReport {
    pub gesture: Gesture,
    pub fingers: FingerUpVector,
    pub cursor: Option<Point>,
}

pub struct Session {
    canvas: StrokeCanvas,
    palette: PaletteRegion,
    state: DrawingState,
    settings: Settings,
    last_gesture: Gesture,
}

impl Session {
    /// Fresh session for frames of `width` x `height`, starting with the first swatch.
    pub fn new(width: usize, height: usize, settings: Settings) -> Self {
        let palette = PaletteRegion::new(width, settings.header_height);
        let tool = palette.swatches().first().map_or(Tool::Color(PURPLE), |s| s.tool);
        let thickness = match tool {
            Tool::Eraser => settings.eraser_thickness,
            Tool::Color(_) => settings.brush_thickness,
        };
        Self {
            canvas: StrokeCanvas::new(width, height),
            palette,
            state: DrawingState { tool, thickness, prev: None },
            settings,
            last_gesture: Gesture::Idle,
        }
    }

    pub fn canvas(&self) -> &StrokeCanvas {
        &self.canvas
    }

    pub fn palette(&self) -> &PaletteRegion {
        &self.palette
    }

    pub fn state(&self) -> &DrawingState {
        &self.state
    }

    /// Classify this frame's hand and apply the matching action.
    pub fn process(&mut self, snapshot: &LandmarkSnapshot) -> FrameReport {
        let fingers = classify(snapshot);
        // No hand is not a fist.
        let gesture = if snapshot.is_empty() { Gesture::Idle } else { resolve(fingers) };
        let cursor = snapshot.index_tip();

        if gesture != self.last_gesture {
            tracing::debug!(from = %self.last_gesture, to = %gesture, %fingers, "gesture changed");
            self.last_gesture = gesture;
        }

        if gesture != Gesture::Drawing {
            self.state.prev = None;
        }

        match gesture {
            Gesture::Selection => {
                if let Some(tool) = cursor
                    .and_then(|c| self.palette.test_selection(c.x, c.y))
                    .map(|s| s.tool)
                {
                    self.select_tool(tool);
                }
            }
            Gesture::Drawing => {
                if let Some(cur) = cursor {
                    // The first point of a stroke only anchors it.
                    if let Some(prev) = self.state.prev {
                        let (paint, thickness) = (self.state.tool.paint(), self.state.thickness);
                        self.canvas.append_segment(prev, cur, paint, thickness);
                    }
                    self.state.prev = Some(cur);
                }
            }
            Gesture::Clear => self.canvas.clear(),
            Gesture::Eraser => self.select_tool(Tool::Eraser),
            Gesture::Idle => {}
        }

        FrameReport { gesture, fingers, cursor }
    }

    /// Canvas over `frame`, then the palette, cursor marker and HUD.
    pub fn render(&self, frame: &FrameBuffer, report: &FrameReport) -> Result<FrameBuffer, Error> {
        let mut out = self.canvas.composite_onto(frame)?;
        self.palette.render(&mut out, Some(self.state.tool));

        // Eraser ink is black, so its marker is drawn in the HUD color.
        let marker = if self.state.is_eraser() { HUD_TEXT } else { self.state.tool.paint() };
        match (report.gesture, report.cursor) {
            (Gesture::Drawing, Some(c)) => fill_disc(&mut out, c, DRAW_CURSOR_RADIUS, marker),
            (Gesture::Selection, Some(c)) => {
                let h = SELECT_CURSOR_HALF;
                stroke_rect(&mut out, c.x - h, c.y - h, c.x + h, c.y + h, 2, marker);
            }
            (_, Some(c)) => draw_crosshair(&mut out, c, 12, HUD_TEXT),
            (_, None) => {}
        }

        let top = self.palette.header_height() + 10;
        if report.cursor.is_some() {
            let fingers = format!("FINGERS: {}", report.fingers.count());
            draw_text(&mut out, 50, top, &fingers, HUD_TEXT, 2);
            draw_text(&mut out, 50, top + 25, report.gesture.label(), HUD_TEXT, 2);
        }
        let size = format!("SIZE: {}PX", self.state.thickness);
        let right = out.width as i32 - 150;
        draw_text(&mut out, right, top, &size, HUD_TEXT, 1);
        Ok(out)
    }

    /// Wipe the canvas (keyboard `C`). The brush is untouched.
    pub fn clear_canvas(&mut self) {
        self.canvas.clear();
        self.state.prev = None;
    }

    /// Switch to a named color swatch (keyboard 1-5). Unknown names and the eraser are ignored.
    pub fn set_color(&mut self, name: &str) -> bool {
        match self.palette.find(name).map(|s| s.tool) {
            Some(tool @ Tool::Color(_)) => {
                self.select_tool(tool);
                true
            }
            _ => false,
        }
    }

    /// Brush size clamped to the configured range.
    pub fn set_brush_size(&mut self, size: u32) {
        self.state.thickness = size.clamp(self.settings.min_brush, self.settings.max_brush);
    }

    /// Grow or shrink the brush by `delta` pixels.
    pub fn adjust_brush(&mut self, delta: i32) {
        let size = self.state.thickness.saturating_add_signed(delta);
        self.set_brush_size(size);
    }

    /// Export the canvas into `dir`.
    pub fn save(&self, dir: &Path) -> Result<PathBuf, Error> {
        self.canvas.save_png(dir)
    }

    /// Picking a tool also resets its default thickness.
    fn select_tool(&mut self, tool: Tool) {
        let changed = self.state.tool != tool;
        self.state.tool = tool;
        self.state.thickness = match tool {
            Tool::Eraser => self.settings.eraser_thickness,
            Tool::Color(_) => self.settings.brush_thickness,
        };
        if changed {
            tracing::debug!(?tool, thickness = self.state.thickness, "tool selected");
        }
    }
}

/// A session behind one lock, for hosts that hand frames over from worker threads.
/// Each frame holds the lock for its whole process + render pass.
#[derive(Clone)]
pub struct SharedSession {
    inner: Arc<Mutex<Session>>,
}

impl SharedSession {
    pub fn new(session: Session) -> Self {
        Self { inner: Arc::new(Mutex::new(session)) }
    }

    pub fn handle_frame(
        &self,
        frame: &FrameBuffer,
        snapshot: &LandmarkSnapshot,
    ) -> Result<(FrameReport, FrameBuffer), Error> {
        self.with(|session| {
            let report = session.process(snapshot);
            let out = session.render(frame, &report)?;
            Ok((report, out))
        })
    }

    /// Run `f` with exclusive access. A panicked holder leaves plain data
    /// behind, so a poisoned lock is taken over.
    pub fn with<R>(&self, f: impl FnOnce(&mut Session) -> R) -> R {
        let mut guard = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard)
    }
}
