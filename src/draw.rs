// The window: shows each composited frame and reports keys and the mouse.
// The mouse doubles as a stand-in hand when no landmark detector is running.

use air_canvas::Error;
use air_canvas::fingers::FingerUpVector;
use air_canvas::types::{FrameBuffer, Point};
use minifb::{Key, KeyRepeat, MouseButton, MouseMode, Window, WindowOptions};

/// Keyboard commands, one per key press.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Quit,
    Clear,
    Save,
    Color(&'static str),
    Brush(i32),
}

const COLOR_KEYS: [(Key, &str); 5] = [
    (Key::Key1, "Purple"),
    (Key::Key2, "Blue"),
    (Key::Key3, "Green"),
    (Key::Key4, "Red"),
    (Key::Key5, "Yellow"),
];

const BRUSH_STEP: i32 = 5;

pub struct Drawer {
    window: Window, // the on-screen window you see
}

impl Drawer {
    /// Create a window sized to the camera feed.
    /// Visual: a new empty window appears with your chosen title.
    pub fn new(title: &str, width: usize, height: usize) -> Result<Self, Error> {
        let window = Window::new(title, width, height, WindowOptions::default())
            .map_err(|e| Error::WindowInit(e.to_string()))?;
        Ok(Self { window })
    }

    /// Push the pixels for this frame to the screen.
    pub fn present(&mut self, framebuffer: &FrameBuffer) -> Result<(), Error> {
        self.window
            .update_with_buffer(&framebuffer.pixels, framebuffer.width, framebuffer.height)
            .map_err(|e| Error::WindowUpdate(e.to_string()))
    }

    /// Returns false when the user closes the window (so we can stop the loop).
    pub fn is_open(&self) -> bool {
        self.window.is_open()
    }

    /// Keys pressed since the last frame, in a fixed order.
    pub fn commands(&self) -> Vec<Command> {
        let pressed = |k| self.window.is_key_pressed(k, KeyRepeat::No);
        let mut out = Vec::new();
        if pressed(Key::Escape) || pressed(Key::Q) {
            out.push(Command::Quit);
        }
        if pressed(Key::C) {
            out.push(Command::Clear);
        }
        if pressed(Key::S) {
            out.push(Command::Save);
        }
        out.extend(
            COLOR_KEYS
                .iter()
                .filter(|(k, _)| pressed(*k))
                .map(|&(_, name)| Command::Color(name)),
        );
        if pressed(Key::Equal) || pressed(Key::NumPadPlus) {
            out.push(Command::Brush(BRUSH_STEP));
        }
        if pressed(Key::Minus) || pressed(Key::NumPadMinus) {
            out.push(Command::Brush(-BRUSH_STEP));
        }
        out
    }

    /// Mouse position in window pixels (clamped to the window).
    pub fn mouse_pos(&self) -> Option<Point> {
        self.window
            .get_mouse_pos(MouseMode::Clamp)
            .map(|(x, y)| Point::new(x.max(0.0) as i32, y.max(0.0) as i32))
    }

    /// The hand shape the mouse is standing in for, and where its index tip is.
    /// LMB: point (draw). RMB: two fingers (select). Hold E: fist. Hold O: open palm.
    pub fn pointer_pose(&self) -> Option<(FingerUpVector, Point)> {
        let tip = self.mouse_pos()?;
        let pose = if self.window.is_key_down(Key::O) {
            FingerUpVector::ALL
        } else if self.window.is_key_down(Key::E) {
            FingerUpVector::NONE
        } else if self.window.get_mouse_down(MouseButton::Right) {
            FingerUpVector::from_flags([0, 1, 1, 0, 0])
        } else if self.window.get_mouse_down(MouseButton::Left) {
            FingerUpVector::from_flags([0, 1, 0, 0, 0])
        } else {
            return None;
        };
        Some((pose, tip))
    }
}
