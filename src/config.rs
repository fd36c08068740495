// Runtime settings, read once from `AIR_CANVAS_*` environment variables.
// Missing or unparseable values fall back to the defaults below.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::path::PathBuf;

use crate::session::Settings;

const DEFAULT_CAMERA_INDEX: u32 = 0;
const DEFAULT_WIDTH: u32 = 1280;
const DEFAULT_HEIGHT: u32 = 720;
const DEFAULT_HEADER_HEIGHT: usize = 100;
const DEFAULT_BRUSH_THICKNESS: u32 = 15;
const DEFAULT_ERASER_THICKNESS: u32 = 50;
const DEFAULT_MIN_BRUSH: u32 = 5;
const DEFAULT_MAX_BRUSH: u32 = 50;
const DEFAULT_OUTPUT_DIR: &str = "output";
const DEFAULT_MIN_CONFIDENCE: f32 = 0.7;

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub camera_index: u32,
    pub width: u32,
    pub height: u32,
    pub header_height: usize,
    pub brush_thickness: u32,
    pub eraser_thickness: u32,
    pub min_brush: u32,
    pub max_brush: u32,
    pub output_dir: PathBuf,
    /// External landmark process; None drives the hand from the mouse.
    pub detector_cmd: Option<String>,
    pub min_confidence: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key -> value source (the environment, or a map in tests).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |name: &str| lookup(&format!("AIR_CANVAS_{name}"));
        let min_brush = parse_or(get("MIN_BRUSH"), DEFAULT_MIN_BRUSH);
        let max_brush = parse_or(get("MAX_BRUSH"), DEFAULT_MAX_BRUSH).max(min_brush);

        Self {
            camera_index: parse_or(get("CAMERA_INDEX"), DEFAULT_CAMERA_INDEX),
            width: parse_or(get("WIDTH"), DEFAULT_WIDTH),
            height: parse_or(get("HEIGHT"), DEFAULT_HEIGHT),
            header_height: parse_or(get("HEADER_HEIGHT"), DEFAULT_HEADER_HEIGHT),
            brush_thickness: parse_or(get("BRUSH_THICKNESS"), DEFAULT_BRUSH_THICKNESS),
            eraser_thickness: parse_or(get("ERASER_THICKNESS"), DEFAULT_ERASER_THICKNESS),
            min_brush,
            max_brush,
            output_dir: get("OUTPUT_DIR")
                .map_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR), PathBuf::from),
            detector_cmd: get("DETECTOR_CMD").filter(|c| !c.trim().is_empty()),
            min_confidence: parse_or(get("MIN_CONFIDENCE"), DEFAULT_MIN_CONFIDENCE),
        }
    }

    /// The drawing-related part, for the session.
    pub fn settings(&self) -> Settings {
        Settings {
            header_height: self.header_height,
            brush_thickness: self.brush_thickness,
            eraser_thickness: self.eraser_thickness,
            min_brush: self.min_brush,
            max_brush: self.max_brush,
        }
    }
}

fn parse_or<T>(value: Option<String>, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    value.and_then(|v| v.trim().parse::<T>().ok()).unwrap_or(default)
}
