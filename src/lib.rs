//! Gesture-driven drawing over a live camera feed.
//!
//! A hand detector supplies 21 landmarks per frame; the finger pattern picks a
//! mode (draw, select color, erase, clear) and the strokes accumulate on a
//! canvas that is laid over every following frame.
//!
//! | Module | Role |
//! |--------|------|
//! | [`landmarks`] | Per-frame hand points and the synthetic pointer hand |
//! | [`fingers`] | Finger up/down classification |
//! | [`gesture`] | Finger pattern to drawing mode |
//! | [`palette`] | Color header hit-testing and rendering |
//! | [`canvas`] | Persistent stroke raster, compositing, PNG export |
//! | [`session`] | Per-frame controller and its shared, locked form |
//! | [`detect`] | Hand detector interface and the subprocess bridge |
//! | [`raster`] | Software drawing primitives and the HUD font |
//! | [`config`] | Environment-driven settings |

pub mod canvas;
pub mod config;
pub mod detect;
pub mod error;
pub mod fingers;
pub mod gesture;
pub mod landmarks;
pub mod palette;
pub mod raster;
pub mod session;
pub mod types;

pub use error::Error;
