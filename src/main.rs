// What you SEE:
// • Live (mirrored) camera is always the base image, with a color header on top.
// • Point your index finger to draw; index + middle over the header picks a color.
// • Open palm clears the canvas, a fist switches to the eraser.
// • Keys: C clear, S save PNG, 1-5 colors, +/- brush size, Q or ESC quits.
// • Without AIR_CANVAS_DETECTOR_CMD the mouse plays the hand:
//   LMB draw, RMB select, hold E fist, hold O open palm.

mod camera;
mod draw;

use std::time::{Duration, Instant};

use air_canvas::Error;
use air_canvas::config::Config;
use air_canvas::detect::{HandDetector, SubprocessDetector};
use air_canvas::landmarks::{LandmarkSnapshot, synthetic_hand};
use air_canvas::session::Session;
use camera::CameraCapture;
use draw::{Command, Drawer};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env();
    tracing::debug!(?config, "configuration loaded");

    /* --- Camera + window setup --- */
    let mut cam = CameraCapture::new(config.camera_index, config.width, config.height)?;
    let (w, h) = cam.resolution();
    let mut drawer = Drawer::new("Air Canvas", w as usize, h as usize)?;

    /* --- Hand source: external landmark process, or the mouse --- */
    let mut detector = match &config.detector_cmd {
        Some(cmd) => Some(SubprocessDetector::spawn(cmd, config.min_confidence)?),
        None => {
            tracing::info!("no detector configured, the mouse drives the hand");
            None
        }
    };

    /* --- The drawing session lives for the whole run --- */
    let mut session = Session::new(w as usize, h as usize, config.settings());

    let mut last_fps_time = Instant::now();
    let mut frames_this_second: u32 = 0;

    tracing::info!("air canvas started");

    /* ------------------------------ Main loop ------------------------------ */
    'frames: while drawer.is_open() {
        /* 1) Grab a fresh live frame. A dead camera ends the run. */
        let live = cam.next_frame()?;

        /* 2) Keyboard */
        for command in drawer.commands() {
            match command {
                Command::Quit => break 'frames,
                Command::Clear => {
                    session.clear_canvas();
                    tracing::info!("canvas cleared");
                }
                Command::Save => match session.save(&config.output_dir) {
                    Ok(path) => tracing::info!(path = %path.display(), "drawing saved"),
                    Err(e) => tracing::error!(error = %e, "save failed"),
                },
                Command::Color(name) => {
                    session.set_color(name);
                }
                Command::Brush(delta) => session.adjust_brush(delta),
            }
        }

        /* 3) Find the hand */
        let snapshot = match detector.as_mut() {
            Some(d) => d.detect(&live).unwrap_or_else(|e| {
                tracing::warn!(error = %e, "detection failed, treating frame as no hand");
                LandmarkSnapshot::empty()
            }),
            None => drawer
                .pointer_pose()
                .map_or_else(LandmarkSnapshot::empty, |(pose, tip)| synthetic_hand(pose, tip)),
        };

        /* 4) Gesture -> canvas, then composite and present */
        let report = session.process(&snapshot);
        let screen = session.render(&live, &report)?;
        drawer.present(&screen)?;

        /* 5) FPS counter (debug log once per second) */
        frames_this_second += 1;
        let now = Instant::now();
        if now.duration_since(last_fps_time) >= Duration::from_secs(1) {
            let secs = now.duration_since(last_fps_time).as_secs_f32();
            tracing::debug!(fps = frames_this_second as f32 / secs, "frame rate");
            frames_this_second = 0;
            last_fps_time = now;
        }
    }

    tracing::info!("exiting air canvas");
    Ok(())
}
