// One error type for the whole app.
// Every variant states *where* things went wrong.
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("window init error: {0}")]
    WindowInit(String), // Creating the window failed
    #[error("window update error: {0}")]
    WindowUpdate(String), // Updating the window buffer failed
    #[error("camera init error: {0}")]
    CameraInit(String), // Opening/starting the camera failed
    #[error("camera frame error: {0}")]
    CameraFrame(String), // Grabbing/decoding a frame failed
    #[error("hand detector error: {0}")]
    Detector(String), // Talking to the landmark process failed
    #[error("frame is {actual:?}, canvas is {expected:?}")]
    FrameSize { expected: (usize, usize), actual: (usize, usize) },
    #[error("could not save drawing to {}: {source}", path.display())]
    Save { path: PathBuf, source: image::ImageError },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
