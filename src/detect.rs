// The bridge to whatever finds hands in a frame.
//
// The landmark model is not part of this crate. `SubprocessDetector` talks to
// an external process over pipes: a binary frame goes in on stdin, one JSON
// line per frame comes back on stdout.
//
// Request:  width u32 LE | height u32 LE | channels u32 LE (=3) | RGB bytes
// Response: {"hands":[{"handedness":"Right","score":0.9,
//            "landmarks":[{"x":..,"y":..}, ...]}],"error":null}
//
// Landmarks are normalized to [0,1]; the first hand at or above the
// confidence threshold is used.

#[cfg(test)]
#[path = "detect_test.rs"]
mod detect_test;

use std::io::{BufRead, BufReader, Write};
use std::process::{Child, ChildStdin, ChildStdout, Command, Stdio};

use serde::Deserialize;

use crate::error::Error;
use crate::landmarks::{HAND_POINTS, LandmarkSnapshot};
use crate::types::{FrameBuffer, channels};

/// Finds at most one hand per frame.
pub trait HandDetector {
    fn detect(&mut self, frame: &FrameBuffer) -> Result<LandmarkSnapshot, Error>;
}

/// Never sees a hand.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoHand;

impl HandDetector for NoHand {
    fn detect(&mut self, _frame: &FrameBuffer) -> Result<LandmarkSnapshot, Error> {
        Ok(LandmarkSnapshot::empty())
    }
}

#[derive(Deserialize, Debug)]
struct LandmarkJson {
    x: f32,
    y: f32,
}

#[derive(Deserialize, Debug)]
struct HandJson {
    #[serde(default)]
    handedness: String,
    score: f32,
    landmarks: Vec<LandmarkJson>,
}

#[derive(Deserialize, Debug)]
struct DetectionResult {
    #[serde(default)]
    hands: Vec<HandJson>,
    #[serde(default)]
    error: Option<String>,
}

/// Turn one response line into a snapshot for a `width` x `height` frame.
///
/// A detector-reported error, no confident hand, or a hand without exactly 21
/// points all mean "no hand". Only unparseable JSON is an error.
pub fn parse_response(
    line: &str,
    width: usize,
    height: usize,
    min_confidence: f32,
) -> Result<LandmarkSnapshot, Error> {
    let result: DetectionResult = serde_json::from_str(line.trim())
        .map_err(|e| Error::Detector(format!("bad response {:?}: {e}", line.trim())))?;

    if let Some(error) = result.error {
        tracing::warn!(%error, "detector reported an error");
        return Ok(LandmarkSnapshot::empty());
    }

    let Some(hand) = result.hands.into_iter().find(|h| h.score >= min_confidence) else {
        return Ok(LandmarkSnapshot::empty());
    };

    if hand.landmarks.len() != HAND_POINTS {
        tracing::warn!(count = hand.landmarks.len(), "expected {HAND_POINTS} landmarks");
        return Ok(LandmarkSnapshot::empty());
    }

    tracing::trace!(handedness = %hand.handedness, score = hand.score, "hand detected");
    let points: Vec<(f32, f32)> = hand.landmarks.iter().map(|lm| (lm.x, lm.y)).collect();
    Ok(LandmarkSnapshot::from_normalized(&points, width, height))
}

/// Pack a frame into the request format.
pub fn encode_request(frame: &FrameBuffer) -> Vec<u8> {
    let mut buf = Vec::with_capacity(12 + frame.pixels.len() * 3);
    buf.extend_from_slice(&(frame.width as u32).to_le_bytes());
    buf.extend_from_slice(&(frame.height as u32).to_le_bytes());
    buf.extend_from_slice(&3u32.to_le_bytes());
    for &px in &frame.pixels {
        let (r, g, b) = channels(px);
        buf.extend_from_slice(&[r, g, b]);
    }
    buf
}

/// Hand detector running as a child process.
pub struct SubprocessDetector {
    process: Child,
    stdin: ChildStdin,
    stdout: BufReader<ChildStdout>,
    min_confidence: f32,
}

impl SubprocessDetector {
    /// Start `command` (program and whitespace-separated arguments) and wait for its `READY` line.
    pub fn spawn(command: &str, min_confidence: f32) -> Result<Self, Error> {
        let mut parts = command.split_whitespace();
        let program = parts
            .next()
            .ok_or_else(|| Error::Detector("empty detector command".into()))?;

        tracing::info!(%command, "starting hand detector");
        let mut process = Command::new(program)
            .args(parts)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|e| Error::Detector(format!("spawn {program}: {e}")))?;

        let (Some(stdin), Some(stdout)) = (process.stdin.take(), process.stdout.take()) else {
            reap(&mut process);
            return Err(Error::Detector("detector pipes unavailable".into()));
        };

        // From here on a failed handshake drops `detector`, which reaps the child.
        let mut detector = Self {
            process,
            stdin,
            stdout: BufReader::new(stdout),
            min_confidence: min_confidence.clamp(0.0, 1.0),
        };
        detector.await_ready()?;

        tracing::info!("hand detector ready");
        Ok(detector)
    }

    fn await_ready(&mut self) -> Result<(), Error> {
        let mut ready = String::new();
        self.stdout
            .read_line(&mut ready)
            .map_err(|e| Error::Detector(format!("waiting for READY: {e}")))?;
        if ready.trim() != "READY" {
            return Err(Error::Detector(format!("expected READY, got {:?}", ready.trim())));
        }
        Ok(())
    }
}

/// Kill the child and collect its exit status.
fn reap(process: &mut Child) {
    if let Err(e) = process.kill() {
        tracing::debug!(error = %e, "detector already exited");
    }
    match process.wait() {
        Ok(status) => tracing::debug!(%status, "detector stopped"),
        Err(e) => tracing::warn!(error = %e, "could not reap detector"),
    }
}

impl HandDetector for SubprocessDetector {
    fn detect(&mut self, frame: &FrameBuffer) -> Result<LandmarkSnapshot, Error> {
        self.stdin
            .write_all(&encode_request(frame))
            .and_then(|()| self.stdin.flush())
            .map_err(|e| Error::Detector(format!("send frame: {e}")))?;

        let mut line = String::new();
        let n = self
            .stdout
            .read_line(&mut line)
            .map_err(|e| Error::Detector(format!("read response: {e}")))?;
        if n == 0 {
            return Err(Error::Detector("detector closed its output".into()));
        }

        parse_response(&line, frame.width, frame.height, self.min_confidence)
    }
}

impl Drop for SubprocessDetector {
    fn drop(&mut self) {
        reap(&mut self.process);
    }
}
