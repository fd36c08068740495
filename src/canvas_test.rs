use super::*;
use crate::palette::RED;
use crate::types::rgb;

const W: usize = 200;
const H: usize = 150;

fn inked(c: &StrokeCanvas) -> Vec<(i32, i32)> {
    let fb = c.snapshot();
    (0..fb.height as i32)
        .flat_map(|y| (0..fb.width as i32).map(move |x| (x, y)))
        .filter(|&(x, y)| fb.get(x, y) != Some(BACKGROUND))
        .collect()
}

// =============================================================
// append_segment / clear
// =============================================================

#[test]
fn new_canvas_is_blank() {
    let c = StrokeCanvas::new(W, H);
    assert!(c.is_blank());
    assert_eq!(c.dimensions(), (W, H));
}

#[test]
fn consecutive_segments_form_one_stroke() {
    let mut c = StrokeCanvas::new(W, H);
    c.append_segment(Point::new(100, 100), Point::new(110, 100), RED, 1);
    c.append_segment(Point::new(110, 100), Point::new(120, 100), RED, 1);

    let ink = inked(&c);
    let expected: Vec<(i32, i32)> = (100..=120).map(|x| (x, 100)).collect();
    assert_eq!(ink, expected);
}

#[test]
fn thick_consecutive_segments_have_no_gap() {
    let mut c = StrokeCanvas::new(W, H);
    c.append_segment(Point::new(100, 100), Point::new(110, 100), RED, 15);
    c.append_segment(Point::new(110, 100), Point::new(120, 100), RED, 15);
    for x in 93..=127 {
        assert_eq!(c.snapshot().get(x, 100), Some(RED), "x = {x}");
    }
}

#[test]
fn clear_resets_everything() {
    let mut c = StrokeCanvas::new(W, H);
    c.append_segment(Point::new(10, 10), Point::new(150, 120), RED, 9);
    assert!(!c.is_blank());
    c.clear();
    assert!(c.is_blank());
}

#[test]
fn clear_is_idempotent() {
    let mut once = StrokeCanvas::new(W, H);
    once.append_segment(Point::new(10, 10), Point::new(50, 50), RED, 5);
    once.clear();

    let mut twice = StrokeCanvas::new(W, H);
    twice.append_segment(Point::new(10, 10), Point::new(50, 50), RED, 5);
    twice.clear();
    twice.clear();

    assert_eq!(once.snapshot(), twice.snapshot());
    assert_eq!(twice.snapshot(), &FrameBuffer::blank(W, H));
}

#[test]
fn eraser_paints_background_over_ink() {
    let mut c = StrokeCanvas::new(W, H);
    c.append_segment(Point::new(20, 50), Point::new(180, 50), RED, 5);
    c.append_segment(Point::new(10, 50), Point::new(190, 50), BACKGROUND, 50);
    assert!(c.is_blank());
}

// =============================================================
// composite_onto
// =============================================================

#[test]
fn blank_canvas_passes_camera_through() {
    let c = StrokeCanvas::new(W, H);
    let cam = FrameBuffer::filled(W, H, rgb(40, 90, 160));
    assert_eq!(c.composite_onto(&cam).map_err(|e| e.to_string()), Ok(cam));
}

#[test]
fn red_segment_replaces_exactly_its_pixels() {
    let mut c = StrokeCanvas::new(W, H);
    c.append_segment(Point::new(30, 40), Point::new(160, 90), RED, 7);
    let cam = FrameBuffer::filled(W, H, rgb(40, 90, 160));

    let Ok(out) = c.composite_onto(&cam) else {
        panic!("same-size composite failed");
    };
    let ink = c.snapshot();
    let mut changed = 0;
    for i in 0..out.pixels.len() {
        if ink.pixels[i] == RED {
            assert_eq!(out.pixels[i], RED);
            changed += 1;
        } else {
            assert_eq!(out.pixels[i], cam.pixels[i]);
        }
    }
    assert_eq!(changed, inked(&c).len());
    assert!(changed > 0);
}

#[test]
fn near_black_ink_is_below_mask_threshold() {
    let mut c = StrokeCanvas::new(W, H);
    let dim = rgb(10, 10, 10);
    c.append_segment(Point::new(5, 5), Point::new(5, 5), dim, 1);
    let cam = FrameBuffer::filled(W, H, rgb(0x80, 0x80, 0x80));
    let Ok(out) = c.composite_onto(&cam) else {
        panic!("same-size composite failed");
    };
    // Not masked out, just OR-ed in.
    assert_eq!(out.get(5, 5), Some(rgb(0x8A, 0x8A, 0x8A)));
}

#[test]
fn size_mismatch_is_an_error() {
    let c = StrokeCanvas::new(W, H);
    let cam = FrameBuffer::blank(W + 1, H);
    match c.composite_onto(&cam) {
        Err(Error::FrameSize { expected, actual }) => {
            assert_eq!(expected, (W, H));
            assert_eq!(actual, (W + 1, H));
        }
        other => panic!("expected FrameSize, got {other:?}"),
    }
}

// =============================================================
// Export
// =============================================================

#[test]
fn to_image_keeps_colors() {
    let mut c = StrokeCanvas::new(W, H);
    c.append_segment(Point::new(3, 4), Point::new(3, 4), RED, 1);
    let img = c.to_image();
    assert_eq!(img.dimensions(), (W as u32, H as u32));
    assert_eq!(img.get_pixel(3, 4), &Rgb([255, 0, 0]));
    assert_eq!(img.get_pixel(0, 0), &Rgb([0, 0, 0]));
}

#[test]
fn save_png_writes_timestamped_file() {
    let dir = std::env::temp_dir().join(format!("air-canvas-save-{}", std::process::id()));
    let mut c = StrokeCanvas::new(W, H);
    c.append_segment(Point::new(10, 10), Point::new(60, 60), RED, 5);

    let path = match c.save_png(&dir) {
        Ok(p) => p,
        Err(e) => panic!("save failed: {e}"),
    };
    let name = path.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default();
    assert!(name.starts_with("drawing_") && name.ends_with(".png"), "{name}");

    let reloaded = match image::open(&path) {
        Ok(img) => img.to_rgb8(),
        Err(e) => panic!("reload failed: {e}"),
    };
    assert_eq!(reloaded, c.to_image());
    assert!(!c.is_blank());

    std::fs::remove_dir_all(&dir).unwrap_or_default();
}

#[test]
fn save_failure_leaves_canvas_alone() {
    // A file where the directory should be.
    let blocker = std::env::temp_dir().join(format!("air-canvas-blocker-{}", std::process::id()));
    std::fs::write(&blocker, b"x").unwrap_or_default();

    let mut c = StrokeCanvas::new(W, H);
    c.append_segment(Point::new(10, 10), Point::new(60, 60), RED, 5);
    let before = c.snapshot().clone();

    assert!(c.save_png(&blocker).is_err());
    assert_eq!(c.snapshot(), &before);

    std::fs::remove_file(&blocker).unwrap_or_default();
}
