// Software drawing into a FrameBuffer.
// Visual effects provided here:
// 1) Thin and thick lines (thick ones get round ends, like a felt pen).
// 2) Filled/outlined rectangles and discs for the palette and cursor.
// 3) A tiny 5x7 bitmap font to render HUD text on top of the video.

#[cfg(test)]
#[path = "raster_test.rs"]
mod raster_test;

use crate::types::{FrameBuffer, Point};

/// Put a pixel on the framebuffer if (x,y) is inside bounds.
/// Visual: the exact pixel at (x,y) changes color.
#[inline]
pub fn put_pixel(fb: &mut FrameBuffer, x: i32, y: i32, color: u32) {
    if x < 0 || y < 0 {
        return;
    }
    let (x, y) = (x as usize, y as usize);
    if x >= fb.width || y >= fb.height {
        return;
    }
    let idx = y * fb.width + x;
    fb.pixels[idx] = color;
}

/// Draw a thin line between two points using Bresenham.
/// Visual: a straight 1-pixel line appears on top of the image.
pub fn draw_line(fb: &mut FrameBuffer, from: Point, to: Point, color: u32) {
    let (mut x0, mut y0, x1, y1) = (from.x, from.y, to.x, to.y);
    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;
    loop {
        put_pixel(fb, x0, y0, color);
        if x0 == x1 && y0 == y1 { break; }
        let e2 = 2 * err;
        if e2 >= dy { err += dy; x0 += sx; }
        if e2 <= dx { err += dx; y0 += sy; }
    }
}

/// Draw a line `thickness` pixels wide with round ends.
///
/// Every pixel whose centre lies within `thickness / 2` of the segment is set.
/// The half-width never drops below 0.5 so a 1px line stays connected.
/// Visual: consecutive segments sharing an endpoint merge into one stroke.
pub fn draw_thick_line(fb: &mut FrameBuffer, from: Point, to: Point, color: u32, thickness: u32) {
    if fb.width == 0 || fb.height == 0 {
        return;
    }
    let r = (thickness as f32 / 2.0).max(0.5);
    let r2 = r * r;
    let (x0, y0) = (from.x as f32, from.y as f32);
    let (x1, y1) = (to.x as f32, to.y as f32);
    let (dx, dy) = (x1 - x0, y1 - y0);
    let len2 = dx * dx + dy * dy;

    // Bounding box of the capsule, clipped to the frame.
    let min_x = ((x0.min(x1) - r).floor() as i32).max(0);
    let max_x = ((x0.max(x1) + r).ceil() as i32).min(fb.width as i32 - 1);
    let min_y = ((y0.min(y1) - r).floor() as i32).max(0);
    let max_y = ((y0.max(y1) + r).ceil() as i32).min(fb.height as i32 - 1);

    for y in min_y..=max_y {
        for x in min_x..=max_x {
            let (px, py) = (x as f32, y as f32);
            let t = if len2 > 0.0 {
                (((px - x0) * dx + (py - y0) * dy) / len2).clamp(0.0, 1.0)
            } else {
                0.0
            };
            let (ex, ey) = (px - (x0 + t * dx), py - (y0 + t * dy));
            if ex * ex + ey * ey <= r2 {
                fb.pixels[y as usize * fb.width + x as usize] = color;
            }
        }
    }
}

/// Filled disc of `radius` pixels centred at `c`.
pub fn fill_disc(fb: &mut FrameBuffer, c: Point, radius: i32, color: u32) {
    let r2 = radius * radius;
    for y in -radius..=radius {
        for x in -radius..=radius {
            if x * x + y * y <= r2 {
                put_pixel(fb, c.x + x, c.y + y, color);
            }
        }
    }
}

/// Filled rectangle covering x0..=x1, y0..=y1.
pub fn fill_rect(fb: &mut FrameBuffer, x0: i32, y0: i32, x1: i32, y1: i32, color: u32) {
    let (x0, x1) = (x0.max(0), x1.min(fb.width as i32 - 1));
    let (y0, y1) = (y0.max(0), y1.min(fb.height as i32 - 1));
    for y in y0..=y1 {
        let row = y as usize * fb.width;
        for x in x0..=x1 {
            fb.pixels[row + x as usize] = color;
        }
    }
}

/// Rectangle outline `thickness` pixels wide, drawn inward from the edges.
pub fn stroke_rect(
    fb: &mut FrameBuffer,
    x0: i32,
    y0: i32,
    x1: i32,
    y1: i32,
    thickness: i32,
    color: u32,
) {
    let t = thickness.max(1) - 1;
    fill_rect(fb, x0, y0, x1, y0 + t, color); // top
    fill_rect(fb, x0, y1 - t, x1, y1, color); // bottom
    fill_rect(fb, x0, y0, x0 + t, y1, color); // left
    fill_rect(fb, x1 - t, y0, x1, y1, color); // right
}

/// Draw a small crosshair centered at `c`.
/// Visual: a "+" shape (with a tiny gap at the center).
pub fn draw_crosshair(fb: &mut FrameBuffer, c: Point, size: i32, color: u32) {
    draw_line(fb, Point::new(c.x - size, c.y), Point::new(c.x - 2, c.y), color);
    draw_line(fb, Point::new(c.x + 2, c.y), Point::new(c.x + size, c.y), color);
    draw_line(fb, Point::new(c.x, c.y - size), Point::new(c.x, c.y - 2), color);
    draw_line(fb, Point::new(c.x, c.y + 2), Point::new(c.x, c.y + size), color);
    put_pixel(fb, c.x, c.y, color);
}

/* ---------- 5x7 bitmap font (digits, A-Z, a little punctuation) ---------- */

/// Return a 5x7 glyph bitmap. Lower-case letters use the upper-case shape.
/// Each u8 is a row; the low 5 bits are the pixels (bit 4 = leftmost).
fn glyph5x7(ch: char) -> Option<[u8; 7]> {
    macro_rules! g { ($a:expr,$b:expr,$c:expr,$d:expr,$e:expr,$f:expr,$g:expr) => {
        Some([$a,$b,$c,$d,$e,$f,$g])
    }; }

    match ch.to_ascii_uppercase() {
        '0' => g!(0b01110,0b10001,0b10011,0b10101,0b11001,0b10001,0b01110),
        '1' => g!(0b00100,0b01100,0b00100,0b00100,0b00100,0b00100,0b01110),
        '2' => g!(0b01110,0b10001,0b00001,0b00010,0b00100,0b01000,0b11111),
        '3' => g!(0b11110,0b00001,0b00001,0b01110,0b00001,0b00001,0b11110),
        '4' => g!(0b00010,0b00110,0b01010,0b10010,0b11111,0b00010,0b00010),
        '5' => g!(0b11111,0b10000,0b11110,0b00001,0b00001,0b10001,0b01110),
        '6' => g!(0b00110,0b01000,0b10000,0b11110,0b10001,0b10001,0b01110),
        '7' => g!(0b11111,0b00001,0b00010,0b00100,0b01000,0b01000,0b01000),
        '8' => g!(0b01110,0b10001,0b10001,0b01110,0b10001,0b10001,0b01110),
        '9' => g!(0b01110,0b10001,0b10001,0b01111,0b00001,0b00010,0b01100),

        'A' => g!(0b01110,0b10001,0b10001,0b11111,0b10001,0b10001,0b10001),
        'B' => g!(0b11110,0b10001,0b10001,0b11110,0b10001,0b10001,0b11110),
        'C' => g!(0b01110,0b10001,0b10000,0b10000,0b10000,0b10001,0b01110),
        'D' => g!(0b11100,0b10010,0b10001,0b10001,0b10001,0b10010,0b11100),
        'E' => g!(0b11111,0b10000,0b10000,0b11110,0b10000,0b10000,0b11111),
        'F' => g!(0b11111,0b10000,0b10000,0b11110,0b10000,0b10000,0b10000),
        'G' => g!(0b01110,0b10001,0b10000,0b10111,0b10001,0b10001,0b01111),
        'H' => g!(0b10001,0b10001,0b10001,0b11111,0b10001,0b10001,0b10001),
        'I' => g!(0b01110,0b00100,0b00100,0b00100,0b00100,0b00100,0b01110),
        'J' => g!(0b00111,0b00010,0b00010,0b00010,0b00010,0b10010,0b01100),
        'K' => g!(0b10001,0b10010,0b10100,0b11000,0b10100,0b10010,0b10001),
        'L' => g!(0b10000,0b10000,0b10000,0b10000,0b10000,0b10000,0b11111),
        'M' => g!(0b10001,0b11011,0b10101,0b10101,0b10001,0b10001,0b10001),
        'N' => g!(0b10001,0b10001,0b11001,0b10101,0b10011,0b10001,0b10001),
        'O' => g!(0b01110,0b10001,0b10001,0b10001,0b10001,0b10001,0b01110),
        'P' => g!(0b11110,0b10001,0b10001,0b11110,0b10000,0b10000,0b10000),
        'Q' => g!(0b01110,0b10001,0b10001,0b10001,0b10101,0b10010,0b01101),
        'R' => g!(0b11110,0b10001,0b10001,0b11110,0b10100,0b10010,0b10001),
        'S' => g!(0b01111,0b10000,0b10000,0b01110,0b00001,0b00001,0b11110),
        'T' => g!(0b11111,0b00100,0b00100,0b00100,0b00100,0b00100,0b00100),
        'U' => g!(0b10001,0b10001,0b10001,0b10001,0b10001,0b10001,0b01110),
        'V' => g!(0b10001,0b10001,0b10001,0b10001,0b10001,0b01010,0b00100),
        'W' => g!(0b10001,0b10001,0b10001,0b10101,0b10101,0b10101,0b01010),
        'X' => g!(0b10001,0b10001,0b01010,0b00100,0b01010,0b10001,0b10001),
        'Y' => g!(0b10001,0b10001,0b01010,0b00100,0b00100,0b00100,0b00100),
        'Z' => g!(0b11111,0b00001,0b00010,0b00100,0b01000,0b10000,0b11111),

        ' ' => g!(0b00000,0b00000,0b00000,0b00000,0b00000,0b00000,0b00000),
        '|' => g!(0b00100,0b00100,0b00100,0b00100,0b00100,0b00100,0b00100),
        ':' => g!(0b00000,0b00100,0b00000,0b00000,0b00100,0b00000,0b00000),
        '.' => g!(0b00000,0b00000,0b00000,0b00000,0b00000,0b00100,0b00000),
        '-' => g!(0b00000,0b00000,0b00000,0b11111,0b00000,0b00000,0b00000),
        '+' => g!(0b00000,0b00100,0b00100,0b11111,0b00100,0b00100,0b00000),

        _ => None,
    }
}

/// Width in pixels of `text` at `scale` (5px glyph + 1px gap per char).
pub fn text_width(text: &str, scale: i32) -> i32 {
    text.chars().count() as i32 * 6 * scale
}

/// Draw a single 5x7 character at (x,y), each font pixel a `scale` x `scale` block.
/// Visual: the glyph gets a 1-block black shadow for contrast, unless the glyph itself is black.
fn draw_char_5x7(fb: &mut FrameBuffer, x: i32, y: i32, ch: char, color: u32, scale: i32) {
    let Some(rows) = glyph5x7(ch) else { return };
    let s = scale.max(1);

    let mut pass = |ox: i32, oy: i32, c: u32| {
        for (ry, rowbits) in rows.iter().enumerate() {
            for rx in 0..5 {
                if (*rowbits >> (4 - rx)) & 1 != 0 {
                    let px = x + ox + rx * s;
                    let py = y + oy + ry as i32 * s;
                    fill_rect(fb, px, py, px + s - 1, py + s - 1, c);
                }
            }
        }
    };

    if color != 0 {
        pass(s, s, 0x00_00_00_00);
    }
    pass(0, 0, color);
}

/// Draw a text string using 5x7 glyphs.
/// Visual: a compact HUD string appears; unknown characters leave a gap.
pub fn draw_text(fb: &mut FrameBuffer, mut x: i32, y: i32, text: &str, color: u32, scale: i32) {
    for ch in text.chars() {
        draw_char_5x7(fb, x, y, ch, color, scale);
        x += 6 * scale.max(1);
    }
}
