//! Stroked vector glyphs for the few characters the board draws: ball
//! numbers and the table-size label. Eight fixed segments in a unit box
//! (y down), combined per character.

use glam::Vec2;

use crate::render::canvas::{Canvas, Rgba};

const SEG_TOP: u8 = 1 << 0;
const SEG_TOP_LEFT: u8 = 1 << 1;
const SEG_TOP_RIGHT: u8 = 1 << 2;
const SEG_MID: u8 = 1 << 3;
const SEG_BOT_LEFT: u8 = 1 << 4;
const SEG_BOT_RIGHT: u8 = 1 << 5;
const SEG_BOTTOM: u8 = 1 << 6;
/// Center vertical, for 'T'.
const SEG_STEM: u8 = 1 << 7;

/// Horizontal advance between characters, in glyph heights.
const ADVANCE: f32 = 0.8;

fn segments(c: char) -> Option<u8> {
    let mask = match c {
        '0' => SEG_TOP | SEG_TOP_LEFT | SEG_TOP_RIGHT | SEG_BOT_LEFT | SEG_BOT_RIGHT | SEG_BOTTOM,
        '1' => SEG_TOP_RIGHT | SEG_BOT_RIGHT,
        '2' => SEG_TOP | SEG_TOP_RIGHT | SEG_MID | SEG_BOT_LEFT | SEG_BOTTOM,
        '3' => SEG_TOP | SEG_TOP_RIGHT | SEG_MID | SEG_BOT_RIGHT | SEG_BOTTOM,
        '4' => SEG_TOP_LEFT | SEG_TOP_RIGHT | SEG_MID | SEG_BOT_RIGHT,
        '5' => SEG_TOP | SEG_TOP_LEFT | SEG_MID | SEG_BOT_RIGHT | SEG_BOTTOM,
        '6' => SEG_TOP | SEG_TOP_LEFT | SEG_MID | SEG_BOT_LEFT | SEG_BOT_RIGHT | SEG_BOTTOM,
        '7' => SEG_TOP | SEG_TOP_RIGHT | SEG_BOT_RIGHT,
        '8' => {
            SEG_TOP | SEG_TOP_LEFT | SEG_TOP_RIGHT | SEG_MID | SEG_BOT_LEFT | SEG_BOT_RIGHT
                | SEG_BOTTOM
        }
        '9' => SEG_TOP | SEG_TOP_LEFT | SEG_TOP_RIGHT | SEG_MID | SEG_BOT_RIGHT | SEG_BOTTOM,
        'F' => SEG_TOP | SEG_TOP_LEFT | SEG_MID | SEG_BOT_LEFT,
        'T' => SEG_TOP | SEG_STEM,
        _ => return None,
    };
    Some(mask)
}

/// Endpoints of a segment in the unit glyph box.
fn endpoints(seg: u8) -> ([f32; 2], [f32; 2]) {
    match seg {
        SEG_TOP => ([0.15, 0.05], [0.85, 0.05]),
        SEG_TOP_LEFT => ([0.15, 0.05], [0.15, 0.5]),
        SEG_TOP_RIGHT => ([0.85, 0.05], [0.85, 0.5]),
        SEG_MID => ([0.15, 0.5], [0.85, 0.5]),
        SEG_BOT_LEFT => ([0.15, 0.5], [0.15, 0.95]),
        SEG_BOT_RIGHT => ([0.85, 0.5], [0.85, 0.95]),
        SEG_BOTTOM => ([0.15, 0.95], [0.85, 0.95]),
        _ => ([0.5, 0.05], [0.5, 0.95]), // SEG_STEM
    }
}

/// Width of rendered text in canvas units for a glyph height of `size`.
pub fn text_width(text: &str, size: f32) -> f32 {
    text.chars().count() as f32 * ADVANCE * size
}

/// Stroke `text` with its top-left corner at `pos`. Characters without a
/// glyph (spaces included) advance silently.
pub fn draw_text(canvas: &mut Canvas, text: &str, pos: Vec2, size: f32, stroke: f32, color: Rgba) {
    let mut cursor = pos;
    for c in text.chars() {
        if let Some(mask) = segments(c) {
            for bit in 0..8u8 {
                let seg = 1 << bit;
                if mask & seg != 0 {
                    let (a, b) = endpoints(seg);
                    canvas.stroke_polyline(
                        &[
                            cursor + Vec2::new(a[0], a[1]) * size,
                            cursor + Vec2::new(b[0], b[1]) * size,
                        ],
                        stroke,
                        color,
                    );
                }
            }
        }
        cursor.x += ADVANCE * size;
    }
}

/// Stroke `text` centered on `center`.
pub fn draw_text_centered(
    canvas: &mut Canvas,
    text: &str,
    center: Vec2,
    size: f32,
    stroke: f32,
    color: Rgba,
) {
    let origin = center - Vec2::new(text_width(text, size) / 2.0, size / 2.0);
    draw_text(canvas, text, origin, size, stroke, color);
}
