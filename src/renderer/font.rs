//! Tiny built-in bitmap font
//!
//! 5x7 glyphs, one byte per row (bit 4 is the leftmost column). Text is
//! emitted as filled rectangles, one per horizontal run of lit pixels, so it
//! goes through the same pipeline as everything else.

use glam::Vec2;

use super::shapes;
use super::vertex::Vertex;

pub const GLYPH_WIDTH: u32 = 5;
pub const GLYPH_HEIGHT: u32 = 7;
/// Blank columns between glyphs
const GLYPH_SPACING: u32 = 1;

type Glyph = [u8; GLYPH_HEIGHT as usize];

/// Look up a glyph. Lowercase letters map to uppercase; characters outside
/// the font return `None` and render as blank space.
pub fn glyph(c: char) -> Option<Glyph> {
    let g = match c.to_ascii_uppercase() {
        '0' => [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110],
        '1' => [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        '2' => [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b01000, 0b11111],
        '3' => [0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110],
        '4' => [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010],
        '5' => [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110],
        '6' => [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110],
        '7' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000],
        '8' => [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110],
        '9' => [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100],
        'A' => [0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'B' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10001, 0b10001, 0b11110],
        'C' => [0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110],
        'E' => [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111],
        'F' => [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000],
        'G' => [0b01110, 0b10001, 0b10000, 0b10111, 0b10001, 0b10001, 0b01111],
        'I' => [0b01110, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        'K' => [0b10001, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010, 0b10001],
        'L' => [0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b11111],
        'M' => [0b10001, 0b11011, 0b10101, 0b10101, 0b10001, 0b10001, 0b10001],
        'N' => [0b10001, 0b10001, 0b11001, 0b10101, 0b10011, 0b10001, 0b10001],
        'O' => [0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'R' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001],
        'S' => [0b01111, 0b10000, 0b10000, 0b01110, 0b00001, 0b00001, 0b11110],
        'T' => [0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100],
        'V' => [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100],
        ':' => [0b00000, 0b01100, 0b01100, 0b00000, 0b01100, 0b01100, 0b00000],
        ' ' => [0; GLYPH_HEIGHT as usize],
        _ => return None,
    };
    Some(g)
}

/// Size of `text` in pixels at the given scale (pixels per font dot)
pub fn text_size(text: &str, scale: f32) -> Vec2 {
    let chars = text.chars().count() as u32;
    if chars == 0 {
        return Vec2::ZERO;
    }
    let columns = chars * (GLYPH_WIDTH + GLYPH_SPACING) - GLYPH_SPACING;
    Vec2::new(columns as f32 * scale, GLYPH_HEIGHT as f32 * scale)
}

/// Vertices for `text` with its top-left corner at `origin`
pub fn text(text: &str, origin: Vec2, scale: f32, color: [f32; 4]) -> Vec<Vertex> {
    let mut vertices = Vec::new();
    let advance = (GLYPH_WIDTH + GLYPH_SPACING) as f32 * scale;

    for (i, c) in text.chars().enumerate() {
        let Some(rows) = glyph(c) else {
            continue;
        };
        let glyph_origin = origin + Vec2::new(i as f32 * advance, 0.0);

        for (row, bits) in rows.iter().enumerate() {
            let y = glyph_origin.y + row as f32 * scale;
            let mut col = 0;
            while col < GLYPH_WIDTH {
                if !lit(*bits, col) {
                    col += 1;
                    continue;
                }
                let start = col;
                while col < GLYPH_WIDTH && lit(*bits, col) {
                    col += 1;
                }
                let run = (col - start) as f32;
                vertices.extend(shapes::rect(
                    Vec2::new(glyph_origin.x + start as f32 * scale, y),
                    Vec2::new(run * scale, scale),
                    color,
                ));
            }
        }
    }

    vertices
}

#[inline]
fn lit(bits: u8, col: u32) -> bool {
    bits & (1 << (GLYPH_WIDTH - 1 - col)) != 0
}
