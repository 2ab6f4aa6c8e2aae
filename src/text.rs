//! Bitmap text
//!
//! Text is rasterized from a built-in 5x7 glyph table as filled rectangles,
//! so drawing text needs no font file. Lowercase letters render as
//! uppercase; characters without a glyph render as a solid block.

use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

const GLYPH_COLUMNS: i32 = 5;
const GLYPH_ROWS: usize = 7;

/// Horizontal advance per character, in unscaled pixels (glyph + 1 gap).
pub const CHAR_ADVANCE: u32 = 6;

/// Each row is 5 bits wide, most significant bit on the left.
const GLYPHS: &[(char, [u8; GLYPH_ROWS])] = &[
    ('A', [0x0E, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11]),
    ('B', [0x1E, 0x11, 0x11, 0x1E, 0x11, 0x11, 0x1E]),
    ('C', [0x0E, 0x11, 0x10, 0x10, 0x10, 0x11, 0x0E]),
    ('D', [0x1E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x1E]),
    ('E', [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x1F]),
    ('F', [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x10]),
    ('G', [0x0E, 0x11, 0x10, 0x17, 0x11, 0x11, 0x0E]),
    ('H', [0x11, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11]),
    ('I', [0x1F, 0x04, 0x04, 0x04, 0x04, 0x04, 0x1F]),
    ('J', [0x07, 0x02, 0x02, 0x02, 0x02, 0x12, 0x0C]),
    ('K', [0x11, 0x12, 0x14, 0x18, 0x14, 0x12, 0x11]),
    ('L', [0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x1F]),
    ('M', [0x11, 0x1B, 0x15, 0x11, 0x11, 0x11, 0x11]),
    ('N', [0x11, 0x19, 0x15, 0x13, 0x11, 0x11, 0x11]),
    ('O', [0x0E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E]),
    ('P', [0x1E, 0x11, 0x11, 0x1E, 0x10, 0x10, 0x10]),
    ('Q', [0x0E, 0x11, 0x11, 0x11, 0x15, 0x12, 0x0D]),
    ('R', [0x1E, 0x11, 0x11, 0x1E, 0x14, 0x12, 0x11]),
    ('S', [0x0E, 0x11, 0x10, 0x0E, 0x01, 0x11, 0x0E]),
    ('T', [0x1F, 0x04, 0x04, 0x04, 0x04, 0x04, 0x04]),
    ('U', [0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E]),
    ('V', [0x11, 0x11, 0x11, 0x11, 0x11, 0x0A, 0x04]),
    ('W', [0x11, 0x11, 0x11, 0x11, 0x15, 0x1B, 0x11]),
    ('X', [0x11, 0x11, 0x0A, 0x04, 0x0A, 0x11, 0x11]),
    ('Y', [0x11, 0x11, 0x0A, 0x04, 0x04, 0x04, 0x04]),
    ('Z', [0x1F, 0x01, 0x02, 0x04, 0x08, 0x10, 0x1F]),
    ('0', [0x0E, 0x11, 0x13, 0x15, 0x19, 0x11, 0x0E]),
    ('1', [0x04, 0x0C, 0x04, 0x04, 0x04, 0x04, 0x0E]),
    ('2', [0x0E, 0x11, 0x01, 0x06, 0x08, 0x10, 0x1F]),
    ('3', [0x1F, 0x02, 0x04, 0x02, 0x01, 0x11, 0x0E]),
    ('4', [0x02, 0x06, 0x0A, 0x12, 0x1F, 0x02, 0x02]),
    ('5', [0x1F, 0x10, 0x1E, 0x01, 0x01, 0x11, 0x0E]),
    ('6', [0x06, 0x08, 0x10, 0x1E, 0x11, 0x11, 0x0E]),
    ('7', [0x1F, 0x01, 0x02, 0x04, 0x08, 0x08, 0x08]),
    ('8', [0x0E, 0x11, 0x11, 0x0E, 0x11, 0x11, 0x0E]),
    ('9', [0x0E, 0x11, 0x11, 0x0F, 0x01, 0x02, 0x0C]),
    (':', [0x00, 0x00, 0x04, 0x00, 0x04, 0x00, 0x00]),
    ('/', [0x01, 0x02, 0x02, 0x04, 0x08, 0x08, 0x10]),
    ('<', [0x02, 0x04, 0x08, 0x10, 0x08, 0x04, 0x02]),
    ('>', [0x08, 0x04, 0x02, 0x01, 0x02, 0x04, 0x08]),
    ('-', [0x00, 0x00, 0x00, 0x1F, 0x00, 0x00, 0x00]),
    ('+', [0x00, 0x04, 0x04, 0x1F, 0x04, 0x04, 0x00]),
    ('.', [0x00, 0x00, 0x00, 0x00, 0x00, 0x0C, 0x0C]),
    ('!', [0x04, 0x04, 0x04, 0x04, 0x04, 0x00, 0x04]),
    ('(', [0x02, 0x04, 0x08, 0x08, 0x08, 0x04, 0x02]),
    (')', [0x08, 0x04, 0x02, 0x02, 0x02, 0x04, 0x08]),
    (' ', [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]),
    (',', [0x00, 0x00, 0x00, 0x00, 0x0C, 0x04, 0x08]),
];

const MISSING_GLYPH: [u8; GLYPH_ROWS] = [0x1F; GLYPH_ROWS];

fn glyph(c: char) -> &'static [u8; GLYPH_ROWS] {
    let upper = c.to_ascii_uppercase();
    GLYPHS
        .iter()
        .find(|(key, _)| *key == upper)
        .map(|(_, rows)| rows)
        .unwrap_or(&MISSING_GLYPH)
}

/// Size and color for a run of text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub color: Color,
    /// 1 = 5x7 pixel glyphs, 2 = 10x14, and so on.
    pub scale: u32,
}

impl TextStyle {
    pub const fn new(color: Color, scale: u32) -> Self {
        TextStyle { color, scale }
    }
}

/// Width in pixels `text` occupies at `scale`.
pub fn text_width(text: &str, scale: u32) -> u32 {
    text.chars().count() as u32 * CHAR_ADVANCE * scale
}

/// Height in pixels of one line at `scale`.
pub fn text_height(scale: u32) -> u32 {
    GLYPH_ROWS as u32 * scale
}

/// Draws `text` with its top-left corner at (`x`, `y`).
pub fn draw_text(
    canvas: &mut Canvas<Window>,
    text: &str,
    x: i32,
    y: i32,
    style: TextStyle,
) -> Result<(), String> {
    canvas.set_draw_color(style.color);

    let pixel = style.scale as i32;
    let advance = (CHAR_ADVANCE * style.scale) as i32;

    for (i, c) in text.chars().enumerate() {
        if c == ' ' {
            continue;
        }
        let origin_x = x + i as i32 * advance;

        for (row, bits) in glyph(c).iter().enumerate() {
            for col in 0..GLYPH_COLUMNS {
                if (*bits >> (GLYPH_COLUMNS - 1 - col)) & 1 == 1 {
                    canvas.fill_rect(Rect::new(
                        origin_x + col * pixel,
                        y + row as i32 * pixel,
                        style.scale,
                        style.scale,
                    ))?;
                }
            }
        }
    }

    Ok(())
}

/// Draws `text` horizontally centered inside `bounds`, vertically centered too.
pub fn draw_text_centered(
    canvas: &mut Canvas<Window>,
    text: &str,
    bounds: Rect,
    style: TextStyle,
) -> Result<(), String> {
    let width = text_width(text, style.scale) as i32;
    let height = text_height(style.scale) as i32;
    let x = bounds.x() + (bounds.width() as i32 - width) / 2;
    let y = bounds.y() + (bounds.height() as i32 - height) / 2;
    draw_text(canvas, text, x, y, style)
}
