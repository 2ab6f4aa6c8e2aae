//! Instructions Screen
//!
//! Static how-to-play text. Escape returns to the main menu.

use crate::text::{TextStyle, draw_text};
use sdl2::pixels::Color;
use sdl2::render::Canvas;
use sdl2::video::Window;

pub const INSTRUCTION_LINES: [&str; 4] = [
    "1. Use arrow keys to move the snake.",
    "2. Eat food to grow the snake and gain points.",
    "3. Avoid colliding with the borders or yourself.",
    "4. Press ESC to return to the main menu.",
];

pub struct InstructionsScreen {
    title_x: i32,
}

impl InstructionsScreen {
    pub fn new(screen_width: u32) -> Self {
        InstructionsScreen {
            title_x: screen_width as i32 / 2 - 100,
        }
    }

    pub fn render(&self, canvas: &mut Canvas<Window>) -> Result<(), String> {
        let white = Color::RGB(255, 255, 255);

        canvas.set_draw_color(Color::RGB(0, 0, 0));
        canvas.clear();

        draw_text(canvas, "Instructions", self.title_x, 100, TextStyle::new(white, 4))?;

        for (i, line) in INSTRUCTION_LINES.iter().enumerate() {
            draw_text(canvas, line, 100, 200 + i as i32 * 50, TextStyle::new(white, 3))?;
        }

        Ok(())
    }
}
