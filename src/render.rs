/// Frame rendering
///
/// One entry point, [`render_frame`], draws whichever screen the game is on.
/// Presenting the frame is left to the game loop.
///
/// # Architecture
///
/// - `GridSprite` trait: things that draw themselves onto grid cells
/// - `Backgrounds`: textures loaded once at startup and borrowed every frame
/// - Menu-like screens draw themselves (see [`crate::gui`])
use crate::food::Food;
use crate::game::{Game, GameState};
use crate::grid::Grid;
use crate::snake::Snake;
use crate::text::{TextStyle, draw_text};
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::{Canvas, Texture};
use sdl2::video::Window;

const HEAD_COLOR: Color = Color::RGB(0, 0, 255);
const HEAD_DOT_COLOR: Color = Color::RGB(255, 255, 255);
const BODY_COLOR: Color = Color::RGB(0, 255, 0);
const FOOD_COLOR: Color = Color::RGB(255, 0, 0);
const SCORE_STYLE: TextStyle = TextStyle::new(Color::RGB(255, 255, 255), 3);

/// Trait for play-field objects drawn cell by cell.
pub trait GridSprite {
    fn draw(&self, canvas: &mut Canvas<Window>, grid: &Grid) -> Result<(), String>;
}

impl GridSprite for Snake {
    fn draw(&self, canvas: &mut Canvas<Window>, grid: &Grid) -> Result<(), String> {
        for (i, segment) in self.segments().enumerate() {
            let rect = grid.cell_rect(*segment);

            if i == 0 {
                canvas.set_draw_color(HEAD_COLOR);
                canvas.fill_rect(rect)?;

                // Dot in the middle of the head
                canvas.set_draw_color(HEAD_DOT_COLOR);
                canvas.fill_rect(head_dot(rect))?;
            } else {
                canvas.set_draw_color(BODY_COLOR);
                canvas.fill_rect(rect)?;
            }
        }
        Ok(())
    }
}

impl GridSprite for Food {
    fn draw(&self, canvas: &mut Canvas<Window>, grid: &Grid) -> Result<(), String> {
        canvas.set_draw_color(FOOD_COLOR);
        canvas.fill_rect(grid.cell_rect(self.position))
    }
}

/// Quarter-size square centered in the head cell.
fn head_dot(cell: Rect) -> Rect {
    let size = (cell.width() / 4).max(1);
    let x = cell.x() + cell.width() as i32 / 2 - size as i32 / 2;
    let y = cell.y() + cell.height() as i32 / 2 - size as i32 / 2;
    Rect::new(x, y, size, size)
}

/// Full-screen art loaded at startup.
pub struct Backgrounds<'a> {
    pub main_menu: Texture<'a>,
    pub gameplay: Texture<'a>,
}

/// Draws the current screen. Does not present.
pub fn render_frame(
    canvas: &mut Canvas<Window>,
    game: &Game,
    backgrounds: &Backgrounds,
) -> Result<(), String> {
    match game.state() {
        GameState::MainMenu => game.ui().main_menu.render(canvas, &backgrounds.main_menu),
        GameState::Gameplay => render_gameplay(canvas, game, &backgrounds.gameplay),
        GameState::GameOver => game.ui().game_over.render(canvas, game.world().score()),
        GameState::Instructions => game.ui().instructions.render(canvas),
    }
}

fn render_gameplay(
    canvas: &mut Canvas<Window>,
    game: &Game,
    background: &Texture,
) -> Result<(), String> {
    let world = game.world();

    canvas.copy(background, None, None)?;
    world.snake().draw(canvas, world.grid())?;
    world.food().draw(canvas, world.grid())?;

    draw_text(canvas, &format!("Score: {}", world.score()), 10, 10, SCORE_STYLE)
}
