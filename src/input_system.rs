use crate::game::GameState;
use crate::snake::Heading;
use sdl2::EventPump;
use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::mouse::MouseButton;

/// Actions the player can perform
///
/// This enum represents every high-level action input can trigger. It
/// decouples SDL2 events from the state machine that reacts to them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Arrow key during play
    Steer(Heading),
    /// Left mouse button pressed at (x, y)
    LeftClick(i32, i32),
    /// Enter on the main menu
    StartGame,
    /// Escape on the instructions screen
    Back,
    /// Window closed
    Quit,
}

/// InputSystem processes SDL2 events and produces GameActions
///
/// Keyboard handling depends on the active screen, so the context is
/// refreshed from the [`GameState`] before each poll:
///
/// 1. `update_context()` with the current state
/// 2. `drain_events()` empties the SDL2 queue without blocking
/// 3. Each action goes to the state machine, whose new state becomes the
///    context for the next event
pub struct InputSystem {
    /// Screen whose key bindings are active
    pub context: GameState,
}

impl InputSystem {
    /// Creates a new InputSystem starting on the main menu
    pub fn new() -> Self {
        InputSystem {
            context: GameState::MainMenu,
        }
    }

    pub fn update_context(&mut self, state: GameState) {
        self.context = state;
    }

    /// Translates one SDL2 event under the current context.
    pub fn translate(&self, event: &Event) -> Option<GameAction> {
        match *event {
            Event::Quit { .. } => Some(GameAction::Quit),
            Event::KeyDown {
                keycode: Some(key), ..
            } => self.handle_keydown(key),
            Event::MouseButtonDown {
                mouse_btn, x, y, ..
            } => self.handle_mouse_down(mouse_btn, x, y),
            _ => {
                // Motion is sampled once per frame instead
                None
            }
        }
    }

    /// Drains every pending SDL2 event, mapping each one under the context
    /// left behind by the action before it.
    pub fn drain_events<F>(&mut self, event_pump: &mut EventPump, mut dispatch: F)
    where
        F: FnMut(GameAction) -> GameState,
    {
        for event in event_pump.poll_iter() {
            if let Some(action) = self.translate(&event) {
                let state = dispatch(action);
                self.update_context(state);
            }
        }
    }

    /// Routes key presses to context-specific handlers.
    fn handle_keydown(&self, key: Keycode) -> Option<GameAction> {
        match self.context {
            GameState::Gameplay => self.handle_gameplay_keys(key),
            GameState::MainMenu => self.handle_main_menu_keys(key),
            GameState::Instructions => self.handle_instructions_keys(key),
            GameState::GameOver => None, // Mouse only
        }
    }

    fn handle_gameplay_keys(&self, key: Keycode) -> Option<GameAction> {
        let heading = match key {
            Keycode::Up => Heading::Up,
            Keycode::Down => Heading::Down,
            Keycode::Left => Heading::Left,
            Keycode::Right => Heading::Right,
            _ => return None,
        };
        Some(GameAction::Steer(heading))
    }

    fn handle_main_menu_keys(&self, key: Keycode) -> Option<GameAction> {
        match key {
            Keycode::Return | Keycode::KpEnter => Some(GameAction::StartGame),
            _ => None,
        }
    }

    fn handle_instructions_keys(&self, key: Keycode) -> Option<GameAction> {
        (key == Keycode::Escape).then_some(GameAction::Back)
    }

    fn handle_mouse_down(&self, button: MouseButton, x: i32, y: i32) -> Option<GameAction> {
        (button == MouseButton::Left).then_some(GameAction::LeftClick(x, y))
    }
}

impl Default for InputSystem {
    fn default() -> Self {
        Self::new()
    }
}
