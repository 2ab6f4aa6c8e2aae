use clap::Parser;
use env_logger::Env;
use log::{error, info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;
use sdl2::EventPump;
use sdl2::image::LoadTexture;
use sdl2::pixels::Color;
use sdl2::render::{Canvas, TextureCreator};
use sdl2::video::{Window, WindowContext};
use std::process::ExitCode;
use std::time::Instant;

mod audio;
mod cli;
mod collision;
mod config;
mod error;
mod food;
mod game;
mod grid;
mod gui;
mod input_system;
mod render;
mod snake;
mod text;
mod timing;

use audio::SoundEffect;
use cli::Args;
use config::GameConfig;
use error::GameError;
use game::Game;
use input_system::InputSystem;
use render::{Backgrounds, render_frame};
use timing::{FRAME_INTERVAL, Pacing, TickClock};

/// Generic texture loading helper
///
/// Loads a texture from the given path; a missing or unreadable image is fatal.
fn load_texture<'a>(
    texture_creator: &'a TextureCreator<WindowContext>,
    path: &str,
) -> Result<sdl2::render::Texture<'a>, GameError> {
    texture_creator
        .load_texture(path)
        .map_err(|reason| GameError::Texture {
            path: path.to_string(),
            reason,
        })
}

/// Config file, then command line flags on top.
fn load_config(args: &Args) -> Result<GameConfig, GameError> {
    let (mut config, source) = GameConfig::load(args.config.as_deref())?;
    args.apply(&mut config)?;
    info!("Configuration: {}", source);
    Ok(config)
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

/// Acquires every SDL resource, then hands off to the game loop.
///
/// Resources are plain owned values, so they are released in reverse order
/// on every return path, including early `?` exits.
fn run(args: &Args) -> Result<(), GameError> {
    let config = load_config(args)?;

    let sdl_context = sdl2::init().map_err(GameError::subsystem("SDL"))?;
    let video_subsystem = sdl_context.video().map_err(GameError::subsystem("SDL video"))?;
    let audio_subsystem = sdl_context.audio().map_err(GameError::subsystem("SDL audio"))?;
    let codecs = config.assets.image_codecs();
    let _image_context = if codecs.is_empty() {
        None
    } else {
        Some(sdl2::image::init(codecs).map_err(GameError::subsystem("SDL_image"))?)
    };

    let window = video_subsystem
        .window(&config.window_title, config.screen_width, config.screen_height)
        .position_centered()
        .build()
        .map_err(|e| GameError::Window(e.to_string()))?;

    let mut canvas = window
        .into_canvas()
        .accelerated()
        .present_vsync()
        .build()
        .map_err(|e| GameError::Renderer(e.to_string()))?;

    info!("Window: {}x{}", config.screen_width, config.screen_height);

    let texture_creator = canvas.texture_creator();
    let backgrounds = Backgrounds {
        main_menu: load_texture(&texture_creator, &config.assets.main_menu_background)?,
        gameplay: load_texture(&texture_creator, &config.assets.gameplay_background)?,
    };
    let eat_sound = SoundEffect::load(&audio_subsystem, &config.assets.eat_sound)?;

    let mut event_pump = sdl_context.event_pump().map_err(GameError::subsystem("SDL events"))?;

    let rng = match config.seed {
        Some(seed) => {
            info!("Food placement seed: {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };
    let mut game = Game::new(&config, rng);

    game_loop(&mut canvas, &mut event_pump, &mut game, &backgrounds, &eat_sound, &config)?;

    info!("Goodbye");
    Ok(())
}

/// One iteration per frame: drain input, sample the cursor, update, draw,
/// present, sleep.
fn game_loop(
    canvas: &mut Canvas<Window>,
    event_pump: &mut EventPump,
    game: &mut Game,
    backgrounds: &Backgrounds,
    eat_sound: &SoundEffect,
    config: &GameConfig,
) -> Result<(), GameError> {
    let mut input = InputSystem::new();
    let mut clock = TickClock::new(config.speed);
    let tick_delay = clock.step();
    let mut last_frame = Instant::now();

    info!("Pacing: {:?}, {:?} per tick", config.pacing, tick_delay);

    while game.is_running() {
        input.update_context(game.state());
        input.drain_events(event_pump, |action| {
            game.handle_action(&action);
            game.state()
        });
        if !game.is_running() {
            break;
        }

        let mouse = event_pump.mouse_state();
        game.update_hover(mouse.x(), mouse.y());

        let ticks = match config.pacing {
            Pacing::FixedDelay => 1,
            Pacing::Accumulator => {
                let now = Instant::now();
                let due = clock.accumulate(now - last_frame);
                last_frame = now;
                due
            }
        };

        for _ in 0..ticks {
            let ate_food = game.update().is_some_and(|report| report.ate_food);
            if ate_food {
                if let Err(e) = eat_sound.play() {
                    warn!("Could not play eat sound: {}", e);
                }
            }
        }

        canvas.set_draw_color(Color::RGB(0, 0, 0));
        canvas.clear();
        render_frame(canvas, game, backgrounds).map_err(GameError::Draw)?;
        canvas.present();

        std::thread::sleep(match config.pacing {
            Pacing::FixedDelay => tick_delay,
            Pacing::Accumulator => FRAME_INTERVAL,
        });
    }

    Ok(())
}
