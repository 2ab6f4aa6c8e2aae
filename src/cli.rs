//! Command line options layered over the config file.

use crate::config::{ConfigError, GameConfig};
use crate::timing::Pacing;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "snake-sdl", version, about = "Classic Snake on SDL2")]
pub struct Args {
    /// JSON config file to load instead of the default search path
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Seed for food placement, for reproducible rounds
    #[arg(long)]
    pub seed: Option<u64>,

    /// Gameplay ticks per second
    #[arg(long)]
    pub speed: Option<u32>,

    /// Render at 60 Hz and release ticks from an accumulator
    #[arg(long)]
    pub fixed_timestep: bool,
}

impl Args {
    /// Applies the flags on top of `config` and re-validates.
    pub fn apply(&self, config: &mut GameConfig) -> Result<(), ConfigError> {
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(speed) = self.speed {
            config.speed = speed;
        }
        if self.fixed_timestep {
            config.pacing = Pacing::Accumulator;
        }
        config.validate()
    }
}
