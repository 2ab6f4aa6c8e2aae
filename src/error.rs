use crate::config::ConfigError;
use std::fmt;

/// Errors that end the process
///
/// Every variant is fatal: the process logs it and exits with status 1.
#[derive(Debug)]
pub enum GameError {
    /// An SDL subsystem (core, video, image, audio, events) failed to start
    Subsystem { name: &'static str, reason: String },

    Window(String),

    Renderer(String),

    /// A draw call failed mid-frame
    Draw(String),

    /// Image file could not be loaded into a texture
    Texture { path: String, reason: String },

    /// Sound clip could not be loaded or no playback device opened
    Audio { path: String, reason: String },

    Config(ConfigError),
}

impl GameError {
    pub fn subsystem(name: &'static str) -> impl FnOnce(String) -> GameError {
        move |reason| GameError::Subsystem { name, reason }
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GameError::Subsystem { name, reason } => {
                write!(f, "{} initialization failed: {}", name, reason)
            }
            GameError::Window(reason) => write!(f, "Window creation failed: {}", reason),
            GameError::Renderer(reason) => write!(f, "Renderer creation failed: {}", reason),
            GameError::Draw(reason) => write!(f, "Rendering failed: {}", reason),
            GameError::Texture { path, reason } => {
                write!(f, "Unable to load image {}: {}", path, reason)
            }
            GameError::Audio { path, reason } => {
                write!(f, "Unable to load sound {}: {}", path, reason)
            }
            GameError::Config(e) => write!(f, "Configuration error: {}", e),
        }
    }
}

impl std::error::Error for GameError {}

impl From<ConfigError> for GameError {
    fn from(error: ConfigError) -> Self {
        GameError::Config(error)
    }
}

impl From<GameError> for String {
    fn from(error: GameError) -> Self {
        error.to_string()
    }
}
