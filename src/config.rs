//! Game configuration
//!
//! Settings live in a JSON file; every field is optional and falls back to
//! the classic defaults (1080x680 window, 20px cells, speed 7).
//!
//! Lookup order:
//! 1. An explicit path (from `--config`), which must exist
//! 2. `<user config dir>/snake-sdl/config.json`
//! 3. `assets/config/game.json`
//! 4. Built-in defaults

use crate::food::FoodPlacement;
use crate::timing::{MAX_SPEED, Pacing};
use sdl2::image::InitFlag;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

pub const BUNDLED_CONFIG_PATH: &str = "assets/config/game.json";
const USER_CONFIG_DIR: &str = "snake-sdl";
const USER_CONFIG_FILE: &str = "config.json";

/// Error types for configuration loading
#[derive(Debug)]
pub enum ConfigError {
    IoError { path: PathBuf, source: std::io::Error },
    ParseError { path: PathBuf, source: serde_json::Error },
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::IoError { path, source } => {
                write!(f, "cannot read {}: {}", path.display(), source)
            }
            ConfigError::ParseError { path, source } => {
                write!(f, "cannot parse {}: {}", path.display(), source)
            }
            ConfigError::Invalid(msg) => write!(f, "invalid config: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Files the game loads at startup. Any failure to load one is fatal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetPaths {
    pub main_menu_background: String,
    pub gameplay_background: String,
    pub eat_sound: String,
}

impl Default for AssetPaths {
    fn default() -> Self {
        AssetPaths {
            main_menu_background: "assets/backgrounds/main_menu.bmp".to_string(),
            gameplay_background: "assets/backgrounds/gameplay.bmp".to_string(),
            eat_sound: "assets/sounds/eat.wav".to_string(),
        }
    }
}

impl AssetPaths {
    /// SDL_image codecs the background images need. BMP is built into SDL,
    /// so the bundled assets need none.
    pub fn image_codecs(&self) -> InitFlag {
        [&self.main_menu_background, &self.gameplay_background]
            .into_iter()
            .fold(InitFlag::empty(), |flags, path| flags | codec_for(path))
    }
}

fn codec_for(path: &str) -> InitFlag {
    let extension = Path::new(path)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());

    match extension.as_deref() {
        Some("png") => InitFlag::PNG,
        Some("jpg") | Some("jpeg") => InitFlag::JPG,
        Some("tif") | Some("tiff") => InitFlag::TIF,
        Some("webp") => InitFlag::WEBP,
        _ => InitFlag::empty(),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub window_title: String,
    pub screen_width: u32,
    pub screen_height: u32,
    /// Edge length of one grid cell in pixels
    pub cell_size: u32,
    pub initial_length: usize,
    /// Gameplay ticks per second
    pub speed: u32,
    pub points_per_food: u32,
    pub food_placement: FoodPlacement,
    pub pacing: Pacing,
    /// Fixed seed for food placement; random when absent
    pub seed: Option<u64>,
    pub assets: AssetPaths,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            window_title: "Snake Game".to_string(),
            screen_width: 1080,
            screen_height: 680,
            cell_size: 20,
            initial_length: 3,
            speed: 7,
            points_per_food: 10,
            food_placement: FoodPlacement::default(),
            pacing: Pacing::default(),
            seed: None,
            assets: AssetPaths::default(),
        }
    }
}

/// Where the active configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    Defaults,
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigSource::File(path) => write!(f, "{}", path.display()),
            ConfigSource::Defaults => write!(f, "built-in defaults"),
        }
    }
}

impl GameConfig {
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::IoError {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content).map_err(|source| ConfigError::ParseError {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_json(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    /// Resolves and loads the configuration, then validates it.
    pub fn load(explicit: Option<&Path>) -> Result<(Self, ConfigSource), ConfigError> {
        let (config, source) = match explicit {
            Some(path) => (Self::load_from_file(path)?, ConfigSource::File(path.to_path_buf())),
            None => match Self::search_paths().into_iter().find(|path| path.is_file()) {
                Some(path) => (Self::load_from_file(&path)?, ConfigSource::File(path)),
                None => (Self::default(), ConfigSource::Defaults),
            },
        };

        config.validate()?;
        Ok((config, source))
    }

    /// Candidate files checked when no path is given, highest priority first.
    pub fn search_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();
        if let Some(dir) = dirs::config_dir() {
            paths.push(dir.join(USER_CONFIG_DIR).join(USER_CONFIG_FILE));
        }
        paths.push(PathBuf::from(BUNDLED_CONFIG_PATH));
        paths
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cell_size == 0 {
            return Err(ConfigError::Invalid("cell_size must be positive".to_string()));
        }
        if self.speed == 0 || self.speed > MAX_SPEED {
            return Err(ConfigError::Invalid(format!(
                "speed must be between 1 and {} ticks per second, got {}",
                MAX_SPEED, self.speed
            )));
        }
        if self.initial_length == 0 {
            return Err(ConfigError::Invalid("initial_length must be at least 1".to_string()));
        }
        if self.screen_width < self.cell_size || self.screen_height < self.cell_size {
            return Err(ConfigError::Invalid(format!(
                "screen {}x{} is smaller than one {}px cell",
                self.screen_width, self.screen_height, self.cell_size
            )));
        }

        // Body trails left of the center cell and must start on screen
        let center_column = (self.screen_width / 2 / self.cell_size) as usize;
        if self.initial_length > center_column + 1 {
            return Err(ConfigError::Invalid(format!(
                "initial_length {} does not fit left of the center column {}",
                self.initial_length, center_column
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.speed, 7);
        assert_eq!(config.points_per_food, 10);
        assert_eq!(config.pacing, Pacing::FixedDelay);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = GameConfig::from_json(r#"{ "speed": 12, "food_placement": "uniform" }"#)
            .expect("valid json");
        assert_eq!(config.speed, 12);
        assert_eq!(config.food_placement, FoodPlacement::Uniform);
        assert_eq!(config.screen_width, 1080);
        assert_eq!(config.assets, AssetPaths::default());
    }

    #[test]
    fn test_nested_asset_override() {
        let config = GameConfig::from_json(r#"{ "assets": { "eat_sound": "crunch.wav" } }"#)
            .expect("valid json");
        assert_eq!(config.assets.eat_sound, "crunch.wav");
        assert_eq!(config.assets.gameplay_background, "assets/backgrounds/gameplay.bmp");
    }

    #[test]
    fn test_unknown_pacing_is_rejected() {
        assert!(GameConfig::from_json(r#"{ "pacing": "vsync" }"#).is_err());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let zero_speed = GameConfig { speed: 0, ..GameConfig::default() };
        assert!(matches!(zero_speed.validate(), Err(ConfigError::Invalid(_))));

        let zero_cell = GameConfig { cell_size: 0, ..GameConfig::default() };
        assert!(zero_cell.validate().is_err());

        let tiny = GameConfig { screen_width: 10, ..GameConfig::default() };
        assert!(tiny.validate().is_err());

        let too_long = GameConfig { initial_length: 29, ..GameConfig::default() };
        assert!(too_long.validate().is_err());

        let fits = GameConfig { initial_length: 29, screen_width: 1200, ..GameConfig::default() };
        assert!(fits.validate().is_ok());
    }

    #[test]
    fn test_speed_upper_bound() {
        let fastest = GameConfig { speed: MAX_SPEED, ..GameConfig::default() };
        assert!(fastest.validate().is_ok());

        let too_fast = GameConfig { speed: MAX_SPEED + 1, ..GameConfig::default() };
        assert!(matches!(too_fast.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_bundled_assets_need_no_image_codecs() {
        assert!(AssetPaths::default().image_codecs().is_empty());
    }

    #[test]
    fn test_image_codecs_follow_extensions() {
        let assets = AssetPaths {
            main_menu_background: "art/menu.JPEG".to_string(),
            gameplay_background: "art/board.png".to_string(),
            ..AssetPaths::default()
        };
        assert_eq!(assets.image_codecs(), InitFlag::JPG | InitFlag::PNG);
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let result = GameConfig::load(Some(Path::new("does/not/exist.json")));
        assert!(matches!(result, Err(ConfigError::IoError { .. })));
    }

    #[test]
    fn test_bundled_config_matches_defaults() {
        let bundled = GameConfig::from_json(include_str!("../assets/config/game.json"))
            .expect("bundled config parses");
        assert_eq!(bundled, GameConfig::default());
    }

    #[test]
    fn test_bundled_config_is_searched_last() {
        let paths = GameConfig::search_paths();
        assert_eq!(paths.last(), Some(&PathBuf::from(BUNDLED_CONFIG_PATH)));
    }
}
