pub mod config_ops;
pub mod dict_ops;
pub mod layout_ops;
pub mod replay_ops;

use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

use swipe_core::settings::{parse_settings_toml, Settings, SettingsError, DEFAULT_SETTINGS_TOML};
use swipe_core::{DictError, Dictionary, Keyboard, LayoutError, LoadOutcome, LoadStats};
use tracing::debug;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Dict(#[from] DictError),
    #[error(transparent)]
    Layout(#[from] LayoutError),
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("no key for {0:?}")]
    NoKey(char),
    #[error("load of {} was superseded", .0.display())]
    Superseded(PathBuf),
}

/// Settings from `path`, or the embedded defaults.
pub fn load_settings(path: Option<&Path>) -> Result<Settings, CliError> {
    let settings = match path {
        Some(p) => parse_settings_toml(&fs::read_to_string(p)?)?,
        None => parse_settings_toml(DEFAULT_SETTINGS_TOML)?,
    };
    Ok(settings)
}

/// Load a word list synchronously.
pub fn load_dictionary(path: &Path) -> Result<(Dictionary, LoadStats), CliError> {
    let file = File::open(path).map_err(|source| DictError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let dict = Dictionary::new();
    match dict.load_blocking(file)? {
        LoadOutcome::Published(stats) => {
            debug!(path = %path.display(), words = stats.words, "word list loaded");
            Ok((dict, stats))
        }
        LoadOutcome::Superseded => Err(CliError::Superseded(path.to_path_buf())),
    }
}

/// The configured layout, `width` px wide, rows sized for `glyph_height`.
pub fn build_keyboard(
    settings: &Settings,
    width: f32,
    glyph_height: f32,
) -> Result<Keyboard, LayoutError> {
    Keyboard::with_key_height(
        width,
        settings.key_height(glyph_height),
        &settings.keyboard.rows,
    )
}
