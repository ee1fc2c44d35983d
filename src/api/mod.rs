//! UniFFI export layer: host bindings for the swipe engine.
//!
//! Each public type here maps to a generated foreign class, record, enum or
//! callback interface.

mod dictionary;
mod listener;
mod session;
mod types;


pub use dictionary::SwipeDictionary;
pub use listener::{DictionaryStatusObserver, SwipeListener};
pub use session::SwipeSession;
pub use types::{
    SwipeAppearance, SwipeDictionaryStatus, SwipeError, SwipeKey, SwipePoint, SwipePointerAction,
    SwipeTrail,
};

use std::path::Path;

// ---------------------------------------------------------------------------
// Top-level functions
// ---------------------------------------------------------------------------

#[uniffi::export]
fn engine_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[uniffi::export]
fn settings_load_config(path: String) -> Result<(), SwipeError> {
    let content = std::fs::read_to_string(&path).map_err(|e| SwipeError::Io {
        msg: format!("{path}: {e}"),
    })?;
    swipe_core::settings::init_custom(content)
        .map_err(|e| SwipeError::InvalidData { msg: e.to_string() })?;
    Ok(())
}

#[uniffi::export]
fn settings_default_config() -> String {
    swipe_core::settings::DEFAULT_SETTINGS_TOML.to_string()
}

/// Identifier of the configured word-list resource, if any.
#[uniffi::export]
fn settings_dictionary_path() -> Option<String> {
    let path = &swipe_core::settings::settings().dictionary.path;
    (!path.is_empty()).then(|| path.clone())
}

#[uniffi::export]
fn trace_init(log_dir: String) {
    crate::trace_init::init_tracing(Path::new(&log_dir));
}
