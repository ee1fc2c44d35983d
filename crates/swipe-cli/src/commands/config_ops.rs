use std::path::Path;

use swipe_core::settings::DEFAULT_SETTINGS_TOML;

use super::{load_settings, CliError};

pub fn settings_export() {
    print!("{DEFAULT_SETTINGS_TOML}");
}

pub fn settings_validate(file: &Path) -> Result<(), CliError> {
    let s = load_settings(Some(file))?;
    println!(
        "OK: decoder.max_candidates={}, keyboard.rows={}, keyboard.key_vertical_padding={}",
        s.decoder.max_candidates,
        s.keyboard.rows.len(),
        s.keyboard.key_vertical_padding
    );
    Ok(())
}
