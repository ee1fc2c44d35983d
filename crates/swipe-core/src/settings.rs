//! Global settings loaded from TOML.
//!
//! - `init_custom(toml_content)` sets a custom TOML before first `settings()` call
//! - `settings()` returns `&'static Settings` (lazy-init singleton)
//! - Default values are embedded via `include_str!("default_settings.toml")`
//!
//! Constructors elsewhere take explicit options, so nothing outside the host
//! layer has to touch the global.

use std::fmt;
use std::sync::OnceLock;

use serde::Deserialize;

use crate::keyboard;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Set custom TOML before first `settings()` call.
pub fn init_custom(toml_content: String) -> Result<(), SettingsError> {
    parse_settings_toml(&toml_content)?;
    CUSTOM_TOML
        .set(toml_content)
        .map_err(|_| SettingsError::AlreadyInitialized)
}

/// Get or initialize the global settings singleton.
pub fn settings() -> &'static Settings {
    static INSTANCE: OnceLock<Settings> = OnceLock::new();
    INSTANCE.get_or_init(|| {
        let toml_str = CUSTOM_TOML
            .get()
            .map(|s| s.as_str())
            .unwrap_or(DEFAULT_SETTINGS_TOML);
        parse_settings_toml(toml_str).expect("settings TOML must be valid")
    })
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
    #[error("settings already initialized")]
    AlreadyInitialized,
}

/// A packed `0xAARRGGBB` colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Color(pub u32);

impl Color {
    pub const BLACK: Color = Color(0xff00_0000);

    /// Parse `#RRGGBB` (opaque) or `#AARRGGBB`.
    pub fn parse(s: &str) -> Option<Color> {
        let hex = s.strip_prefix('#')?;
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let v = u32::from_str_radix(hex, 16).ok()?;
        match hex.len() {
            6 => Some(Color(0xff00_0000 | v)),
            8 => Some(Color(v)),
            _ => None,
        }
    }

    pub fn argb(self) -> u32 {
        self.0
    }

    pub fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:08x}", self.0)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub decoder: DecoderSettings,
    pub keyboard: KeyboardSettings,
    appearance: RawAppearance,
    #[serde(default)]
    pub dictionary: DictionarySettings,
    /// Parsed colours and stroke widths.
    #[serde(skip)]
    appearance_parsed: Appearance,
}

impl Settings {
    pub fn appearance(&self) -> &Appearance {
        &self.appearance_parsed
    }

    /// Row height for a label glyph of `glyph_height` px.
    pub fn key_height(&self, glyph_height: f32) -> f32 {
        keyboard::key_height(glyph_height, self.keyboard.key_vertical_padding)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DecoderSettings {
    pub max_candidates: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct KeyboardSettings {
    pub rows: Vec<String>,
    pub key_vertical_padding: f32,
    pub label_size: f32,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DictionarySettings {
    #[serde(default)]
    pub path: String,
}

#[derive(Debug, Clone, Deserialize)]
struct RawAppearance {
    label_color: String,
    outline_color: String,
    outline_thickness: f32,
    swipe_color: String,
    swipe_thickness: f32,
}

/// Rendering hints for the host's keyboard bitmap and swipe trail.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Appearance {
    pub label_color: Color,
    pub outline_color: Color,
    pub outline_thickness: f32,
    pub swipe_color: Color,
    pub swipe_thickness: f32,
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let mut s: Settings =
        toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    s.appearance_parsed = parse_appearance(&s.appearance)?;
    Ok(s)
}

fn parse_appearance(raw: &RawAppearance) -> Result<Appearance, SettingsError> {
    macro_rules! color {
        ($field:ident) => {
            Color::parse(&raw.$field).ok_or_else(|| SettingsError::InvalidValue {
                field: concat!("appearance.", stringify!($field)).to_string(),
                reason: format!("{:?} is not #RRGGBB or #AARRGGBB", raw.$field),
            })?
        };
    }
    Ok(Appearance {
        label_color: color!(label_color),
        outline_color: color!(outline_color),
        outline_thickness: raw.outline_thickness,
        swipe_color: color!(swipe_color),
        swipe_thickness: raw.swipe_thickness,
    })
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    macro_rules! check_non_negative {
        ($section:ident . $field:ident) => {
            if !(s.$section.$field >= 0.0 && s.$section.$field.is_finite()) {
                return Err(SettingsError::InvalidValue {
                    field: concat!(stringify!($section), ".", stringify!($field)).to_string(),
                    reason: "must be a non-negative number".to_string(),
                });
            }
        };
    }
    macro_rules! check_positive {
        ($section:ident . $field:ident) => {
            if !(s.$section.$field > 0.0 && s.$section.$field.is_finite()) {
                return Err(SettingsError::InvalidValue {
                    field: concat!(stringify!($section), ".", stringify!($field)).to_string(),
                    reason: "must be positive".to_string(),
                });
            }
        };
    }

    if s.decoder.max_candidates == 0 {
        return Err(SettingsError::InvalidValue {
            field: "decoder.max_candidates".to_string(),
            reason: "must be positive".to_string(),
        });
    }

    if s.keyboard.rows.is_empty() {
        return Err(SettingsError::InvalidValue {
            field: "keyboard.rows".to_string(),
            reason: "must list at least one row".to_string(),
        });
    }
    if let Some(i) = s.keyboard.rows.iter().position(|r| r.is_empty()) {
        return Err(SettingsError::InvalidValue {
            field: format!("keyboard.rows[{i}]"),
            reason: "row must not be empty".to_string(),
        });
    }
    check_non_negative!(keyboard.key_vertical_padding);
    check_positive!(keyboard.label_size);

    check_non_negative!(appearance.outline_thickness);
    check_non_negative!(appearance.swipe_thickness);

    Ok(())
}
