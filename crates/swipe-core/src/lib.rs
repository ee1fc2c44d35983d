//! Dictionary, keyboard geometry and settings for the swipe decoder.
//!
//! Everything in this crate is either immutable once built (`Trie`,
//! `Keyboard`) or publishes immutable snapshots (`Dictionary`), so it can be
//! shared freely between the loader thread and gesture handling.

pub mod dict;
pub mod keyboard;
pub mod settings;
pub mod trie;
pub mod unicode;

pub use dict::{
    parse_word_list, DictError, Dictionary, DictionaryStatus, DictionaryStatusListener,
    LoadHandle, LoadOutcome, LoadStats,
};
pub use keyboard::{key_height, Key, Keyboard, LayoutError, Rect, Row, Span, QWERTY_ROWS};
pub use settings::{Appearance, Color, Settings, SettingsError};
pub use trie::{NodeId, Trie};
