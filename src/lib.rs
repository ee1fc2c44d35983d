//! Swipe-gesture word decoder with a UniFFI host API.
//!
//! The engine itself lives in `swipe-core` (trie, dictionary, keyboard,
//! settings) and `swipe-session` (decoder and gesture handling); this crate
//! exposes them to the host UI.

uniffi::setup_scaffolding!();

pub mod api;
mod trace_init;

pub use swipe_core;
pub use swipe_session;
