//! Swipe session: owns the keyboard, feeds pointer events through the
//! decoder, and reports ranked words.
//!
//! `SwipeSession` is driven from a single input thread. The dictionary it
//! reads from is shared and may be reloaded from any thread; every gesture
//! works against the trie and keyboard that were current at pointer down.

pub(crate) mod types;

mod decoder;
mod gesture;

#[cfg(test)]
mod tests;

use std::sync::Arc;

use swipe_core::{Dictionary, DictionaryStatusListener, Keyboard};
use tracing::debug;

pub use decoder::Decoder;
pub use types::{
    DecodeOutcome, GestureResponse, Point, PointerAction, PointerEvent, ScoredWord, TrailAction,
    DEFAULT_MAX_CANDIDATES,
};

type WordsCallback = Box<dyn Fn(&[String]) + Send + Sync>;
type NoMatchesCallback = Box<dyn Fn() + Send + Sync>;

pub struct SwipeSession {
    dict: Arc<Dictionary>,
    keyboard: Arc<Keyboard>,
    /// Device position of the keyboard's top-left corner.
    origin: Point,
    decoder: Decoder,
    on_word_swiped: Option<WordsCallback>,
    on_no_matches: Option<NoMatchesCallback>,
}

impl SwipeSession {
    pub fn new(dict: Arc<Dictionary>, keyboard: Keyboard) -> Self {
        Self {
            dict,
            keyboard: Arc::new(keyboard),
            origin: Point::default(),
            decoder: Decoder::default(),
            on_word_swiped: None,
            on_no_matches: None,
        }
    }

    pub fn set_max_candidates(&mut self, n: usize) {
        self.decoder.set_max_candidates(n);
    }

    pub fn max_candidates(&self) -> usize {
        self.decoder.max_candidates()
    }

    pub fn dictionary(&self) -> &Arc<Dictionary> {
        &self.dict
    }

    pub fn keyboard(&self) -> &Keyboard {
        &self.keyboard
    }

    /// Replace the layout, e.g. after a size change. A gesture in progress
    /// finishes on the layout it started with.
    pub fn set_keyboard(&mut self, keyboard: Keyboard) {
        debug!(
            width = keyboard.rect().width,
            height = keyboard.rect().height,
            "keyboard replaced"
        );
        self.keyboard = Arc::new(keyboard);
    }

    pub fn set_origin(&mut self, x: f32, y: f32) {
        self.origin = Point::new(x, y);
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn is_swiping(&self) -> bool {
        self.decoder.is_active()
    }

    /// Live candidate prefixes in the current gesture.
    pub fn live_matches(&self) -> usize {
        self.decoder.live_matches()
    }

    pub fn set_on_word_swiped<F>(&mut self, callback: F)
    where
        F: Fn(&[String]) + Send + Sync + 'static,
    {
        self.on_word_swiped = Some(Box::new(callback));
    }

    pub fn set_on_no_matches<F>(&mut self, callback: F)
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.on_no_matches = Some(Box::new(callback));
    }

    pub fn clear_listeners(&mut self) {
        self.on_word_swiped = None;
        self.on_no_matches = None;
    }

    pub fn set_dictionary_status_listener(
        &self,
        listener: Option<Arc<dyn DictionaryStatusListener>>,
    ) {
        self.dict.set_status_listener(listener);
    }

    fn notify(&self, outcome: &DecodeOutcome) {
        match outcome {
            DecodeOutcome::Matches(_) => {
                if let Some(cb) = &self.on_word_swiped {
                    cb(&outcome.words());
                }
            }
            DecodeOutcome::NoMatches => {
                if let Some(cb) = &self.on_no_matches {
                    cb();
                }
            }
        }
    }
}
