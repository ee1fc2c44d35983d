mod scenarios;

use std::sync::{Arc, Mutex};

use swipe_core::{Dictionary, Keyboard, Rect, Trie};

use super::{DecodeOutcome, Point, SwipeSession};

pub(super) const WORDS: [&str; 5] = ["HELLO", "HELP", "WORLD", "WORD", "HEY"];

pub(super) fn make_test_dict() -> Arc<Dictionary> {
    Arc::new(Dictionary::from_trie(Trie::from_words(WORDS)))
}

/// 1000x300 QWERTY: keys are 100x100, row centres at y = 50, 150, 250.
pub(super) fn make_keyboard() -> Keyboard {
    Keyboard::qwerty(Rect::sized(1000.0, 300.0)).unwrap()
}

pub(super) fn make_session() -> SwipeSession {
    SwipeSession::new(make_test_dict(), make_keyboard())
}

pub(super) fn centre(kb: &Keyboard, ch: char) -> Point {
    let (x, y) = kb.find_key(ch).unwrap().center();
    Point::new(x, y)
}

/// Key centres for `letters`; with `dwell` every centre is sampled twice so
/// the second sample refines the distance to zero.
pub(super) fn path(kb: &Keyboard, letters: &str, dwell: bool) -> Vec<Point> {
    let mut out = Vec::new();
    for ch in letters.chars() {
        let p = centre(kb, ch);
        out.push(p);
        if dwell {
            out.push(p);
        }
    }
    out
}

pub(super) fn words(outcome: &DecodeOutcome) -> Vec<String> {
    outcome.words()
}

/// Collects listener callbacks.
#[derive(Default, Clone)]
pub(super) struct Events {
    pub(super) log: Arc<Mutex<Vec<String>>>,
}

impl Events {
    pub(super) fn attach(&self, session: &mut SwipeSession) {
        let log = Arc::clone(&self.log);
        session.set_on_word_swiped(move |w| log.lock().unwrap().push(w.join(",")));
        let log = Arc::clone(&self.log);
        session.set_on_no_matches(move || log.lock().unwrap().push("<none>".into()));
    }

    pub(super) fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.log.lock().unwrap())
    }
}
