use std::io::Cursor;
use std::sync::Arc;

use swipe_core::{Dictionary, Keyboard, Rect, Trie};

use super::{centre, make_keyboard, make_session, path, words, Events};
use crate::{DecodeOutcome, Point, ScoredWord, SwipeSession};

fn scored(outcome: &DecodeOutcome) -> &[ScoredWord] {
    match outcome {
        DecodeOutcome::Matches(m) => m,
        DecodeOutcome::NoMatches => &[],
    }
}

#[test]
fn test_hello_and_help_share_prefix() {
    let mut s = make_session();
    let kb = make_keyboard();
    // dwell on H E L O, then pass over P without settling
    let mut pts = path(&kb, "HELO", true);
    pts.push(centre(&kb, 'P'));
    let out = s.swipe_path(&pts);
    assert_eq!(words(&out), vec!["HELLO", "HELP"]);

    let ranked = scored(&out);
    assert!((ranked[0].score - 8.0).abs() < 1e-4);
    assert!((ranked[1].score - 6.0).abs() < 1e-4);
}

#[test]
fn test_single_l_yields_hello_not_help() {
    let mut s = make_session();
    let kb = make_keyboard();
    let out = s.swipe_path(&path(&kb, "HELO", true));
    assert_eq!(words(&out), vec!["HELLO"]);
}

#[test]
fn test_leaving_and_returning_to_l() {
    let mut s = make_session();
    let kb = make_keyboard();
    let out = s.swipe_path(&path(&kb, "HELKLO", true));
    assert_eq!(words(&out), vec!["HELLO"]);
}

#[test]
fn test_word_and_world() {
    let mut s = make_session();
    let kb = make_keyboard();
    let out = s.swipe_path(&path(&kb, "WORLD", true));
    assert_eq!(words(&out), vec!["WORLD", "WORD"]);
    let ranked = scored(&out);
    assert!((ranked[0].score - 10.0).abs() < 1e-4);
    assert!((ranked[1].score - 8.0).abs() < 1e-4);
    assert_eq!(ranked[0].keys, 5);
    assert_eq!(ranked[1].keys, 4);
}

#[test]
fn test_no_word_starts_with_qz() {
    let mut s = make_session();
    let events = Events::default();
    events.attach(&mut s);
    let kb = make_keyboard();
    let out = s.swipe_path(&path(&kb, "QZ", true));
    assert_eq!(out, DecodeOutcome::NoMatches);
    assert_eq!(events.take(), vec!["<none>"]);
}

#[test]
fn test_hey_only() {
    let mut s = make_session();
    let events = Events::default();
    events.attach(&mut s);
    let kb = make_keyboard();
    let out = s.swipe_path(&path(&kb, "HEY", false));
    assert_eq!(words(&out), vec!["HEY"]);
    assert_eq!(events.take(), vec!["HEY"]);
}

#[test]
fn test_dead_start_reseeds_from_root() {
    // nothing starts with Q, so the frontier is still empty when H arrives
    let mut s = make_session();
    let kb = make_keyboard();
    let out = s.swipe_path(&path(&kb, "QHEY", false));
    assert_eq!(words(&out), vec!["HEY"]);
}

#[test]
fn test_load_between_gestures() {
    let dict = Arc::new(Dictionary::new());
    let mut s = SwipeSession::new(Arc::clone(&dict), make_keyboard());
    let kb = make_keyboard();

    let before = s.swipe_path(&path(&kb, "HEY", true));
    assert_eq!(before, DecodeOutcome::NoMatches);

    dict.load_blocking(Cursor::new("hey\nhello\n")).unwrap();
    let after = s.swipe_path(&path(&kb, "HEY", true));
    assert_eq!(words(&after), vec!["HEY"]);
    // the earlier outcome is a value and stays as it was
    assert_eq!(before, DecodeOutcome::NoMatches);
}

#[test]
fn test_reload_mid_gesture_uses_snapshot() {
    let dict = Arc::new(Dictionary::from_trie(Trie::from_words(["HEY"])));
    let mut s = SwipeSession::new(Arc::clone(&dict), make_keyboard());
    let kb = make_keyboard();

    let h = centre(&kb, 'H');
    let e = centre(&kb, 'E');
    let y = centre(&kb, 'Y');
    s.on_pointer_down(h.x, h.y);
    s.on_pointer_move(e.x, e.y);
    dict.load_blocking(Cursor::new("HEX\n")).unwrap();
    s.on_pointer_move(y.x, y.y);
    assert_eq!(words(&s.on_pointer_up()), vec!["HEY"]);

    // next gesture sees the new list
    let out = s.swipe_path(&path(&kb, "HEY", false));
    assert_eq!(out, DecodeOutcome::NoMatches);
}

#[test]
fn test_resize_mid_gesture_uses_snapshot() {
    let mut s = make_session();
    let kb = make_keyboard();
    let h = centre(&kb, 'H');
    let e = centre(&kb, 'E');
    let y = centre(&kb, 'Y');
    s.on_pointer_down(h.x, h.y);
    s.set_keyboard(Keyboard::qwerty(Rect::sized(500.0, 150.0)).unwrap());
    s.on_pointer_move(e.x, e.y);
    s.on_pointer_move(y.x, y.y);
    assert_eq!(words(&s.on_pointer_up()), vec!["HEY"]);
    assert_eq!(s.keyboard().rect().width, 500.0);
}

#[test]
fn test_candidates_are_capped_and_stable() {
    let many: Vec<String> = (1..=15).map(|n| "A".repeat(n)).collect();
    let dict = Arc::new(Dictionary::from_trie(Trie::from_words(&many)));
    let mut s = SwipeSession::new(dict, make_keyboard());
    let kb = make_keyboard();

    let out = s.swipe_path(&path(&kb, "A", true));
    let expected: Vec<String> = many.iter().take(10).cloned().collect();
    assert_eq!(words(&out), expected);

    s.set_max_candidates(3);
    let out = s.swipe_path(&path(&kb, "A", true));
    assert_eq!(words(&out).len(), 3);
}

#[test]
fn test_backtrack_bounded_by_longest_row() {
    let kb = Keyboard::new(Rect::sized(200.0, 200.0), &["AB", "CD"]).unwrap();
    assert_eq!(kb.longest_key_span(), 2);
    let dict = Arc::new(Dictionary::from_trie(Trie::from_words(["AD"])));
    let mut s = SwipeSession::new(dict, kb.clone());

    let near = s.swipe_path(&path(&kb, "ABD", false));
    assert_eq!(words(&near), vec!["AD"]);

    let far = s.swipe_path(&path(&kb, "ABCD", false));
    assert_eq!(far, DecodeOutcome::NoMatches);
}

#[test]
fn test_closer_dwell_scores_higher() {
    let kb = make_keyboard();
    let y = centre(&kb, 'Y');
    let mut s = make_session();

    let mut glancing = path(&kb, "HE", true);
    glancing.push(y);
    glancing.push(Point::new(y.x + 40.0, y.y));
    let far = scored(&s.swipe_path(&glancing))[0].score;

    let mut centred = path(&kb, "HE", true);
    centred.push(y);
    centred.push(Point::new(y.x + 40.0, y.y));
    centred.push(Point::new(y.x + 5.0, y.y));
    let near = scored(&s.swipe_path(&centred))[0].score;

    assert!(near > far);
}
