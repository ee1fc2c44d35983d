use std::io::{Cursor, Write};
use std::sync::{mpsc, Arc};

use super::{FailingReader, GatedReader, Recorder, WORDS};
use crate::dict::{DictError, Dictionary, DictionaryStatus, LoadOutcome};
use crate::trie::Trie;

#[test]
fn test_new_dictionary_is_absent_stub() {
    let dict = Dictionary::new();
    assert_eq!(dict.status(), DictionaryStatus::Absent);
    let trie = dict.snapshot();
    assert!(trie.is_empty());
    assert_eq!(trie.child(trie.root(), 'H'), None);
}

#[test]
fn test_from_trie_is_ready() {
    let dict = Dictionary::from_trie(Trie::from_words(["cat"]));
    assert_eq!(dict.status(), DictionaryStatus::Ready);
    assert!(dict.snapshot().contains_word("CAT"));
}

#[test]
fn test_load_blocking_publishes() {
    let recorder = Arc::new(Recorder::default());
    let dict = Dictionary::with_listener(recorder.clone());
    let outcome = dict.load_blocking(Cursor::new(WORDS)).unwrap();
    match outcome {
        LoadOutcome::Published(stats) => {
            assert_eq!(stats.words, 5);
            assert_eq!(stats.nodes, dict.snapshot().node_count());
        }
        LoadOutcome::Superseded => panic!("expected publish"),
    }
    assert_eq!(dict.status(), DictionaryStatus::Ready);
    assert_eq!(recorder.events(), vec!["loading", "ready"]);
}

#[test]
fn test_background_load() {
    let recorder = Arc::new(Recorder::default());
    let dict = Arc::new(Dictionary::with_listener(recorder.clone()));
    let handle = dict.load(Cursor::new(WORDS)).unwrap();
    // on_loading is delivered before load() returns
    assert_eq!(recorder.events().first(), Some(&"loading"));
    let outcome = handle.join().unwrap();
    assert!(matches!(outcome, LoadOutcome::Published(_)));
    assert_eq!(dict.status(), DictionaryStatus::Ready);
    assert!(dict.snapshot().contains_word("WORLD"));
    assert_eq!(recorder.events(), vec!["loading", "ready"]);
}

#[test]
fn test_failed_load_keeps_previous_root() {
    let recorder = Arc::new(Recorder::default());
    let dict = Arc::new(Dictionary::with_listener(recorder.clone()));
    dict.load_blocking(Cursor::new("CAT\n")).unwrap();
    let before = dict.snapshot();

    let err = dict
        .load(FailingReader {
            data: b"DOG\n",
            done: false,
        })
        .unwrap()
        .join()
        .unwrap_err();
    assert!(matches!(err, DictError::Read { .. }));

    assert_eq!(dict.status(), DictionaryStatus::Ready);
    let after = dict.snapshot();
    assert!(Arc::ptr_eq(&before, &after));
    assert!(after.contains_word("CAT"));
    assert!(!after.contains_word("DOG"));
    // no second "ready"
    assert_eq!(recorder.events(), vec!["loading", "ready", "loading"]);
}

#[test]
fn test_failed_first_load_returns_to_absent() {
    let dict = Dictionary::new();
    let reader = FailingReader {
        data: b"DOG\n",
        done: false,
    };
    assert!(dict.load_blocking(reader).is_err());
    assert_eq!(dict.status(), DictionaryStatus::Absent);
    assert!(dict.snapshot().is_empty());
}

#[test]
fn test_snapshot_survives_reload() {
    let dict = Dictionary::new();
    dict.load_blocking(Cursor::new("OLD\n")).unwrap();
    let old = dict.snapshot();
    dict.load_blocking(Cursor::new("NEW\n")).unwrap();
    let new = dict.snapshot();

    assert!(old.contains_word("OLD"));
    assert!(!old.contains_word("NEW"));
    assert!(new.contains_word("NEW"));
    assert!(!new.contains_word("OLD"));
}

#[test]
fn test_stale_load_is_superseded() {
    let dict = Arc::new(Dictionary::new());
    let (open_gate, gate) = mpsc::channel();
    let slow = dict
        .load(GatedReader {
            gate,
            inner: Cursor::new(b"SLOW\n".as_slice()),
            opened: false,
        })
        .unwrap();

    let fast = dict.load(Cursor::new(b"FAST\n".as_slice())).unwrap();
    assert!(fast.generation() > slow.generation());
    assert!(matches!(fast.join().unwrap(), LoadOutcome::Published(_)));

    open_gate.send(()).unwrap();
    assert_eq!(slow.join().unwrap(), LoadOutcome::Superseded);

    let trie = dict.snapshot();
    assert!(trie.contains_word("FAST"));
    assert!(!trie.contains_word("SLOW"));
    assert_eq!(dict.status(), DictionaryStatus::Ready);
}

#[test]
fn test_load_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(WORDS.as_bytes()).unwrap();
    file.flush().unwrap();

    let dict = Arc::new(Dictionary::new());
    let handle = dict.load_file(file.path()).unwrap();
    handle.join().unwrap();
    assert!(dict.snapshot().contains_word("HEY"));
}

#[test]
fn test_load_missing_file() {
    let recorder = Arc::new(Recorder::default());
    let dict = Arc::new(Dictionary::with_listener(recorder.clone()));
    let dir = tempfile::tempdir().unwrap();
    let err = dict
        .load_file(&dir.path().join("missing.txt"))
        .err()
        .unwrap();
    assert!(matches!(err, DictError::Open { .. }));
    assert!(err.to_string().contains("missing.txt"));
    assert_eq!(dict.status(), DictionaryStatus::Absent);
    assert!(recorder.events().is_empty());
}

#[test]
fn test_set_status_listener_later() {
    let dict = Dictionary::new();
    let recorder = Arc::new(Recorder::default());
    dict.load_blocking(Cursor::new("A\n")).unwrap();
    dict.set_status_listener(Some(recorder.clone()));
    dict.load_blocking(Cursor::new("B\n")).unwrap();
    assert_eq!(recorder.events(), vec!["loading", "ready"]);

    dict.set_status_listener(None);
    dict.load_blocking(Cursor::new("C\n")).unwrap();
    assert_eq!(recorder.events().len(), 2);
}
