mod dictionary;

use std::io::{self, Read};
use std::sync::mpsc;
use std::sync::Mutex;

use super::DictionaryStatusListener;

pub(super) const WORDS: &str = "HELLO\nHELP\nWORLD\nWORD\nHEY\n";

/// Records status callbacks in arrival order.
#[derive(Default)]
pub(super) struct Recorder {
    pub(super) events: Mutex<Vec<&'static str>>,
}

impl Recorder {
    pub(super) fn events(&self) -> Vec<&'static str> {
        self.events.lock().unwrap().clone()
    }
}

impl DictionaryStatusListener for Recorder {
    fn on_loading(&self) {
        self.events.lock().unwrap().push("loading");
    }

    fn on_ready(&self) {
        self.events.lock().unwrap().push("ready");
    }
}

/// Yields `data`, then fails.
pub(super) struct FailingReader {
    pub(super) data: &'static [u8],
    pub(super) done: bool,
}

impl Read for FailingReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.done {
            return Err(io::Error::other("device unplugged"));
        }
        self.done = true;
        let n = self.data.len().min(buf.len());
        buf[..n].copy_from_slice(&self.data[..n]);
        Ok(n)
    }
}

/// Blocks the first read until the gate is opened (or dropped).
pub(super) struct GatedReader {
    pub(super) gate: mpsc::Receiver<()>,
    pub(super) inner: io::Cursor<&'static [u8]>,
    pub(super) opened: bool,
}

impl Read for GatedReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if !self.opened {
            let _ = self.gate.recv();
            self.opened = true;
        }
        self.inner.read(buf)
    }
}
