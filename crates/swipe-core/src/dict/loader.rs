use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use tracing::{debug, debug_span};

use super::{DictError, Dictionary};
use crate::trie::Trie;

/// Parse a newline-delimited word list (`\n` or `\r\n`) into a fresh trie.
///
/// Blank lines are ignored. Within a line only letters count; everything else
/// is skipped without splitting the entry. Malformed UTF-8 decodes to U+FFFD,
/// which is not a letter, so the rest of the line and the file still load.
pub fn parse_word_list<R: BufRead>(mut reader: R) -> Result<Trie, DictError> {
    let mut trie = Trie::new();
    let mut buf = Vec::new();
    let mut line_no = 0;
    loop {
        buf.clear();
        line_no += 1;
        let n = reader
            .read_until(b'\n', &mut buf)
            .map_err(|source| DictError::Read {
                line: line_no,
                source,
            })?;
        if n == 0 {
            break;
        }
        let line = String::from_utf8_lossy(&buf);
        let line = line.trim_end_matches(['\n', '\r']);
        if line.trim().is_empty() {
            continue;
        }
        trie.insert(line);
    }
    Ok(trie)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadStats {
    pub words: usize,
    pub nodes: usize,
    pub elapsed: Duration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The new trie replaced the live root.
    Published(LoadStats),
    /// A newer load was started before this one finished; nothing changed.
    Superseded,
}

/// Handle to a background load started by [`Dictionary::load`].
pub struct LoadHandle {
    generation: u64,
    handle: JoinHandle<Result<LoadOutcome, DictError>>,
}

impl LoadHandle {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Block until the load finishes.
    pub fn join(self) -> Result<LoadOutcome, DictError> {
        self.handle.join().map_err(|_| DictError::WorkerPanicked)?
    }
}

impl Dictionary {
    /// Load a word list on a background thread.
    ///
    /// `on_loading` fires before this returns. On success the new trie is
    /// published and `on_ready` fires on the loader thread; on failure the
    /// previous trie stays live and no `on_ready` is sent.
    pub fn load<R>(self: &Arc<Self>, source: R) -> Result<LoadHandle, DictError>
    where
        R: Read + Send + 'static,
    {
        let generation = self.begin_load();
        let dict = Arc::clone(self);
        let spawned = thread::Builder::new()
            .name("swipe-dict-loader".into())
            .spawn(move || dict.run_load(generation, source));
        match spawned {
            Ok(handle) => Ok(LoadHandle { generation, handle }),
            Err(e) => {
                let err = DictError::Io(e);
                self.abort(generation, &err);
                Err(err)
            }
        }
    }

    /// Open `path` on the calling thread, then load it in the background.
    pub fn load_file(self: &Arc<Self>, path: &Path) -> Result<LoadHandle, DictError> {
        let file = File::open(path).map_err(|source| DictError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        self.load(file)
    }

    /// Load a word list on the calling thread.
    pub fn load_blocking<R: Read>(&self, source: R) -> Result<LoadOutcome, DictError> {
        let generation = self.begin_load();
        self.run_load(generation, source)
    }

    fn run_load<R: Read>(&self, generation: u64, source: R) -> Result<LoadOutcome, DictError> {
        let _span = debug_span!("load_word_list", generation).entered();
        let started = Instant::now();
        let trie = match parse_word_list(BufReader::new(source)) {
            Ok(trie) => trie,
            Err(err) => {
                self.abort(generation, &err);
                return Err(err);
            }
        };
        let stats = LoadStats {
            words: trie.word_count(),
            nodes: trie.node_count(),
            elapsed: started.elapsed(),
        };
        if !self.publish(generation, trie) {
            return Ok(LoadOutcome::Superseded);
        }
        debug!(
            words = stats.words,
            nodes = stats.nodes,
            elapsed_ms = stats.elapsed.as_secs_f64() * 1000.0,
            "dictionary ready"
        );
        Ok(LoadOutcome::Published(stats))
    }
}
