//! The live dictionary: a published trie plus its load status.
//!
//! `Dictionary` owns the current root as an `Arc<Trie>`. Loads build a fresh
//! trie off to the side and replace the `Arc` in one step, so readers holding
//! a snapshot keep a complete tree no matter how many reloads happen.

mod loader;
#[cfg(test)]
mod tests;

pub use loader::{parse_word_list, LoadHandle, LoadOutcome, LoadStats};

use std::io;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, MutexGuard, RwLock};

use tracing::{debug, warn};

use crate::trie::Trie;

#[derive(Debug, thiserror::Error)]
pub enum DictError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("cannot open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("read error at line {line}: {source}")]
    Read {
        line: usize,
        #[source]
        source: io::Error,
    },

    #[error("dictionary loader thread panicked")]
    WorkerPanicked,
}

/// Observable load state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DictionaryStatus {
    /// No usable trie yet; lookups see an empty tree.
    Absent,
    Loading,
    Ready,
}

/// Receives load status transitions.
///
/// `on_loading` runs on the thread that called `load`; `on_ready` runs on the
/// loader thread right after the new trie is published. Marshalling onto a UI
/// thread is up to the implementor.
pub trait DictionaryStatusListener: Send + Sync {
    fn on_loading(&self);
    fn on_ready(&self);
}

struct LoadState {
    status: DictionaryStatus,
    /// Generation of the most recently started load.
    latest: u64,
    /// Whether any load has ever been published.
    published: bool,
}

pub struct Dictionary {
    root: RwLock<Arc<Trie>>,
    state: Mutex<LoadState>,
    listener: RwLock<Option<Arc<dyn DictionaryStatusListener>>>,
}

impl Default for Dictionary {
    fn default() -> Self {
        Self::new()
    }
}

impl Dictionary {
    /// An absent dictionary backed by an empty stub trie.
    pub fn new() -> Self {
        Self {
            root: RwLock::new(Arc::new(Trie::new())),
            state: Mutex::new(LoadState {
                status: DictionaryStatus::Absent,
                latest: 0,
                published: false,
            }),
            listener: RwLock::new(None),
        }
    }

    pub fn with_listener(listener: Arc<dyn DictionaryStatusListener>) -> Self {
        let dict = Self::new();
        dict.set_status_listener(Some(listener));
        dict
    }

    /// A ready dictionary wrapping an already-built trie.
    pub fn from_trie(trie: Trie) -> Self {
        Self {
            root: RwLock::new(Arc::new(trie)),
            state: Mutex::new(LoadState {
                status: DictionaryStatus::Ready,
                latest: 0,
                published: true,
            }),
            listener: RwLock::new(None),
        }
    }

    pub fn set_status_listener(&self, listener: Option<Arc<dyn DictionaryStatusListener>>) {
        *self.listener.write().unwrap_or_else(|e| e.into_inner()) = listener;
    }

    pub fn status(&self) -> DictionaryStatus {
        self.lock_state().status
    }

    /// The currently published trie. Stays valid across later reloads.
    pub fn snapshot(&self) -> Arc<Trie> {
        Arc::clone(&self.root.read().unwrap_or_else(|e| e.into_inner()))
    }

    fn lock_state(&self) -> MutexGuard<'_, LoadState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn listener(&self) -> Option<Arc<dyn DictionaryStatusListener>> {
        self.listener
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// Start a load: bump the generation, flip to `Loading`, notify.
    pub(crate) fn begin_load(&self) -> u64 {
        let generation = {
            let mut state = self.lock_state();
            state.latest += 1;
            state.status = DictionaryStatus::Loading;
            state.latest
        };
        debug!(generation, "dictionary loading");
        if let Some(l) = self.listener() {
            l.on_loading();
        }
        generation
    }

    /// Publish `trie` if `generation` is still the newest load.
    pub(crate) fn publish(&self, generation: u64, trie: Trie) -> bool {
        {
            let mut state = self.lock_state();
            if state.latest != generation {
                debug!(generation, latest = state.latest, "stale load discarded");
                return false;
            }
            *self.root.write().unwrap_or_else(|e| e.into_inner()) = Arc::new(trie);
            state.status = DictionaryStatus::Ready;
            state.published = true;
        }
        if let Some(l) = self.listener() {
            l.on_ready();
        }
        true
    }

    /// Abandon a failed load. The previous trie stays in effect.
    pub(crate) fn abort(&self, generation: u64, err: &DictError) {
        let mut state = self.lock_state();
        warn!(generation, error = %err, "dictionary load failed");
        if state.latest == generation {
            state.status = if state.published {
                DictionaryStatus::Ready
            } else {
                DictionaryStatus::Absent
            };
        }
    }
}
