use std::io::Cursor;
use std::path::Path;
use std::sync::{Arc, Mutex, PoisonError};

use swipe_core::{Dictionary, LoadHandle};

use super::listener::{bridge, DictionaryStatusObserver};
use super::{SwipeDictionaryStatus, SwipeError};

#[derive(uniffi::Object)]
pub struct SwipeDictionary {
    pub(crate) inner: Arc<Dictionary>,
    /// Background loads not yet joined.
    pending: Mutex<Vec<LoadHandle>>,
}

#[uniffi::export]
impl SwipeDictionary {
    /// An empty dictionary; lookups find nothing until a load completes.
    #[uniffi::constructor]
    pub fn new(observer: Option<Arc<dyn DictionaryStatusObserver>>) -> Arc<Self> {
        let inner = Dictionary::new();
        inner.set_status_listener(bridge(observer));
        Arc::new(Self {
            inner: Arc::new(inner),
            pending: Mutex::new(Vec::new()),
        })
    }

    /// Start loading a word list file in the background. Fails right away if
    /// the file cannot be opened; read errors later leave the previous words
    /// in place.
    pub fn load_file(&self, path: String) -> Result<(), SwipeError> {
        let handle = self.inner.load_file(Path::new(&path))?;
        self.track(handle);
        Ok(())
    }

    /// Start loading an in-memory word list in the background.
    pub fn load_words(&self, words: Vec<String>) -> Result<(), SwipeError> {
        let handle = self.inner.load(Cursor::new(words.join("\n").into_bytes()))?;
        self.track(handle);
        Ok(())
    }

    /// Block until every started load has finished. Returns the error of the
    /// most recent load, if it failed.
    pub fn wait_for_load(&self) -> Result<(), SwipeError> {
        let handles = std::mem::take(&mut *self.lock_pending());
        let mut last = Ok(());
        for h in handles {
            last = h.join().map(|_| ()).map_err(SwipeError::from);
        }
        last
    }

    pub fn status(&self) -> SwipeDictionaryStatus {
        self.inner.status().into()
    }

    pub fn word_count(&self) -> u64 {
        self.inner.snapshot().word_count() as u64
    }

    pub fn contains_word(&self, word: String) -> bool {
        self.inner.snapshot().contains_word(&word)
    }

    pub fn set_status_observer(&self, observer: Option<Arc<dyn DictionaryStatusObserver>>) {
        self.inner.set_status_listener(bridge(observer));
    }
}

impl SwipeDictionary {
    fn lock_pending(&self) -> std::sync::MutexGuard<'_, Vec<LoadHandle>> {
        self.pending.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn track(&self, handle: LoadHandle) {
        let mut pending = self.lock_pending();
        pending.retain(|h| !h.is_finished());
        pending.push(handle);
    }
}
