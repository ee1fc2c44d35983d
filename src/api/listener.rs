use std::sync::Arc;

use swipe_core::DictionaryStatusListener;

/// Receives the result of every finished gesture.
///
/// Called on the thread that delivered the pointer-up event.
#[uniffi::export(with_foreign)]
pub trait SwipeListener: Send + Sync {
    fn on_word_swiped(&self, words: Vec<String>);
    fn on_no_matches(&self);
}

/// Receives dictionary load transitions. `on_ready` arrives on the loader
/// thread; hop to the UI thread in the implementation if needed.
#[uniffi::export(with_foreign)]
pub trait DictionaryStatusObserver: Send + Sync {
    fn on_loading(&self);
    fn on_ready(&self);
}

/// Bridges a foreign observer onto the core listener trait.
pub(crate) struct ObserverBridge(pub(crate) Arc<dyn DictionaryStatusObserver>);

impl DictionaryStatusListener for ObserverBridge {
    fn on_loading(&self) {
        self.0.on_loading();
    }

    fn on_ready(&self) {
        self.0.on_ready();
    }
}

pub(crate) fn bridge(
    observer: Option<Arc<dyn DictionaryStatusObserver>>,
) -> Option<Arc<dyn DictionaryStatusListener>> {
    observer.map(|o| Arc::new(ObserverBridge(o)) as Arc<dyn DictionaryStatusListener>)
}
