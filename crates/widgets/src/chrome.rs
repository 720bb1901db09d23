//! Page-wide document state that is deliberately process-wide: body scroll
//! locking while overlays are open, and one-shot third-party widget
//! bootstraps. Everything acquired here is released on teardown so nothing
//! leaks across navigations.

use std::{
    collections::BTreeSet,
    sync::{Arc, Mutex},
};

use tracing::debug;

#[derive(Debug, Default)]
pub struct PageChrome {
    scroll_locks: usize,
    initialized_widgets: BTreeSet<&'static str>,
}

impl PageChrome {
    pub fn shared() -> Arc<Mutex<Self>> {
        Arc::new(Mutex::new(Self::default()))
    }

    /// Scroll is locked while any overlay holds a lock; locks nest.
    pub fn scroll_locked(&self) -> bool {
        self.scroll_locks > 0
    }

    fn lock_scroll(&mut self) {
        self.scroll_locks += 1;
    }

    fn unlock_scroll(&mut self) {
        self.scroll_locks = self.scroll_locks.saturating_sub(1);
    }

    /// One-shot init guard for third-party widgets attached to the document.
    /// Returns false when the widget was already initialized, so a second
    /// mount does not bootstrap it twice.
    pub fn mark_initialized(&mut self, widget: &'static str) -> bool {
        let first = self.initialized_widgets.insert(widget);
        if !first {
            debug!(widget, "skipping repeat widget init");
        }
        first
    }
}

/// RAII scroll lock: held while a mobile menu or modal is open, released on
/// drop so an unmount can never leave the page unscrollable.
pub struct ScrollLock {
    chrome: Arc<Mutex<PageChrome>>,
}

pub fn acquire_scroll_lock(chrome: &Arc<Mutex<PageChrome>>) -> ScrollLock {
    if let Ok(mut guard) = chrome.lock() {
        guard.lock_scroll();
    }
    ScrollLock {
        chrome: Arc::clone(chrome),
    }
}

impl Drop for ScrollLock {
    fn drop(&mut self) {
        if let Ok(mut guard) = self.chrome.lock() {
            guard.unlock_scroll();
        }
    }
}
