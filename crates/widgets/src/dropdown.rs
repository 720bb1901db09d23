use std::time::{Duration, Instant};

/// Delay between pointer-leave and the dropdown actually closing, so a
/// momentary exit does not slam the menu shut.
pub const CLOSE_DELAY: Duration = Duration::from_millis(300);

/// Hover-intent state for one row of sibling dropdown menus.
///
/// At most one menu is open at a time. Entering a trigger opens it
/// immediately and closes the previous one with no delay; leaving schedules
/// a close after [`CLOSE_DELAY`] which re-entering cancels.
#[derive(Debug)]
pub struct HoverMenu {
    open: Option<usize>,
    pending_close: Option<Instant>,
    close_delay: Duration,
}

impl HoverMenu {
    pub fn new() -> Self {
        Self::with_close_delay(CLOSE_DELAY)
    }

    pub fn with_close_delay(close_delay: Duration) -> Self {
        Self {
            open: None,
            pending_close: None,
            close_delay,
        }
    }

    pub fn open_index(&self) -> Option<usize> {
        self.open
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    /// Pointer entered the trigger region of menu `index`. Cancels any
    /// pending close and opens immediately, switching siblings with no delay.
    pub fn enter_trigger(&mut self, index: usize) {
        self.pending_close = None;
        self.open = Some(index);
    }

    /// Pointer re-entered the open dropdown's own content region before the
    /// close fired.
    pub fn enter_content(&mut self) {
        self.pending_close = None;
    }

    /// Pointer left both the trigger and the content region.
    pub fn leave(&mut self, now: Instant) {
        if self.open.is_some() {
            self.pending_close = Some(now + self.close_delay);
        }
    }

    /// Applies an elapsed close deadline. Returns true when the menu closed
    /// on this poll; the deadline is consumed, so a close fires exactly once.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.pending_close {
            Some(deadline) if now >= deadline => {
                self.pending_close = None;
                self.open = None;
                true
            }
            _ => false,
        }
    }
}

impl Default for HoverMenu {
    fn default() -> Self {
        Self::new()
    }
}
