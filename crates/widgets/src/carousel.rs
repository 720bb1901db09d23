use std::time::{Duration, Instant};

pub const AUTO_ADVANCE_INTERVAL: Duration = Duration::from_millis(3000);

/// How long a manual selection suppresses the auto-advance timer so the
/// user's choice is not instantly overridden.
pub const MANUAL_COOLDOWN: Duration = Duration::from_millis(5000);

/// Auto-advancing carousel over a fixed-length sequence.
///
/// The active index advances modulo the length on every interval tick and
/// wraps from last to first. A manual selection takes effect immediately and
/// pushes the next tick out past [`MANUAL_COOLDOWN`].
#[derive(Debug)]
pub struct Carousel {
    len: usize,
    active: usize,
    next_advance: Instant,
    interval: Duration,
    cooldown: Duration,
}

impl Carousel {
    pub fn new(len: usize, now: Instant) -> Self {
        Self::with_timing(len, now, AUTO_ADVANCE_INTERVAL, MANUAL_COOLDOWN)
    }

    pub fn with_timing(len: usize, now: Instant, interval: Duration, cooldown: Duration) -> Self {
        Self {
            len,
            active: 0,
            next_advance: now + interval,
            interval,
            cooldown,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn active(&self) -> usize {
        self.active
    }

    /// Manual selection from a click on an item or pagination dot.
    pub fn select(&mut self, index: usize, now: Instant) {
        if self.len == 0 {
            return;
        }
        self.active = index % self.len;
        self.next_advance = now + self.cooldown;
    }

    /// Applies every interval tick that has elapsed. Returns true when the
    /// active index changed.
    pub fn poll(&mut self, now: Instant) -> bool {
        if self.len == 0 {
            return false;
        }
        let mut advanced = false;
        while now >= self.next_advance {
            self.active = (self.active + 1) % self.len;
            self.next_advance += self.interval;
            advanced = true;
        }
        advanced
    }
}
