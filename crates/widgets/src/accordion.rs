use std::collections::{BTreeSet, HashMap};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenMode {
    /// Opening one panel closes the previous one; toggling the open panel
    /// closes it.
    Single,
    /// Panels toggle independently.
    Multi,
}

/// Accordion open/closed state plus the measured content heights used for
/// smooth open animations.
#[derive(Debug)]
pub struct Accordion {
    mode: OpenMode,
    open_single: Option<usize>,
    open_multi: BTreeSet<usize>,
    measured_heights: HashMap<usize, f32>,
}

impl Accordion {
    pub fn single() -> Self {
        Self::with_mode(OpenMode::Single)
    }

    pub fn multi() -> Self {
        Self::with_mode(OpenMode::Multi)
    }

    pub fn with_mode(mode: OpenMode) -> Self {
        Self {
            mode,
            open_single: None,
            open_multi: BTreeSet::new(),
            measured_heights: HashMap::new(),
        }
    }

    pub fn mode(&self) -> OpenMode {
        self.mode
    }

    pub fn toggle(&mut self, index: usize) {
        match self.mode {
            OpenMode::Single => {
                self.open_single = if self.open_single == Some(index) {
                    None
                } else {
                    Some(index)
                };
            }
            OpenMode::Multi => {
                if !self.open_multi.remove(&index) {
                    self.open_multi.insert(index);
                }
            }
        }
    }

    pub fn is_open(&self, index: usize) -> bool {
        match self.mode {
            OpenMode::Single => self.open_single == Some(index),
            OpenMode::Multi => self.open_multi.contains(&index),
        }
    }

    pub fn open_indices(&self) -> Vec<usize> {
        match self.mode {
            OpenMode::Single => self.open_single.into_iter().collect(),
            OpenMode::Multi => self.open_multi.iter().copied().collect(),
        }
    }

    /// Records the measured content height for a panel.
    pub fn set_measured_height(&mut self, index: usize, height: f32) {
        self.measured_heights.insert(index, height);
    }

    /// Height the panel should animate to: the measured content height when
    /// open, zero when closed or not yet measured.
    pub fn panel_height(&self, index: usize) -> f32 {
        if self.is_open(index) {
            self.measured_heights.get(&index).copied().unwrap_or(0.0)
        } else {
            0.0
        }
    }

    /// Drops every measurement. Call when the underlying content changes,
    /// e.g. when data arrives asynchronously after the first render.
    pub fn invalidate_measurements(&mut self) {
        self.measured_heights.clear();
    }
}
