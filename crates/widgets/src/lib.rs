//! Transient UI state machines: hover-intent dropdowns, auto-advancing
//! carousels, accordions, and page-wide document chrome.
//!
//! Everything here is deadline-driven on [`std::time::Instant`]. Owners call
//! `poll` from their own event loop with the current time; no widget spawns
//! a timer that could outlive it, and teardown is just dropping the value.

pub mod accordion;
pub mod carousel;
pub mod chrome;
pub mod dropdown;

pub use accordion::Accordion;
pub use carousel::Carousel;
pub use chrome::{acquire_scroll_lock, PageChrome, ScrollLock};
pub use dropdown::HoverMenu;

#[cfg(test)]
mod tests;
