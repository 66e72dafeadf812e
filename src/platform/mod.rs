//! Platform abstraction layer
//!
//! Separates the page component from the browser:
//! - `PageHost`: DOM side effects (apply section styles, scroll to anchors)
//! - `ViewportWatcher`: viewport-intersection notifications
//!
//! `headless` backs both with plain Rust for tests and pre-rendering; `web`
//! backs them with the DOM and `IntersectionObserver`.

pub mod headless;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use headless::{HeadlessHost, ManualWatcher};

use crate::reveal::SectionStyle;

/// One entry of an intersection batch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntersectionRecord {
    /// Element id of the observed section
    pub target_id: String,
    pub is_intersecting: bool,
}

impl IntersectionRecord {
    pub fn entering(id: &str) -> Self {
        Self {
            target_id: id.to_string(),
            is_intersecting: true,
        }
    }

    pub fn leaving(id: &str) -> Self {
        Self {
            target_id: id.to_string(),
            is_intersecting: false,
        }
    }
}

/// Receives intersection batches from a watcher
pub type RecordSink = Box<dyn FnMut(&[IntersectionRecord])>;

/// The rendered tree the page component drives
pub trait PageHost {
    /// Ids of every element flagged for observation that is currently present
    fn marked_sections(&self) -> Vec<String>;

    /// Apply a computed style to the section with `id`
    fn apply_style(&mut self, id: &str, style: &SectionStyle);

    /// Scroll the element with `anchor` id into view.
    /// Returns false when no such element exists.
    fn scroll_to(&mut self, anchor: &str, smooth: bool) -> bool;
}

/// Viewport-intersection capability
///
/// A watcher is created with its threshold and sink already bound; the sink
/// receives every batch the environment reports until `disconnect`.
pub trait ViewportWatcher {
    /// Start watching the element with `id`. Returns false if it is not present.
    fn observe(&mut self, id: &str) -> bool;

    /// Release every registration. No batch is delivered afterwards.
    fn disconnect(&mut self);

    /// Number of live observation registrations
    fn registrations(&self) -> usize;
}
