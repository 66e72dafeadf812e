//! In-memory host and watcher
//!
//! Used by tests and by the native pre-render. The watcher never fires on its
//! own; callers drive it with `ManualWatcher::fire`.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use super::{IntersectionRecord, PageHost, RecordSink, ViewportWatcher};
use crate::content::{self, NavAction};
use crate::reveal::SectionStyle;

/// Host that records every side effect instead of touching a DOM
#[derive(Debug, Default)]
pub struct HeadlessHost {
    sections: Vec<String>,
    anchors: Vec<String>,
    styles: HashMap<String, SectionStyle>,
    apply_counts: HashMap<String, usize>,
    scrolls: Vec<String>,
    last_smooth: Option<bool>,
}

impl HeadlessHost {
    /// Host with the given marked sections and anchor ids
    pub fn new<S, A>(sections: S, anchors: A) -> Self
    where
        S: IntoIterator,
        S::Item: Into<String>,
        A: IntoIterator,
        A::Item: Into<String>,
    {
        Self {
            sections: sections.into_iter().map(Into::into).collect(),
            anchors: anchors.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    /// Host mirroring the rendered portfolio page
    pub fn for_page() -> Self {
        Self::new(
            content::animated_sections().map(|s| s.id),
            NavAction::ALL.iter().map(|a| a.anchor()),
        )
    }

    /// Last style applied to `id`
    pub fn style(&self, id: &str) -> Option<&SectionStyle> {
        self.styles.get(id)
    }

    /// How many times a style was applied to `id`
    pub fn apply_count(&self, id: &str) -> usize {
        self.apply_counts.get(id).copied().unwrap_or(0)
    }

    /// Anchors scrolled to, oldest first
    pub fn scrolls(&self) -> &[String] {
        &self.scrolls
    }

    /// Whether the most recent successful scroll was smooth
    pub fn last_scroll_smooth(&self) -> Option<bool> {
        self.last_smooth
    }
}

impl PageHost for HeadlessHost {
    fn marked_sections(&self) -> Vec<String> {
        self.sections.clone()
    }

    fn apply_style(&mut self, id: &str, style: &SectionStyle) {
        self.styles.insert(id.to_string(), style.clone());
        *self.apply_counts.entry(id.to_string()).or_insert(0) += 1;
    }

    fn scroll_to(&mut self, anchor: &str, smooth: bool) -> bool {
        if !self.anchors.iter().any(|a| a == anchor) {
            return false;
        }
        self.scrolls.push(anchor.to_string());
        self.last_smooth = Some(smooth);
        true
    }
}

#[derive(Default)]
struct ManualInner {
    sink: Option<RecordSink>,
    observed: Vec<String>,
    threshold: f64,
}

/// Watcher driven by the caller
///
/// Clones share state, so a test can keep one handle while the mounted page
/// owns another.
#[derive(Clone, Default)]
pub struct ManualWatcher {
    inner: Rc<RefCell<ManualInner>>,
}

impl ManualWatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a sink and threshold, returning a handle sharing this state
    pub fn attach(&self, threshold: f64, sink: RecordSink) -> Self {
        {
            let mut inner = self.inner.borrow_mut();
            inner.sink = Some(sink);
            inner.threshold = threshold;
        }
        self.clone()
    }

    /// Deliver a batch as the environment would. Returns false once disconnected.
    pub fn fire(&self, records: &[IntersectionRecord]) -> bool {
        let mut inner = self.inner.borrow_mut();
        match inner.sink.as_mut() {
            Some(sink) => {
                sink(records);
                true
            }
            None => false,
        }
    }

    pub fn is_connected(&self) -> bool {
        self.inner.borrow().sink.is_some()
    }

    pub fn threshold(&self) -> f64 {
        self.inner.borrow().threshold
    }

    pub fn observed(&self) -> Vec<String> {
        self.inner.borrow().observed.clone()
    }
}

impl ViewportWatcher for ManualWatcher {
    fn observe(&mut self, id: &str) -> bool {
        self.inner.borrow_mut().observed.push(id.to_string());
        true
    }

    fn disconnect(&mut self) {
        let mut inner = self.inner.borrow_mut();
        inner.sink = None;
        inner.observed.clear();
    }

    fn registrations(&self) -> usize {
        self.inner.borrow().observed.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RevealConfig;
    use crate::reveal::RevealEffect;

    #[test]
    fn test_host_records_styles() {
        let mut host = HeadlessHost::new(["a"], ["top"]);
        let config = RevealConfig::default();
        let style = SectionStyle::compute(RevealEffect::FadeUp, true, 0, &config);
        host.apply_style("a", &style);
        host.apply_style("a", &style);
        assert_eq!(host.apply_count("a"), 2);
        assert_eq!(host.style("a"), Some(&style));
        assert_eq!(host.apply_count("b"), 0);
    }

    #[test]
    fn test_host_scroll_missing_anchor() {
        let mut host = HeadlessHost::new(Vec::<String>::new(), ["top"]);
        assert!(!host.scroll_to("bottom", true));
        assert_eq!(host.last_scroll_smooth(), None);
        assert!(host.scroll_to("top", true));
        assert_eq!(host.scrolls(), ["top".to_string()]);
        assert_eq!(host.last_scroll_smooth(), Some(true));
    }

    #[test]
    fn test_watcher_stops_after_disconnect() {
        let received = Rc::new(RefCell::new(0usize));
        let manual = ManualWatcher::new();
        let counter = received.clone();
        let mut watcher = manual.attach(
            0.1,
            Box::new(move |records: &[IntersectionRecord]| {
                *counter.borrow_mut() += records.len()
            }),
        );
        watcher.observe("a");
        assert_eq!(manual.registrations(), 1);
        assert!(manual.fire(&[IntersectionRecord::entering("a")]));

        watcher.disconnect();
        assert!(!manual.fire(&[IntersectionRecord::entering("a")]));
        assert_eq!(*received.borrow(), 1);
        assert_eq!(manual.registrations(), 0);
    }
}
