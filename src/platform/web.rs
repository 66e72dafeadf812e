//! Browser implementations of `PageHost` and `ViewportWatcher`

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    ScrollBehavior, ScrollIntoViewOptions,
};

use super::{IntersectionRecord, PageHost, RecordSink, ViewportWatcher};
use crate::consts::ANIMATE_ATTR;
use crate::reveal::SectionStyle;

/// DOM-backed host
pub struct DomHost {
    document: Document,
}

impl DomHost {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    fn element(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }
}

impl PageHost for DomHost {
    fn marked_sections(&self) -> Vec<String> {
        let Ok(nodes) = self.document.query_selector_all(&format!("[{}]", ANIMATE_ATTR)) else {
            return Vec::new();
        };
        (0..nodes.length())
            .filter_map(|i| nodes.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .map(|el| el.id())
            .filter(|id| !id.is_empty())
            .collect()
    }

    fn apply_style(&mut self, id: &str, style: &SectionStyle) {
        let Some(el) = self.element(id) else {
            return;
        };
        let _ = el.set_attribute("style", &style.to_css());
        let classes = el.class_list();
        let _ = classes.remove_2("is-hidden", "is-revealed");
        let _ = classes.add_1(style.state_class());
    }

    fn scroll_to(&mut self, anchor: &str, smooth: bool) -> bool {
        let Some(el) = self.element(anchor) else {
            return false;
        };
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(if smooth {
            ScrollBehavior::Smooth
        } else {
            ScrollBehavior::Auto
        });
        el.scroll_into_view_with_scroll_into_view_options(&options);
        true
    }
}

/// `IntersectionObserver`-backed watcher
///
/// Owns the JS callback; dropping the watcher disconnects the observer before
/// the callback is freed.
pub struct DomIntersectionWatcher {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
    document: Document,
    observed: usize,
}

impl DomIntersectionWatcher {
    /// Whether the browser exposes `IntersectionObserver`
    pub fn is_supported() -> bool {
        let Some(window) = web_sys::window() else {
            return false;
        };
        js_sys::Reflect::has(&window, &JsValue::from_str("IntersectionObserver"))
            .unwrap_or(false)
    }

    pub fn new(threshold: f64, mut sink: RecordSink) -> Result<Self, JsValue> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("no document"))?;

        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, _observer: IntersectionObserver| {
                let records: Vec<IntersectionRecord> = entries
                    .iter()
                    .filter_map(|e| e.dyn_into::<IntersectionObserverEntry>().ok())
                    .map(|entry| IntersectionRecord {
                        target_id: entry.target().id(),
                        is_intersecting: entry.is_intersecting(),
                    })
                    .collect();
                sink(&records);
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;

        Ok(Self {
            observer,
            _callback: callback,
            document,
            observed: 0,
        })
    }

    /// Build a watcher, or `None` when the capability is missing
    pub fn create(threshold: f64, sink: RecordSink) -> Option<Self> {
        if !Self::is_supported() {
            return None;
        }
        match Self::new(threshold, sink) {
            Ok(watcher) => Some(watcher),
            Err(e) => {
                log::warn!("Failed to create IntersectionObserver: {:?}", e);
                None
            }
        }
    }
}

impl ViewportWatcher for DomIntersectionWatcher {
    fn observe(&mut self, id: &str) -> bool {
        match self.document.get_element_by_id(id) {
            Some(el) => {
                self.observer.observe(&el);
                self.observed += 1;
                true
            }
            None => false,
        }
    }

    fn disconnect(&mut self) {
        self.observer.disconnect();
        self.observed = 0;
    }

    fn registrations(&self) -> usize {
        self.observed
    }
}

impl Drop for DomIntersectionWatcher {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
