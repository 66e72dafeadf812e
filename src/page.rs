//! Reveal-on-scroll page component
//!
//! `RevealPage` owns the visibility flags and applies styles through a
//! `PageHost`. `MountedPage` is the scoped mount: it wires a `ViewportWatcher`
//! to the page and disconnects it when dropped.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::config::RevealConfig;
use crate::content::{self, AnimatedSection, NavAction};
use crate::platform::{IntersectionRecord, PageHost, RecordSink, ViewportWatcher};
use crate::reveal::SectionStyle;
use crate::visibility::VisibilityMap;

/// Page state: visibility flags plus the host they are rendered into
pub struct RevealPage<H: PageHost> {
    visibility: VisibilityMap,
    host: H,
    config: RevealConfig,
}

impl<H: PageHost> RevealPage<H> {
    pub fn new(host: H, config: RevealConfig) -> Self {
        Self {
            visibility: VisibilityMap::new(),
            host,
            config,
        }
    }

    pub fn visibility(&self) -> &VisibilityMap {
        &self.visibility
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Current style of a section
    pub fn style_for(&self, section: &AnimatedSection) -> SectionStyle {
        SectionStyle::compute(
            section.effect,
            self.visibility.is_visible(section.id),
            section.delay_ms,
            &self.config,
        )
    }

    /// Push the current style of every marked section to the host
    pub fn sync_styles(&mut self) {
        for id in self.host.marked_sections() {
            self.apply(&id);
        }
    }

    /// Handle one intersection batch.
    ///
    /// Returns how many sections were newly revealed. Sections that are
    /// already visible are left untouched.
    pub fn deliver(&mut self, records: &[IntersectionRecord]) -> usize {
        let mut revealed = 0;
        for record in records.iter().filter(|r| r.is_intersecting) {
            if self.visibility.mark_visible(&record.target_id) {
                log::debug!("Revealed section '{}'", record.target_id);
                self.apply(&record.target_id);
                revealed += 1;
            }
        }
        revealed
    }

    /// Reveal every marked section at once
    pub fn reveal_everything(&mut self) -> usize {
        let marked = self.host.marked_sections();
        let newly = self.visibility.reveal_all(marked.iter().map(String::as_str));
        for id in &newly {
            self.apply(id);
        }
        newly.len()
    }

    /// Scroll to the anchor of `action`. Missing anchors are a no-op.
    ///
    /// Scrolling jumps instead of animating when reduced motion is set.
    pub fn navigate(&mut self, action: NavAction) -> bool {
        let smooth = self.config.smooth_scroll && !self.config.reduced_motion;
        let scrolled = self.host.scroll_to(action.anchor(), smooth);
        if !scrolled {
            log::debug!("Anchor '#{}' not found, ignoring", action.anchor());
        }
        scrolled
    }

    fn apply(&mut self, id: &str) {
        match content::section_by_id(id) {
            Some(section) => {
                let style = self.style_for(&section);
                self.host.apply_style(id, &style);
            }
            None => log::debug!("No reveal style for unknown section '{}'", id),
        }
    }
}

/// A page mounted with its watcher
///
/// Dropping the handle disconnects the watcher, whatever state the page is in.
pub struct MountedPage<H: PageHost + 'static, W: ViewportWatcher> {
    page: Rc<RefCell<RevealPage<H>>>,
    watcher: Option<W>,
}

impl<H: PageHost + 'static, W: ViewportWatcher> MountedPage<H, W> {
    /// Mount the page.
    ///
    /// `make_watcher` receives the threshold and a sink; returning `None`
    /// means the environment has no intersection support, in which case every
    /// section is revealed immediately.
    pub fn mount<F>(host: H, config: RevealConfig, make_watcher: F) -> Self
    where
        F: FnOnce(f64, RecordSink) -> Option<W>,
    {
        let threshold = config.effective_threshold();
        let reduced_motion = config.reduced_motion;
        let page = Rc::new(RefCell::new(RevealPage::new(host, config)));
        page.borrow_mut().sync_styles();

        if reduced_motion {
            let n = page.borrow_mut().reveal_everything();
            log::info!("Reduced motion: revealed {} sections without watching", n);
            return Self {
                page,
                watcher: None,
            };
        }

        let sink = Self::sink_for(Rc::downgrade(&page));
        let watcher = match make_watcher(threshold, sink) {
            Some(mut watcher) => {
                let marked = page.borrow().host().marked_sections();
                let observed = marked.iter().filter(|id| watcher.observe(id)).count();
                log::info!(
                    "Watching {} sections (threshold {})",
                    observed,
                    threshold
                );
                Some(watcher)
            }
            None => {
                let n = page.borrow_mut().reveal_everything();
                log::warn!(
                    "Viewport intersection unavailable, revealed {} sections",
                    n
                );
                None
            }
        };

        Self { page, watcher }
    }

    /// The watcher callback only holds a weak reference, so batches that
    /// arrive after unmount are dropped.
    fn sink_for(page: Weak<RefCell<RevealPage<H>>>) -> RecordSink {
        Box::new(move |records: &[IntersectionRecord]| match page.upgrade() {
            Some(page) => {
                page.borrow_mut().deliver(records);
            }
            None => log::debug!("Intersection batch after unmount ignored"),
        })
    }

    /// Weak handle for event callbacks that must not keep the page alive
    pub fn downgrade(&self) -> Weak<RefCell<RevealPage<H>>> {
        Rc::downgrade(&self.page)
    }

    /// Run `f` against the page state
    pub fn with_page<R>(&self, f: impl FnOnce(&RevealPage<H>) -> R) -> R {
        f(&self.page.borrow())
    }

    pub fn navigate(&self, action: NavAction) -> bool {
        self.page.borrow_mut().navigate(action)
    }

    /// True when sections were revealed without a watcher
    pub fn is_degraded(&self) -> bool {
        self.watcher.is_none()
    }

    pub fn registrations(&self) -> usize {
        self.watcher.as_ref().map_or(0, |w| w.registrations())
    }

    /// Tear down explicitly
    pub fn unmount(self) {}
}

impl<H: PageHost + 'static, W: ViewportWatcher> Drop for MountedPage<H, W> {
    fn drop(&mut self) {
        if let Some(watcher) = self.watcher.as_mut() {
            watcher.disconnect();
            log::info!("Page unmounted, watcher disconnected");
        }
    }
}

/// Holds the mounted page across browser lifecycle events
pub struct MountSlot<H: PageHost + 'static, W: ViewportWatcher> {
    mounted: Option<MountedPage<H, W>>,
}

impl<H: PageHost + 'static, W: ViewportWatcher> Default for MountSlot<H, W> {
    fn default() -> Self {
        Self { mounted: None }
    }
}

impl<H: PageHost + 'static, W: ViewportWatcher> MountSlot<H, W> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a freshly mounted page, unmounting any previous one
    pub fn install(&mut self, page: MountedPage<H, W>) {
        self.mounted = Some(page);
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted.is_some()
    }

    pub fn mounted(&self) -> Option<&MountedPage<H, W>> {
        self.mounted.as_ref()
    }

    /// Handle `pagehide`. A page kept in the back/forward cache stays
    /// mounted so it is still live when restored. Returns true if unmounted.
    pub fn on_page_hide(&mut self, persisted: bool) -> bool {
        if persisted {
            log::debug!("Page cached for back/forward navigation, keeping mount");
            return false;
        }
        match self.mounted.take() {
            Some(page) => {
                page.unmount();
                true
            }
            None => false,
        }
    }
}
