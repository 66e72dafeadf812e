//! Modelo Portfolio - a model's portfolio page with scroll-triggered reveals
//!
//! Core modules:
//! - `visibility`: Monotonic per-section reveal flags
//! - `reveal`: Pure style rule for hidden/revealed sections
//! - `content`: Static page content (sections, gallery, contacts)
//! - `render`: HTML rendering from visibility state
//! - `page`: The page component and its scoped mount
//! - `platform`: Browser/headless platform abstraction
//! - `config`: Reveal animation configuration

pub mod config;
pub mod content;
pub mod page;
pub mod platform;
pub mod render;
pub mod reveal;
pub mod visibility;

pub use config::RevealConfig;
pub use content::NavAction;
pub use page::{MountSlot, MountedPage, RevealPage};
pub use platform::{IntersectionRecord, PageHost, ViewportWatcher};
pub use reveal::{RevealEffect, SectionStyle};
pub use visibility::VisibilityMap;

/// Page configuration constants
pub mod consts {
    /// Intersection ratio at which a section counts as on screen
    pub const DEFAULT_THRESHOLD: f64 = 0.1;
    /// Reveal transition duration
    pub const REVEAL_DURATION_MS: u32 = 1000;
    /// Shared easing curve (expo-out)
    pub const DEFAULT_EASING: &str = "cubic-bezier(0.16, 1, 0.3, 1)";

    /// Attribute flagging an element for observation
    pub const ANIMATE_ATTR: &str = "data-animate";
    /// Element the page renders into
    pub const APP_ROOT_ID: &str = "app";
}
