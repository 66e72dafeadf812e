//! Reveal animation configuration
//!
//! Read from an inline JSON block in the host page; never written back.

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_EASING, DEFAULT_THRESHOLD, REVEAL_DURATION_MS};

/// Reveal animation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    /// Intersection ratio at which a section counts as on screen (0.0 - 1.0)
    pub threshold: f64,
    /// Transition duration shared by every section
    pub duration_ms: u32,
    /// CSS timing function shared by every section
    pub easing: String,

    // === Accessibility ===
    /// Skip the reveal animation and show everything immediately
    pub reduced_motion: bool,
    /// Smooth scrolling for the hero navigation buttons
    pub smooth_scroll: bool,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            duration_ms: REVEAL_DURATION_MS,
            easing: DEFAULT_EASING.to_string(),
            reduced_motion: false,
            smooth_scroll: true,
        }
    }
}

impl RevealConfig {
    /// Element id of the inline `<script type="application/json">` block
    pub const ELEMENT_ID: &'static str = "reveal-config";

    /// Parse from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        Ok(config.normalized())
    }

    /// Threshold clamped to [0, 1]; NaN falls back to the default
    pub fn effective_threshold(&self) -> f64 {
        if self.threshold.is_nan() {
            DEFAULT_THRESHOLD
        } else {
            self.threshold.clamp(0.0, 1.0)
        }
    }

    fn normalized(mut self) -> Self {
        self.threshold = self.effective_threshold();
        if self.easing.trim().is_empty() {
            self.easing = DEFAULT_EASING.to_string();
        }
        self
    }

    /// Load config from the host page (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let window = web_sys::window();
        let json = window
            .as_ref()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(Self::ELEMENT_ID))
            .and_then(|el| el.text_content());

        let mut config = match json.as_deref().map(Self::from_json) {
            Some(Ok(config)) => {
                log::info!("Loaded reveal config from page");
                config
            }
            Some(Err(e)) => {
                log::warn!("Invalid reveal config, using defaults: {}", e);
                Self::default()
            }
            None => {
                log::info!("Using default reveal config");
                Self::default()
            }
        };

        let prefers_reduced = window
            .and_then(|w| w.match_media("(prefers-reduced-motion: reduce)").ok())
            .flatten()
            .map(|mq| mq.matches())
            .unwrap_or(false);
        if prefers_reduced {
            log::info!("prefers-reduced-motion is set, reveals disabled");
            config.reduced_motion = true;
        }

        config
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RevealConfig::default();
        assert_eq!(config.threshold, 0.1);
        assert_eq!(config.duration_ms, 1000);
        assert_eq!(config.easing, "cubic-bezier(0.16, 1, 0.3, 1)");
        assert!(!config.reduced_motion);
        assert!(config.smooth_scroll);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = RevealConfig::from_json(r#"{ "reduced_motion": true }"#).unwrap();
        assert!(config.reduced_motion);
        assert_eq!(config.duration_ms, 1000);
        assert_eq!(config.threshold, 0.1);
    }

    #[test]
    fn test_threshold_clamped() {
        let config = RevealConfig::from_json(r#"{ "threshold": 3.5 }"#).unwrap();
        assert_eq!(config.threshold, 1.0);

        let config = RevealConfig::from_json(r#"{ "threshold": -1 }"#).unwrap();
        assert_eq!(config.threshold, 0.0);
    }

    #[test]
    fn test_blank_easing_restored() {
        let config = RevealConfig::from_json(r#"{ "easing": "  " }"#).unwrap();
        assert_eq!(config.easing, DEFAULT_EASING);
    }

    #[test]
    fn test_invalid_json_is_error() {
        assert!(RevealConfig::from_json("{ threshold: }").is_err());
    }
}
