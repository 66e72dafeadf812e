//! Reveal style rule
//!
//! Pure mapping from (effect, visible, delay, config) to the inline style a
//! section carries. Every section shares one duration and easing curve; only
//! the stagger delay differs between siblings.

use crate::config::RevealConfig;

/// Vertical offset of a hidden `FadeUp` section, in rem
pub const HIDDEN_OFFSET_REM: f32 = 2.0;
/// Scale of a hidden `ScaleIn` section
pub const HIDDEN_SCALE: f32 = 0.95;

/// How a section moves into place
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealEffect {
    /// Fade in while sliding up
    FadeUp,
    /// Fade in while growing to full size
    ScaleIn,
}

impl RevealEffect {
    pub fn as_str(&self) -> &'static str {
        match self {
            RevealEffect::FadeUp => "fade-up",
            RevealEffect::ScaleIn => "scale-in",
        }
    }

    /// Transform of a section that has not been revealed yet
    pub fn hidden_transform(&self) -> RevealTransform {
        match self {
            RevealEffect::FadeUp => RevealTransform {
                opacity: 0.0,
                offset_y_rem: HIDDEN_OFFSET_REM,
                scale: 1.0,
            },
            RevealEffect::ScaleIn => RevealTransform {
                opacity: 0.0,
                offset_y_rem: 0.0,
                scale: HIDDEN_SCALE,
            },
        }
    }
}

/// Visual state of a section at one end of its transition
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealTransform {
    pub opacity: f32,
    /// Positive values push the section down
    pub offset_y_rem: f32,
    pub scale: f32,
}

impl RevealTransform {
    /// Fully opaque, in place, full size
    pub const SETTLED: RevealTransform = RevealTransform {
        opacity: 1.0,
        offset_y_rem: 0.0,
        scale: 1.0,
    };

    pub fn is_settled(&self) -> bool {
        *self == Self::SETTLED
    }

    fn css_transform(&self) -> String {
        format!(
            "translateY({}rem) scale({})",
            fmt_num(self.offset_y_rem),
            fmt_num(self.scale)
        )
    }
}

/// Transition timing shared by all sections
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub duration_ms: u32,
    pub delay_ms: u32,
    pub easing: String,
}

/// Computed presentation of one section
#[derive(Debug, Clone, PartialEq)]
pub struct SectionStyle {
    pub transform: RevealTransform,
    pub transition: Transition,
    pub visible: bool,
}

impl SectionStyle {
    /// Compute the style for a section
    pub fn compute(
        effect: RevealEffect,
        visible: bool,
        delay_ms: u32,
        config: &RevealConfig,
    ) -> Self {
        let transform = if visible {
            RevealTransform::SETTLED
        } else {
            effect.hidden_transform()
        };
        Self {
            transform,
            transition: Transition {
                duration_ms: if config.reduced_motion { 0 } else { config.duration_ms },
                delay_ms,
                easing: config.easing.clone(),
            },
            visible,
        }
    }

    /// State class toggled alongside the inline style
    pub fn state_class(&self) -> &'static str {
        if self.visible {
            "is-revealed"
        } else {
            "is-hidden"
        }
    }

    /// Inline `style` attribute value
    pub fn to_css(&self) -> String {
        format!(
            "opacity: {}; transform: {}; transition-property: opacity, transform; \
             transition-duration: {}ms; transition-delay: {}ms; transition-timing-function: {};",
            fmt_num(self.transform.opacity),
            self.transform.css_transform(),
            self.transition.duration_ms,
            self.transition.delay_ms,
            self.transition.easing,
        )
    }
}

/// Format without a trailing `.0` so `1.0` prints as `1`
fn fmt_num(v: f32) -> String {
    if v.fract() == 0.0 {
        format!("{}", v as i32)
    } else {
        format!("{}", v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_fade_up_is_offset_and_transparent() {
        let config = RevealConfig::default();
        let style = SectionStyle::compute(RevealEffect::FadeUp, false, 0, &config);
        assert!(style.transform.opacity < 1.0);
        assert!(style.transform.offset_y_rem > 0.0);
        assert_eq!(style.transform.scale, 1.0);
        assert_eq!(style.state_class(), "is-hidden");
    }

    #[test]
    fn test_hidden_scale_in_is_shrunk() {
        let config = RevealConfig::default();
        let style = SectionStyle::compute(RevealEffect::ScaleIn, false, 200, &config);
        assert!(style.transform.opacity < 1.0);
        assert!(style.transform.scale < 1.0);
        assert_eq!(style.transform.offset_y_rem, 0.0);
    }

    #[test]
    fn test_visible_is_settled_for_both_effects() {
        for effect in [RevealEffect::FadeUp, RevealEffect::ScaleIn] {
            let style = SectionStyle::compute(effect, true, 0, &RevealConfig::default());
            assert!(style.transform.is_settled());
            assert_eq!(style.state_class(), "is-revealed");
        }
    }

    #[test]
    fn test_transition_shared_except_delay() {
        let config = RevealConfig::default();
        let a = SectionStyle::compute(RevealEffect::ScaleIn, false, 100, &config);
        let b = SectionStyle::compute(RevealEffect::FadeUp, false, 300, &config);
        assert_eq!(a.transition.duration_ms, b.transition.duration_ms);
        assert_eq!(a.transition.easing, b.transition.easing);
        assert_ne!(a.transition.delay_ms, b.transition.delay_ms);
    }

    #[test]
    fn test_reduced_motion_has_no_duration() {
        let config = RevealConfig {
            reduced_motion: true,
            ..Default::default()
        };
        let style = SectionStyle::compute(RevealEffect::ScaleIn, true, 300, &config);
        assert_eq!(style.transition.duration_ms, 0);
    }

    #[test]
    fn test_css_output() {
        let config = RevealConfig::default();
        let style = SectionStyle::compute(RevealEffect::FadeUp, false, 200, &config);
        let css = style.to_css();
        assert!(css.contains("opacity: 0;"));
        assert!(css.contains("translateY(2rem) scale(1)"));
        assert!(css.contains("transition-duration: 1000ms;"));
        assert!(css.contains("transition-delay: 200ms;"));
        assert!(css.contains("cubic-bezier(0.16, 1, 0.3, 1)"));

        let style = SectionStyle::compute(RevealEffect::ScaleIn, false, 0, &config);
        assert!(style.to_css().contains("translateY(0rem) scale(0.95)"));
    }
}
