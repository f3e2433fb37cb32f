//! Navigation chrome and scroll-reveal helpers.

use crate::config::{navbar, reveal};

/// Navbar appearance for a given scroll offset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavbarStyle {
    /// At (or near) the top of the page
    Top,
    /// Scrolled past the threshold
    Scrolled,
}

impl NavbarStyle {
    /// Pick the style for a vertical scroll offset in pixels.
    pub fn for_scroll(scroll_y: f64, threshold: f64) -> Self {
        if scroll_y > threshold {
            Self::Scrolled
        } else {
            Self::Top
        }
    }

    pub fn background(self) -> &'static str {
        match self {
            Self::Top => navbar::TOP_BACKGROUND,
            Self::Scrolled => navbar::SCROLLED_BACKGROUND,
        }
    }

    pub fn box_shadow(self) -> &'static str {
        match self {
            Self::Top => navbar::TOP_SHADOW,
            Self::Scrolled => navbar::SCROLLED_SHADOW,
        }
    }

    pub fn is_scrolled(self) -> bool {
        matches!(self, Self::Scrolled)
    }
}

/// Selector for an in-page anchor `href`, or `None` for a bare `#`.
pub fn anchor_target(href: &str) -> Option<&str> {
    let href = href.trim();
    if href.len() > 1 && href.starts_with('#') {
        Some(href)
    } else {
        None
    }
}

/// Reveal delay for the element at `index` among its animated siblings.
pub fn stagger_delay_ms(index: usize, step_ms: u32) -> u32 {
    u32::try_from(index)
        .unwrap_or(u32::MAX)
        .saturating_mul(step_ms)
        .min(reveal::MAX_STAGGER_MS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navbar_style_threshold() {
        assert_eq!(NavbarStyle::for_scroll(0.0, 50.0), NavbarStyle::Top);
        assert_eq!(NavbarStyle::for_scroll(50.0, 50.0), NavbarStyle::Top);
        assert_eq!(NavbarStyle::for_scroll(50.5, 50.0), NavbarStyle::Scrolled);
        assert!(NavbarStyle::Scrolled.is_scrolled());
    }

    #[test]
    fn test_navbar_style_values() {
        assert_eq!(NavbarStyle::Top.background(), "rgba(255, 255, 255, 0.95)");
        assert_eq!(
            NavbarStyle::Scrolled.box_shadow(),
            "0 2px 20px rgba(0, 0, 0, 0.15)"
        );
    }

    #[test]
    fn test_anchor_target() {
        assert_eq!(anchor_target("#features"), Some("#features"));
        assert_eq!(anchor_target("#"), None);
        assert_eq!(anchor_target(""), None);
        assert_eq!(anchor_target("/about#team"), None);
    }

    #[test]
    fn test_stagger_delay() {
        assert_eq!(stagger_delay_ms(0, 100), 0);
        assert_eq!(stagger_delay_ms(3, 100), 300);
        assert_eq!(stagger_delay_ms(usize::MAX, 100), reveal::MAX_STAGGER_MS);
    }
}
