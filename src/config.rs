//! Site configuration.
//!
//! Centralizes the selectors, class names and timing constants the behaviors
//! use. Timings can be overridden per page with a JSON data island:
//!
//! ```html
//! <script type="application/json" id="site-config">
//!   { "submit_delay_ms": 1000, "toast_duration_ms": 6000 }
//! </script>
//! ```

use serde::Deserialize;

use crate::utils::{dom, log};

// =============================================================================
// Timing
// =============================================================================

/// Simulated delays (milliseconds).
pub mod delays {
    /// Contact form: time spent in the submitting state.
    pub const CONTACT_SUBMIT: u32 = 2000;
    /// Contact form: how long the success indicator stays visible.
    pub const CONTACT_SUCCESS_HIDE: u32 = 5000;
    /// Newsletter form: simulated subscription time.
    pub const NEWSLETTER_SUBMIT: u32 = 1500;
    /// Blog: simulated "load more" time.
    pub const LOAD_MORE: u32 = 1500;
}

/// Counter animation.
pub mod counter {
    /// Number of increments from 0 to the target.
    pub const STEPS: u64 = 50;
    /// Interval between ticks.
    pub const TICK_MS: u32 = 30;
}

/// Scroll reveal.
pub mod reveal {
    /// Delay between consecutive siblings.
    pub const STAGGER_MS: u32 = 100;
    /// Upper bound for a single element's delay.
    pub const MAX_STAGGER_MS: u32 = 2000;
    pub const THRESHOLD: f64 = 0.1;
    pub const ROOT_MARGIN: &str = "0px 0px -50px 0px";
}

/// Navbar scroll styling.
pub mod navbar {
    /// Scroll offset (px) past which the navbar switches style.
    pub const SCROLL_THRESHOLD: f64 = 50.0;
    pub const TOP_BACKGROUND: &str = "rgba(255, 255, 255, 0.95)";
    pub const SCROLLED_BACKGROUND: &str = "rgba(255, 255, 255, 0.98)";
    pub const TOP_SHADOW: &str = "0 2px 20px rgba(0, 0, 0, 0.1)";
    pub const SCROLLED_SHADOW: &str = "0 2px 20px rgba(0, 0, 0, 0.15)";
}

/// Toast notifications.
pub mod toast {
    /// Maximum number of toasts on screen.
    pub const MAX_VISIBLE: usize = 4;
    /// Time before a toast dismisses itself.
    pub const DURATION_MS: u32 = 4000;
    /// Id of the element the toast stack mounts into.
    pub const ROOT_ID: &str = "toast-root";
}

// =============================================================================
// Document Contract
// =============================================================================

/// Selectors for the elements the behaviors bind to.
pub mod selectors {
    pub const ANCHOR_LINKS: &str = "a[href^=\"#\"]";
    pub const NAVBAR: &str = ".navbar";
    pub const NAVBAR_TOGGLER: &str = ".navbar-toggler";
    pub const NAVBAR_COLLAPSE: &str = ".navbar-collapse";
    pub const NAV_LINKS: &str = ".nav-link";

    pub const ANIMATE_ON_SCROLL: &str = ".animate-on-scroll";
    pub const COUNTERS: &str = ".stat-item h3, .stat-card h3";

    pub const FORM_CONTROLS: &str = "input, textarea, select";
    pub const REQUIRED_CONTROLS: &str = "[required]";
    pub const SUBMIT_BUTTON: &str = "button[type=\"submit\"]";
    pub const BUTTON_TEXT: &str = ".btn-text";
    pub const BUTTON_LOADING: &str = ".btn-loading";
    pub const EMAIL_INPUT: &str = "input[type=\"email\"]";
    pub const CONTACT_FORM_ID: &str = "contactForm";
    pub const NEWSLETTER_FORM_ID: &str = "newsletterForm";
    pub const FORM_SUCCESS_ID: &str = "formSuccess";

    pub const BLOG_SEARCH_ID: &str = "blogSearch";
    pub const BLOG_ITEMS: &str = ".blog-item";
    pub const BLOG_CAPTION: &str = "h4";
    pub const BLOG_BODY: &str = "p";
    pub const FILTER_BUTTONS: &str = ".filter-btn";
    pub const LOAD_MORE_ID: &str = "loadMoreBtn";

    pub const FAQ_SEARCH_ID: &str = "faqSearch";
    pub const FAQ_ITEMS: &str = ".faq-item";
    pub const FAQ_CAPTION: &str = ".accordion-button";
    pub const FAQ_BODY: &str = ".accordion-body";
    pub const FAQ_CATEGORY_LINKS: &str = ".category-link";
    pub const FAQ_CONTAINER_ID: &str = "faqContainer";
    pub const FAQ_NO_RESULTS_ID: &str = "faqNoResults";

    pub const CONFIG_ID: &str = "site-config";
}

/// Class names written onto elements.
pub mod classes {
    pub const ACTIVE: &str = "active";
    pub const ANIMATED: &str = "animated";
    pub const HIDDEN: &str = "d-none";
    pub const INVALID: &str = "is-invalid";
    pub const VALID: &str = "is-valid";
    pub const SCROLLED: &str = "scrolled";
    pub const SHOW: &str = "show";
    pub const NO_RESULTS: &str = "text-center py-5";
}

/// Attributes read from or written to elements.
pub mod attrs {
    pub const CATEGORY: &str = "data-category";
    pub const ORIGINAL_TEXT: &str = "data-original-text";
    pub const ORIGINAL_HTML: &str = "data-original-html";
}

// =============================================================================
// User-facing Text
// =============================================================================

pub mod messages {
    pub const INVALID_EMAIL: &str = "Please enter a valid email address";
    pub const SUBSCRIBED: &str = "Successfully subscribed to our newsletter!";
    pub const SUBSCRIBING: &str = "Subscribing...";
    pub const LOADING: &str = "Loading...";
    pub const ALL_LOADED: &str = "All articles loaded!";
    pub const FAQ_NO_RESULTS: &str = "No results found. Please try a different keyword.";
}

// =============================================================================
// Runtime Overrides
// =============================================================================

/// Timing configuration, with optional per-page overrides.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub submit_delay_ms: u32,
    pub success_hide_ms: u32,
    pub newsletter_delay_ms: u32,
    pub load_more_delay_ms: u32,
    pub counter_tick_ms: u32,
    pub counter_steps: u64,
    pub reveal_stagger_ms: u32,
    pub navbar_scroll_threshold: f64,
    pub toast_duration_ms: u32,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            submit_delay_ms: delays::CONTACT_SUBMIT,
            success_hide_ms: delays::CONTACT_SUCCESS_HIDE,
            newsletter_delay_ms: delays::NEWSLETTER_SUBMIT,
            load_more_delay_ms: delays::LOAD_MORE,
            counter_tick_ms: counter::TICK_MS,
            counter_steps: counter::STEPS,
            reveal_stagger_ms: reveal::STAGGER_MS,
            navbar_scroll_threshold: navbar::SCROLL_THRESHOLD,
            toast_duration_ms: toast::DURATION_MS,
        }
    }
}

impl SiteConfig {
    /// Parse overrides from JSON. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load the page's data island, falling back to defaults.
    pub fn load() -> Self {
        let Some(json) = dom::element_by_id(selectors::CONFIG_ID).and_then(|el| el.text_content())
        else {
            return Self::default();
        };

        match Self::from_json(&json) {
            Ok(config) => {
                log::debug(&format!("site config: {:?}", config));
                config
            }
            Err(e) => {
                log::warn(&format!("ignoring malformed #{}: {}", selectors::CONFIG_ID, e));
                Self::default()
            }
        }
    }
}
