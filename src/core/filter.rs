//! Client-side list filtering for blog posts and FAQ entries.
//!
//! Text search and tag filtering are separate operations: whichever ran last
//! decides visibility on its own.

use crate::models::DisplayItem;

/// Visibility decided by a filter pass, index-aligned with the input items.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterOutcome {
    pub visible: Vec<bool>,
}

impl FilterOutcome {
    /// Number of visible items.
    pub fn visible_count(&self) -> usize {
        self.visible.iter().filter(|v| **v).count()
    }

    pub fn any_visible(&self) -> bool {
        self.visible.iter().any(|v| *v)
    }
}

/// Show items whose caption or body contains `term`, ignoring case.
///
/// An empty term shows everything.
pub fn filter_by_text(items: &[DisplayItem], term: &str) -> FilterOutcome {
    let needle = term.to_lowercase();
    FilterOutcome {
        visible: items
            .iter()
            .map(|item| item.contains_lowercase(&needle))
            .collect(),
    }
}

/// Show items whose tag equals `tag`; [`crate::models::ALL_TAGS`] shows
/// everything.
pub fn filter_by_tag(items: &[DisplayItem], tag: &str) -> FilterOutcome {
    FilterOutcome {
        visible: items.iter().map(|item| item.has_tag(tag)).collect(),
    }
}
