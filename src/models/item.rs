//! Filterable display items (blog posts, FAQ entries).

/// Sentinel classification tag meaning "show every item".
pub const ALL_TAGS: &str = "all";

/// A rendered entry that can be searched and filtered.
///
/// Built fresh from the document on every filter operation; nothing here
/// outlives the call that created it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DisplayItem {
    /// Title or question text
    pub caption: String,
    /// Content or answer text
    pub body: String,
    /// Classification tag (e.g. `data-category`)
    pub tag: Option<String>,
}

impl DisplayItem {
    pub fn new(caption: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            caption: caption.into(),
            body: body.into(),
            tag: None,
        }
    }

    /// Attach a classification tag.
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    /// Case-insensitive substring check against caption and body.
    ///
    /// `needle` must already be lowercased.
    pub fn contains_lowercase(&self, needle: &str) -> bool {
        self.caption.to_lowercase().contains(needle) || self.body.to_lowercase().contains(needle)
    }

    /// Whether this item's tag equals `tag`, or `tag` is [`ALL_TAGS`].
    pub fn has_tag(&self, tag: &str) -> bool {
        tag == ALL_TAGS || self.tag.as_deref() == Some(tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_lowercase() {
        let item = DisplayItem::new("Intro to Vision", "Cameras and LENSES");
        assert!(item.contains_lowercase("vision"));
        assert!(item.contains_lowercase("lenses"));
        assert!(!item.contains_lowercase("audio"));
    }

    #[test]
    fn test_has_tag() {
        let item = DisplayItem::new("Cooking", "").with_tag("food");
        assert!(item.has_tag("food"));
        assert!(item.has_tag(ALL_TAGS));
        assert!(!item.has_tag("tech"));
        assert!(!DisplayItem::new("Untagged", "").has_tag("food"));
    }
}
