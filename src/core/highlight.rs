//! Search-term highlighting.
//!
//! The term is escaped before it becomes a pattern, and the surrounding text
//! is HTML-escaped, so neither regex nor markup metacharacters in user input
//! change the result. Callers always highlight from the original text.

use regex::{Regex, RegexBuilder};

/// Tag used as the highlight marker.
pub const MARKER_TAG: &str = "mark";

/// A run of text, either plain or matched by the search term.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Segment<'a> {
    Plain(&'a str),
    Marked(&'a str),
}

/// Compiled, case-insensitive matcher for one search term.
#[derive(Clone, Debug)]
pub struct Highlighter {
    pattern: Regex,
}

impl Highlighter {
    /// Build a highlighter for `term`. Returns `None` for a blank term.
    pub fn new(term: &str) -> Option<Self> {
        if term.is_empty() {
            return None;
        }
        let pattern = RegexBuilder::new(&regex::escape(term))
            .case_insensitive(true)
            .build()
            .ok()?;
        Some(Self { pattern })
    }

    /// Split `text` into plain and marked segments.
    pub fn segments<'a>(&self, text: &'a str) -> Vec<Segment<'a>> {
        let mut segments = Vec::new();
        let mut last = 0;
        for m in self.pattern.find_iter(text) {
            if m.start() > last {
                segments.push(Segment::Plain(&text[last..m.start()]));
            }
            segments.push(Segment::Marked(m.as_str()));
            last = m.end();
        }
        if last < text.len() {
            segments.push(Segment::Plain(&text[last..]));
        }
        segments
    }

    /// Render `text` as HTML with every match wrapped in `<mark>`.
    pub fn to_html(&self, text: &str) -> String {
        self.segments(text)
            .into_iter()
            .map(|segment| match segment {
                Segment::Plain(s) => ammonia::clean_text(s),
                Segment::Marked(s) => {
                    format!("<{0}>{1}</{0}>", MARKER_TAG, ammonia::clean_text(s))
                }
            })
            .collect()
    }
}
