use std::sync::LazyLock;

use regex::Regex;
use scraper::{ElementRef, Html, Selector};

static ASCII_WHITESPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t\r\n\x0C]+").expect("whitespace regex is valid"));

/// One way a field shows up on a page template: a CSS selector, optionally
/// narrowed to elements whose text contains a marker token.
#[derive(Debug, Clone)]
pub struct FieldMatcher {
    selector: Selector,
    text_marker: Option<&'static str>,
}

impl FieldMatcher {
    /// Builds a matcher from a selector known at compile time.
    ///
    /// # Panics
    ///
    /// Panics if `css` is not a valid selector.
    pub fn new(css: &'static str) -> Self {
        let selector = Selector::parse(css)
            .unwrap_or_else(|e| panic!("invalid field selector {:?}: {:?}", css, e));
        FieldMatcher {
            selector,
            text_marker: None,
        }
    }

    pub fn containing(mut self, marker: &'static str) -> Self {
        self.text_marker = Some(marker);
        self
    }

    pub fn matches(&self, element: &ElementRef) -> bool {
        if !self.selector.matches(element) {
            return false;
        }
        match self.text_marker {
            Some(marker) => element.text().collect::<String>().contains(marker),
            None => true,
        }
    }
}

/// First element in document order accepted by any of `matchers`.
pub fn find_first<'a>(document: &'a Html, matchers: &[FieldMatcher]) -> Option<ElementRef<'a>> {
    document
        .root_element()
        .descendants()
        .filter_map(ElementRef::wrap)
        .find(|element| matchers.iter().any(|m| m.matches(element)))
}

/// All text under `element`, with runs of ASCII whitespace collapsed and the
/// ends trimmed. Non-ASCII spacing such as U+3000 is kept as is.
pub fn element_text(element: &ElementRef) -> String {
    let text = element.text().collect::<String>();
    ASCII_WHITESPACE_RE
        .replace_all(&text, " ")
        .trim_matches(' ')
        .to_string()
}

/// The first non-blank text node directly under `element`, skipping any
/// nested elements.
pub fn direct_text(element: &ElementRef) -> Option<String> {
    element
        .children()
        .filter_map(|child| child.value().as_text())
        .map(|text| text.trim())
        .find(|text| !text.is_empty())
        .map(str::to_string)
}
