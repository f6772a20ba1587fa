//! HTML parser for extracting anchors
//!
//! Index pages are plain lists of `<a>` elements. The survey needs three
//! things from each one: the `href`, the space-separated `rel` tokens, and
//! (for the index root) the text content.

use scraper::{Html, Selector};

/// An `<a>` element as seen by the survey
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Anchor {
    /// Raw `href` attribute, if present
    pub href: Option<String>,
    /// Tokens of the `rel` attribute
    pub rel: Vec<String>,
    /// Concatenated text content
    pub text: String,
}

impl Anchor {
    /// Returns true if `token` is one of the anchor's relations
    pub fn has_rel(&self, token: &str) -> bool {
        self.rel.iter().any(|r| r == token)
    }

    /// The `href` attribute, treating an empty value as absent
    pub fn link(&self) -> Option<&str> {
        self.href.as_deref().filter(|href| !href.is_empty())
    }
}

/// Extracts every anchor element from an HTML document, in document order
///
/// # Example
///
/// ```
/// use index_hosting_survey::crawler::extract_anchors;
///
/// let html = r#"<a href="/pkg-1.0.tar.gz" rel="internal">pkg-1.0.tar.gz</a>"#;
/// let anchors = extract_anchors(html);
/// assert_eq!(anchors.len(), 1);
/// assert!(anchors[0].has_rel("internal"));
/// ```
pub fn extract_anchors(html: &str) -> Vec<Anchor> {
    let document = Html::parse_document(html);

    let Ok(selector) = Selector::parse("a") else {
        return Vec::new();
    };

    document
        .select(&selector)
        .map(|element| {
            let attrs = element.value();
            Anchor {
                href: attrs.attr("href").map(str::to_string),
                rel: attrs
                    .attr("rel")
                    .map(|rel| rel.split_whitespace().map(str::to_string).collect())
                    .unwrap_or_default(),
                text: element.text().collect(),
            }
        })
        .collect()
}
