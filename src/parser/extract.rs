//! Locate the root element and read its attributes

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::ExtractError;

use super::document::{SvgDocument, DEFAULT_HEIGHT, DEFAULT_VIEW_BOX, DEFAULT_WIDTH};
use super::lexer::{attributes, find_attribute};

/// First `<svg ...>` through the last `</svg>`; not nesting-aware.
static ROOT_ELEMENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)<svg\b([^>]*)>(.*)</svg>").expect("root element pattern should compile")
});

static ROOT_OPEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<svg\b[^>]*>?").expect("opening tag pattern should compile"));

/// Extract root attributes and inner markup from SVG text
///
/// Surrounding whitespace is trimmed first. Error spans point into the
/// trimmed text.
///
/// # Example
///
/// ```rust
/// use svg_to_component::parser::extract;
///
/// let doc = extract(r#"<svg viewBox="0 0 16 16"><rect/></svg>"#).unwrap();
/// assert_eq!(doc.view_box, "0 0 16 16");
/// assert_eq!(doc.width, "24");
/// assert_eq!(doc.inner_markup, "<rect/>");
/// ```
pub fn extract(raw: &str) -> Result<SvgDocument, ExtractError> {
    let source = raw.trim();

    let Some(caps) = ROOT_ELEMENT.captures(source) else {
        return Err(match ROOT_OPEN.find(source) {
            Some(open) => ExtractError::malformed(open.range(), "root element is never closed"),
            None => ExtractError::malformed(0..source.len(), "no <svg> root element found"),
        });
    };

    let attr_text = caps.get(1).map_or("", |m| m.as_str());
    let inner_markup = caps.get(2).map_or("", |m| m.as_str());
    let attrs = attributes(attr_text);

    // Empty values fall back to defaults just like missing ones
    let lookup = |name: &str, default: &str| {
        find_attribute(&attrs, name)
            .filter(|v| !v.is_empty())
            .unwrap_or(default)
            .to_string()
    };

    let doc = SvgDocument {
        width: lookup("width", DEFAULT_WIDTH),
        height: lookup("height", DEFAULT_HEIGHT),
        view_box: lookup("viewBox", DEFAULT_VIEW_BOX),
        root_class: find_attribute(&attrs, "class").map(str::to_string),
        inner_markup: inner_markup.to_string(),
    };

    log::debug!(
        "extracted root: width={} height={} viewBox={:?} ({} bytes of inner markup)",
        doc.width,
        doc.height,
        doc.view_box,
        doc.inner_markup.len()
    );

    Ok(doc)
}
