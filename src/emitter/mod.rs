//! Emitter for framework component source
//!
//! Each framework has two templates. The full-featured one declares typed
//! props and binds paint attributes of the inner markup to them; the minimal
//! one only threads size through and copies the inner markup untouched.

mod bindings;
pub mod options;
mod react;
mod svelte;
mod vue;

pub use bindings::{bind_attributes, Bindings};
pub use options::*;

use crate::parser::SvgDocument;

/// Render component source for `doc`
///
/// Pure string construction: the same document and options always yield
/// byte-identical output. `opts.name` is inserted verbatim.
///
/// # Example
///
/// ```rust
/// use svg_to_component::emitter::{emit, Framework, GenerationOptions};
/// use svg_to_component::parser::SvgDocument;
///
/// let doc = SvgDocument::new(r#"<path fill="red" d="M0 0h24v24H0z"/>"#);
/// let opts = GenerationOptions::new().with_name("Square").with_framework(Framework::Svelte);
/// let code = emit(&doc, &opts);
/// assert!(code.contains("export let fill: string"));
/// assert!(code.contains("fill={fill}"));
/// ```
pub fn emit(doc: &SvgDocument, opts: &GenerationOptions) -> String {
    let full_featured = opts.full_featured();
    log::debug!(
        "emitting {} component '{}' (full_featured={})",
        opts.framework,
        opts.name,
        full_featured
    );
    match opts.framework {
        Framework::React => react::render(doc, &opts.name, full_featured),
        Framework::Vue => vue::render(doc, full_featured),
        Framework::Svelte => svelte::render(doc, full_featured),
    }
}

/// Script literal for an extracted dimension
///
/// Numbers are emitted as written (`32`), anything else as a quoted string
/// (`"100%"`).
pub(crate) fn dimension_literal(value: &str) -> String {
    let numeric = value
        .parse::<f64>()
        .map_or(false, |n| n.is_finite())
        && value
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E'));
    if numeric {
        value.to_string()
    } else {
        format!("\"{}\"", value.replace('\\', "\\\\").replace('"', "\\\""))
    }
}
