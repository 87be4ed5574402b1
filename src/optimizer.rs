//! Best-effort textual SVG optimizer
//!
//! Every rule is a regex substitution over the whole document. Nothing here
//! is markup-aware: a pattern that appears inside an attribute value or a text
//! node is rewritten just the same.

use once_cell::sync::Lazy;
use regex::{NoExpand, Regex};

/// An ordered list of substitutions
///
/// Later rules assume the whitespace collapsing done by earlier ones, so the
/// order of [`Optimizer::RULES`] is significant.
#[derive(Debug, Clone)]
pub struct Optimizer {
    rules: Vec<(Regex, &'static str)>,
}

impl Optimizer {
    /// Pattern and replacement for each pass, applied in order
    pub const RULES: &'static [(&'static str, &'static str)] = &[
        // Comments
        (r"<!--[\s\S]*?-->", ""),
        // Whitespace runs
        (r"\s+", " "),
        // Whitespace between adjacent tags
        (r">\s+<", "><"),
        // Empty attribute values
        (r#"\s+[^\s=<>"'/]+\s*=\s*"""#, ""),
        (r#"\s+[^\s=<>"'/]+\s*=\s*''"#, ""),
        // Redundant values, removed wherever they appear
        (r#"\s+fill="none""#, ""),
        (r#"\s+stroke="none""#, ""),
        (r#"\s+stroke-width="1""#, ""),
        // Default namespace declaration
        (r#"\s+xmlns="http://www\.w3\.org/2000/svg""#, ""),
        // Final cleanup; the result is also trimmed
        (r"\s+", " "),
    ];

    /// Compile the rule set
    pub fn new() -> Result<Self, regex::Error> {
        let rules = Self::RULES
            .iter()
            .map(|(pattern, replacement)| Ok((Regex::new(pattern)?, *replacement)))
            .collect::<Result<Vec<_>, regex::Error>>()?;
        Ok(Self { rules })
    }

    /// Apply every rule in order, then trim
    pub fn run(&self, text: &str) -> String {
        let optimized = self
            .rules
            .iter()
            .fold(text.to_string(), |acc, (re, replacement)| {
                re.replace_all(&acc, NoExpand(*replacement)).into_owned()
            });
        optimized.trim().to_string()
    }
}

static DEFAULT_OPTIMIZER: Lazy<Result<Optimizer, regex::Error>> = Lazy::new(Optimizer::new);

/// Optimize SVG text, never failing
///
/// If the rule set cannot be built the original text is returned unchanged
/// and a warning is logged; optimization must never block generation.
///
/// # Example
///
/// ```rust
/// use svg_to_component::optimize;
///
/// let out = optimize("<svg>\n  <!-- logo -->\n  <rect fill=\"none\" x=\"1\"/>\n</svg>");
/// assert_eq!(out, "<svg><rect x=\"1\"/></svg>");
/// ```
pub fn optimize(text: &str) -> String {
    match DEFAULT_OPTIMIZER.as_ref() {
        Ok(optimizer) => {
            let optimized = optimizer.run(text);
            log::debug!("optimized SVG: {} -> {} bytes", text.len(), optimized.len());
            optimized
        }
        Err(e) => {
            log::warn!("SVG optimization failed: {}", e);
            text.to_string()
        }
    }
}
