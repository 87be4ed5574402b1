//! Blind rewriting of paint attributes into prop bindings

use once_cell::sync::Lazy;
use regex::{NoExpand, Regex};

static FILL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"fill="[^"]*""#).expect("fill pattern should compile"));

static STROKE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"stroke="[^"]*""#).expect("stroke pattern should compile"));

static STROKE_WIDTH: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"stroke-width="[^"]*""#).expect("stroke-width pattern should compile")
});

/// Framework-specific text that replaces each paint attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bindings {
    pub fill: &'static str,
    pub stroke: &'static str,
    pub stroke_width: &'static str,
}

impl Bindings {
    pub const REACT: Bindings = Bindings {
        fill: "fill={fill}",
        stroke: "stroke={stroke}",
        stroke_width: "strokeWidth={strokeWidth}",
    };

    pub const VUE: Bindings = Bindings {
        fill: r#":fill="resolvedFill""#,
        stroke: r#":stroke="stroke""#,
        stroke_width: r#":stroke-width="strokeWidth""#,
    };

    pub const SVELTE: Bindings = Bindings {
        fill: "fill={fill}",
        stroke: "stroke={stroke}",
        stroke_width: "stroke-width={strokeWidth}",
    };
}

/// Replace every `fill="..."`, `stroke="..."` and `stroke-width="..."`
///
/// Each attribute is replaced by its own global pass, in that order. The
/// passes are textual: they hit nested groups, decorative paints and even
/// attribute names that merely end in `fill`.
pub fn bind_attributes(markup: &str, bindings: &Bindings) -> String {
    let out = FILL.replace_all(markup, NoExpand(bindings.fill));
    let out = STROKE.replace_all(&out, NoExpand(bindings.stroke));
    let out = STROKE_WIDTH.replace_all(&out, NoExpand(bindings.stroke_width));
    out.into_owned()
}
