//! PNG export and data URLs for previews and downloads

use std::borrow::Cow;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use once_cell::sync::Lazy;
use regex::Regex;
use resvg::{tiny_skia, usvg};
use thiserror::Error;

use crate::parser::lexer::{attributes, find_attribute};
use crate::parser::SVG_NAMESPACE;

/// Width and height of exported PNG images
pub const DEFAULT_PNG_SIZE: u32 = 512;

static ROOT_OPEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<svg\b([^>]*)>").expect("opening tag pattern should compile"));

/// Errors that can occur while rasterizing
#[derive(Debug, Error)]
pub enum RasterError {
    #[error("failed to load SVG image: {0}")]
    Decode(#[from] usvg::Error),

    #[error("invalid image size {width}x{height}")]
    InvalidSize { width: u32, height: u32 },

    #[error("failed to encode PNG: {0}")]
    Encode(String),
}

/// Render SVG text to PNG bytes at exactly `width` x `height`
///
/// The image is stretched to fill the target, ignoring its aspect ratio.
/// Decoding is deterministic, so a failure is reported once and not retried.
pub fn render_png(svg: &str, width: u32, height: u32) -> Result<Vec<u8>, RasterError> {
    let svg = with_namespace(svg);
    let tree = usvg::Tree::from_str(&svg, &usvg::Options::default())?;

    let mut pixmap =
        tiny_skia::Pixmap::new(width, height).ok_or(RasterError::InvalidSize { width, height })?;

    let size = tree.size();
    let transform = tiny_skia::Transform::from_scale(
        width as f32 / size.width(),
        height as f32 / size.height(),
    );
    resvg::render(&tree, transform, &mut pixmap.as_mut());

    log::debug!("rendered {}x{} PNG preview", width, height);

    pixmap
        .encode_png()
        .map_err(|e| RasterError::Encode(e.to_string()))
}

/// PNG data URL of the default-sized render
pub fn png_data_url(svg: &str) -> Result<String, RasterError> {
    let png = render_png(svg, DEFAULT_PNG_SIZE, DEFAULT_PNG_SIZE)?;
    Ok(data_url("image/png", &png))
}

/// Data URL carrying the SVG text itself
pub fn svg_data_url(svg: &str) -> String {
    data_url("image/svg+xml", svg.as_bytes())
}

fn data_url(mime: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime, STANDARD.encode(bytes))
}

/// File stem for downloaded images of component `name`
pub fn export_file_stem(name: &str) -> String {
    name.to_lowercase()
}

/// Declare the SVG namespace on the root if it is missing
///
/// Image decoders reject an `<svg>` root outside the SVG namespace, which is
/// what the optimizer leaves behind when it strips the declaration.
pub fn with_namespace(svg: &str) -> Cow<'_, str> {
    let Some(caps) = ROOT_OPEN.captures(svg) else {
        return Cow::Borrowed(svg);
    };
    let Some(attr_text) = caps.get(1) else {
        return Cow::Borrowed(svg);
    };
    if find_attribute(&attributes(attr_text.as_str()), "xmlns").is_some() {
        return Cow::Borrowed(svg);
    }

    let insert_at = attr_text.start();
    let mut out = String::with_capacity(svg.len() + SVG_NAMESPACE.len() + 9);
    out.push_str(&svg[..insert_at]);
    out.push_str(&format!(r#" xmlns="{}""#, SVG_NAMESPACE));
    out.push_str(&svg[insert_at..]);
    Cow::Owned(out)
}
