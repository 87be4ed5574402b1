//! Structured description of an SVG document's root element

/// Width used when the root element has no usable `width` attribute
pub const DEFAULT_WIDTH: &str = "24";

/// Height used when the root element has no usable `height` attribute
pub const DEFAULT_HEIGHT: &str = "24";

/// viewBox used when the root element has no usable `viewBox` attribute
pub const DEFAULT_VIEW_BOX: &str = "0 0 24 24";

/// The standard SVG namespace URI
pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// Root attributes and inner markup of an SVG document
///
/// `inner_markup` is the exact text between the opening and closing root tags.
/// It is never re-parsed; emitters copy it into templates as opaque text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SvgDocument {
    /// Root `width`, or [`DEFAULT_WIDTH`]
    pub width: String,
    /// Root `height`, or [`DEFAULT_HEIGHT`]
    pub height: String,
    /// Root `viewBox`, or [`DEFAULT_VIEW_BOX`]
    pub view_box: String,
    /// Root `class`, if present
    pub root_class: Option<String>,
    /// Text strictly between `<svg ...>` and `</svg>`
    pub inner_markup: String,
}

impl SvgDocument {
    /// Create a document with default root attributes around `inner_markup`
    pub fn new(inner_markup: impl Into<String>) -> Self {
        Self {
            width: DEFAULT_WIDTH.to_string(),
            height: DEFAULT_HEIGHT.to_string(),
            view_box: DEFAULT_VIEW_BOX.to_string(),
            root_class: None,
            inner_markup: inner_markup.into(),
        }
    }

    /// Set the width
    pub fn with_width(mut self, width: impl Into<String>) -> Self {
        self.width = width.into();
        self
    }

    /// Set the height
    pub fn with_height(mut self, height: impl Into<String>) -> Self {
        self.height = height.into();
        self
    }

    /// Set the viewBox
    pub fn with_view_box(mut self, view_box: impl Into<String>) -> Self {
        self.view_box = view_box.into();
        self
    }

    /// Set the root class
    pub fn with_root_class(mut self, class: impl Into<String>) -> Self {
        self.root_class = Some(class.into());
        self
    }
}
