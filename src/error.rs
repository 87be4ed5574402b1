//! Error types for extraction and framework selection

use ariadne::{Color, Config, Label, Report, ReportKind, Source};
use thiserror::Error;

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

/// Errors raised while locating the root `<svg>` element
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractError {
    #[error("malformed input at {span:?}: {message}")]
    MalformedInput { span: Span, message: String },
}

impl ExtractError {
    /// Create a malformed input error covering `span`
    pub fn malformed(span: Span, message: impl Into<String>) -> Self {
        Self::MalformedInput {
            span,
            message: message.into(),
        }
    }

    /// Get the source span
    pub fn span(&self) -> &Span {
        match self {
            Self::MalformedInput { span, .. } => span,
        }
    }

    /// Format the error with source context using ariadne
    ///
    /// `source` must be the text the span points into, i.e. the trimmed input.
    pub fn format(&self, source: &str, filename: &str) -> String {
        let mut buf = Vec::new();
        match self {
            ExtractError::MalformedInput { span, message } => {
                let span = span.start.min(source.len())..span.end.min(source.len());
                let written = Report::build(ReportKind::Error, filename, span.start)
                    .with_config(Config::default().with_color(false))
                    .with_message("invalid SVG content")
                    .with_label(
                        Label::new((filename, span))
                            .with_message(message)
                            .with_color(Color::Red),
                    )
                    .finish()
                    .write((filename, Source::from(source)), &mut buf);
                if written.is_err() {
                    return self.to_string();
                }
            }
        }
        String::from_utf8(buf).unwrap_or_else(|_| self.to_string())
    }
}

/// A framework name outside the supported set (react, vue, svelte)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unsupported framework: {0}")]
pub struct UnsupportedFramework(pub String);

/// An icon size outside the supported set (sm, md, lg, xl)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unsupported icon size: {0}")]
pub struct UnsupportedSize(pub String);
