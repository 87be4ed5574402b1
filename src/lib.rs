//! SVG to Component - turn an SVG icon into React, Vue or Svelte source
//!
//! The pipeline is an optional textual optimizer, an extractor that reads the
//! root `<svg>` element, and an emitter with one template family per
//! framework. A PNG export path renders the same SVG text for previews.
//!
//! # Example
//!
//! ```rust
//! use svg_to_component::{generate, GenerationOptions};
//!
//! let component = generate(
//!     r#"<svg viewBox="0 0 24 24"><path d="M4 4h16v16H4z"/></svg>"#,
//!     &GenerationOptions::new().with_name("Square"),
//! )
//! .unwrap();
//!
//! assert_eq!(component.filename, "Square.tsx");
//! assert!(component.code.contains("interface SquareProps"));
//! ```

pub mod emitter;
pub mod error;
pub mod optimizer;
pub mod parser;
pub mod raster;
pub mod settings;

pub use emitter::{emit, Framework, GenerationOptions, IconSize, Language};
pub use error::{ExtractError, UnsupportedFramework, UnsupportedSize};
pub use optimizer::optimize;
pub use parser::{extract, SvgDocument};
pub use raster::{png_data_url, render_png, RasterError};
pub use settings::{Settings, SettingsError};

/// Configuration for the generation pipeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateConfig {
    /// Emission options
    pub options: GenerationOptions,
    /// Run the optimizer before extraction
    pub optimize: bool,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            options: GenerationOptions::default(),
            optimize: true,
        }
    }
}

impl GenerateConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the emission options
    pub fn with_options(mut self, options: GenerationOptions) -> Self {
        self.options = options;
        self
    }

    /// Enable or disable the optimizer
    pub fn with_optimize(mut self, optimize: bool) -> Self {
        self.optimize = optimize;
        self
    }
}

/// Generated component source and where it belongs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedComponent {
    pub code: String,
    /// `<name>.tsx`, `<name>.vue` or `<name>.svelte`
    pub filename: String,
    pub language: Language,
}

/// The SVG text used for generation, previews and downloads
pub fn prepare_source(raw: &str, optimize: bool) -> String {
    if optimize {
        optimizer::optimize(raw)
    } else {
        raw.to_string()
    }
}

/// Generate a component with the optimizer enabled
pub fn generate(
    raw: &str,
    options: &GenerationOptions,
) -> Result<GeneratedComponent, ExtractError> {
    generate_with_config(raw, GenerateConfig::new().with_options(options.clone()))
}

/// Generate a component with custom configuration
///
/// # Example
///
/// ```rust
/// use svg_to_component::{generate_with_config, Framework, GenerateConfig, GenerationOptions};
///
/// let config = GenerateConfig::new()
///     .with_optimize(false)
///     .with_options(GenerationOptions::new().with_framework(Framework::Vue));
///
/// let component = generate_with_config("<svg><rect/></svg>", config).unwrap();
/// assert_eq!(component.filename, "Icon.vue");
/// assert_eq!(component.language.as_str(), "html");
/// ```
pub fn generate_with_config(
    raw: &str,
    config: GenerateConfig,
) -> Result<GeneratedComponent, ExtractError> {
    let source = prepare_source(raw, config.optimize);
    let doc = extract(&source)?;
    let options = &config.options;

    Ok(GeneratedComponent {
        code: emit(&doc, options),
        filename: options.framework.filename(&options.name),
        language: options.framework.language(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const LOGO: &str = r##"<svg width="32" height="32" viewBox="0 0 32 32"><path fill="#000" d="M0 0h32v32H0z"/></svg>"##;

    #[test]
    fn test_generate_react_component() {
        let component = generate(LOGO, &GenerationOptions::new().with_name("Logo")).unwrap();
        assert_eq!(component.filename, "Logo.tsx");
        assert_eq!(component.language, Language::Tsx);
        assert!(component.code.contains("interface LogoProps"));
        assert!(component.code.contains(r#"viewBox="0 0 32 32""#));
        assert!(component.code.contains("<path fill={fill}"));
    }

    #[test]
    fn test_generate_without_props() {
        let options = GenerationOptions::new().with_name("Logo").with_props(false);
        let component = generate(LOGO, &options).unwrap();
        assert!(!component.code.contains("LogoProps"));
        assert!(component.code.contains(r##"fill="#000""##));
    }

    #[test]
    fn test_generate_filenames_per_framework() {
        let names: Vec<_> = Framework::ALL
            .iter()
            .map(|f| {
                let options = GenerationOptions::new().with_name("Logo").with_framework(*f);
                generate(LOGO, &options).unwrap().filename
            })
            .collect();
        assert_eq!(names, vec!["Logo.tsx", "Logo.vue", "Logo.svelte"]);
    }

    #[test]
    fn test_generate_malformed_input() {
        let result = generate("<div/>", &GenerationOptions::new());
        assert!(matches!(result, Err(ExtractError::MalformedInput { .. })));
    }

    #[test]
    fn test_prepare_source_toggle() {
        let raw = "<svg>\n  <rect fill=\"none\"/>\n</svg>";
        assert_eq!(prepare_source(raw, false), raw);
        assert_eq!(prepare_source(raw, true), "<svg><rect/></svg>");
    }

    #[test]
    fn test_optimizer_changes_inner_markup() {
        let raw = "<svg>\n  <rect fill=\"none\" stroke=\"red\"/>\n</svg>";
        let options = GenerationOptions::new().with_props(false);

        let optimized = generate_with_config(raw, GenerateConfig::new().with_options(options.clone()))
            .unwrap();
        assert!(optimized.code.contains(r#"<rect stroke="red"/>"#));

        let verbatim = generate_with_config(
            raw,
            GenerateConfig::new().with_options(options).with_optimize(false),
        )
        .unwrap();
        assert!(verbatim.code.contains("\n  <rect fill=\"none\" stroke=\"red\"/>\n"));
    }
}
