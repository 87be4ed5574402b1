//! Options controlling component generation

use std::fmt;
use std::str::FromStr;

use crate::error::{UnsupportedFramework, UnsupportedSize};

/// Component name used when none is given
pub const DEFAULT_COMPONENT_NAME: &str = "Icon";

/// Target UI framework
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Framework {
    #[default]
    React,
    Vue,
    Svelte,
}

impl Framework {
    /// Every supported framework
    pub const ALL: [Framework; 3] = [Framework::React, Framework::Vue, Framework::Svelte];

    pub fn as_str(&self) -> &'static str {
        match self {
            Framework::React => "react",
            Framework::Vue => "vue",
            Framework::Svelte => "svelte",
        }
    }

    /// File extension of the generated component
    pub fn extension(&self) -> &'static str {
        match self {
            Framework::React => "tsx",
            Framework::Vue => "vue",
            Framework::Svelte => "svelte",
        }
    }

    /// Highlighting language of the generated component
    pub fn language(&self) -> Language {
        match self {
            Framework::React => Language::Tsx,
            Framework::Vue | Framework::Svelte => Language::Html,
        }
    }

    /// File name for a component called `name`
    pub fn filename(&self, name: &str) -> String {
        format!("{}.{}", name, self.extension())
    }
}

impl fmt::Display for Framework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Framework {
    type Err = UnsupportedFramework;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "react" => Ok(Framework::React),
            "vue" => Ok(Framework::Vue),
            "svelte" => Ok(Framework::Svelte),
            _ => Err(UnsupportedFramework(s.to_string())),
        }
    }
}

/// Language of generated source, as understood by syntax highlighters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    /// Typed component language (React)
    Tsx,
    /// Markup-template language (Vue, Svelte)
    Html,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Tsx => "tsx",
            Language::Html => "html",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Size variant of an icon
///
/// Accepted and carried through options, but no template reads it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconSize {
    Sm,
    Md,
    Lg,
    Xl,
}

impl FromStr for IconSize {
    type Err = UnsupportedSize;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sm" => Ok(IconSize::Sm),
            "md" => Ok(IconSize::Md),
            "lg" => Ok(IconSize::Lg),
            "xl" => Ok(IconSize::Xl),
            _ => Err(UnsupportedSize(s.to_string())),
        }
    }
}

/// Options for a single generation request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationOptions {
    /// Component identifier, inserted verbatim (not validated)
    pub name: String,
    pub framework: Framework,
    pub include_typescript: bool,
    pub include_props: bool,
    pub size: Option<IconSize>,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            name: DEFAULT_COMPONENT_NAME.to_string(),
            framework: Framework::default(),
            include_typescript: true,
            include_props: true,
            size: None,
        }
    }
}

impl GenerationOptions {
    /// Create options with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the component name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the target framework
    pub fn with_framework(mut self, framework: Framework) -> Self {
        self.framework = framework;
        self
    }

    /// Set whether typed declarations are wanted
    pub fn with_typescript(mut self, include: bool) -> Self {
        self.include_typescript = include;
        self
    }

    /// Set whether the themeable prop set is wanted
    pub fn with_props(mut self, include: bool) -> Self {
        self.include_props = include;
        self
    }

    /// Set the size variant
    pub fn with_size(mut self, size: IconSize) -> Self {
        self.size = Some(size);
        self
    }

    /// Whether the full-featured template is emitted
    ///
    /// Types and props are a single switch: there is no typed-without-props
    /// or props-without-types template.
    pub fn full_featured(&self) -> bool {
        self.include_typescript && self.include_props
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let opts = GenerationOptions::default();
        assert_eq!(opts.name, "Icon");
        assert_eq!(opts.framework, Framework::React);
        assert!(opts.include_typescript);
        assert!(opts.include_props);
        assert_eq!(opts.size, None);
        assert!(opts.full_featured());
    }

    #[test]
    fn test_builder_pattern() {
        let opts = GenerationOptions::new()
            .with_name("Logo")
            .with_framework(Framework::Svelte)
            .with_typescript(false)
            .with_size(IconSize::Lg);
        assert_eq!(opts.name, "Logo");
        assert_eq!(opts.framework, Framework::Svelte);
        assert_eq!(opts.size, Some(IconSize::Lg));
        assert!(!opts.full_featured());
    }

    #[test]
    fn test_combined_flag() {
        let base = GenerationOptions::new();
        assert!(!base.clone().with_props(false).full_featured());
        assert!(!base.clone().with_typescript(false).full_featured());
        assert!(!base.with_typescript(false).with_props(false).full_featured());
    }

    #[test]
    fn test_parse_framework() {
        assert_eq!("react".parse::<Framework>(), Ok(Framework::React));
        assert_eq!(" Vue ".parse::<Framework>(), Ok(Framework::Vue));
        assert_eq!("SVELTE".parse::<Framework>(), Ok(Framework::Svelte));
    }

    #[test]
    fn test_parse_unsupported_framework() {
        assert_eq!(
            "angular".parse::<Framework>(),
            Err(UnsupportedFramework("angular".to_string()))
        );
        assert!("".parse::<Framework>().is_err());
    }

    #[test]
    fn test_framework_round_trips_through_display() {
        for framework in Framework::ALL {
            assert_eq!(framework.to_string().parse::<Framework>(), Ok(framework));
        }
    }

    #[test]
    fn test_filename_and_language() {
        assert_eq!(Framework::React.filename("Logo"), "Logo.tsx");
        assert_eq!(Framework::Vue.filename("Logo"), "Logo.vue");
        assert_eq!(Framework::Svelte.filename("Logo"), "Logo.svelte");
        assert_eq!(Framework::React.language(), Language::Tsx);
        assert_eq!(Framework::Vue.language(), Language::Html);
        assert_eq!(Framework::Svelte.language().as_str(), "html");
    }

    #[test]
    fn test_parse_icon_size() {
        assert_eq!("md".parse::<IconSize>(), Ok(IconSize::Md));
        assert_eq!("XL".parse::<IconSize>(), Ok(IconSize::Xl));
        assert_eq!(
            "huge".parse::<IconSize>(),
            Err(UnsupportedSize("huge".to_string()))
        );
    }
}
