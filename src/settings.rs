//! Settings file support
//!
//! A TOML file can preset every generation option so repeated runs over an
//! icon set do not need the same flags each time. Every key is optional.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::emitter::{Framework, GenerationOptions, IconSize};
use crate::error::{UnsupportedFramework, UnsupportedSize};
use crate::raster::DEFAULT_PNG_SIZE;
use crate::GenerateConfig;

/// Errors that can occur when loading or parsing settings
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Failed to read settings file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse settings TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error(transparent)]
    Framework(#[from] UnsupportedFramework),
    #[error(transparent)]
    Size(#[from] UnsupportedSize),
}

/// Resolved settings with defaults applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub options: GenerationOptions,
    /// Run the optimizer before generating
    pub optimize: bool,
    pub png_width: u32,
    pub png_height: u32,
}

/// TOML structure for deserializing settings
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlSettings {
    component: Option<TomlComponent>,
    optimize: Option<TomlOptimize>,
    export: Option<TomlExport>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlComponent {
    name: Option<String>,
    framework: Option<String>,
    typescript: Option<bool>,
    props: Option<bool>,
    size: Option<String>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlOptimize {
    enabled: Option<bool>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlExport {
    png_width: Option<u32>,
    png_height: Option<u32>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            options: GenerationOptions::default(),
            optimize: true,
            png_width: DEFAULT_PNG_SIZE,
            png_height: DEFAULT_PNG_SIZE,
        }
    }
}

impl Settings {
    /// Load settings from TOML file
    pub fn from_file(path: &Path) -> Result<Self, SettingsError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load settings from TOML string
    pub fn from_str(content: &str) -> Result<Self, SettingsError> {
        let parsed: TomlSettings = toml::from_str(content)?;
        let mut settings = Settings::default();

        if let Some(component) = parsed.component {
            let options = &mut settings.options;
            if let Some(name) = component.name {
                options.name = name;
            }
            if let Some(framework) = component.framework {
                options.framework = framework.parse::<Framework>()?;
            }
            if let Some(typescript) = component.typescript {
                options.include_typescript = typescript;
            }
            if let Some(props) = component.props {
                options.include_props = props;
            }
            if let Some(size) = component.size {
                options.size = Some(size.parse::<IconSize>()?);
            }
        }

        if let Some(enabled) = parsed.optimize.and_then(|o| o.enabled) {
            settings.optimize = enabled;
        }

        if let Some(export) = parsed.export {
            settings.png_width = export.png_width.unwrap_or(DEFAULT_PNG_SIZE);
            settings.png_height = export.png_height.unwrap_or(DEFAULT_PNG_SIZE);
        }

        Ok(settings)
    }

    /// Pipeline configuration for these settings
    pub fn generate_config(&self) -> GenerateConfig {
        GenerateConfig::new()
            .with_options(self.options.clone())
            .with_optimize(self.optimize)
    }
}
