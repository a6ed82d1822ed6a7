//! Configuration types for Placard rendering.
//!
//! All types implement [`serde::Deserialize`] so they can be loaded from
//! external sources; every section falls back to its defaults.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining render and path settings.
//! - [`RenderConfig`] - Element template style and configuration namespace.
//! - [`PathsConfig`] - Location of the renderer directory.
//!
//! # Example
//!
//! ```
//! # use placard::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.render().default_style(), "default");
//! assert_eq!(config.render().config_dir(), "item");
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Top-level configuration combining render and path settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Render configuration section.
    #[serde(default)]
    render: RenderConfig,

    /// Paths configuration section.
    #[serde(default)]
    paths: PathsConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its sections.
    pub fn new(render: RenderConfig, paths: PathsConfig) -> Self {
        Self { render, paths }
    }

    /// Returns the render configuration.
    pub fn render(&self) -> &RenderConfig {
        &self.render
    }

    /// Returns the paths configuration.
    pub fn paths(&self) -> &PathsConfig {
        &self.paths
    }
}

/// Settings for position rendering.
#[derive(Debug, Clone, Deserialize)]
pub struct RenderConfig {
    /// Style used for `element.<style>` when the caller requests none.
    #[serde(default = "default_style")]
    default_style: String,

    /// Configuration store namespace holding position assignments.
    #[serde(default = "default_config_dir")]
    config_dir: String,
}

fn default_style() -> String {
    "default".to_string()
}

fn default_config_dir() -> String {
    "item".to_string()
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            default_style: default_style(),
            config_dir: default_config_dir(),
        }
    }
}

impl RenderConfig {
    /// Creates a new [`RenderConfig`].
    ///
    /// # Arguments
    ///
    /// * `default_style` - Element template style used when none is requested.
    /// * `config_dir` - Configuration namespace for position assignments.
    pub fn new(default_style: impl Into<String>, config_dir: impl Into<String>) -> Self {
        Self {
            default_style: default_style.into(),
            config_dir: config_dir.into(),
        }
    }

    pub fn default_style(&self) -> &str {
        &self.default_style
    }

    pub fn config_dir(&self) -> &str {
        &self.config_dir
    }
}

/// Filesystem locations.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PathsConfig {
    /// Renderer directory containing `<dir>/positions.toml` and
    /// `<dir>/config.toml` files.
    #[serde(default)]
    root: Option<PathBuf>,
}

impl PathsConfig {
    pub fn new(root: Option<PathBuf>) -> Self {
        Self { root }
    }

    /// Returns the renderer directory, if configured.
    pub fn root(&self) -> Option<&Path> {
        self.root.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_sections_use_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [render]
            default_style = "block"
            "#,
        )
        .expect("valid config");

        assert_eq!(config.render().default_style(), "block");
        assert_eq!(config.render().config_dir(), "item");
        assert_eq!(config.paths().root(), None);
    }

    #[test]
    fn test_paths_root() {
        let config: AppConfig = toml::from_str(
            r#"
            [paths]
            root = "renderer"
            "#,
        )
        .expect("valid config");

        assert_eq!(config.paths().root(), Some(Path::new("renderer")));
    }

    #[test]
    fn test_empty_document() {
        let config: AppConfig = toml::from_str("").expect("valid config");
        assert_eq!(config.render().default_style(), "default");
    }
}
