//! Error types for Placard operations.
//!
//! Missing elements, missing configuration and denied access are not errors:
//! they make a position produce nothing. [`PlacardError`] covers broken
//! preconditions and failing collaborators.

use std::{io, path::PathBuf};

use thiserror::Error;

/// The main error type for Placard operations.
#[derive(Debug, Error)]
pub enum PlacardError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid configuration in {}: {message}", path.display())]
    Config { path: PathBuf, message: String },

    #[error("No item set while resolving position `{position}`")]
    MissingItem { position: String },

    #[error("No layout set while resolving position `{position}`")]
    MissingLayout { position: String },

    #[error("Template `{template}` failed: {message}")]
    Template { template: String, message: String },
}

impl PlacardError {
    /// Create a new `Config` error for the file at `path`.
    pub fn new_config_error(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Config {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a new `Template` error.
    pub fn new_template_error(template: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Template {
            template: template.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = PlacardError::new_config_error("item/config.toml", "expected a table");
        assert_eq!(
            err.to_string(),
            "Invalid configuration in item/config.toml: expected a table"
        );

        let err = PlacardError::MissingItem {
            position: "title".to_string(),
        };
        assert_eq!(err.to_string(), "No item set while resolving position `title`");

        let err = PlacardError::new_template_error("element.default", "not found");
        assert_eq!(err.to_string(), "Template `element.default` failed: not found");
    }
}
