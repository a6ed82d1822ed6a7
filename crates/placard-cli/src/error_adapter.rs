//! Error adapter for converting CLI errors to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error types
//! and miette's rich diagnostic formatting used in the CLI.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan};

use placard::PlacardError;

use crate::{CliError, config::ConfigError};

/// Adapter giving a [`CliError`] a diagnostic code and help text.
pub struct ErrorAdapter<'a>(pub &'a CliError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        std::error::Error::source(self.0)
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            CliError::Io(_) => "placard::io",
            CliError::Items(_) => "placard::items",
            CliError::UnknownItem { .. } => "placard::unknown_item",
            CliError::Config(_) => "placard::config",
            CliError::Placard(err) => match err {
                PlacardError::Io(_) => "placard::io",
                PlacardError::Config { .. } => "placard::renderer_config",
                PlacardError::MissingItem { .. } => "placard::missing_item",
                PlacardError::MissingLayout { .. } => "placard::missing_layout",
                PlacardError::Template { .. } => "placard::template",
            },
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match &self.0 {
            CliError::UnknownItem { .. } => "check the `id` of the `[[item]]` entries",
            CliError::Config(ConfigError::Validation(_)) => {
                "pass --root or set `root` in the `[paths]` section of the configuration"
            }
            CliError::Placard(PlacardError::Template { .. }) => {
                "declare the layout in `positions.toml` of its renderer directory"
            }
            _ => return None,
        };
        Some(Box::new(help))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        None
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}

/// Convert a [`CliError`] into a reportable diagnostic.
pub fn to_reportable(err: &CliError) -> ErrorAdapter<'_> {
    ErrorAdapter(err)
}
