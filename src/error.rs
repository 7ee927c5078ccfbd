//! # Theme Error Types
//!
//! Error taxonomy for the theming system. Configuration problems (a role
//! missing from a custom theme, an unreadable theme file) surface here at
//! theme-construction time; the color resolvers themselves are total
//! functions and never produce errors.

use std::path::PathBuf;

use thiserror::Error;

use crate::color::ColorParseError;
use crate::roles::Role;

/// Errors that can occur while building or loading a theme.
#[derive(Error, Debug)]
pub enum ThemeError {
    /// A custom theme did not supply a required color role.
    #[error("custom theme is missing required color role `{}`", .role.name())]
    MissingRole {
        /// The role that was absent.
        role: Role,
    },

    /// A color table referenced a role name that does not exist.
    #[error("unknown color role `{name}`")]
    UnknownRole {
        /// The unrecognized role name.
        name: String,
    },

    /// A theme variant name that is neither built-in nor `custom:<path>`.
    #[error("unknown theme variant `{name}`")]
    UnknownVariant {
        /// The unrecognized variant name.
        name: String,
    },

    /// A color value could not be parsed.
    #[error("invalid color value: {0}")]
    Color(#[from] ColorParseError),

    /// Theme configuration file was not found.
    #[error("theme file not found: {path:?}")]
    FileNotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// Error parsing a theme configuration file.
    #[error("failed to parse theme file {path:?}: {details}")]
    Parse {
        /// The path of the file that failed to parse.
        path: PathBuf,
        /// Details about the parse error.
        details: String,
    },

    /// Generic I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for theme operations.
pub type ThemeResult<T> = Result<T, ThemeError>;

impl ThemeError {
    /// Create a missing-role error.
    pub fn missing_role(role: Role) -> Self {
        Self::MissingRole { role }
    }

    /// Create an unknown-role error.
    pub fn unknown_role(name: impl Into<String>) -> Self {
        Self::UnknownRole { name: name.into() }
    }

    /// Create an unknown-variant error.
    pub fn unknown_variant(name: impl Into<String>) -> Self {
        Self::UnknownVariant { name: name.into() }
    }

    /// Create a file-not-found error.
    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create a parse error for a theme file.
    pub fn parse_error(path: impl Into<PathBuf>, details: impl Into<String>) -> Self {
        Self::Parse {
            path: path.into(),
            details: details.into(),
        }
    }
}
