//! # Theme Configuration
//!
//! This module selects and constructs the theme an application starts
//! with, from environment variables, a TOML theme file, or programmatic
//! configuration.
//!
//! ## Environment variables
//!
//! - `QUILL_THEME`: the theme to use (`light`, `dark` or `custom:<path>`)
//! - `QUILL_THEME_FALLBACK`: theme to fall back to if the primary one
//!   fails to load
//!
//! ## Theme files
//!
//! A theme file restyles a built-in variant or defines a complete custom
//! scheme:
//!
//! ```toml
//! [theme]
//! variant = "light"      # light | dark | custom
//! roundness = 4.0
//!
//! [theme.colors]
//! primary = "#0b57d0"
//! onPrimary = "#ffffff"
//! ```
//!
//! For `variant = "light"` / `"dark"` the color table is a partial
//! override merged onto the built-in scheme. For `variant = "custom"` the
//! table must name **every** role: a missing role fails at resolve time
//! with [ThemeError::MissingRole], never at first render. Unknown role
//! names and malformed color values are likewise construction-time
//! errors.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::Deserialize;

use crate::color::Rgba;
use crate::error::{ThemeError, ThemeResult};
use crate::roles::{Role, SchemeColors};
use crate::theme::{Theme, ThemeOverrides, DEFAULT_ROUNDNESS};

/// Environment variable naming the theme to use.
pub const THEME_ENV: &str = "QUILL_THEME";
/// Environment variable naming the fallback theme.
pub const THEME_FALLBACK_ENV: &str = "QUILL_THEME_FALLBACK";

/// A source a theme can be resolved from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThemeSource {
    /// The built-in light theme.
    Light,
    /// The built-in dark theme.
    Dark,
    /// A theme loaded from a TOML file.
    File(PathBuf),
}

impl ThemeSource {
    /// Parse a source name: `light`, `dark` or `custom:<path>`.
    pub fn parse(name: &str) -> ThemeResult<Self> {
        match name {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => match other.strip_prefix("custom:") {
                Some(path) if !path.is_empty() => Ok(Self::File(PathBuf::from(path))),
                _ => Err(ThemeError::unknown_variant(other)),
            },
        }
    }

    /// Resolve this source into a theme.
    pub fn load(&self) -> ThemeResult<Theme> {
        match self {
            Self::Light => Ok(Theme::light()),
            Self::Dark => Ok(Theme::dark()),
            Self::File(path) => load_theme_file(path),
        }
    }
}

/// Theme selection for an application.
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeConfig {
    /// The theme to resolve.
    pub default_theme: ThemeSource,
    /// Theme used when the default fails to load.
    pub fallback_theme: Option<ThemeSource>,
}

impl ThemeConfig {
    /// Configuration resolving to the built-in light theme.
    pub fn new() -> Self {
        Self {
            default_theme: ThemeSource::Light,
            fallback_theme: None,
        }
    }

    /// Set the default theme source.
    pub fn with_default_theme(mut self, theme: ThemeSource) -> Self {
        self.default_theme = theme;
        self
    }

    /// Set the fallback theme source.
    pub fn with_fallback_theme(mut self, theme: ThemeSource) -> Self {
        self.fallback_theme = Some(theme);
        self
    }

    /// Read the configuration from the environment.
    ///
    /// Fails on an unrecognized variant name; use
    /// [ThemeConfig::from_env_or_default] for the tolerant variant.
    pub fn from_env() -> ThemeResult<Self> {
        let mut config = Self::new();

        if let Ok(name) = env::var(THEME_ENV) {
            config.default_theme = ThemeSource::parse(&name)?;
        }
        if let Ok(name) = env::var(THEME_FALLBACK_ENV) {
            config.fallback_theme = Some(ThemeSource::parse(&name)?);
        }

        Ok(config)
    }

    /// Read the configuration from the environment, keeping defaults for
    /// anything unset or unrecognized (a warning is logged for the
    /// latter).
    pub fn from_env_or_default() -> Self {
        match Self::from_env() {
            Ok(config) => config,
            Err(err) => {
                log::warn!("ignoring invalid theme environment: {err}");
                Self::new()
            }
        }
    }

    /// Resolve the configured theme.
    ///
    /// If the default source fails and a fallback is configured, the
    /// failure is logged and the fallback is resolved instead; without a
    /// fallback the error propagates, so a malformed theme prevents the
    /// application from rendering with it at all.
    pub fn resolve_theme(&self) -> ThemeResult<Theme> {
        log::debug!("resolving theme from {:?}", self.default_theme);
        match self.default_theme.load() {
            Ok(theme) => Ok(theme),
            Err(err) => match &self.fallback_theme {
                Some(fallback) => {
                    log::warn!(
                        "failed to load theme from {:?} ({err}), falling back to {fallback:?}",
                        self.default_theme
                    );
                    fallback.load()
                }
                None => Err(err),
            },
        }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Deserialize)]
struct ThemeFile {
    theme: ThemeTable,
}

#[derive(Debug, Deserialize)]
struct ThemeTable {
    variant: String,
    #[serde(default)]
    dark: Option<bool>,
    #[serde(default)]
    roundness: Option<f32>,
    #[serde(default)]
    colors: IndexMap<String, String>,
}

/// Load a theme from a TOML file.
pub fn load_theme_file(path: &Path) -> ThemeResult<Theme> {
    if !path.exists() {
        return Err(ThemeError::file_not_found(path));
    }
    let content = fs::read_to_string(path)?;
    theme_from_toml(&content).map_err(|err| match err {
        // Re-anchor parse errors on the file they came from.
        ThemeError::Parse { details, .. } => ThemeError::parse_error(path, details),
        other => other,
    })
}

/// Build a theme from TOML content.
///
/// See the module docs for the accepted format. All validation (unknown
/// roles, malformed colors, incomplete custom schemes) happens here,
/// before a [Theme] ever exists.
pub fn theme_from_toml(content: &str) -> ThemeResult<Theme> {
    let file: ThemeFile = toml::from_str(content)
        .map_err(|err| ThemeError::parse_error("<inline>", err.to_string()))?;
    let table = file.theme;

    let mut colors: IndexMap<Role, Rgba> = IndexMap::with_capacity(table.colors.len());
    for (name, value) in &table.colors {
        let role: Role = name.parse()?;
        let color: Rgba = value.parse().map_err(ThemeError::Color)?;
        colors.insert(role, color);
    }

    let mut theme = match table.variant.as_str() {
        "light" | "dark" => {
            let base = if table.variant == "dark" {
                Theme::dark()
            } else {
                Theme::light()
            };
            base.merge(&ThemeOverrides {
                dark: table.dark,
                roundness: table.roundness,
                colors,
            })
        }
        "custom" => Theme {
            dark: table.dark.unwrap_or(false),
            roundness: table.roundness.unwrap_or(DEFAULT_ROUNDNESS),
            colors: SchemeColors::from_roles(&colors)?,
        },
        other => return Err(ThemeError::unknown_variant(other)),
    };

    // Roundness below zero has no geometric meaning.
    theme.roundness = theme.roundness.max(0.0);
    Ok(theme)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_source_names() {
        assert_eq!(ThemeSource::parse("light").unwrap(), ThemeSource::Light);
        assert_eq!(ThemeSource::parse("dark").unwrap(), ThemeSource::Dark);
        assert_eq!(
            ThemeSource::parse("custom:themes/brand.toml").unwrap(),
            ThemeSource::File(PathBuf::from("themes/brand.toml"))
        );
        assert!(ThemeSource::parse("sepia").is_err());
        assert!(ThemeSource::parse("custom:").is_err());
    }

    #[test]
    fn overrides_merge_onto_a_builtin_variant() {
        let theme = theme_from_toml(
            r##"
            [theme]
            variant = "light"
            roundness = 6.0

            [theme.colors]
            primary = "#1b6ef3"
            "##,
        )
        .unwrap();

        assert!(!theme.dark);
        assert_eq!(theme.roundness, 6.0);
        assert_eq!(theme.colors.primary, Rgba::from_rgb8(27, 110, 243));
        // Sibling roles fall through from the built-in scheme.
        assert_eq!(theme.colors.on_primary, Theme::light().colors.on_primary);
    }

    #[test]
    fn custom_variant_requires_a_complete_role_table() {
        let mut colors = String::new();
        for role in Role::ALL {
            if role != Role::Backdrop {
                colors.push_str(&format!("{} = \"#336699\"\n", role.name()));
            }
        }
        let content = format!("[theme]\nvariant = \"custom\"\n\n[theme.colors]\n{colors}");

        match theme_from_toml(&content).unwrap_err() {
            ThemeError::MissingRole { role } => assert_eq!(role, Role::Backdrop),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn complete_custom_theme_resolves() {
        let mut colors = String::new();
        for role in Role::ALL {
            colors.push_str(&format!("{} = \"#336699\"\n", role.name()));
        }
        let content =
            format!("[theme]\nvariant = \"custom\"\ndark = true\n\n[theme.colors]\n{colors}");

        let theme = theme_from_toml(&content).unwrap();
        assert!(theme.dark);
        assert_eq!(theme.roundness, DEFAULT_ROUNDNESS);
        assert_eq!(theme.colors.backdrop, Rgba::from_rgb8(0x33, 0x66, 0x99));
    }

    #[test]
    fn unknown_roles_and_bad_colors_are_errors() {
        let unknown_role = r##"
            [theme]
            variant = "light"

            [theme.colors]
            primaryest = "#336699"
        "##;
        assert!(matches!(
            theme_from_toml(unknown_role).unwrap_err(),
            ThemeError::UnknownRole { .. }
        ));

        let bad_color = r#"
            [theme]
            variant = "light"

            [theme.colors]
            primary = "definitely blue"
        "#;
        assert!(matches!(
            theme_from_toml(bad_color).unwrap_err(),
            ThemeError::Color(_)
        ));
    }

    #[test]
    fn unknown_variant_is_an_error() {
        let content = "[theme]\nvariant = \"sepia\"\n";
        assert!(matches!(
            theme_from_toml(content).unwrap_err(),
            ThemeError::UnknownVariant { .. }
        ));
    }

    #[test]
    fn fallback_rescues_a_broken_default() {
        let config = ThemeConfig::new()
            .with_default_theme(ThemeSource::File(PathBuf::from(
                "/nonexistent/theme.toml",
            )))
            .with_fallback_theme(ThemeSource::Dark);

        let theme = config.resolve_theme().unwrap();
        assert!(theme.dark);
    }

    #[test]
    fn missing_file_without_fallback_propagates() {
        let config = ThemeConfig::new().with_default_theme(ThemeSource::File(PathBuf::from(
            "/nonexistent/theme.toml",
        )));
        assert!(matches!(
            config.resolve_theme().unwrap_err(),
            ThemeError::FileNotFound { .. }
        ));
    }
}
