//! # Theme Construction
//!
//! A [Theme] is the immutable root configuration object the resolvers
//! read from: a complete [SchemeColors] table, a roundness scale and a
//! dark flag. Themes are built once, from a palette via [Theme::light],
//! [Theme::dark] or [Theme::from_palette], and passed down by reference;
//! they are never mutated afterwards. Local restyling produces a *new*
//! derived theme through [Theme::merge].
//!
//! ## Merging
//!
//! [Theme::merge] applies a [ThemeOverrides] with documented per-field
//! precedence: an override field wins outright, anything left unset falls
//! through from the base, and `colors` merges one level deep: overriding
//! a role never touches its siblings, and the base theme is left
//! untouched.
//!
//! ```
//! use quill_theme::theme::{Theme, ThemeOverrides};
//! use quill_theme::roles::Role;
//! use quill_theme::color::Rgba;
//!
//! let base = Theme::light();
//! let branded = base.merge(
//!     &ThemeOverrides::new().with_color(Role::Primary, Rgba::from_rgb8(27, 110, 243)),
//! );
//! assert_ne!(branded.colors.primary, base.colors.primary);
//! assert_eq!(branded.colors.on_primary, base.colors.on_primary);
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::color::Rgba;
use crate::palette::RefPalette;
use crate::roles::{Role, SchemeColors};

/// The dark scheme role table.
pub mod dark;
/// The light scheme role table.
pub mod light;

/// Default corner roundness scale factor.
pub const DEFAULT_ROUNDNESS: f32 = 4.0;

/// A fully materialized theme.
///
/// Cheap to clone, safe to share by reference across any number of
/// concurrent render passes; nothing in the crate mutates a theme after
/// construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    /// Whether this is a dark theme. Informational: resolvers branch on
    /// role values, not on this flag, except where explicitly documented
    /// (the app bar content tint).
    pub dark: bool,
    /// Scale factor for corner radii.
    pub roundness: f32,
    /// The complete color role table.
    pub colors: SchemeColors,
}

impl Theme {
    /// The built-in light theme.
    pub fn light() -> Self {
        Self::from_palette(&RefPalette::baseline(), false)
    }

    /// The built-in dark theme.
    pub fn dark() -> Self {
        Self::from_palette(&RefPalette::baseline(), true)
    }

    /// Build a theme from a palette.
    ///
    /// Deterministic and infallible: the palette type guarantees every
    /// tone, so every role can be derived.
    pub fn from_palette(palette: &RefPalette, dark: bool) -> Self {
        let colors = if dark {
            dark::scheme(palette)
        } else {
            light::scheme(palette)
        };
        Self {
            dark,
            roundness: DEFAULT_ROUNDNESS,
            colors,
        }
    }

    /// Produce a derived theme with the given overrides applied.
    ///
    /// `self` is left unchanged. Overridden roles replace their base
    /// values; all other roles, the elevation ramp and any unset scalar
    /// fields fall through from the base.
    pub fn merge(&self, overrides: &ThemeOverrides) -> Theme {
        let mut colors = self.colors.clone();
        for (role, color) in &overrides.colors {
            colors.set(*role, *color);
        }
        Theme {
            dark: overrides.dark.unwrap_or(self.dark),
            roundness: overrides.roundness.unwrap_or(self.roundness),
            colors,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

/// A partial theme used to derive a new theme from a base.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ThemeOverrides {
    /// Replacement for [Theme::dark], if set.
    pub dark: Option<bool>,
    /// Replacement for [Theme::roundness], if set.
    pub roundness: Option<f32>,
    /// Per-role color replacements, applied in insertion order.
    pub colors: IndexMap<Role, Rgba>,
}

impl ThemeOverrides {
    /// Create an empty override set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Override a single color role.
    pub fn with_color(mut self, role: Role, color: Rgba) -> Self {
        self.colors.insert(role, color);
        self
    }

    /// Override the dark flag.
    pub fn with_dark(mut self, dark: bool) -> Self {
        self.dark = Some(dark);
        self
    }

    /// Override the roundness scale.
    pub fn with_roundness(mut self, roundness: f32) -> Self {
        self.roundness = Some(roundness);
        self
    }

    /// Whether this override set changes anything at all.
    pub fn is_empty(&self) -> bool {
        self.dark.is_none() && self.roundness.is_none() && self.colors.is_empty()
    }
}
