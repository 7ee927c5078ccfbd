#![warn(missing_docs)]

//! # Quill Theming System
//!
//! Material themes, color tokens and style resolution for the Quill UI
//! toolkit. This crate owns everything between a design palette and the
//! concrete colors a widget paints with:
//!
//! - **[Theme](theme::Theme)**: the immutable root object, a complete
//!   table of semantic color roles plus roundness and a dark flag
//! - **[RefPalette](palette::RefPalette)**: tonal ramps the built-in
//!   light and dark schemes are derived from
//! - **Color resolvers** ([rendering]): one pure function per component
//!   family mapping `(theme, mode, state, overrides)` to the exact colors
//!   to render with
//! - **[ThemeConfig](config::ThemeConfig)**: theme selection from
//!   environment variables and TOML theme files
//!
//! ## Quick Start
//!
//! ```
//! use quill_theme::rendering::{button_visual, ButtonMode, ButtonOverrides};
//! use quill_theme::theme::Theme;
//!
//! let theme = Theme::light();
//! let visual = button_visual(&theme, ButtonMode::Contained, false, &ButtonOverrides::default());
//! assert_eq!(visual.background, theme.colors.primary);
//! assert_eq!(visual.ripple, visual.text.with_alpha(0.12));
//! ```
//!
//! ## Design
//!
//! Resolution is synchronous, side-effect-free and re-executed on every
//! render; there is no caching layer and no shared mutable state. The
//! only shared resource is the [Theme](theme::Theme) itself, which is
//! never mutated after construction; deriving a locally restyled theme
//! goes through [Theme::merge](theme::Theme::merge) and produces a new
//! instance.
//!
//! Invalid states are kept unrepresentable where possible: component
//! modes are closed enums, and a constructed scheme always carries every
//! role. The remaining failure surface, custom theme files, is
//! validated when the theme is built ([config]), so a malformed theme
//! stops the application from rendering with it rather than rendering
//! with silently wrong colors.

/// Color values, parsing and blending.
pub mod color;
/// Theme selection from the environment and TOML files.
pub mod config;
/// Error types for theme construction and loading.
pub mod error;
/// Reference tonal palettes.
pub mod palette;
/// Per-family color resolvers.
pub mod rendering;
/// Semantic color roles and the scheme color table.
pub mod roles;
/// Serde support for color values.
mod serde_color;
/// Theme construction and merging.
pub mod theme;
