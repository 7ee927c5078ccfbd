//! # Color Values
//!
//! This module provides the [Rgba] color value used throughout the theming
//! system, together with parsing, formatting and the two blending
//! operations the resolvers rely on: [Rgba::with_alpha] and [Rgba::mix].
//!
//! Colors are stored as four `f32` components in the `0.0..=1.0` range.
//! Parsing accepts `#rrggbb`, `#rrggbbaa`, `rgb(r, g, b)` and
//! `rgba(r, g, b, a)`; formatting always produces the canonical
//! `rgba(r, g, b, a)` form so that two equal colors render identically
//! regardless of how they were written.
//!
//! Malformed color strings are an error, never a fallback color: a theme
//! that fails to parse must fail loudly instead of rendering with silently
//! wrong colors.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use thiserror::Error;

/// An RGBA color with `f32` components in the `0.0..=1.0` range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    /// Red component.
    pub r: f32,
    /// Green component.
    pub g: f32,
    /// Blue component.
    pub b: f32,
    /// Alpha component. `0.0` is fully transparent, `1.0` fully opaque.
    pub a: f32,
}

/// Error produced when a color string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    /// A `#`-prefixed string that is not 6 or 8 hex digits.
    #[error("invalid hex color `{0}`: expected #rrggbb or #rrggbbaa")]
    InvalidHex(String),
    /// An `rgb(...)`/`rgba(...)` string with the wrong shape.
    #[error("invalid color `{0}`: expected rgb(r, g, b) or rgba(r, g, b, a)")]
    InvalidFunction(String),
    /// A component outside its allowed range (0-255, alpha 0-1).
    #[error("color component out of range in `{0}`")]
    ComponentRange(String),
}

impl Rgba {
    /// Fully transparent black.
    pub const TRANSPARENT: Rgba = Rgba {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 0.0,
    };

    /// Opaque black.
    pub const BLACK: Rgba = Rgba {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 1.0,
    };

    /// Opaque white.
    pub const WHITE: Rgba = Rgba {
        r: 1.0,
        g: 1.0,
        b: 1.0,
        a: 1.0,
    };

    /// Create an opaque color from 8-bit components.
    pub const fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: 1.0,
        }
    }

    /// Create a color from 8-bit components and a `0.0..=1.0` alpha.
    pub const fn from_rgba8(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a,
        }
    }

    /// Return this color with the alpha channel replaced.
    ///
    /// The RGB channels are left untouched; `amount` is clamped to
    /// `0.0..=1.0`.
    pub fn with_alpha(self, amount: f32) -> Self {
        Self {
            a: amount.clamp(0.0, 1.0),
            ..self
        }
    }

    /// Linearly interpolate each channel toward `other`.
    ///
    /// `weight` is clamped to `0.0..=1.0`; a weight of `0.0` returns
    /// `self` unchanged and `1.0` returns `other` unchanged.
    pub fn mix(self, other: Rgba, weight: f32) -> Self {
        let w = weight.clamp(0.0, 1.0);
        let lerp = |a: f32, b: f32| a * (1.0 - w) + b * w;
        Self {
            r: lerp(self.r, other.r),
            g: lerp(self.g, other.g),
            b: lerp(self.b, other.b),
            a: lerp(self.a, other.a),
        }
    }

    /// The 8-bit value of each color channel, alpha excluded.
    fn channels8(&self) -> (u8, u8, u8) {
        let quantize = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        (quantize(self.r), quantize(self.g), quantize(self.b))
    }

    /// Format as `#rrggbb`, or `#rrggbbaa` when not fully opaque.
    ///
    /// This is the form used when themes are serialized to disk; display
    /// formatting uses the canonical `rgba(...)` form instead.
    pub fn to_hex_string(&self) -> String {
        let (r, g, b) = self.channels8();
        let a = (self.a.clamp(0.0, 1.0) * 255.0).round() as u8;
        if a == 255 {
            format!("#{:02x}{:02x}{:02x}", r, g, b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", r, g, b, a)
        }
    }

    fn parse_hex(input: &str) -> Result<Self, ColorParseError> {
        let hex = &input[1..];
        if !hex.is_ascii() || (hex.len() != 6 && hex.len() != 8) {
            return Err(ColorParseError::InvalidHex(input.to_string()));
        }
        let digit =
            |range| u8::from_str_radix(&hex[range], 16).map_err(|_| ColorParseError::InvalidHex(input.to_string()));
        let r = digit(0..2)?;
        let g = digit(2..4)?;
        let b = digit(4..6)?;
        if hex.len() == 8 {
            let a = digit(6..8)?;
            Ok(Self::from_rgba8(r, g, b, a as f32 / 255.0))
        } else {
            Ok(Self::from_rgb8(r, g, b))
        }
    }

    fn parse_function(input: &str) -> Result<Self, ColorParseError> {
        let invalid = || ColorParseError::InvalidFunction(input.to_string());
        let (name, rest) = input.split_once('(').ok_or_else(invalid)?;
        let body = rest.strip_suffix(')').ok_or_else(invalid)?;
        let parts: Vec<&str> = body.split(',').map(str::trim).collect();

        let expected = match name.trim() {
            "rgb" => 3,
            "rgba" => 4,
            _ => return Err(invalid()),
        };
        if parts.len() != expected {
            return Err(invalid());
        }

        let channel = |s: &str| -> Result<u8, ColorParseError> {
            s.parse::<u16>()
                .map_err(|_| invalid())?
                .try_into()
                .map_err(|_| ColorParseError::ComponentRange(input.to_string()))
        };
        let r = channel(parts[0])?;
        let g = channel(parts[1])?;
        let b = channel(parts[2])?;

        if expected == 4 {
            let a: f32 = parts[3].parse().map_err(|_| invalid())?;
            if !(0.0..=1.0).contains(&a) {
                return Err(ColorParseError::ComponentRange(input.to_string()));
            }
            Ok(Self::from_rgba8(r, g, b, a))
        } else {
            Ok(Self::from_rgb8(r, g, b))
        }
    }
}

impl FromStr for Rgba {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.starts_with('#') {
            Self::parse_hex(s)
        } else {
            Self::parse_function(s)
        }
    }
}

impl Display for Rgba {
    /// Canonical `rgba(r, g, b, a)` form with 8-bit color channels.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let (r, g, b) = self.channels8();
        write!(f, "rgba({}, {}, {}, {})", r, g, b, format_alpha(self.a))
    }
}

/// Format an alpha value without trailing zeros (`1`, `0.5`, `0.12`).
fn format_alpha(a: f32) -> String {
    let rounded = (a.clamp(0.0, 1.0) * 1000.0).round() / 1000.0;
    let mut out = format!("{:.3}", rounded);
    while out.ends_with('0') {
        out.pop();
    }
    if out.ends_with('.') {
        out.pop();
    }
    out
}
