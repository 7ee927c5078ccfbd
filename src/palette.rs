//! # Reference Tonal Palettes
//!
//! The tonal palettes are the raw material themes are built from: for each
//! hue family, a ramp of 13 lightness steps from tone 0 (black) to tone
//! 100 (white). Schemes map semantic color roles onto specific tones of
//! these ramps; the resolvers never consult tones directly.
//!
//! The baseline palette ships with the crate and is the source of truth
//! for the built-in light and dark themes.

use serde::{Deserialize, Serialize};

use crate::color::Rgba;

/// One hue family as a ramp of 13 lightness steps.
///
/// Tone 0 is always black and tone 100 always white; the steps in between
/// carry the hue at increasing lightness.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TonalRamp {
    /// Tone 0 (black).
    pub tone0: Rgba,
    /// Tone 10.
    pub tone10: Rgba,
    /// Tone 20.
    pub tone20: Rgba,
    /// Tone 30.
    pub tone30: Rgba,
    /// Tone 40.
    pub tone40: Rgba,
    /// Tone 50.
    pub tone50: Rgba,
    /// Tone 60.
    pub tone60: Rgba,
    /// Tone 70.
    pub tone70: Rgba,
    /// Tone 80.
    pub tone80: Rgba,
    /// Tone 90.
    pub tone90: Rgba,
    /// Tone 95.
    pub tone95: Rgba,
    /// Tone 99.
    pub tone99: Rgba,
    /// Tone 100 (white).
    pub tone100: Rgba,
}

/// The six tonal ramps a theme is derived from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RefPalette {
    /// Primary accent ramp.
    pub primary: TonalRamp,
    /// Secondary accent ramp.
    pub secondary: TonalRamp,
    /// Tertiary accent ramp.
    pub tertiary: TonalRamp,
    /// Neutral ramp for surfaces and text.
    pub neutral: TonalRamp,
    /// Neutral-variant ramp for outlines and muted surfaces.
    pub neutral_variant: TonalRamp,
    /// Error ramp.
    pub error: TonalRamp,
}

impl RefPalette {
    /// The built-in baseline palette.
    pub fn baseline() -> Self {
        Self {
            primary: TonalRamp {
                tone0: Rgba::from_rgb8(0, 0, 0),
                tone10: Rgba::from_rgb8(4, 30, 73),
                tone20: Rgba::from_rgb8(6, 46, 111),
                tone30: Rgba::from_rgb8(8, 66, 160),
                tone40: Rgba::from_rgb8(11, 87, 208),
                tone50: Rgba::from_rgb8(27, 110, 243),
                tone60: Rgba::from_rgb8(76, 141, 246),
                tone70: Rgba::from_rgb8(124, 172, 248),
                tone80: Rgba::from_rgb8(168, 199, 250),
                tone90: Rgba::from_rgb8(211, 227, 253),
                tone95: Rgba::from_rgb8(236, 243, 254),
                tone99: Rgba::from_rgb8(250, 251, 255),
                tone100: Rgba::from_rgb8(255, 255, 255),
            },
            secondary: TonalRamp {
                tone0: Rgba::from_rgb8(0, 0, 0),
                tone10: Rgba::from_rgb8(0, 29, 53),
                tone20: Rgba::from_rgb8(0, 51, 85),
                tone30: Rgba::from_rgb8(0, 74, 119),
                tone40: Rgba::from_rgb8(0, 99, 155),
                tone50: Rgba::from_rgb8(4, 125, 183),
                tone60: Rgba::from_rgb8(57, 152, 211),
                tone70: Rgba::from_rgb8(90, 179, 240),
                tone80: Rgba::from_rgb8(127, 207, 255),
                tone90: Rgba::from_rgb8(194, 231, 255),
                tone95: Rgba::from_rgb8(223, 243, 255),
                tone99: Rgba::from_rgb8(250, 251, 255),
                tone100: Rgba::from_rgb8(255, 255, 255),
            },
            tertiary: TonalRamp {
                tone0: Rgba::from_rgb8(0, 0, 0),
                tone10: Rgba::from_rgb8(7, 39, 17),
                tone20: Rgba::from_rgb8(10, 56, 24),
                tone30: Rgba::from_rgb8(15, 82, 35),
                tone40: Rgba::from_rgb8(20, 108, 46),
                tone50: Rgba::from_rgb8(25, 134, 57),
                tone60: Rgba::from_rgb8(30, 164, 70),
                tone70: Rgba::from_rgb8(55, 190, 95),
                tone80: Rgba::from_rgb8(109, 213, 140),
                tone90: Rgba::from_rgb8(196, 238, 208),
                tone95: Rgba::from_rgb8(231, 248, 237),
                tone99: Rgba::from_rgb8(242, 255, 238),
                tone100: Rgba::from_rgb8(255, 255, 255),
            },
            neutral: TonalRamp {
                tone0: Rgba::from_rgb8(0, 0, 0),
                tone10: Rgba::from_rgb8(28, 27, 31),
                tone20: Rgba::from_rgb8(49, 48, 51),
                tone30: Rgba::from_rgb8(72, 70, 73),
                tone40: Rgba::from_rgb8(96, 93, 98),
                tone50: Rgba::from_rgb8(120, 117, 121),
                tone60: Rgba::from_rgb8(147, 144, 148),
                tone70: Rgba::from_rgb8(174, 170, 174),
                tone80: Rgba::from_rgb8(201, 197, 202),
                tone90: Rgba::from_rgb8(230, 225, 229),
                tone95: Rgba::from_rgb8(244, 239, 244),
                tone99: Rgba::from_rgb8(255, 251, 254),
                tone100: Rgba::from_rgb8(255, 255, 255),
            },
            neutral_variant: TonalRamp {
                tone0: Rgba::from_rgb8(0, 0, 0),
                tone10: Rgba::from_rgb8(25, 29, 28),
                tone20: Rgba::from_rgb8(45, 49, 47),
                tone30: Rgba::from_rgb8(68, 71, 70),
                tone40: Rgba::from_rgb8(92, 95, 94),
                tone50: Rgba::from_rgb8(116, 119, 117),
                tone60: Rgba::from_rgb8(142, 145, 143),
                tone70: Rgba::from_rgb8(169, 172, 170),
                tone80: Rgba::from_rgb8(196, 199, 197),
                tone90: Rgba::from_rgb8(225, 227, 225),
                tone95: Rgba::from_rgb8(239, 242, 239),
                tone99: Rgba::from_rgb8(250, 251, 255),
                tone100: Rgba::from_rgb8(255, 255, 255),
            },
            error: TonalRamp {
                tone0: Rgba::from_rgb8(0, 0, 0),
                tone10: Rgba::from_rgb8(65, 14, 11),
                tone20: Rgba::from_rgb8(96, 20, 16),
                tone30: Rgba::from_rgb8(140, 29, 24),
                tone40: Rgba::from_rgb8(179, 38, 30),
                tone50: Rgba::from_rgb8(220, 54, 46),
                tone60: Rgba::from_rgb8(228, 105, 98),
                tone70: Rgba::from_rgb8(236, 146, 142),
                tone80: Rgba::from_rgb8(242, 184, 181),
                tone90: Rgba::from_rgb8(249, 222, 220),
                tone95: Rgba::from_rgb8(252, 238, 238),
                tone99: Rgba::from_rgb8(255, 251, 249),
                tone100: Rgba::from_rgb8(255, 255, 255),
            },
        }
    }
}

impl Default for RefPalette {
    fn default() -> Self {
        Self::baseline()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ramps_are_anchored_at_black_and_white() {
        let palette = RefPalette::baseline();
        for ramp in [
            &palette.primary,
            &palette.secondary,
            &palette.tertiary,
            &palette.neutral,
            &palette.neutral_variant,
            &palette.error,
        ] {
            assert_eq!(ramp.tone0, Rgba::BLACK);
            assert_eq!(ramp.tone100, Rgba::WHITE);
        }
    }

    #[test]
    fn baseline_primary_tones() {
        let palette = RefPalette::baseline();
        assert_eq!(palette.primary.tone40, Rgba::from_rgb8(11, 87, 208));
        assert_eq!(palette.primary.tone80, Rgba::from_rgb8(168, 199, 250));
    }
}
