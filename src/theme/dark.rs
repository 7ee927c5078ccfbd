//! Role assignments for the built-in dark scheme.

use crate::palette::RefPalette;
use crate::roles::{opacity, ElevationColors, SchemeColors};

/// Map a palette onto the dark role table.
///
/// The pairing inverts the light scheme: accents move to tone 80 with
/// tone-20 content, containers to tone 30 with tone-90 content, and the
/// neutral ramp is read from its dark end.
pub fn scheme(palette: &RefPalette) -> SchemeColors {
    let on_surface = palette.neutral.tone90;

    SchemeColors {
        primary: palette.primary.tone80,
        on_primary: palette.primary.tone20,
        primary_container: palette.primary.tone30,
        on_primary_container: palette.primary.tone90,
        secondary: palette.secondary.tone80,
        on_secondary: palette.secondary.tone20,
        secondary_container: palette.secondary.tone30,
        on_secondary_container: palette.secondary.tone90,
        tertiary: palette.tertiary.tone80,
        on_tertiary: palette.tertiary.tone20,
        tertiary_container: palette.tertiary.tone30,
        on_tertiary_container: palette.tertiary.tone90,
        error: palette.error.tone80,
        on_error: palette.error.tone20,
        error_container: palette.error.tone30,
        on_error_container: palette.error.tone90,
        background: palette.neutral.tone10,
        on_background: palette.neutral.tone90,
        surface: palette.neutral.tone10,
        on_surface,
        surface_variant: palette.neutral_variant.tone30,
        on_surface_variant: palette.neutral_variant.tone80,
        outline: palette.neutral_variant.tone60,
        outline_variant: palette.neutral_variant.tone30,
        shadow: palette.neutral.tone0,
        scrim: palette.neutral.tone0,
        inverse_surface: palette.neutral.tone90,
        inverse_on_surface: palette.neutral.tone20,
        inverse_primary: palette.primary.tone40,
        surface_disabled: on_surface.with_alpha(opacity::LEVEL2),
        on_surface_disabled: on_surface.with_alpha(opacity::LEVEL4),
        backdrop: palette.neutral_variant.tone20.with_alpha(0.4),
        elevation: ElevationColors::derive(palette.neutral.tone10, palette.primary.tone80),
    }
}
