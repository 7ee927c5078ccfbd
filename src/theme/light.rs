//! Role assignments for the built-in light scheme.

use crate::palette::RefPalette;
use crate::roles::{opacity, ElevationColors, SchemeColors};

/// Map a palette onto the light role table.
///
/// Accents sit on tone 40 with tone-100 content, containers on tone 90
/// with tone-10 content; surfaces come from the bright end of the neutral
/// ramp.
pub fn scheme(palette: &RefPalette) -> SchemeColors {
    let on_surface = palette.neutral.tone10;

    SchemeColors {
        primary: palette.primary.tone40,
        on_primary: palette.primary.tone100,
        primary_container: palette.primary.tone90,
        on_primary_container: palette.primary.tone10,
        secondary: palette.secondary.tone40,
        on_secondary: palette.secondary.tone100,
        secondary_container: palette.secondary.tone90,
        on_secondary_container: palette.secondary.tone10,
        tertiary: palette.tertiary.tone40,
        on_tertiary: palette.tertiary.tone100,
        tertiary_container: palette.tertiary.tone90,
        on_tertiary_container: palette.tertiary.tone10,
        error: palette.error.tone40,
        on_error: palette.error.tone100,
        error_container: palette.error.tone90,
        on_error_container: palette.error.tone10,
        background: palette.neutral.tone99,
        on_background: palette.neutral.tone10,
        surface: palette.neutral.tone99,
        on_surface,
        surface_variant: palette.neutral_variant.tone90,
        on_surface_variant: palette.neutral_variant.tone30,
        outline: palette.neutral_variant.tone50,
        outline_variant: palette.neutral_variant.tone80,
        shadow: palette.neutral.tone0,
        scrim: palette.neutral.tone0,
        inverse_surface: palette.neutral.tone20,
        inverse_on_surface: palette.neutral.tone95,
        inverse_primary: palette.primary.tone80,
        surface_disabled: on_surface.with_alpha(opacity::LEVEL2),
        on_surface_disabled: on_surface.with_alpha(opacity::LEVEL4),
        backdrop: palette.neutral_variant.tone20.with_alpha(0.4),
        elevation: ElevationColors::derive(palette.neutral.tone99, palette.primary.tone40),
    }
}
