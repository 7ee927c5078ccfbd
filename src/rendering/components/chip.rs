use crate::color::Rgba;
use crate::rendering::primitives::ripple_color;
use crate::roles::opacity;
use crate::theme::Theme;

/// Opacity applied to a custom selected color when it is used as the
/// chip border.
const SELECTED_BORDER_ALPHA: f32 = 0.29;

/// Inputs for chip color resolution.
#[derive(Debug, Clone, Copy)]
pub struct ChipParams<'a> {
    /// The active theme.
    pub theme: &'a Theme,
    /// Outlined chips sit on the surface; flat chips on a filled container.
    pub outlined: bool,
    /// Disabled state; takes precedence over everything else.
    pub disabled: bool,
    /// Whether the selected state tints the background toward the
    /// content color.
    pub show_selected_overlay: bool,
    /// Custom content color applied to text, icon and ripple.
    pub selected_color: Option<Rgba>,
    /// Custom background color.
    pub background: Option<Rgba>,
    /// Custom ripple color.
    pub ripple: Option<Rgba>,
}

impl<'a> ChipParams<'a> {
    /// Parameters for a plain enabled chip.
    pub fn new(theme: &'a Theme, outlined: bool) -> Self {
        Self {
            theme,
            outlined,
            disabled: false,
            show_selected_overlay: false,
            selected_color: None,
            background: None,
            ripple: None,
        }
    }
}

/// Resolved colors for a chip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChipVisual {
    /// Container fill color.
    pub background: Rgba,
    /// Container fill when the chip is selected.
    pub selected_background: Rgba,
    /// Border color.
    pub border: Rgba,
    /// Label color.
    pub text: Rgba,
    /// Leading/trailing icon color.
    pub icon: Rgba,
    /// Ripple feedback color.
    pub ripple: Rgba,
}

/// Build a [ChipVisual] from the given state.
pub fn chip_visual(params: ChipParams<'_>) -> ChipVisual {
    let background = background_color(&params);
    let content = content_color(&params);

    ChipVisual {
        background,
        selected_background: selected_background_color(&params, background),
        border: border_color(&params),
        text: content,
        icon: content,
        ripple: chip_ripple(&params, content),
    }
}

fn border_color(params: &ChipParams<'_>) -> Rgba {
    let colors = &params.theme.colors;

    if params.disabled {
        return colors.on_surface_variant.with_alpha(opacity::LEVEL2);
    }

    if let Some(selected) = params.selected_color {
        return selected.with_alpha(SELECTED_BORDER_ALPHA);
    }

    colors.outline
}

/// Shared resolution for text and icon; the two always match.
fn content_color(params: &ChipParams<'_>) -> Rgba {
    let colors = &params.theme.colors;

    if params.disabled {
        return colors.on_surface_disabled;
    }

    if let Some(selected) = params.selected_color {
        return selected;
    }

    if params.outlined {
        colors.on_surface_variant
    } else {
        colors.on_secondary_container
    }
}

fn background_color(params: &ChipParams<'_>) -> Rgba {
    let colors = &params.theme.colors;

    if params.disabled {
        return if params.outlined {
            Rgba::TRANSPARENT
        } else {
            colors.on_surface_variant.with_alpha(opacity::LEVEL2)
        };
    }

    if let Some(custom) = params.background {
        return custom;
    }

    if params.outlined {
        colors.surface
    } else {
        colors.secondary_container
    }
}

fn selected_background_color(params: &ChipParams<'_>, background: Rgba) -> Rgba {
    let colors = &params.theme.colors;
    let overlay = if params.outlined {
        colors.on_surface_variant
    } else {
        colors.on_secondary_container
    };
    // A weight of zero is intentional when no overlay is requested: both
    // branches return the same shaped value through the same mixing call.
    let weight = if params.show_selected_overlay {
        opacity::LEVEL2
    } else {
        0.0
    };

    background.mix(overlay, weight)
}

fn chip_ripple(params: &ChipParams<'_>, content: Rgba) -> Rgba {
    if let Some(custom) = params.ripple {
        return custom;
    }

    let foreground = params.selected_color.unwrap_or(content);
    ripple_color(foreground, None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_chip_uses_secondary_container_pairing() {
        let theme = Theme::light();
        let visual = chip_visual(ChipParams::new(&theme, false));

        assert_eq!(visual.background, theme.colors.secondary_container);
        assert_eq!(visual.text, theme.colors.on_secondary_container);
        assert_eq!(visual.icon, visual.text);
        assert_eq!(visual.border, theme.colors.outline);
    }

    #[test]
    fn outlined_chip_sits_on_surface() {
        let theme = Theme::light();
        let visual = chip_visual(ChipParams::new(&theme, true));

        assert_eq!(visual.background, theme.colors.surface);
        assert_eq!(visual.text, theme.colors.on_surface_variant);
    }

    #[test]
    fn selected_overlay_mixes_background_toward_content() {
        let theme = Theme::light();
        let params = ChipParams {
            show_selected_overlay: true,
            ..ChipParams::new(&theme, false)
        };
        let visual = chip_visual(params);

        // secondaryContainer #C2E7FF mixed 12% toward onSecondaryContainer #001D35.
        let expected = theme
            .colors
            .secondary_container
            .mix(theme.colors.on_secondary_container, 0.12);
        assert_eq!(visual.selected_background, expected);
        assert_eq!(expected.to_string(), "rgba(171, 207, 231, 1)");
    }

    #[test]
    fn without_overlay_selected_background_equals_background() {
        let theme = Theme::light();
        for outlined in [false, true] {
            let visual = chip_visual(ChipParams::new(&theme, outlined));
            assert_eq!(visual.selected_background, visual.background);
        }
    }

    #[test]
    fn disabled_ignores_custom_and_selected_colors() {
        let theme = Theme::light();
        let params = ChipParams {
            disabled: true,
            selected_color: Some(Rgba::from_rgb8(255, 0, 0)),
            background: Some(Rgba::from_rgb8(0, 255, 0)),
            ..ChipParams::new(&theme, false)
        };
        let visual = chip_visual(params);

        assert_eq!(visual.text, theme.colors.on_surface_disabled);
        assert_eq!(
            visual.background,
            theme.colors.on_surface_variant.with_alpha(0.12)
        );
        assert_eq!(
            visual.border,
            theme.colors.on_surface_variant.with_alpha(0.12)
        );
    }

    #[test]
    fn disabled_outlined_chip_has_transparent_background() {
        let theme = Theme::light();
        let params = ChipParams {
            disabled: true,
            ..ChipParams::new(&theme, true)
        };
        assert_eq!(chip_visual(params).background, Rgba::TRANSPARENT);
    }

    #[test]
    fn selected_color_drives_content_border_and_ripple() {
        let theme = Theme::light();
        let accent = Rgba::from_rgb8(20, 108, 46);
        let params = ChipParams {
            selected_color: Some(accent),
            ..ChipParams::new(&theme, true)
        };
        let visual = chip_visual(params);

        assert_eq!(visual.text, accent);
        assert_eq!(visual.border, accent.with_alpha(0.29));
        assert_eq!(visual.ripple, accent.with_alpha(0.12));
    }

    #[test]
    fn custom_background_used_verbatim_when_enabled() {
        let theme = Theme::light();
        let custom = Rgba::from_rgb8(250, 240, 230);
        let params = ChipParams {
            background: Some(custom),
            ..ChipParams::new(&theme, false)
        };
        assert_eq!(chip_visual(params).background, custom);
    }

    #[test]
    fn ripple_follows_text_when_no_overrides() {
        let theme = Theme::dark();
        let visual = chip_visual(ChipParams::new(&theme, false));
        assert_eq!(visual.ripple, visual.text.with_alpha(0.12));
    }
}
