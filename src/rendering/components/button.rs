use crate::color::Rgba;
use crate::rendering::primitives::ripple_color;
use crate::theme::Theme;

/// Emphasis modes for buttons, from lowest to highest visual impact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonMode {
    /// Flat button without background or outline.
    Text,
    /// Button with an outline and no background.
    Outlined,
    /// Button with a filled background.
    Contained,
    /// Filled button lifted on an elevation tint.
    Elevated,
}

/// Caller-supplied color overrides for a button.
///
/// An override is used verbatim when the button is enabled; the disabled
/// state ignores overrides entirely.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ButtonOverrides {
    /// Custom background color.
    pub background: Option<Rgba>,
    /// Custom label color.
    pub text: Option<Rgba>,
    /// Custom ripple color.
    pub ripple: Option<Rgba>,
    /// Forces light (`true`) or dark (`false`) label text on contained
    /// and elevated buttons, for callers placing them on a background the
    /// theme knows nothing about.
    pub dark_background: Option<bool>,
}

/// Aggregated styling information required to paint a button.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ButtonVisual {
    /// Fill color for the control background.
    pub background: Rgba,
    /// Border color defining the button outline.
    pub border: Rgba,
    /// Label color rendered atop the button.
    pub text: Rgba,
    /// Ripple feedback color.
    pub ripple: Rgba,
    /// Outline stroke width.
    pub border_width: f32,
}

/// Build a [ButtonVisual] by consulting the provided theme.
pub fn button_visual(
    theme: &Theme,
    mode: ButtonMode,
    disabled: bool,
    overrides: &ButtonOverrides,
) -> ButtonVisual {
    let background = background_color(theme, mode, disabled, overrides.background);
    let text = text_color(theme, mode, disabled, overrides);
    let (border, border_width) = border_color(theme, mode, disabled);

    ButtonVisual {
        background,
        border,
        text,
        ripple: ripple_color(text, overrides.ripple),
        border_width,
    }
}

fn is_filled(mode: ButtonMode) -> bool {
    matches!(mode, ButtonMode::Contained | ButtonMode::Elevated)
}

fn background_color(theme: &Theme, mode: ButtonMode, disabled: bool, custom: Option<Rgba>) -> Rgba {
    if disabled {
        return if is_filled(mode) {
            theme.colors.surface_disabled
        } else {
            Rgba::TRANSPARENT
        };
    }

    if let Some(custom) = custom {
        return custom;
    }

    match mode {
        ButtonMode::Elevated => theme.colors.elevation.level1,
        ButtonMode::Contained => theme.colors.primary,
        ButtonMode::Text | ButtonMode::Outlined => Rgba::TRANSPARENT,
    }
}

fn text_color(theme: &Theme, mode: ButtonMode, disabled: bool, overrides: &ButtonOverrides) -> Rgba {
    if disabled {
        return theme.colors.on_surface_disabled;
    }

    if let Some(custom) = overrides.text {
        return custom;
    }

    if let Some(dark) = overrides.dark_background {
        if is_filled(mode) {
            return if dark { Rgba::WHITE } else { Rgba::BLACK };
        }
    }

    match mode {
        ButtonMode::Text | ButtonMode::Outlined | ButtonMode::Elevated => theme.colors.primary,
        ButtonMode::Contained => theme.colors.on_primary,
    }
}

fn border_color(theme: &Theme, mode: ButtonMode, disabled: bool) -> (Rgba, f32) {
    match mode {
        ButtonMode::Outlined => {
            let color = if disabled {
                theme.colors.surface_disabled
            } else {
                theme.colors.outline
            };
            (color, 1.0)
        }
        _ => (Rgba::TRANSPARENT, 0.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roles::Role;
    use crate::theme::ThemeOverrides;

    #[test]
    fn contained_pairs_primary_with_on_primary() {
        let theme = Theme::light().merge(
            &ThemeOverrides::new().with_color(Role::Primary, Rgba::from_rgb8(27, 110, 243)),
        );
        let visual = button_visual(
            &theme,
            ButtonMode::Contained,
            false,
            &ButtonOverrides::default(),
        );

        assert_eq!(visual.background, Rgba::from_rgb8(27, 110, 243));
        assert_eq!(visual.text, Rgba::WHITE);
        assert_eq!(visual.border_width, 0.0);
    }

    #[test]
    fn outlined_uses_outline_and_primary() {
        let theme = Theme::light();
        let visual = button_visual(
            &theme,
            ButtonMode::Outlined,
            false,
            &ButtonOverrides::default(),
        );

        assert_eq!(visual.background, Rgba::TRANSPARENT);
        assert_eq!(visual.border, theme.colors.outline);
        assert_eq!(visual.text, theme.colors.primary);
        assert_eq!(visual.border_width, 1.0);
    }

    #[test]
    fn elevated_sits_on_the_first_elevation_tint() {
        let theme = Theme::light();
        let visual = button_visual(
            &theme,
            ButtonMode::Elevated,
            false,
            &ButtonOverrides::default(),
        );

        assert_eq!(visual.background, theme.colors.elevation.level1);
        assert_eq!(visual.text, theme.colors.primary);
    }

    #[test]
    fn disabled_outlined_drops_outline_and_primary_roles() {
        let theme = Theme::light();
        let visual = button_visual(
            &theme,
            ButtonMode::Outlined,
            true,
            &ButtonOverrides::default(),
        );

        assert_eq!(visual.border, theme.colors.surface_disabled);
        assert_eq!(visual.text, theme.colors.on_surface_disabled);
        assert_ne!(visual.border, theme.colors.outline);
        assert_ne!(visual.text, theme.colors.primary);
    }

    #[test]
    fn disabled_beats_custom_colors_in_every_mode() {
        let theme = Theme::light();
        let overrides = ButtonOverrides {
            background: Some(Rgba::from_rgb8(1, 2, 3)),
            text: Some(Rgba::from_rgb8(4, 5, 6)),
            ..Default::default()
        };

        for mode in [
            ButtonMode::Text,
            ButtonMode::Outlined,
            ButtonMode::Contained,
            ButtonMode::Elevated,
        ] {
            let visual = button_visual(&theme, mode, true, &overrides);
            assert_eq!(visual.text, theme.colors.on_surface_disabled);
            assert_ne!(visual.background, Rgba::from_rgb8(1, 2, 3));
        }
    }

    #[test]
    fn custom_colors_win_when_enabled() {
        let theme = Theme::light();
        let overrides = ButtonOverrides {
            background: Some(Rgba::from_rgb8(1, 2, 3)),
            text: Some(Rgba::from_rgb8(4, 5, 6)),
            ..Default::default()
        };
        let visual = button_visual(&theme, ButtonMode::Contained, false, &overrides);

        assert_eq!(visual.background, Rgba::from_rgb8(1, 2, 3));
        assert_eq!(visual.text, Rgba::from_rgb8(4, 5, 6));
    }

    #[test]
    fn dark_background_hint_forces_label_contrast() {
        let theme = Theme::light();
        let on_dark = ButtonOverrides {
            dark_background: Some(true),
            ..Default::default()
        };
        let on_light = ButtonOverrides {
            dark_background: Some(false),
            ..Default::default()
        };

        let visual = button_visual(&theme, ButtonMode::Elevated, false, &on_dark);
        assert_eq!(visual.text, Rgba::WHITE);
        let visual = button_visual(&theme, ButtonMode::Contained, false, &on_light);
        assert_eq!(visual.text, Rgba::BLACK);
        // Text-mode buttons ignore the hint.
        let visual = button_visual(&theme, ButtonMode::Text, false, &on_dark);
        assert_eq!(visual.text, theme.colors.primary);
    }

    #[test]
    fn ripple_derives_from_resolved_text() {
        let theme = Theme::light();
        for mode in [
            ButtonMode::Text,
            ButtonMode::Outlined,
            ButtonMode::Contained,
            ButtonMode::Elevated,
        ] {
            let visual = button_visual(&theme, mode, false, &ButtonOverrides::default());
            assert_eq!(visual.ripple, visual.text.with_alpha(0.12));
        }
    }

    #[test]
    fn resolution_is_idempotent() {
        let theme = Theme::dark();
        let overrides = ButtonOverrides {
            ripple: Some(Rgba::from_rgb8(9, 9, 9).with_alpha(0.3)),
            ..Default::default()
        };
        let first = button_visual(&theme, ButtonMode::Outlined, false, &overrides);
        let second = button_visual(&theme, ButtonMode::Outlined, false, &overrides);
        assert_eq!(first, second);
    }
}
