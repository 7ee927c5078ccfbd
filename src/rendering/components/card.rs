use crate::color::Rgba;
use crate::theme::Theme;

/// Container treatments for cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardMode {
    /// Card lifted on an elevation shadow; the surface layer supplies the
    /// fill.
    Elevated,
    /// Card with a hairline outline on the plain surface.
    Outlined,
    /// Card filled with the muted surface-variant color.
    Contained,
}

/// Resolved colors for a card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardVisual {
    /// Container fill; `None` for elevated cards, whose fill comes from
    /// the elevation system.
    pub background: Option<Rgba>,
    /// Outline color.
    pub border: Rgba,
}

/// Build a [CardVisual] for the given mode.
pub fn card_visual(theme: &Theme, mode: CardMode) -> CardVisual {
    let colors = &theme.colors;
    let background = match mode {
        CardMode::Contained => Some(colors.surface_variant),
        CardMode::Outlined => Some(colors.surface),
        CardMode::Elevated => None,
    };

    CardVisual {
        background,
        border: colors.outline,
    }
}

/// Default corner radius for a card cover image.
pub fn card_cover_radius(theme: &Theme) -> f32 {
    3.0 * theme.roundness
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_selects_the_container_fill() {
        let theme = Theme::light();
        assert_eq!(
            card_visual(&theme, CardMode::Contained).background,
            Some(theme.colors.surface_variant)
        );
        assert_eq!(
            card_visual(&theme, CardMode::Outlined).background,
            Some(theme.colors.surface)
        );
        assert_eq!(card_visual(&theme, CardMode::Elevated).background, None);
    }

    #[test]
    fn border_is_always_outline() {
        let theme = Theme::dark();
        for mode in [CardMode::Elevated, CardMode::Outlined, CardMode::Contained] {
            assert_eq!(card_visual(&theme, mode).border, theme.colors.outline);
        }
    }

    #[test]
    fn cover_radius_scales_with_roundness() {
        let theme = Theme::light();
        assert_eq!(card_cover_radius(&theme), 3.0 * theme.roundness);

        let rounder = theme.merge(&crate::theme::ThemeOverrides::new().with_roundness(8.0));
        assert_eq!(card_cover_radius(&rounder), 24.0);
    }
}
