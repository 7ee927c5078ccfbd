use crate::color::Rgba;
use crate::theme::Theme;

/// Resolved colors for one bottom-navigation destination.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BottomNavigationVisual {
    /// Icon tint while the destination is focused.
    pub active: Rgba,
    /// Icon tint while the destination is unfocused.
    pub inactive: Rgba,
    /// Label color for the destination's current focus state.
    pub label: Rgba,
}

/// Build a [BottomNavigationVisual] from the given state.
///
/// Explicit tint overrides win and also color the label; otherwise the
/// label follows the focus state on the surface content roles.
pub fn bottom_navigation_visual(
    theme: &Theme,
    focused: bool,
    active_color: Option<Rgba>,
    inactive_color: Option<Rgba>,
) -> BottomNavigationVisual {
    let colors = &theme.colors;

    let active = active_color.unwrap_or(colors.on_secondary_container);
    let inactive = inactive_color.unwrap_or(colors.on_surface_variant);

    let (tint, has_custom_tint) = if focused {
        (active, active_color.is_some())
    } else {
        (inactive, inactive_color.is_some())
    };

    let label = if has_custom_tint {
        tint
    } else if focused {
        colors.on_surface
    } else {
        colors.on_surface_variant
    };

    BottomNavigationVisual {
        active,
        inactive,
        label,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_tints_use_container_content_roles() {
        let theme = Theme::light();
        let visual = bottom_navigation_visual(&theme, true, None, None);

        assert_eq!(visual.active, theme.colors.on_secondary_container);
        assert_eq!(visual.inactive, theme.colors.on_surface_variant);
        assert_eq!(visual.label, theme.colors.on_surface);
    }

    #[test]
    fn unfocused_label_is_muted() {
        let theme = Theme::light();
        let visual = bottom_navigation_visual(&theme, false, None, None);
        assert_eq!(visual.label, theme.colors.on_surface_variant);
    }

    #[test]
    fn custom_tint_also_colors_the_label() {
        let theme = Theme::light();
        let accent = Rgba::from_rgb8(179, 38, 30);

        let focused = bottom_navigation_visual(&theme, true, Some(accent), None);
        assert_eq!(focused.active, accent);
        assert_eq!(focused.label, accent);

        // The unfocused label only follows the inactive override.
        let unfocused = bottom_navigation_visual(&theme, false, Some(accent), None);
        assert_eq!(unfocused.label, theme.colors.on_surface_variant);
    }
}
