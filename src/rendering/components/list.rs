use crate::color::Rgba;
use crate::rendering::primitives::ripple_color;
use crate::theme::Theme;

/// Resolved colors for a list item.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ListItemVisual {
    /// Title text color.
    pub title: Rgba,
    /// Description text color.
    pub description: Rgba,
}

/// Build a [ListItemVisual] from the theme.
pub fn list_item_visual(theme: &Theme) -> ListItemVisual {
    ListItemVisual {
        title: theme.colors.on_surface,
        description: theme.colors.on_surface_variant,
    }
}

/// Resolved colors for an expandable list accordion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AccordionVisual {
    /// Base title color.
    pub title: Rgba,
    /// Description text color.
    pub description: Rgba,
    /// Effective title color; switches to the accent while expanded.
    pub title_text: Rgba,
    /// Ripple feedback color.
    pub ripple: Rgba,
}

/// Build an [AccordionVisual] from the given state.
pub fn accordion_visual(theme: &Theme, expanded: bool, custom_ripple: Option<Rgba>) -> AccordionVisual {
    let title = theme.colors.on_surface;
    let title_text = if expanded {
        theme.colors.primary
    } else {
        title
    };

    AccordionVisual {
        title,
        description: theme.colors.on_surface_variant,
        title_text,
        ripple: ripple_color(title_text, custom_ripple),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_pairs_on_surface_with_on_surface_variant() {
        let theme = Theme::light();
        let visual = list_item_visual(&theme);
        assert_eq!(visual.title, theme.colors.on_surface);
        assert_eq!(visual.description, theme.colors.on_surface_variant);
    }

    #[test]
    fn expanding_switches_title_to_primary() {
        let theme = Theme::light();
        let collapsed = accordion_visual(&theme, false, None);
        let expanded = accordion_visual(&theme, true, None);

        assert_eq!(collapsed.title_text, theme.colors.on_surface);
        assert_eq!(expanded.title_text, theme.colors.primary);
        // The base title color is reported unchanged either way.
        assert_eq!(expanded.title, theme.colors.on_surface);
    }

    #[test]
    fn ripple_follows_the_effective_title_color() {
        let theme = Theme::dark();
        let expanded = accordion_visual(&theme, true, None);
        assert_eq!(expanded.ripple, theme.colors.primary.with_alpha(0.12));

        let custom = Rgba::from_rgb8(1, 2, 3).with_alpha(0.5);
        let visual = accordion_visual(&theme, true, Some(custom));
        assert_eq!(visual.ripple, custom);
    }
}
