use crate::color::Rgba;
use crate::rendering::primitives::ripple_color;
use crate::theme::Theme;

/// Resolved colors for a navigation drawer item.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawerItemVisual {
    /// Pill fill color; only the active item has one.
    pub background: Option<Rgba>,
    /// Label and icon color.
    pub text: Rgba,
    /// Ripple feedback color.
    pub ripple: Rgba,
}

/// Build a [DrawerItemVisual] from the given state.
pub fn drawer_item_visual(theme: &Theme, active: bool) -> DrawerItemVisual {
    let colors = &theme.colors;

    let (background, text) = if active {
        (
            Some(colors.secondary_container),
            colors.on_secondary_container,
        )
    } else {
        (None, colors.on_surface_variant)
    };

    DrawerItemVisual {
        background,
        text,
        ripple: ripple_color(text, None),
    }
}

/// Header color for a drawer section title.
pub fn drawer_section_title_color(theme: &Theme) -> Rgba {
    theme.colors.on_surface_variant
}
