use crate::color::Rgba;
use crate::rendering::primitives::ripple_color;
use crate::theme::Theme;

/// Container treatments for icon buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconButtonMode {
    /// No container; the icon sits directly on its parent surface.
    Standard,
    /// Outlined container.
    Outlined,
    /// Filled container.
    Contained,
}

/// Caller-supplied color overrides for an icon button.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct IconButtonOverrides {
    /// Custom icon color.
    pub icon: Option<Rgba>,
    /// Custom container color.
    pub container: Option<Rgba>,
    /// Custom ripple color.
    pub ripple: Option<Rgba>,
}

/// Resolved colors for an icon button.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IconButtonVisual {
    /// Icon glyph color.
    pub icon: Rgba,
    /// Container fill, when the mode and state call for one.
    pub background: Option<Rgba>,
    /// Outline color.
    pub border: Rgba,
    /// Ripple feedback color.
    pub ripple: Rgba,
}

/// Build an [IconButtonVisual] from the given state.
///
/// Selection swaps the role pairing: a selected contained button fills
/// with `primary`, and a selected outlined button inverts to
/// `inverseSurface`/`inverseOnSurface`.
pub fn icon_button_visual(
    theme: &Theme,
    mode: IconButtonMode,
    selected: bool,
    disabled: bool,
    overrides: &IconButtonOverrides,
) -> IconButtonVisual {
    let icon = icon_color(theme, mode, selected, disabled, overrides.icon);

    IconButtonVisual {
        icon,
        background: background_color(theme, mode, selected, disabled, overrides.container),
        border: border_color(theme, disabled),
        ripple: ripple_color(icon, overrides.ripple),
    }
}

fn icon_color(
    theme: &Theme,
    mode: IconButtonMode,
    selected: bool,
    disabled: bool,
    custom: Option<Rgba>,
) -> Rgba {
    let colors = &theme.colors;

    if disabled {
        return colors.on_surface_disabled;
    }

    if let Some(custom) = custom {
        return custom;
    }

    match mode {
        IconButtonMode::Contained => {
            if selected {
                colors.on_primary
            } else {
                colors.primary
            }
        }
        IconButtonMode::Outlined => {
            if selected {
                colors.inverse_on_surface
            } else {
                colors.on_surface_variant
            }
        }
        IconButtonMode::Standard => {
            if selected {
                colors.primary
            } else {
                colors.on_surface_variant
            }
        }
    }
}

fn background_color(
    theme: &Theme,
    mode: IconButtonMode,
    selected: bool,
    disabled: bool,
    custom: Option<Rgba>,
) -> Option<Rgba> {
    let colors = &theme.colors;

    if disabled {
        return match mode {
            IconButtonMode::Contained => Some(colors.surface_disabled),
            _ => None,
        };
    }

    if let Some(custom) = custom {
        return Some(custom);
    }

    match mode {
        IconButtonMode::Contained => Some(if selected {
            colors.primary
        } else {
            colors.surface_variant
        }),
        IconButtonMode::Outlined if selected => Some(colors.inverse_surface),
        _ => None,
    }
}

fn border_color(theme: &Theme, disabled: bool) -> Rgba {
    if disabled {
        theme.colors.surface_disabled
    } else {
        theme.colors.outline
    }
}
