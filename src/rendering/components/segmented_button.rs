use crate::color::Rgba;
use crate::theme::Theme;

/// Baseline vertical padding for a segmented button.
const DEFAULT_PADDING: f32 = 9.0;

/// Border stroke width shared by all segments.
const BORDER_WIDTH: f32 = 1.0;

/// Vertical density steps for segmented buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Density {
    /// Regular touch-target height.
    #[default]
    Regular,
    /// Slightly tighter.
    Small,
    /// Tighter still.
    Medium,
    /// Minimum height.
    High,
}

impl Density {
    /// Vertical padding for this density step.
    pub fn padding(self) -> f32 {
        match self {
            Density::Regular => DEFAULT_PADDING,
            Density::Small => DEFAULT_PADDING - 2.0,
            Density::Medium => DEFAULT_PADDING - 4.0,
            Density::High => DEFAULT_PADDING - 8.0,
        }
    }
}

/// Caller-supplied label color overrides for a segmented button.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SegmentedButtonOverrides {
    /// Label color when the segment is checked.
    pub checked: Option<Rgba>,
    /// Label color when the segment is unchecked.
    pub unchecked: Option<Rgba>,
}

/// Resolved colors for one segment of a segmented button row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentedButtonVisual {
    /// Segment fill color.
    pub background: Rgba,
    /// Segment border color.
    pub border: Rgba,
    /// Label color.
    pub text: Rgba,
    /// Border stroke width.
    pub border_width: f32,
}

/// Build a [SegmentedButtonVisual] from the given state.
pub fn segmented_button_visual(
    theme: &Theme,
    checked: bool,
    disabled: bool,
    overrides: &SegmentedButtonOverrides,
) -> SegmentedButtonVisual {
    let colors = &theme.colors;

    let background = if checked {
        colors.secondary_container
    } else {
        Rgba::TRANSPARENT
    };

    let border = if disabled {
        colors.surface_disabled
    } else {
        colors.outline
    };

    let text = if disabled {
        colors.on_surface_disabled
    } else if checked {
        overrides.checked.unwrap_or(colors.on_secondary_container)
    } else {
        overrides.unchecked.unwrap_or(colors.on_surface)
    };

    SegmentedButtonVisual {
        background,
        border,
        text,
        border_width: BORDER_WIDTH,
    }
}

/// Extra trailing border for a segment in a row.
///
/// Adjacent segments share their dividing border. A disabled segment does
/// not draw one, so the enabled segment just before it has to draw its
/// own right-hand border; this returns that stroke width when needed.
pub fn trailing_border_width(disabled_flags: &[bool], index: usize) -> Option<f32> {
    let segment_disabled = disabled_flags.get(index).copied().unwrap_or(false);
    let next_disabled = disabled_flags.get(index + 1).copied().unwrap_or(false);

    if !segment_disabled && next_disabled {
        Some(BORDER_WIDTH)
    } else {
        None
    }
}
