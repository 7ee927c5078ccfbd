use crate::color::Rgba;
use crate::theme::Theme;

/// Size variants for the app bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppbarMode {
    /// Standard single-row bar.
    #[default]
    Small,
    /// Two-row bar with the title on the second row.
    Medium,
    /// Tall bar with a headline title.
    Large,
    /// Single-row bar with a centered title.
    CenterAligned,
}

impl AppbarMode {
    /// The bar height for this mode.
    pub fn height(self) -> f32 {
        match self {
            AppbarMode::Small | AppbarMode::CenterAligned => 64.0,
            AppbarMode::Medium => 112.0,
            AppbarMode::Large => 152.0,
        }
    }

    /// Whether the title content is horizontally centered.
    pub fn centers_content(self) -> bool {
        matches!(self, AppbarMode::CenterAligned)
    }
}

/// A child slot of the app bar, tagged by the caller.
///
/// The bar applies its resolved content tint to the recognized slots and
/// leaves anything else untouched; no inspection of the child itself is
/// involved.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AppbarChild {
    /// The title block.
    Content {
        /// Explicit tint requested by the child, if any.
        color: Option<Rgba>,
    },
    /// A trailing action icon.
    Action {
        /// Explicit tint requested by the child, if any.
        color: Option<Rgba>,
    },
    /// The leading back navigation icon.
    BackAction {
        /// Explicit tint requested by the child, if any.
        color: Option<Rgba>,
    },
    /// Anything else; never tinted by the bar.
    Other,
}

/// Resolve the bar's own background color.
///
/// A custom color wins; otherwise an elevated bar sits on the second
/// elevation tint and a flat one on the plain surface.
pub fn appbar_background(theme: &Theme, custom: Option<Rgba>, elevated: bool) -> Rgba {
    if let Some(custom) = custom {
        return custom;
    }

    if elevated {
        theme.colors.elevation.level2
    } else {
        theme.colors.surface
    }
}

/// Resolve the content tint of the bar.
///
/// An explicit color wins. Otherwise dark themes get white content (the
/// one documented place a resolver consults [Theme::dark]) and light
/// themes leave the tint unset so children keep their own colors.
pub fn appbar_content_color(theme: &Theme, explicit: Option<Rgba>) -> Option<Rgba> {
    if explicit.is_some() {
        return explicit;
    }

    if theme.dark {
        Some(Rgba::WHITE)
    } else {
        None
    }
}

/// Resolve the tint applied to one tagged child slot.
pub fn appbar_child_tint(theme: &Theme, child: &AppbarChild) -> Option<Rgba> {
    match child {
        AppbarChild::Content { color }
        | AppbarChild::Action { color }
        | AppbarChild::BackAction { color } => appbar_content_color(theme, *color),
        AppbarChild::Other => None,
    }
}
