//! # Semantic Color Roles
//!
//! This module defines the closed set of semantic color roles a theme must
//! provide, and the [SchemeColors] table holding one concrete color per
//! role. Roles are stable names (`primary`, `onSurfaceVariant`, …) that
//! keep their meaning across light and dark themes; only the concrete
//! values change.
//!
//! Because [SchemeColors] is a plain struct with one field per role, a
//! constructed scheme can never be missing a role; partial color tables
//! only exist at the configuration boundary, where they are validated via
//! [SchemeColors::from_roles] before a theme is built.

use std::str::FromStr;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::color::Rgba;
use crate::error::{ThemeError, ThemeResult};

/// Fixed opacity steps shared by the resolvers.
pub mod opacity {
    /// Hover/drag overlays.
    pub const LEVEL1: f32 = 0.08;
    /// Pressed/focus overlays, ripples and disabled containers.
    pub const LEVEL2: f32 = 0.12;
    /// Stronger overlays.
    pub const LEVEL3: f32 = 0.16;
    /// Disabled content.
    pub const LEVEL4: f32 = 0.38;
}

/// A semantic color role.
///
/// The set is closed: resolvers address colors exclusively through these
/// variants, so an unknown role cannot reach a resolver at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Role {
    Primary,
    OnPrimary,
    PrimaryContainer,
    OnPrimaryContainer,
    Secondary,
    OnSecondary,
    SecondaryContainer,
    OnSecondaryContainer,
    Tertiary,
    OnTertiary,
    TertiaryContainer,
    OnTertiaryContainer,
    Error,
    OnError,
    ErrorContainer,
    OnErrorContainer,
    Background,
    OnBackground,
    Surface,
    OnSurface,
    SurfaceVariant,
    OnSurfaceVariant,
    Outline,
    OutlineVariant,
    Shadow,
    Scrim,
    InverseSurface,
    InverseOnSurface,
    InversePrimary,
    SurfaceDisabled,
    OnSurfaceDisabled,
    Backdrop,
}

impl Role {
    /// Every role, in declaration order.
    pub const ALL: [Role; 32] = [
        Role::Primary,
        Role::OnPrimary,
        Role::PrimaryContainer,
        Role::OnPrimaryContainer,
        Role::Secondary,
        Role::OnSecondary,
        Role::SecondaryContainer,
        Role::OnSecondaryContainer,
        Role::Tertiary,
        Role::OnTertiary,
        Role::TertiaryContainer,
        Role::OnTertiaryContainer,
        Role::Error,
        Role::OnError,
        Role::ErrorContainer,
        Role::OnErrorContainer,
        Role::Background,
        Role::OnBackground,
        Role::Surface,
        Role::OnSurface,
        Role::SurfaceVariant,
        Role::OnSurfaceVariant,
        Role::Outline,
        Role::OutlineVariant,
        Role::Shadow,
        Role::Scrim,
        Role::InverseSurface,
        Role::InverseOnSurface,
        Role::InversePrimary,
        Role::SurfaceDisabled,
        Role::OnSurfaceDisabled,
        Role::Backdrop,
    ];

    /// The stable name of this role, as used in theme files.
    pub fn name(&self) -> &'static str {
        match self {
            Role::Primary => "primary",
            Role::OnPrimary => "onPrimary",
            Role::PrimaryContainer => "primaryContainer",
            Role::OnPrimaryContainer => "onPrimaryContainer",
            Role::Secondary => "secondary",
            Role::OnSecondary => "onSecondary",
            Role::SecondaryContainer => "secondaryContainer",
            Role::OnSecondaryContainer => "onSecondaryContainer",
            Role::Tertiary => "tertiary",
            Role::OnTertiary => "onTertiary",
            Role::TertiaryContainer => "tertiaryContainer",
            Role::OnTertiaryContainer => "onTertiaryContainer",
            Role::Error => "error",
            Role::OnError => "onError",
            Role::ErrorContainer => "errorContainer",
            Role::OnErrorContainer => "onErrorContainer",
            Role::Background => "background",
            Role::OnBackground => "onBackground",
            Role::Surface => "surface",
            Role::OnSurface => "onSurface",
            Role::SurfaceVariant => "surfaceVariant",
            Role::OnSurfaceVariant => "onSurfaceVariant",
            Role::Outline => "outline",
            Role::OutlineVariant => "outlineVariant",
            Role::Shadow => "shadow",
            Role::Scrim => "scrim",
            Role::InverseSurface => "inverseSurface",
            Role::InverseOnSurface => "inverseOnSurface",
            Role::InversePrimary => "inversePrimary",
            Role::SurfaceDisabled => "surfaceDisabled",
            Role::OnSurfaceDisabled => "onSurfaceDisabled",
            Role::Backdrop => "backdrop",
        }
    }
}

impl FromStr for Role {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .iter()
            .copied()
            .find(|role| role.name() == s)
            .ok_or_else(|| ThemeError::unknown_role(s))
    }
}

/// Surface tint colors for the five elevation levels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElevationColors {
    /// No elevation; fully transparent.
    pub level0: Rgba,
    /// Elevation level 1.
    pub level1: Rgba,
    /// Elevation level 2.
    pub level2: Rgba,
    /// Elevation level 3.
    pub level3: Rgba,
    /// Elevation level 4.
    pub level4: Rgba,
    /// Elevation level 5.
    pub level5: Rgba,
}

impl ElevationColors {
    /// Tint weights for levels 1 through 5.
    const WEIGHTS: [f32; 5] = [0.05, 0.08, 0.11, 0.12, 0.14];

    /// Derive the elevation ramp by tinting `surface` toward `primary`.
    pub fn derive(surface: Rgba, primary: Rgba) -> Self {
        let [w1, w2, w3, w4, w5] = Self::WEIGHTS;
        Self {
            level0: Rgba::TRANSPARENT,
            level1: surface.mix(primary, w1),
            level2: surface.mix(primary, w2),
            level3: surface.mix(primary, w3),
            level4: surface.mix(primary, w4),
            level5: surface.mix(primary, w5),
        }
    }
}

/// The complete color table of a theme: one concrete color per [Role],
/// plus the derived [ElevationColors] ramp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub struct SchemeColors {
    pub primary: Rgba,
    pub on_primary: Rgba,
    pub primary_container: Rgba,
    pub on_primary_container: Rgba,
    pub secondary: Rgba,
    pub on_secondary: Rgba,
    pub secondary_container: Rgba,
    pub on_secondary_container: Rgba,
    pub tertiary: Rgba,
    pub on_tertiary: Rgba,
    pub tertiary_container: Rgba,
    pub on_tertiary_container: Rgba,
    pub error: Rgba,
    pub on_error: Rgba,
    pub error_container: Rgba,
    pub on_error_container: Rgba,
    pub background: Rgba,
    pub on_background: Rgba,
    pub surface: Rgba,
    pub on_surface: Rgba,
    pub surface_variant: Rgba,
    pub on_surface_variant: Rgba,
    pub outline: Rgba,
    pub outline_variant: Rgba,
    pub shadow: Rgba,
    pub scrim: Rgba,
    pub inverse_surface: Rgba,
    pub inverse_on_surface: Rgba,
    pub inverse_primary: Rgba,
    pub surface_disabled: Rgba,
    pub on_surface_disabled: Rgba,
    pub backdrop: Rgba,
    /// Derived surface tints, not addressable as a [Role].
    pub elevation: ElevationColors,
}

impl SchemeColors {
    /// Look up the color assigned to a role.
    pub fn get(&self, role: Role) -> Rgba {
        match role {
            Role::Primary => self.primary,
            Role::OnPrimary => self.on_primary,
            Role::PrimaryContainer => self.primary_container,
            Role::OnPrimaryContainer => self.on_primary_container,
            Role::Secondary => self.secondary,
            Role::OnSecondary => self.on_secondary,
            Role::SecondaryContainer => self.secondary_container,
            Role::OnSecondaryContainer => self.on_secondary_container,
            Role::Tertiary => self.tertiary,
            Role::OnTertiary => self.on_tertiary,
            Role::TertiaryContainer => self.tertiary_container,
            Role::OnTertiaryContainer => self.on_tertiary_container,
            Role::Error => self.error,
            Role::OnError => self.on_error,
            Role::ErrorContainer => self.error_container,
            Role::OnErrorContainer => self.on_error_container,
            Role::Background => self.background,
            Role::OnBackground => self.on_background,
            Role::Surface => self.surface,
            Role::OnSurface => self.on_surface,
            Role::SurfaceVariant => self.surface_variant,
            Role::OnSurfaceVariant => self.on_surface_variant,
            Role::Outline => self.outline,
            Role::OutlineVariant => self.outline_variant,
            Role::Shadow => self.shadow,
            Role::Scrim => self.scrim,
            Role::InverseSurface => self.inverse_surface,
            Role::InverseOnSurface => self.inverse_on_surface,
            Role::InversePrimary => self.inverse_primary,
            Role::SurfaceDisabled => self.surface_disabled,
            Role::OnSurfaceDisabled => self.on_surface_disabled,
            Role::Backdrop => self.backdrop,
        }
    }

    /// Replace the color assigned to a role.
    pub fn set(&mut self, role: Role, color: Rgba) {
        match role {
            Role::Primary => self.primary = color,
            Role::OnPrimary => self.on_primary = color,
            Role::PrimaryContainer => self.primary_container = color,
            Role::OnPrimaryContainer => self.on_primary_container = color,
            Role::Secondary => self.secondary = color,
            Role::OnSecondary => self.on_secondary = color,
            Role::SecondaryContainer => self.secondary_container = color,
            Role::OnSecondaryContainer => self.on_secondary_container = color,
            Role::Tertiary => self.tertiary = color,
            Role::OnTertiary => self.on_tertiary = color,
            Role::TertiaryContainer => self.tertiary_container = color,
            Role::OnTertiaryContainer => self.on_tertiary_container = color,
            Role::Error => self.error = color,
            Role::OnError => self.on_error = color,
            Role::ErrorContainer => self.error_container = color,
            Role::OnErrorContainer => self.on_error_container = color,
            Role::Background => self.background = color,
            Role::OnBackground => self.on_background = color,
            Role::Surface => self.surface = color,
            Role::OnSurface => self.on_surface = color,
            Role::SurfaceVariant => self.surface_variant = color,
            Role::OnSurfaceVariant => self.on_surface_variant = color,
            Role::Outline => self.outline = color,
            Role::OutlineVariant => self.outline_variant = color,
            Role::Shadow => self.shadow = color,
            Role::Scrim => self.scrim = color,
            Role::InverseSurface => self.inverse_surface = color,
            Role::InverseOnSurface => self.inverse_on_surface = color,
            Role::InversePrimary => self.inverse_primary = color,
            Role::SurfaceDisabled => self.surface_disabled = color,
            Role::OnSurfaceDisabled => self.on_surface_disabled = color,
            Role::Backdrop => self.backdrop = color,
        }
    }

    /// Build a scheme from a complete role table.
    ///
    /// Every [Role] must be present; the first missing role aborts
    /// construction with [ThemeError::MissingRole]. The elevation ramp is
    /// derived from the supplied `surface` and `primary` values.
    pub fn from_roles(roles: &IndexMap<Role, Rgba>) -> ThemeResult<Self> {
        let get = |role: Role| -> ThemeResult<Rgba> {
            roles
                .get(&role)
                .copied()
                .ok_or_else(|| ThemeError::missing_role(role))
        };

        let surface = get(Role::Surface)?;
        let primary = get(Role::Primary)?;

        Ok(Self {
            primary,
            on_primary: get(Role::OnPrimary)?,
            primary_container: get(Role::PrimaryContainer)?,
            on_primary_container: get(Role::OnPrimaryContainer)?,
            secondary: get(Role::Secondary)?,
            on_secondary: get(Role::OnSecondary)?,
            secondary_container: get(Role::SecondaryContainer)?,
            on_secondary_container: get(Role::OnSecondaryContainer)?,
            tertiary: get(Role::Tertiary)?,
            on_tertiary: get(Role::OnTertiary)?,
            tertiary_container: get(Role::TertiaryContainer)?,
            on_tertiary_container: get(Role::OnTertiaryContainer)?,
            error: get(Role::Error)?,
            on_error: get(Role::OnError)?,
            error_container: get(Role::ErrorContainer)?,
            on_error_container: get(Role::OnErrorContainer)?,
            background: get(Role::Background)?,
            on_background: get(Role::OnBackground)?,
            surface,
            on_surface: get(Role::OnSurface)?,
            surface_variant: get(Role::SurfaceVariant)?,
            on_surface_variant: get(Role::OnSurfaceVariant)?,
            outline: get(Role::Outline)?,
            outline_variant: get(Role::OutlineVariant)?,
            shadow: get(Role::Shadow)?,
            scrim: get(Role::Scrim)?,
            inverse_surface: get(Role::InverseSurface)?,
            inverse_on_surface: get(Role::InverseOnSurface)?,
            inverse_primary: get(Role::InversePrimary)?,
            surface_disabled: get(Role::SurfaceDisabled)?,
            on_surface_disabled: get(Role::OnSurfaceDisabled)?,
            backdrop: get(Role::Backdrop)?,
            elevation: ElevationColors::derive(surface, primary),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_names_round_trip() {
        for role in Role::ALL {
            assert_eq!(role.name().parse::<Role>().unwrap(), role);
        }
        assert!("notARole".parse::<Role>().is_err());
    }

    #[test]
    fn get_covers_every_role() {
        let theme = crate::theme::Theme::light();
        for role in Role::ALL {
            // Just exercising the lookup table; every arm must exist.
            let _ = theme.colors.get(role);
        }
    }

    #[test]
    fn from_roles_reports_first_missing_role() {
        let mut roles = IndexMap::new();
        for role in Role::ALL {
            roles.insert(role, Rgba::BLACK);
        }
        roles.swap_remove(&Role::OnSurfaceVariant);

        let err = SchemeColors::from_roles(&roles).unwrap_err();
        match err {
            ThemeError::MissingRole { role } => assert_eq!(role, Role::OnSurfaceVariant),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn elevation_ramp_is_surface_tinted_toward_primary() {
        let surface = Rgba::from_rgb8(255, 251, 254);
        let primary = Rgba::from_rgb8(11, 87, 208);
        let elevation = ElevationColors::derive(surface, primary);

        assert_eq!(elevation.level0, Rgba::TRANSPARENT);
        assert_eq!(elevation.level1, surface.mix(primary, 0.05));
        assert_eq!(elevation.level5, surface.mix(primary, 0.14));
    }
}
