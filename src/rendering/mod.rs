//! # Color Resolution
//!
//! This module centralizes the per-family color resolvers: for each
//! component family there is a pure function mapping the current visual
//! state (mode, disabled, selected/checked, caller overrides) plus the
//! active theme to the exact set of colors the component must render
//! with.
//!
//! Every resolver follows the same precedence rules:
//!
//! 1. **Disabled beats everything.** Once disabled, colors come from the
//!    fixed disabled roles; custom overrides are ignored.
//! 2. **Custom overrides beat mode-derived defaults.**
//! 3. **Mode/variant selects the base role pairing.**
//! 4. **Selection/checked state is applied after the mode.**
//! 5. **The ripple is derived last**, from the already-resolved
//!    foreground color at overlay opacity, unless the caller supplied a
//!    ripple color.
//!
//! Resolvers are total over their input enums, side-effect-free and
//! re-entrant; they are called once per render and their results are
//! consumed immediately.

pub mod components;
pub mod primitives;

pub use components::appbar::{
    appbar_background, appbar_child_tint, appbar_content_color, AppbarChild, AppbarMode,
};
pub use components::bottom_navigation::{bottom_navigation_visual, BottomNavigationVisual};
pub use components::button::{button_visual, ButtonMode, ButtonOverrides, ButtonVisual};
pub use components::card::{card_cover_radius, card_visual, CardMode, CardVisual};
pub use components::chip::{chip_visual, ChipParams, ChipVisual};
pub use components::drawer::{drawer_item_visual, drawer_section_title_color, DrawerItemVisual};
pub use components::icon_button::{
    icon_button_visual, IconButtonMode, IconButtonOverrides, IconButtonVisual,
};
pub use components::list::{accordion_visual, list_item_visual, AccordionVisual, ListItemVisual};
pub use components::segmented_button::{
    segmented_button_visual, trailing_border_width, Density, SegmentedButtonOverrides,
    SegmentedButtonVisual,
};
pub use primitives::ripple_color;
