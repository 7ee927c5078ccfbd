//! Shared color derivation primitives for the component resolvers.

use crate::color::Rgba;
use crate::roles::opacity;

/// Derive a ripple color from an already-resolved foreground color.
///
/// The ripple must visually match the element's foreground, so it is
/// always the foreground at overlay opacity, unless the caller supplied
/// an explicit ripple color, which is used verbatim.
pub fn ripple_color(foreground: Rgba, custom: Option<Rgba>) -> Rgba {
    custom.unwrap_or_else(|| foreground.with_alpha(opacity::LEVEL2))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ripple_matches_foreground_at_overlay_opacity() {
        let text = Rgba::from_rgb8(11, 87, 208);
        assert_eq!(ripple_color(text, None), text.with_alpha(0.12));
    }

    #[test]
    fn custom_ripple_wins_verbatim() {
        let text = Rgba::from_rgb8(11, 87, 208);
        let custom = Rgba::from_rgb8(255, 0, 0).with_alpha(0.2);
        assert_eq!(ripple_color(text, Some(custom)), custom);
    }
}
