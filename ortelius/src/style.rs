//! Styles controlling how raster features are drawn.

use crate::Color;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Identifier of a style.
///
/// Style identity, not style contents, keys the per-feature texture cache:
/// two styles with equal parameters but different ids produce separate
/// texture uploads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StyleId(u64);

impl StyleId {
    /// Creates a style id from a raw value.
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Raw value of the id.
    pub const fn as_u64(&self) -> u64 {
        self.0
    }
}

/// Rendering directive for raster features.
///
/// The default style draws the feature image unchanged (white tint, full
/// opacity).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RasterStyle {
    id: StyleId,
    tint: Color,
}

impl RasterStyle {
    /// Creates a style with the default white tint.
    pub fn new(id: StyleId) -> Self {
        Self {
            id,
            tint: Color::WHITE,
        }
    }

    /// Identifier of the style.
    pub fn id(&self) -> StyleId {
        self.id
    }

    /// Modulate color applied over the feature texture.
    pub fn tint(&self) -> Color {
        self.tint
    }

    /// Returns a copy of the style with the given tint color.
    pub fn with_tint(&self, tint: Color) -> Self {
        Self { tint, ..*self }
    }

    /// Returns a copy of the style with the tint alpha scaled by `opacity`.
    ///
    /// `opacity` is clamped to `0.0..=1.0`.
    pub fn with_opacity(&self, opacity: f32) -> Self {
        let opacity = opacity.clamp(0.0, 1.0);
        let alpha = (self.tint.a() as f32 * opacity).round() as u8;
        Self {
            tint: self.tint.with_alpha(alpha),
            ..*self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opacity_scales_tint_alpha() {
        let style = RasterStyle::new(StyleId::new(1)).with_opacity(0.5);
        assert_eq!(style.tint().a(), 128);

        let transparent = style.with_opacity(0.0);
        assert!(transparent.tint().is_transparent());

        let clamped = RasterStyle::new(StyleId::new(2)).with_opacity(7.0);
        assert_eq!(clamped.tint().a(), 255);
    }
}
