//! Top-level raster feature renderer.

use crate::error::OrteliusError;
use crate::feature::{FeatureId, RasterFeature};
use crate::render::{draw_quad, load_texture, GraphicsContext, TextureStore};
use crate::style::{RasterStyle, StyleId};
use crate::view::Viewport;

/// Draws raster features through a [`GraphicsContext`], caching one uploaded
/// texture per (feature, style) pair.
///
/// The renderer owns the texture cache, so it must outlive the frame loop and
/// be told when features or styles are retired (see
/// [`release_feature`](RasterRenderer::release_feature) and
/// [`release_style`](RasterRenderer::release_style)); otherwise the cached
/// context textures accumulate for the lifetime of the process.
#[derive(Debug, Default)]
pub struct RasterRenderer {
    textures: TextureStore,
}

impl RasterRenderer {
    /// Creates a renderer with an empty texture cache.
    pub fn new() -> Self {
        Self {
            textures: TextureStore::new(),
        }
    }

    /// Draws a single feature with the given style.
    ///
    /// The first call for a (feature, style) pair decodes the feature image
    /// and uploads it into the context; subsequent calls reuse the cached
    /// texture. The destination rectangle is the feature's bounding box
    /// projected through `viewport` and rounded to whole pixels.
    pub fn draw_feature(
        &mut self,
        context: &mut dyn GraphicsContext,
        viewport: &Viewport,
        style: &RasterStyle,
        feature: &RasterFeature,
    ) -> Result<(), OrteliusError> {
        let handle = self
            .textures
            .get_or_create(feature.id(), style.id(), || {
                load_texture(context, feature.image())
            })?;

        let destination = viewport.project_bbox(feature.bbox());
        draw_quad(context, handle, destination, style.tint())
    }

    /// Draws every feature of an iterator, skipping the ones that fail.
    ///
    /// A failed feature is logged and omitted from the frame; the rest of the
    /// features are still drawn. Returns the number of features actually
    /// drawn.
    pub fn draw_features<'a>(
        &mut self,
        context: &mut dyn GraphicsContext,
        viewport: &Viewport,
        style: &RasterStyle,
        features: impl IntoIterator<Item = &'a RasterFeature>,
    ) -> usize {
        let mut drawn = 0;
        for feature in features {
            match self.draw_feature(context, viewport, style, feature) {
                Ok(()) => drawn += 1,
                Err(err) => log::warn!("Failed to draw feature {:?}: {err}", feature.id()),
            }
        }

        drawn
    }

    /// Releases the cached textures of a retired feature.
    pub fn release_feature(&mut self, context: &mut dyn GraphicsContext, feature_id: FeatureId) {
        self.textures.release_feature(context, feature_id);
    }

    /// Releases the cached textures created for a retired style.
    pub fn release_style(&mut self, context: &mut dyn GraphicsContext, style_id: StyleId) {
        self.textures.release_style(context, style_id);
    }

    /// Releases every cached texture.
    pub fn clear(&mut self, context: &mut dyn GraphicsContext) {
        self.textures.clear(context);
    }

    /// Number of textures currently cached.
    pub fn cached_textures(&self) -> usize {
        self.textures.len()
    }
}
