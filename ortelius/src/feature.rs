//! Geographic features with raster geometry.

use bytes::Bytes;

use crate::bounding_box::BoundingBox;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Identifier of a feature, unique within the application.
///
/// Feature ids key the texture store together with [`StyleId`](crate::StyleId),
/// so reusing an id for a different feature would make the renderer draw the
/// stale texture of the retired one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FeatureId(u64);

impl FeatureId {
    /// Creates a feature id from a raw value.
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Raw value of the id.
    pub const fn as_u64(&self) -> u64 {
        self.0
    }
}

/// A geographic entity with a raster payload.
///
/// The feature consists of an encoded image (any format supported by the
/// decoder, e.g. PNG or JPEG) and a world-space bounding box the image is
/// stretched over when drawn.
#[derive(Debug, Clone)]
pub struct RasterFeature {
    id: FeatureId,
    bbox: BoundingBox,
    image: Bytes,
}

impl RasterFeature {
    /// Creates a new feature placing the given encoded image over `bbox`.
    pub fn new(id: FeatureId, bbox: BoundingBox, image: impl Into<Bytes>) -> Self {
        Self {
            id,
            bbox,
            image: image.into(),
        }
    }

    /// Identifier of the feature.
    pub fn id(&self) -> FeatureId {
        self.id
    }

    /// World-space placement of the feature image.
    pub fn bbox(&self) -> BoundingBox {
        self.bbox
    }

    /// Encoded image bytes of the feature.
    pub fn image(&self) -> &[u8] {
        &self.image
    }
}
