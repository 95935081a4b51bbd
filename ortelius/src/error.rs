//! Error types used by the crate.

use image::ImageError;
use thiserror::Error;

/// Ortelius error type.
///
/// The two variants mirror the two ways a draw sequence can fail: the image
/// payload of a feature cannot be decoded, or the underlying graphics backend
/// rejects an operation. Neither is ever fatal to the frame; see
/// [`RasterRenderer::draw_features`](crate::RasterRenderer::draw_features)
/// for the degradation policy.
#[derive(Debug, Error)]
pub enum OrteliusError {
    /// Image decoding error.
    #[error("image decode error: {0:?}")]
    ImageDecode(#[from] ImageError),
    /// Failure reported by the underlying graphics backend - details are
    /// opaque to this layer.
    #[error("graphics state error: {0}")]
    Graphics(String),
}

impl OrteliusError {
    /// Constructs a graphics state error from any displayable backend detail.
    pub fn graphics(message: impl Into<String>) -> Self {
        OrteliusError::Graphics(message.into())
    }
}
