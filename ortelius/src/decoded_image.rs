//! Utilities for loading images to be rendered on the map.

use crate::error::OrteliusError;

/// An image that has been decoded into memory.
#[derive(Debug, Clone)]
pub struct DecodedImage {
    /// Raw bytes of the image, in RGBA order.
    pub(crate) bytes: Vec<u8>,
    /// Width and height of the image.
    pub(crate) dimensions: (u32, u32),
}

impl DecodedImage {
    /// Decodes an image from a byte slice.
    ///
    /// Attempts to guess the format of the image from the data. Non-RGBA
    /// images will be converted to RGBA.
    pub fn decode(bytes: &[u8]) -> Result<Self, OrteliusError> {
        use image::GenericImageView;
        let decoded = image::load_from_memory(bytes)?;
        let bytes = decoded.to_rgba8();
        let dimensions = decoded.dimensions();

        Ok(Self {
            bytes: bytes.into_vec(),
            dimensions,
        })
    }

    /// Constructs an image from raw RGBA pixel data.
    ///
    /// Fails with a decode error if the buffer length does not match the
    /// dimensions.
    pub fn from_raw(bytes: Vec<u8>, width: u32, height: u32) -> Result<Self, OrteliusError> {
        if bytes.len() != (width as usize) * (height as usize) * 4 {
            return Err(OrteliusError::ImageDecode(image::ImageError::Parameter(
                image::error::ParameterError::from_kind(
                    image::error::ParameterErrorKind::DimensionMismatch,
                ),
            )));
        }

        Ok(Self {
            bytes,
            dimensions: (width, height),
        })
    }

    /// Width of the image in pixels.
    pub fn width(&self) -> u32 {
        self.dimensions.0
    }

    /// Height of the image in pixels.
    pub fn height(&self) -> u32 {
        self.dimensions.1
    }

    /// Raw RGBA pixel bytes of the image.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }
}
