//! Integration seam with the host graphics environment.

use crate::decoded_image::DecodedImage;
use crate::error::OrteliusError;
use crate::Color;

/// Opaque identifier of a texture resident in a [`GraphicsContext`].
///
/// Handles are created by [`GraphicsContext::gen_texture`] and stay valid
/// until passed to [`GraphicsContext::delete_texture`]. A handle is only
/// meaningful for the context that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureHandle(u64);

impl TextureHandle {
    /// Creates a handle from the backend's raw texture id.
    pub const fn from_raw(id: u64) -> Self {
        Self(id)
    }

    /// Raw backend texture id of the handle.
    pub const fn into_raw(self) -> u64 {
        self.0
    }
}

/// Drawing capabilities that can be switched on and off in a context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    /// Sampling of the bound 2d texture during draws.
    Texture2d,
    /// Blending of incoming fragments with the color buffer.
    Blend,
}

/// Texture sampling filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextureFilter {
    /// Nearest-neighbor sampling.
    Nearest,
    /// Linear interpolation between neighboring texels.
    Linear,
}

/// Texture coordinate wrapping mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextureWrap {
    /// Coordinates outside `0.0..=1.0` sample the edge texel.
    ClampToEdge,
    /// Coordinates wrap around, tiling the texture.
    Repeat,
}

/// Blend factors of the fixed-function blend equation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlendFactor {
    /// Multiply by zero.
    Zero,
    /// Multiply by one.
    One,
    /// Multiply by the fragment alpha.
    SrcAlpha,
    /// Multiply by one minus the fragment alpha.
    OneMinusSrcAlpha,
}

/// Sampling parameters applied to the currently bound texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SamplerParameters {
    /// Filter used when the texture is drawn smaller than its pixel size.
    pub min_filter: TextureFilter,
    /// Filter used when the texture is drawn larger than its pixel size.
    pub mag_filter: TextureFilter,
    /// Wrapping along the horizontal texture axis.
    pub wrap_s: TextureWrap,
    /// Wrapping along the vertical texture axis.
    pub wrap_t: TextureWrap,
}

impl Default for SamplerParameters {
    /// Linear filtering, clamp-to-edge on both axes.
    fn default() -> Self {
        Self {
            min_filter: TextureFilter::Linear,
            mag_filter: TextureFilter::Linear,
            wrap_s: TextureWrap::ClampToEdge,
            wrap_t: TextureWrap::ClampToEdge,
        }
    }
}

/// Vertex of a textured primitive.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct TexturedVertex {
    /// Position in screen pixels.
    pub position: [f32; 2],
    /// Texture coordinates in `0.0..=1.0` space.
    pub tex_coords: [f32; 2],
}

/// Fixed-function-style immediate-mode drawing interface.
///
/// This trait is the only coupling between the rendering pipeline and the
/// host graphics environment. Implementations translate the calls into their
/// backend (a GL context, a software rasterizer, a recording fake for tests).
/// Every operation takes `&mut self`: the context is single-owner,
/// single-thread state and the exclusive borrow encodes that assumption.
///
/// Any backend failure is reported as
/// [`OrteliusError::Graphics`](crate::error::OrteliusError::Graphics).
pub trait GraphicsContext {
    /// Allocates a new texture object and returns its handle.
    fn gen_texture(&mut self) -> Result<TextureHandle, OrteliusError>;

    /// Releases the texture and the backend memory behind it.
    fn delete_texture(&mut self, handle: TextureHandle) -> Result<(), OrteliusError>;

    /// Binds the texture for subsequent sampler/upload/draw calls, or unbinds
    /// with `None`.
    fn bind_texture(&mut self, handle: Option<TextureHandle>) -> Result<(), OrteliusError>;

    /// Sets sampling parameters of the currently bound texture.
    fn set_sampler_parameters(&mut self, parameters: SamplerParameters)
        -> Result<(), OrteliusError>;

    /// Uploads RGBA pixel data into the currently bound texture.
    fn upload_image(&mut self, image: &DecodedImage) -> Result<(), OrteliusError>;

    /// Pixel dimensions of the texture behind the handle.
    fn texture_size(&mut self, handle: TextureHandle) -> Result<(u32, u32), OrteliusError>;

    /// Switches the capability on.
    fn enable(&mut self, capability: Capability) -> Result<(), OrteliusError>;

    /// Switches the capability off.
    fn disable(&mut self, capability: Capability) -> Result<(), OrteliusError>;

    /// Sets the source and destination factors of the blend equation.
    fn set_blend_func(
        &mut self,
        src: BlendFactor,
        dst: BlendFactor,
    ) -> Result<(), OrteliusError>;

    /// Sets the modulate color applied to subsequent draws.
    fn set_color(&mut self, color: Color) -> Result<(), OrteliusError>;

    /// Draws the vertices as a triangle fan.
    fn draw_triangle_fan(&mut self, vertices: &[TexturedVertex]) -> Result<(), OrteliusError>;
}
