//! Recording fake of a graphics backend, used by tests and examples.

use ahash::HashMap;

use crate::decoded_image::DecodedImage;
use crate::error::OrteliusError;
use crate::render::context::{
    BlendFactor, Capability, GraphicsContext, SamplerParameters, TextureHandle, TexturedVertex,
};
use crate::Color;

/// Snapshot of the context state at the moment of a draw call.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawCall {
    /// Vertices of the drawn triangle fan.
    pub vertices: Vec<TexturedVertex>,
    /// Texture bound at the moment of the draw.
    pub texture: Option<TextureHandle>,
    /// Modulate color at the moment of the draw.
    pub color: Color,
    /// Blend function at the moment of the draw, if ever set.
    pub blend_func: Option<(BlendFactor, BlendFactor)>,
    /// Whether blending was enabled.
    pub blending_enabled: bool,
    /// Whether texturing was enabled.
    pub texturing_enabled: bool,
}

#[derive(Debug, Default, Clone)]
struct TextureState {
    size: Option<(u32, u32)>,
    sampler: Option<SamplerParameters>,
}

/// In-memory [`GraphicsContext`] that records every call.
///
/// The fake checks the same usage rules a strict fixed-function backend
/// would: binding or deleting unknown handles, uploading without a bound
/// texture, or drawing with texturing enabled but nothing bound all fail with
/// a graphics state error. Failure of uploads or draws can also be forced to
/// test degradation paths.
#[derive(Debug, Default)]
pub struct TestContext {
    next_handle: u64,
    textures: HashMap<TextureHandle, TextureState>,
    bound: Option<TextureHandle>,
    texturing_enabled: bool,
    blending_enabled: bool,
    blend_func: Option<(BlendFactor, BlendFactor)>,
    color: Color,
    upload_count: u32,
    draw_calls: Vec<DrawCall>,
    fail_on_upload: bool,
    fail_on_draw: bool,
}

impl TestContext {
    /// Creates an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent [`GraphicsContext::upload_image`] fail.
    pub fn fail_on_upload(&mut self, fail: bool) {
        self.fail_on_upload = fail;
    }

    /// Makes every subsequent [`GraphicsContext::draw_triangle_fan`] fail.
    pub fn fail_on_draw(&mut self, fail: bool) {
        self.fail_on_draw = fail;
    }

    /// Handles of all textures that are currently allocated.
    pub fn alive_textures(&self) -> Vec<TextureHandle> {
        let mut handles: Vec<_> = self.textures.keys().copied().collect();
        handles.sort_by_key(|handle| handle.into_raw());
        handles
    }

    /// Currently bound texture.
    pub fn bound_texture(&self) -> Option<TextureHandle> {
        self.bound
    }

    /// Returns true if the capability is currently enabled.
    pub fn is_enabled(&self, capability: Capability) -> bool {
        match capability {
            Capability::Texture2d => self.texturing_enabled,
            Capability::Blend => self.blending_enabled,
        }
    }

    /// Sampling parameters set for the texture, if any.
    pub fn sampler_parameters(&self, handle: TextureHandle) -> Option<SamplerParameters> {
        self.textures.get(&handle).and_then(|state| state.sampler)
    }

    /// Number of image uploads performed.
    pub fn upload_count(&self) -> u32 {
        self.upload_count
    }

    /// All draw calls issued so far, in order.
    pub fn draw_calls(&self) -> &[DrawCall] {
        &self.draw_calls
    }

    /// Current modulate color.
    pub fn color(&self) -> Color {
        self.color
    }

    fn bound_state(&mut self) -> Result<&mut TextureState, OrteliusError> {
        let bound = self
            .bound
            .ok_or_else(|| OrteliusError::graphics("no texture bound"))?;
        self.textures
            .get_mut(&bound)
            .ok_or_else(|| OrteliusError::graphics("bound texture was deleted"))
    }
}

impl GraphicsContext for TestContext {
    fn gen_texture(&mut self) -> Result<TextureHandle, OrteliusError> {
        self.next_handle += 1;
        let handle = TextureHandle::from_raw(self.next_handle);
        self.textures.insert(handle, TextureState::default());
        Ok(handle)
    }

    fn delete_texture(&mut self, handle: TextureHandle) -> Result<(), OrteliusError> {
        if self.textures.remove(&handle).is_none() {
            return Err(OrteliusError::graphics(format!(
                "deleting unknown texture {handle:?}"
            )));
        }

        if self.bound == Some(handle) {
            self.bound = None;
        }

        Ok(())
    }

    fn bind_texture(&mut self, handle: Option<TextureHandle>) -> Result<(), OrteliusError> {
        if let Some(handle) = handle {
            if !self.textures.contains_key(&handle) {
                return Err(OrteliusError::graphics(format!(
                    "binding unknown texture {handle:?}"
                )));
            }
        }

        self.bound = handle;
        Ok(())
    }

    fn set_sampler_parameters(
        &mut self,
        parameters: SamplerParameters,
    ) -> Result<(), OrteliusError> {
        self.bound_state()?.sampler = Some(parameters);
        Ok(())
    }

    fn upload_image(&mut self, image: &DecodedImage) -> Result<(), OrteliusError> {
        if self.fail_on_upload {
            return Err(OrteliusError::graphics("upload failed"));
        }

        let state = self.bound_state()?;
        state.size = Some((image.width(), image.height()));
        self.upload_count += 1;
        Ok(())
    }

    fn texture_size(&mut self, handle: TextureHandle) -> Result<(u32, u32), OrteliusError> {
        self.textures
            .get(&handle)
            .ok_or_else(|| OrteliusError::graphics(format!("unknown texture {handle:?}")))?
            .size
            .ok_or_else(|| OrteliusError::graphics("texture has no image data"))
    }

    fn enable(&mut self, capability: Capability) -> Result<(), OrteliusError> {
        match capability {
            Capability::Texture2d => self.texturing_enabled = true,
            Capability::Blend => self.blending_enabled = true,
        }
        Ok(())
    }

    fn disable(&mut self, capability: Capability) -> Result<(), OrteliusError> {
        match capability {
            Capability::Texture2d => self.texturing_enabled = false,
            Capability::Blend => self.blending_enabled = false,
        }
        Ok(())
    }

    fn set_blend_func(
        &mut self,
        src: BlendFactor,
        dst: BlendFactor,
    ) -> Result<(), OrteliusError> {
        self.blend_func = Some((src, dst));
        Ok(())
    }

    fn set_color(&mut self, color: Color) -> Result<(), OrteliusError> {
        self.color = color;
        Ok(())
    }

    fn draw_triangle_fan(&mut self, vertices: &[TexturedVertex]) -> Result<(), OrteliusError> {
        if self.fail_on_draw {
            return Err(OrteliusError::graphics("draw failed"));
        }

        if vertices.len() < 3 {
            return Err(OrteliusError::graphics(
                "triangle fan requires at least 3 vertices",
            ));
        }

        if self.texturing_enabled && self.bound.is_none() {
            return Err(OrteliusError::graphics(
                "texturing enabled but no texture bound",
            ));
        }

        self.draw_calls.push(DrawCall {
            vertices: vertices.to_vec(),
            texture: self.bound,
            color: self.color,
            blend_func: self.blend_func,
            blending_enabled: self.blending_enabled,
            texturing_enabled: self.texturing_enabled,
        });

        Ok(())
    }
}
