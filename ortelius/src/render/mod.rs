//! Rendering pipeline for raster features.
//!
//! The pipeline is split into four small parts:
//!
//! * [`TextureStore`] caches uploaded textures per (feature, style) pair;
//! * [`load_texture`] decodes image bytes and uploads them into a context;
//! * [`Viewport::project_bbox`](crate::Viewport::project_bbox) maps world
//!   bounding boxes to pixel rectangles;
//! * [`draw_quad`] issues the textured, alpha-blended draw call.
//!
//! All of them work through the [`GraphicsContext`] trait, so the pipeline
//! can run against any fixed-function-style backend, including the recording
//! [`TestContext`](testing::TestContext) used by the test suite.

pub mod context;
pub mod texture;

#[cfg(any(test, feature = "_tests"))]
pub mod testing;

pub use context::{
    BlendFactor, Capability, GraphicsContext, SamplerParameters, TextureFilter, TextureHandle,
    TextureWrap, TexturedVertex,
};
pub use texture::{load_texture, upload_texture, TextureStore};

use crate::error::OrteliusError;
use crate::screen_rect::ScreenRect;
use crate::{Color, Point2d};

/// Texture coordinates of the quad fan, matching the vertex order of
/// [`fan_vertices`].
const QUAD_TEX_COORDS: [[f32; 2]; 4] = [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]];

/// Builds the 4-vertex triangle fan covering the rectangle: bottom-left,
/// bottom-right, top-right, top-left.
pub fn fan_vertices(rect: ScreenRect) -> [TexturedVertex; 4] {
    let positions = [
        [rect.min_x, rect.min_y],
        [rect.max_x, rect.min_y],
        [rect.max_x, rect.max_y],
        [rect.min_x, rect.max_y],
    ];

    let mut vertices = [TexturedVertex {
        position: [0.0, 0.0],
        tex_coords: [0.0, 0.0],
    }; 4];
    for (index, vertex) in vertices.iter_mut().enumerate() {
        vertex.position = positions[index];
        vertex.tex_coords = QUAD_TEX_COORDS[index];
    }

    vertices
}

/// Draws the texture as an alpha-blended quad over the screen rectangle.
///
/// The texture colors are modulated by `tint`; pass [`Color::WHITE`] to draw
/// the texture unchanged. The context is left with no texture bound and
/// texturing/blending disabled on every exit path, including errors.
pub fn draw_quad(
    context: &mut dyn GraphicsContext,
    handle: TextureHandle,
    rect: ScreenRect,
    tint: Color,
) -> Result<(), OrteliusError> {
    context.enable(Capability::Texture2d)?;

    let drawn = draw_steps(context, handle, rect, tint);
    let restored = restore_state(context);

    match drawn {
        Err(err) => {
            if let Err(restore_err) = restored {
                log::warn!("Failed to restore graphics state after draw error: {restore_err}");
            }
            Err(err)
        }
        Ok(()) => restored,
    }
}

/// Draws the texture as a screen-space sprite centered on `position`.
///
/// The quad is sized by the texture's own pixel dimensions, and the center is
/// rounded to a whole pixel first so sprites do not land on half-pixel
/// boundaries.
pub fn draw_quad_centered(
    context: &mut dyn GraphicsContext,
    handle: TextureHandle,
    position: Point2d,
    tint: Color,
) -> Result<(), OrteliusError> {
    let (width, height) = context.texture_size(handle)?;

    let x = position.x.round() as f32;
    let y = position.y.round() as f32;
    let half_width = (width / 2) as f32;
    let half_height = (height / 2) as f32;

    let rect = ScreenRect::new(x - half_width, y - half_height, x + half_width, y + half_height);
    draw_quad(context, handle, rect, tint)
}

fn draw_steps(
    context: &mut dyn GraphicsContext,
    handle: TextureHandle,
    rect: ScreenRect,
    tint: Color,
) -> Result<(), OrteliusError> {
    context.enable(Capability::Blend)?;
    context.set_blend_func(BlendFactor::SrcAlpha, BlendFactor::OneMinusSrcAlpha)?;
    context.bind_texture(Some(handle))?;
    context.set_color(tint)?;
    context.draw_triangle_fan(&fan_vertices(rect))
}

fn restore_state(context: &mut dyn GraphicsContext) -> Result<(), OrteliusError> {
    context.bind_texture(None)?;
    context.disable(Capability::Blend)?;
    context.disable(Capability::Texture2d)
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::testing::TestContext;
    use super::*;
    use crate::decoded_image::DecodedImage;

    fn upload_test_texture(context: &mut TestContext) -> TextureHandle {
        let image = DecodedImage::from_raw(vec![255; 4 * 6 * 4], 4, 6).expect("valid raw image");
        upload_texture(context, &image).expect("upload succeeds")
    }

    #[test]
    fn quad_fan_matches_texture_coordinates() {
        let mut context = TestContext::new();
        let handle = upload_test_texture(&mut context);

        let rect = ScreenRect::new(10.0, 20.0, 30.0, 40.0);
        draw_quad(&mut context, handle, rect, Color::WHITE).expect("draw succeeds");

        let calls = context.draw_calls();
        assert_eq!(calls.len(), 1);

        let call = &calls[0];
        assert_eq!(call.texture, Some(handle));
        assert_eq!(call.color, Color::WHITE);
        assert_eq!(call.blend_func, Some((BlendFactor::SrcAlpha, BlendFactor::OneMinusSrcAlpha)));
        assert!(call.blending_enabled);
        assert!(call.texturing_enabled);

        let positions: Vec<_> = call.vertices.iter().map(|v| v.position).collect();
        assert_eq!(
            positions,
            vec![[10.0, 20.0], [30.0, 20.0], [30.0, 40.0], [10.0, 40.0]]
        );
        let tex_coords: Vec<_> = call.vertices.iter().map(|v| v.tex_coords).collect();
        assert_eq!(
            tex_coords,
            vec![[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]]
        );
    }

    #[test]
    fn state_is_restored_after_successful_draw() {
        let mut context = TestContext::new();
        let handle = upload_test_texture(&mut context);

        draw_quad(
            &mut context,
            handle,
            ScreenRect::new(0.0, 0.0, 1.0, 1.0),
            Color::WHITE,
        )
        .expect("draw succeeds");

        assert_eq!(context.bound_texture(), None);
        assert!(!context.is_enabled(Capability::Texture2d));
        assert!(!context.is_enabled(Capability::Blend));
    }

    #[test]
    fn state_is_restored_after_failed_draw() {
        let mut context = TestContext::new();
        let handle = upload_test_texture(&mut context);
        context.fail_on_draw(true);

        let result = draw_quad(
            &mut context,
            handle,
            ScreenRect::new(0.0, 0.0, 1.0, 1.0),
            Color::WHITE,
        );

        assert_matches!(result, Err(OrteliusError::Graphics(_)));
        assert_eq!(context.bound_texture(), None);
        assert!(!context.is_enabled(Capability::Texture2d));
        assert!(!context.is_enabled(Capability::Blend));
    }

    #[test]
    fn centered_draw_uses_texture_dimensions() {
        let mut context = TestContext::new();
        let handle = upload_test_texture(&mut context);

        draw_quad_centered(&mut context, handle, Point2d::new(100.4, 49.6), Color::WHITE)
            .expect("draw succeeds");

        let calls = context.draw_calls();
        assert_eq!(calls.len(), 1);

        // Texture is 4x6, center rounds to (100, 50).
        let positions: Vec<_> = calls[0].vertices.iter().map(|v| v.position).collect();
        assert_eq!(
            positions,
            vec![[98.0, 47.0], [102.0, 47.0], [102.0, 53.0], [98.0, 53.0]]
        );
    }

    #[test]
    fn tint_is_passed_to_the_context() {
        let mut context = TestContext::new();
        let handle = upload_test_texture(&mut context);

        let tint = Color::rgba(255, 255, 255, 128);
        draw_quad(
            &mut context,
            handle,
            ScreenRect::new(0.0, 0.0, 1.0, 1.0),
            tint,
        )
        .expect("draw succeeds");

        assert_eq!(context.draw_calls()[0].color, tint);
    }
}
