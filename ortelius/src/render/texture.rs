//! Texture loading and the per-feature texture cache.

use ahash::{HashMap, HashMapExt};

use crate::decoded_image::DecodedImage;
use crate::error::OrteliusError;
use crate::feature::FeatureId;
use crate::render::context::{GraphicsContext, SamplerParameters, TextureHandle};
use crate::style::StyleId;

/// Decodes encoded image bytes and uploads the pixels into a context texture.
///
/// On success the returned texture has linear min/mag filtering and
/// clamp-to-edge wrapping on both axes, and no texture is left bound in the
/// context. A decode failure allocates nothing; a context failure after
/// allocation deletes the half-initialized texture before returning.
pub fn load_texture(
    context: &mut dyn GraphicsContext,
    image_bytes: &[u8],
) -> Result<TextureHandle, OrteliusError> {
    let image = DecodedImage::decode(image_bytes)?;
    upload_texture(context, &image)
}

/// Uploads an already decoded image into a context texture.
///
/// Same post-conditions as [`load_texture`].
pub fn upload_texture(
    context: &mut dyn GraphicsContext,
    image: &DecodedImage,
) -> Result<TextureHandle, OrteliusError> {
    let handle = context.gen_texture()?;

    if let Err(err) = upload_steps(context, handle, image) {
        if let Err(delete_err) = context.delete_texture(handle) {
            log::warn!("Failed to delete texture after failed upload: {delete_err}");
        }
        return Err(err);
    }

    Ok(handle)
}

fn upload_steps(
    context: &mut dyn GraphicsContext,
    handle: TextureHandle,
    image: &DecodedImage,
) -> Result<(), OrteliusError> {
    context.bind_texture(Some(handle))?;
    context.set_sampler_parameters(SamplerParameters::default())?;
    context.upload_image(image)?;
    context.bind_texture(None)
}

/// Cache of context textures keyed by (feature, style) identity.
///
/// The store owns the handles it hands out: entries stay alive until
/// explicitly released, and releasing deletes the texture in the context the
/// entry was created with. Dropping the store does not free context memory,
/// so retire features and styles through the release methods.
#[derive(Debug, Default)]
pub struct TextureStore {
    textures: HashMap<(FeatureId, StyleId), TextureHandle>,
}

impl TextureStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            textures: HashMap::new(),
        }
    }

    /// Returns the cached handle for the (feature, style) pair, invoking
    /// `load` to create it on the first request.
    ///
    /// A failed load stores nothing, so the next call retries.
    pub fn get_or_create(
        &mut self,
        feature_id: FeatureId,
        style_id: StyleId,
        load: impl FnOnce() -> Result<TextureHandle, OrteliusError>,
    ) -> Result<TextureHandle, OrteliusError> {
        if let Some(handle) = self.textures.get(&(feature_id, style_id)) {
            return Ok(*handle);
        }

        let handle = load()?;
        self.textures.insert((feature_id, style_id), handle);
        Ok(handle)
    }

    /// Returns the cached handle for the pair, if any.
    pub fn get(&self, feature_id: FeatureId, style_id: StyleId) -> Option<TextureHandle> {
        self.textures.get(&(feature_id, style_id)).copied()
    }

    /// Number of cached textures.
    pub fn len(&self) -> usize {
        self.textures.len()
    }

    /// Returns true if the store holds no textures.
    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }

    /// Releases the texture of a single (feature, style) pair.
    pub fn release(
        &mut self,
        context: &mut dyn GraphicsContext,
        feature_id: FeatureId,
        style_id: StyleId,
    ) {
        if let Some(handle) = self.textures.remove(&(feature_id, style_id)) {
            delete_logged(context, handle);
        }
    }

    /// Releases all textures of a retired feature.
    pub fn release_feature(&mut self, context: &mut dyn GraphicsContext, feature_id: FeatureId) {
        self.release_matching(context, |(feature, _)| *feature == feature_id);
    }

    /// Releases all textures created for a retired style.
    pub fn release_style(&mut self, context: &mut dyn GraphicsContext, style_id: StyleId) {
        self.release_matching(context, |(_, style)| *style == style_id);
    }

    /// Releases every texture in the store.
    pub fn clear(&mut self, context: &mut dyn GraphicsContext) {
        self.release_matching(context, |_| true);
    }

    fn release_matching(
        &mut self,
        context: &mut dyn GraphicsContext,
        mut matches: impl FnMut(&(FeatureId, StyleId)) -> bool,
    ) {
        let keys: Vec<_> = self
            .textures
            .keys()
            .filter(|key| matches(key))
            .copied()
            .collect();

        for key in keys {
            if let Some(handle) = self.textures.remove(&key) {
                delete_logged(context, handle);
            }
        }
    }
}

fn delete_logged(context: &mut dyn GraphicsContext, handle: TextureHandle) {
    if let Err(err) = context.delete_texture(handle) {
        log::warn!("Failed to delete texture {handle:?}: {err}");
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::render::testing::TestContext;

    fn ids(feature: u64, style: u64) -> (FeatureId, StyleId) {
        (FeatureId::new(feature), StyleId::new(style))
    }

    #[test]
    fn load_texture_rejects_garbage_without_allocating() {
        let mut context = TestContext::new();
        let result = load_texture(&mut context, b"not an image at all");

        assert_matches!(result, Err(OrteliusError::ImageDecode(_)));
        assert_eq!(context.alive_textures().len(), 0);
        assert_eq!(context.upload_count(), 0);
    }

    #[test]
    fn load_texture_sets_sampler_and_unbinds() {
        let mut context = TestContext::new();
        let image = DecodedImage::from_raw(vec![255; 16], 2, 2).expect("valid raw image");
        let handle = upload_texture(&mut context, &image).expect("upload succeeds");

        assert_eq!(context.bound_texture(), None);
        assert_eq!(
            context.sampler_parameters(handle),
            Some(SamplerParameters::default())
        );
        assert_eq!(context.texture_size(handle).expect("texture exists"), (2, 2));
    }

    #[test]
    fn failed_upload_deletes_generated_texture() {
        let mut context = TestContext::new();
        context.fail_on_upload(true);

        let image = DecodedImage::from_raw(vec![255; 16], 2, 2).expect("valid raw image");
        let result = upload_texture(&mut context, &image);

        assert_matches!(result, Err(OrteliusError::Graphics(_)));
        assert_eq!(context.alive_textures().len(), 0);
        assert_eq!(context.bound_texture(), None);
    }

    #[test]
    fn get_or_create_invokes_loader_once() {
        let mut context = TestContext::new();
        let mut store = TextureStore::new();
        let (feature, style) = ids(1, 1);

        let mut loads = 0;
        let image = DecodedImage::from_raw(vec![255; 4], 1, 1).expect("valid raw image");

        let first = store
            .get_or_create(feature, style, || {
                loads += 1;
                upload_texture(&mut context, &image)
            })
            .expect("load succeeds");
        let second = store
            .get_or_create(feature, style, || {
                loads += 1;
                upload_texture(&mut context, &image)
            })
            .expect("cached");

        assert_eq!(first, second);
        assert_eq!(loads, 1);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn failed_load_is_not_cached() {
        let mut store = TextureStore::new();
        let (feature, style) = ids(1, 1);

        let result = store.get_or_create(feature, style, || {
            Err(OrteliusError::graphics("boom"))
        });
        assert_matches!(result, Err(OrteliusError::Graphics(_)));
        assert!(store.is_empty());

        let handle = store
            .get_or_create(feature, style, || Ok(TextureHandle::from_raw(7)))
            .expect("retried load succeeds");
        assert_eq!(handle, TextureHandle::from_raw(7));
    }

    #[test]
    fn release_deletes_context_textures() {
        let mut context = TestContext::new();
        let mut store = TextureStore::new();
        let image = DecodedImage::from_raw(vec![255; 4], 1, 1).expect("valid raw image");

        for (feature, style) in [ids(1, 1), ids(1, 2), ids(2, 1)] {
            store
                .get_or_create(feature, style, || upload_texture(&mut context, &image))
                .expect("upload succeeds");
        }
        assert_eq!(context.alive_textures().len(), 3);

        store.release_feature(&mut context, FeatureId::new(1));
        assert_eq!(store.len(), 1);
        assert_eq!(context.alive_textures().len(), 1);

        store.release_style(&mut context, StyleId::new(1));
        assert!(store.is_empty());
        assert_eq!(context.alive_textures().len(), 0);
    }

    #[test]
    fn clear_releases_everything() {
        let mut context = TestContext::new();
        let mut store = TextureStore::new();
        let image = DecodedImage::from_raw(vec![255; 4], 1, 1).expect("valid raw image");

        for (feature, style) in [ids(1, 1), ids(2, 2)] {
            store
                .get_or_create(feature, style, || upload_texture(&mut context, &image))
                .expect("upload succeeds");
        }

        store.clear(&mut context);
        assert!(store.is_empty());
        assert_eq!(context.alive_textures().len(), 0);
    }
}
