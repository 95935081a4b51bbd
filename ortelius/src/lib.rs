//! Ortelius is a backend-agnostic rendering pipeline for raster map
//! features: georeferenced images that are decoded, uploaded into a graphics
//! context once, and then drawn as textured quads every frame.
//!
//! # Quick start
//!
//! ```no_run
//! use ortelius::render::testing::TestContext;
//! use ortelius::{
//!     BoundingBox, FeatureId, Point2d, RasterFeature, RasterRenderer, RasterStyle, Size,
//!     StyleId, Viewport,
//! };
//!
//! let mut context = TestContext::new();
//! let mut renderer = RasterRenderer::new();
//!
//! let viewport = Viewport::new(Point2d::new(0.0, 0.0), 10.0).with_size(Size::new(800.0, 600.0));
//! let style = RasterStyle::new(StyleId::new(1));
//! let features = vec![RasterFeature::new(
//!     FeatureId::new(1),
//!     BoundingBox::new(-1000.0, -1000.0, 1000.0, 1000.0),
//!     std::fs::read("overlay.png").expect("image file exists"),
//! )];
//!
//! let drawn = renderer.draw_features(&mut context, &viewport, &style, &features);
//! println!("drawn {drawn} of {} features", features.len());
//! ```
//!
//! In a real application `TestContext` is replaced with an implementation of
//! [`render::GraphicsContext`] backed by the host graphics environment.
//!
//! # Main components
//!
//! * [`RasterFeature`] - a geographic entity: encoded image bytes plus the
//!   world-space [`BoundingBox`] they cover.
//! * [`RasterStyle`] - how a feature is drawn (tint, opacity). Style
//!   *identity* keys the texture cache, so keep one style instance per
//!   visual configuration.
//! * [`Viewport`] - the world-to-screen transform of the map view.
//! * [`RasterRenderer`] - ties the above together: caches one context
//!   texture per (feature, style) pair and issues one alpha-blended quad
//!   draw per feature per frame. A feature that fails to decode or draw is
//!   logged and skipped; the frame never fails as a whole.
//!
//! The lower-level pieces (texture loading, the quad draw sequence, the
//! cache) live in the [`render`] module and can be used directly when the
//! orchestration of [`RasterRenderer`] does not fit.

#![warn(clippy::unwrap_used)]
#![warn(missing_docs)]

mod bounding_box;
mod color;
pub mod decoded_image;
pub mod error;
mod feature;
pub mod render;
mod renderer;
mod screen_rect;
mod size;
mod style;
mod view;

pub use bounding_box::BoundingBox;
pub use color::Color;
pub use decoded_image::DecodedImage;
pub use feature::{FeatureId, RasterFeature};
pub use renderer::RasterRenderer;
pub use screen_rect::ScreenRect;
pub use size::Size;
pub use style::{RasterStyle, StyleId};
pub use view::Viewport;

/// 2d point in cartesian coordinates.
pub type Point2d = nalgebra::Point2<f64>;
