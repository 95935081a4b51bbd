//! This example draws a few generated raster features into the recording test
//! context and prints what would be sent to a real graphics backend.

use image::{DynamicImage, ImageOutputFormat, Rgba, RgbaImage};
use ortelius::render::testing::TestContext;
use ortelius::{
    BoundingBox, FeatureId, Point2d, RasterFeature, RasterRenderer, RasterStyle, Size, StyleId,
    Viewport,
};

fn main() {
    env_logger::init();

    let mut context = TestContext::new();
    let mut renderer = RasterRenderer::new();

    let viewport = Viewport::new(Point2d::new(0.0, 0.0), 2.0).with_size(Size::new(800.0, 600.0));
    let style = RasterStyle::new(StyleId::new(1)).with_opacity(0.8);

    let features = vec![
        RasterFeature::new(
            FeatureId::new(1),
            BoundingBox::new(-400.0, -300.0, 0.0, 0.0),
            checkerboard(64, Rgba([200, 40, 40, 255])),
        ),
        RasterFeature::new(
            FeatureId::new(2),
            BoundingBox::new(0.0, 0.0, 400.0, 300.0),
            checkerboard(64, Rgba([40, 40, 200, 255])),
        ),
        // Not an image; gets skipped with a warning.
        RasterFeature::new(
            FeatureId::new(3),
            BoundingBox::new(-100.0, -100.0, 100.0, 100.0),
            &b"broken payload"[..],
        ),
    ];

    for frame in 0..2 {
        let drawn = renderer.draw_features(&mut context, &viewport, &style, &features);
        println!("frame {frame}: drew {drawn} of {} features", features.len());
    }

    println!(
        "texture uploads: {} (cached across frames)",
        context.upload_count()
    );
    for call in context.draw_calls() {
        println!(
            "  quad {:?} -> {:?} with texture {:?}",
            call.vertices[0].position,
            call.vertices[2].position,
            call.texture
        );
    }
}

fn checkerboard(size: u32, color: Rgba<u8>) -> Vec<u8> {
    let mut image = RgbaImage::from_pixel(size, size, Rgba([255, 255, 255, 255]));
    for (x, y, pixel) in image.enumerate_pixels_mut() {
        if (x / 8 + y / 8) % 2 == 0 {
            *pixel = color;
        }
    }

    let mut bytes = Vec::new();
    DynamicImage::ImageRgba8(image)
        .write_to(&mut std::io::Cursor::new(&mut bytes), ImageOutputFormat::Png)
        .expect("png encoding succeeds");
    bytes
}
