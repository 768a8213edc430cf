//! Image Transform
//!
//! Flat-color silhouettes and base64 PNG payloads.
//!
//! A silhouette keeps only the alpha shape of the source: every pixel
//! becomes [`BRAND_COLOR`] with the source pixel's alpha. Sources without
//! an alpha channel produce a fully opaque rectangle.

use std::borrow::Cow;
use std::io::Cursor;

use image::{ColorType, DynamicImage, GenericImageView, ImageFormat, Rgba, RgbaImage};

use crate::encoding::to_base64;

/// `#07679a`
pub const BRAND_COLOR: [u8; 3] = [0x07, 0x67, 0x9a];

#[derive(Debug, thiserror::Error)]
pub enum ImageError {
    #[error("Failed to decode image: {0}")]
    Decode(#[source] image::ImageError),

    #[error("Failed to encode image: {0}")]
    Encode(#[source] image::ImageError),
}

/// Input accepted by [`encode_base64`]
#[derive(Debug, Clone, Copy)]
pub enum ImageInput<'a> {
    /// Encoded image file bytes (PNG, JPEG, ...)
    Encoded(&'a [u8]),
    /// Already decoded pixels
    Decoded(&'a DynamicImage),
}

impl<'a> From<&'a [u8]> for ImageInput<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        ImageInput::Encoded(bytes)
    }
}

impl<'a> From<&'a Vec<u8>> for ImageInput<'a> {
    fn from(bytes: &'a Vec<u8>) -> Self {
        ImageInput::Encoded(bytes.as_slice())
    }
}

impl<'a> From<&'a DynamicImage> for ImageInput<'a> {
    fn from(image: &'a DynamicImage) -> Self {
        ImageInput::Decoded(image)
    }
}

/// Decode `bytes` and return its brand-colored silhouette as base64 PNG
pub fn to_silhouette(bytes: &[u8]) -> Result<String, ImageError> {
    let source = decode(bytes)?;
    let silhouette = DynamicImage::ImageRgba8(silhouette_of(&source));
    encode_base64(ImageInput::Decoded(&silhouette))
}

/// Re-encode any image as PNG and return the base64 text
pub fn encode_base64<'a>(input: impl Into<ImageInput<'a>>) -> Result<String, ImageError> {
    let decoded;
    let image = match input.into() {
        ImageInput::Encoded(bytes) => {
            decoded = decode(bytes)?;
            &decoded
        }
        ImageInput::Decoded(image) => image,
    };

    // The PNG encoder has no float pixel formats
    let image: Cow<'_, DynamicImage> = match image.color() {
        ColorType::Rgb32F | ColorType::Rgba32F => {
            Cow::Owned(DynamicImage::ImageRgba8(image.to_rgba8()))
        }
        _ => Cow::Borrowed(image),
    };

    let mut buf = Cursor::new(Vec::new());
    image
        .write_to(&mut buf, ImageFormat::Png)
        .map_err(ImageError::Encode)?;
    Ok(to_base64(buf.get_ref()))
}

/// Same-size RGBA image filled with [`BRAND_COLOR`] through the source alpha mask
///
/// Palette images carrying a `tRNS` chunk decode with an alpha channel and
/// are masked like any RGBA source.
pub fn silhouette_of(source: &DynamicImage) -> RgbaImage {
    let (width, height) = source.dimensions();
    let [r, g, b] = BRAND_COLOR;

    if !source.color().has_alpha() {
        return RgbaImage::from_pixel(width, height, Rgba([r, g, b, u8::MAX]));
    }

    let mask = source.to_rgba8();
    RgbaImage::from_fn(width, height, |x, y| {
        let alpha = mask.get_pixel(x, y)[3];
        Rgba([r, g, b, alpha])
    })
}

fn decode(bytes: &[u8]) -> Result<DynamicImage, ImageError> {
    image::load_from_memory(bytes).map_err(ImageError::Decode)
}
