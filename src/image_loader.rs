use crate::error::{AppError, Result};
use crate::scaling;
use image::imageops::FilterType;
use image::{ImageReader, RgbImage};
use slint::{Image, Rgb8Pixel, SharedPixelBuffer};
use std::path::Path;

/// Decoded RGB8 pixels ready to be scaled or handed to Slint.
#[derive(Clone)]
pub struct DecodedImage {
    pub data: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

/// Decodes an image file into RGB8. Blocks; call it from a worker thread.
pub fn load_image_blocking(path: &Path) -> Result<DecodedImage> {
    let image = ImageReader::open(path)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(|e| AppError::ImageLoad(format!("{}: {}", path.display(), e)))?
        .decode()?;
    let rgb = image.to_rgb8();
    let (width, height) = rgb.dimensions();

    Ok(DecodedImage {
        data: rgb.into_raw(),
        width,
        height,
    })
}

/// Scales the image down to fit `area` (physical pixels), preserving aspect ratio.
///
/// Images that already fit are returned as-is without resampling.
pub fn scale_to_area(image: DecodedImage, area: (u32, u32)) -> Result<DecodedImage> {
    let (width, height) = scaling::fit_within((image.width, image.height), area);
    if (width, height) == (image.width, image.height) {
        return Ok(image);
    }

    let buffer = RgbImage::from_raw(image.width, image.height, image.data).ok_or_else(|| {
        AppError::ImageLoad("pixel buffer does not match image dimensions".to_string())
    })?;
    let resized = image::imageops::resize(&buffer, width, height, FilterType::Triangle);

    Ok(DecodedImage {
        data: resized.into_raw(),
        width,
        height,
    })
}

/// Wraps RGB8 pixel data in a Slint image.
pub fn create_slint_image(image: &DecodedImage) -> Image {
    let buffer =
        SharedPixelBuffer::<Rgb8Pixel>::clone_from_slice(&image.data, image.width, image.height);
    Image::from_rgb8(buffer)
}
