//! Conversion between [`GreyImage`] and raster files.

use std::path::Path;

use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};

use crate::error::{CodecError, CodecResult};
use crate::image::{GreyImage, Sample};

/// Luma weights applied to red, green and blue
pub const LUMA_WEIGHTS: [f64; 3] = [0.30, 0.59, 0.11];

/// Collapse one colour to a grey level; alpha is ignored.
pub fn luma(red: u8, green: u8, blue: u8) -> Sample {
    let [wr, wg, wb] = LUMA_WEIGHTS;
    let grey = wr * f64::from(red) + wg * f64::from(green) + wb * f64::from(blue);
    grey.round().clamp(0.0, 255.0) as Sample
}

/// Read an image file and convert it to greyscale.
pub fn decode(path: impl AsRef<Path>) -> CodecResult<GreyImage> {
    let path = path.as_ref();
    let decoded = image::open(path).map_err(|source| CodecError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    from_dynamic(&decoded)
}

/// Decode an encoded image held in memory, e.g. a file dropped on the window.
pub fn decode_from_memory(bytes: &[u8]) -> CodecResult<GreyImage> {
    let decoded = image::load_from_memory(bytes).map_err(CodecError::Memory)?;
    from_dynamic(&decoded)
}

/// Convert any decoded raster to greyscale using [`luma`].
pub fn from_dynamic(decoded: &DynamicImage) -> CodecResult<GreyImage> {
    let rgba = decoded.to_rgba8();
    let (width, height) = rgba.dimensions();
    log::info!("loaded image height(rows)= {}  width(cols)= {}", height, width);

    let data = rgba
        .pixels()
        .map(|Rgba([r, g, b, _alpha])| luma(*r, *g, *b))
        .collect();
    Ok(GreyImage::new(height as usize, width as usize, data)?)
}

/// Expand a greyscale image to opaque RGBA with R = G = B = sample.
pub fn to_rgba(image: &GreyImage) -> RgbaImage {
    let width = image.cols() as u32;
    let height = image.rows() as u32;
    RgbaImage::from_fn(width, height, |x, y| {
        let grey = image[(y as usize, x as usize)];
        Rgba([grey, grey, grey, u8::MAX])
    })
}

/// Write the image as a PNG, whatever extension `path` has.
pub fn encode(image: &GreyImage, path: impl AsRef<Path>) -> CodecResult<()> {
    let path = path.as_ref();
    to_rgba(image)
        .save_with_format(path, ImageFormat::Png)
        .map_err(|source| CodecError::Encode {
            path: path.to_path_buf(),
            source,
        })?;
    log::info!(
        "saved {}x{} image to {}",
        image.rows(),
        image.cols(),
        path.display()
    );
    Ok(())
}
