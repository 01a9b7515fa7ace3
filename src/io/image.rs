//! PNG artwork ingestion into pixel grids

use crate::canvas::{Cell, PixelGrid, PixelMap, Rgba};
use crate::io::error::{ForgeError, Result, invalid_artwork};
use std::path::Path;

/// Load a PNG file into a palette-labelled pixel grid
///
/// Fully transparent pixels (alpha 0) are treated as unoccupied cells;
/// every other pixel becomes an occupied cell with its RGBA color. The
/// image must be square and non-empty, and its dimension becomes the
/// canvas size.
///
/// # Errors
///
/// Returns an error if:
/// - The file at the given path cannot be opened or decoded
/// - The image is not square
/// - The image has zero dimensions
pub fn load_artwork<P: AsRef<Path>>(path: P) -> Result<PixelGrid> {
    let path_buf = path.as_ref().to_path_buf();
    let img = image::open(&path_buf).map_err(|e| ForgeError::ImageLoad {
        path: path_buf,
        source: e,
    })?;
    let rgba_img = img.to_rgba8();

    let (width, height) = (rgba_img.width() as usize, rgba_img.height() as usize);
    if width == 0 || height == 0 {
        return Err(invalid_artwork(&"image has zero dimensions"));
    }
    if width != height {
        return Err(invalid_artwork(&format!(
            "image must be square ({width}x{height})"
        )));
    }

    let mut pixels = PixelMap::new();
    for (x, y, pixel) in rgba_img.enumerate_pixels() {
        let [r, g, b, a] = pixel.0;
        if a > 0 {
            pixels.insert(Cell::new(x, y), Rgba::new(r, g, b, a));
        }
    }

    Ok(PixelGrid::from_pixel_map(&pixels, width))
}
