//! Image I/O

use crate::error::{Error, Result};
use image::{ImageBuffer, ImageFormat, Rgba};
use regex::Regex;
use std::fs;
use std::sync::OnceLock;

/// Stores 8-bit RGBA image data.
#[derive(Debug)]
pub struct RgbaImage8 {
    /// The pixels in row-major order.
    pub pixels: Vec<[u8; 4]>,

    /// Width of the image in pixels.
    pub width: usize,

    /// Height of the image in pixels.
    pub height: usize,
}

impl RgbaImage8 {
    /// Creates a new `RgbaImage8` with every pixel set to a fill value.
    ///
    /// * `width`  - Width of image.
    /// * `height` - Height of image.
    /// * `fill`   - The RGBA fill value.
    pub fn new(width: usize, height: usize, fill: [u8; 4]) -> Self {
        Self {
            pixels: vec![fill; width * height],
            width,
            height,
        }
    }

    /// Creates a new `RgbaImage8` from pixel data.
    ///
    /// * `pixels` - RGBA pixel data.
    /// * `width`  - Width of image.
    /// * `height` - Height of image.
    pub fn from_pixels(pixels: Vec<[u8; 4]>, width: usize, height: usize) -> Self {
        assert_eq!(width * height, pixels.len());
        Self {
            pixels,
            width,
            height,
        }
    }

    /// Returns the pixel at the given coordinates.
    ///
    /// * `x` - The pixel x-coordinate.
    /// * `y` - The pixel y-coordinate.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> [u8; 4] {
        self.pixels[y * self.width + x]
    }

    /// Replaces the pixel at the given coordinates.
    ///
    /// * `x`     - The pixel x-coordinate.
    /// * `y`     - The pixel y-coordinate.
    /// * `pixel` - The RGBA value to store.
    #[inline]
    pub fn put(&mut self, x: usize, y: usize, pixel: [u8; 4]) {
        self.pixels[y * self.width + x] = pixel;
    }
}

/// Read an 8-bit image and promote it to RGBA. Sources without an alpha
/// channel decode with alpha 255.
///
/// * `path` - Input file path.
pub fn read_image(path: &str) -> Result<RgbaImage8> {
    let img = image::open(path)
        .map_err(|source| Error::Decode {
            path: path.to_string(),
            source,
        })?
        .into_rgba8();

    let width = img.width() as usize;
    let height = img.height() as usize;
    let pixels: Vec<[u8; 4]> = img.pixels().map(|rgba| rgba.0).collect();

    info!("Read image {path} ({width} x {height})");

    Ok(RgbaImage8::from_pixels(pixels, width, height))
}

/// Write the image to the given path in a lossless 8-bit format chosen from
/// the file extension. The encode goes to a temporary sibling path that is
/// renamed into place on success, so a failed write leaves no partial file at
/// `path`.
///
/// * `path`  - Output file path.
/// * `image` - The image to write.
pub fn write_image(path: &str, image: &RgbaImage8) -> Result<()> {
    let format = match get_extension_from_filename(path) {
        Some(".png") => ImageFormat::Png,
        Some(".tga") => ImageFormat::Tga,
        Some(_) | None => return Err(Error::UnsupportedFormat(path.to_string())),
    };

    info!(
        "Writing image {path} with resolution {}x{}",
        image.width, image.height
    );

    let imgbuf: ImageBuffer<Rgba<u8>, Vec<u8>> =
        ImageBuffer::from_fn(image.width as u32, image.height as u32, |x, y| {
            Rgba(image.get(x as usize, y as usize))
        });

    let tmp_path = format!("{path}.tmp");
    if let Err(source) = imgbuf.save_with_format(&tmp_path, format) {
        let _ = fs::remove_file(&tmp_path);
        return Err(Error::Encode {
            path: path.to_string(),
            source,
        });
    }

    fs::rename(&tmp_path, path).map_err(|source| Error::Io {
        path: path.to_string(),
        source,
    })
}

/// Returns regular expression for extracting the file extension. This will match the last occurrence of a period
/// followed by no periods or slashes (could be tightened to exclude other illegal characters but the code that reads
/// files will bomb anyway).
fn regex_file_ext() -> &'static Regex {
    static DATA: OnceLock<Regex> = OnceLock::new();
    DATA.get_or_init(|| Regex::new(r"(\.[^./\\]+)$").unwrap())
}

/// Retrieve the extension from a file path.
///
/// * `path` - The file path.
fn get_extension_from_filename(path: &str) -> Option<&str> {
    regex_file_ext()
        .captures(path)
        .map(|c| c.get(1).map_or("", |m| m.as_str()))
}
