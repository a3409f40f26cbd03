//! Pinhole camera model

use crate::common::Float;
use crate::error::{Error, Result};

/// Returns the focal length in pixel units of a pinhole camera,
/// `half_width / tan(fov / 2)`.
///
/// The angle is fed to the tangent exactly as given; no degree to radian
/// conversion is applied. Fails when `tan(fov / 2)` is zero or not finite
/// since that yields an infinite or undefined focal length.
///
/// * `half_width` - Half the image width in pixels.
/// * `fov`        - The angle of the field of view of the camera.
pub fn focal_length(half_width: Float, fov: Float) -> Result<Float> {
    let t = (fov * 0.5).tan();
    if !t.is_finite() || t == 0.0 {
        return Err(Error::Arithmetic(format!(
            "field of view {fov} yields tan(fov / 2) = {t}"
        )));
    }
    Ok(half_width / t)
}

/// Pinhole projection constants for an image of fixed resolution, computed
/// once per image.
pub struct Pinhole {
    /// The x-coordinate of the image center in pixels.
    pub cx: Float,

    /// The y-coordinate of the image center in pixels.
    pub cy: Float,

    /// Focal length in pixel units.
    pub f: Float,
}

impl Pinhole {
    /// Create a new `Pinhole` for an image resolution and field of view.
    ///
    /// * `width`  - Width of the image in pixels.
    /// * `height` - Height of the image in pixels.
    /// * `fov`    - The angle of the field of view of the camera.
    pub fn new(width: usize, height: usize, fov: Float) -> Result<Self> {
        let cx = width as Float / 2.0;
        let cy = height as Float / 2.0;
        let f = focal_length(cx, fov)?;
        Ok(Self { cx, cy, f })
    }

    /// Returns the factor that rescales the radial distance stored at a pixel
    /// to the distance along the optical axis, `f / sqrt(f^2 + dx^2 + dy^2)`
    /// with the offsets taken from the half-pixel-centered sample position.
    ///
    /// * `x` - The pixel x-coordinate.
    /// * `y` - The pixel y-coordinate.
    pub fn scale_factor(&self, x: usize, y: usize) -> Float {
        let dx = self.cx - x as Float - 0.5;
        let dy = self.cy - y as Float - 0.5;
        self.f / (self.f * self.f + dx * dx + dy * dy).sqrt()
    }
}
