//! Depth reprojection

use renderkit_core::camera::Pinhole;
use renderkit_core::common::{clamp, Float};
use renderkit_core::error::Result;
use renderkit_core::image_io::{read_image, write_image, RgbaImage8};

/// Sentinel value marking pixels with no geometry behind them. These are
/// skipped by the transform and keep the output fill value.
pub const BACKGROUND: [u8; 4] = [255, 255, 255, 255];

/// Initial value of every output pixel.
pub const FILL: [u8; 4] = [1, 1, 1, 1];

/// Converts a camera-centered depth image to a plane-perpendicular one.
///
/// A renderer's depth pass stores the Euclidean distance from the camera's
/// optical center to the surface seen through each pixel. Multiplying each
/// value by `f / sqrt(f^2 + dx^2 + dy^2)` keeps only the component along the
/// optical axis, which is the conventional meaning of depth.
///
/// Background pixels are never written, so they read back as [`FILL`]. All
/// other pixels get their first three channels rescaled with a truncating,
/// saturating cast and alpha set to 255.
///
/// * `src` - The camera-centered depth image.
/// * `fov` - The angle of the field of view of the camera.
pub fn reproject(src: &RgbaImage8, fov: Float) -> Result<RgbaImage8> {
    let camera = Pinhole::new(src.width, src.height, fov)?;
    let mut output = RgbaImage8::new(src.width, src.height, FILL);

    for y in 0..src.height {
        for x in 0..src.width {
            let pixel = src.get(x, y);
            if pixel == BACKGROUND {
                continue;
            }

            let s = camera.scale_factor(x, y);

            let mut scaled = [0, 0, 0, 255];
            for c in 0..3 {
                scaled[c] = clamp(pixel[c] as Float * s, 0.0, 255.0).floor() as u8;
            }
            output.put(x, y, scaled);
        }
    }

    Ok(output)
}

/// Transform a depth render to account for the radial distances a perspective
/// camera's depth pass records.
///
/// Reads the image at `image_path`, rescales every non-background pixel, and
/// writes the result to `output_path`. The input file is never mutated and
/// exactly one output file is produced.
///
/// * `image_path`  - The file path to the depth image to be processed.
/// * `output_path` - The file path to save the transformed image.
/// * `fov`         - The angle of the field of view of the camera.
pub fn transform_depth(image_path: &str, output_path: &str, fov: Float) -> Result<()> {
    let src = read_image(image_path)?;
    let output = reproject(&src, fov)?;
    write_image(output_path, &output)?;

    info!("Transformed depth image {image_path} -> {output_path} (fov {fov})");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use renderkit_core::error::Error;

    // Small angle, so tan(fov / 2) is positive and the focal length is large
    // relative to the test images. Keeps every scale factor in (0, 1].
    const FOV: Float = 0.1;

    fn uniform_image(width: usize, height: usize, value: u8) -> RgbaImage8 {
        RgbaImage8::new(width, height, [value, value, value, 255])
    }

    #[test]
    fn background_pixels_keep_fill_value() {
        let mut src = uniform_image(4, 4, 200);
        src.put(0, 0, BACKGROUND);

        let output = reproject(&src, FOV).unwrap();
        assert_eq!(output.get(0, 0), FILL);
    }

    #[test]
    fn non_background_pixels_match_formula() {
        let mut src = uniform_image(4, 4, 200);
        src.put(0, 0, BACKGROUND);

        let camera = Pinhole::new(4, 4, FOV).unwrap();
        let output = reproject(&src, FOV).unwrap();

        for y in 0..4 {
            for x in 0..4 {
                if (x, y) == (0, 0) {
                    continue;
                }
                let expected = (200.0 * camera.scale_factor(x, y)).floor() as u8;
                assert_eq!(output.get(x, y), [expected, expected, expected, 255]);
            }
        }
    }

    #[test]
    fn exact_center_pixel_is_unchanged() {
        // 5x5 image: pixel (2, 2) sits exactly on the optical axis.
        let src = uniform_image(5, 5, 100);
        let output = reproject(&src, FOV).unwrap();
        assert_eq!(output.get(2, 2), [100, 100, 100, 255]);
    }

    #[test]
    fn output_decreases_with_radial_distance() {
        let src = uniform_image(9, 9, 250);
        let output = reproject(&src, 1.0).unwrap();

        // Walking out along the center row, values never increase.
        for x in 4..8 {
            assert!(output.get(x + 1, 4)[0] <= output.get(x, 4)[0]);
        }
        // And the corner is strictly below the center.
        assert!(output.get(0, 0)[0] < output.get(4, 4)[0]);
    }

    #[test]
    fn transform_is_not_idempotent() {
        let src = uniform_image(8, 8, 200);
        let once = reproject(&src, 1.0).unwrap();
        let twice = reproject(&once, 1.0).unwrap();

        // Off-center pixels have scale factors below 1, so a second pass
        // keeps shrinking them instead of recovering the input.
        assert_ne!(once.get(0, 0), src.get(0, 0));
        assert_ne!(twice.get(0, 0), once.get(0, 0));
    }

    #[test]
    fn output_dimensions_match_input() {
        let src = uniform_image(7, 3, 50);
        let output = reproject(&src, FOV).unwrap();
        assert_eq!(output.width, 7);
        assert_eq!(output.height, 3);
    }

    #[test]
    fn alpha_is_opaque_on_transformed_pixels() {
        let mut src = uniform_image(4, 4, 60);
        src.put(1, 1, [60, 60, 60, 128]);

        let output = reproject(&src, FOV).unwrap();
        assert_eq!(output.get(1, 1)[3], 255);
    }

    #[test]
    fn zero_fov_is_an_arithmetic_error() {
        let src = uniform_image(4, 4, 200);
        assert!(matches!(reproject(&src, 0.0), Err(Error::Arithmetic(_))));
    }

    #[test]
    fn transform_depth_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("depth.png");
        let output = dir.path().join("depth_z.png");
        let input = input.to_str().unwrap();
        let output = output.to_str().unwrap();

        let mut src = uniform_image(4, 4, 200);
        src.put(0, 0, BACKGROUND);
        write_image(input, &src).unwrap();

        transform_depth(input, output, FOV).unwrap();

        let result = read_image(output).unwrap();
        assert_eq!(result.width, 4);
        assert_eq!(result.height, 4);
        assert_eq!(result.get(0, 0), FILL);

        let camera = Pinhole::new(4, 4, FOV).unwrap();
        let expected = (200.0 * camera.scale_factor(2, 2)).floor() as u8;
        assert_eq!(result.get(2, 2), [expected, expected, expected, 255]);

        // The input file is left as written.
        let src_again = read_image(input).unwrap();
        assert_eq!(src_again.get(0, 0), BACKGROUND);
    }

    #[test]
    fn unreadable_input_is_a_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("depth_z.png");
        let err = transform_depth("/nonexistent/depth.png", output.to_str().unwrap(), FOV)
            .unwrap_err();
        assert!(matches!(err, Error::Decode { .. }));
    }
}
