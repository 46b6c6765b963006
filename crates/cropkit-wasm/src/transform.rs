//! WASM bindings for the pixel transforms.
//!
//! Standalone crop and rotation functions for the export path, when the
//! frontend wants to cut pixels without going through a controller session.

use cropkit_core::{crop_image, rotate_image, Rect, Rotation};
use wasm_bindgen::prelude::*;

use crate::types::JsImageData;

/// Cut the region described by a normalized crop rectangle out of an image.
///
/// Coordinates are in the range [0, 1] relative to the unrotated image,
/// with (0, 0) the top-left corner. Out-of-range edges are clamped; the
/// output is never smaller than 1x1.
///
/// # Example (TypeScript)
///
/// ```typescript
/// // Cut the center 50% of the image
/// const cropped = apply_crop(sourceImage, 0.25, 0.25, 0.75, 0.75);
/// ```
#[wasm_bindgen]
pub fn apply_crop(
    image: &JsImageData,
    left: f64,
    top: f64,
    right: f64,
    bottom: f64,
) -> JsImageData {
    let src = image.to_image();
    let result = crop_image(&src, &Rect::new(left, top, right, bottom));
    JsImageData::from_image(result)
}

/// Rotate an image by a multiple of 90 degrees clockwise.
///
/// Quarter turns are exact pixel remaps, so no quality is lost. Angles that
/// are not a multiple of 90 leave the image upright.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const sideways = apply_rotation(sourceImage, 90);
/// ```
#[wasm_bindgen]
pub fn apply_rotation(image: &JsImageData, degrees: i32) -> JsImageData {
    let src = image.to_image();
    let result = rotate_image(&src, Rotation::from_degrees(degrees));
    JsImageData::from_image(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_image(width: u32, height: u32) -> JsImageData {
        let pixels: Vec<u8> = (0..(width * height * 3) as usize)
            .map(|i| (i % 256) as u8)
            .collect();
        JsImageData::new(width, height, pixels)
    }

    #[test]
    fn test_crop_full_image() {
        let img = test_image(100, 100);
        let result = apply_crop(&img, 0.0, 0.0, 1.0, 1.0);
        assert_eq!(result.width(), 100);
        assert_eq!(result.height(), 100);
    }

    #[test]
    fn test_crop_center() {
        let img = test_image(100, 100);
        let result = apply_crop(&img, 0.25, 0.25, 0.75, 0.75);
        assert_eq!(result.width(), 50);
        assert_eq!(result.height(), 50);
    }

    #[test]
    fn test_crop_non_square() {
        let img = test_image(200, 100);
        let result = apply_crop(&img, 0.0, 0.0, 0.5, 1.0);
        assert_eq!(result.width(), 100);
        assert_eq!(result.height(), 100);
    }

    #[test]
    fn test_rotation_zero_is_identity() {
        let img = test_image(10, 5);
        let result = apply_rotation(&img, 0);
        assert_eq!(result.width(), 10);
        assert_eq!(result.height(), 5);
        assert_eq!(result.pixels(), img.pixels());
    }

    #[test]
    fn test_rotation_90_swaps_dimensions() {
        let img = test_image(10, 5);
        let result = apply_rotation(&img, 90);
        assert_eq!(result.width(), 5);
        assert_eq!(result.height(), 10);
    }

    #[test]
    fn test_rotation_360_is_identity() {
        let img = test_image(8, 8);
        let result = apply_rotation(&img, 360);
        assert_eq!(result.pixels(), img.pixels());
    }
}
