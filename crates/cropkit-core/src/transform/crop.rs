//! Cutting the selected region out of an image buffer.

use crate::geometry::Rect;
use crate::ImageData;

/// Extract the region described by a normalized crop rectangle.
///
/// The rectangle is interpreted relative to the unrotated image, exactly as
/// stored by the controller: (0, 0) is the top-left corner, (1, 1) the
/// bottom-right. Coordinates are clamped into the unit square first, so a
/// rectangle produced by the gesture engine can be passed through without
/// further checks.
///
/// # Behavior
///
/// - edges round to the nearest pixel
/// - the output is never smaller than 1x1
/// - the full-image rectangle returns a copy of the input
pub fn crop_image(image: &ImageData, rect: &Rect) -> ImageData {
    let rect = rect.clamped_unit();

    // Fast path: full crop returns a clone
    if rect.left <= 0.0 && rect.top <= 0.0 && rect.right >= 1.0 && rect.bottom >= 1.0 {
        return image.clone();
    }

    let src_w = f64::from(image.width);
    let src_h = f64::from(image.height);

    let left = ((rect.left * src_w).round() as u32).min(image.width.saturating_sub(1));
    let top = ((rect.top * src_h).round() as u32).min(image.height.saturating_sub(1));
    let right = ((rect.right * src_w).round() as u32).min(image.width);
    let bottom = ((rect.bottom * src_h).round() as u32).min(image.height);

    let out_w = right.saturating_sub(left).max(1);
    let out_h = bottom.saturating_sub(top).max(1);

    let mut pixels = vec![0u8; (out_w * out_h * 3) as usize];
    let row_bytes = (out_w * 3) as usize;

    for row in 0..out_h {
        let src_y = top + row;
        let src_start = ((src_y * image.width + left) * 3) as usize;
        let dst_start = row as usize * row_bytes;
        pixels[dst_start..dst_start + row_bytes]
            .copy_from_slice(&image.pixels[src_start..src_start + row_bytes]);
    }

    ImageData {
        width: out_w,
        height: out_h,
        pixels,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Image where each pixel encodes its position.
    fn test_image(width: u32, height: u32) -> ImageData {
        let mut pixels = Vec::with_capacity((width * height * 3) as usize);
        for y in 0..height {
            for x in 0..width {
                let v = ((y * width + x) % 256) as u8;
                pixels.push(v);
                pixels.push(v);
                pixels.push(v);
            }
        }
        ImageData {
            width,
            height,
            pixels,
        }
    }

    #[test]
    fn test_full_crop_is_identity() {
        let img = test_image(10, 10);
        let result = crop_image(&img, &Rect::UNIT);
        assert_eq!(result.width, 10);
        assert_eq!(result.height, 10);
        assert_eq!(result.pixels, img.pixels);
    }

    #[test]
    fn test_half_crop() {
        let img = test_image(100, 100);
        let result = crop_image(&img, &Rect::new(0.0, 0.0, 0.5, 0.5));
        assert_eq!(result.width, 50);
        assert_eq!(result.height, 50);
    }

    #[test]
    fn test_center_crop_picks_right_pixels() {
        let img = test_image(10, 10);
        let result = crop_image(&img, &Rect::new(0.2, 0.2, 0.8, 0.8));

        assert_eq!(result.width, 6);
        assert_eq!(result.height, 6);
        // First output pixel comes from (2, 2): value 2 * 10 + 2 = 22
        assert_eq!(result.pixels[0], 22);
    }

    #[test]
    fn test_out_of_range_rect_is_clamped() {
        let img = test_image(10, 10);
        let result = crop_image(&img, &Rect::new(-0.5, -0.5, 1.5, 1.5));
        assert_eq!(result.width, 10);
        assert_eq!(result.height, 10);
    }

    #[test]
    fn test_tiny_rect_yields_one_pixel() {
        let img = test_image(100, 100);
        let result = crop_image(&img, &Rect::new(0.5, 0.5, 0.5001, 0.5001));
        assert_eq!(result.width, 1);
        assert_eq!(result.height, 1);
    }

    #[test]
    fn test_rectangular_crop() {
        let img = test_image(200, 100);
        let result = crop_image(&img, &Rect::new(0.0, 0.0, 0.25, 1.0));
        assert_eq!(result.width, 50);
        assert_eq!(result.height, 100);
    }

    #[test]
    fn test_crop_near_far_edge() {
        let img = test_image(10, 10);
        let result = crop_image(&img, &Rect::new(0.9, 0.9, 1.0, 1.0));
        assert_eq!(result.width, 1);
        assert_eq!(result.height, 1);
        // Pixel (9, 9): value 99
        assert_eq!(result.pixels[0], 99);
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================
