//! Exact quarter-turn rotation of an image buffer.

use crate::rotation::Rotation;
use crate::ImageData;

/// Rotate an image by the given quarter-turn orientation.
///
/// Each output pixel is a straight copy of one input pixel, so the result is
/// lossless. Sideways orientations swap the output dimensions; `Up` returns
/// a copy of the input.
pub fn rotate_image(image: &ImageData, rotation: Rotation) -> ImageData {
    if rotation == Rotation::Up {
        return image.clone();
    }

    let (src_w, src_h) = (image.width, image.height);
    let (out_w, out_h) = if rotation.is_sideways() {
        (src_h, src_w)
    } else {
        (src_w, src_h)
    };

    let mut pixels = vec![0u8; (out_w * out_h * 3) as usize];

    for dst_y in 0..out_h {
        for dst_x in 0..out_w {
            let (src_x, src_y) = match rotation {
                Rotation::Up => (dst_x, dst_y),
                // Clockwise: the source's left column becomes the top row
                Rotation::Right => (dst_y, src_h - 1 - dst_x),
                Rotation::Down => (src_w - 1 - dst_x, src_h - 1 - dst_y),
                Rotation::Left => (src_w - 1 - dst_y, dst_x),
            };

            let src_idx = ((src_y * src_w + src_x) * 3) as usize;
            let dst_idx = ((dst_y * out_w + dst_x) * 3) as usize;
            pixels[dst_idx..dst_idx + 3].copy_from_slice(&image.pixels[src_idx..src_idx + 3]);
        }
    }

    ImageData {
        width: out_w,
        height: out_h,
        pixels,
    }
}
