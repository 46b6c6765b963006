//! Cropkit Core - Interactive crop-geometry engine
//!
//! This crate implements the computational side of an image-cropping
//! control: hit-testing pointer positions against the crop rectangle's
//! handles, resolving drag gestures into new rectangles under size and
//! aspect-ratio constraints, and keeping the rectangle normalized and
//! consistent under quarter-turn rotation.
//!
//! Rendering, event capture, and image loading live in the embedding
//! application (or the WASM frontend); the engine only needs pointer
//! positions, the displayed image size, and - for the final export - the
//! pixel data to cut.
//!
//! # Coordinate System
//!
//! - The crop rectangle is stored normalized to 0.0..1.0, relative to the
//!   *unrotated* image; origin is the top-left corner
//! - Gestures arrive in display pixels relative to the displayed (possibly
//!   rotated) image and are mapped internally
//! - Size bounds are expressed in unrotated image pixels

pub mod config;
pub mod controller;
pub mod geometry;
pub mod gesture;
pub mod rotation;
pub mod transform;

pub use config::{CropConfig, InvalidConfigurationError, SizeBounds};
pub use controller::{CropController, InvalidRectError, ListenerId};
pub use geometry::{clamp_or_skip, Point, Rect, Size};
pub use gesture::{anchor_for, classify, resolve, CornerPositions, DragAnchor, DragTarget};
pub use rotation::Rotation;
pub use transform::{crop_image, rotate_image};

/// An RGB8 image buffer, the input and output of the pixel transforms.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageData {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// RGB pixel data in row-major order, 3 bytes per pixel.
    pub pixels: Vec<u8>,
}

impl ImageData {
    /// Create an image from dimensions and pixel data.
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        debug_assert_eq!(
            pixels.len(),
            (width * height * 3) as usize,
            "pixel buffer size mismatch"
        );
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Wrap an `image::RgbImage` without copying.
    pub fn from_rgb_image(img: image::RgbImage) -> Self {
        let (width, height) = img.dimensions();
        Self {
            width,
            height,
            pixels: img.into_raw(),
        }
    }

    /// Convert into an `image::RgbImage` for encoding or further
    /// processing. Returns `None` if the buffer length is inconsistent.
    pub fn to_rgb_image(&self) -> Option<image::RgbImage> {
        image::RgbImage::from_raw(self.width, self.height, self.pixels.clone())
    }

    /// The RGB triple at pixel (x, y).
    pub fn rgb_at(&self, x: u32, y: u32) -> [u8; 3] {
        let idx = ((y * self.width + x) * 3) as usize;
        [self.pixels[idx], self.pixels[idx + 1], self.pixels[idx + 2]]
    }

    /// Whether the image holds no pixels.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0 || self.pixels.is_empty()
    }
}
