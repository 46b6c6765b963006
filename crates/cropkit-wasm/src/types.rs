//! WASM-compatible wrapper types for image data.
//!
//! JavaScript-friendly wrappers around the core Cropkit types, handling the
//! conversion between Rust and JavaScript data representations.

use cropkit_core::ImageData;
use wasm_bindgen::prelude::*;

/// An image buffer wrapper for JavaScript.
///
/// Wraps the core `ImageData` type and exposes dimensions and pixel data to
/// JavaScript.
///
/// # Memory Management
///
/// The pixel data lives in WASM memory. Calling `pixels()` copies it into
/// JavaScript memory as a `Uint8Array`; keep the image on the WASM side and
/// extract pixels only when needed. `free()` releases WASM memory eagerly,
/// but wasm-bindgen's finalizer will also clean up automatically.
#[wasm_bindgen]
pub struct JsImageData {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

#[wasm_bindgen]
impl JsImageData {
    /// Create a new JsImageData from dimensions and RGB pixel data
    /// (3 bytes per pixel, row-major order).
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> JsImageData {
        JsImageData {
            width,
            height,
            pixels,
        }
    }

    /// Get the image width in pixels
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the image height in pixels
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the number of bytes in the pixel buffer (width * height * 3)
    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.pixels.len()
    }

    /// Returns RGB pixel data as a Uint8Array copy.
    pub fn pixels(&self) -> Vec<u8> {
        self.pixels.clone()
    }

    /// Explicitly free WASM memory.
    pub fn free(self) {
        // Dropping self releases the memory
    }
}

impl JsImageData {
    /// Wrap a core image, used by the transform and controller bindings.
    pub(crate) fn from_image(img: ImageData) -> Self {
        Self {
            width: img.width,
            height: img.height,
            pixels: img.pixels,
        }
    }

    /// Convert back to a core image. Clones the pixel data.
    pub(crate) fn to_image(&self) -> ImageData {
        ImageData {
            width: self.width,
            height: self.height,
            pixels: self.pixels.clone(),
        }
    }
}
