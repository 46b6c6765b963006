//! Cropkit WASM - WebAssembly bindings for the crop-geometry engine
//!
//! This crate exposes the cropkit-core controller and pixel transforms to
//! JavaScript/TypeScript applications. The frontend draws the image and the
//! crop overlay; the engine on the WASM side owns the crop rectangle and
//! resolves every gesture.
//!
//! # Module Structure
//!
//! - `controller` - Interactive crop session (hit-testing, drags, rotation)
//! - `types` - WASM-compatible wrapper types for image data
//! - `transform` - Standalone crop/rotation bindings for the export path
//!
//! # Usage
//!
//! ```typescript
//! import init, { JsCropController } from '@cropkit/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! const session = new JsCropController(img.width, img.height);
//! session.set_display_size(canvas.width, canvas.height);
//! session.on_crop_changed((rect) => drawOverlay(rect));
//! ```

use wasm_bindgen::prelude::*;

mod controller;
mod transform;
mod types;

// Re-export public types
pub use controller::{JsCropController, JsCropRect};
pub use transform::{apply_crop, apply_rotation};
pub use types::JsImageData;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    // Future: Set up panic hook for better error messages in browser console
    // when console_error_panic_hook feature is added
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
