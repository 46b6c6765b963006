//! Crop controller WASM bindings.
//!
//! The JavaScript frontend owns rendering and event capture: it reports the
//! displayed image size, forwards pointer events, and redraws whenever the
//! change callback fires. The controller on the WASM side owns the crop
//! state itself, so there is exactly one writer.

use cropkit_core::{CropConfig, CropController, Point, Rect, Rotation, Size};
use wasm_bindgen::prelude::*;

use crate::types::JsImageData;

/// A crop rectangle with normalized coordinates (0.0 to 1.0), returned to
/// JavaScript by value.
#[wasm_bindgen]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JsCropRect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl JsCropRect {
    fn from_rect(rect: &Rect) -> Self {
        Self {
            left: rect.left,
            top: rect.top,
            right: rect.right,
            bottom: rect.bottom,
        }
    }
}

/// Interactive crop session for one image.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const session = new JsCropController(1600, 1200, { touch_size: 40 });
/// session.set_display_size(800, 600);
/// session.on_crop_changed((rect) => overlay.redraw(rect));
///
/// canvas.onpointerdown = (e) => session.pointer_down(e.offsetX, e.offsetY);
/// canvas.onpointermove = (e) => session.pointer_move(e.offsetX, e.offsetY);
/// canvas.onpointerup = () => session.pointer_up();
/// ```
#[wasm_bindgen]
pub struct JsCropController {
    inner: CropController,
}

#[wasm_bindgen]
impl JsCropController {
    /// Create a controller for an image of `width` x `height` pixels.
    ///
    /// `config` is an optional plain object matching the core `CropConfig`
    /// fields (`touch_size`, `corner_size`, `line_size`, `bounds`,
    /// `always_move`); missing fields use their defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(width: f64, height: f64, config: JsValue) -> Result<JsCropController, JsValue> {
        let config: CropConfig = if config.is_undefined() || config.is_null() {
            CropConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config).map_err(|e| JsValue::from_str(&e.to_string()))?
        };

        let inner = CropController::new(Size::new(width, height), config)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self { inner })
    }

    /// Create a controller with the default configuration.
    pub fn with_defaults(width: f64, height: f64) -> Result<JsCropController, JsValue> {
        let inner = CropController::new(Size::new(width, height), CropConfig::default())
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self { inner })
    }

    /// Report the on-screen size of the displayed (possibly rotated) image.
    pub fn set_display_size(&mut self, width: f64, height: f64) {
        self.inner.set_display_size(Size::new(width, height));
    }

    /// Pointer pressed, in display coordinates.
    pub fn pointer_down(&mut self, x: f64, y: f64) {
        self.inner.on_pointer_down(Point::new(x, y));
    }

    /// Pointer moved, in display coordinates.
    pub fn pointer_move(&mut self, x: f64, y: f64) {
        self.inner.on_pointer_move(Point::new(x, y));
    }

    /// Pointer released.
    pub fn pointer_up(&mut self) {
        self.inner.on_pointer_up();
    }

    /// Whether a drag gesture is in progress.
    pub fn is_dragging(&self) -> bool {
        self.inner.is_dragging()
    }

    /// The current crop rectangle, normalized to the unrotated image.
    pub fn crop_rect(&self) -> JsCropRect {
        JsCropRect::from_rect(&self.inner.crop_rect())
    }

    /// The current crop rectangle in unrotated image pixels.
    pub fn crop_rect_in_pixels(&self) -> JsCropRect {
        JsCropRect::from_rect(&self.inner.crop_rect_in_pixels())
    }

    /// Replace the crop rectangle programmatically.
    ///
    /// Rejects inverted or out-of-bounds rectangles; the previous rectangle
    /// stays in place.
    pub fn set_crop_rect(
        &mut self,
        left: f64,
        top: f64,
        right: f64,
        bottom: f64,
    ) -> Result<(), JsValue> {
        self.inner
            .set_crop_rect(Rect::new(left, top, right, bottom))
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Set or clear the aspect-ratio constraint (width over height, in
    /// unrotated image pixels). Pass `undefined` to clear.
    pub fn set_aspect_ratio(&mut self, ratio: Option<f64>) {
        self.inner.set_aspect_ratio(ratio);
    }

    /// Set the display rotation to a multiple of 90 degrees clockwise.
    pub fn set_rotation_degrees(&mut self, degrees: i32) {
        self.inner.set_rotation(Rotation::from_degrees(degrees));
    }

    /// The current display rotation in degrees clockwise.
    pub fn rotation_degrees(&self) -> u32 {
        self.inner.rotation().angle_degrees()
    }

    /// Rotate the display a quarter turn clockwise.
    pub fn rotate_cw(&mut self) {
        self.inner.rotate_cw();
    }

    /// Rotate the display a quarter turn counter-clockwise.
    pub fn rotate_ccw(&mut self) {
        self.inner.rotate_ccw();
    }

    /// Restore the full-image crop and upright rotation.
    pub fn reset(&mut self) {
        self.inner.reset();
    }

    /// Register a callback invoked with the crop rectangle (as a plain
    /// `{left, top, right, bottom}` object) on every accepted mutation.
    pub fn on_crop_changed(&mut self, callback: js_sys::Function) {
        self.inner.subscribe(move |rect| {
            if let Ok(value) = serde_wasm_bindgen::to_value(rect) {
                let _ = callback.call1(&JsValue::NULL, &value);
            }
        });
    }

    /// Apply the current crop and rotation to pixel data.
    pub fn apply_to(&self, image: &JsImageData) -> JsImageData {
        JsImageData::from_image(self.inner.apply_to(&image.to_image()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> JsCropController {
        let mut session = JsCropController::with_defaults(1000.0, 1000.0).expect("valid config");
        session.set_display_size(500.0, 500.0);
        session
    }

    #[test]
    fn test_starts_with_full_crop() {
        let session = session();
        let rect = session.crop_rect();
        assert_eq!(rect.left, 0.0);
        assert_eq!(rect.top, 0.0);
        assert_eq!(rect.right, 1.0);
        assert_eq!(rect.bottom, 1.0);
    }

    #[test]
    fn test_gesture_round_trip() {
        let mut session = session();

        session.pointer_down(0.0, 0.0);
        assert!(session.is_dragging());
        session.pointer_move(100.0, 100.0);
        session.pointer_up();
        assert!(!session.is_dragging());

        let rect = session.crop_rect();
        assert!((rect.left - 0.2).abs() < 1e-9);
        assert!((rect.top - 0.2).abs() < 1e-9);
    }

    #[test]
    fn test_set_crop_rect_and_pixel_read_back() {
        // Rejection paths are covered in cropkit-core; constructing the
        // JsValue error is only possible under a wasm runtime
        let mut session = session();
        assert!(session.set_crop_rect(0.1, 0.1, 0.9, 0.9).is_ok());

        let pixels = session.crop_rect_in_pixels();
        assert!((pixels.left - 100.0).abs() < 1e-9);
        assert!((pixels.right - 900.0).abs() < 1e-9);
    }

    #[test]
    fn test_rotation_degrees() {
        let mut session = session();
        session.set_rotation_degrees(90);
        assert_eq!(session.rotation_degrees(), 90);
        session.rotate_cw();
        assert_eq!(session.rotation_degrees(), 180);
        session.rotate_ccw();
        assert_eq!(session.rotation_degrees(), 90);
    }

    #[test]
    fn test_reset() {
        let mut session = session();
        session.set_crop_rect(0.2, 0.2, 0.8, 0.8).unwrap();
        session.set_rotation_degrees(180);

        session.reset();
        let rect = session.crop_rect();
        assert_eq!(rect.right, 1.0);
        assert_eq!(session.rotation_degrees(), 0);
    }

    #[test]
    fn test_apply_to() {
        let mut session = JsCropController::with_defaults(4.0, 4.0).expect("valid config");
        session.set_crop_rect(0.0, 0.0, 0.5, 0.5).unwrap();

        let image = JsImageData::new(4, 4, vec![1u8; 4 * 4 * 3]);
        let result = session.apply_to(&image);
        assert_eq!(result.width(), 2);
        assert_eq!(result.height(), 2);
    }
}
