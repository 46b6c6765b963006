//! The crop controller: single owner of the crop state.
//!
//! The controller holds the normalized crop rectangle together with the
//! aspect-ratio constraint, rotation, and size bounds, and funnels every
//! mutation - gesture-driven or programmatic - through one notification
//! point. The rendering layer feeds it pointer positions and the displayed
//! image size, subscribes for change callbacks, and reads state back; it
//! never writes the rectangle directly.
//!
//! # Gesture State Machine
//!
//! Idle and Dragging, switched by the pointer entry points:
//!
//! - pointer-down while Idle hit-tests and, on a hit, records the drag
//!   anchor (Idle -> Dragging); a press while Dragging is ignored, so
//!   concurrent drags are impossible by construction
//! - pointer-move while Dragging resolves one new rectangle and notifies;
//!   while Idle it is a no-op
//! - pointer-up always returns to Idle, whether or not anything moved
//!
//! Everything runs synchronously on the caller's thread. Listeners are
//! invoked inline and must not mutate the controller from inside the
//! callback.

use thiserror::Error;

use crate::config::{CropConfig, InvalidConfigurationError};
use crate::gesture::{anchor_for, classify, resolve, CornerPositions, DragAnchor, DragTarget};
use crate::geometry::{Point, Rect, Size};
use crate::rotation::Rotation;
use crate::transform;
use crate::ImageData;

/// Tolerance used when validating externally supplied rectangles.
const EPSILON: f64 = 1e-9;

/// Error types for rejected crop rectangles.
///
/// Raised only for programmatic [`CropController::set_crop_rect`] calls;
/// gesture input is clamped instead. The previous rectangle stays in place
/// and no notification is emitted.
#[derive(Debug, Error, PartialEq)]
pub enum InvalidRectError {
    /// The rectangle has no area or its edges are swapped.
    #[error("crop rectangle is inverted or empty: left {left}, top {top}, right {right}, bottom {bottom}")]
    Inverted {
        left: f64,
        top: f64,
        right: f64,
        bottom: f64,
    },

    /// The rectangle reaches outside the normalized unit square.
    #[error("crop rectangle ({0:?}) extends outside the unit square")]
    OutOfBounds(Rect),
}

/// Handle for removing a subscribed listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListenerId(u64);

type Listener = Box<dyn FnMut(&Rect)>;

/// Owns the crop rectangle and applies every mutation to it.
pub struct CropController {
    image_size: Size,
    display_size: Size,
    crop: Rect,
    aspect_ratio: Option<f64>,
    rotation: Rotation,
    config: CropConfig,
    listeners: Vec<(ListenerId, Listener)>,
    next_listener: u64,
    drag: Option<DragAnchor>,
}

impl std::fmt::Debug for CropController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CropController")
            .field("image_size", &self.image_size)
            .field("display_size", &self.display_size)
            .field("crop", &self.crop)
            .field("aspect_ratio", &self.aspect_ratio)
            .field("rotation", &self.rotation)
            .field("listeners", &self.listeners.len())
            .field("drag", &self.drag)
            .finish()
    }
}

impl CropController {
    /// Create a controller for an image of the given pixel size.
    ///
    /// The crop starts as the full image. Fails fast on a misconfigured
    /// [`CropConfig`] or an empty image.
    pub fn new(image_size: Size, config: CropConfig) -> Result<Self, InvalidConfigurationError> {
        config.validate()?;
        if image_size.is_empty() {
            return Err(InvalidConfigurationError::EmptyImage {
                width: image_size.width,
                height: image_size.height,
            });
        }

        Ok(Self {
            image_size,
            display_size: image_size,
            crop: Rect::UNIT,
            aspect_ratio: None,
            rotation: Rotation::default(),
            config,
            listeners: Vec::new(),
            next_listener: 0,
            drag: None,
        })
    }

    pub fn image_size(&self) -> Size {
        self.image_size
    }

    pub fn config(&self) -> &CropConfig {
        &self.config
    }

    /// The current crop rectangle, normalized to the unrotated image.
    pub fn crop_rect(&self) -> Rect {
        self.crop
    }

    /// The current crop rectangle in unrotated image pixels.
    pub fn crop_rect_in_pixels(&self) -> Rect {
        self.crop.to_pixels(self.image_size)
    }

    pub fn aspect_ratio(&self) -> Option<f64> {
        self.aspect_ratio
    }

    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    pub fn display_size(&self) -> Size {
        self.display_size
    }

    /// Whether a drag gesture is in progress.
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// The target grabbed by the active drag, or `DragTarget::None` while
    /// Idle. Lets the rendering layer pick cursors without re-running the
    /// hit-test.
    pub fn drag_target(&self) -> DragTarget {
        self.drag.map_or(DragTarget::None, |anchor| anchor.target)
    }

    /// Report the on-screen size of the displayed (possibly rotated) image.
    ///
    /// Pointer positions passed to the gesture entry points are interpreted
    /// relative to this size. Non-positive sizes are ignored.
    pub fn set_display_size(&mut self, size: Size) {
        if size.is_empty() {
            log::warn!(
                "ignoring empty display size {}x{}",
                size.width,
                size.height
            );
            return;
        }
        self.display_size = size;
    }

    /// Replace the crop rectangle programmatically.
    ///
    /// The rectangle must be normalized: edges in order, positive area, and
    /// contained in the unit square. On failure the previous rectangle is
    /// kept and nothing is notified.
    pub fn set_crop_rect(&mut self, rect: Rect) -> Result<(), InvalidRectError> {
        if rect.left >= rect.right || rect.top >= rect.bottom {
            log::warn!("rejecting inverted crop rectangle {rect:?}");
            return Err(InvalidRectError::Inverted {
                left: rect.left,
                top: rect.top,
                right: rect.right,
                bottom: rect.bottom,
            });
        }
        if rect.left < -EPSILON
            || rect.top < -EPSILON
            || rect.right > 1.0 + EPSILON
            || rect.bottom > 1.0 + EPSILON
        {
            log::warn!("rejecting out-of-bounds crop rectangle {rect:?}");
            return Err(InvalidRectError::OutOfBounds(rect));
        }

        self.crop = rect.clamped_unit();
        self.notify();
        Ok(())
    }

    /// Set or clear the aspect-ratio constraint.
    ///
    /// Setting a ratio immediately reshapes the current rectangle to match,
    /// preserving its center when that keeps it inside the image. The ratio
    /// is width over height in unrotated image pixels; non-positive values
    /// are ignored.
    pub fn set_aspect_ratio(&mut self, ratio: Option<f64>) {
        if let Some(value) = ratio {
            if value.is_nan() || value <= 0.0 {
                log::warn!("ignoring non-positive aspect ratio {value}");
                return;
            }
        }

        self.aspect_ratio = ratio;
        if let Some(value) = ratio {
            self.crop = reshape_to_ratio(&self.crop, value, self.image_size);
        }
        self.notify();
    }

    /// Set the display rotation.
    ///
    /// The stored rectangle is untouched - its coordinates stay relative to
    /// the unrotated image; only pointer and corner mapping change.
    pub fn set_rotation(&mut self, rotation: Rotation) {
        self.rotation = rotation;
        self.notify();
    }

    /// Rotate the display a quarter turn clockwise.
    pub fn rotate_cw(&mut self) {
        self.set_rotation(self.rotation.rotated_cw());
    }

    /// Rotate the display a quarter turn counter-clockwise.
    pub fn rotate_ccw(&mut self) {
        self.set_rotation(self.rotation.rotated_ccw());
    }

    /// Restore the full-image crop and upright rotation.
    pub fn reset(&mut self) {
        self.crop = Rect::UNIT;
        self.rotation = Rotation::default();
        self.notify();
    }

    /// Pointer pressed at `position` (display coordinates).
    ///
    /// Ignored while a drag is already active. Otherwise the position is
    /// hit-tested and a matching target becomes the active drag.
    pub fn on_pointer_down(&mut self, position: Point) {
        if self.drag.is_some() {
            return;
        }

        let unrotated = self.unrotated_display();
        let pointer = self.rotation.to_unrotated(position, unrotated);
        let crop_px = self.crop.to_pixels(unrotated);
        let corners = CornerPositions::from_rect(&crop_px);

        let mut target = classify(
            pointer,
            &corners,
            self.config.touch_size,
            &crop_px,
            self.config.always_move,
        );

        // A fixed-size crop has no resize affordances; a press on a handle
        // falls back to the interior rules
        if self.config.bounds.is_fixed() && target.is_resize() {
            target = if self.config.always_move || crop_px.contains(pointer) {
                DragTarget::Move
            } else {
                DragTarget::None
            };
        }

        self.drag = anchor_for(target, pointer, &corners, &crop_px);
    }

    /// Pointer moved to `position` (display coordinates).
    ///
    /// While Dragging this resolves one new rectangle and notifies; while
    /// Idle it does nothing.
    pub fn on_pointer_move(&mut self, position: Point) {
        let Some(anchor) = self.drag else {
            return;
        };

        let unrotated = self.unrotated_display();
        let pointer = self.rotation.to_unrotated(position, unrotated) - anchor.offset;
        let crop_px = self.crop.to_pixels(unrotated);
        let scale = unrotated.width / self.image_size.width;
        let bounds = self.config.bounds.scaled(scale);

        let resolved = resolve(
            anchor.target,
            pointer,
            &crop_px,
            &bounds,
            self.aspect_ratio,
            unrotated,
        );

        self.crop = resolved.to_normalized(unrotated).clamped_unit();
        self.notify();
    }

    /// Pointer released: unconditionally back to Idle.
    pub fn on_pointer_up(&mut self) {
        self.drag = None;
    }

    /// Subscribe to crop changes.
    ///
    /// The callback runs synchronously on every accepted mutation with the
    /// new normalized rectangle. It must not call back into the controller.
    pub fn subscribe(&mut self, listener: impl FnMut(&Rect) + 'static) -> ListenerId {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a previously subscribed listener. Returns whether it existed.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    /// Apply the current crop and rotation to pixel data.
    pub fn apply_to(&self, image: &ImageData) -> ImageData {
        let cropped = transform::crop_image(image, &self.crop);
        transform::rotate_image(&cropped, self.rotation)
    }

    /// Size of the unrotated image as laid out on screen. The displayed
    /// size reported by the renderer has its axes swapped when sideways.
    fn unrotated_display(&self) -> Size {
        if self.rotation.is_sideways() {
            self.display_size.swapped()
        } else {
            self.display_size
        }
    }

    fn notify(&mut self) {
        let rect = self.crop;
        for (_, listener) in &mut self.listeners {
            listener(&rect);
        }
    }
}

/// Reshape `rect` to the pixel aspect ratio, preserving its center where the
/// image bounds allow and its longer normalized side otherwise.
fn reshape_to_ratio(rect: &Rect, ratio: f64, image: Size) -> Rect {
    // Pixel ratio converted into normalized units
    let normalized_ratio = ratio * (image.height / image.width);

    let keep = rect.width().max(rect.height());
    let (mut width, mut height) = if normalized_ratio >= 1.0 {
        (keep, keep / normalized_ratio)
    } else {
        (keep * normalized_ratio, keep)
    };
    if width > 1.0 {
        width = 1.0;
        height = width / normalized_ratio;
    }
    if height > 1.0 {
        height = 1.0;
        width = height * normalized_ratio;
    }

    let center = rect.center();
    let mut result = Rect::new(
        center.x - width / 2.0,
        center.y - height / 2.0,
        center.x + width / 2.0,
        center.y + height / 2.0,
    );

    // Slide back inside the unit square before the final safety clamp
    if result.left < 0.0 {
        result = result.translate(-result.left, 0.0);
    }
    if result.top < 0.0 {
        result = result.translate(0.0, -result.top);
    }
    if result.right > 1.0 {
        result = result.translate(1.0 - result.right, 0.0);
    }
    if result.bottom > 1.0 {
        result = result.translate(0.0, 1.0 - result.bottom);
    }

    result.clamped_unit()
}
