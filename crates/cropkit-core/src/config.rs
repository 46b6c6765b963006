//! Controller configuration: touch geometry, size bounds, and the fail-fast
//! validation applied at construction.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error types for rejected controller configurations.
///
/// Configuration problems are reported once, at construction; gesture-time
/// numeric excursions are clamped silently and never produce an error.
#[derive(Debug, Error, PartialEq)]
pub enum InvalidConfigurationError {
    /// The touch target size must be a positive number of pixels.
    #[error("touch size must be positive, got {0}")]
    NonPositiveTouchSize(f64),

    /// The drawn corner handle size must be positive.
    #[error("corner size must be positive, got {0}")]
    NonPositiveCornerSize(f64),

    /// The overlay line width must be positive.
    #[error("line size must be positive, got {0}")]
    NonPositiveLineSize(f64),

    /// The minimum crop size must be positive.
    #[error("minimum crop size must be positive, got {0}")]
    NonPositiveMinimum(f64),

    /// The maximum crop size is smaller than the minimum.
    #[error("maximum crop size {maximum} is smaller than minimum {minimum}")]
    BoundsOrder { minimum: f64, maximum: f64 },

    /// The image the controller is built for has no area.
    #[error("image dimensions must be positive, got {width}x{height}")]
    EmptyImage { width: f64, height: f64 },
}

/// Minimum and maximum crop size, in unrotated image pixels.
///
/// Both limits apply to width and height independently. `f64::INFINITY` is a
/// valid maximum and means "unbounded". Equal minimum and maximum describe a
/// fixed-size crop: resize affordances are disabled and the rectangle can
/// only be moved.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SizeBounds {
    pub minimum: f64,
    pub maximum: f64,
}

impl Default for SizeBounds {
    fn default() -> Self {
        Self {
            minimum: 1.0,
            maximum: f64::INFINITY,
        }
    }
}

impl SizeBounds {
    pub fn new(minimum: f64, maximum: f64) -> Self {
        Self { minimum, maximum }
    }

    /// Whether the bounds pin the crop to a single size.
    pub fn is_fixed(&self) -> bool {
        self.maximum == self.minimum
    }

    /// Bounds converted into another pixel space (image space to display
    /// space and back). Infinity survives scaling.
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            minimum: self.minimum * factor,
            maximum: self.maximum * factor,
        }
    }
}

/// Static configuration of a crop controller.
///
/// `corner_size` and `line_size` are carried for the rendering layer (handle
/// squares and overlay strokes); the engine itself only consumes
/// `touch_size`, `bounds`, and `always_move`, but all sizes are validated
/// here so a misconfigured control fails at construction rather than drawing
/// garbage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CropConfig {
    /// Side length of the square touch region centered on each corner, in
    /// display pixels. Edge hit zones use half of this value.
    pub touch_size: f64,
    /// Drawn size of the corner handles, in display pixels.
    pub corner_size: f64,
    /// Stroke width of the crop outline, in display pixels.
    pub line_size: f64,
    /// Crop size limits in unrotated image pixels.
    pub bounds: SizeBounds,
    /// Treat any press that misses a handle as the start of a move gesture,
    /// even outside the crop rectangle. Useful for touch input.
    pub always_move: bool,
}

impl Default for CropConfig {
    fn default() -> Self {
        Self {
            touch_size: 30.0,
            corner_size: 12.0,
            line_size: 2.0,
            bounds: SizeBounds::default(),
            always_move: false,
        }
    }
}

impl CropConfig {
    /// Check every construction-time invariant, first failure wins.
    pub fn validate(&self) -> Result<(), InvalidConfigurationError> {
        if self.touch_size.is_nan() || self.touch_size <= 0.0 {
            return Err(InvalidConfigurationError::NonPositiveTouchSize(
                self.touch_size,
            ));
        }
        if self.corner_size.is_nan() || self.corner_size <= 0.0 {
            return Err(InvalidConfigurationError::NonPositiveCornerSize(
                self.corner_size,
            ));
        }
        if self.line_size.is_nan() || self.line_size <= 0.0 {
            return Err(InvalidConfigurationError::NonPositiveLineSize(
                self.line_size,
            ));
        }
        if self.bounds.minimum.is_nan() || self.bounds.minimum <= 0.0 {
            return Err(InvalidConfigurationError::NonPositiveMinimum(
                self.bounds.minimum,
            ));
        }
        if self.bounds.maximum.is_nan() || self.bounds.maximum < self.bounds.minimum {
            return Err(InvalidConfigurationError::BoundsOrder {
                minimum: self.bounds.minimum,
                maximum: self.bounds.maximum,
            });
        }
        Ok(())
    }
}
