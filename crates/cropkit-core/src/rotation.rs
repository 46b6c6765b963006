//! Quarter-turn display rotation.
//!
//! The crop rectangle is always stored relative to the *unrotated* image.
//! Rotation only changes how the image (and therefore the crop overlay) is
//! placed on screen: sideways orientations swap the displayed width and
//! height, and pointer coordinates have to be mapped back into unrotated
//! space before hit-testing or drag resolution.

use serde::{Deserialize, Serialize};

use crate::geometry::{Point, Size};

/// Display orientation of the image, in quarter turns clockwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Rotation {
    /// No rotation.
    #[default]
    Up,
    /// Rotated 90 degrees clockwise.
    Right,
    /// Rotated 180 degrees.
    Down,
    /// Rotated 270 degrees clockwise (90 counter-clockwise).
    Left,
}

impl Rotation {
    /// Whether the displayed width and height are swapped relative to the
    /// source image.
    #[inline]
    pub fn is_sideways(self) -> bool {
        matches!(self, Rotation::Right | Rotation::Left)
    }

    /// Rotation angle applied when painting, in degrees clockwise.
    pub fn angle_degrees(self) -> u32 {
        match self {
            Rotation::Up => 0,
            Rotation::Right => 90,
            Rotation::Down => 180,
            Rotation::Left => 270,
        }
    }

    /// Next state in the clockwise cycle.
    pub fn rotated_cw(self) -> Self {
        match self {
            Rotation::Up => Rotation::Right,
            Rotation::Right => Rotation::Down,
            Rotation::Down => Rotation::Left,
            Rotation::Left => Rotation::Up,
        }
    }

    /// Next state in the counter-clockwise cycle.
    pub fn rotated_ccw(self) -> Self {
        match self {
            Rotation::Up => Rotation::Left,
            Rotation::Left => Rotation::Down,
            Rotation::Down => Rotation::Right,
            Rotation::Right => Rotation::Up,
        }
    }

    /// Map a clockwise angle in degrees to a rotation state.
    ///
    /// Angles are taken modulo 360; values that are not a multiple of 90
    /// fall back to `Up`.
    pub fn from_degrees(degrees: i32) -> Self {
        match degrees.rem_euclid(360) {
            90 => Rotation::Right,
            180 => Rotation::Down,
            270 => Rotation::Left,
            _ => Rotation::Up,
        }
    }

    /// On-screen size of an image displayed under this rotation.
    pub fn display_size(self, size: Size) -> Size {
        if self.is_sideways() {
            size.swapped()
        } else {
            size
        }
    }

    /// Map a point from unrotated space onto the rotated display.
    ///
    /// `unrotated` is the size of the space the point lives in; the result
    /// lives in the rotated display space (swapped size when sideways).
    pub fn to_display(self, point: Point, unrotated: Size) -> Point {
        match self {
            Rotation::Up => point,
            Rotation::Right => Point::new(unrotated.height - point.y, point.x),
            Rotation::Down => Point::new(unrotated.width - point.x, unrotated.height - point.y),
            Rotation::Left => Point::new(point.y, unrotated.width - point.x),
        }
    }

    /// Map a pointer position from the rotated display back into unrotated
    /// space. Inverse of [`Rotation::to_display`].
    pub fn to_unrotated(self, point: Point, unrotated: Size) -> Point {
        match self {
            Rotation::Up => point,
            Rotation::Right => Point::new(point.y, unrotated.height - point.x),
            Rotation::Down => Point::new(unrotated.width - point.x, unrotated.height - point.y),
            Rotation::Left => Point::new(unrotated.width - point.y, point.x),
        }
    }
}
