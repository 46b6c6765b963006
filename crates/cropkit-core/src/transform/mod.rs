//! Pixel application of a finished crop.
//!
//! The gesture engine only moves a normalized rectangle around; these
//! functions turn that rectangle into actual output pixels once the user is
//! done. Cropping happens first, in unrotated image space, then the
//! quarter-turn rotation is applied for the displayed orientation.
//!
//! Rotation here is exact index remapping - the engine only ever rotates by
//! multiples of 90 degrees, so no interpolation is involved.

mod crop;
mod rotate;

pub use crop::crop_image;
pub use rotate::rotate_image;
