//! Pointer gesture handling: hit-testing and drag resolution.
//!
//! A gesture runs through two pure functions. On pointer-down,
//! [`classify`] maps the pointer position to a [`DragTarget`] and
//! [`anchor_for`] records the offset between the pointer and the dragged
//! feature. On every pointer-move, [`resolve`] turns the anchor-adjusted
//! pointer position into a new crop rectangle under the active size and
//! aspect-ratio constraints.
//!
//! Both functions work in a single pixel space (the unrotated display
//! space); the controller handles rotation mapping and normalization.

mod drag;
mod hit;

pub use drag::resolve;
pub use hit::{anchor_for, classify, CornerPositions, DragAnchor, DragTarget};
