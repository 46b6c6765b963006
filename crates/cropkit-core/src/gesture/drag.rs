//! Drag resolution: turning pointer positions into constrained crop rects.

use crate::config::SizeBounds;
use crate::gesture::DragTarget;
use crate::geometry::{clamp_or_skip, Point, Rect, Size};

/// Resolve one pointer-move of an active drag into a new crop rectangle.
///
/// `point` is the raw pointer position minus the drag anchor offset, so it
/// is the position the grabbed feature should move to. All quantities are in
/// the same pixel space: `current` and the result are the crop rect in
/// display pixels, `bounds` has been scaled into display pixels, and `image`
/// is the displayed size of the unrotated image.
///
/// Constraint handling, in order:
/// - every moving edge is clamped so width/height stay within `bounds` and
///   inside `[0, image]`; if a clamp range is infeasible that axis is left
///   unchanged for this update
/// - for corner drags with an aspect ratio, the longer axis is then shrunk
///   to restore `width / height == ratio`, moving only the dragged corner's
///   own edges (the opposite sides anchor the lock)
///
/// Edge drags never enforce the aspect ratio; moves never change the size.
/// Out-of-range input clamps silently, it is never an error.
pub fn resolve(
    target: DragTarget,
    point: Point,
    current: &Rect,
    bounds: &SizeBounds,
    aspect_ratio: Option<f64>,
    image: Size,
) -> Rect {
    match target {
        DragTarget::UpperLeft => {
            let mut left = clamp_left(point.x, current, bounds);
            let mut top = clamp_top(point.y, current, bounds);
            if let Some(ratio) = aspect_ratio {
                let width = current.right - left;
                let height = current.bottom - top;
                if width > height * ratio {
                    left = current.right - height * ratio;
                } else if height > width / ratio {
                    top = current.bottom - width / ratio;
                }
            }
            Rect::new(left, top, current.right, current.bottom)
        }
        DragTarget::UpperRight => {
            let mut right = clamp_right(point.x, current, bounds, image);
            let mut top = clamp_top(point.y, current, bounds);
            if let Some(ratio) = aspect_ratio {
                let width = right - current.left;
                let height = current.bottom - top;
                if width > height * ratio {
                    right = current.left + height * ratio;
                } else if height > width / ratio {
                    top = current.bottom - width / ratio;
                }
            }
            Rect::new(current.left, top, right, current.bottom)
        }
        DragTarget::LowerRight => {
            let mut right = clamp_right(point.x, current, bounds, image);
            let mut bottom = clamp_bottom(point.y, current, bounds, image);
            if let Some(ratio) = aspect_ratio {
                let width = right - current.left;
                let height = bottom - current.top;
                if width > height * ratio {
                    right = current.left + height * ratio;
                } else if height > width / ratio {
                    bottom = current.top + width / ratio;
                }
            }
            Rect::new(current.left, current.top, right, bottom)
        }
        DragTarget::LowerLeft => {
            let mut left = clamp_left(point.x, current, bounds);
            let mut bottom = clamp_bottom(point.y, current, bounds, image);
            if let Some(ratio) = aspect_ratio {
                let width = current.right - left;
                let height = bottom - current.top;
                if width > height * ratio {
                    left = current.right - height * ratio;
                } else if height > width / ratio {
                    bottom = current.top + width / ratio;
                }
            }
            Rect::new(left, current.top, current.right, bottom)
        }
        DragTarget::Top => Rect::new(
            current.left,
            clamp_top(point.y, current, bounds),
            current.right,
            current.bottom,
        ),
        DragTarget::Bottom => Rect::new(
            current.left,
            current.top,
            current.right,
            clamp_bottom(point.y, current, bounds, image),
        ),
        DragTarget::Left => Rect::new(
            clamp_left(point.x, current, bounds),
            current.top,
            current.right,
            current.bottom,
        ),
        DragTarget::Right => Rect::new(
            current.left,
            current.top,
            clamp_right(point.x, current, bounds, image),
            current.bottom,
        ),
        DragTarget::Move => {
            let width = current.width();
            let height = current.height();
            let left = clamp_or_skip(point.x, 0.0, image.width - width);
            let top = clamp_or_skip(point.y, 0.0, image.height - height);
            Rect::new(left, top, left + width, top + height)
        }
        DragTarget::None => *current,
    }
}

// The moving-edge clamps. Each range keeps the resulting width or height
// within [minimum, maximum] relative to the fixed opposite edge, and keeps
// the edge inside the image. An empty range (minimum larger than the space
// left) freezes the edge at its current coordinate.

fn clamp_edge(value: f64, lo: f64, hi: f64, frozen: f64) -> f64 {
    if lo > hi {
        frozen
    } else {
        value.clamp(lo, hi)
    }
}

fn clamp_left(x: f64, current: &Rect, bounds: &SizeBounds) -> f64 {
    clamp_edge(
        x,
        (current.right - bounds.maximum).max(0.0),
        current.right - bounds.minimum,
        current.left,
    )
}

fn clamp_top(y: f64, current: &Rect, bounds: &SizeBounds) -> f64 {
    clamp_edge(
        y,
        (current.bottom - bounds.maximum).max(0.0),
        current.bottom - bounds.minimum,
        current.top,
    )
}

fn clamp_right(x: f64, current: &Rect, bounds: &SizeBounds, image: Size) -> f64 {
    clamp_edge(
        x,
        current.left + bounds.minimum,
        (current.left + bounds.maximum).min(image.width),
        current.right,
    )
}

fn clamp_bottom(y: f64, current: &Rect, bounds: &SizeBounds, image: Size) -> f64 {
    clamp_edge(
        y,
        current.top + bounds.minimum,
        (current.top + bounds.maximum).min(image.height),
        current.bottom,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const IMAGE: Size = Size {
        width: 500.0,
        height: 500.0,
    };

    fn free_bounds() -> SizeBounds {
        SizeBounds::new(1.0, f64::INFINITY)
    }

    #[test]
    fn test_upper_left_drag_moves_two_edges() {
        // Full-image crop at 500x500 display, minimum size 100
        let current = Rect::new(0.0, 0.0, 500.0, 500.0);
        let bounds = SizeBounds::new(100.0, f64::INFINITY);

        let result = resolve(
            DragTarget::UpperLeft,
            Point::new(100.0, 100.0),
            &current,
            &bounds,
            None,
            IMAGE,
        );
        assert_eq!(result, Rect::new(100.0, 100.0, 500.0, 500.0));
    }

    #[test]
    fn test_minimum_size_stops_corner_drag() {
        let current = Rect::new(0.0, 0.0, 500.0, 500.0);
        let bounds = SizeBounds::new(100.0, f64::INFINITY);

        // Dragging far past the opposite corner: both axes stop at minimum
        let result = resolve(
            DragTarget::UpperLeft,
            Point::new(600.0, 600.0),
            &current,
            &bounds,
            None,
            IMAGE,
        );
        assert_eq!(result, Rect::new(400.0, 400.0, 500.0, 500.0));
    }

    #[test]
    fn test_maximum_size_stops_corner_drag() {
        let current = Rect::new(200.0, 200.0, 300.0, 300.0);
        let bounds = SizeBounds::new(10.0, 150.0);

        let result = resolve(
            DragTarget::UpperLeft,
            Point::new(-100.0, -100.0),
            &current,
            &bounds,
            None,
            IMAGE,
        );
        assert_eq!(result, Rect::new(150.0, 150.0, 300.0, 300.0));
    }

    #[test]
    fn test_corner_drag_clamps_to_image() {
        let current = Rect::new(100.0, 100.0, 300.0, 300.0);

        let result = resolve(
            DragTarget::LowerRight,
            Point::new(900.0, 900.0),
            &current,
            &free_bounds(),
            None,
            IMAGE,
        );
        assert_eq!(result, Rect::new(100.0, 100.0, 500.0, 500.0));
    }

    #[test]
    fn test_aspect_lock_shrinks_too_wide_result() {
        // Raw resize would produce 300x100; with a square ratio the dragged
        // vertical edge is recomputed from the height
        let current = Rect::new(100.0, 100.0, 300.0, 300.0);

        let result = resolve(
            DragTarget::UpperRight,
            Point::new(400.0, 200.0),
            &current,
            &free_bounds(),
            Some(1.0),
            IMAGE,
        );
        assert_eq!(result, Rect::new(100.0, 200.0, 200.0, 300.0));
        assert_eq!(result.width(), 100.0);
        assert_eq!(result.height(), 100.0);
    }

    #[test]
    fn test_aspect_lock_shrinks_too_tall_result() {
        let current = Rect::new(100.0, 100.0, 300.0, 300.0);

        // Raw resize: width 100, height 300 - too tall for 1:1
        let result = resolve(
            DragTarget::LowerLeft,
            Point::new(200.0, 400.0),
            &current,
            &free_bounds(),
            Some(1.0),
            IMAGE,
        );
        assert_eq!(result, Rect::new(200.0, 100.0, 300.0, 200.0));
    }

    #[test]
    fn test_aspect_lock_anchors_fixed_corner() {
        let current = Rect::new(100.0, 100.0, 300.0, 300.0);

        let result = resolve(
            DragTarget::UpperLeft,
            Point::new(0.0, 200.0),
            &current,
            &free_bounds(),
            Some(2.0),
            IMAGE,
        );
        // The fixed corner (right, bottom) never moves
        assert_eq!(result.right, current.right);
        assert_eq!(result.bottom, current.bottom);
        assert!((result.width() / result.height() - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_edge_drag_ignores_aspect_ratio() {
        let current = Rect::new(100.0, 100.0, 300.0, 300.0);

        let result = resolve(
            DragTarget::Top,
            Point::new(250.0, 150.0),
            &current,
            &free_bounds(),
            Some(1.0),
            IMAGE,
        );
        // Only the top edge moved, ratio is now 200:150
        assert_eq!(result, Rect::new(100.0, 150.0, 300.0, 300.0));
    }

    #[test]
    fn test_edge_drags_each_side() {
        let current = Rect::new(100.0, 100.0, 300.0, 300.0);
        let bounds = free_bounds();

        let top = resolve(DragTarget::Top, Point::new(0.0, 50.0), &current, &bounds, None, IMAGE);
        assert_eq!(top, Rect::new(100.0, 50.0, 300.0, 300.0));

        let bottom = resolve(
            DragTarget::Bottom,
            Point::new(0.0, 450.0),
            &current,
            &bounds,
            None,
            IMAGE,
        );
        assert_eq!(bottom, Rect::new(100.0, 100.0, 300.0, 450.0));

        let left = resolve(DragTarget::Left, Point::new(20.0, 0.0), &current, &bounds, None, IMAGE);
        assert_eq!(left, Rect::new(20.0, 100.0, 300.0, 300.0));

        let right = resolve(
            DragTarget::Right,
            Point::new(480.0, 0.0),
            &current,
            &bounds,
            None,
            IMAGE,
        );
        assert_eq!(right, Rect::new(100.0, 100.0, 480.0, 300.0));
    }

    #[test]
    fn test_edge_drag_respects_bounds() {
        let current = Rect::new(100.0, 100.0, 300.0, 300.0);
        let bounds = SizeBounds::new(50.0, 250.0);

        // Past the opposite edge: stops at minimum height
        let collapsed = resolve(
            DragTarget::Top,
            Point::new(0.0, 400.0),
            &current,
            &bounds,
            None,
            IMAGE,
        );
        assert_eq!(collapsed.top, 250.0);

        // Far above: stops at maximum height
        let grown = resolve(
            DragTarget::Top,
            Point::new(0.0, -100.0),
            &current,
            &bounds,
            None,
            IMAGE,
        );
        assert_eq!(grown.top, 50.0);
    }

    #[test]
    fn test_infeasible_axis_is_frozen() {
        // Minimum size exceeds the space between the fixed edge and the
        // image border: the feasible range is empty, the edge must not move
        let current = Rect::new(0.0, 0.0, 50.0, 500.0);
        let bounds = SizeBounds::new(100.0, f64::INFINITY);

        let result = resolve(
            DragTarget::Left,
            Point::new(30.0, 0.0),
            &current,
            &bounds,
            None,
            IMAGE,
        );
        assert_eq!(result, current);
    }

    #[test]
    fn test_move_translates_without_resizing() {
        let current = Rect::new(0.0, 0.0, 100.0, 100.0);

        let result = resolve(
            DragTarget::Move,
            Point::new(250.0, 150.0),
            &current,
            &free_bounds(),
            None,
            IMAGE,
        );
        assert_eq!(result, Rect::new(250.0, 150.0, 350.0, 250.0));
    }

    #[test]
    fn test_move_clamps_to_image() {
        let current = Rect::new(0.0, 0.0, 100.0, 100.0);

        let result = resolve(
            DragTarget::Move,
            Point::new(450.0, -50.0),
            &current,
            &free_bounds(),
            None,
            IMAGE,
        );
        assert_eq!(result, Rect::new(400.0, 0.0, 500.0, 100.0));
    }

    #[test]
    fn test_move_ignores_aspect_ratio() {
        let current = Rect::new(0.0, 0.0, 200.0, 100.0);

        let result = resolve(
            DragTarget::Move,
            Point::new(50.0, 50.0),
            &current,
            &free_bounds(),
            Some(1.0),
            IMAGE,
        );
        assert_eq!(result.size(), current.size());
    }

    #[test]
    fn test_none_target_is_identity() {
        let current = Rect::new(10.0, 20.0, 30.0, 40.0);
        let result = resolve(
            DragTarget::None,
            Point::new(999.0, 999.0),
            &current,
            &free_bounds(),
            Some(1.0),
            IMAGE,
        );
        assert_eq!(result, current);
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================
