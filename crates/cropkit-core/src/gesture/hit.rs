//! Pointer hit-testing against the crop rectangle's handles.

use crate::geometry::{Point, Rect};

/// What a pointer-down gesture grabbed.
///
/// A closed enum rather than nested options so every consumer has to handle
/// all ten cases explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragTarget {
    UpperLeft,
    UpperRight,
    LowerRight,
    LowerLeft,
    Top,
    Right,
    Bottom,
    Left,
    Move,
    #[default]
    None,
}

impl DragTarget {
    /// One of the four corner handles.
    pub fn is_corner(self) -> bool {
        matches!(
            self,
            DragTarget::UpperLeft
                | DragTarget::UpperRight
                | DragTarget::LowerRight
                | DragTarget::LowerLeft
        )
    }

    /// One of the four edge handles.
    pub fn is_edge(self) -> bool {
        matches!(
            self,
            DragTarget::Top | DragTarget::Right | DragTarget::Bottom | DragTarget::Left
        )
    }

    /// Any target that changes the rectangle's size.
    pub fn is_resize(self) -> bool {
        self.is_corner() || self.is_edge()
    }
}

/// The four on-screen corner positions of the crop rectangle.
///
/// Supplied by the caller so the hit-tester stays independent of how the
/// rectangle was placed on screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CornerPositions {
    pub upper_left: Point,
    pub upper_right: Point,
    pub lower_right: Point,
    pub lower_left: Point,
}

impl CornerPositions {
    pub fn from_rect(rect: &Rect) -> Self {
        Self {
            upper_left: rect.top_left(),
            upper_right: rect.top_right(),
            lower_right: rect.bottom_right(),
            lower_left: rect.bottom_left(),
        }
    }

    pub fn top_midpoint(&self) -> Point {
        midpoint(self.upper_left, self.upper_right)
    }

    pub fn bottom_midpoint(&self) -> Point {
        midpoint(self.lower_left, self.lower_right)
    }

    pub fn left_midpoint(&self) -> Point {
        midpoint(self.upper_left, self.lower_left)
    }

    pub fn right_midpoint(&self) -> Point {
        midpoint(self.upper_right, self.lower_right)
    }
}

fn midpoint(a: Point, b: Point) -> Point {
    Point::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0)
}

/// An active drag: the grabbed target plus the pointer's offset from the
/// dragged feature at press time.
///
/// Subtracting the offset from later pointer positions keeps the grabbed
/// corner, edge midpoint, or rectangle origin under the finger instead of
/// snapping it to the pointer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragAnchor {
    pub target: DragTarget,
    pub offset: Point,
}

/// Classify a pointer position into a drag target.
///
/// Priority order: corners first (they are the smallest targets and must win
/// over the wider edge and interior regions), then edges, then the
/// `always_move` override, then the rectangle interior. Corners are tested
/// in a fixed order so overlapping zones resolve deterministically:
/// UpperLeft, UpperRight, LowerRight, LowerLeft.
///
/// Each corner zone is a square of side `touch_size` centered on the corner.
/// Each edge zone extends `touch_size / 2` from the edge line and spans
/// strictly between the adjacent corners.
pub fn classify(
    pointer: Point,
    corners: &CornerPositions,
    touch_size: f64,
    crop: &Rect,
    always_move: bool,
) -> DragTarget {
    let half = touch_size / 2.0;

    let corner_zones = [
        (corners.upper_left, DragTarget::UpperLeft),
        (corners.upper_right, DragTarget::UpperRight),
        (corners.lower_right, DragTarget::LowerRight),
        (corners.lower_left, DragTarget::LowerLeft),
    ];
    for (position, target) in corner_zones {
        if (pointer.x - position.x).abs() <= half && (pointer.y - position.y).abs() <= half {
            return target;
        }
    }

    if (pointer.y - corners.upper_left.y).abs() <= half
        && pointer.x > corners.upper_left.x
        && pointer.x < corners.upper_right.x
    {
        return DragTarget::Top;
    }
    if (pointer.y - corners.lower_left.y).abs() <= half
        && pointer.x > corners.lower_left.x
        && pointer.x < corners.lower_right.x
    {
        return DragTarget::Bottom;
    }
    if (pointer.x - corners.upper_left.x).abs() <= half
        && pointer.y > corners.upper_left.y
        && pointer.y < corners.lower_left.y
    {
        return DragTarget::Left;
    }
    if (pointer.x - corners.upper_right.x).abs() <= half
        && pointer.y > corners.upper_right.y
        && pointer.y < corners.lower_right.y
    {
        return DragTarget::Right;
    }

    if always_move {
        return DragTarget::Move;
    }
    if crop.contains(pointer) {
        return DragTarget::Move;
    }

    DragTarget::None
}

/// Build the drag anchor for a freshly classified target.
///
/// The reference point is the grabbed corner, the midpoint of the grabbed
/// edge, or the rectangle's top-left for a move. `DragTarget::None` yields
/// no anchor.
pub fn anchor_for(
    target: DragTarget,
    pointer: Point,
    corners: &CornerPositions,
    crop: &Rect,
) -> Option<DragAnchor> {
    let reference = match target {
        DragTarget::UpperLeft => corners.upper_left,
        DragTarget::UpperRight => corners.upper_right,
        DragTarget::LowerRight => corners.lower_right,
        DragTarget::LowerLeft => corners.lower_left,
        DragTarget::Top => corners.top_midpoint(),
        DragTarget::Bottom => corners.bottom_midpoint(),
        DragTarget::Left => corners.left_midpoint(),
        DragTarget::Right => corners.right_midpoint(),
        DragTarget::Move => crop.top_left(),
        DragTarget::None => return None,
    };

    Some(DragAnchor {
        target,
        offset: pointer - reference,
    })
}
