use crate::units::Px;

/// A rectangle, specified by two opposite corners. `(x1, y1)` is the
/// top-left corner in image coordinates (y grows downward).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Rect {
    /// The x-coordinate of the top-left corner.
    pub x1: Px,
    /// The y-coordinate of the top-left corner.
    pub y1: Px,
    /// The x-coordinate of the bottom-right corner.
    pub x2: Px,
    /// The y-coordinate of the bottom-right corner.
    pub y2: Px,
}

impl Rect {
    /// Create a rectangle from its top-left corner and a size
    pub fn from_corner_size(x: Px, y: Px, width: Px, height: Px) -> Rect {
        Rect {
            x1: x,
            y1: y,
            x2: x + width,
            y2: y + height,
        }
    }

    /// Create a rectangle of the given size centered on `(cx, cy)`
    pub fn centered_at(cx: Px, cy: Px, width: Px, height: Px) -> Rect {
        Rect {
            x1: cx - width / 2.0,
            y1: cy - height / 2.0,
            x2: cx + width / 2.0,
            y2: cy + height / 2.0,
        }
    }

    pub fn width(&self) -> Px {
        self.x2 - self.x1
    }

    pub fn height(&self) -> Px {
        self.y2 - self.y1
    }
}
