use crate::units::*;

/// Width and height of a canvas or of a measured piece of text
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Size {
    pub width: Pt,
    pub height: Pt,
}

impl Size {
    pub fn new<W: Into<Pt>, H: Into<Pt>>(width: W, height: H) -> Size {
        Size {
            width: width.into(),
            height: height.into(),
        }
    }

    /// The area covered, in square points
    pub fn area(&self) -> f32 {
        self.width * self.height
    }

    /// The center point of a canvas of this size
    pub fn center(&self) -> (Pt, Pt) {
        (self.width / 2.0, self.height / 2.0)
    }

    /// Whether both dimensions are finite and strictly positive
    pub fn is_positive(&self) -> bool {
        self.width.is_finite()
            && self.height.is_finite()
            && self.width > Pt(0.0)
            && self.height > Pt(0.0)
    }

    /// `width / max(width, height)` and `height / max(width, height)`. Candidate
    /// generators use these to stretch their pattern to the canvas aspect ratio.
    pub fn aspect_ratios(&self) -> (f32, f32) {
        let biggest = self.width.max(self.height);
        (self.width / biggest, self.height / biggest)
    }
}

impl From<(Pt, Pt)> for Size {
    fn from((width, height): (Pt, Pt)) -> Self {
        Size { width, height }
    }
}

/// An axis-aligned rectangle, specified by two opposite corners.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Rect {
    /// The x-coordinate of the left edge
    pub x1: Pt,
    /// The y-coordinate of the top edge
    pub y1: Pt,
    /// The x-coordinate of the right edge
    pub x2: Pt,
    /// The y-coordinate of the bottom edge
    pub y2: Pt,
}

impl Rect {
    /// The rectangle of the given size whose center sits at `(x, y)`
    pub fn centered(x: Pt, y: Pt, size: Size) -> Rect {
        let half_width = size.width / 2.0;
        let half_height = size.height / 2.0;
        Rect {
            x1: x - half_width,
            y1: y - half_height,
            x2: x + half_width,
            y2: y + half_height,
        }
    }

    /// The rectangle spanning a whole canvas, with its top-left corner at the origin
    pub fn canvas(size: Size) -> Rect {
        Rect {
            x1: Pt(0.0),
            y1: Pt(0.0),
            x2: size.width,
            y2: size.height,
        }
    }

    pub fn width(&self) -> Pt {
        self.x2 - self.x1
    }

    pub fn height(&self) -> Pt {
        self.y2 - self.y1
    }

    pub fn center(&self) -> (Pt, Pt) {
        ((self.x1 + self.x2) / 2.0, (self.y1 + self.y2) / 2.0)
    }

    /// Grow the rectangle outwards by `amount` on every side. A negative amount shrinks it.
    pub fn padded(&self, amount: Pt) -> Rect {
        Rect {
            x1: self.x1 - amount,
            y1: self.y1 - amount,
            x2: self.x2 + amount,
            y2: self.y2 + amount,
        }
    }

    /// Open-interval overlap: rectangles that merely share an edge do not overlap
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x1 < other.x2 && self.x2 > other.x1 && self.y1 < other.y2 && self.y2 > other.y1
    }

    /// Whether the point lies strictly inside the rectangle
    pub fn contains_point(&self, x: Pt, y: Pt) -> bool {
        x > self.x1 && x < self.x2 && y > self.y1 && y < self.y2
    }

    /// Whether this rectangle lies entirely within `outer` (edges may touch)
    pub fn is_within(&self, outer: &Rect) -> bool {
        self.x1 >= outer.x1 && self.x2 <= outer.x2 && self.y1 >= outer.y1 && self.y2 <= outer.y2
    }

    /// Shift the rectangle by `(dx, dy)`
    pub fn translated(&self, dx: Pt, dy: Pt) -> Rect {
        Rect {
            x1: self.x1 + dx,
            y1: self.y1 + dy,
            x2: self.x2 + dx,
            y2: self.y2 + dy,
        }
    }
}
