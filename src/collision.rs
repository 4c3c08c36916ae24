use crate::{Pt, Rect, Size};

/// Space kept between any two words, and between words and the canvas edge
pub const DEFAULT_BUFFER: Pt = Pt(10.0);

/// The boxes of every word placed so far in the current round.
///
/// Queries pad the stored boxes by the buffer margin rather than the box being
/// tested, so a box that passes [CollisionIndex::collides_rect] keeps at least
/// `buffer` points of space to every other box.
#[derive(Debug, Clone)]
pub struct CollisionIndex {
    boxes: Vec<Rect>,
    buffer: Pt,
}

impl Default for CollisionIndex {
    fn default() -> Self {
        CollisionIndex::new(DEFAULT_BUFFER)
    }
}

impl CollisionIndex {
    pub fn new(buffer: Pt) -> CollisionIndex {
        CollisionIndex {
            boxes: Vec::new(),
            buffer,
        }
    }

    pub fn buffer(&self) -> Pt {
        self.buffer
    }

    pub fn clear(&mut self) {
        self.boxes.clear();
    }

    pub fn add(&mut self, rect: Rect) {
        self.boxes.push(rect);
    }

    /// Whether `rect` overlaps any stored box grown by the buffer
    pub fn collides_rect(&self, rect: &Rect) -> bool {
        self.boxes
            .iter()
            .any(|placed| rect.overlaps(&placed.padded(self.buffer)))
    }

    /// Whether the point lies inside any stored box grown by the buffer. This is the
    /// cheap pre-check done before a candidate's text is measured.
    pub fn collides_point(&self, x: Pt, y: Pt) -> bool {
        self.boxes
            .iter()
            .any(|placed| placed.padded(self.buffer).contains_point(x, y))
    }

    /// Whether `rect` reaches into the buffer margin along any edge of a canvas of
    /// the given size
    pub fn outside_borders(&self, rect: &Rect, canvas: Size) -> bool {
        let usable = Rect::canvas(canvas).padded(-self.buffer);
        !rect.is_within(&usable)
    }

    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Rect> {
        self.boxes.iter()
    }
}
