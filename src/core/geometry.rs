//! Abstract board coordinates.
//!
//! The engine never draws anything. It only needs enough geometry to
//! hit-test input positions and to pick the pile a dragged card overlaps
//! most. Renderers scale these coordinates however they like.

use serde::{Deserialize, Serialize};

/// A point in board coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub const fn add(self, other: Point) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }

    #[must_use]
    pub const fn sub(self, other: Point) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }
}

/// An axis-aligned rectangle, `min` inclusive and `max` exclusive.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub min: Point,
    pub max: Point,
}

impl Rect {
    #[must_use]
    pub const fn new(min: Point, max: Point) -> Self {
        Self { min, max }
    }

    /// Rectangle of the given size with its top left corner at `origin`.
    #[must_use]
    pub const fn sized(origin: Point, width: i32, height: i32) -> Self {
        Self::new(origin, Point::new(origin.x + width, origin.y + height))
    }

    #[must_use]
    pub const fn width(&self) -> i32 {
        self.max.x - self.min.x
    }

    #[must_use]
    pub const fn height(&self) -> i32 {
        self.max.y - self.min.y
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.min.x >= self.max.x || self.min.y >= self.max.y
    }

    #[must_use]
    pub const fn contains(&self, pt: Point) -> bool {
        pt.x >= self.min.x && pt.x < self.max.x && pt.y >= self.min.y && pt.y < self.max.y
    }

    /// Overlapping region; empty (zero area) when the rectangles are disjoint.
    #[must_use]
    pub fn intersect(&self, other: &Rect) -> Rect {
        let r = Rect::new(
            Point::new(self.min.x.max(other.min.x), self.min.y.max(other.min.y)),
            Point::new(self.max.x.min(other.max.x), self.max.y.min(other.max.y)),
        );
        if r.is_empty() {
            Rect::default()
        } else {
            r
        }
    }

    /// Smallest rectangle holding both.
    #[must_use]
    pub fn union(&self, other: &Rect) -> Rect {
        Rect::new(
            Point::new(self.min.x.min(other.min.x), self.min.y.min(other.min.y)),
            Point::new(self.max.x.max(other.max.x), self.max.y.max(other.max.y)),
        )
    }

    #[must_use]
    pub fn area(&self) -> i32 {
        if self.is_empty() {
            0
        } else {
            self.width() * self.height()
        }
    }
}

/// Board dimensions used for pile placement and fanning.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    pub card_width: i32,
    pub card_height: i32,
    /// Horizontal gap between pile slots.
    pub padding_x: i32,
    /// Vertical gap between pile slots.
    pub padding_y: i32,
    pub left_margin: i32,
    pub top_margin: i32,
    /// Fraction of the card height a face up card overlaps the next one.
    pub face_up_fan: f32,
    /// Fraction of the card height a face down card overlaps the next one.
    pub face_down_fan: f32,
}

impl Default for Geometry {
    fn default() -> Self {
        Self {
            card_width: 90,
            card_height: 122,
            padding_x: 9,
            padding_y: 13,
            left_margin: 54,
            top_margin: 88,
            face_up_fan: 0.28,
            face_down_fan: 0.14,
        }
    }
}

impl Geometry {
    /// Board position of the top left corner of a pile slot.
    #[must_use]
    pub fn slot_origin(&self, slot: Point) -> Point {
        Point::new(
            self.left_margin + slot.x * (self.card_width + self.padding_x),
            self.top_margin + slot.y * (self.card_height + self.padding_y),
        )
    }

    /// Rectangle a single card occupies at `pos`.
    #[must_use]
    pub fn card_rect(&self, pos: Point) -> Rect {
        Rect::sized(pos, self.card_width, self.card_height)
    }

    #[must_use]
    pub fn fan_down_delta(&self, prone: bool) -> i32 {
        let factor = if prone { self.face_down_fan } else { self.face_up_fan };
        (self.card_height as f32 * factor) as i32
    }

    #[must_use]
    pub fn fan_across_delta(&self) -> i32 {
        self.card_width / 4
    }
}
