//! Integer pitch coordinates
//!
//! The pitch is a `width × length` grid with `(0, 0)` at the bottom-left
//! and `(width-1, length-1)` at the top-right. X runs across the pitch,
//! Y runs from goal 1 (`y = 0`) to goal 2 (`y = length-1`).

use serde::{Deserialize, Serialize};

/// A cell on the pitch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Squared Euclidean distance. Exact, so ties compare equal.
    #[inline]
    pub fn distance_sq(self, other: Point) -> i64 {
        let dx = i64::from(other.x) - i64::from(self.x);
        let dy = i64::from(other.y) - i64::from(self.y);
        dx * dx + dy * dy
    }

    /// Euclidean distance.
    #[inline]
    pub fn distance(self, other: Point) -> f64 {
        (self.distance_sq(other) as f64).sqrt()
    }

    /// True if the point lies in `[0, width) × [0, length)`.
    #[inline]
    pub fn within(self, width: i32, length: i32) -> bool {
        0 <= self.x && self.x < width && 0 <= self.y && self.y < length
    }

    /// Snap each coordinate to the nearest in-bounds edge.
    #[inline]
    pub fn clamped(self, width: i32, length: i32) -> Point {
        Point::new(self.x.clamp(0, width - 1), self.y.clamp(0, length - 1))
    }

    /// Point reflection through the pitch centre.
    #[inline]
    pub fn mirrored(self, width: i32, length: i32) -> Point {
        Point::new((width - 1) - self.x, (length - 1) - self.y)
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Axis-aligned roaming rectangle.
///
/// Stored as its bottom-left `(x1, y1)` and top-right `(x4, y4)` corners;
/// the bottom-right `(x2, y2)` and top-left `(x3, y3)` corners are derived,
/// so `x1 = x3`, `x2 = x4`, `y1 = y2`, `y3 = y4` hold by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoamingRect {
    bottom_left: Point,
    top_right: Point,
}

impl RoamingRect {
    /// Build from two corners. Returns `None` unless `bottom_left` really is
    /// bottom-left of `top_right`.
    pub fn new(bottom_left: Point, top_right: Point) -> Option<Self> {
        if bottom_left.x > top_right.x || bottom_left.y > top_right.y {
            return None;
        }
        Some(Self { bottom_left, top_right })
    }

    /// Build from corners the caller has already ordered.
    pub(crate) fn spanning(bottom_left: Point, top_right: Point) -> Self {
        debug_assert!(bottom_left.x <= top_right.x && bottom_left.y <= top_right.y);
        Self { bottom_left, top_right }
    }

    pub fn x1(&self) -> i32 {
        self.bottom_left.x
    }

    pub fn y1(&self) -> i32 {
        self.bottom_left.y
    }

    pub fn x4(&self) -> i32 {
        self.top_right.x
    }

    pub fn y4(&self) -> i32 {
        self.top_right.y
    }

    pub fn bottom_left(&self) -> Point {
        self.bottom_left
    }

    pub fn top_right(&self) -> Point {
        self.top_right
    }

    /// `[bottom-left, bottom-right, top-left, top-right]`
    pub fn corners(&self) -> [Point; 4] {
        let (x1, y1, x4, y4) = (self.x1(), self.y1(), self.x4(), self.y4());
        [Point::new(x1, y1), Point::new(x4, y1), Point::new(x1, y4), Point::new(x4, y4)]
    }

    /// Horizontal extent `x4 - x1`.
    pub fn width(&self) -> i32 {
        self.x4() - self.x1()
    }

    /// Vertical extent `y4 - y1`.
    pub fn length(&self) -> i32 {
        self.y4() - self.y1()
    }

    /// Edge-length area `(x4 - x1) * (y4 - y1)`; the unit the area caps use.
    pub fn area(&self) -> i64 {
        i64::from(self.width()) * i64::from(self.length())
    }

    /// Number of cells a player can stand on (bounds are inclusive).
    pub fn cell_count(&self) -> i64 {
        (i64::from(self.width()) + 1) * (i64::from(self.length()) + 1)
    }

    pub fn contains(&self, p: Point) -> bool {
        self.x1() <= p.x && p.x <= self.x4() && self.y1() <= p.y && p.y <= self.y4()
    }

    /// True if all four corners lie on a `width × length` pitch.
    pub fn fits_within(&self, width: i32, length: i32) -> bool {
        self.corners().iter().all(|c| c.within(width, length))
    }

    /// Mirror image through the pitch centre, re-ordered so the result is
    /// again expressed bottom-left / top-right in absolute coordinates.
    pub fn mirrored(&self, width: i32, length: i32) -> RoamingRect {
        // The reflected top-right becomes the new bottom-left.
        RoamingRect {
            bottom_left: self.top_right.mirrored(width, length),
            top_right: self.bottom_left.mirrored(width, length),
        }
    }

    /// Row-major iterator over every cell of the rectangle.
    pub fn cells(&self) -> impl Iterator<Item = Point> + '_ {
        (self.y1()..=self.y4()).flat_map(move |y| (self.x1()..=self.x4()).map(move |x| Point::new(x, y)))
    }
}
