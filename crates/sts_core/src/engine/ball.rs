//! Ball state
//!
//! The ball has no velocity or height: kicks teleport it and possession
//! snaps it onto the possessing player's cell.

use crate::engine::types::Point;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ball {
    pub position: Point,
}

impl Ball {
    pub fn new(position: Point) -> Self {
        Self { position }
    }

    /// Move the ball to `target`, snapping out-of-range coordinates onto the
    /// nearest pitch edge.
    pub fn kick_to(&mut self, target: Point, width: i32, length: i32) {
        self.position = target.clamped(width, length);
    }
}
