//! pitch.rs
//!
//! Occupancy grid for one match:
//! - `width × length` cells, stored row-major
//! - each cell is `Empty` or `Occupied(PlayerRef)`
//! - two goal mouths on the `y = 0` and `y = length-1` lines
//!
//! The ball is not an occupant; its position lives on [`Ball`](super::Ball).

use serde::{Deserialize, Serialize};

use crate::engine::types::{PlayerRef, Point, Side};
use crate::error::{Result, SimError};

/// Contents of one pitch cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Occupied(PlayerRef),
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub fn occupant(&self) -> Option<PlayerRef> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(player) => Some(*player),
        }
    }
}

/// A goal: two posts on a goal line.
///
/// The ball scores only strictly between the posts and exactly on the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalMouth {
    pub low_post: i32,
    pub high_post: i32,
    pub line_y: i32,
}

impl GoalMouth {
    pub fn contains(&self, ball: Point) -> bool {
        self.low_post < ball.x && ball.x < self.high_post && ball.y == self.line_y
    }

    /// Post positions as points `[low, high]`.
    pub fn posts(&self) -> [Point; 2] {
        [Point::new(self.low_post, self.line_y), Point::new(self.high_post, self.line_y)]
    }
}

/// Largest grid, in cells, a pitch may have.
pub const MAX_PITCH_CELLS: i64 = 1 << 24;

/// Both dimensions positive and the grid no larger than [`MAX_PITCH_CELLS`].
pub fn check_dimensions(width: i32, length: i32) -> Result<()> {
    if width <= 0 || length <= 0 || i64::from(width) * i64::from(length) > MAX_PITCH_CELLS {
        return Err(SimError::InvalidPitch { width, length });
    }
    Ok(())
}

#[derive(Debug, Clone, Serialize)]
pub struct Pitch {
    width: i32,
    length: i32,
    cells: Vec<Cell>, // len = width*length
    goal1: GoalMouth,
    goal2: GoalMouth,
}

impl Pitch {
    pub fn new(width: i32, length: i32) -> Result<Self> {
        check_dimensions(width, length)?;

        let mid_width = width / 2;
        let half_goal_width = width / 16;
        let low_post = mid_width - half_goal_width;
        let high_post = mid_width + half_goal_width;

        let len = (width as usize) * (length as usize);
        Ok(Self {
            width,
            length,
            cells: vec![Cell::Empty; len],
            goal1: GoalMouth { low_post, high_post, line_y: 0 },
            goal2: GoalMouth { low_post, high_post, line_y: length - 1 },
        })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn length(&self) -> i32 {
        self.length
    }

    pub fn center(&self) -> Point {
        Point::new(self.width / 2, self.length / 2)
    }

    pub fn contains(&self, p: Point) -> bool {
        p.within(self.width, self.length)
    }

    pub fn goal(&self, side: Side) -> &GoalMouth {
        match side {
            Side::Home => &self.goal1,
            Side::Away => &self.goal2,
        }
    }

    #[inline]
    fn idx(&self, p: Point) -> Result<usize> {
        if !self.contains(p) {
            return Err(SimError::OutOfBounds {
                x: p.x,
                y: p.y,
                width: self.width,
                length: self.length,
            });
        }
        Ok((p.y as usize) * (self.width as usize) + (p.x as usize))
    }

    /// True iff nobody stands on `p`.
    pub fn is_free(&self, p: Point) -> Result<bool> {
        Ok(self.occupant_at(p)?.is_empty())
    }

    pub fn occupant_at(&self, p: Point) -> Result<Cell> {
        let i = self.idx(p)?;
        Ok(self.cells[i])
    }

    /// Unconditional set; `Cell::Empty` vacates.
    pub fn place(&mut self, p: Point, cell: Cell) -> Result<()> {
        let i = self.idx(p)?;
        self.cells[i] = cell;
        Ok(())
    }

    /// Which goal (if any) the ball is in. Literal goal-line equality: a
    /// kick that carries past the line and is clamped back onto it counts,
    /// a ball one cell short does not.
    pub fn goal_side(&self, ball: Point) -> Option<Side> {
        if self.goal1.contains(ball) {
            Some(Side::Home)
        } else if self.goal2.contains(ball) {
            Some(Side::Away)
        } else {
            None
        }
    }

    /// All occupied cells with their occupants, row-major.
    pub fn occupied(&self) -> impl Iterator<Item = (Point, PlayerRef)> + '_ {
        let width = self.width as usize;
        self.cells.iter().enumerate().filter_map(move |(i, cell)| {
            cell.occupant()
                .map(|player| (Point::new((i % width) as i32, (i / width) as i32), player))
        })
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }
}
