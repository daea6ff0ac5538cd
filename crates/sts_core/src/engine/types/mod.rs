//! Engine Types
//!
//! Value types shared by the pitch, the roaming allocator and the match engine.

pub mod coord;
pub use coord::{Point, RoamingRect};

use serde::{Deserialize, Serialize};

/// One end of the pitch, and the team defending it in the current fixture.
///
/// `Home` is goal 1 on the `y = 0` line (team1 of a match, attacking towards
/// increasing Y); `Away` is goal 2 on the `y = length-1` line (team2).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Home,
    Away,
}

impl Side {
    /// Goal number as used by the attribute files and score tables.
    pub fn goal_number(self) -> u8 {
        match self {
            Side::Home => 1,
            Side::Away => 2,
        }
    }

    pub fn opponent(self) -> Side {
        match self {
            Side::Home => Side::Away,
            Side::Away => Side::Home,
        }
    }

    /// Sign of a "forward" kick along Y for a team defending this goal.
    pub fn direction(self) -> i32 {
        match self {
            Side::Home => 1,
            Side::Away => -1,
        }
    }
}

/// Non-owning reference to a player on the pitch: the match side of its
/// team plus its roster index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerRef {
    pub side: Side,
    pub index: usize,
}

impl PlayerRef {
    pub const fn new(side: Side, index: usize) -> Self {
        Self { side, index }
    }
}
