//! Engine Module
//!
//! Pitch geometry, roaming allocation and the match loop.

pub mod ball;
pub mod match_sim;
pub mod pitch;
pub mod roaming;
pub mod types;

pub use ball::Ball;
pub use match_sim::{KickLengths, KickType, MatchEngine, MatchPlan, TickOutcome};
pub use pitch::{Cell, GoalMouth, Pitch, MAX_PITCH_CELLS};
pub use roaming::{RoamingAllocator, RoamingPair, GOALKEEPER_ID};
pub use types::{PlayerRef, Point, RoamingRect, Side};
