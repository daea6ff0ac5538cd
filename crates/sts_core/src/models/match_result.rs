//! Match Result Data Structures
//!
//! Output of one [`MatchEngine`](crate::engine::MatchEngine) run. Per-player
//! counters and touch histories stay on the teams; this is the match-level
//! summary the tournament consumes.

use serde::{Deserialize, Serialize};

use crate::engine::types::Side;

/// One goal, as seen at the tick it was scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalEvent {
    /// Live tick (0-based) on which the ball crossed the line
    pub tick: u32,
    /// Side credited with the goal
    pub scoring_side: Side,
    /// Team of the player who kicked the ball
    pub team_id: char,
    pub player_id: u32,
    /// True when the kicker put the ball into their own goal
    pub own_goal: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub home_team: String,
    pub away_team: String,
    pub home_score: u32,
    pub away_score: u32,
    pub ticks_played: u32,
    pub seed: u64,
    pub goals: Vec<GoalEvent>,
}

impl MatchResult {
    pub fn score(&self) -> (u32, u32) {
        (self.home_score, self.away_score)
    }

    /// Winning side, `None` for a draw.
    pub fn winner(&self) -> Option<Side> {
        match self.home_score.cmp(&self.away_score) {
            std::cmp::Ordering::Greater => Some(Side::Home),
            std::cmp::Ordering::Less => Some(Side::Away),
            std::cmp::Ordering::Equal => None,
        }
    }

    pub fn own_goals(&self) -> usize {
        self.goals.iter().filter(|g| g.own_goal).count()
    }
}
