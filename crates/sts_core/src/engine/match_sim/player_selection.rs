//! Possession
//!
//! Each tick the ball goes to whichever team's nearest player is strictly
//! closer; an exact tie is settled by a fair coin.

use rand::Rng;
use tracing::trace;

use super::MatchEngine;
use crate::engine::types::{PlayerRef, Point, Side};
use crate::error::{Result, SimError};
use crate::models::Team;

/// Roster index of the player nearest to `ball`, first minimum in roster
/// order, together with its squared distance.
pub fn nearest_player(team: &Team, ball: Point) -> Option<(usize, i64)> {
    let mut best: Option<(usize, i64)> = None;
    for (index, player) in team.players().iter().enumerate() {
        let d = player.position().distance_sq(ball);
        match best {
            Some((_, best_d)) if d >= best_d => {}
            _ => best = Some((index, d)),
        }
    }
    best
}

impl MatchEngine<'_> {
    /// Decide who touches the ball this tick.
    pub(crate) fn select_possessor(&mut self) -> Result<PlayerRef> {
        let ball = self.ball.position;
        let (home_index, home_d) = self.nearest(Side::Home, ball)?;
        let (away_index, away_d) = self.nearest(Side::Away, ball)?;

        let possessor = if home_d < away_d {
            PlayerRef::new(Side::Home, home_index)
        } else if away_d < home_d {
            PlayerRef::new(Side::Away, away_index)
        } else if self.rng.gen_range(0..2) == 0 {
            PlayerRef::new(Side::Home, home_index)
        } else {
            PlayerRef::new(Side::Away, away_index)
        };

        trace!(tick = self.tick, side = ?possessor.side, index = possessor.index, "possession");
        Ok(possessor)
    }

    fn nearest(&self, side: Side, ball: Point) -> Result<(usize, i64)> {
        let team = self.team(side);
        nearest_player(team, ball).ok_or_else(|| SimError::EmptyTeam { team: team.name().to_string() })
    }
}
