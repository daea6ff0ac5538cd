//! Player Movement
//!
//! Every player moves to a uniformly random cell of its active roaming
//! rectangle. A taken cell is redrawn up to team-size times in total; if the
//! last draw is still taken the player stays where it is.

use rand::Rng;

use super::MatchEngine;
use crate::engine::pitch::Cell;
use crate::engine::types::{PlayerRef, Point, RoamingRect, Side};
use crate::error::{Result, SimError};

/// Uniform cell of `rect`, bounds inclusive.
fn random_cell<R: Rng + ?Sized>(rect: &RoamingRect, rng: &mut R) -> Point {
    Point::new(rng.gen_range(rect.x1()..=rect.x4()), rng.gen_range(rect.y1()..=rect.y4()))
}

impl MatchEngine<'_> {
    /// Seat every player on a free cell of its active rectangle.
    ///
    /// Player positions outlive a match while the pitch does not, so this
    /// runs once on the fresh grid before the first kickoff.
    pub(crate) fn deploy(&mut self) -> Result<()> {
        for side in [Side::Home, Side::Away] {
            let max_tries = self.team(side).size();
            for index in 0..self.team(side).size() {
                let rect = *self.roaming_of(side, index)?;

                let mut seat = None;
                for _ in 0..max_tries {
                    let candidate = random_cell(&rect, &mut self.rng);
                    if self.pitch.is_free(candidate)? {
                        seat = Some(candidate);
                        break;
                    }
                }
                if seat.is_none() {
                    for candidate in rect.cells() {
                        if self.pitch.is_free(candidate)? {
                            seat = Some(candidate);
                            break;
                        }
                    }
                }

                let team = self.team(side);
                let seat = seat.ok_or_else(|| SimError::RoamingSaturated {
                    team: team.name().to_string(),
                    player: index as u32 + 1,
                })?;
                self.pitch.place(seat, Cell::Occupied(PlayerRef::new(side, index)))?;
                self.player_mut(PlayerRef::new(side, index))?.set_position(seat)?;
            }
        }
        Ok(())
    }

    /// Give every player of team1, then team2, one repositioning attempt.
    pub(crate) fn move_players(&mut self) -> Result<()> {
        self.move_team(Side::Home)?;
        self.move_team(Side::Away)
    }

    fn move_team(&mut self, side: Side) -> Result<()> {
        let max_tries = self.team(side).size();
        for index in 0..max_tries {
            let rect = *self.roaming_of(side, index)?;

            let mut candidate = random_cell(&rect, &mut self.rng);
            let mut attempt = 1;
            while !self.pitch.is_free(candidate)? && attempt < max_tries {
                candidate = random_cell(&rect, &mut self.rng);
                attempt += 1;
            }

            self.try_move(PlayerRef::new(side, index), candidate)?;
        }
        Ok(())
    }

    /// Move `who` to `target` if nobody stands there.
    fn try_move(&mut self, who: PlayerRef, target: Point) -> Result<()> {
        if !self.pitch.is_free(target)? {
            return Ok(());
        }
        let current = self.player(who)?.position();
        self.pitch.place(current, Cell::Empty)?;
        self.pitch.place(target, Cell::Occupied(who))?;
        self.player_mut(who)?.set_position(target)
    }

    fn roaming_of(&self, side: Side, index: usize) -> Result<&RoamingRect> {
        Ok(self.player(PlayerRef::new(side, index))?.roaming())
    }
}
