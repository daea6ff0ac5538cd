use rand::Rng;
use serde::{Deserialize, Serialize};

use super::Player;
use crate::engine::roaming::RoamingAllocator;
use crate::engine::types::{Point, Side};
use crate::error::{Result, SimError};

/// A tournament entry: name, single-character id and roster.
///
/// Teams are built once per tournament and reused across fixtures. Player
/// counters accumulate across every match; only the defended side changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    name: String,
    id: char,
    players: Vec<Player>,
    side: Side,
    pitch_width: i32,
    pitch_length: i32,
}

impl Team {
    /// Build a team and allocate every player's roaming rectangles.
    ///
    /// `custom` lists `[bottom_left, top_right]` pairs in roster order, entry 0
    /// being the goalkeeper. Players beyond the end of the list get random
    /// regions; a list longer than the roster is rejected.
    pub fn new<R: Rng + ?Sized>(
        name: &str,
        id: char,
        size: usize,
        pitch_width: i32,
        pitch_length: i32,
        custom: Option<&[[Point; 2]]>,
        rng: &mut R,
    ) -> Result<Self> {
        if name.trim().is_empty() {
            return Err(SimError::EmptyTeamName);
        }
        if size == 0 {
            return Err(SimError::EmptyTeam { team: name.to_string() });
        }
        let custom = custom.unwrap_or(&[]);
        if custom.len() > size {
            return Err(SimError::TooManyRegions {
                team: name.to_string(),
                regions: custom.len(),
                players: size,
            });
        }

        let allocator = RoamingAllocator::new(pitch_width, pitch_length, size)?;
        let mut players = Vec::with_capacity(size);
        for index in 0..size {
            let player_id = index as u32 + 1;
            let roaming = allocator.allocate(player_id, custom.get(index).copied(), rng)?;
            players.push(Player::new(id, player_id, roaming, pitch_width, pitch_length));
        }

        Ok(Self {
            name: name.to_string(),
            id,
            players,
            side: Side::Home,
            pitch_width,
            pitch_length,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn id(&self) -> char {
        self.id
    }

    pub fn size(&self) -> usize {
        self.players.len()
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn players_mut(&mut self) -> &mut [Player] {
        &mut self.players
    }

    pub fn player(&self, index: usize) -> Option<&Player> {
        self.players.get(index)
    }

    pub fn player_mut(&mut self, index: usize) -> Option<&mut Player> {
        self.players.get_mut(index)
    }

    pub fn pitch_dimensions(&self) -> (i32, i32) {
        (self.pitch_width, self.pitch_length)
    }

    /// Defend `side` for the next fixture and switch every player to the
    /// matching rectangle.
    pub fn assign_side(&mut self, side: Side) {
        self.side = side;
        for player in &mut self.players {
            player.set_roaming_side(side);
        }
    }

    /// Check every active rectangle against its area cap: the penalty box
    /// for the goalkeeper, the equal-division share for everyone else.
    pub fn roaming_regions_ok(&self) -> Result<()> {
        let allocator = RoamingAllocator::new(self.pitch_width, self.pitch_length, self.size())?;
        for player in &self.players {
            let max = if player.is_goalkeeper() {
                allocator.penalty_box_area()
            } else {
                allocator.max_player_area()
            };
            let area = player.roaming().area();
            if area > max {
                return Err(SimError::RoamingTooLarge {
                    team: self.name.clone(),
                    player: player.id(),
                    area,
                    max,
                });
            }
        }
        Ok(())
    }

    pub fn total_touches(&self) -> u32 {
        self.players.iter().map(Player::touches).sum()
    }

    pub fn total_goals(&self) -> u32 {
        self.players.iter().map(Player::goals).sum()
    }
}
