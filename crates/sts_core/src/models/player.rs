use serde::{Deserialize, Serialize};

use crate::engine::roaming::{RoamingPair, GOALKEEPER_ID};
use crate::engine::types::{Point, RoamingRect, Side};
use crate::error::{Result, SimError};

/// A squad member.
///
/// Players are owned by their [`Team`](super::Team); `team_id` is a lookup
/// key back to it, not an owning reference.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    team_id: char,
    id: u32,
    position: Point,
    roaming: RoamingPair,
    active: Side,
    touches: u32,
    goals: u32,
    own_goals: u32,
    /// Cell of every touch, in order
    touch_history: Vec<Point>,
    pitch_width: i32,
    pitch_length: i32,
}

impl Player {
    pub fn new(team_id: char, id: u32, roaming: RoamingPair, pitch_width: i32, pitch_length: i32) -> Self {
        Self {
            team_id,
            id,
            position: Point::new(0, 0),
            roaming,
            active: Side::Home,
            touches: 0,
            goals: 0,
            own_goals: 0,
            touch_history: Vec::new(),
            pitch_width,
            pitch_length,
        }
    }

    pub fn team_id(&self) -> char {
        self.team_id
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn is_goalkeeper(&self) -> bool {
        self.id == GOALKEEPER_ID
    }

    pub fn position(&self) -> Point {
        self.position
    }

    /// Move the player. Positions outside the pitch are an invariant fault.
    pub fn set_position(&mut self, position: Point) -> Result<()> {
        if !position.within(self.pitch_width, self.pitch_length) {
            return Err(SimError::OutOfBounds {
                x: position.x,
                y: position.y,
                width: self.pitch_width,
                length: self.pitch_length,
            });
        }
        self.position = position;
        Ok(())
    }

    pub fn home_roaming(&self) -> &RoamingRect {
        &self.roaming.home
    }

    pub fn away_roaming(&self) -> &RoamingRect {
        &self.roaming.away
    }

    /// Rectangle for the side the team currently defends.
    pub fn roaming(&self) -> &RoamingRect {
        match self.active {
            Side::Home => &self.roaming.home,
            Side::Away => &self.roaming.away,
        }
    }

    pub fn set_roaming_side(&mut self, side: Side) {
        self.active = side;
    }

    pub fn roaming_side(&self) -> Side {
        self.active
    }

    /// Count a touch at the current position.
    pub fn record_touch(&mut self) {
        self.touches += 1;
        self.touch_history.push(self.position);
    }

    pub fn credit_goal(&mut self) {
        self.goals += 1;
    }

    pub fn credit_own_goal(&mut self) {
        self.own_goals += 1;
    }

    pub fn touches(&self) -> u32 {
        self.touches
    }

    pub fn goals(&self) -> u32 {
        self.goals
    }

    pub fn own_goals(&self) -> u32 {
        self.own_goals
    }

    pub fn touch_history(&self) -> &[Point] {
        &self.touch_history
    }

    /// Cell of the `i`-th touch.
    pub fn touch_position(&self, i: usize) -> Option<Point> {
        self.touch_history.get(i).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair() -> RoamingPair {
        let home = RoamingRect::new(Point::new(1, 1), Point::new(3, 4)).unwrap();
        RoamingPair { home, away: home.mirrored(10, 20) }
    }

    #[test]
    fn test_set_position_checks_bounds() {
        let mut player = Player::new('0', 2, pair(), 10, 20);
        assert!(player.set_position(Point::new(9, 19)).is_ok());
        assert!(matches!(
            player.set_position(Point::new(10, 5)),
            Err(SimError::OutOfBounds { x: 10, y: 5, .. })
        ));
        assert_eq!(player.position(), Point::new(9, 19));
    }

    #[test]
    fn test_touch_history_follows_position() {
        let mut player = Player::new('0', 2, pair(), 10, 20);
        player.set_position(Point::new(2, 2)).unwrap();
        player.record_touch();
        player.set_position(Point::new(3, 4)).unwrap();
        player.record_touch();

        assert_eq!(player.touches(), 2);
        assert_eq!(player.touch_history(), &[Point::new(2, 2), Point::new(3, 4)]);
        assert_eq!(player.touch_position(1), Some(Point::new(3, 4)));
        assert_eq!(player.touch_position(2), None);
    }

    #[test]
    fn test_active_roaming_follows_side() {
        let mut player = Player::new('0', 1, pair(), 10, 20);
        assert!(player.is_goalkeeper());
        assert_eq!(player.roaming(), player.home_roaming());
        player.set_roaming_side(Side::Away);
        assert_eq!(player.roaming(), player.away_roaming());
    }
}
