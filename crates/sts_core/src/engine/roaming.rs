//! Roaming Region Allocation
//!
//! Every player roams inside an axis-aligned rectangle. Both the home
//! rectangle (team defends goal 1) and the away rectangle (team defends
//! goal 2) are computed once, when the player is created; fixtures only
//! switch which one is active.
//!
//! ## Rules
//!
//! | Player | Home rectangle |
//! |--------|----------------|
//! | Goalkeeper, no custom region | Penalty box: `x1 = width/6`, width `width*4/6`, `y1 = 0`, `y4 = length/6` |
//! | Field player, no custom region | Random width `w ∈ [1, width-1)`, length `(width*length/teamSize) / w` clamped to the pitch, random placement |
//! | Custom region | As given, validated against the pitch |
//!
//! The away rectangle is the home rectangle reflected through the pitch
//! centre. Home and away areas must match exactly.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::engine::pitch::check_dimensions;
use crate::engine::types::{Point, RoamingRect};
use crate::error::{Result, SimError};

/// Goalkeepers always, and exclusively, carry id 1.
pub const GOALKEEPER_ID: u32 = 1;

/// Home/away rectangles of one player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoamingPair {
    pub home: RoamingRect,
    pub away: RoamingRect,
}

/// Computes roaming rectangles for the players of one team.
#[derive(Debug, Clone, Copy)]
pub struct RoamingAllocator {
    width: i32,
    length: i32,
    team_size: usize,
}

impl RoamingAllocator {
    pub fn new(width: i32, length: i32, team_size: usize) -> Result<Self> {
        check_dimensions(width, length)?;
        if team_size == 0 {
            return Err(SimError::EmptyTeam { team: String::new() });
        }
        Ok(Self { width, length, team_size })
    }

    /// Equal-division area cap for field players.
    pub fn max_player_area(&self) -> i64 {
        i64::from(self.width) * i64::from(self.length) / self.team_size as i64
    }

    /// Area of the penalty box: `(width*4/6) * (length/6)`.
    pub fn penalty_box_area(&self) -> i64 {
        self.penalty_box_width() * i64::from(self.length / 6)
    }

    fn penalty_box_width(&self) -> i64 {
        i64::from(self.width) * 4 / 6
    }

    pub fn penalty_box(&self) -> RoamingRect {
        let x1 = self.width / 6;
        // Never wider than the pitch, so it fits back into i32.
        let x4 = x1 + self.penalty_box_width() as i32;
        let y1 = 0;
        let y4 = y1 + self.length / 6;
        RoamingRect::spanning(Point::new(x1, y1), Point::new(x4, y4))
    }

    /// Compute the home/away pair for player `player_id`.
    ///
    /// `custom` holds the `(x1, y1)` and `(x4, y4)` corners from the
    /// configuration; when present, randomization is skipped.
    pub fn allocate<R: Rng + ?Sized>(
        &self,
        player_id: u32,
        custom: Option<[Point; 2]>,
        rng: &mut R,
    ) -> Result<RoamingPair> {
        let home = match custom {
            Some([bottom_left, top_right]) => RoamingRect::new(bottom_left, top_right)
                .ok_or_else(|| SimError::MalformedRoaming {
                    player: player_id,
                    reason: format!("{bottom_left} is not bottom-left of {top_right}"),
                })?,
            None if player_id == GOALKEEPER_ID => {
                let rect = self.penalty_box();
                let expected = self.penalty_box_area();
                if rect.area() != expected {
                    return Err(SimError::GoalkeeperBox { expected, found: rect.area() });
                }
                rect
            }
            None => self.random_region(player_id, rng)?,
        };

        self.pair(player_id, home)
    }

    fn random_region<R: Rng + ?Sized>(&self, player_id: u32, rng: &mut R) -> Result<RoamingRect> {
        let max_player_width = self.width - 1;
        if max_player_width <= 1 {
            return Err(SimError::MalformedRoaming {
                player: player_id,
                reason: format!("pitch width {} leaves no room for a random region", self.width),
            });
        }

        let max_area = self.max_player_area();
        let player_width = rng.gen_range(1..max_player_width);
        let mut player_length = max_area / i64::from(player_width);
        if player_length >= i64::from(self.length) {
            trace!(
                player = player_id,
                wanted = player_length,
                "roaming region clamped to pitch length"
            );
            player_length = i64::from(self.length - 1);
        }
        let player_length = player_length as i32;

        let x1 = rng.gen_range(0..self.width - player_width);
        let y1 = rng.gen_range(0..self.length - player_length);
        let bottom_left = Point::new(x1, y1);
        let top_right = Point::new(x1 + player_width, y1 + player_length);

        Ok(RoamingRect::spanning(bottom_left, top_right))
    }

    /// Validate `home` against the pitch and derive its mirror.
    fn pair(&self, player_id: u32, home: RoamingRect) -> Result<RoamingPair> {
        if !home.fits_within(self.width, self.length) {
            return Err(SimError::MalformedRoaming {
                player: player_id,
                reason: format!(
                    "{}..{} is outside the {}x{} pitch",
                    home.bottom_left(),
                    home.top_right(),
                    self.width,
                    self.length
                ),
            });
        }

        let away = home.mirrored(self.width, self.length);
        if away.area() != home.area() {
            return Err(SimError::RoamingAreaMismatch {
                player: player_id,
                home: home.area(),
                away: away.area(),
            });
        }

        Ok(RoamingPair { home, away })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_penalty_box_area_100_by_200() {
        let alloc = RoamingAllocator::new(100, 200, 11).unwrap();
        assert_eq!(alloc.penalty_box_area(), 2178);

        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let pair = alloc.allocate(GOALKEEPER_ID, None, &mut rng).unwrap();
        assert_eq!(pair.home.area(), 2178);
        assert_eq!(pair.away.area(), 2178);
        assert_eq!(pair.home.bottom_left(), Point::new(16, 0));
        assert_eq!(pair.home.top_right(), Point::new(82, 33));
    }

    #[test]
    fn test_huge_width_is_a_config_fault() {
        let err = RoamingAllocator::new(600_000_000, 1, 1).unwrap_err();
        assert!(matches!(err, SimError::InvalidPitch { width: 600_000_000, .. }));
        assert!(err.is_config_fault());
    }

    #[test]
    fn test_wide_pitch_box_does_not_overflow() {
        let alloc = RoamingAllocator::new(16_000_000, 1, 1).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let pair = alloc.allocate(GOALKEEPER_ID, None, &mut rng).unwrap();
        assert_eq!(pair.home.x4() - pair.home.x1(), 10_666_666);
        assert!(pair.home.fits_within(16_000_000, 1));
    }

    #[test]
    fn test_goalkeeper_away_box_sits_on_far_goal_line() {
        let alloc = RoamingAllocator::new(60, 90, 5).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let pair = alloc.allocate(GOALKEEPER_ID, None, &mut rng).unwrap();
        assert_eq!(pair.away.y4(), 89);
    }

    #[test]
    fn test_custom_region_skips_randomization() {
        let alloc = RoamingAllocator::new(50, 80, 6).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let custom = [Point::new(5, 10), Point::new(15, 30)];
        let pair = alloc.allocate(3, Some(custom), &mut rng).unwrap();
        assert_eq!(pair.home.bottom_left(), Point::new(5, 10));
        assert_eq!(pair.home.top_right(), Point::new(15, 30));
        assert_eq!(pair.away.bottom_left(), Point::new(34, 49));
        assert_eq!(pair.away.top_right(), Point::new(44, 69));
    }

    #[test]
    fn test_custom_region_must_be_ordered_and_on_pitch() {
        let alloc = RoamingAllocator::new(50, 80, 6).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(7);

        let swapped = [Point::new(15, 30), Point::new(5, 10)];
        assert!(matches!(
            alloc.allocate(2, Some(swapped), &mut rng),
            Err(SimError::MalformedRoaming { player: 2, .. })
        ));

        let off_pitch = [Point::new(40, 70), Point::new(50, 80)];
        assert!(matches!(
            alloc.allocate(2, Some(off_pitch), &mut rng),
            Err(SimError::MalformedRoaming { .. })
        ));
    }

    #[test]
    fn test_narrow_pitch_cannot_host_random_regions() {
        let alloc = RoamingAllocator::new(2, 40, 3).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        assert!(alloc.allocate(2, None, &mut rng).is_err());
    }

    #[test]
    fn test_single_player_team_clamps_length() {
        // One field player may claim the whole pitch; the length has to be
        // clamped to fit.
        let alloc = RoamingAllocator::new(10, 10, 1).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        for _ in 0..50 {
            let pair = alloc.allocate(2, None, &mut rng).unwrap();
            assert!(pair.home.fits_within(10, 10));
            assert!(pair.home.area() <= alloc.max_player_area());
        }
    }

    proptest! {
        #[test]
        fn prop_random_regions_respect_invariants(
            width in 3i32..160,
            length in 1i32..240,
            team_size in 1usize..16,
            seed in any::<u64>(),
        ) {
            let alloc = RoamingAllocator::new(width, length, team_size).unwrap();
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            for id in 2..=(team_size as u32 + 1) {
                let pair = alloc.allocate(id, None, &mut rng).unwrap();
                prop_assert_eq!(pair.home.area(), pair.away.area());
                prop_assert!(pair.home.area() <= alloc.max_player_area());
                prop_assert!(pair.home.fits_within(width, length));
                prop_assert!(pair.away.fits_within(width, length));
            }
        }

        #[test]
        fn prop_goalkeeper_box_matches_penalty_area(
            width in 1i32..400,
            length in 1i32..400,
        ) {
            let alloc = RoamingAllocator::new(width, length, 11).unwrap();
            let mut rng = ChaCha8Rng::seed_from_u64(0);
            let pair = alloc.allocate(GOALKEEPER_ID, None, &mut rng).unwrap();
            prop_assert_eq!(pair.home.area(), (width * 4 / 6) as i64 * (length / 6) as i64);
            prop_assert_eq!(pair.away.area(), pair.home.area());
        }
    }
}
