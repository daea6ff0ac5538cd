//! Kick Model
//!
//! Goalkeepers always clear forward; everyone else draws a kick type from a
//! fixed distribution over `[0, 100)`:
//!
//! | Roll | Kick | Axis | Length |
//! |------|------|------|--------|
//! | 0-4 | Long back | Y, `-d` | long vertical |
//! | 5-9 | Long left | X, `-d` | long horizontal |
//! | 10-29 | Short left | X, `-d` | short horizontal |
//! | 30-49 | Short forward | Y, `+d` | short vertical |
//! | 50-64 | Long forward | Y, `+d` | long vertical |
//! | 65-84 | Short right | X, `+d` | short horizontal |
//! | 85-89 | Long right | X, `+d` | long horizontal |
//! | 90-99 | Short back | Y, `-d` | short vertical |
//!
//! `d` is the possessor's direction (+1 for team1, -1 for team2). Offsets are
//! drawn uniformly from `[0, length)`.

use rand::Rng;
use tracing::trace;

use super::MatchEngine;
use crate::engine::types::Point;

/// Kick lengths derived from the pitch size, fixed for one match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KickLengths {
    pub short_horizontal: i32,
    pub long_horizontal: i32,
    pub short_vertical: i32,
    pub long_vertical: i32,
}

impl KickLengths {
    pub fn from_pitch(width: i32, length: i32) -> Self {
        Self {
            short_horizontal: width / 10,
            long_horizontal: width / 5,
            short_vertical: length / 20,
            long_vertical: length / 10,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KickType {
    LongBack,
    LongLeft,
    ShortLeft,
    ShortForward,
    LongForward,
    ShortRight,
    LongRight,
    ShortBack,
}

impl KickType {
    /// Map a roll in `[0, 100)` to its band.
    pub fn from_roll(roll: u32) -> Self {
        match roll {
            0..=4 => KickType::LongBack,
            5..=9 => KickType::LongLeft,
            10..=29 => KickType::ShortLeft,
            30..=49 => KickType::ShortForward,
            50..=64 => KickType::LongForward,
            65..=84 => KickType::ShortRight,
            85..=89 => KickType::LongRight,
            _ => KickType::ShortBack,
        }
    }

    /// Width of the band in percent.
    pub fn probability(self) -> u32 {
        match self {
            KickType::LongBack | KickType::LongLeft | KickType::LongRight => 5,
            KickType::ShortBack => 10,
            KickType::LongForward => 15,
            KickType::ShortLeft | KickType::ShortForward | KickType::ShortRight => 20,
        }
    }

    /// `(dx sign, dy sign, length)` for this kick before the direction is applied.
    fn vector(self, lengths: &KickLengths) -> (i32, i32, i32) {
        match self {
            KickType::LongBack => (0, -1, lengths.long_vertical),
            KickType::LongLeft => (-1, 0, lengths.long_horizontal),
            KickType::ShortLeft => (-1, 0, lengths.short_horizontal),
            KickType::ShortForward => (0, 1, lengths.short_vertical),
            KickType::LongForward => (0, 1, lengths.long_vertical),
            KickType::ShortRight => (1, 0, lengths.short_horizontal),
            KickType::LongRight => (1, 0, lengths.long_horizontal),
            KickType::ShortBack => (0, -1, lengths.short_vertical),
        }
    }
}

/// Uniform offset in `[0, length)`; a zero length gives no offset.
fn kick_offset<R: Rng + ?Sized>(rng: &mut R, length: i32) -> i32 {
    if length <= 0 {
        0
    } else {
        rng.gen_range(0..length)
    }
}

/// Unclamped target of a field kick from `from`.
pub fn field_kick_target<R: Rng + ?Sized>(
    from: Point,
    direction: i32,
    lengths: &KickLengths,
    rng: &mut R,
) -> (KickType, Point) {
    let kick = KickType::from_roll(rng.gen_range(0..100));
    let (sx, sy, length) = kick.vector(lengths);
    let offset = direction * kick_offset(rng, length);
    (kick, Point::new(from.x + sx * offset, from.y + sy * offset))
}

/// Unclamped target of a goalkeeper clearance from `from`.
pub fn goalkeeper_kick_target<R: Rng + ?Sized>(
    from: Point,
    direction: i32,
    lengths: &KickLengths,
    rng: &mut R,
) -> Point {
    let dx = direction * kick_offset(rng, lengths.long_horizontal);
    let dy = direction * kick_offset(rng, lengths.long_vertical);
    Point::new(from.x + dx, from.y + dy)
}

impl MatchEngine<'_> {
    /// Kick the ball from its current cell and clamp it back onto the pitch.
    pub(crate) fn kick_ball(&mut self, goalkeeper: bool, direction: i32) {
        let from = self.ball.position;
        let target = if goalkeeper {
            goalkeeper_kick_target(from, direction, &self.kicks, &mut self.rng)
        } else {
            let (kick, target) = field_kick_target(from, direction, &self.kicks, &mut self.rng);
            trace!(?kick, %from, %target, "field kick");
            target
        };
        self.ball.kick_to(target, self.pitch.width(), self.pitch.length());
    }
}
