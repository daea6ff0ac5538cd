use thiserror::Error;

use crate::config::ConfigError;

#[derive(Error, Debug)]
pub enum SimError {
    #[error("Invalid pitch size: {width}x{length} (dimensions must be positive, at most {} cells)", crate::engine::pitch::MAX_PITCH_CELLS)]
    InvalidPitch { width: i32, length: i32 },

    #[error("Team {team:?} must have at least one player")]
    EmptyTeam { team: String },

    #[error("Team name must not be empty")]
    EmptyTeamName,

    #[error("Team {team:?} lists {regions} custom regions for {players} players")]
    TooManyRegions { team: String, regions: usize, players: usize },

    #[error("Malformed roaming rectangle for player {player}: {reason}")]
    MalformedRoaming { player: u32, reason: String },

    #[error("Roaming areas differ for player {player}: home {home}, away {away}")]
    RoamingAreaMismatch { player: u32, home: i64, away: i64 },

    #[error("Goalkeeper box area {found} differs from penalty box area {expected}")]
    GoalkeeperBox { expected: i64, found: i64 },

    #[error("Team {team:?} has an invalid roaming region: player {player} area {area} exceeds {max}")]
    RoamingTooLarge { team: String, player: u32, area: i64, max: i64 },

    #[error("Team {team:?} was built for a {team_width}x{team_length} pitch, match is {width}x{length}")]
    PitchMismatch { team: String, team_width: i32, team_length: i32, width: i32, length: i32 },

    #[error("Point ({x}, {y}) is outside the {width}x{length} pitch")]
    OutOfBounds { x: i32, y: i32, width: i32, length: i32 },

    #[error("No free cell in the roaming region of player {player} of team {team:?}")]
    RoamingSaturated { team: String, player: u32 },

    #[error("Invariant violation: {0}")]
    Invariant(String),

    #[error("A tournament needs at least two teams, found {0}")]
    TooFewTeams(usize),

    #[error("Teams have unequal sizes: {first:?} has {first_size}, {other:?} has {other_size}")]
    UnequalTeamSizes { first: String, first_size: usize, other: String, other_size: usize },

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl SimError {
    /// True for faults detected before any tick runs.
    pub fn is_config_fault(&self) -> bool {
        match self {
            SimError::OutOfBounds { .. } => false,
            SimError::RoamingSaturated { .. } => false,
            SimError::Invariant(_) => false,
            _ => true,
        }
    }
}

pub type Result<T> = std::result::Result<T, SimError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_fault_classification() {
        assert!(SimError::EmptyTeamName.is_config_fault());
        assert!(SimError::GoalkeeperBox { expected: 10, found: 12 }.is_config_fault());
        assert!(!SimError::Invariant("two players on (1, 1)".into()).is_config_fault());
        assert!(!SimError::OutOfBounds { x: -1, y: 0, width: 10, length: 10 }.is_config_fault());
    }

    #[test]
    fn test_messages_name_the_invariant() {
        let err = SimError::RoamingAreaMismatch { player: 4, home: 20, away: 18 };
        let msg = err.to_string();
        assert!(msg.contains("player 4"));
        assert!(msg.contains("home 20"));
        assert!(msg.contains("away 18"));
    }
}
