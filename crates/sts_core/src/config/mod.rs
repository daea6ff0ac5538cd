//! # Configuration
//!
//! Two kinds of input:
//!
//! - [`TournamentConfig`]: pitch size and team entries, read from the tag
//!   format ([`parse_attributes`]) or from JSON/YAML ([`load_config`]).
//! - [`TournamentSettings`] / [`MatchSettings`]: how to run it (seed, match
//!   length), with presets.
//!
//! ```rust
//! use sts_core::config::{MatchSettings, TournamentSettings};
//!
//! let regulation = TournamentSettings::default();
//! let smoke = TournamentSettings::seeded(7).with_match_settings(MatchSettings::quick());
//! assert!(smoke.match_settings.duration_ticks < regulation.match_settings.duration_ticks);
//! ```

mod parser;
mod scanner;

pub use parser::parse_attributes;

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::engine::pitch::check_dimensions;
use crate::engine::types::Point;
use crate::error::SimError;
use crate::MATCH_TICKS;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("Unexpected end of input, `{expected}` expected")]
    UnexpectedEof { expected: String },

    #[error("Unsupported tag `{tag}` on line {line}")]
    UnknownTag { tag: String, line: usize },

    #[error("Unsupported strategy `{strategy}` on line {line} (expected `random` or `custom`)")]
    UnknownStrategy { strategy: String, line: usize },

    #[error("Number `{text}` on line {line} is out of range")]
    InvalidNumber { text: String, line: usize },

    #[error("No pitch record found")]
    MissingPitch,

    #[error("Too many teams: {0} (team ids run out after 36)")]
    TooManyTeams(usize),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Per-match settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchSettings {
    /// Live ticks per match
    pub duration_ticks: u32,
}

impl Default for MatchSettings {
    fn default() -> Self {
        Self { duration_ticks: MATCH_TICKS }
    }
}

impl MatchSettings {
    /// Regulation length.
    pub fn regulation() -> Self {
        Self::default()
    }

    /// Short matches for smoke runs and tests.
    pub fn quick() -> Self {
        Self { duration_ticks: 600 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TournamentSettings {
    /// Master seed; `None` draws one from OS entropy
    pub seed: Option<u64>,
    pub match_settings: MatchSettings,
}

impl TournamentSettings {
    pub fn seeded(seed: u64) -> Self {
        Self { seed: Some(seed), ..Self::default() }
    }

    pub fn with_match_settings(mut self, match_settings: MatchSettings) -> Self {
        self.match_settings = match_settings;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PitchConfig {
    pub width: i32,
    pub length: i32,
}

/// How a team's roaming rectangles are chosen.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoamingStrategy {
    #[default]
    Random,
    /// `[bottom_left, top_right]` per player in roster order, goalkeeper first
    Custom(Vec<[Point; 2]>),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamConfig {
    pub name: String,
    pub players: usize,
    #[serde(default)]
    pub strategy: RoamingStrategy,
}

impl TeamConfig {
    pub fn custom_regions(&self) -> Option<&[[Point; 2]]> {
        match &self.strategy {
            RoamingStrategy::Random => None,
            RoamingStrategy::Custom(regions) => Some(regions.as_slice()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TournamentConfig {
    pub pitch: PitchConfig,
    pub teams: Vec<TeamConfig>,
}

impl TournamentConfig {
    /// Id character of the `index`-th team: `'0'..='9'`, then `'a'..='z'`.
    pub fn team_id(index: usize) -> Option<char> {
        u32::try_from(index).ok().and_then(|i| char::from_digit(i, 36))
    }

    pub fn validate(&self) -> Result<(), SimError> {
        let PitchConfig { width, length } = self.pitch;
        check_dimensions(width, length)?;
        if self.teams.len() < 2 {
            return Err(SimError::TooFewTeams(self.teams.len()));
        }
        if Self::team_id(self.teams.len() - 1).is_none() {
            return Err(ConfigError::TooManyTeams(self.teams.len()).into());
        }
        for team in &self.teams {
            if team.name.trim().is_empty() {
                return Err(SimError::EmptyTeamName);
            }
            if team.players == 0 {
                return Err(SimError::EmptyTeam { team: team.name.clone() });
            }
            if let Some(regions) = team.custom_regions() {
                if regions.len() > team.players {
                    return Err(SimError::TooManyRegions {
                        team: team.name.clone(),
                        regions: regions.len(),
                        players: team.players,
                    });
                }
            }
        }
        Ok(())
    }
}

/// Load a tournament config, picking the format from the file extension:
/// `.json`, `.yaml`/`.yml`, anything else is read as the tag format.
pub fn load_config(path: impl AsRef<Path>) -> Result<TournamentConfig, ConfigError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)?;
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    debug!(path = %path.display(), format = ?extension, "loading tournament config");
    match extension.as_deref() {
        Some("json") => Ok(serde_json::from_str(&text)?),
        Some("yaml" | "yml") => Ok(serde_yaml::from_str(&text)?),
        _ => parse_attributes(&text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(teams: usize, players: usize) -> TournamentConfig {
        TournamentConfig {
            pitch: PitchConfig { width: 100, length: 200 },
            teams: (0..teams)
                .map(|i| TeamConfig {
                    name: format!("Team {i}"),
                    players,
                    strategy: RoamingStrategy::Random,
                })
                .collect(),
        }
    }

    #[test]
    fn test_team_ids_are_base36() {
        assert_eq!(TournamentConfig::team_id(0), Some('0'));
        assert_eq!(TournamentConfig::team_id(9), Some('9'));
        assert_eq!(TournamentConfig::team_id(10), Some('a'));
        assert_eq!(TournamentConfig::team_id(35), Some('z'));
        assert_eq!(TournamentConfig::team_id(36), None);
    }

    #[test]
    fn test_validate() {
        assert!(config(2, 11).validate().is_ok());
        assert!(matches!(config(1, 11).validate(), Err(SimError::TooFewTeams(1))));
        assert!(matches!(config(2, 0).validate(), Err(SimError::EmptyTeam { .. })));
        assert!(matches!(
            config(37, 1).validate(),
            Err(SimError::Config(ConfigError::TooManyTeams(37)))
        ));

        let mut bad_pitch = config(2, 3);
        bad_pitch.pitch.length = 0;
        assert!(matches!(bad_pitch.validate(), Err(SimError::InvalidPitch { .. })));

        let mut huge_pitch = config(2, 3);
        huge_pitch.pitch.width = 600_000_000;
        assert!(matches!(huge_pitch.validate(), Err(SimError::InvalidPitch { width: 600_000_000, .. })));

        let mut crowded = config(2, 1);
        crowded.teams[1].strategy = RoamingStrategy::Custom(vec![[Point::new(0, 0), Point::new(1, 1)]; 2]);
        assert!(matches!(crowded.validate(), Err(SimError::TooManyRegions { .. })));
    }

    #[test]
    fn test_settings_presets() {
        assert_eq!(MatchSettings::default().duration_ticks, 5400);
        assert_eq!(MatchSettings::regulation(), MatchSettings::default());
        assert_eq!(TournamentSettings::seeded(3).seed, Some(3));
        let parsed: TournamentSettings = serde_json::from_str(r#"{"seed": 9}"#).unwrap();
        assert_eq!(parsed.match_settings.duration_ticks, 5400);
    }

    #[test]
    fn test_strategy_serde_shape() {
        let yaml = "name: Owls\nplayers: 2\nstrategy: !custom\n  - [{x: 1, y: 0}, {x: 5, y: 4}]\n";
        let team: TeamConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(team.custom_regions(), Some(&[[Point::new(1, 0), Point::new(5, 4)]][..]));

        let team: TeamConfig = serde_json::from_str(r#"{"name": "Hawks", "players": 4}"#).unwrap();
        assert_eq!(team.strategy, RoamingStrategy::Random);
    }
}
