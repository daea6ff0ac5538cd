//! # sts_core - Seeded Soccer Tournament Simulation Engine
//!
//! This library simulates a double round-robin soccer tournament on a
//! discretized pitch:
//!
//! - Roaming-region allocation per player (random or custom rectangles)
//! - A fixed-length tick loop: possession → kick → movement → goal check
//! - Reproducible matches (same seed = same result)
//! - Standings, score tables and plain-text pitch rendering
//!
//! ## Layers
//!
//! | Module | Responsibility |
//! |--------|----------------|
//! | `engine::types` | `Point`, `RoamingRect`, `Side`, `PlayerRef` |
//! | `engine::pitch` | Occupancy grid and goal mouths |
//! | `engine::roaming` | Home/away roaming rectangle allocation |
//! | `engine::match_sim` | `MatchEngine` tick loop |
//! | `models` | `Player`, `Team`, `MatchResult` |
//! | `tournament` | Fixtures, team records, standings |
//! | `config` | Attribute-file reader, JSON/YAML configs, settings |
//! | `render` | Read-only text views of pitch and tables |

// Pitch coordinates are i32 and areas i64; conversions are checked at the boundaries.
#![allow(clippy::cast_possible_truncation)]

pub mod config;
pub mod engine;
pub mod error;
pub mod models;
pub mod render;
pub mod tournament;

pub use config::{
    load_config, parse_attributes, ConfigError, MatchSettings, PitchConfig, RoamingStrategy,
    TeamConfig, TournamentConfig, TournamentSettings,
};
pub use engine::{
    Ball, Cell, GoalMouth, MatchEngine, MatchPlan, Pitch, PlayerRef, Point, RoamingAllocator,
    RoamingPair, RoamingRect, Side, TickOutcome,
};
pub use error::{Result, SimError};
pub use models::{GoalEvent, MatchResult, Player, Team};
pub use tournament::{Fixture, Standings, TeamRecord, Tournament, TournamentReport};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Number of live-play ticks in a regulation match.
pub const MATCH_TICKS: u32 = 5400;
