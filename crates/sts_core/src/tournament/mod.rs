//! # Tournament
//!
//! Double round robin: every team hosts every other team once. Teams are
//! built once from the [`TournamentConfig`] and carry their player counters
//! across all fixtures; each fixture gets a fresh pitch and its own match
//! seed drawn from the tournament RNG, so a tournament seed reproduces the
//! whole run.

mod standings;

pub use standings::{Standings, TeamRecord, VenueRecord};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::config::{ConfigError, PitchConfig, TournamentConfig, TournamentSettings};
use crate::engine::match_sim::{MatchEngine, MatchPlan};
use crate::error::{Result, SimError};
use crate::models::{MatchResult, Team};

/// One played fixture. `home` and `away` are entry indices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fixture {
    pub home: usize,
    pub away: usize,
    pub result: MatchResult,
}

/// Everything a finished tournament produced apart from the teams.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TournamentReport {
    pub seed: u64,
    pub pitch: PitchConfig,
    pub fixtures: Vec<Fixture>,
    pub standings: Standings,
}

impl TournamentReport {
    pub fn best_team(&self) -> Option<&TeamRecord> {
        self.standings.best_team().and_then(|i| self.standings.record(i))
    }

    /// `(home, away)` score of the fixture `home` hosted against `away`.
    pub fn score(&self, home: usize, away: usize) -> Option<(u32, u32)> {
        self.standings.record(home).and_then(|r| r.home_result(away))
    }

    pub fn total_goals(&self) -> u32 {
        self.fixtures.iter().map(|f| f.result.home_score + f.result.away_score).sum()
    }
}

pub struct Tournament {
    pitch: PitchConfig,
    settings: TournamentSettings,
    seed: u64,
    rng: ChaCha8Rng,
    teams: Vec<Team>,
}

impl Tournament {
    /// Validate the config and build every team.
    pub fn new(config: TournamentConfig, settings: TournamentSettings) -> Result<Self> {
        config.validate()?;

        let seed = settings.seed.unwrap_or_else(rand::random);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let PitchConfig { width, length } = config.pitch;

        let mut teams = Vec::with_capacity(config.teams.len());
        for (index, entry) in config.teams.iter().enumerate() {
            let id = TournamentConfig::team_id(index)
                .ok_or(ConfigError::TooManyTeams(config.teams.len()))?;
            let team = Team::new(
                &entry.name,
                id,
                entry.players,
                width,
                length,
                entry.custom_regions(),
                &mut rng,
            )?;
            teams.push(team);
        }

        if let Some((first, rest)) = teams.split_first() {
            if let Some(other) = rest.iter().find(|t| t.size() != first.size()) {
                return Err(SimError::UnequalTeamSizes {
                    first: first.name().to_string(),
                    first_size: first.size(),
                    other: other.name().to_string(),
                    other_size: other.size(),
                });
            }
        }

        info!(teams = teams.len(), seed, width, length, "tournament created");
        Ok(Self { pitch: config.pitch, settings, seed, rng, teams })
    }

    /// Ordered `(home, away)` pairs, hosts in entry order.
    pub fn schedule(&self) -> Vec<(usize, usize)> {
        let n = self.teams.len();
        (0..n)
            .flat_map(|home| (0..n).filter(move |&away| away != home).map(move |away| (home, away)))
            .collect()
    }

    /// Play every fixture and collect the standings.
    pub fn play(&mut self) -> Result<TournamentReport> {
        let schedule = self.schedule();
        let mut standings = Standings::new(&self.teams);
        let mut fixtures = Vec::with_capacity(schedule.len());

        for (home, away) in schedule {
            let result = self.play_fixture(home, away)?;
            standings.record_fixture(home, away, result.home_score, result.away_score);
            fixtures.push(Fixture { home, away, result });
        }

        let report = TournamentReport { seed: self.seed, pitch: self.pitch, fixtures, standings };
        info!(
            fixtures = report.fixtures.len(),
            goals = report.total_goals(),
            best = report.best_team().map(|r| r.name.as_str()),
            "tournament finished"
        );
        Ok(report)
    }

    fn play_fixture(&mut self, home: usize, away: usize) -> Result<MatchResult> {
        let plan = MatchPlan::new(self.pitch.width, self.pitch.length, self.rng.gen())
            .with_settings(&self.settings.match_settings);
        let (home_team, away_team) = pair_mut(&mut self.teams, home, away)?;

        let result = MatchEngine::new(plan, home_team, away_team)?.simulate()?;

        regions_still_valid(home_team);
        regions_still_valid(away_team);
        Ok(result)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    pub fn team(&self, index: usize) -> Option<&Team> {
        self.teams.get(index)
    }
}

/// Re-check a team's roaming regions after a fixture. A failure is logged
/// and play goes on.
fn regions_still_valid(team: &Team) -> bool {
    match team.roaming_regions_ok() {
        Ok(()) => true,
        Err(e) => {
            warn!(team = team.name(), error = %e, "invalid roaming region after fixture");
            false
        }
    }
}

/// Mutable borrows of two distinct teams.
fn pair_mut(teams: &mut [Team], a: usize, b: usize) -> Result<(&mut Team, &mut Team)> {
    if a == b || a >= teams.len() || b >= teams.len() {
        return Err(SimError::Invariant(format!("cannot pair team {a} with team {b}")));
    }
    if a < b {
        let (left, right) = teams.split_at_mut(b);
        Ok((&mut left[a], &mut right[0]))
    } else {
        let (left, right) = teams.split_at_mut(a);
        Ok((&mut right[0], &mut left[b]))
    }
}
