//! Match Simulation Engine
//!
//! One match between two teams on a fresh pitch. The engine borrows both
//! teams mutably for its whole lifetime, owns the pitch, the ball and a
//! `ChaCha8Rng` seeded from the plan, and runs a fixed number of live ticks.
//!
//! ## Tick
//!
//! ```text
//! possession ─► touch ─► ball to possessor ─► kick ─► clamp ─► goal?
//!                                                              │
//!                            yes: score, kickoff ◄─────────────┤
//!                            no:  move team1, move team2 ◄─────┘
//! ```
//!
//! Team1 always defends goal 1 (`Side::Home`, `y = 0`) and kicks towards
//! increasing Y; team2 defends goal 2 and kicks the other way.
//!
//! ## Sub-modules
//!
//! | Module | Responsibility |
//! |--------|----------------|
//! | `kick` | Kick lengths, kick-type bands, goalkeeper clearances |
//! | `movement` | Deployment and bounded-retry repositioning |
//! | `player_selection` | Nearest player and possession tie-break |

mod kick;
mod movement;
mod player_selection;

pub use kick::{field_kick_target, goalkeeper_kick_target, KickLengths, KickType};
pub use player_selection::nearest_player;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::MatchSettings;
use crate::engine::ball::Ball;
use crate::engine::pitch::{Cell, Pitch};
use crate::engine::types::{PlayerRef, Side};
use crate::error::{Result, SimError};
use crate::models::{GoalEvent, MatchResult, Player, Team};
use crate::MATCH_TICKS;

/// Everything needed to start a match apart from the teams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchPlan {
    pub width: i32,
    pub length: i32,
    pub seed: u64,
    pub duration_ticks: u32,
}

impl MatchPlan {
    pub fn new(width: i32, length: i32, seed: u64) -> Self {
        Self { width, length, seed, duration_ticks: MATCH_TICKS }
    }

    pub fn with_settings(mut self, settings: &MatchSettings) -> Self {
        self.duration_ticks = settings.duration_ticks;
        self
    }
}

/// What happened on one live tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Play,
    Goal(GoalEvent),
}

#[derive(Debug)]
pub struct MatchEngine<'a> {
    rng: ChaCha8Rng,
    seed: u64,
    home: &'a mut Team,
    away: &'a mut Team,
    pitch: Pitch,
    ball: Ball,
    kicks: KickLengths,
    home_score: u32,
    away_score: u32,
    tick: u32,
    duration: u32,
    goals: Vec<GoalEvent>,
}

impl<'a> MatchEngine<'a> {
    /// Set up a match: assign sides, validate roaming regions, seat every
    /// player and kick off. `home` becomes team1, `away` team2.
    pub fn new(plan: MatchPlan, home: &'a mut Team, away: &'a mut Team) -> Result<Self> {
        let pitch = Pitch::new(plan.width, plan.length)?;
        for team in [&*home, &*away] {
            let (team_width, team_length) = team.pitch_dimensions();
            if (team_width, team_length) != (plan.width, plan.length) {
                return Err(SimError::PitchMismatch {
                    team: team.name().to_string(),
                    team_width,
                    team_length,
                    width: plan.width,
                    length: plan.length,
                });
            }
        }

        home.assign_side(Side::Home);
        away.assign_side(Side::Away);
        home.roaming_regions_ok()?;
        away.roaming_regions_ok()?;

        let mut engine = Self {
            rng: ChaCha8Rng::seed_from_u64(plan.seed),
            seed: plan.seed,
            home,
            away,
            ball: Ball::new(pitch.center()),
            kicks: KickLengths::from_pitch(plan.width, plan.length),
            pitch,
            home_score: 0,
            away_score: 0,
            tick: 0,
            duration: plan.duration_ticks,
            goals: Vec::new(),
        };

        engine.deploy()?;
        engine.kickoff()?;
        info!(
            home = engine.home.name(),
            away = engine.away.name(),
            seed = plan.seed,
            ticks = plan.duration_ticks,
            "match started"
        );
        Ok(engine)
    }

    /// Ball to the centre spot, then everybody repositions.
    fn kickoff(&mut self) -> Result<()> {
        self.ball.position = self.pitch.center();
        debug!(tick = self.tick, "kickoff");
        self.move_players()
    }

    /// Run one live tick.
    pub fn step(&mut self) -> Result<TickOutcome> {
        if self.is_finished() {
            return Err(SimError::Invariant(format!("match already played {} ticks", self.tick)));
        }

        let who = self.select_possessor()?;
        let (position, goalkeeper, team_id, player_id) = {
            let player = self.player_mut(who)?;
            player.record_touch();
            (player.position(), player.is_goalkeeper(), player.team_id(), player.id())
        };
        self.ball.position = position;
        self.kick_ball(goalkeeper, who.side.direction());

        let outcome = match self.pitch.goal_side(self.ball.position) {
            Some(goal) => {
                let scoring_side = goal.opponent();
                let own_goal = who.side == goal;
                let player = self.player_mut(who)?;
                if own_goal {
                    player.credit_own_goal();
                } else {
                    player.credit_goal();
                }
                match scoring_side {
                    Side::Home => self.home_score += 1,
                    Side::Away => self.away_score += 1,
                }

                let event = GoalEvent { tick: self.tick, scoring_side, team_id, player_id, own_goal };
                debug!(
                    tick = self.tick,
                    team = %team_id,
                    player = player_id,
                    own_goal,
                    score = ?(self.home_score, self.away_score),
                    "goal"
                );
                self.goals.push(event);
                self.kickoff()?;
                TickOutcome::Goal(event)
            }
            None => {
                self.move_players()?;
                TickOutcome::Play
            }
        };

        self.tick += 1;
        if cfg!(debug_assertions) {
            if let Some(violation) = self.seating_violations().into_iter().next() {
                return Err(SimError::Invariant(violation));
            }
        }
        Ok(outcome)
    }

    /// Play out the remaining ticks.
    pub fn simulate(mut self) -> Result<MatchResult> {
        while !self.is_finished() {
            self.step()?;
        }

        info!(
            home = self.home.name(),
            away = self.away.name(),
            score = ?(self.home_score, self.away_score),
            "match finished"
        );
        Ok(MatchResult {
            home_team: self.home.name().to_string(),
            away_team: self.away.name().to_string(),
            home_score: self.home_score,
            away_score: self.away_score,
            ticks_played: self.tick,
            seed: self.seed,
            goals: self.goals,
        })
    }

    /// Every violated occupancy or bounds invariant, empty when consistent.
    pub fn check_invariants(&self) -> Vec<String> {
        let mut violations = self.seating_violations();

        let players = self.home.size() + self.away.size();
        let occupied = self.pitch.occupied_count();
        if occupied != players {
            violations.push(format!("{occupied} occupied cells for {players} players"));
        }
        if !self.pitch.contains(self.ball.position) {
            violations.push(format!("ball at {} is off the pitch", self.ball.position));
        }
        let (home_goals, away_goals) = self.goals.iter().fold((0, 0), |(h, a), g| match g.scoring_side {
            Side::Home => (h + 1, a),
            Side::Away => (h, a + 1),
        });
        if (home_goals, away_goals) != (self.home_score, self.away_score) {
            violations.push(format!(
                "score {}-{} disagrees with goal log {home_goals}-{away_goals}",
                self.home_score, self.away_score
            ));
        }
        violations
    }

    /// Each player stands inside its rectangle on a cell that names it.
    fn seating_violations(&self) -> Vec<String> {
        let mut violations = Vec::new();
        for side in [Side::Home, Side::Away] {
            let team = self.team(side);
            for (index, player) in team.players().iter().enumerate() {
                let at = player.position();
                let who = PlayerRef::new(side, index);
                match self.pitch.occupant_at(at) {
                    Ok(Cell::Occupied(occupant)) if occupant == who => {}
                    Ok(cell) => violations.push(format!(
                        "player {} of {:?} at {at} but cell holds {cell:?}",
                        player.id(),
                        team.name()
                    )),
                    Err(e) => violations.push(e.to_string()),
                }
                if !player.roaming().contains(at) {
                    violations.push(format!(
                        "player {} of {:?} at {at} left its roaming region",
                        player.id(),
                        team.name()
                    ));
                }
            }
        }
        violations
    }

    pub fn team(&self, side: Side) -> &Team {
        match side {
            Side::Home => &*self.home,
            Side::Away => &*self.away,
        }
    }

    fn team_mut(&mut self, side: Side) -> &mut Team {
        match side {
            Side::Home => &mut *self.home,
            Side::Away => &mut *self.away,
        }
    }

    pub fn player(&self, who: PlayerRef) -> Result<&Player> {
        let team = self.team(who.side);
        team.player(who.index)
            .ok_or_else(|| SimError::Invariant(format!("no player {} in {:?}", who.index, team.name())))
    }

    pub(crate) fn player_mut(&mut self, who: PlayerRef) -> Result<&mut Player> {
        let team = self.team_mut(who.side);
        if who.index >= team.size() {
            return Err(SimError::Invariant(format!("no player {} in {:?}", who.index, team.name())));
        }
        Ok(&mut team.players_mut()[who.index])
    }

    pub fn pitch(&self) -> &Pitch {
        &self.pitch
    }

    pub fn ball(&self) -> &Ball {
        &self.ball
    }

    pub fn score(&self) -> (u32, u32) {
        (self.home_score, self.away_score)
    }

    pub fn tick(&self) -> u32 {
        self.tick
    }

    pub fn duration(&self) -> u32 {
        self.duration
    }

    pub fn is_finished(&self) -> bool {
        self.tick >= self.duration
    }

    pub fn goals(&self) -> &[GoalEvent] {
        &self.goals
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::types::Point;
    use rand::SeedableRng;

    fn teams(size: usize, width: i32, length: i32, seed: u64) -> (Team, Team) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let home = Team::new("North", '0', size, width, length, None, &mut rng).unwrap();
        let away = Team::new("South", '1', size, width, length, None, &mut rng).unwrap();
        (home, away)
    }

    #[test]
    fn test_new_engine_is_consistent() {
        let (mut home, mut away) = teams(11, 100, 200, 3);
        let engine = MatchEngine::new(MatchPlan::new(100, 200, 8), &mut home, &mut away).unwrap();
        assert_eq!(engine.check_invariants(), Vec::<String>::new());
        assert_eq!(engine.ball().position, Point::new(50, 100));
        assert_eq!(engine.score(), (0, 0));
        assert_eq!(engine.team(Side::Away).side(), Side::Away);
    }

    #[test]
    fn test_every_tick_keeps_invariants_and_score_monotone() {
        let (mut home, mut away) = teams(5, 40, 60, 17);
        let plan = MatchPlan { duration_ticks: 800, ..MatchPlan::new(40, 60, 99) };
        let mut engine = MatchEngine::new(plan, &mut home, &mut away).unwrap();

        let mut last = (0, 0);
        while !engine.is_finished() {
            let outcome = engine.step().unwrap();
            let score = engine.score();
            match outcome {
                TickOutcome::Goal(_) => assert_eq!(score.0 + score.1, last.0 + last.1 + 1),
                TickOutcome::Play => assert_eq!(score, last),
            }
            assert!(engine.pitch().contains(engine.ball().position));
            assert!(engine.check_invariants().is_empty(), "{:?}", engine.check_invariants());
            last = score;
        }
        assert_eq!(engine.tick(), 800);
        assert!(engine.step().is_err());
    }

    #[test]
    fn test_touches_add_up_to_ticks() {
        let (mut home, mut away) = teams(4, 30, 50, 5);
        let plan = MatchPlan { duration_ticks: 500, ..MatchPlan::new(30, 50, 1) };
        let result = MatchEngine::new(plan, &mut home, &mut away).unwrap().simulate().unwrap();

        assert_eq!(result.ticks_played, 500);
        assert_eq!(home.total_touches() + away.total_touches(), 500);
        let credited: u32 = home
            .players()
            .iter()
            .chain(away.players())
            .map(|p| p.goals() + p.own_goals())
            .sum();
        assert_eq!(credited, result.home_score + result.away_score);
        assert_eq!(result.goals.len() as u32, result.home_score + result.away_score);
    }

    #[test]
    fn test_pitch_mismatch_is_rejected() {
        let (mut home, mut away) = teams(3, 30, 50, 5);
        let err = MatchEngine::new(MatchPlan::new(40, 50, 1), &mut home, &mut away).unwrap_err();
        assert!(matches!(err, SimError::PitchMismatch { .. }));
        assert!(err.is_config_fault());
    }

    #[test]
    fn test_goal_credits_own_goal_to_defending_side() {
        let (mut home, mut away) = teams(3, 40, 60, 21);
        let plan = MatchPlan { duration_ticks: 3000, ..MatchPlan::new(40, 60, 4) };
        let result = MatchEngine::new(plan, &mut home, &mut away).unwrap().simulate().unwrap();
        for goal in &result.goals {
            let kicker_side = if goal.team_id == '0' { Side::Home } else { Side::Away };
            if goal.own_goal {
                assert_eq!(goal.scoring_side, kicker_side.opponent());
            } else {
                assert_eq!(goal.scoring_side, kicker_side);
            }
        }
    }
}
