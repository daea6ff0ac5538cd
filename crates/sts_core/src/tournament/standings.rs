//! Team records and the standings table.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::Team;

/// Win/draw/loss and goal tallies for one venue.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VenueRecord {
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub goals_scored: u32,
    pub goals_allowed: u32,
}

impl VenueRecord {
    fn add(&mut self, ours: u32, theirs: u32) {
        match ours.cmp(&theirs) {
            std::cmp::Ordering::Greater => self.wins += 1,
            std::cmp::Ordering::Equal => self.draws += 1,
            std::cmp::Ordering::Less => self.losses += 1,
        }
        self.goals_scored += ours;
        self.goals_allowed += theirs;
    }
}

/// Cumulative tournament record of one team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamRecord {
    pub name: String,
    pub id: char,
    pub games_played: u32,
    pub points: u32,
    pub home: VenueRecord,
    pub away: VenueRecord,
    /// Scores of this team's home fixtures, keyed by opponent index
    home_results: BTreeMap<usize, (u32, u32)>,
}

impl TeamRecord {
    pub const WIN_POINTS: u32 = 3;
    pub const DRAW_POINTS: u32 = 1;

    pub fn new(name: impl Into<String>, id: char) -> Self {
        Self {
            name: name.into(),
            id,
            games_played: 0,
            points: 0,
            home: VenueRecord::default(),
            away: VenueRecord::default(),
            home_results: BTreeMap::new(),
        }
    }

    /// Add one result from this team's point of view.
    pub fn record(&mut self, ours: u32, theirs: u32, at_home: bool) {
        self.games_played += 1;
        self.points += match ours.cmp(&theirs) {
            std::cmp::Ordering::Greater => Self::WIN_POINTS,
            std::cmp::Ordering::Equal => Self::DRAW_POINTS,
            std::cmp::Ordering::Less => 0,
        };
        if at_home {
            self.home.add(ours, theirs);
        } else {
            self.away.add(ours, theirs);
        }
    }

    pub fn set_home_result(&mut self, opponent: usize, home_score: u32, away_score: u32) {
        self.home_results.insert(opponent, (home_score, away_score));
    }

    /// `(home, away)` score of the fixture this team hosted against `opponent`.
    pub fn home_result(&self, opponent: usize) -> Option<(u32, u32)> {
        self.home_results.get(&opponent).copied()
    }

    pub fn wins(&self) -> u32 {
        self.home.wins + self.away.wins
    }

    pub fn draws(&self) -> u32 {
        self.home.draws + self.away.draws
    }

    pub fn losses(&self) -> u32 {
        self.home.losses + self.away.losses
    }

    pub fn goals_scored(&self) -> u32 {
        self.home.goals_scored + self.away.goals_scored
    }

    pub fn goals_allowed(&self) -> u32 {
        self.home.goals_allowed + self.away.goals_allowed
    }

    pub fn goal_difference(&self) -> i64 {
        i64::from(self.goals_scored()) - i64::from(self.goals_allowed())
    }
}

/// Records of every entry, in entry order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standings {
    records: Vec<TeamRecord>,
}

impl Standings {
    pub fn new(teams: &[Team]) -> Self {
        Self { records: teams.iter().map(|t| TeamRecord::new(t.name(), t.id())).collect() }
    }

    pub fn from_records(records: Vec<TeamRecord>) -> Self {
        Self { records }
    }

    /// Book a finished fixture for both sides.
    pub fn record_fixture(&mut self, home: usize, away: usize, home_score: u32, away_score: u32) {
        if let Some(record) = self.records.get_mut(home) {
            record.record(home_score, away_score, true);
            record.set_home_result(away, home_score, away_score);
        }
        if let Some(record) = self.records.get_mut(away) {
            record.record(away_score, home_score, false);
        }
    }

    pub fn records(&self) -> &[TeamRecord] {
        &self.records
    }

    pub fn record(&self, index: usize) -> Option<&TeamRecord> {
        self.records.get(index)
    }

    /// Entry indices by points, non-ascending; equal points keep entry order.
    pub fn order(&self) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.records.len()).collect();
        order.sort_by(|&a, &b| self.records[b].points.cmp(&self.records[a].points));
        order
    }

    pub fn sorted(&self) -> Vec<&TeamRecord> {
        self.order().into_iter().map(|i| &self.records[i]).collect()
    }

    /// First entry with the highest points, if anybody has points at all.
    pub fn best_team(&self) -> Option<usize> {
        let mut best: Option<(usize, u32)> = None;
        for (index, record) in self.records.iter().enumerate() {
            if record.points > best.map_or(0, |(_, points)| points) {
                best = Some((index, record.points));
            }
        }
        best.map(|(index, _)| index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn standings(n: usize) -> Standings {
        Standings::from_records(
            (0..n).map(|i| TeamRecord::new(format!("T{i}"), char::from(b'0' + i as u8))).collect(),
        )
    }

    #[test]
    fn test_points_and_venues() {
        let mut s = standings(2);
        s.record_fixture(0, 1, 3, 1);
        s.record_fixture(1, 0, 2, 2);

        let a = s.record(0).unwrap();
        assert_eq!(a.points, 4);
        assert_eq!(a.games_played, 2);
        assert_eq!(a.home, VenueRecord { wins: 1, draws: 0, losses: 0, goals_scored: 3, goals_allowed: 1 });
        assert_eq!(a.away, VenueRecord { wins: 0, draws: 1, losses: 0, goals_scored: 2, goals_allowed: 2 });
        assert_eq!(a.goal_difference(), 2);
        assert_eq!(a.home_result(1), Some((3, 1)));

        let b = s.record(1).unwrap();
        assert_eq!(b.points, 1);
        assert_eq!((b.wins(), b.draws(), b.losses()), (0, 1, 1));
        assert_eq!(b.home_result(0), Some((2, 2)));
        assert_eq!(b.home_result(1), None);
    }

    #[test]
    fn test_sort_is_stable_and_non_ascending() {
        let mut s = standings(4);
        s.record_fixture(1, 0, 1, 0); // T1 3
        s.record_fixture(3, 2, 1, 0); // T3 3
        s.record_fixture(2, 0, 0, 0); // T2 1, T0 1
        assert_eq!(s.order(), vec![1, 3, 0, 2]);
        let names: Vec<&str> = s.sorted().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["T1", "T3", "T0", "T2"]);
    }

    #[test]
    fn test_best_team_needs_points() {
        let mut s = standings(3);
        assert_eq!(s.best_team(), None);
        s.record_fixture(0, 1, 0, 0);
        s.record_fixture(2, 1, 1, 0);
        s.record_fixture(0, 2, 2, 0);
        // T0 4 points, T2 3, T1 1
        assert_eq!(s.best_team(), Some(0));
    }
}
