//! Plain-text views
//!
//! Everything here is read-only over engine and tournament state and
//! returns a `String`; printing is the caller's business.
//!
//! Grids are drawn one row per Y coordinate starting at `y = 0` (goal 1),
//! with `*` for the ball, `-` for an empty cell and the team id character
//! for an occupied one.

use std::collections::HashSet;
use std::fmt::Write;

use crate::engine::match_sim::MatchEngine;
use crate::engine::pitch::Pitch;
use crate::engine::types::{Point, Side};
use crate::models::{MatchResult, Player, Team};
use crate::tournament::TournamentReport;

const NAME_WIDTH: usize = 12;
const RULE_WIDTH: usize = 118;

fn render_grid(width: i32, length: i32, ball: Option<Point>, cell: impl Fn(Point) -> Option<char>) -> String {
    let mut out = String::with_capacity(((width + 1) * length) as usize);
    for y in 0..length {
        for x in 0..width {
            let p = Point::new(x, y);
            if ball == Some(p) {
                out.push('*');
            } else {
                out.push(cell(p).unwrap_or('-'));
            }
        }
        out.push('\n');
    }
    out
}

/// Pitch occupancy with the ball. `team_ids` are the id characters of the
/// `[Home, Away]` teams.
pub fn render_pitch(pitch: &Pitch, ball: Point, team_ids: [char; 2]) -> String {
    render_grid(pitch.width(), pitch.length(), Some(ball), |p| {
        pitch.occupant_at(p).ok().and_then(|c| c.occupant()).map(|who| match who.side {
            Side::Home => team_ids[0],
            Side::Away => team_ids[1],
        })
    })
}

/// Current state of a running match.
pub fn render_match(engine: &MatchEngine<'_>) -> String {
    let ids = [engine.team(Side::Home).id(), engine.team(Side::Away).id()];
    render_pitch(engine.pitch(), engine.ball().position, ids)
}

/// Union of a team's active roaming rectangles, followed by the covered and
/// uncovered cell counts.
pub fn render_roaming_regions(team: &Team, width: i32, length: i32) -> String {
    let covered = |p: Point| team.players().iter().any(|pl| pl.roaming().contains(p));
    let mut out = render_grid(width, length, None, |p| covered(p).then_some(team.id()));

    let area = (0..length)
        .flat_map(|y| (0..width).map(move |x| Point::new(x, y)))
        .filter(|&p| covered(p))
        .count() as i64;
    let total = i64::from(width) * i64::from(length);
    let _ = writeln!(out, "\nTotal team covered area = {area}");
    let _ = writeln!(out, "Total team uncovered area = {}", total - area);
    out
}

/// One player's active roaming rectangle.
pub fn render_player_region(player: &Player, width: i32, length: i32) -> String {
    let rect = player.roaming();
    let mut out = format!("Roaming region area for player {} = {}\n", player.id(), rect.area());
    out.push_str(&render_grid(width, length, None, |p| rect.contains(p).then_some(player.team_id())));
    out
}

/// Every cell on which the player had the ball.
pub fn render_touches(player: &Player, width: i32, length: i32) -> String {
    let touched: HashSet<Point> = player.touch_history().iter().copied().collect();
    render_grid(width, length, None, |p| touched.contains(&p).then_some(player.team_id()))
}

/// Per-player touches, goals and own goals, then the team total.
pub fn team_statistics(team: &Team) -> String {
    let mut out = format!("{} player statistics:\n", team.name());
    for p in team.players() {
        let _ = writeln!(
            out,
            "    Player {} Touches: {}, Goals: {}, Own Goals: {}",
            p.id(),
            p.touches(),
            p.goals(),
            p.own_goals()
        );
    }
    let _ = writeln!(out, "Total team touches: {}", team.total_touches());
    out
}

pub fn scoreboard(result: &MatchResult) -> String {
    format!(
        "{} : {}\n{} : {}\n",
        result.home_team, result.home_score, result.away_team, result.away_score
    )
}

fn short_name(name: &str) -> String {
    name.chars().take(NAME_WIDTH).collect()
}

fn rule() -> String {
    format!("{}\n", "_".repeat(RULE_WIDTH))
}

/// Home results matrix: row team hosted column team.
pub fn scores_table(report: &TournamentReport) -> String {
    let records = report.standings.records();
    let mut out = format!("{:20}", "");
    for record in records {
        let _ = write!(out, "{} {:2}", short_name(&record.name), "");
    }
    out.push('\n');
    out.push_str(&rule());

    for (home, record) in records.iter().enumerate() {
        let _ = write!(out, "{:<16}", short_name(&record.name));
        for away in 0..records.len() {
            match report.score(home, away) {
                Some((h, a)) if home != away => {
                    let _ = write!(out, "{:7} {h}-{a} ", "");
                }
                _ => {
                    let _ = write!(out, "{:7} {:>3} ", "", "---");
                }
            }
        }
        out.push('\n');
    }
    out.push('\n');
    out
}

/// Standings by points with home, away and overall columns.
pub fn standings_table(report: &TournamentReport) -> String {
    let mut out = format!("{:20} {:>15} {:>27} {:>30}\n", "", "HOME", "AWAY", "OVERALL");
    let _ = write!(out, "{:<20}", "TEAM");
    for _ in 0..2 {
        let _ = write!(out, "{:>4} {:>4} {:>4} {:>4} {:>4}    ", "W", "D", "L", "GS", "GA");
    }
    let _ = write!(out, "{:>4} {:>4} {:>4} {:>4} {:>4} {:>4}    ", "P", "W", "D", "L", "GS", "GA");
    let _ = writeln!(out, "{:>4} {:>4}", "GD", "PTS");
    out.push_str(&rule());

    for r in report.standings.sorted() {
        let _ = write!(out, "{:<20}", r.name);
        for v in [&r.home, &r.away] {
            let _ = write!(
                out,
                "{:4} {:4} {:4} {:4} {:4}    ",
                v.wins, v.draws, v.losses, v.goals_scored, v.goals_allowed
            );
        }
        let _ = write!(
            out,
            "{:4} {:4} {:4} {:4} {:4} {:4}    ",
            r.games_played,
            r.wins(),
            r.draws(),
            r.losses(),
            r.goals_scored(),
            r.goals_allowed()
        );
        let _ = writeln!(out, "{:4} {:4}", r.goal_difference(), r.points);
    }
    out
}
