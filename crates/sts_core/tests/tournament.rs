//! Whole-tournament runs from attribute files.

use std::io::Write;

use sha2::{Digest, Sha256};
use sts_core::config::{load_config, MatchSettings, RoamingStrategy, TournamentSettings};
use sts_core::render;
use sts_core::{SimError, Tournament};

const ATTRIBUTES: &str = r"
<begin pitch>
    <length>120<\length>
    <width>60<\width>
<\end pitch>
<begin team>
    <name>Random Rovers<\name>
    <numberOfPlayers>5<\numberOfPlayers>
    <strategy>random<\strategy>
<\end team>
<begin team>
    <name>Shape Keepers<\name>
    <numberOfPlayers>5<\numberOfPlayers>
    <strategy>custom
        <region>(10,0)(50,20)<\region>
        <region>(0,20)(29,69)<\region>
        <region>(30,20)(59,69)<\region>
        <region>(0,70)(29,119)<\region>
        <region>(30,70)(59,119)<\region>
    <\strategy>
<\end team>
<begin team>
    <name>Wanderers<\name>
    <numberOfPlayers>5<\numberOfPlayers>
    <strategy>random<\strategy>
<\end team>
";

fn write_temp(suffix: &str, contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

fn settings(seed: u64) -> TournamentSettings {
    TournamentSettings::seeded(seed).with_match_settings(MatchSettings::quick())
}

fn report_hash(seed: u64) -> String {
    let file = write_temp(".txt", ATTRIBUTES);
    let config = load_config(file.path()).unwrap();
    let report = Tournament::new(config, settings(seed)).unwrap().play().unwrap();
    let json = serde_json::to_vec(&report).unwrap();
    Sha256::digest(&json).iter().map(|b| format!("{b:02x}")).collect()
}

#[test]
fn tag_file_tournament_runs_to_completion() {
    let file = write_temp(".txt", ATTRIBUTES);
    let config = load_config(file.path()).unwrap();
    assert_eq!(config.teams.len(), 3);
    assert!(matches!(config.teams[1].strategy, RoamingStrategy::Custom(ref r) if r.len() == 5));

    let mut tournament = Tournament::new(config, settings(2011)).unwrap();
    let report = tournament.play().unwrap();

    assert_eq!(report.fixtures.len(), 6);
    for (i, record) in report.standings.records().iter().enumerate() {
        assert_eq!(record.games_played, 4);
        assert_eq!(record.home.wins + record.home.draws + record.home.losses, 2);
        for j in 0..3 {
            assert_eq!(report.score(i, j).is_some(), i != j);
        }
    }

    let scored: u32 = report.standings.records().iter().map(|r| r.goals_scored()).sum();
    let allowed: u32 = report.standings.records().iter().map(|r| r.goals_allowed()).sum();
    assert_eq!(scored, allowed);
    assert_eq!(scored, report.total_goals());

    let points: Vec<u32> = report.standings.sorted().iter().map(|r| r.points).collect();
    assert!(points.windows(2).all(|w| w[0] >= w[1]));

    // Custom rectangles survive the tournament untouched.
    let keepers = tournament.team(1).unwrap();
    assert_eq!(keepers.players()[1].home_roaming().x4(), 29);
    assert!(keepers.roaming_regions_ok().is_ok());

    let table = render::standings_table(&report);
    assert_eq!(table.lines().count(), 3 + 3);
}

#[test]
fn same_seed_same_hash() {
    assert_eq!(report_hash(123), report_hash(123));
}

#[test]
fn json_and_yaml_configs_match_tag_config() {
    let tag = load_config(write_temp(".txt", ATTRIBUTES).path()).unwrap();

    let json = write_temp(".json", &serde_json::to_string(&tag).unwrap());
    assert_eq!(load_config(json.path()).unwrap(), tag);

    let yaml = write_temp(".yml", &serde_yaml::to_string(&tag).unwrap());
    assert_eq!(load_config(yaml.path()).unwrap(), tag);
}

#[test]
fn oversize_custom_region_aborts_setup() {
    let text = ATTRIBUTES.replace("(0,20)(29,69)", "(0,0)(59,119)");
    let config = load_config(write_temp(".txt", &text).path()).unwrap();
    let mut tournament = Tournament::new(config, settings(1)).unwrap();
    let err = tournament.play().unwrap_err();
    assert!(matches!(err, SimError::RoamingTooLarge { player: 2, .. }));
    assert!(err.is_config_fault());
}

#[test]
fn single_team_is_rejected() {
    let text = r"<begin pitch><length>50<\length><width>30<\width><\end pitch>
<begin team><name>Alone<\name><numberOfPlayers>2<\numberOfPlayers><strategy>random<\strategy><\end team>";
    let config = load_config(write_temp(".txt", text).path()).unwrap();
    assert!(matches!(Tournament::new(config, settings(1)), Err(SimError::TooFewTeams(1))));
}
