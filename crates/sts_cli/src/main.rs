//! Soccer Tournament Simulator CLI
//!
//! Reads an attributes file, plays the double round robin and prints the
//! best team's roaming map followed by the requested tables.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use sts_core::config::{load_config, MatchSettings, TournamentSettings};
use sts_core::render;
use sts_core::Tournament;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "sts")]
#[command(about = "Simulate a round-robin soccer tournament", version)]
struct Cli {
    /// Attributes file (tag format, .json or .yaml)
    attributes: PathBuf,

    /// Tables to print: s = scores, t = standings, st/ts = both
    #[arg(long, short)]
    output: Option<OutputSpec>,

    /// Tournament seed; random when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Live ticks per match
    #[arg(long, default_value_t = sts_core::MATCH_TICKS)]
    ticks: u32,

    /// Print the tournament report as JSON instead of tables
    #[arg(long)]
    json: bool,

    /// Print per-player statistics for every team
    #[arg(long)]
    stats: bool,

    /// Print the score of every fixture
    #[arg(long)]
    fixtures: bool,

    /// More log output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputSpec {
    S,
    T,
    St,
    Ts,
}

impl OutputSpec {
    fn scores(self) -> bool {
        !matches!(self, OutputSpec::T)
    }

    fn standings(self) -> bool {
        !matches!(self, OutputSpec::S)
    }
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli, out: &mut impl Write) -> Result<()> {
    debug!(path = %cli.attributes.display(), seed = ?cli.seed, ticks = cli.ticks, "reading attributes");
    let config = load_config(&cli.attributes)
        .with_context(|| format!("Failed to read attributes from {}", cli.attributes.display()))?;
    let (width, length) = (config.pitch.width, config.pitch.length);

    let settings = TournamentSettings {
        seed: cli.seed,
        match_settings: MatchSettings { duration_ticks: cli.ticks },
    };
    let mut tournament = Tournament::new(config, settings).context("Invalid tournament setup")?;
    let report = tournament.play().context("Tournament aborted")?;

    if cli.json {
        serde_json::to_writer_pretty(&mut *out, &report)?;
        writeln!(out)?;
        return Ok(());
    }

    match report.standings.best_team().and_then(|i| tournament.team(i)) {
        Some(best) => {
            writeln!(out, "Best Team Strategy: {}", best.name())?;
            write!(out, "{}", render::render_roaming_regions(best, width, length))?;
        }
        None => writeln!(out, "Best Team Strategy: none (no team won a point)")?,
    }
    writeln!(out)?;

    if cli.fixtures {
        for fixture in &report.fixtures {
            writeln!(out, "{}", render::scoreboard(&fixture.result))?;
        }
    }
    if cli.stats {
        for team in tournament.teams() {
            writeln!(out, "{}", render::team_statistics(team))?;
        }
    }
    if let Some(spec) = cli.output {
        if spec.scores() {
            write!(out, "{}", render::scores_table(&report))?;
        }
        if spec.standings() {
            write!(out, "{}", render::standings_table(&report))?;
        }
    }
    writeln!(out, "Seed: {}", report.seed)?;
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run(&cli, &mut out)
}
