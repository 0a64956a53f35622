//! Rally championship CLI.
//!
//! Plays a season file (or the built-in two-round season) and prints the
//! standings, leader, statistics, race results and car ratings.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{debug, info};

use championship::exit_codes;
use championship::io::season::{SeasonConfig, load_season, write_reference_season};
use championship::report;
use championship::season::{SeasonOutcome, play_season};

#[derive(Parser)]
#[command(
    name = "championship",
    version,
    about = "Rally championship standings and statistics"
)]
struct Cli {
    /// Season file to play. Defaults to the built-in two-round season.
    #[arg(long, global = true)]
    season: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Write the built-in season to a TOML file as a starting point.
    Init {
        #[arg(long, default_value = "season.toml")]
        path: PathBuf,
        /// Overwrite an existing file.
        #[arg(short, long)]
        force: bool,
    },
    /// Print the full championship report.
    Report {
        /// Emit a JSON summary instead of text.
        #[arg(long)]
        json: bool,
    },
    /// Print the standings table.
    Standings,
    /// Print the championship leader.
    Leader,
    /// Print aggregate statistics.
    Stats,
    /// Print every race's results.
    Races,
    /// Print the performance rating of every car.
    Cars,
}

fn main() {
    championship::logging::init();
    match run() {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("{:#}", err);
            std::process::exit(exit_codes::INVALID);
        }
    }
}

fn run() -> Result<i32> {
    let cli = Cli::parse();
    let season = cli.season.as_deref();
    match cli.command {
        Command::Init { path, force } => cmd_init(&path, force),
        Command::Report { json } => cmd_report(season, json),
        Command::Standings => {
            print!("{}", play(season)?.championship.standings());
            Ok(exit_codes::OK)
        }
        Command::Leader => cmd_leader(season),
        Command::Stats => {
            print!("{}", report::statistics_block(&play(season)?.championship));
            Ok(exit_codes::OK)
        }
        Command::Races => {
            print!("{}", report::race_results(&play(season)?.championship));
            Ok(exit_codes::OK)
        }
        Command::Cars => cmd_cars(season),
    }
}

fn cmd_report(season: Option<&Path>, json: bool) -> Result<i32> {
    let outcome = play(season)?;
    if json {
        let summary = report::summarize(&outcome);
        let payload = serde_json::to_string_pretty(&summary).context("serialize summary")?;
        println!("{payload}");
    } else {
        print!("{}", report::render(&outcome));
    }
    Ok(exit_codes::OK)
}

fn cmd_leader(season: Option<&Path>) -> Result<i32> {
    let outcome = play(season)?;
    let championship = &outcome.championship;
    println!("{}", report::leader_line(championship));
    if championship.leading_driver().is_none() {
        return Ok(exit_codes::NO_LEADER);
    }
    Ok(exit_codes::OK)
}

fn cmd_cars(season: Option<&Path>) -> Result<i32> {
    let outcome = play(season)?;
    for (_, car) in outcome.garage.iter() {
        println!(
            "{} {} ({}): {}",
            car.make(),
            car.model(),
            car.surface(),
            report::fixed(car.calculate_performance(), 1)
        );
    }
    Ok(exit_codes::OK)
}

fn play(season_path: Option<&Path>) -> Result<SeasonOutcome> {
    let season = match season_path {
        Some(path) => load_season(path)?,
        None => {
            debug!("using built-in season");
            SeasonConfig::reference()?
        }
    };
    play_season(&season).context("play season")
}

fn cmd_init(path: &Path, force: bool) -> Result<i32> {
    if write_reference_season(path, force)? {
        info!(path = %path.display(), "season written");
        println!("init: wrote {}", path.display());
    } else {
        println!("init: {} exists (use --force to overwrite)", path.display());
    }
    Ok(exit_codes::OK)
}
