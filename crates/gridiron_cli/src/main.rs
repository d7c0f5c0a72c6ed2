//! Gridiron CLI
//!
//! Thin collaborator over the core engine: seed the default teams,
//! print the game summary, export the CSV report, reset saved data.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use gridiron_core::{GameDocument, GameSession, PerSide, SaveManager, TeamSide};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "gridiron")]
#[command(about = "Track and export football game data", long_about = None)]
struct Cli {
    /// Data directory holding the game and teams documents
    #[arg(long, default_value = "data")]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the built-in default teams document
    SeedTeams,

    /// Print scores, yardage stats, and drive results
    Summary,

    /// Export the full game report as CSV
    Export {
        /// Output CSV file path (stdout when omitted)
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Reset the saved game data to an empty game
    Reset,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let manager = SaveManager::new(&cli.data_dir);

    match cli.command {
        Commands::SeedTeams => seed_teams(&manager),
        Commands::Summary => summary(&manager),
        Commands::Export { out } => export(&manager, out),
        Commands::Reset => {
            manager.reset_game_data().context("resetting game data")?;
            println!("Game data reset");
            Ok(())
        }
    }
}

fn seed_teams(manager: &SaveManager) -> Result<()> {
    let session = GameSession::default();
    manager.save_teams(&session.to_teams_document()).context("writing teams document")?;
    println!("Wrote default teams to {}", manager.teams_path().display());
    Ok(())
}

/// Rebuild a session from whatever documents exist; missing data falls
/// back to the built-in teams and an empty game.
fn load_session(manager: &SaveManager) -> GameSession {
    match manager.load_teams() {
        Some(teams) => {
            let game = manager.load_game().unwrap_or_else(GameDocument::empty);
            GameSession::restore(game, teams)
        }
        None => GameSession::default(),
    }
}

fn summary(manager: &SaveManager) -> Result<()> {
    let session = load_session(manager);
    let stats = session.stats();

    for side in [TeamSide::Home, TeamSide::Away] {
        let team = session.team(side);
        let score = session.score(side);
        let team_stats = stats[side];

        println!("{} ({}): {} pts", team.name, team.short_name, score.points);
        println!(
            "  TD {}  FG {}  XP {}  2PT {}  SAF {}",
            score.touchdowns,
            score.field_goals,
            score.extra_points,
            score.two_point_conversions,
            score.safeties
        );
        println!(
            "  Total {} yds  Passing {} yds  Rushing {} yds",
            team_stats.total_yards, team_stats.passing_yards, team_stats.rushing_yards
        );
    }

    if session.drives().is_empty() {
        println!("\nNo drives recorded");
        return Ok(());
    }

    println!("\nDrives:");
    for drive in session.drives() {
        println!(
            "  #{} {} - {} ({} plays, {} yds, possession {})",
            drive.sequence,
            drive.team_name,
            drive.result.label(),
            drive.plays.len(),
            drive.total_yards(),
            drive.possession.as_deref().unwrap_or("-")
        );
    }

    Ok(())
}

fn export(manager: &SaveManager, out: Option<PathBuf>) -> Result<()> {
    let Some(game) = manager.load_game() else {
        println!("No game data available");
        return Ok(());
    };
    let scores = PerSide::new(game.home_score.clone(), game.away_score.clone());
    let csv = gridiron_core::export_csv(&scores, &game.player_scores, &game.drives);

    match out {
        Some(path) => {
            std::fs::write(&path, csv)
                .with_context(|| format!("writing CSV to {}", path.display()))?;
            println!("Exported game data to {}", path.display());
        }
        None => print!("{}", csv),
    }

    Ok(())
}
