//! Runlog CLI - personal running log and goal tracker.

mod render;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use runlog_core::{parse_date, Date, GoalConfig, NewRun, RunId, Username};
use runlog_journal::{BasicRunJournal, RunJournal};
use runlog_progress::{BasicProgressTracker, ProgressEngine, ProgressTracker};
use runlog_storage::{JsonStorage, Storage};
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "runlog")]
#[command(about = "Personal running log and distance goal tracker", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Profile the runs belong to
    #[arg(short, long, global = true, default_value = "default", env = "RUNLOG_USER")]
    user: String,

    /// Storage directory
    #[arg(short, long, global = true, default_value = ".runlog", env = "RUNLOG_STORAGE")]
    storage: std::path::PathBuf,

    /// Overall distance goal in km
    #[arg(long, global = true, default_value_t = runlog_core::DEFAULT_OVERALL_GOAL_KM, env = "RUNLOG_GOAL")]
    goal: f64,

    /// Weekly distance goal in km
    #[arg(long, global = true, default_value_t = runlog_core::DEFAULT_WEEKLY_GOAL_KM, env = "RUNLOG_WEEKLY_GOAL")]
    weekly_goal: f64,

    /// Days covered by the target-pace line
    #[arg(long, global = true, default_value_t = runlog_core::DEFAULT_HORIZON_DAYS)]
    horizon_days: u32,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Log a run
    Add {
        /// Distance in km
        distance: f64,
        /// Day of the run (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<String>,
        /// Free-text note
        #[arg(long)]
        comment: Option<String>,
    },
    /// Delete a run
    Delete {
        /// Run ID
        id: String,
    },
    /// List all runs by date
    List,
    /// Show goal progress, streaks and forecast
    Status {
        /// Compute as of this day (YYYY-MM-DD) instead of today
        #[arg(long)]
        as_of: Option<String>,
    },
    /// Show weekly totals
    Weekly {
        /// Compute as of this day (YYYY-MM-DD) instead of today
        #[arg(long)]
        as_of: Option<String>,
    },
    /// Print the cumulative and target-pace chart series
    Chart {
        /// Compute as of this day (YYYY-MM-DD) instead of today
        #[arg(long)]
        as_of: Option<String>,
    },
    /// List users with stored runs
    Users,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Reject bad goals before any computation.
    let config = GoalConfig::new(cli.goal, cli.weekly_goal)
        .context("invalid goal configuration")?
        .with_horizon_days(cli.horizon_days)
        .context("invalid goal configuration")?;
    let user = Username::new(cli.user.as_str())
        .with_context(|| format!("invalid user {:?}", cli.user))?;

    let storage = JsonStorage::new(&cli.storage)
        .await
        .with_context(|| format!("cannot open storage at {}", cli.storage.display()))?;
    debug!(storage = %cli.storage.display(), %user, "opened storage");

    match cli.command {
        Commands::Add { distance, date, comment } => {
            let journal = BasicRunJournal::new(storage);
            let record = journal
                .add_run(&user, NewRun { date, distance_km: distance, comment })
                .await?;
            if cli.json {
                print_json(&record)?;
            } else {
                println!("Saved run {} ({} km on {})", record.id, render::km(record.distance_km), record.date);
            }
        }
        Commands::Delete { id } => {
            let id: RunId = id.parse().map_err(|_| anyhow::anyhow!("Invalid run ID: {id}"))?;
            let journal = BasicRunJournal::new(storage);
            let removed = journal.delete_run(&user, id).await?;
            if cli.json {
                print_json(&removed)?;
            } else {
                println!("Deleted run {} ({} km on {})", removed.id, render::km(removed.distance_km), removed.date);
            }
        }
        Commands::List => {
            let journal = BasicRunJournal::new(storage);
            let runs = journal.runs(&user).await?;
            if cli.json {
                print_json(&runs)?;
            } else {
                print!("{}", render::run_table(&runs));
            }
        }
        Commands::Status { as_of } => {
            let tracker = BasicProgressTracker::new(storage, ProgressEngine::new(config.clone()));
            let snapshot = tracker.snapshot(&user, resolve_as_of(as_of)?).await?;
            if cli.json {
                print_json(&snapshot)?;
            } else {
                print!("{}", render::status(&snapshot, &config));
            }
        }
        Commands::Weekly { as_of } => {
            let tracker = BasicProgressTracker::new(storage, ProgressEngine::new(config.clone()));
            let snapshot = tracker.snapshot(&user, resolve_as_of(as_of)?).await?;
            if cli.json {
                print_json(&snapshot.weekly)?;
            } else {
                print!("{}", render::weekly(&snapshot.weekly, config.weekly_goal_km()));
            }
        }
        Commands::Chart { as_of } => {
            let tracker = BasicProgressTracker::new(storage, ProgressEngine::new(config.clone()));
            let snapshot = tracker.snapshot(&user, resolve_as_of(as_of)?).await?;
            if cli.json {
                print_json(&serde_json::json!({
                    "goal_km": config.overall_goal_km(),
                    "cumulative": snapshot.cumulative,
                    "target_pace": snapshot.target_pace,
                }))?;
            } else {
                print!("{}", render::chart(&snapshot.cumulative, &snapshot.target_pace));
            }
        }
        Commands::Users => {
            let users = storage.list_users().await?;
            if cli.json {
                print_json(&users)?;
            } else {
                for user in users {
                    println!("{user}");
                }
            }
        }
    }

    Ok(())
}

fn resolve_as_of(as_of: Option<String>) -> Result<Date> {
    match as_of {
        Some(text) => Ok(parse_date(&text)?),
        None => Ok(chrono::Local::now().date_naive()),
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
