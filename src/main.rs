//! Studioplan - AI project planner for design studios.
//!
//! Opens a four-step planning wizard in the terminal, or generates a
//! schedule headlessly from a TOML brief file.

use std::path::PathBuf;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use studioplan::core::{
    calendar, google_calendar_link, kanban, timeline, CanonicalSchedule, Config, TeamRoster,
};
use studioplan::infer::{InferenceManager, InferenceRequest};
use studioplan::{tui, App};

/// AI project planner for design studios
#[derive(Parser)]
#[command(name = "studioplan")]
#[command(author, version, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    command: Option<Commands>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive planner (default)
    Run,

    /// Generate a schedule from a TOML brief file, without the TUI
    Plan {
        /// Path to the brief file
        brief: PathBuf,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,

        /// Include a Google Calendar link per event
        #[arg(short, long)]
        links: bool,
    },

    /// Show configuration
    Config {
        /// Show config file path
        #[arg(long)]
        path: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let filter = if cli.verbose { EnvFilter::new("debug") } else { EnvFilter::new("warn") };

    tracing_subscriber::registry().with(fmt::layer().with_target(false)).with(filter).init();

    match cli.command {
        None | Some(Commands::Run) => cmd_run()?,
        Some(Commands::Plan { brief, format, links }) => cmd_plan(&brief, &format, links)?,
        Some(Commands::Config { path }) => cmd_config(path)?,
        Some(Commands::Completions { shell }) => cmd_completions(shell),
    }

    Ok(())
}

/// Open the interactive planner.
fn cmd_run() -> Result<()> {
    let app = App::new()?;
    tui::run_tui(app)
}

/// Generate a schedule from a brief file and print it.
fn cmd_plan(brief_path: &PathBuf, format: &str, links: bool) -> Result<()> {
    let config = Config::load()?;
    let brief = studioplan::core::ProjectBrief::load(brief_path)?;
    let (project, roster, deliverables, style) = brief.into_parts()?;

    let request = InferenceRequest::build(&project, &roster, &deliverables, &style)?;

    let runtime = tokio::runtime::Builder::new_current_thread().enable_all().build()?;
    let raw = runtime.block_on(async {
        let manager = InferenceManager::from_config(&config.inference).await;
        if !manager.is_available() {
            anyhow::bail!(
                "no inference provider available; set GEMINI_API_KEY or start an Ollama server"
            );
        }
        Ok(manager.generate(&request).await?)
    })?;

    let schedule = CanonicalSchedule::from_raw(raw)?;

    match format {
        "json" => print_json(&schedule, &roster, links)?,
        _ => print_text(&schedule, &roster, &project.start_date, links),
    }

    Ok(())
}

/// Print the schedule as JSON.
fn print_json(schedule: &CanonicalSchedule, roster: &TeamRoster, links: bool) -> Result<()> {
    let events: Vec<serde_json::Value> = schedule
        .events()
        .iter()
        .map(|event| {
            let mut value = serde_json::to_value(event)?;
            if links {
                value["calendarLink"] =
                    serde_json::Value::String(google_calendar_link(event, roster));
            }
            Ok(value)
        })
        .collect::<Result<_>>()?;

    println!("{}", serde_json::to_string_pretty(&events)?);
    Ok(())
}

/// Print the schedule as text: timeline, then kanban, then calendar.
fn print_text(schedule: &CanonicalSchedule, roster: &TeamRoster, start_date: &str, links: bool) {
    println!("Timeline ({} events)", schedule.len());
    for entry in timeline(schedule, roster) {
        println!(
            "  {}  {}  [{}] {}",
            entry.event.date.format("%Y-%m-%d"),
            entry.event.title,
            entry.assignee.initials,
            entry.assignee.name,
        );
        if links {
            println!("      {}", google_calendar_link(entry.event, roster));
        }
    }

    let board = kanban(schedule);
    println!();
    println!("Kanban");
    for (title, events) in
        [("Finished", &board.finished), ("On It", &board.on_it), ("To Do", &board.to_do)]
    {
        println!("  {title} ({})", events.len());
        for event in events {
            println!("    {}  {}", event.date.format("%Y-%m-%d"), event.title);
        }
    }

    if let Some(grid) = calendar(schedule, start_date) {
        println!();
        println!("Calendar: {}", grid.label);
        for cell in grid.cells.iter().filter(|c| !c.events.is_empty()) {
            for event in &cell.events {
                println!("  {:>2}  {}", cell.day, event.title);
            }
        }
    }
}

/// Show configuration.
fn cmd_config(show_path: bool) -> Result<()> {
    if show_path {
        match Config::config_dir() {
            Some(dir) => println!("{}", dir.join("config.toml").display()),
            None => println!("Could not determine config directory"),
        }
        return Ok(());
    }

    let config = Config::load()?;
    println!("{}", toml::to_string_pretty(&config)?);
    Ok(())
}

/// Generate shell completions.
fn cmd_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut std::io::stdout());
}
