//! Bondemala SACCO dashboard: savings, members, loans and recent activity at a glance.

mod config;
mod consts;
mod data;
mod error;
mod headless;
mod logging;
mod ui;

use crate::config::{Config, get_config_path};
use crate::data::DashboardData;
use crate::error::DashboardError;
use crate::logging::{LogTarget, init_logging};
use clap::{Parser, Subcommand};
use crossterm::{
    cursor::Show,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{IsTerminal, Write};
use std::path::PathBuf;
use std::{error::Error, io};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Command-line arguments
struct Args {
    /// Path to the config file. Defaults to ~/.bondemala/config.json
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Open the interactive dashboard
    Start {
        /// Start with the sidebar collapsed to icons.
        #[arg(long)]
        collapsed: bool,

        /// Disable the dark background colour.
        #[arg(long)]
        no_background_color: bool,

        /// Terminal width at or below which the mobile layout is used.
        #[arg(long, value_name = "COLUMNS")]
        mobile_breakpoint: Option<u16>,

        /// Write logs to this file while the dashboard is open.
        #[arg(long, value_name = "PATH")]
        log_file: Option<PathBuf>,
    },
    /// Print the dashboard figures as plain text
    Summary {
        /// Print the full data set as JSON instead.
        #[arg(long)]
        json: bool,
    },
    /// Write a config file with the default settings
    InitConfig {
        /// Overwrite an existing config file.
        #[arg(long)]
        force: bool,
    },
}

fn main() {
    let args = Args::parse();
    if let Err(e) = run(args) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let config_override = args.config;

    match args.command {
        Command::Start {
            collapsed,
            no_background_color,
            mobile_breakpoint,
            log_file,
        } => {
            if let Some(path) = &log_file {
                init_logging(LogTarget::File(path))?;
            }
            let config_path = resolve_config_path(config_override)?;
            let mut config = Config::load_or_default(&config_path)?;
            // Flags override the config file.
            config.sidebar_collapsed |= collapsed;
            if no_background_color {
                config.with_background_color = false;
            }
            if let Some(breakpoint) = mobile_breakpoint {
                config.mobile_breakpoint = breakpoint;
            }
            start(&config).map_err(Into::into)
        }
        Command::Summary { json } => {
            init_logging(LogTarget::Stderr)?;
            let data = DashboardData::new();
            if json {
                println!("{}", headless::summary_json(&data)?);
            } else {
                headless::write_summary(&mut io::stdout().lock(), &data)?;
            }
            Ok(())
        }
        Command::InitConfig { force } => {
            init_logging(LogTarget::Stderr)?;
            let config_path = resolve_config_path(config_override)?;
            if config_path.exists() && !force {
                return Err(DashboardError::ConfigExists(config_path).into());
            }
            Config::default().save(&config_path)?;
            log::info!("Wrote default config to {}", config_path.display());
            println!("Config written to {}", config_path.display());
            Ok(())
        }
    }
}

/// The `--config` path if given, otherwise the default location.
fn resolve_config_path(config_override: Option<PathBuf>) -> Result<PathBuf, DashboardError> {
    match config_override {
        Some(path) => Ok(path),
        None => get_config_path(),
    }
}

/// Starts the interactive dashboard.
///
/// # Arguments
/// * `config` - Display preferences, already merged with command-line flags.
fn start(config: &Config) -> Result<(), DashboardError> {
    if !io::stdout().is_terminal() {
        return Err(DashboardError::NotATerminal);
    }

    // Terminal setup. Everything after raw mode is switched on goes through
    // `restore_terminal`, whether or not it succeeded.
    enable_raw_mode()?;
    let res = run_dashboard(config);
    let restored = restore_terminal(&mut io::stdout());

    res?;
    restored?;
    Ok(())
}

/// Enters the alternate screen and runs the UI loop until the user quits.
fn run_dashboard(config: &Config) -> Result<(), DashboardError> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    // Initialize the terminal with Crossterm backend.
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create the application and run it.
    let app = ui::App::new(ui::UIConfig::from(config));
    ui::run(&mut terminal, app)?;
    Ok(())
}

/// Undo the terminal setup. Every step runs even if an earlier one fails;
/// the first error is returned.
fn restore_terminal<W: Write>(out: &mut W) -> io::Result<()> {
    let raw_mode = disable_raw_mode();
    let screen = execute!(out, LeaveAlternateScreen, DisableMouseCapture, Show);
    raw_mode.and(screen)
}
