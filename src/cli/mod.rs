//! Command-line interface parsing and handling
//!
//! This module parses command-line arguments, prepares diagnostics and
//! configuration, and dispatches to the console or a config subcommand.

use std::error::Error;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use tracing::info;

use crate::core::app::App;
use crate::core::config::{Config, ConfigError};
use crate::ui::console_loop::run_console;
use crate::utils::logging::init_tracing;

#[derive(Parser)]
#[command(name = "novel")]
#[command(version)]
#[command(about = "A terminal console for co-authoring fiction")]
#[command(
    long_about = "Novel Agent is a full-screen terminal console for drafting a novel chapter by \
chapter. A sidebar keeps the project bible in view, the editor shows the current chapter, and \
everything typed into the input line is either a command or prose for the current chapter.\n\n\
Commands:\n\
  new [title]       Start a new chapter and make it current\n\
  goto <n>          Switch to chapter n\n\
  chapters          List chapters in the status log\n\
  save              Save the manuscript\n\
  help              List commands\n\
  quit, q           Leave the console\n\n\
Keys:\n\
  Enter             Submit the input line\n\
  Tab, Esc          Switch focus between the input line and the panes\n\
  q / n / s         Quit / new chapter / save (pane focus)\n\
  Ctrl+C            Quit from anywhere\n\n\
Environment Variables:\n\
  NOVEL_LOG         Diagnostics filter for --log-file (default: info)\n\
  NOVEL_COLOR       Force color depth: truecolor or 16"
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Configuration file to use instead of the platform default
    #[arg(short = 'c', long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Append diagnostics to the given file
    #[arg(short = 'l', long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Start with no chapters instead of the configured opening chapter
    #[arg(long, global = true)]
    pub empty: bool,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Start the console (default)
    Console,
    /// Print the resolved configuration
    Config,
    /// Write a default configuration file
    InitConfig {
        /// Overwrite an existing configuration file
        #[arg(long)]
        force: bool,
    },
}

pub fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    init_tracing(args.log_file.as_deref())?;

    let config_path = match resolve_config_path(args.config.as_deref()) {
        Ok(path) => path,
        Err(e) => {
            eprintln!("❌ {e}");
            std::process::exit(1);
        }
    };

    match args.command.unwrap_or(Commands::Console) {
        Commands::Console => {
            let config = load_or_exit(&config_path);
            info!(config = %config_path.display(), empty = args.empty, "starting console");
            let app = App::from_config(&config, args.empty);
            run_console(app, &config)
        }
        Commands::Config => {
            let config = load_or_exit(&config_path);
            config.print_all(&config_path);
            Ok(())
        }
        Commands::InitConfig { force } => {
            if let Err(e) = Config::write_default(&config_path, force) {
                eprintln!("❌ {e}");
                std::process::exit(1);
            }
            println!("✅ Wrote default configuration to {}", config_path.display());
            Ok(())
        }
    }
}

fn resolve_config_path(explicit: Option<&Path>) -> Result<PathBuf, ConfigError> {
    match explicit {
        Some(path) => Ok(path.to_path_buf()),
        None => Config::default_config_path(),
    }
}

fn load_or_exit(path: &Path) -> Config {
    match Config::load_from_path(path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {e}");
            std::process::exit(1);
        }
    }
}
