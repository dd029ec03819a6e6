mod app;
mod commands;
mod render;
#[cfg(feature = "tui")]
mod tui;

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use lexicard_lib::words::Level;

#[derive(Parser)]
#[command(name = "lexicard", about = "Vocabulary trainer CLI and TUI", version)]
struct Cli {
    /// Directory holding the personal dictionary (default: local data dir)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Config file (default: ~/.config/lexicard/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, default_value = "plain")]
    format: OutputFormat,

    /// Disable ANSI colors
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Plain,
    Json,
}

#[derive(Subcommand)]
enum Command {
    /// List words
    List {
        /// Only words at this level (All, A1..C2)
        #[arg(long)]
        level: Option<Level>,
        /// Only favorites
        #[arg(long)]
        favorites: bool,
        /// Case-insensitive substring of the term
        #[arg(long)]
        search: Option<String>,
        /// List the personal dictionary instead of the catalog
        #[arg(long)]
        dictionary: bool,
    },

    /// Show a word in detail
    Show {
        /// Term (case-insensitive prefix match)
        term: String,
    },

    /// Toggle a word's favorite flag
    Favorite {
        /// Term (case-insensitive prefix match)
        term: String,
    },

    /// Add a word to the personal dictionary, or remove it
    Dict {
        /// Term (case-insensitive prefix match)
        term: String,
    },

    /// Word counts per level
    Levels,

    /// Pronounce a word with the configured speech command
    Speak {
        /// Term (case-insensitive prefix match)
        term: String,
    },

    /// Launch interactive TUI
    #[cfg(feature = "tui")]
    Tui,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let use_color = !cli.no_color && std::io::stdout().is_terminal();
    let data_dir = cli.data_dir.as_deref();
    let config_path = cli.config.as_deref();

    match cli.command {
        None => {
            // No subcommand → launch TUI
            #[cfg(feature = "tui")]
            {
                tui::run(data_dir, config_path)?;
            }
            #[cfg(not(feature = "tui"))]
            {
                eprintln!("TUI not available (built without 'tui' feature). Use a subcommand.");
                eprintln!("Run with --help for usage.");
                std::process::exit(1);
            }
        }
        Some(Command::List { level, favorites, search, dictionary }) => {
            let app = app::App::new(data_dir, config_path)?;
            commands::list::run(
                &app,
                level,
                favorites,
                search.as_deref(),
                dictionary,
                &cli.format,
                use_color,
            )?;
        }
        Some(Command::Show { term }) => {
            let app = app::App::new(data_dir, config_path)?;
            commands::show::run(&app, &term, &cli.format, use_color)?;
        }
        Some(Command::Favorite { term }) => {
            let mut app = app::App::new(data_dir, config_path)?;
            commands::toggle::run_favorite(&mut app, &term, &cli.format, use_color)?;
        }
        Some(Command::Dict { term }) => {
            let mut app = app::App::new(data_dir, config_path)?;
            commands::toggle::run_dictionary(&mut app, &term, &cli.format, use_color)?;
        }
        Some(Command::Levels) => {
            let app = app::App::new(data_dir, config_path)?;
            commands::levels::run(&app, &cli.format)?;
        }
        Some(Command::Speak { term }) => {
            let app = app::App::new(data_dir, config_path)?;
            commands::speak::run(&app, &term)?;
        }
        #[cfg(feature = "tui")]
        Some(Command::Tui) => {
            tui::run(data_dir, config_path)?;
        }
    }

    Ok(())
}
