//! Flashmaster CLI application entry point
//!
//! # Usage
//!
//! ```bash
//! # Study interactively (default command), optionally loading a deck
//! flashmaster
//! flashmaster deck.csv
//! flashmaster study deck.csv --seed 7
//!
//! # Validate a CSV file and preview the first cards
//! flashmaster check deck.csv -n 10
//!
//! # Inspect or clear learned progress
//! flashmaster progress
//! flashmaster reset -y
//!
//! # Configuration
//! flashmaster config set hide_learned=true
//! flashmaster config get data_dir
//! ```
//!
//! # Configuration
//!
//! Configuration is stored in the user's config directory
//! (`~/.config/flashmaster/config.toml` on Linux) and created with defaults on
//! first run. Set `RUST_LOG=debug` for diagnostic logging. Logs go to stderr,
//! except during `study` where the terminal belongs to the TUI and they are
//! written to `flashmaster.log` in the data directory instead.

use env_logger::{Env, Target};
use flashmaster::{
    FlashmasterError,
    cli::{Cli, Commands, ConfigCommands, split_setting},
    commands::{self, StudyOptions},
    config::FlashmasterConfig,
    persist::SledStore,
    ui::{OutputWriter, StdoutWriter},
};
use std::fs::File;
use std::path::{Path, PathBuf};
use std::time::Duration;

type Result<T> = std::result::Result<T, FlashmasterError>;

/// Log file used while the TUI owns the terminal
const LOG_FILE: &str = "flashmaster.log";

/// Initialize logging, writing to `log_file` instead of stderr when given
fn init_logging(log_file: Option<&Path>) -> Result<()> {
    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or("warn"));
    if let Some(path) = log_file {
        builder.target(Target::Pipe(Box::new(File::create(path)?)));
    }
    builder.init();
    Ok(())
}

/// Open the learned-progress database inside `data_dir`
fn open_store(data_dir: &Path) -> Result<SledStore> {
    std::fs::create_dir_all(data_dir)?;
    let path = FlashmasterConfig::store_path(data_dir);
    log::debug!("opening learned store at {}", path.display());
    Ok(SledStore::open(path)?)
}

/// Handle the config subcommands
///
/// # Errors
///
/// Returns `FlashmasterError` if the key is unknown, the value does not parse,
/// or the configuration cannot be saved.
fn handle_config_command(
    mut config: FlashmasterConfig,
    command: &ConfigCommands,
    out: &dyn OutputWriter,
) -> Result<()> {
    match command {
        ConfigCommands::Set { setting } => {
            let (key, value) = split_setting(setting).ok_or_else(|| {
                FlashmasterError::InvalidInput(
                    "Invalid format. Use: flashmaster config set key=value".into(),
                )
            })?;
            config.set(key, value)?;
            config.save()?;
            out.success(&format!("Set {key} = {value}"));
        }
        ConfigCommands::Get { key } => {
            out.write(&config.get(key)?);
        }
    }
    Ok(())
}

fn run() -> Result<()> {
    let config = FlashmasterConfig::load()?;

    let cli = Cli::parse_args();

    let quiet = cli.quiet || config.quiet;
    let out = StdoutWriter::new(quiet);

    let command = cli.get_command();

    if !matches!(command, Commands::Study { .. }) {
        init_logging(None)?;
    }

    if let Commands::Config { command } = &command {
        return handle_config_command(config, command, &out);
    }
    if let Commands::Check { file, preview } = &command {
        return commands::check(file, *preview, &out);
    }

    let data_dir: PathBuf = match cli.data_dir {
        Some(dir) => dir,
        None => config.resolved_data_dir()?,
    };
    if matches!(command, Commands::Study { .. }) {
        std::fs::create_dir_all(&data_dir)?;
        init_logging(Some(&data_dir.join(LOG_FILE)))?;
    }
    let store = open_store(&data_dir)?;

    match command {
        Commands::Study { file } => {
            let options = StudyOptions {
                seed: cli.seed,
                hide_learned: config.hide_learned,
                message_ttl: Duration::from_secs(config.message_ttl_secs),
            };
            commands::study(Box::new(store), &options, file)
        }
        Commands::Progress => {
            commands::progress(&store, &out);
            Ok(())
        }
        Commands::Reset { yes } => commands::reset(&store, yes, &out),
        Commands::Check { .. } | Commands::Config { .. } => Ok(()),
    }
}

/// Main entry point for the flashmaster application
///
/// Loads configuration, parses command-line arguments, and dispatches to the
/// appropriate command handler. Errors are printed and exit with status 1.
fn main() {
    if let Err(e) = run() {
        log::debug!("{e:?}");
        StdoutWriter::default().error(&e.to_string());
        std::process::exit(1);
    }
}
