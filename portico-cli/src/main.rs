mod error;
mod paths;
mod script;
mod shell;

use std::fs::{self, File};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser, Subcommand};
use log::{LevelFilter, info};
use portico::PortalConfig;
use portico::validation::FormKind;
use simplelog::{Config, WriteLogger};

use error::CliError;
use script::{Replay, Script, parse_fields};

#[derive(Debug, Parser)]
#[command(name = "portico", version, about = "Drive the auth dialogs and forms of a page")]
struct Cli {
    /// Config file (JSON); defaults to config.json in the user config dir.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Write logs here instead of the user cache dir.
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Validate field values against a form's rules.
    Validate {
        /// Form kind: login or registration.
        kind: FormKind,
        /// Field values as name=value.
        fields: Vec<String>,
    },
    /// Replay a timed JSON event script.
    Replay {
        /// Script file.
        script: PathBuf,
    },
    /// Interactive shell.
    Shell,
}

fn init_logging(cli: &Cli) -> Result<(), CliError> {
    let Some(path) = cli.log_file.clone().or_else(paths::log_file) else {
        return Ok(());
    };
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    paths::rotate_logs(&path);
    let level = match cli.verbose {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    WriteLogger::init(level, Config::default(), File::create(&path)?)?;
    Ok(())
}

fn load_config(cli: &Cli) -> Result<PortalConfig, CliError> {
    let config = match &cli.config {
        Some(path) => PortalConfig::load(path)?,
        None => match paths::config_file() {
            Some(path) => PortalConfig::load_or_default(path)?,
            None => PortalConfig::default(),
        },
    };
    Ok(config)
}

fn validate(
    config: &PortalConfig,
    kind: FormKind,
    fields: &[String],
) -> Result<ExitCode, CliError> {
    let values = parse_fields(fields)?;
    let report = kind.validator(config.min_password_len).validate(&values);
    for result in report.results() {
        match &result.message {
            Some(message) => println!("✗ {}: {}", result.field_id, message),
            None => println!("✓ {}", result.field_id),
        }
    }
    if report.is_valid() {
        println!("{kind} form is valid");
        Ok(ExitCode::SUCCESS)
    } else {
        println!("{kind} form has {} error(s)", report.error_count());
        Ok(ExitCode::FAILURE)
    }
}

async fn run(cli: Cli) -> Result<ExitCode, CliError> {
    init_logging(&cli)?;
    let config = load_config(&cli)?;
    info!("Starting with {:?}", config);

    match cli.command {
        Command::Validate { kind, fields } => validate(&config, kind, &fields),
        Command::Replay { script } => {
            let script = Script::load(&script)?;
            let (summary, _) = Replay::new(&script, config, io::stdout().lock()).run(&script)?;
            info!("Replay finished: {:?}", summary);
            Ok(ExitCode::SUCCESS)
        }
        Command::Shell => {
            shell::run(config, paths::preferences_file()).await?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    match run(Cli::parse()).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
