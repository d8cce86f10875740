use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing::{error, warn};

use minish::config::{Config, ConfigLoader};
use minish::error::ShellError;
use minish::executor::{BuiltinRegistry, Dispatcher, ForkLauncher};
use minish::io::{LineReader, Streams};
use minish::prompt::ShellPrompt;
use minish::repl::Repl;
use minish::{exit_codes, logging, signals};

#[derive(Parser)]
#[command(name = "minish", version, about = "A minimal interactive command interpreter")]
struct Cli {
    /// Read settings from this file instead of ~/.minishrc.
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Do not read any settings file.
    #[arg(long, conflicts_with = "config")]
    no_config: bool,
    /// Prompt text, overriding the settings file.
    #[arg(short, long)]
    prompt: Option<String>,
}

fn main() {
    let cli = Cli::parse();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("minish: {}", e);
            process::exit(e.exit_code());
        }
    };

    logging::init(&config.log_filter);

    if config.ignore_interrupts {
        if let Err(e) = signals::ignore_interactive() {
            warn!(error = %e, "could not ignore interactive signals");
        }
    }

    let code = match run(&config) {
        Ok(()) => exit_codes::OK,
        Err(e) => {
            error!(error = %e, "interpreter stopped");
            eprintln!("minish: {}", e);
            e.exit_code()
        }
    };
    process::exit(code);
}

fn load_config(cli: &Cli) -> Result<Config, ShellError> {
    let mut config = if cli.no_config {
        Config::default()
    } else if let Some(path) = &cli.config {
        ConfigLoader::load_from_file(path)?
    } else {
        match ConfigLoader::default_path() {
            Some(path) if path.is_file() => ConfigLoader::load_from_file(&path)?,
            _ => Config::default(),
        }
    };

    if let Some(prompt) = &cli.prompt {
        config.prompt = prompt.clone();
    }
    Ok(config)
}

fn run(config: &Config) -> Result<(), ShellError> {
    let mut stdout = std::io::stdout();
    let mut stderr = std::io::stderr();
    let mut streams = Streams::new(&mut stdout, &mut stderr);

    let launcher = ForkLauncher::new().restore_signals(config.ignore_interrupts);
    let mut repl = Repl::new(
        LineReader::new(std::io::stdin().lock()),
        ShellPrompt::new(config.prompt.as_str()),
        Dispatcher::new(BuiltinRegistry::new(), launcher),
    );
    repl.run(&mut streams)
}
