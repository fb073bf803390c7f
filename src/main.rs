//! bookcase: browse a book catalog from the terminal.
//!
//! Reads one command per line from stdin and prints the screen after each.
//! Logs go to stderr so they never interleave with the screen on stdout.

mod command;
mod error;

use crate::command::{Command, HELP};
use crate::error::{ErrorKind, Result};
use bookcase_catalog::{CatalogStore, DEFAULT_BUILTIN};
use bookcase_config::{Config, Theme as ConfiguredTheme};
use bookcase_view::{Event, Screen, Session, Theme};
use clap::{ArgAction, Parser, ValueEnum};
use exn::ResultExt;
use std::io::{self, BufRead, Write};
use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ThemeArg {
    Day,
    Night,
}
impl From<ThemeArg> for ConfiguredTheme {
    fn from(value: ThemeArg) -> Self {
        match value {
            ThemeArg::Day => ConfiguredTheme::Day,
            ThemeArg::Night => ConfiguredTheme::Night,
        }
    }
}

fn initial_theme(configured: ConfiguredTheme) -> Theme {
    match configured {
        ConfiguredTheme::Day => Theme::Day,
        ConfiguredTheme::Night => Theme::Night,
    }
}

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Configuration file (toml, yaml or json) used instead of the user
    /// configuration directory
    #[arg(long)]
    config: Option<PathBuf>,

    /// Catalog JSON document to browse [default: embedded sample]
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Books revealed per page
    #[arg(long)]
    page_size: Option<NonZeroUsize>,

    /// Theme to start in [default: day]
    #[arg(long, value_enum)]
    theme: Option<ThemeArg>,

    /// Increase log verbosity (-v debug, -vv trace); RUST_LOG takes precedence
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    /// Command-line flags win over every configuration source.
    fn apply(&self, config: &mut Config) {
        if let Some(catalog) = &self.catalog {
            config.catalog = Some(catalog.clone());
        }
        if let Some(page_size) = self.page_size {
            config.page_size = page_size;
        }
        if let Some(theme) = self.theme {
            config.theme = theme.into();
        }
    }
}

fn initialize_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).with_writer(io::stderr).init();
}

fn load_catalog(config: &Config) -> Result<CatalogStore> {
    match &config.catalog {
        Some(path) => CatalogStore::from_path(path),
        None => CatalogStore::builtin(DEFAULT_BUILTIN),
    }
    .or_raise(|| ErrorKind::Catalog)
}

fn render(out: &mut impl Write, screen: &Screen) -> Result<()> {
    writeln!(out, "{screen}\n").or_raise(|| ErrorKind::Io)?;
    write!(out, "> ").or_raise(|| ErrorKind::Io)?;
    out.flush().or_raise(|| ErrorKind::Io)
}

fn run(cli: Cli) -> Result<()> {
    let mut config = Config::load(cli.config.as_deref()).or_raise(|| ErrorKind::Config)?;
    cli.apply(&mut config);
    let store = load_catalog(&config)?;
    tracing::info!(books = store.len(), page_size = config.page_size.get(), "Catalog ready");

    let mut screen = Screen::new();
    let mut session = Session::new(&store, config.page_size, initial_theme(config.theme));
    session.start(&mut screen);

    let mut out = io::stdout().lock();
    render(&mut out, &screen)?;
    for line in io::stdin().lock().lines() {
        let line = line.or_raise(|| ErrorKind::Io)?;
        match command::parse(&line) {
            Ok(None) => {},
            Ok(Some(Command::Quit)) => break,
            Ok(Some(Command::Help)) => writeln!(out, "{HELP}\n").or_raise(|| ErrorKind::Io)?,
            Ok(Some(Command::Cancel)) => {
                session.dispatch(Event::CancelSearch, &mut screen);
                session.dispatch(Event::CancelSettings, &mut screen);
            },
            Ok(Some(Command::Dispatch(event))) => session.dispatch(event, &mut screen),
            Err(err) if err.is_recoverable() => writeln!(out, "{}\n", *err).or_raise(|| ErrorKind::Io)?,
            Err(err) => return Err(err),
        }
        render(&mut out, &screen)?;
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    initialize_tracing(cli.verbose);
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:?}");
            ExitCode::FAILURE
        },
    }
}
