use std::{
    io::{self, stdin},
    time::Duration,
};

use anyhow::Context;
use clap::{error::ErrorKind, CommandFactory, Parser};
use crossterm::{
    cursor::Show,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tapr::{
    app::{self, App},
    app_dirs::AppDirs,
    config::{Config, ConfigStore, FileConfigStore},
    logging,
    runtime::{CrosstermEventSource, FixedTicker, Runner},
    theme::Palette,
    word_list::{self, DiskCache, WordSource},
};

/// minimal typing speed test for the terminal
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "A minimal typing speed test: type the words shown, commit each with space or enter, and get words per minute and accuracy at the end."
)]
pub struct Cli {
    /// number of words to use in test [default: 20]
    #[clap(short = 'n', long = "number", value_parser = parse_word_count)]
    number_of_words: Option<usize>,

    /// words to draw from: a built-in list name, a URL, or a file path [default: english]
    #[clap(short = 'w', long = "word-list", long_help = word_list_long_help())]
    word_list: Option<String>,
}

fn word_list_long_help() -> String {
    format!(
        "Words to draw from [default: english]\n\n\
         Either a built-in list ({}), an http(s) URL to a whitespace separated \
         list, or a path to a local file. Fetched lists are cached on disk.",
        WordSource::builtin_names()
    )
}

fn parse_word_count(s: &str) -> Result<usize, String> {
    let n: usize = s
        .parse()
        .map_err(|_| format!("`{s}` is not a whole number"))?;
    if n == 0 {
        Err("must be at least 1".to_string())
    } else {
        Ok(n)
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    logging::init(AppDirs::log_path().as_deref());
    let config = FileConfigStore::new()
        .load()
        .with_overrides(cli.number_of_words, cli.word_list.clone());

    let source = WordSource::parse(&config.word_list);
    let cache = DiskCache::in_default_location();
    let words = match word_list::load(&source, cache.as_ref()) {
        Ok(words) => words,
        Err(e) => Cli::command().error(ErrorKind::Io, e).exit(),
    };
    let targets = word_list::sample(&words, config.number_of_words, &mut rand::thread_rng());
    tracing::info!(source = %source, words = targets.len(), "starting test");

    if !stdin().is_tty() {
        let mut cmd = Cli::command();
        cmd.error(ErrorKind::Io, "stdin must be a tty").exit();
    }

    enable_raw_mode().context("could not enable raw mode")?;
    restoring(|| start_tui(targets, &config), restore_terminal)
}

fn start_tui(targets: Vec<String>, config: &Config) -> anyhow::Result<()> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("could not enter alternate screen")?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let mut app = App::new(targets, Palette::new());
    let mut runner = Runner::new(
        CrosstermEventSource::new(),
        FixedTicker::new(Duration::from_millis(config.tick_rate_ms)),
    );
    app::run(&mut terminal, &mut app, &mut runner).context("typing session failed")
}

fn restore_terminal() -> io::Result<()> {
    let raw = disable_raw_mode();
    let screen = execute!(io::stdout(), LeaveAlternateScreen, Show);
    raw.and(screen)
}

/// Run `body`, then `restore` no matter how `body` ended. An error from
/// `body` takes precedence over one from `restore`.
fn restoring<T>(
    body: impl FnOnce() -> anyhow::Result<T>,
    restore: impl FnOnce() -> io::Result<()>,
) -> anyhow::Result<T> {
    let result = body();
    let restored = restore();
    let value = result?;
    restored.context("could not restore terminal")?;
    Ok(value)
}
