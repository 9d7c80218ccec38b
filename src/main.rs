use std::fs::OpenOptions;
use std::io;
use std::sync::Mutex;

use anyhow::{Context, Result};
use hangman::games::hangman::{ConsolePresenter, DictionaryFile, Driver};
use hangman::core::input::StdinSource;
use hangman::Config;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = Config::load().context("failed to load hangman.toml")?;
    init_logging(&config)?;
    info!(?config, "hangman starting");

    let mut input = StdinSource::stdin();
    let mut presenter = ConsolePresenter::new(io::stdout(), config.color);
    let mut words = DictionaryFile::new(&config.dictionary);

    Driver::new(&mut input, &mut presenter, &mut words, &config.save_dir)
        .run()
        .context("hangman stopped unexpectedly")?;
    Ok(())
}

/// RUST_LOG overrides the configured level. Logs go to the configured file,
/// otherwise to stderr so they never mix with the game on stdout.
fn init_logging(config: &Config) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .context("invalid log_level")?;

    match &config.log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("failed to open log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(io::stderr)
                .init();
        }
    }
    Ok(())
}
