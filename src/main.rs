//! WRDL - CLI
//!
//! Play the word-guessing game in the terminal, or score a single guess.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::EnvFilter;
use wrdl::{
    commands::{run_play, score_words},
    core::Word,
    output::print_score_result,
    session::{Session, SessionConfig},
    wordlists::WordSource,
};

#[derive(Parser)]
#[command(
    name = "wrdl",
    about = "Guess the hidden five-letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Allowed-guess word file, one word per line (requires --targets)
    #[arg(long, global = true, requires = "targets")]
    allowed: Option<PathBuf>,

    /// Target word file, one word per line (requires --allowed)
    #[arg(long, global = true, requires = "allowed")]
    targets: Option<PathBuf>,

    /// Word to play if the word lists fail to load
    #[arg(long, global = true)]
    fallback: Option<String>,

    /// How long status messages stay on screen
    #[arg(long, global = true, default_value = "3000")]
    message_ttl_ms: u64,
}

#[derive(Subcommand)]
enum Commands {
    /// Play interactively (default)
    Play {
        /// Fix the first game's target word
        #[arg(long)]
        target: Option<String>,
    },

    /// Score a guess against a target
    Score {
        /// The guessed word
        guess: String,

        /// The word to score against
        target: String,
    },
}

fn word_source(cli: &Cli) -> Result<WordSource> {
    match (&cli.allowed, &cli.targets) {
        (Some(allowed), Some(targets)) => Ok(WordSource::from_files(allowed.clone(), targets.clone())),
        (None, None) => Ok(WordSource::embedded()),
        _ => bail!("--allowed and --targets must be given together"),
    }
}

fn session_config(cli: &Cli) -> Result<SessionConfig> {
    let fallback_target = cli
        .fallback
        .as_deref()
        .map(|word| Word::new(word).with_context(|| format!("Invalid fallback word '{word}'")))
        .transpose()?;

    Ok(SessionConfig {
        fallback_target,
        message_ttl: Duration::from_millis(cli.message_ttl_ms),
    })
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let source = Arc::new(word_source(&cli)?);
    let config = session_config(&cli)?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play { target: None });

    match command {
        Commands::Play { target } => run_play_command(source, config, target.as_deref()).await,
        Commands::Score { guess, target } => run_score_command(&source, &guess, &target).await,
    }
}

async fn run_play_command(
    source: Arc<WordSource>,
    config: SessionConfig,
    target: Option<&str>,
) -> Result<()> {
    let mut session = match target {
        Some(word) => {
            let word = Word::new(word).with_context(|| format!("Invalid target '{word}'"))?;
            Session::start_with_target(source, config, word).await
        }
        None => Session::start(source, config).await,
    }
    .context("Could not start a game")?;

    run_play(&mut session).await
}

async fn run_score_command(source: &WordSource, guess: &str, target: &str) -> Result<()> {
    let lists = source
        .ensure_loaded()
        .await
        .context("Could not load word lists")?;
    let result = score_words(guess, target, &lists)?;
    print_score_result(&result);
    Ok(())
}
