//! Wordle CLI
//!
//! Terminal front end for the Wordle game core.

mod logging;
mod ui;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use wordle_game::dictionary::normalize;
use wordle_game::{load_dictionary, Dictionary, GameState, RowFeedback, Session, WordleError};

#[derive(Parser)]
#[command(name = "wordle", version)]
#[command(about = "Guess the five-letter word in six tries", long_about = None)]
struct Cli {
    /// Word list to play with, one word per line (default: built-in list)
    #[arg(short, long, value_name = "FILE", global = true)]
    dictionary: Option<PathBuf>,

    /// Write logs to this file (filter with RUST_LOG)
    #[arg(long, value_name = "FILE", global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Play in the terminal (default)
    Play(PlayArgs),
    /// Show the feedback a guess gets against a secret word
    Check { guess: String, secret: String },
    /// Print the number of words in the dictionary
    Words,
}

#[derive(Args, Default)]
struct PlayArgs {
    /// Seed for reproducible secret words
    #[arg(long)]
    seed: Option<u64>,

    /// Show the secret word in the status bar
    #[arg(long)]
    reveal: bool,
}

/// Everything `play` needs, resolved from the command line.
struct PlayConfig {
    dictionary: Option<PathBuf>,
    seed: Option<u64>,
    reveal: bool,
}

fn open_dictionary(path: Option<&PathBuf>) -> Result<Dictionary> {
    let dictionary = match path {
        Some(path) => Dictionary::load_from_path(path)?,
        None => load_dictionary().context("built-in dictionary is unusable")?,
    };
    Ok(dictionary)
}

fn play(config: PlayConfig) -> Result<()> {
    let dictionary = open_dictionary(config.dictionary.as_ref())?;
    let game = match config.seed {
        Some(seed) => GameState::with_seed(dictionary, seed),
        None => GameState::new(dictionary),
    };
    tracing::info!(seed = ?config.seed, "starting interactive game");

    ui::run(Session::new(game), config.reveal)
}

fn check(guess: &str, secret: &str) -> Result<()> {
    let guess = normalize(guess).ok_or_else(|| WordleError::invalid_word(guess))?;
    let secret = normalize(secret).ok_or_else(|| WordleError::invalid_word(secret))?;

    println!("{} → {}", guess, RowFeedback::evaluate(&guess, &secret));
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Command::Play(PlayArgs::default()));
    let interactive = matches!(command, Command::Play(_));

    logging::init(cli.log_file.as_deref(), interactive)?;

    match command {
        Command::Play(args) => play(PlayConfig {
            dictionary: cli.dictionary,
            seed: args.seed,
            reveal: args.reveal,
        }),
        Command::Check { guess, secret } => check(&guess, &secret),
        Command::Words => {
            let dictionary = open_dictionary(cli.dictionary.as_ref())?;
            println!("{}", dictionary.len());
            Ok(())
        }
    }
}
