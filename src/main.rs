//! Wordle - CLI
//!
//! Play Wordle in the terminal against words from "The Sound of Silence" or any
//! text file.

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use wordle_game::{
    commands::{CorpusSource, PlayConfig, check_guess, load_corpus, run_play},
    config::{GameConfig, Palette},
    corpus::PunctuationMode,
    output::{print_candidates, print_check_result},
};

#[derive(Parser)]
#[command(
    name = "wordle",
    about = "Guess the hidden 5-letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Text file to draw hidden words from (default: embedded lyrics)
    #[arg(short, long, global = true)]
    corpus: Option<PathBuf>,

    /// How punctuation is stripped from the corpus
    #[arg(short, long, global = true, value_enum, default_value = "whitespace")]
    punctuation: PunctuationArg,

    /// Disable coloured feedback
    #[arg(long, global = true)]
    no_color: bool,

    /// Log level (trace, debug, info, warn, error); `RUST_LOG` takes precedence
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a game (default)
    Play {
        /// Seed for reproducible word selection
        #[arg(short, long)]
        seed: Option<u64>,

        /// Play against a fixed hidden word
        #[arg(short, long)]
        word: Option<String>,
    },

    /// Evaluate a single guess against a hidden word
    Check {
        /// The hidden word
        hidden: String,

        /// The guess to evaluate
        guess: String,
    },

    /// List the candidate hidden words of the corpus
    Candidates,
}

#[derive(Clone, Copy, ValueEnum)]
enum PunctuationArg {
    /// Delete punctuation, fusing "words,songs" into one token
    Delete,
    /// Replace punctuation with spaces
    Whitespace,
}

impl From<PunctuationArg> for PunctuationMode {
    fn from(arg: PunctuationArg) -> Self {
        match arg {
            PunctuationArg::Delete => Self::Delete,
            PunctuationArg::Whitespace => Self::Whitespace,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let palette = if cli.no_color {
        Palette::plain()
    } else {
        Palette::classic()
    };
    let corpus = cli.corpus.map_or(CorpusSource::Embedded, CorpusSource::File);
    let punctuation = PunctuationMode::from(cli.punctuation);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play {
        seed: None,
        word: None,
    });

    match command {
        Commands::Play { seed, word } => {
            let config = PlayConfig {
                corpus,
                punctuation,
                seed,
                word,
            };
            run_play(&config, &GameConfig::with_palette(palette))?;
            Ok(())
        }
        Commands::Check { hidden, guess } => {
            let check = check_guess(&hidden, &guess)?;
            print_check_result(&check.guess, &check.result, &palette);
            Ok(())
        }
        Commands::Candidates => {
            let corpus = load_corpus(&corpus, punctuation)?;
            print_candidates(corpus.candidates());
            Ok(())
        }
    }
}
