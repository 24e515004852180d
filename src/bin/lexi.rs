//! CLI entry point for the `lexi` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};

use lexigraph::cli::config::{DEFAULT_COUNTS, DEFAULT_HYPONYMS, DEFAULT_SYNSETS, DEFAULT_WORDS};
use lexigraph::cli::{commands, DataPaths, OutputFormat};
use lexigraph::types::{Direction, LexError, Query, MAX_YEAR, MIN_YEAR};

#[derive(Parser)]
#[command(
    name = "lexi",
    about = "Lexigraph CLI — hyponym closures ranked by historical word frequency"
)]
struct Cli {
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    /// Enable debug logging
    #[arg(long, global = true)]
    verbose: bool,

    /// Synsets source (id,words,definition)
    #[arg(long, default_value = DEFAULT_SYNSETS, global = true)]
    synsets: PathBuf,

    /// Hyponyms source (parent,child,...)
    #[arg(long, default_value = DEFAULT_HYPONYMS, global = true)]
    hyponyms: PathBuf,

    /// Word counts source (word<TAB>year<TAB>count)
    #[arg(long, default_value = DEFAULT_WORDS, global = true)]
    word_counts: PathBuf,

    /// Total counts source (year,total)
    #[arg(long, default_value = DEFAULT_COUNTS, global = true)]
    total_counts: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

/// Year window shared by the frequency commands.
#[derive(Args)]
struct YearRange {
    /// First year (inclusive)
    #[arg(long, default_value_t = MIN_YEAR)]
    start: i32,
    /// Last year (inclusive)
    #[arg(long, default_value_t = MAX_YEAR)]
    end: i32,
}

#[derive(Subcommand)]
enum Commands {
    /// Display sizes of the loaded graph and frequency index
    Info,
    /// Relative frequency history of each word
    History {
        /// Comma-separated words
        words: String,
        #[command(flatten)]
        range: YearRange,
        /// Print one summed history instead of one per word
        #[arg(long)]
        summed: bool,
    },
    /// Words related to every query word, optionally ranked by frequency
    Hyponyms {
        /// Comma-separated words
        words: String,
        #[command(flatten)]
        range: YearRange,
        /// Result bound: 0 = all, negative = none
        #[arg(long, default_value = "0", allow_negative_numbers = true)]
        k: i64,
        /// Follow hypernyms instead of hyponyms
        #[arg(long)]
        ancestors: bool,
    },
    /// Frequency histories of the top-ranked related words
    Hypohist {
        /// Comma-separated words
        words: String,
        #[command(flatten)]
        range: YearRange,
        /// Result bound (0 means 5)
        #[arg(long, default_value = "0", allow_negative_numbers = true)]
        k: i64,
        /// Follow hypernyms instead of hyponyms
        #[arg(long)]
        ancestors: bool,
    },
    /// Unranked closure of the query words
    Closure {
        /// Comma-separated words
        words: String,
        /// Direction: descendants or ancestors
        #[arg(long, default_value = "descendants")]
        direction: String,
    },
}

fn split_words(s: &str) -> Vec<String> {
    s.split(',')
        .map(|w| w.trim())
        .filter(|w| !w.is_empty())
        .map(String::from)
        .collect()
}

fn direction_of(ancestors: bool) -> Direction {
    if ancestors {
        Direction::Ancestors
    } else {
        Direction::Descendants
    }
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format.is_json();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug"))
            .init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
            .init();
    }

    let paths = DataPaths {
        synsets: cli.synsets,
        hyponyms: cli.hyponyms,
        words: cli.word_counts,
        counts: cli.total_counts,
    };

    let result = match cli.command {
        Commands::Info => commands::cmd_info(&paths, json),
        Commands::History {
            words,
            range,
            summed,
        } => commands::cmd_history(
            &paths,
            &split_words(&words),
            range.start,
            range.end,
            summed,
            json,
        ),
        Commands::Hyponyms {
            words,
            range,
            k,
            ancestors,
        } => {
            let query = Query::new(split_words(&words))
                .years(range.start, range.end)
                .k(k)
                .direction(direction_of(ancestors));
            commands::cmd_hyponyms(&paths, &query, json)
        }
        Commands::Hypohist {
            words,
            range,
            k,
            ancestors,
        } => {
            let query = Query::new(split_words(&words))
                .years(range.start, range.end)
                .k(k)
                .direction(direction_of(ancestors));
            commands::cmd_hypohist(&paths, &query, json)
        }
        Commands::Closure { words, direction } => {
            let dir = match Direction::from_name(&direction) {
                Some(d) => d,
                None => {
                    eprintln!("Invalid direction: {}", direction);
                    process::exit(3);
                }
            };
            commands::cmd_closure(&paths, &split_words(&words), dir, json)
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            LexError::Io(_) => 1,
            LexError::Parse { .. } => 2,
            LexError::InvalidRange { .. } | LexError::EmptyQuery => 3,
            LexError::DuplicateId(_) | LexError::UnknownNode(_) | LexError::EmptySynset(_) => 4,
            _ => 5,
        };
        process::exit(code);
    }
}
