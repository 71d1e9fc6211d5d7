//! Tileset - CLI
//!
//! Tile-rack word game with TUI and CLI modes. Every rack's best words are
//! found up front by a trie-guided search.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::process;
use tileset::{
    commands::{BenchmarkConfig, RackSource, run_benchmark, run_simple, solve_rack},
    dictionary::Dictionary,
    game::Session,
    logging::init_logger,
    output::{print_benchmark_result, print_solve_result},
    wordlists::loader::{embedded_dictionary, load_from_file},
};

/// Log file used by the TUI when none is given
const DEFAULT_TUI_LOG: &str = "tileset.log";

#[derive(Parser)]
#[command(
    name = "tileset",
    about = "Tile-rack word game: spell the best word from seven tiles",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'builtin' (default, embedded list) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "builtin")]
    wordlist: String,

    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    /// Write logs to this file (the TUI defaults to tileset.log)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Args, Default)]
struct GameArgs {
    /// Start from this rack seed (14 hex digits, optional 0x prefix)
    #[arg(long)]
    seed: Option<String>,

    /// Skip computing the top-word list
    #[arg(long)]
    no_top: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play(GameArgs),

    /// Simple CLI mode (line-based, without TUI)
    Simple(GameArgs),

    /// Print a rack and its best words
    Solve {
        /// Rack seed (14 hex digits, optional 0x prefix)
        #[arg(long, conflicts_with = "rack", required_unless_present = "rack")]
        seed: Option<String>,

        /// Rack letters, '_' or '?' for a blank (e.g. "quit_qq")
        #[arg(long)]
        rack: Option<String>,
    },

    /// Benchmark the best-word search on random racks
    Benchmark {
        /// Number of random racks to solve
        #[arg(short = 'n', long, default_value = "1000")]
        count: usize,

        /// Seed the rack generator for a reproducible batch
        #[arg(long)]
        rng_seed: Option<u64>,
    },
}

/// Build the dictionary selected by the -w flag
fn load_dictionary(wordlist: &str) -> Result<Dictionary> {
    if wordlist == "builtin" {
        return embedded_dictionary().context("Failed to build the embedded dictionary");
    }

    let words = load_from_file(wordlist)
        .with_context(|| format!("Failed to read wordlist '{wordlist}'"))?;
    Dictionary::from_words(&words)
        .with_context(|| format!("Failed to build dictionary from '{wordlist}'"))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play(GameArgs::default()));

    // The TUI owns the terminal, so its logs always go to a file
    let log_file = match (&command, cli.log_file) {
        (Commands::Play(_), None) => Some(PathBuf::from(DEFAULT_TUI_LOG)),
        (_, path) => path,
    };
    init_logger(cli.debug, log_file.as_deref())
        .context("Failed to open log file")?;

    let dictionary = load_dictionary(&cli.wordlist)?;

    match command {
        Commands::Play(args) => run_play_command(&dictionary, &args),
        Commands::Simple(args) => run_simple_command(&dictionary, &args),
        Commands::Solve { seed, rack } => run_solve_command(&dictionary, seed, rack),
        Commands::Benchmark { count, rng_seed } => {
            run_benchmark_command(&dictionary, count, rng_seed);
            Ok(())
        }
    }
}

/// Session on the requested (or a random) rack
///
/// A malformed seed is a usage error and ends the process.
fn start_session<'d>(dictionary: &'d Dictionary, args: &GameArgs) -> Session<'d> {
    let mut session = Session::new(dictionary);
    if let Err(e) = session.reset(args.seed.as_deref(), !args.no_top) {
        eprintln!("error: invalid value for '--seed': {e}");
        eprintln!("\nFor more information, try '--help'.");
        process::exit(2);
    }
    session
}

fn run_play_command(dictionary: &Dictionary, args: &GameArgs) -> Result<()> {
    use tileset::interactive::{App, run_tui};

    let session = start_session(dictionary, args);
    let app = App::new(session, !args.no_top);
    run_tui(app)
}

fn run_simple_command(dictionary: &Dictionary, args: &GameArgs) -> Result<()> {
    let mut session = start_session(dictionary, args);
    run_simple(&mut session, !args.no_top).map_err(|e| anyhow::anyhow!(e))
}

fn run_solve_command(
    dictionary: &Dictionary,
    seed: Option<String>,
    rack: Option<String>,
) -> Result<()> {
    let source = match (seed, rack) {
        (Some(seed), _) => RackSource::Seed(seed),
        (None, Some(rack)) => RackSource::Letters(rack),
        (None, None) => anyhow::bail!("Either --seed or --rack is required"),
    };

    let result = solve_rack(&source, dictionary).map_err(|e| anyhow::anyhow!(e))?;
    print_solve_result(&result);
    Ok(())
}

fn run_benchmark_command(dictionary: &Dictionary, count: usize, rng_seed: Option<u64>) {
    match rng_seed {
        Some(seed) => println!("Running benchmark on {count} random racks (rng seed {seed})..."),
        None => println!("Running benchmark on {count} random racks..."),
    }

    let config = BenchmarkConfig {
        rng_seed,
        ..BenchmarkConfig::new(count)
    };
    let result = run_benchmark(&config, dictionary);
    print_benchmark_result(&result);
}
