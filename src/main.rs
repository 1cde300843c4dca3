//! Word Hunt - CLI
//!
//! Word-search puzzle with TUI and CLI modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;
use word_hunt::{
    commands::{generate_puzzle, run_benchmark, run_simple},
    config::{GameConfig, PLACEMENT_ATTEMPTS},
    logging::init_logger,
    output::{print_benchmark_result, print_generate_result},
    session::PuzzleSession,
    wordlists::{Vocabulary, loader::load_from_file},
};

#[derive(Parser)]
#[command(
    name = "word_hunt",
    about = "Find the hidden words by chaining adjacent letters",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Seed for reproducible puzzles (random if omitted)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Path to a custom wordlist, one word per line (default: built-in list)
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based game without TUI)
    Simple,

    /// Print one generated puzzle
    Generate {
        /// Highlight the hidden words and list their positions
        #[arg(short, long)]
        reveal: bool,
    },

    /// Benchmark grid generation
    Benchmark {
        /// Number of grids to generate
        #[arg(short = 'n', long, default_value = "1000")]
        count: usize,

        /// Random placement tries per word before falling back to a scan
        #[arg(short = 'a', long, default_value_t = PLACEMENT_ATTEMPTS)]
        placement_attempts: usize,

        /// Hide the progress bar
        #[arg(long)]
        no_progress: bool,
    },
}

/// Load the vocabulary selected by the -w flag
fn load_vocabulary(wordlist: Option<&PathBuf>, config: &GameConfig) -> Result<Vocabulary> {
    let vocabulary = match wordlist {
        Some(path) => load_from_file(path, config.grid_size)
            .with_context(|| format!("failed to load wordlist {}", path.display()))?,
        None => Vocabulary::embedded(config.grid_size)?,
    };
    log::debug!("Loaded {} words", vocabulary.len());
    Ok(vocabulary)
}

fn make_rng(seed: Option<u64>) -> StdRng {
    seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.debug);

    let config = GameConfig::default();
    let vocabulary = load_vocabulary(cli.wordlist.as_ref(), &config)?;
    let rng = make_rng(cli.seed);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(config, vocabulary, rng),
        Commands::Simple => run_simple_command(config, vocabulary, rng),
        Commands::Generate { reveal } => run_generate_command(&config, &vocabulary, rng, reveal),
        Commands::Benchmark {
            count,
            placement_attempts,
            no_progress,
        } => {
            let config = config.with_placement_attempts(placement_attempts);
            // Benchmarks are reproducible by default
            let base_seed = cli.seed.unwrap_or(0);
            println!("Generating {count} grids (base seed {base_seed})...");
            let result = run_benchmark(&config, &vocabulary, count, base_seed, !no_progress);
            print_benchmark_result(&result);
            Ok(())
        }
    }
}

fn run_generate_command(
    config: &GameConfig,
    vocabulary: &Vocabulary,
    mut rng: StdRng,
    reveal: bool,
) -> Result<()> {
    let result = generate_puzzle(config, vocabulary, &mut rng)?;
    print_generate_result(&result, reveal);
    Ok(())
}

fn run_simple_command(config: GameConfig, vocabulary: Vocabulary, rng: StdRng) -> Result<()> {
    let mut session = PuzzleSession::start(config, vocabulary, rng)?;
    run_simple(&mut session)
}

fn run_play_command(config: GameConfig, vocabulary: Vocabulary, rng: StdRng) -> Result<()> {
    use word_hunt::interactive::{App, run_tui};

    let app = App::new(PuzzleSession::new(config, vocabulary, rng))?;
    run_tui(app)
}
