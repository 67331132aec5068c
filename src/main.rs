//! Evil Hangman - CLI
//!
//! Play hangman against a random or adversarial chooser, watch the frequency
//! guesser play, or benchmark the guesser across many games.

use anyhow::Result;
use clap::{Parser, Subcommand};
use evil_hangman::{
    GameConfig,
    chooser::ChooserKind,
    commands::{BenchmarkConfig, run_auto_game, run_benchmark, run_play},
    dictionary::{CandidateDictionary, provider_from_name},
    guesser::FrequencyGuesser,
    output::{print_benchmark_result, print_game_record},
    random,
};

#[derive(Parser)]
#[command(
    name = "evil_hangman",
    about = "Hangman with an adversarial word chooser and a letter-frequency guesser",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Chooser: evil (default) or random
    #[arg(short, long, global = true, default_value = "evil")]
    chooser: String,

    /// Number of letters in the secret word
    #[arg(short, long, global = true, default_value_t = GameConfig::default().word_length())]
    length: usize,

    /// Wrong guesses allowed before the game is lost
    #[arg(short, long, global = true, default_value_t = GameConfig::default().max_guesses())]
    guesses: usize,

    /// Dictionary: 'embedded' (default) or path to a word-per-line file
    #[arg(short, long, global = true, default_value = "embedded")]
    dictionary: String,

    /// Seed for reproducible games
    #[arg(short, long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play interactively against the chooser (default)
    Play,

    /// Let the frequency guesser play one game
    Auto,

    /// Play many automated games and report statistics
    Benchmark {
        /// Number of games to play
        #[arg(short = 'n', long, default_value = "100")]
        games: usize,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = GameConfig::new(cli.length, cli.guesses)?;
    let kind = ChooserKind::from_name(&cli.chooser);
    let provider = provider_from_name(&cli.dictionary);
    let dictionary = CandidateDictionary::build(&provider, config.word_length())?;
    log::info!(
        "{} candidate words of length {} from '{}'",
        dictionary.len(),
        config.word_length(),
        cli.dictionary
    );

    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => {
            let rng = cli.seed.map_or_else(random::from_entropy, random::seeded);
            let mut chooser = kind.build(&config, &dictionary, rng)?;
            let guesser = FrequencyGuesser::new(provider);
            let stdin = std::io::stdin();
            run_play(
                &mut chooser,
                &guesser,
                config.max_guesses(),
                stdin.lock(),
                std::io::stdout().lock(),
            )?;
        }
        Commands::Auto => {
            let rng = cli.seed.map_or_else(random::from_entropy, random::seeded);
            let mut chooser = kind.build(&config, &dictionary, rng)?;
            let guesser = FrequencyGuesser::new(provider);
            let record = run_auto_game(&mut chooser, &guesser)?;
            print_game_record(&record);
        }
        Commands::Benchmark { games } => {
            let seed = cli.seed.unwrap_or_else(rand::random);
            println!("Running {games} games against the {kind:?} chooser (seed {seed})...");

            let mut bench = BenchmarkConfig::new(games, seed, kind);
            bench.show_progress = true;
            let result = run_benchmark(&config, &dictionary, &bench)?;
            print_benchmark_result(&result);
        }
    }

    Ok(())
}
