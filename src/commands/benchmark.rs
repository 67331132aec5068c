//! Benchmark command
//!
//! Plays many automated games against one kind of chooser.

use super::auto::run_auto_game;
use crate::chooser::ChooserKind;
use crate::config::GameConfig;
use crate::dictionary::CandidateDictionary;
use crate::error::Result;
use crate::guesser::FrequencyGuesser;
use crate::random::seeded;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Settings for a benchmark run
#[derive(Debug, Clone, Copy)]
pub struct BenchmarkConfig {
    pub games: usize,
    /// Game `i` seeds its chooser with `seed + i`
    pub seed: u64,
    pub kind: ChooserKind,
    pub show_progress: bool,
}

impl BenchmarkConfig {
    #[must_use]
    pub const fn new(games: usize, seed: u64, kind: ChooserKind) -> Self {
        Self {
            games,
            seed,
            kind,
            show_progress: false,
        }
    }
}

/// Result of a benchmark run
#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    pub kind: ChooserKind,
    pub games: usize,
    pub wins: usize,
    pub losses: usize,
    pub total_misses: usize,
    pub average_misses: f64,
    /// Misses per game -> number of games
    pub miss_distribution: BTreeMap<usize, usize>,
    pub duration: Duration,
    pub games_per_second: f64,
}

impl BenchmarkResult {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.wins as f64 / self.games as f64
        }
    }
}

/// Run `config.games` guesser-versus-chooser games in parallel
///
/// # Errors
///
/// Returns the first error any game raises.
pub fn run_benchmark(
    game: &GameConfig,
    dictionary: &CandidateDictionary,
    config: &BenchmarkConfig,
) -> Result<BenchmarkResult> {
    let start = Instant::now();

    let pb = if config.show_progress {
        ProgressBar::new(config.games as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::with_template(
            "{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}",
        )
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▓▒░"),
    );

    let records = (0..config.games)
        .into_par_iter()
        .map(|i| {
            let rng = seeded(config.seed.wrapping_add(i as u64));
            let mut chooser = config.kind.build(game, dictionary, rng)?;
            let guesser = FrequencyGuesser::new(dictionary);
            let record = run_auto_game(&mut chooser, &guesser);
            pb.inc(1);
            record
        })
        .collect::<Result<Vec<_>>>()?;

    pb.finish_with_message("Complete!");

    let mut wins = 0;
    let mut total_misses = 0;
    let mut miss_distribution = BTreeMap::new();
    for record in &records {
        if record.won() {
            wins += 1;
        }
        let misses = record.misses();
        total_misses += misses;
        *miss_distribution.entry(misses).or_insert(0) += 1;
    }

    let duration = start.elapsed();
    let games = records.len();
    log::info!("benchmark: {wins}/{games} won against {:?}", config.kind);

    Ok(BenchmarkResult {
        kind: config.kind,
        games,
        wins,
        losses: games - wins,
        total_misses,
        average_misses: if games == 0 {
            0.0
        } else {
            total_misses as f64 / games as f64
        },
        miss_distribution,
        duration,
        games_per_second: games as f64 / duration.as_secs_f64().max(f64::EPSILON),
    })
}
