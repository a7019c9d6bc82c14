//! Times one container through its insert, search and delete phases.

use std::hint::black_box;
use std::time::{Duration, Instant};

use log::debug;
use rand::Rng;

use crate::config::BenchConfig;
use crate::container::Container;

/// How long each phase took.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Timings {
    /// Inserting the whole dataset.
    pub insertion: Duration,
    /// The random lookups.
    pub search: Duration,
    /// Erasing the head of the dataset.
    pub deletion: Duration,
}

impl Timings {
    /// Sum of the three phases.
    pub fn total(&self) -> Duration {
        self.insertion + self.search + self.deletion
    }
}

/// The outcome of one (container, dataset) trial.
#[derive(Clone, Debug, PartialEq)]
pub struct BenchmarkResult {
    /// Shown in the first column of the report. Must not contain commas.
    pub name: String,
    /// `None` when the trial was skipped rather than run.
    pub timings: Option<Timings>,
    /// `None` when the height wasn't measured.
    pub height: Option<usize>,
}

impl BenchmarkResult {
    /// A row for a trial that was never run. The height is whatever the caller wants reported;
    /// it isn't measured.
    pub fn skipped(name: impl Into<String>, height: usize) -> Self {
        Self {
            name: name.into(),
            timings: None,
            height: Some(height),
        }
    }
}

/// What a single trial does besides inserting the dataset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Options {
    /// Number of random lookups.
    pub searches: usize,
    /// At most this many of the first dataset elements get erased.
    pub max_deletions: usize,
    /// Whether to measure the height after insertion.
    pub report_height: bool,
}

impl Options {
    /// Options from the suite configuration, without height measurement.
    pub fn new(config: &BenchConfig) -> Self {
        Self {
            searches: config.searches,
            max_deletions: config.max_deletions,
            report_height: false,
        }
    }

    /// Same options with height measurement turned on.
    pub fn with_height(self) -> Self {
        Self {
            report_height: true,
            ..self
        }
    }
}

/// Runs the timed phases against `container`, which should start out empty:
///
/// 1. insert every key of `dataset` in order,
/// 2. optionally measure the height,
/// 3. look up `options.searches` keys of `dataset` picked uniformly at random (with
///    replacement),
/// 4. erase the first `min(options.max_deletions, dataset.len())` keys in order.
///
/// With an empty dataset there is nothing to look up so the search phase does nothing.
pub fn run<K, C, R>(
    name: &str,
    container: &mut C,
    dataset: &[K],
    options: &Options,
    rng: &mut R,
) -> BenchmarkResult
where
    K: Clone,
    C: Container<K> + ?Sized,
    R: Rng,
{
    println!("== {} ==", name);

    let instant = Instant::now();
    for key in dataset {
        container.insert(key.clone());
    }
    let insertion = instant.elapsed();
    println!("Insertion    : {:.6}s", insertion.as_secs_f64());
    debug!("{}: inserted {} keys in {:?}", name, dataset.len(), insertion);

    let height = if options.report_height {
        container.height()
    } else {
        None
    };
    if let Some(height) = height {
        match optimal_height(dataset.len()) {
            Some(optimal) => println!(
                "Height       : {} (log2({}) ~ {})",
                height,
                dataset.len(),
                optimal
            ),
            None => println!("Height       : {}", height),
        }
    }

    let searches = if dataset.is_empty() {
        0
    } else {
        options.searches
    };
    let instant = Instant::now();
    for _ in 0..searches {
        let key = &dataset[rng.gen_range(0..dataset.len())];
        black_box(container.find(key));
    }
    let search = instant.elapsed();
    println!(
        "Search       : {:.6}s ({} lookups)",
        search.as_secs_f64(),
        searches
    );
    debug!("{}: {} lookups in {:?}", name, searches, search);

    let deletions = options.max_deletions.min(dataset.len());
    let instant = Instant::now();
    for key in &dataset[..deletions] {
        container.erase(key);
    }
    let deletion = instant.elapsed();
    println!(
        "Deletion     : {:.6}s ({} elements)",
        deletion.as_secs_f64(),
        deletions
    );
    debug!("{}: erased {} keys in {:?}", name, deletions, deletion);

    let timings = Timings {
        insertion,
        search,
        deletion,
    };
    println!("Total        : {:.6}s", timings.total().as_secs_f64());
    println!();

    BenchmarkResult {
        name: name.to_string(),
        timings: Some(timings),
        height,
    }
}

/// `floor(log2(len))`, the height of a perfectly balanced tree holding `len` keys minus one.
/// `None` for an empty dataset.
fn optimal_height(len: usize) -> Option<u32> {
    if len == 0 {
        None
    } else {
        Some(usize::BITS - 1 - len.leading_zeros())
    }
}
