//! Every tunable number of the benchmark suite in one place.

use std::path::PathBuf;

/// Sizes and paths used by [`crate::scenario::run_suite`]. The binary always runs with
/// [`BenchConfig::default`]; tests shrink the sizes with struct update syntax.
///
/// ```
/// use bst_bench::config::BenchConfig;
///
/// let config = BenchConfig {
///     size: 1_000,
///     sizes: vec![100, 500],
///     ..BenchConfig::default()
/// };
/// assert_eq!(config.searches, 10_000);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BenchConfig {
    /// The report file. Truncated at the start of a suite.
    pub report_path: PathBuf,
    /// Dataset size of the shuffled and sorted scenarios.
    pub size: usize,
    /// Dataset sizes of the variable size scenario, run in order.
    pub sizes: Vec<usize>,
    /// How many random lookups the search phase performs.
    pub searches: usize,
    /// Upper bound on how many elements the deletion phase erases.
    pub max_deletions: usize,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            report_path: PathBuf::from("resultats.csv"),
            size: 1_000_000,
            sizes: vec![100_000, 500_000, 1_000_000],
            searches: 10_000,
            max_deletions: 5_000,
        }
    }
}
