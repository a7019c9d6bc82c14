//! The benchmark suite: which datasets get built, which containers run against them, and in what
//! order the sections land in the report.

use std::collections::{BTreeMap, BTreeSet};

use log::info;
use rand::Rng;

use crate::config::BenchConfig;
use crate::dataset::Dataset;
use crate::error::Result;
use crate::harness::{self, BenchmarkResult, Options};
use crate::recursive::Tree;
use crate::report::Report;

/// Section title of the shuffled scenario.
pub const SHUFFLED: &str = "Cas 1: Donnees melangees";
/// Section title of the sorted scenario.
pub const SORTED: &str = "Cas 2: Donnees triees";
/// Name of the placeholder row standing in for the BST on sorted input.
pub const SKIPPED_BST: &str = "BST (SAUTÉ - Stack Overflow)";

/// Section title of one run of the variable size scenario.
pub fn size_title(size: usize) -> String {
    format!("Taille: {}", size)
}

/// First line of the report, with the size in millions or thousands when it divides evenly.
pub fn report_header(size: usize) -> String {
    let size = match size {
        0 => size.to_string(),
        n if n % 1_000_000 == 0 => format!("{}M", n / 1_000_000),
        n if n % 1_000 == 0 => format!("{}K", n / 1_000),
        n => n.to_string(),
    };
    format!("Comparaison des structures - {} elements", size)
}

/// The BST and both balanced containers against one dataset.
fn run_all<R: Rng>(
    dataset: &Dataset,
    names: [&str; 3],
    config: &BenchConfig,
    rng: &mut R,
) -> Vec<BenchmarkResult> {
    let options = Options::new(config);
    let [bst, set, map] = names;
    vec![
        harness::run(
            bst,
            &mut Tree::<i32>::new(),
            &dataset[..],
            &options.with_height(),
            rng,
        ),
        harness::run(set, &mut BTreeSet::<i32>::new(), &dataset[..], &options, rng),
        harness::run(map, &mut BTreeMap::<i32, i32>::new(), &dataset[..], &options, rng),
    ]
}

/// Every container against a shuffled identity dataset of `config.size` keys.
pub fn shuffled<R: Rng>(config: &BenchConfig, rng: &mut R) -> Vec<BenchmarkResult> {
    println!("\n--- {} ---\n", SHUFFLED);
    let dataset = Dataset::shuffled(config.size, rng);
    run_all(
        &dataset,
        ["BST", "SET (BTreeSet)", "MAP (BTreeMap)"],
        config,
        rng,
    )
}

/// The balanced containers against an ascending dataset of `config.size` keys.
///
/// The BST isn't run: every insert would recurse once per key already in the tree. Its row is a
/// placeholder whose height is the dataset size, which is what the tree would degenerate to.
pub fn sorted<R: Rng>(config: &BenchConfig, rng: &mut R) -> Vec<BenchmarkResult> {
    println!("\n--- {} ---\n", SORTED);
    println!("Note: BST skipped to avoid a stack overflow\n");
    let dataset = Dataset::identity(config.size).sorted();
    let options = Options::new(config);
    vec![
        BenchmarkResult::skipped(SKIPPED_BST, dataset.len()),
        harness::run(
            "SET (BTreeSet)",
            &mut BTreeSet::<i32>::new(),
            &dataset[..],
            &options,
            rng,
        ),
        harness::run(
            "MAP (BTreeMap)",
            &mut BTreeMap::<i32, i32>::new(),
            &dataset[..],
            &options,
            rng,
        ),
    ]
}

/// Every container against a freshly shuffled dataset for each of `config.sizes`. Each size is
/// appended to `report` as soon as it finishes, so earlier sizes survive a later failure.
/// Returns the section title and results per size.
pub fn variable_sizes<R: Rng>(
    config: &BenchConfig,
    report: &Report,
    rng: &mut R,
) -> Result<Vec<(String, Vec<BenchmarkResult>)>> {
    let mut sections = Vec::with_capacity(config.sizes.len());
    for &size in &config.sizes {
        let title = size_title(size);
        println!("\n--- {} ---\n", title);
        let dataset = Dataset::shuffled(size, rng);
        let results = run_all(&dataset, ["BST", "SET", "MAP"], config, rng);
        report.append(&title, &results)?;
        sections.push((title, results));
    }
    Ok(sections)
}

/// Runs every scenario in order and writes them to a fresh report at `config.report_path`.
pub fn run_suite<R: Rng>(config: &BenchConfig, rng: &mut R) -> Result<Report> {
    println!("\nData structure comparison");
    println!("Testing with {} elements\n", config.size);

    let report = Report::create(&config.report_path, &report_header(config.size))?;

    info!("Running the shuffled scenario");
    report.append(SHUFFLED, &shuffled(config, rng))?;

    info!("Running the sorted scenario");
    report.append(SORTED, &sorted(config, rng))?;

    info!("Running the variable size scenario");
    variable_sizes(config, &report, rng)?;

    println!(
        "\nBenchmarks done. Results written to {}\n",
        report.path().display()
    );
    println!("Analysis:");
    println!("- Shuffled data: the BST keeps up with the balanced containers");
    println!("- Sorted data: the balanced containers are far faster");
    println!(
        "- BST height: about 2 * log2(N) when shuffled, N when sorted ({} here)",
        config.size
    );
    println!("- Balanced containers stay near log2(N)\n");

    Ok(report)
}
