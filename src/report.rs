//! The results file: a header line, then one comma separated section per scenario.
//!
//! ```text
//! Comparaison des structures - 1M elements
//!
//! === Cas 1: Donnees melangees ===
//! Structure,Insertion(s),Recherche(s),Suppression(s),Total(s),Hauteur
//! BST,0.61,0.004,0.002,0.616,49
//! ```

use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

use log::info;

use crate::error::{Error, Result};
use crate::harness::BenchmarkResult;

/// Column header of every section.
pub const COLUMNS: &str = "Structure,Insertion(s),Recherche(s),Suppression(s),Total(s),Hauteur";

/// Written in place of anything that wasn't measured.
const MISSING: i64 = -1;

/// An append-only report file.
#[derive(Debug)]
pub struct Report {
    path: PathBuf,
}

impl Report {
    /// Creates (or truncates) the file at `path` and writes the header line.
    pub fn create(path: impl Into<PathBuf>, header: &str) -> Result<Self> {
        let path = path.into();
        let write = || -> io::Result<()> {
            let mut file = File::create(&path)?;
            writeln!(file, "{}", header)
        };
        write().map_err(|source| Error::Report {
            path: path.clone(),
            source,
        })?;

        info!("Writing results to {}", path.display());
        Ok(Self { path })
    }

    /// Where the report lives.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends a section titled `scenario` with one row per result.
    pub fn append(&self, scenario: &str, results: &[BenchmarkResult]) -> Result<()> {
        let write = || -> io::Result<()> {
            let file = OpenOptions::new().append(true).open(&self.path)?;
            let mut out = BufWriter::new(file);
            write_section(&mut out, scenario, results)?;
            out.flush()
        };
        write().map_err(|source| Error::Report {
            path: self.path.clone(),
            source,
        })
    }
}

/// Formats a section. Split out from [`Report::append`] so it can write to any sink.
pub fn write_section<W: Write>(
    out: &mut W,
    scenario: &str,
    results: &[BenchmarkResult],
) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "=== {} ===", scenario)?;
    writeln!(out, "{}", COLUMNS)?;
    for result in results {
        write!(out, "{},", result.name)?;
        match &result.timings {
            Some(timings) => writeln!(
                out,
                "{},{},{},{},{}",
                seconds(timings.insertion),
                seconds(timings.search),
                seconds(timings.deletion),
                seconds(timings.total()),
                height(result.height),
            )?,
            // The total of a skipped row is the sum of its three missing durations.
            None => writeln!(
                out,
                "{m},{m},{m},{},{}",
                3 * MISSING,
                height(result.height),
                m = MISSING
            )?,
        }
    }
    Ok(())
}

fn seconds(duration: Duration) -> f64 {
    duration.as_secs_f64()
}

fn height(height: Option<usize>) -> String {
    match height {
        Some(height) => height.to_string(),
        None => MISSING.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::harness::Timings;

    fn section(results: &[BenchmarkResult]) -> String {
        let mut out = Vec::new();
        write_section(&mut out, "Cas 2: Donnees triees", results).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn measured_row() {
        let result = BenchmarkResult {
            name: "BST".to_string(),
            timings: Some(Timings {
                insertion: Duration::from_millis(500),
                search: Duration::from_millis(250),
                deletion: Duration::from_millis(125),
            }),
            height: Some(49),
        };

        assert_eq!(
            section(&[result]),
            "\n=== Cas 2: Donnees triees ===\n\
             Structure,Insertion(s),Recherche(s),Suppression(s),Total(s),Hauteur\n\
             BST,0.5,0.25,0.125,0.875,49\n"
        );
    }

    #[test]
    fn unmeasured_height() {
        let result = BenchmarkResult {
            name: "BTreeSet".to_string(),
            timings: Some(Timings {
                insertion: Duration::from_secs(1),
                search: Duration::ZERO,
                deletion: Duration::from_secs(2),
            }),
            height: None,
        };

        assert!(section(&[result]).ends_with("BTreeSet,1,0,2,3,-1\n"));
    }

    #[test]
    fn skipped_row() {
        let result = BenchmarkResult::skipped("BST (SAUTÉ - Stack Overflow)", 1_000_000);

        assert!(section(&[result]).ends_with("BST (SAUTÉ - Stack Overflow),-1,-1,-1,-3,1000000\n"));
    }

    #[test]
    fn create_then_append() {
        let path = std::env::temp_dir().join(format!("bst_bench_report_{}.csv", std::process::id()));
        std::fs::write(&path, "stale content\n").unwrap();

        let report = Report::create(&path, "header").unwrap();
        report.append("first", &[]).unwrap();
        report
            .append("second", &[BenchmarkResult::skipped("BST", 3)])
            .unwrap();

        let contents = std::fs::read_to_string(report.path()).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(
            contents,
            format!(
                "header\n\n=== first ===\n{c}\n\n=== second ===\n{c}\nBST,-1,-1,-1,-3,3\n",
                c = COLUMNS
            )
        );
    }

    #[test]
    fn unwritable_path() {
        let path = std::env::temp_dir()
            .join("bst_bench_missing_dir")
            .join("nested")
            .join("report.csv");

        match Report::create(&path, "header") {
            Err(Error::Report { path: failed, .. }) => assert_eq!(failed, path),
            other => panic!("expected a report error, got {:?}", other),
        }
    }
}
