use std::path::PathBuf;

/// Everything that can go wrong while running the benchmark suite. The trees themselves never
/// fail; only the report file and the process setup can.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The report file could not be created or appended to.
    #[error("Failed to write report {} (error: {source})", .path.display())]
    Report {
        /// Where the report was being written.
        path: PathBuf,
        /// The underlying I/O failure.
        source: std::io::Error,
    },
    /// A global logger was already installed.
    #[error("Failed to install logger (error: {0})")]
    Logger(#[from] log::SetLoggerError),
}

/// Shorthand for results carrying the crate [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
