use thiserror::Error;

use ballast_core::BallastError;

/// Errors surfaced by the CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// File could not be read.
    #[error("cannot read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Indicator evaluation or ledger loading failed.
    #[error(transparent)]
    Treasury(#[from] BallastError),
}
