//! Error types shared by the pipeline and the config loader.

use std::io;
use std::path::PathBuf;

/// Errors surfaced by the core. Per-line conditions (`Parse`) are recovered
/// by the stream drivers; the rest end the run or abort startup.
#[derive(Debug, thiserror::Error)]
pub enum SiftError {
    /// Input line is not a URL, even after the default scheme was prepended.
    #[error("parse failure: {input:?}: {source}")]
    Parse {
        input: String,
        #[source]
        source: url::ParseError,
    },

    /// Reading the input stream failed.
    #[error("failed to read input: {0}")]
    Input(#[source] io::Error),

    /// Writing a result line failed (e.g. broken pipe).
    #[error("failed to write output: {0}")]
    Output(#[source] io::Error),

    /// Config file could not be read or decoded.
    #[error("config {}: {message}", .path.display())]
    Config { path: PathBuf, message: String },
}

pub type Result<T> = std::result::Result<T, SiftError>;
