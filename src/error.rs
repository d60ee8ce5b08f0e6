// src/error.rs
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures loading the map data file. All of them stop startup.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("Data file not found: {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("{0}")]
    Format(String),

    #[error("Could not read data file: {0}")]
    Io(#[from] io::Error),

    #[error("Could not parse data file: {0}")]
    Csv(#[from] csv::Error),
}

#[derive(Debug, Error)]
pub enum ScrapeError {
    #[cfg(feature = "cli")]
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP error: {status} {url}")]
    Status { status: u16, url: String },

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error("No map entries found. The page structure may have changed.")]
    Empty,
}
