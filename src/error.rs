use std::collections::TryReserveError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures of a clustering run. All of them end the run.
#[derive(Error, Debug)]
pub enum KMeansError {
    /// The point source could not be opened or read
    #[error("Cannot read points from {path:?}: {source}")]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A centroid or assignment buffer could not be allocated
    #[error("Memory error: {0}")]
    AllocationFailure(#[from] TryReserveError),

    /// k is outside [1, n]
    #[error("Invalid number of clusters: {k} (must be between 1 and {n})")]
    InvalidClusterCount { k: i64, n: usize },

    /// The initial centroid provider did not supply exactly k centroids
    #[error("Expected {expected} initial centroids, got {actual}")]
    CentroidCountMismatch { expected: usize, actual: usize },

    /// The result sink could not be written
    #[error("Cannot write results to {path:?}: {source}")]
    SinkUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// An interactive answer could not be understood
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, KMeansError>;
