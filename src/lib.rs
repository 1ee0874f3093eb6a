//! # kmeans2d
//!
//! Lloyd's k-means clustering of 2D points.
//!
//! Points are read from a text file (one `x y` pair per line), clustered into
//! `k` groups and written back out with their cluster index.
//!
//! ```rust
//! use kmeans2d::{DataSet, KMeansConfig, Point};
//!
//! let ds = DataSet::from(vec![
//!     Point::new(0.0, 0.0),
//!     Point::new(0.0, 1.0),
//!     Point::new(10.0, 0.0),
//!     Point::new(10.0, 1.0),
//! ]);
//! let seeds = vec![Point::new(0.0, 0.0), Point::new(10.0, 0.0)];
//! let result = ds.kmeans(2, Some(seeds), &KMeansConfig::default()).unwrap();
//! assert_eq!(result.assignments, vec![0, 0, 1, 1]);
//! assert_eq!(result.centroids, vec![Point::new(0.0, 0.5), Point::new(10.0, 0.5)]);
//! ```

pub mod config;
pub mod dataset;
pub mod error;
pub mod kmeans;
pub mod output;
pub mod point;
pub mod prompt;

#[cfg(test)]
mod tests;

pub use config::KMeansConfig;
pub use dataset::DataSet;
pub use error::KMeansError;
pub use kmeans::{kmeans, KMeansResult};
pub use output::{write_output, OutputFormat};
pub use point::{distance, Point};
