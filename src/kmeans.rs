//! Lloyd's algorithm: assign every point to its nearest centroid, move every
//! centroid to the mean of its points, repeat until no centroid moves more
//! than the tolerance or the iteration cap is hit.

use crate::config::KMeansConfig;
use crate::dataset::DataSet;
use crate::error::{KMeansError, Result};
use crate::point::{distance, Point};
use log::{debug, info, trace, warn};

/// Final state of a clustering run
#[derive(Debug, Clone, PartialEq)]
pub struct KMeansResult {
    /// One centroid per cluster, indexed by cluster
    pub centroids: Vec<Point>,
    /// Cluster index of every point, in input order
    pub assignments: Vec<usize>,
    /// Number of assign/update iterations performed
    pub n_iterations: usize,
    /// false when the run stopped at the iteration cap with centroids still moving
    pub converged: bool,
}

impl KMeansResult {
    pub fn k(&self) -> usize {
        self.centroids.len()
    }

    /// Number of points in each cluster
    pub fn cluster_sizes(&self) -> Vec<usize> {
        let mut sizes = vec![0usize; self.k()];
        for &c in &self.assignments {
            debug_assert!(c < self.k(), "cluster index {} out of range for k = {}", c, self.k());
            sizes[c] += 1;
        }
        sizes
    }

    /// Sum of squared distances between each point and its centroid
    pub fn inertia(&self, data: &DataSet) -> f64 {
        data.points()
            .zip(&self.assignments)
            .map(|(p, &c)| distance(&p, &self.centroids[c]).powi(2))
            .sum()
    }
}

/// Checks 1 <= k <= n
pub fn validate_cluster_count(k: usize, n: usize) -> Result<()> {
    if k == 0 || k > n {
        return Err(KMeansError::InvalidClusterCount {
            k: i64::try_from(k).unwrap_or(i64::MAX),
            n,
        });
    }
    Ok(())
}

/// Seeds `k` centroids with the first `k` points, as they are.
pub fn init_centroids(data: &DataSet, k: usize) -> Result<Vec<Point>> {
    validate_cluster_count(k, data.len())?;
    let mut centroids = Vec::new();
    centroids.try_reserve_exact(k)?;
    centroids.extend(data.points().take(k));
    Ok(centroids)
}

/// Index of the centroid nearest to `p`. The lowest index wins a tie.
#[inline]
fn nearest(p: &Point, centroids: &[Point]) -> usize {
    let mut best_cluster = 0;
    let mut best_dist = f64::INFINITY;

    for (ci, c) in centroids.iter().enumerate() {
        let dist = distance(p, c);
        if dist < best_dist {
            best_dist = dist;
            best_cluster = ci;
        }
    }
    best_cluster
}

/// Assignment step: overwrite `assignments[i]` with the nearest centroid of point `i`.
pub fn assign_clusters(data: &DataSet, centroids: &[Point], assignments: &mut [usize]) {
    debug_assert_eq!(assignments.len(), data.len());
    for (i, (p, slot)) in data.points().zip(assignments.iter_mut()).enumerate() {
        *slot = nearest(&p, centroids);
        trace!("point {} {} -> cluster {}", i, p, slot);
    }
}

/// Update step: move every centroid to the mean of the points assigned to it.
/// A centroid with no points keeps its position.
pub fn update_centroids(data: &DataSet, assignments: &[usize], centroids: &mut [Point]) {
    let k = centroids.len();
    let mut sums = vec![(0.0f64, 0.0f64); k];
    let mut counts = vec![0usize; k];

    for (p, &c) in data.points().zip(assignments) {
        sums[c].0 += p.x;
        sums[c].1 += p.y;
        counts[c] += 1;
    }

    for (ci, centroid) in centroids.iter_mut().enumerate() {
        if counts[ci] > 0 {
            let n = counts[ci] as f64;
            *centroid = Point::new(sums[ci].0 / n, sums[ci].1 / n);
        }
    }
}

/// Run Lloyd's algorithm over `data` with `k` clusters.
///
/// `initial` must hold exactly `k` centroids; when absent the first `k` points
/// are used. At least one iteration always runs.
pub fn kmeans(
    data: &DataSet,
    k: usize,
    initial: Option<Vec<Point>>,
    config: &KMeansConfig,
) -> Result<KMeansResult> {
    let n = data.len();
    validate_cluster_count(k, n)?;

    let mut centroids = match initial {
        Some(c) if c.len() != k => {
            return Err(KMeansError::CentroidCountMismatch {
                expected: k,
                actual: c.len(),
            })
        }
        Some(c) => c,
        None => init_centroids(data, k)?,
    };

    let mut assignments = Vec::new();
    assignments.try_reserve_exact(n)?;
    assignments.resize(n, 0usize);

    info!(
        "Clustering {} points into {} clusters (max_iter = {}, tol = {})",
        n, k, config.max_iter, config.tol
    );

    let mut n_iterations = 0;
    let converged = loop {
        let previous = centroids.clone();

        assign_clusters(data, &centroids, &mut assignments);
        update_centroids(data, &assignments, &mut centroids);

        let shift = previous
            .iter()
            .zip(&centroids)
            .map(|(a, b)| distance(a, b))
            .fold(0.0f64, f64::max);
        let changed = shift > config.tol;
        n_iterations += 1;

        debug!(
            "Iteration {}/{}: max centroid shift = {:.6}",
            n_iterations, config.max_iter, shift
        );

        if !changed {
            break true;
        }
        if n_iterations >= config.max_iter {
            break false;
        }
    };

    if converged {
        info!("Converged after {} iterations", n_iterations);
    } else {
        info!("Reached maximum iterations ({})", config.max_iter);
    }

    let result = KMeansResult {
        centroids,
        assignments,
        n_iterations,
        converged,
    };
    for (ci, &size) in result.cluster_sizes().iter().enumerate() {
        if size == 0 {
            warn!("Cluster {} is empty; centroid stays at {}", ci, result.centroids[ci]);
        }
    }
    Ok(result)
}
