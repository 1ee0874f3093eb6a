/// Default iteration cap of the clustering loop
pub const DEFAULT_MAX_ITER: usize = 100;

/// Default convergence threshold on the distance a centroid moves in one iteration
pub const DEFAULT_TOL: f64 = 1e-4;

/// Policy constants of the k-means loop
#[derive(Debug, Clone, PartialEq)]
pub struct KMeansConfig {
    /// Maximum number of assign/update iterations. At least one iteration always runs.
    pub max_iter: usize,

    /// A centroid that moves further than this keeps the loop running.
    pub tol: f64,
}

impl Default for KMeansConfig {
    fn default() -> Self {
        Self {
            max_iter: DEFAULT_MAX_ITER,
            tol: DEFAULT_TOL,
        }
    }
}

impl KMeansConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum number of iterations
    pub fn with_max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = max_iter;
        self
    }

    /// Set the convergence threshold
    pub fn with_tol(mut self, tol: f64) -> Self {
        self.tol = tol;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = KMeansConfig::default();
        assert_eq!(config.max_iter, 100);
        assert_eq!(config.tol, 0.0001);
    }

    #[test]
    fn test_builder() {
        let config = KMeansConfig::new().with_max_iter(3).with_tol(0.5);
        assert_eq!(config, KMeansConfig { max_iter: 3, tol: 0.5 });
    }
}
