//! Load distribution metrics.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Average Load | mean(distribution) |
//! | Max / Min Load | extremes of the distribution |
//! | Variance | population variance |
//! | Fairness Index | Jain's index: (Σx)² / (n·Σx²) |
//! | Load Imbalance | max − min |
//!
//! # Reference
//! Jain et al. (1984), "A Quantitative Measure of Fairness and
//! Discrimination for Resource Allocation"

use serde::Serialize;

/// Per-instance request counts and their aggregate statistics.
///
/// An empty distribution is a defined safe default: zero loads, fairness
/// index 1.0.
#[derive(Debug, Clone, Serialize)]
pub struct LoadMetrics {
    /// Display name of the algorithm that produced the distribution.
    pub algorithm: &'static str,
    /// Requests assigned per instance.
    pub distribution: Vec<u64>,
    /// Mean requests per instance.
    pub average_load: f64,
    /// Heaviest instance.
    pub max_load: u64,
    /// Lightest instance.
    pub min_load: u64,
    /// Population variance of the distribution.
    pub variance: f64,
    /// Jain's fairness index (1.0 = perfectly even).
    pub fairness_index: f64,
    /// max_load − min_load.
    pub load_imbalance: u64,
}

impl LoadMetrics {
    /// Computes all statistics from a distribution.
    pub fn calculate(distribution: Vec<u64>) -> Self {
        let n = distribution.len();
        if n == 0 {
            return Self {
                algorithm: "",
                distribution,
                average_load: 0.0,
                max_load: 0,
                min_load: 0,
                variance: 0.0,
                fairness_index: 1.0,
                load_imbalance: 0,
            };
        }

        let total: u64 = distribution.iter().sum();
        let average = total as f64 / n as f64;
        let variance = distribution
            .iter()
            .map(|&x| {
                let d = x as f64 - average;
                d * d
            })
            .sum::<f64>()
            / n as f64;

        let sum_sq: f64 = distribution.iter().map(|&x| (x * x) as f64).sum();
        let fairness = if sum_sq > 0.0 {
            (total as f64 * total as f64) / (n as f64 * sum_sq)
        } else {
            1.0
        };

        let max_load = distribution.iter().copied().max().unwrap_or(0);
        let min_load = distribution.iter().copied().min().unwrap_or(0);

        Self {
            algorithm: "",
            distribution,
            average_load: average,
            max_load,
            min_load,
            variance,
            fairness_index: fairness,
            load_imbalance: max_load - min_load,
        }
    }

    /// Tags the metrics with the producing algorithm's display name.
    pub fn with_algorithm(mut self, name: &'static str) -> Self {
        self.algorithm = name;
        self
    }

    /// Total requests in the distribution.
    pub fn total_requests(&self) -> u64 {
        self.distribution.iter().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_even_distribution() {
        let m = LoadMetrics::calculate(vec![4, 4, 4]);
        assert!((m.average_load - 4.0).abs() < 1e-10);
        assert!((m.variance - 0.0).abs() < 1e-10);
        assert!((m.fairness_index - 1.0).abs() < 1e-10);
        assert_eq!(m.load_imbalance, 0);
    }

    #[test]
    fn test_skewed_distribution() {
        let m = LoadMetrics::calculate(vec![10, 0]);
        assert!((m.average_load - 5.0).abs() < 1e-10);
        assert!((m.variance - 25.0).abs() < 1e-10);
        // (10)² / (2 · 100) = 0.5
        assert!((m.fairness_index - 0.5).abs() < 1e-10);
        assert_eq!(m.max_load, 10);
        assert_eq!(m.min_load, 0);
        assert_eq!(m.load_imbalance, 10);
    }

    #[test]
    fn test_empty_distribution_defaults() {
        let m = LoadMetrics::calculate(vec![]);
        assert!((m.average_load - 0.0).abs() < 1e-10);
        assert!((m.fairness_index - 1.0).abs() < 1e-10);
        assert_eq!(m.load_imbalance, 0);
    }

    #[test]
    fn test_all_zero_distribution() {
        let m = LoadMetrics::calculate(vec![0, 0, 0]);
        assert!((m.fairness_index - 1.0).abs() < 1e-10);
        assert!((m.variance - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_algorithm_tag() {
        let m = LoadMetrics::calculate(vec![1]).with_algorithm("Round Robin");
        assert_eq!(m.algorithm, "Round Robin");
        assert_eq!(m.total_requests(), 1);
    }
}
