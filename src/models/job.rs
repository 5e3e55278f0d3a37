//! Job (schedulable unit) model.
//!
//! A job is one unit of CI/CD work submitted to the scheduling simulator:
//! it becomes eligible at its arrival time and needs an uninterrupted total
//! of `service` ticks of execution.

use rand::Rng;
use serde::Serialize;

use crate::validation::{validate_job_set, ValidationError};

/// A read-only view of one job in a [`JobSet`].
///
/// A job's identity is its index in the input arrays; the index is stable
/// for the lifetime of the set and is what results are keyed by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Job {
    /// Position in the input arrays (0-based, stable).
    pub index: usize,
    /// Tick at which the job becomes eligible to run (≥ 0).
    pub arrival: i64,
    /// Total execution ticks required (> 0). Also called burst time.
    pub service: i64,
}

/// An immutable set of jobs described by parallel arrival/service arrays.
///
/// Construction validates the invariants once (equal lengths, non-negative
/// arrivals, strictly positive service times), so every simulation run can
/// assume well-formed input. An empty set is valid and every policy maps it
/// to the empty [`RunResult`](super::RunResult).
#[derive(Debug, Clone, Serialize)]
pub struct JobSet {
    arrivals: Vec<i64>,
    services: Vec<i64>,
}

impl JobSet {
    /// Creates a job set from parallel arrival/service arrays.
    ///
    /// # Errors
    /// Returns every violated invariant: mismatched lengths, negative
    /// arrival times, non-positive service times.
    pub fn new(arrivals: Vec<i64>, services: Vec<i64>) -> Result<Self, Vec<ValidationError>> {
        validate_job_set(&arrivals, &services)?;
        Ok(Self { arrivals, services })
    }

    /// Creates a job set from `(arrival, service)` pairs.
    pub fn from_pairs(pairs: &[(i64, i64)]) -> Result<Self, Vec<ValidationError>> {
        let (arrivals, services) = pairs.iter().copied().unzip();
        Self::new(arrivals, services)
    }

    /// Creates an empty job set.
    pub fn empty() -> Self {
        Self {
            arrivals: Vec::new(),
            services: Vec::new(),
        }
    }

    /// Generates a random job set with the simulator's stock distribution:
    /// arrivals in `0..=1000`, service times in `1..=20`.
    ///
    /// The caller supplies the RNG, so a seeded generator yields a
    /// reproducible workload.
    pub fn random<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Self {
        let arrivals = (0..count).map(|_| rng.random_range(0..=1000)).collect();
        let services = (0..count).map(|_| rng.random_range(1..=20)).collect();
        Self { arrivals, services }
    }

    /// Number of jobs.
    pub fn len(&self) -> usize {
        self.arrivals.len()
    }

    /// Whether the set contains no jobs.
    pub fn is_empty(&self) -> bool {
        self.arrivals.is_empty()
    }

    /// Arrival times, indexed by job.
    pub fn arrivals(&self) -> &[i64] {
        &self.arrivals
    }

    /// Service times, indexed by job.
    pub fn services(&self) -> &[i64] {
        &self.services
    }

    /// The job at `index`, if it exists.
    pub fn job(&self, index: usize) -> Option<Job> {
        (index < self.len()).then(|| Job {
            index,
            arrival: self.arrivals[index],
            service: self.services[index],
        })
    }

    /// Iterates over all jobs in index order.
    pub fn jobs(&self) -> impl Iterator<Item = Job> + '_ {
        self.arrivals
            .iter()
            .zip(&self.services)
            .enumerate()
            .map(|(index, (&arrival, &service))| Job {
                index,
                arrival,
                service,
            })
    }

    /// Sum of all service times.
    pub fn total_service(&self) -> i64 {
        self.services.iter().sum()
    }

    /// Latest arrival time (0 for an empty set).
    pub fn max_arrival(&self) -> i64 {
        self.arrivals.iter().copied().max().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_valid_construction() {
        let jobs = JobSet::new(vec![0, 1, 2], vec![5, 3, 8]).unwrap();
        assert_eq!(jobs.len(), 3);
        assert_eq!(jobs.total_service(), 16);
        assert_eq!(jobs.max_arrival(), 2);
        assert_eq!(
            jobs.job(1),
            Some(Job {
                index: 1,
                arrival: 1,
                service: 3
            })
        );
        assert_eq!(jobs.job(3), None);
    }

    #[test]
    fn test_from_pairs() {
        let jobs = JobSet::from_pairs(&[(0, 5), (1, 3)]).unwrap();
        assert_eq!(jobs.arrivals(), &[0, 1]);
        assert_eq!(jobs.services(), &[5, 3]);
    }

    #[test]
    fn test_empty_set() {
        let jobs = JobSet::empty();
        assert!(jobs.is_empty());
        assert_eq!(jobs.total_service(), 0);
        assert_eq!(jobs.max_arrival(), 0);
        assert_eq!(jobs.jobs().count(), 0);
    }

    #[test]
    fn test_invalid_input_rejected() {
        assert!(JobSet::new(vec![0, 1], vec![5]).is_err());
        assert!(JobSet::new(vec![-1], vec![5]).is_err());
        assert!(JobSet::new(vec![0], vec![0]).is_err());
    }

    #[test]
    fn test_random_is_reproducible() {
        let mut a = StdRng::seed_from_u64(7);
        let mut b = StdRng::seed_from_u64(7);
        let first = JobSet::random(50, &mut a);
        let second = JobSet::random(50, &mut b);
        assert_eq!(first.arrivals(), second.arrivals());
        assert_eq!(first.services(), second.services());
        assert!(first.services().iter().all(|&s| (1..=20).contains(&s)));
        assert!(first.arrivals().iter().all(|&a| (0..=1000).contains(&a)));
    }
}
