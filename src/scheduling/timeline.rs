//! Shared timeline derivation for non-preemptive runs.

use crate::models::{JobSet, RunResult};

/// Derives the full per-job timeline from a completion ORDER.
///
/// `order` is a permutation of job indices giving the sequence in which
/// jobs run to completion. One clock walk: each job starts at
/// `max(clock, arrival)` and holds the processor for its full service time.
pub(crate) fn from_order(jobs: &JobSet, order: &[usize]) -> RunResult {
    debug_assert_eq!(order.len(), jobs.len());

    let mut start_times = vec![0i64; jobs.len()];
    let mut completion_times = vec![0i64; jobs.len()];
    let mut clock = 0i64;

    for &index in order {
        let arrival = jobs.arrivals()[index];
        let service = jobs.services()[index];

        clock = clock.max(arrival);
        start_times[index] = clock;
        clock += service;
        completion_times[index] = clock;
    }

    RunResult::from_schedule(jobs, start_times, completion_times)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_back_to_back_order() {
        let jobs = JobSet::new(vec![0, 1, 2], vec![5, 3, 8]).unwrap();
        let result = from_order(&jobs, &[0, 1, 2]);

        assert_eq!(result.start_times, vec![0, 5, 8]);
        assert_eq!(result.completion_times, vec![5, 8, 16]);
        assert_eq!(result.waiting_times, vec![0, 4, 6]);
    }

    #[test]
    fn test_idle_gap_before_late_arrival() {
        // Processor idles from t=2 until job 1 arrives at t=10.
        let jobs = JobSet::new(vec![0, 10], vec![2, 3]).unwrap();
        let result = from_order(&jobs, &[0, 1]);

        assert_eq!(result.start_times, vec![0, 10]);
        assert_eq!(result.completion_times, vec![2, 13]);
        assert_eq!(result.waiting_times, vec![0, 0]);
    }

    #[test]
    fn test_reordered_jobs_keep_index_keying() {
        let jobs = JobSet::new(vec![0, 0], vec![6, 2]).unwrap();
        let result = from_order(&jobs, &[1, 0]);

        // Job 1 ran first but results stay keyed by input index.
        assert_eq!(result.start_times, vec![2, 0]);
        assert_eq!(result.completion_times, vec![8, 2]);
    }

    #[test]
    fn test_empty_order() {
        let jobs = JobSet::empty();
        assert_eq!(from_order(&jobs, &[]), RunResult::empty());
    }
}
