//! Scheduling run results.
//!
//! One [`RunResult`] is produced per (job set, policy) pair.
//!
//! # Metrics
//!
//! | Series | Definition |
//! |--------|-----------|
//! | Start | First tick the job executes |
//! | Completion | Tick the job finishes |
//! | Turnaround | Completion − arrival |
//! | Waiting | Turnaround − service |
//! | Response | Start − arrival (fixed at first execution) |
//!
//! For non-preemptive policies waiting and response coincide; under
//! preemption a job's response time is frozen the first time it runs while
//! waiting time keeps accumulating across interruptions.

use serde::{Deserialize, Serialize};

use super::JobSet;

/// Per-job timeline and aggregate means for one scheduling run.
///
/// All five series are indexed by the job's position in the input
/// [`JobSet`]. An empty run has empty series and aggregate means of 0.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunResult {
    /// First execution tick per job.
    pub start_times: Vec<i64>,
    /// Completion tick per job.
    pub completion_times: Vec<i64>,
    /// Completion − arrival per job.
    pub turnaround_times: Vec<i64>,
    /// Turnaround − service per job.
    pub waiting_times: Vec<i64>,
    /// Start − arrival per job.
    pub response_times: Vec<i64>,
    /// Arithmetic mean of waiting times.
    pub avg_waiting: f64,
    /// Arithmetic mean of turnaround times.
    pub avg_turnaround: f64,
    /// Arithmetic mean of response times.
    pub avg_response: f64,
}

impl RunResult {
    /// The empty result: no jobs, all means 0.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Derives the full result from raw start/completion times.
    ///
    /// Turnaround, waiting, and response follow from their definitions;
    /// the three means are computed in the same pass.
    pub(crate) fn from_schedule(
        jobs: &JobSet,
        start_times: Vec<i64>,
        completion_times: Vec<i64>,
    ) -> Self {
        debug_assert_eq!(start_times.len(), jobs.len());
        debug_assert_eq!(completion_times.len(), jobs.len());

        let n = jobs.len();
        let mut turnaround_times = Vec::with_capacity(n);
        let mut waiting_times = Vec::with_capacity(n);
        let mut response_times = Vec::with_capacity(n);
        let mut waiting_sum = 0i64;
        let mut turnaround_sum = 0i64;
        let mut response_sum = 0i64;

        for job in jobs.jobs() {
            let turnaround = completion_times[job.index] - job.arrival;
            let waiting = turnaround - job.service;
            let response = start_times[job.index] - job.arrival;

            turnaround_sum += turnaround;
            waiting_sum += waiting;
            response_sum += response;

            turnaround_times.push(turnaround);
            waiting_times.push(waiting);
            response_times.push(response);
        }

        let mean = |sum: i64| if n == 0 { 0.0 } else { sum as f64 / n as f64 };
        Self {
            avg_waiting: mean(waiting_sum),
            avg_turnaround: mean(turnaround_sum),
            avg_response: mean(response_sum),
            start_times,
            completion_times,
            turnaround_times,
            waiting_times,
            response_times,
        }
    }

    /// Number of jobs in the run.
    pub fn job_count(&self) -> usize {
        self.completion_times.len()
    }

    /// Latest completion time (0 for an empty run).
    pub fn makespan(&self) -> i64 {
        self.completion_times.iter().copied().max().unwrap_or(0)
    }
}
