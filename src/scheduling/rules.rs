//! Selection rules for the non-preemptive policies.
//!
//! Each rule scores the ready jobs at a decision point; the engine runs the
//! best-scoring job to completion.
//!
//! # Score Convention
//! Lower score = dispatched first. Exact ties are broken by lowest job
//! index, via an explicit comparator rather than container iteration order,
//! so runs are reproducible across platforms.

use crate::models::Job;

/// A dispatching criterion evaluated at each decision point.
///
/// # Score Convention
/// **Lower score = dispatched first.** Rules scoring a "largest wins"
/// criterion negate it.
pub trait SelectionRule {
    /// Rule name (e.g., "FCFS", "SJF").
    fn name(&self) -> &'static str;

    /// Scores a ready job at the current clock. Lower = dispatched first.
    fn score(&self, job: Job, clock: i64) -> f64;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}

/// First-come-first-served.
///
/// Scores by arrival time; combined with the index tie-break this is the
/// stable sort by arrival. No starvation by construction, but short jobs
/// queue behind long ones.
#[derive(Debug, Clone, Copy)]
pub struct ArrivalOrder;

impl SelectionRule for ArrivalOrder {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn score(&self, job: Job, _clock: i64) -> f64 {
        job.arrival as f64
    }

    fn description(&self) -> &'static str {
        "First Come First Served"
    }
}

/// Shortest-job-first (non-preemptive).
///
/// Minimizes mean waiting time among non-preemptive policies when service
/// times are known, at the cost of starving long jobs under sustained
/// short-job arrivals.
#[derive(Debug, Clone, Copy)]
pub struct ShortestService;

impl SelectionRule for ShortestService {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn score(&self, job: Job, _clock: i64) -> f64 {
        job.service as f64
    }

    fn description(&self) -> &'static str {
        "Shortest Job First"
    }
}

/// Highest-response-ratio-next.
///
/// Response ratio = (waited + service) / service, where waited is the time
/// spent ready at the decision point. Short jobs start favored; long
/// waiters overtake them as their ratio grows, which bounds starvation.
/// Highest ratio wins → the score is the negated ratio.
#[derive(Debug, Clone, Copy)]
pub struct HighestResponseRatio;

impl SelectionRule for HighestResponseRatio {
    fn name(&self) -> &'static str {
        "HRRN"
    }

    fn score(&self, job: Job, clock: i64) -> f64 {
        let waited = (clock - job.arrival) as f64;
        -((waited + job.service as f64) / job.service as f64)
    }

    fn description(&self) -> &'static str {
        "Highest Response Ratio Next"
    }
}
