//! The scheduling engine.
//!
//! Drives simulated time forward, maintains the ready set, and reconstructs
//! the per-job timeline. Non-preemptive policies (FCFS, SJF, HRRN) share a
//! decision-point loop that produces a completion order; SRTF runs a
//! unit-tick state machine because preemption cannot be reduced to a static
//! order.
//!
//! # Complexity
//!
//! The non-preemptive loop is O(n²) over jobs. The SRTF loop is
//! O(jobs × makespan): fine at simulator scale, not a production design.
//! A scalable variant would key a priority structure on remaining time and
//! re-evaluate only at arrival and completion events.

use crate::models::{JobSet, RunResult};

use super::rules::{ArrivalOrder, HighestResponseRatio, SelectionRule, ShortestService};
use super::timeline;
use super::{Policy, SimulationError};

/// Runs one scheduling policy over one job set.
///
/// Each run is a pure function of its inputs: the engine holds no state
/// across runs and no randomness, so identical inputs produce identical
/// results.
///
/// # Example
///
/// ```
/// use cicd_sim::models::JobSet;
/// use cicd_sim::scheduling::{Policy, SchedulingEngine};
///
/// let jobs = JobSet::new(vec![0, 1, 2], vec![5, 3, 1]).unwrap();
/// let result = SchedulingEngine::new().run(&jobs, Policy::Srtf).unwrap();
/// assert_eq!(result.completion_times, vec![9, 5, 3]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SchedulingEngine {
    tick_budget: Option<i64>,
}

impl SchedulingEngine {
    /// Creates an engine with the default tick budget.
    pub fn new() -> Self {
        Self::default()
    }

    /// Caps the number of ticks a preemptive run may simulate.
    ///
    /// The default budget is `max_arrival + total_service`, which every
    /// valid input completes within exactly. Exceeding the budget fails
    /// the run with [`SimulationError::TickBudgetExceeded`].
    pub fn with_tick_budget(mut self, ticks: i64) -> Self {
        self.tick_budget = Some(ticks);
        self
    }

    /// Runs `policy` over `jobs`.
    ///
    /// The empty job set is valid for every policy and yields the empty
    /// result.
    pub fn run(&self, jobs: &JobSet, policy: Policy) -> Result<RunResult, SimulationError> {
        if jobs.is_empty() {
            return Ok(RunResult::empty());
        }

        match policy {
            Policy::Fcfs => Ok(self.run_ordered(jobs, &ArrivalOrder)),
            Policy::Sjf => Ok(self.run_ordered(jobs, &ShortestService)),
            Policy::Hrrn => Ok(self.run_ordered(jobs, &HighestResponseRatio)),
            Policy::Srtf => self.run_preemptive(jobs),
        }
    }

    /// Validates raw arrival/service arrays and runs `policy` over them.
    ///
    /// This is the bridge for callers holding unvalidated input (e.g. a
    /// CLI layer): invariant violations surface as
    /// [`SimulationError::InvalidInput`] before any simulation state is
    /// created.
    pub fn run_arrays(
        &self,
        arrivals: &[i64],
        services: &[i64],
        policy: Policy,
    ) -> Result<RunResult, SimulationError> {
        let jobs = JobSet::new(arrivals.to_vec(), services.to_vec())
            .map_err(SimulationError::InvalidInput)?;
        self.run(&jobs, policy)
    }

    /// Non-preemptive path: produce a completion ORDER with the rule, then
    /// derive the timeline with the shared clock walk.
    fn run_ordered(&self, jobs: &JobSet, rule: &dyn SelectionRule) -> RunResult {
        let n = jobs.len();
        let mut pending = vec![true; n];
        let mut order = Vec::with_capacity(n);
        let mut clock = 0i64;

        for _ in 0..n {
            // Fast-forward to the next arrival when nothing is ready.
            let mut next_arrival = i64::MAX;
            for job in jobs.jobs() {
                if pending[job.index] {
                    next_arrival = next_arrival.min(job.arrival);
                }
            }
            clock = clock.max(next_arrival);

            // Best (score, index) among arrived pending jobs; strict `<`
            // keeps the lowest index on exact ties.
            let mut best: Option<(usize, f64)> = None;
            for job in jobs.jobs() {
                if pending[job.index] && job.arrival <= clock {
                    let score = rule.score(job, clock);
                    if best.map_or(true, |(_, s)| score < s) {
                        best = Some((job.index, score));
                    }
                }
            }

            if let Some((index, _)) = best {
                pending[index] = false;
                clock += jobs.services()[index];
                order.push(index);
            }
        }

        debug_assert_eq!(order.len(), n);
        timeline::from_order(jobs, &order)
    }

    /// Preemptive path (SRTF): a unit-tick state machine.
    ///
    /// Every tick re-selects the arrived-and-unfinished job with the least
    /// remaining time (tie: lowest index, with no preference for the job
    /// that ran last tick). A job's start time is recorded the first time
    /// it is ever selected, fixing its response time across later
    /// preemptions.
    fn run_preemptive(&self, jobs: &JobSet) -> Result<RunResult, SimulationError> {
        let n = jobs.len();
        let arrivals = jobs.arrivals();
        let mut remaining = jobs.services().to_vec();
        let mut start_times: Vec<Option<i64>> = vec![None; n];
        let mut completion_times = vec![0i64; n];

        let budget = self
            .tick_budget
            .unwrap_or_else(|| jobs.max_arrival() + jobs.total_service());
        let mut clock = 0i64;
        let mut finished = 0usize;

        while finished < n {
            if clock >= budget {
                return Err(SimulationError::TickBudgetExceeded { budget });
            }

            let mut selected: Option<usize> = None;
            for job in 0..n {
                if remaining[job] > 0
                    && arrivals[job] <= clock
                    && selected.map_or(true, |s| remaining[job] < remaining[s])
                {
                    selected = Some(job);
                }
            }

            match selected {
                Some(job) => {
                    if start_times[job].is_none() {
                        start_times[job] = Some(clock);
                    }
                    remaining[job] -= 1;
                    clock += 1;
                    if remaining[job] == 0 {
                        completion_times[job] = clock;
                        finished += 1;
                    }
                }
                // Idle tick: no job has arrived yet.
                None => clock += 1,
            }
        }

        let start_times = start_times.into_iter().map(|s| s.unwrap_or(0)).collect();
        Ok(RunResult::from_schedule(jobs, start_times, completion_times))
    }
}
