//! Job-scheduling simulation.
//!
//! Four CPU-scheduling-style policies applied to a [`JobSet`]: FCFS, SJF,
//! SRTF, and HRRN. The engine drives simulated time forward, maintains the
//! ready set, and reconstructs the per-job timeline into a [`RunResult`].
//!
//! # Usage
//!
//! ```
//! use cicd_sim::models::JobSet;
//! use cicd_sim::scheduling::{Policy, SchedulingEngine};
//!
//! let jobs = JobSet::new(vec![0, 1, 2], vec![5, 3, 8]).unwrap();
//! let result = SchedulingEngine::new().run(&jobs, Policy::Fcfs).unwrap();
//! assert_eq!(result.makespan(), 16);
//! ```
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 3
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5

mod engine;
mod rules;
mod timeline;

pub use engine::SchedulingEngine;
pub use rules::{ArrivalOrder, HighestResponseRatio, SelectionRule, ShortestService};

use crate::validation::ValidationError;

/// The scheduling policy applied to a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Policy {
    /// First-come-first-served: jobs run in arrival order.
    Fcfs,
    /// Shortest-job-first: among arrived jobs, shortest service time next.
    Sjf,
    /// Shortest-remaining-time-first: preemptive SJF, re-decided every tick.
    Srtf,
    /// Highest-response-ratio-next: normalized "how overdue" ordering.
    Hrrn,
}

impl Policy {
    /// All policies, in menu order.
    pub const ALL: [Policy; 4] = [Policy::Fcfs, Policy::Sjf, Policy::Srtf, Policy::Hrrn];

    /// Canonical uppercase token, as recorded in the result log.
    pub fn name(&self) -> &'static str {
        match self {
            Policy::Fcfs => "FCFS",
            Policy::Sjf => "SJF",
            Policy::Srtf => "SRTF",
            Policy::Hrrn => "HRRN",
        }
    }

    /// Whether the policy may interrupt a running job.
    pub fn is_preemptive(&self) -> bool {
        matches!(self, Policy::Srtf)
    }
}

impl std::fmt::Display for Policy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Policy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "FCFS" => Ok(Policy::Fcfs),
            "SJF" => Ok(Policy::Sjf),
            "SRTF" => Ok(Policy::Srtf),
            "HRRN" => Ok(Policy::Hrrn),
            other => Err(format!("Unknown scheduling policy: {other}")),
        }
    }
}

/// Why a scheduling run failed.
#[derive(Debug, Clone, PartialEq)]
pub enum SimulationError {
    /// The input arrays violate the job-set invariants.
    InvalidInput(Vec<ValidationError>),
    /// The preemptive simulation exceeded its configured tick budget.
    ///
    /// Signals a pathological configuration rather than an algorithm bug;
    /// the run is reported as failed instead of looping unboundedly.
    TickBudgetExceeded {
        /// The budget that was exhausted.
        budget: i64,
    },
}

impl std::fmt::Display for SimulationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SimulationError::InvalidInput(errors) => {
                write!(f, "invalid job set: ")?;
                for (i, e) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, "; ")?;
                    }
                    write!(f, "{e}")?;
                }
                Ok(())
            }
            SimulationError::TickBudgetExceeded { budget } => {
                write!(f, "simulation exceeded tick budget of {budget}")
            }
        }
    }
}

impl std::error::Error for SimulationError {}
