//! CI/CD performance estimation toolkit.
//!
//! Estimates three abstracted CI/CD concerns by running closed-form or
//! simulated models over synthetic workloads: build parallelization,
//! request load-balancing, and job scheduling. It is a what-if calculator,
//! not an orchestrator — no real builds, traffic, or processes.
//!
//! # Modules
//!
//! - **`models`**: Scheduling domain types — [`JobSet`](models::JobSet),
//!   [`RunResult`](models::RunResult)
//! - **`scheduling`**: The simulation core — FCFS, SJF, SRTF, and HRRN
//!   policies driven by a [`SchedulingEngine`](scheduling::SchedulingEngine)
//! - **`build`**: Closed-form build-strategy estimators
//! - **`balancing`**: Classic and adaptive load-balancing heuristics
//! - **`report`**: Append-only CSV result log
//! - **`validation`**: Input integrity checks for scheduling runs
//!
//! # Architecture
//!
//! Data flows strictly downward: callers construct validated inputs, run
//! one phase, and hand the result to the report layer. Every run is a pure
//! function of its inputs — stochastic strategies take their RNG as an
//! argument, and there is no global state.
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5

pub mod balancing;
pub mod build;
pub mod models;
pub mod report;
pub mod scheduling;
pub mod validation;
