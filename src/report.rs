//! Flat CSV result log.
//!
//! Every simulation phase appends one row to a shared results file; columns
//! that do not apply to a phase stay empty. The log is append-only and is
//! the simulator's only persistence.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::balancing::LoadMetrics;
use crate::build::BuildEstimate;
use crate::models::RunResult;
use crate::scheduling::Policy;

/// One row of the results log.
///
/// The column set is the union of all three phases; constructors fill the
/// columns their phase produces and leave the rest empty.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ResultRow {
    /// Phase token: `Build`, `LoadBalancing`, or `Scheduling`.
    pub phase: String,
    pub strategy: Option<String>,
    pub algorithm: Option<String>,
    pub total_time: Option<i64>,
    pub speedup: Option<f64>,
    pub efficiency: Option<f64>,
    pub avg_load: Option<f64>,
    pub max_load: Option<u64>,
    pub min_load: Option<u64>,
    pub variance: Option<f64>,
    pub fairness_index: Option<f64>,
    pub load_imbalance: Option<u64>,
    pub avg_waiting: Option<f64>,
    pub avg_turnaround: Option<f64>,
    pub avg_response: Option<f64>,
}

impl ResultRow {
    /// Row for a build-phase estimate.
    pub fn build(estimate: &BuildEstimate) -> Self {
        Self {
            phase: "Build".into(),
            strategy: Some(estimate.strategy.into()),
            total_time: Some(estimate.total_time),
            speedup: Some(estimate.speedup),
            efficiency: Some(estimate.efficiency),
            ..Self::default()
        }
    }

    /// Row for a load-balancing run.
    pub fn load_balancing(metrics: &LoadMetrics) -> Self {
        Self {
            phase: "LoadBalancing".into(),
            algorithm: Some(metrics.algorithm.into()),
            avg_load: Some(metrics.average_load),
            max_load: Some(metrics.max_load),
            min_load: Some(metrics.min_load),
            variance: Some(metrics.variance),
            fairness_index: Some(metrics.fairness_index),
            load_imbalance: Some(metrics.load_imbalance),
            ..Self::default()
        }
    }

    /// Row for a scheduling run: the policy name and the three means.
    pub fn scheduling(policy: Policy, result: &RunResult) -> Self {
        Self {
            phase: "Scheduling".into(),
            algorithm: Some(policy.name().into()),
            avg_waiting: Some(result.avg_waiting),
            avg_turnaround: Some(result.avg_turnaround),
            avg_response: Some(result.avg_response),
            ..Self::default()
        }
    }
}

/// Append-only CSV log of simulation results.
///
/// The header is written once, when the file is first created; later
/// appends add rows only, so one file accumulates results across runs.
#[derive(Debug, Clone)]
pub struct ResultLog {
    path: PathBuf,
}

impl ResultLog {
    /// Creates a log handle for `path`. Nothing is written until the first
    /// append.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The log's file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends one row, creating the file (and parent directories) with a
    /// header on first use.
    pub fn append(&self, row: &ResultRow) -> Result<(), csv::Error> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let write_header = !self.path.exists();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        let mut writer = csv::WriterBuilder::new()
            .has_headers(write_header)
            .from_writer(file);
        writer.serialize(row)?;
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::balancing::classic;
    use crate::models::JobSet;
    use crate::scheduling::SchedulingEngine;

    fn temp_log(name: &str) -> ResultLog {
        let path = std::env::temp_dir().join(format!("cicd-sim-{}-{}.csv", name, std::process::id()));
        let _ = std::fs::remove_file(&path);
        ResultLog::new(path)
    }

    #[test]
    fn test_header_written_once() {
        let log = temp_log("header");
        let estimate = crate::build::sequential(3, 5);

        log.append(&ResultRow::build(&estimate)).unwrap();
        log.append(&ResultRow::build(&estimate)).unwrap();

        let contents = std::fs::read_to_string(log.path()).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("phase,strategy,algorithm,total_time"));
        assert!(lines[1].starts_with("Build,Sequential Build,"));

        std::fs::remove_file(log.path()).unwrap();
    }

    #[test]
    fn test_scheduling_row_fields() {
        let jobs = JobSet::new(vec![0, 1, 2], vec![5, 3, 8]).unwrap();
        let result = SchedulingEngine::new().run(&jobs, Policy::Fcfs).unwrap();
        let row = ResultRow::scheduling(Policy::Fcfs, &result);

        assert_eq!(row.phase, "Scheduling");
        assert_eq!(row.algorithm.as_deref(), Some("FCFS"));
        assert!(row.avg_waiting.is_some());
        assert!(row.strategy.is_none());
        assert!(row.total_time.is_none());
    }

    #[test]
    fn test_load_balancing_row_round_trip() {
        let log = temp_log("lb");
        let metrics = classic::round_robin(10, 3);

        log.append(&ResultRow::load_balancing(&metrics)).unwrap();

        let contents = std::fs::read_to_string(log.path()).unwrap();
        let data_line = contents.lines().nth(1).unwrap();
        assert!(data_line.starts_with("LoadBalancing,,Round Robin,"));
        // Build-phase columns are empty for this phase.
        let fields: Vec<&str> = data_line.split(',').collect();
        assert_eq!(fields[3], ""); // total_time
        assert_eq!(fields[6], "3.3333333333333335"); // avg_load

        std::fs::remove_file(log.path()).unwrap();
    }
}
