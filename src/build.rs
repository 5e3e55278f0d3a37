//! Build-strategy estimators.
//!
//! Closed-form what-if models for a multi-service build: given a service
//! count and an average per-service build time, each strategy estimates the
//! total wall-clock time and the speedup/efficiency relative to building
//! everything sequentially.
//!
//! # Reference
//! Amdahl (1967), "Validity of the single processor approach to achieving
//! large scale computing capabilities": speedup = T_seq / T_par,
//! efficiency = speedup / workers.

use serde::Serialize;

/// Estimated outcome of one build strategy.
#[derive(Debug, Clone, Serialize)]
pub struct BuildEstimate {
    /// Display name of the strategy.
    pub strategy: &'static str,
    /// Estimated total build time, in the caller's time unit.
    pub total_time: i64,
    /// Sequential time / total time.
    pub speedup: f64,
    /// Speedup normalized by the parallelism exploited.
    pub efficiency: f64,
}

/// Builds every service one after another. The baseline: speedup and
/// efficiency are 1 by definition.
pub fn sequential(services: usize, avg_time: i64) -> BuildEstimate {
    BuildEstimate {
        strategy: "Sequential Build",
        total_time: services as i64 * avg_time,
        speedup: 1.0,
        efficiency: 1.0,
    }
}

/// Builds all services at once: total time is one service's time, speedup
/// is the service count, efficiency is speedup per service.
pub fn parallel(services: usize, avg_time: i64) -> BuildEstimate {
    let sequential_time = services as i64 * avg_time;
    let total_time = avg_time;
    let speedup = speedup_ratio(sequential_time, total_time);

    BuildEstimate {
        strategy: "Parallel Build",
        total_time,
        speedup,
        efficiency: efficiency_ratio(sequential_time, total_time, services),
    }
}

/// Rebuilds only the changed services at full cost; unchanged services are
/// restored from cache at half the average time (integer halving).
pub fn cached(services: usize, avg_time: i64, changed: usize) -> BuildEstimate {
    let changed = changed.min(services);
    let sequential_time = services as i64 * avg_time;
    let cached_time = (services - changed) as i64 * (avg_time / 2);
    let total_time = changed as i64 * avg_time + cached_time;
    let speedup = speedup_ratio(sequential_time, total_time);

    BuildEstimate {
        strategy: "Cached Build",
        total_time,
        speedup,
        efficiency: speedup,
    }
}

/// Scales the sequential time by a slimming factor modeling smaller images
/// (default 0.7); the product is truncated to whole time units.
pub fn slim_image(services: usize, avg_time: i64, slimming_factor: f64) -> BuildEstimate {
    let sequential_time = services as i64 * avg_time;
    let total_time = (sequential_time as f64 * slimming_factor) as i64;
    let speedup = speedup_ratio(sequential_time, total_time);

    BuildEstimate {
        strategy: "Slim Image Build",
        total_time,
        speedup,
        efficiency: speedup,
    }
}

/// Default slimming factor for [`slim_image`].
pub const DEFAULT_SLIMMING_FACTOR: f64 = 0.7;

fn speedup_ratio(sequential_time: i64, total_time: i64) -> f64 {
    if total_time > 0 {
        sequential_time as f64 / total_time as f64
    } else {
        0.0
    }
}

fn efficiency_ratio(sequential_time: i64, total_time: i64, workers: usize) -> f64 {
    if workers == 0 {
        return 0.0;
    }
    speedup_ratio(sequential_time, total_time) / workers as f64
}
