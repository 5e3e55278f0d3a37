//! Request load-balancing heuristics.
//!
//! Distributes a batch of synthetic requests across service instances and
//! reports distribution statistics. Two families:
//!
//! - **Classic** ([`classic`]): round robin, least connections, random.
//! - **Adaptive** ([`adaptive`]): genetic, resource-based, reinforcement,
//!   IoT-signal, and transfer-learning variants. These are illustrative
//!   heuristics for what-if comparisons, not validated ML.
//!
//! Every strategy is a bounded assignment loop over an explicit request
//! count; stochastic strategies take the RNG as an argument so a seeded
//! generator makes them reproducible.

pub mod adaptive;
pub mod classic;
mod metrics;

pub use metrics::LoadMetrics;
