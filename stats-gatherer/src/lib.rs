//! # Azure DevOps Pool Stats Gatherer
//!
//! Polls the distributed task API of an Azure DevOps organization for a set of
//! agent pools and appends a plain-text report per pool to
//! `<output_dir>/<pool name>/<run timestamp>`.
//!
//! ## Architecture
//!
//! - **`client`**: authenticated GET requests that never fail the caller
//! - **`metrics`**: typed API records and the counters derived from them
//! - **`collectors`**: agent and build collectors plus the `Orchestrator`
//! - **`pool_log`**: the per-pool log file, scoped to one pool iteration
//!
//! A pool log looks like this:
//!
//! ```text
//! Pool: Linux
//! totalAgents: 10
//! activeAgents: 4
//! idleAgents: 6
//! enabledAgents: 6
//! disabledAgents: 4
//! onlineAgents: 9
//! offlineAgents: 1
//! agentUtilization: 66.66666666666666
//! Build: CI #42 - in the queue for 1m 30s. Full build data: {...}
//! Builds in the queue: 1
//! ```

pub mod client;
pub mod collectors;
mod error;
pub mod metrics;
pub mod pool_log;

pub use client::AdoClient;
pub use collectors::*;
pub use error::GatherError;
pub use metrics::*;
pub use pool_log::PoolLog;
