//! # Collectors Module
//!
//! Per-pool data collection for the stats gatherer.
//!
//! - **`Collector` trait**: interface shared by all collectors
//! - **`AgentCollector`**: agent counts and utilization of a pool
//! - **`BuildCollector`**: queued and running job requests of a pool
//! - **`Orchestrator`**: walks the configured pools and writes each pool's log file

pub mod agent_collector;
pub mod build_collector;
pub mod collector;
pub mod orchestrator;

pub use agent_collector::AgentCollector;
pub use build_collector::BuildCollector;
pub use collector::Collector;
pub use orchestrator::Orchestrator;
