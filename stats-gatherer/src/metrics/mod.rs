pub mod agent_data;
pub mod job_request_data;
pub mod shared;

pub use agent_data::*;
pub use job_request_data::*;
pub use shared::{
    ListResponse,
    WithRaw,
};

use eyre::{
    Context as _,
    Result,
};
use serde::Serialize;
use std::path::{
    Path,
    PathBuf,
};

/// Outcome of one pool. `agents` and `builds` are `null` when the matching
/// collector produced nothing.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PoolSummary {
    pub pool_id: String,
    pub pool_name: String,
    pub log_file: PathBuf,
    pub agents: serde_json::Value,
    pub builds: serde_json::Value,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunSummary {
    pub run_timestamp: String,
    pub pools: Vec<PoolSummary>,
}

impl RunSummary {
    pub fn new(run_timestamp: String) -> Self {
        Self {
            run_timestamp,
            pools: Vec::new(),
        }
    }

    pub async fn export(&self, path: &Path) -> Result<()> {
        let json_string = serde_json::to_string_pretty(self)?;
        tokio::fs::write(path, json_string)
            .await
            .wrap_err_with(|| format!("Failed to write run summary to {path:?}"))
    }
}
