use crate::{
    client::AdoClient,
    collectors::Collector,
    metrics::{
        Agent,
        AgentStats,
        ListResponse,
    },
    GatherError,
};
use eyre::Result;
use std::{
    future::Future,
    pin::Pin,
};
use tracing::debug;

/// Agent utilization of a pool
pub struct AgentCollector {
    client: AdoClient,
    stats: Option<AgentStats>,
}

impl AgentCollector {
    pub fn new(client: AdoClient) -> Self {
        Self { client, stats: None }
    }

    pub fn stats(&self) -> Option<&AgentStats> {
        self.stats.as_ref()
    }

    fn decode(body: &[u8]) -> Result<Vec<Agent>, GatherError> {
        serde_json::from_slice::<ListResponse<Agent>>(body)
            .map(|list| list.value)
            .map_err(|source| GatherError::Decode { what: "agents", source })
    }
}

impl Collector for AgentCollector {
    fn collect<'a>(&'a mut self, pool_id: &'a str) -> Pin<Box<dyn Future<Output = Result<()>> + Send + 'a>> {
        Box::pin(async move {
            self.stats = None;

            let url = self.client.agents_url(pool_id);
            let body = self.client.fetch(&url).await;
            let agents = Self::decode(&body)?;

            let stats = AgentStats::tally(&agents);
            debug!(pool_id, ?stats, "tallied agents");
            self.stats = Some(stats);
            Ok(())
        })
    }

    fn format(&self) -> String {
        self.stats.as_ref().map(AgentStats::to_log_lines).unwrap_or_default()
    }

    fn summary(&self) -> serde_json::Value {
        self.stats
            .as_ref()
            .and_then(|stats| serde_json::to_value(stats).ok())
            .unwrap_or_default()
    }

    fn name(&self) -> &'static str {
        "AgentCollector"
    }
}
