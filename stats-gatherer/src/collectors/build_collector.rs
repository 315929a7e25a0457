use crate::{
    client::AdoClient,
    collectors::Collector,
    metrics::{
        BuildStats,
        JobRequest,
        ListResponse,
        WithRaw,
    },
    GatherError,
};
use chrono::Utc;
use eyre::Result;
use std::{
    future::Future,
    pin::Pin,
};
use tracing::debug;

/// Queued and running builds of a pool
pub struct BuildCollector {
    client: AdoClient,
    stats: Option<BuildStats>,
}

impl BuildCollector {
    pub fn new(client: AdoClient) -> Self {
        Self { client, stats: None }
    }

    pub fn stats(&self) -> Option<&BuildStats> {
        self.stats.as_ref()
    }

    fn decode(body: &[u8]) -> Result<Vec<WithRaw<JobRequest>>, GatherError> {
        serde_json::from_slice::<ListResponse<WithRaw<JobRequest>>>(body)
            .map(|list| list.value)
            .map_err(|source| GatherError::Decode {
                what: "job requests",
                source,
            })
    }
}

impl Collector for BuildCollector {
    fn collect<'a>(&'a mut self, pool_id: &'a str) -> Pin<Box<dyn Future<Output = Result<()>> + Send + 'a>> {
        Box::pin(async move {
            self.stats = None;

            let url = self.client.job_requests_url(pool_id);
            let body = self.client.fetch(&url).await;
            let requests = Self::decode(&body)?;

            let stats = BuildStats::tally(&requests, Utc::now());
            debug!(
                pool_id,
                queued = stats.builds_in_the_queue,
                running = stats.builds_running,
                "tallied job requests"
            );
            self.stats = Some(stats);
            Ok(())
        })
    }

    fn format(&self) -> String {
        self.stats.as_ref().map(BuildStats::to_log_lines).unwrap_or_default()
    }

    fn summary(&self) -> serde_json::Value {
        self.stats
            .as_ref()
            .and_then(|stats| serde_json::to_value(stats).ok())
            .unwrap_or_default()
    }

    fn name(&self) -> &'static str {
        "BuildCollector"
    }
}
