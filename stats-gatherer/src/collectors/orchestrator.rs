use crate::{
    client::AdoClient,
    collectors::{
        AgentCollector,
        BuildCollector,
        Collector,
    },
    metrics::{
        PoolSummary,
        RunSummary,
    },
    pool_log::PoolLog,
};
use eyre::Result;
use pool_stats_config::{
    Pools,
    RunContext,
};
use tracing::{
    info,
    warn,
};

/// Walks the configured pools one at a time, writing one log file per pool.
pub struct Orchestrator<'a> {
    ctx: &'a RunContext,
    agent_collector: AgentCollector,
    build_collector: BuildCollector,
}

impl<'a> Orchestrator<'a> {
    pub fn new(ctx: &'a RunContext) -> Self {
        Self::with_client(ctx, AdoClient::new(ctx))
    }

    /// Both collectors share one client and thereby one connection pool.
    pub fn with_client(ctx: &'a RunContext, client: AdoClient) -> Self {
        Self {
            ctx,
            agent_collector: AgentCollector::new(client.clone()),
            build_collector: BuildCollector::new(client),
        }
    }

    /// Processes every pool in order and pauses for the configured delay after
    /// each one.
    ///
    /// # Errors
    /// Only a pool directory or log file that cannot be created aborts the run.
    /// Fetch and decode problems leave the affected section out of that pool's
    /// log.
    pub async fn run(&mut self, pools: &Pools) -> Result<RunSummary> {
        let mut summary = RunSummary::new(self.ctx.timestamp.to_string());
        info!(pools = pools.len(), timestamp = %self.ctx.timestamp, "starting run");

        for (pool_id, pool_name) in pools.iter() {
            info!(pool_id, pool_name, "Checking pool");
            summary.pools.push(self.process_pool(pool_id, pool_name).await?);
            tokio::time::sleep(self.ctx.delay).await;
        }

        info!(pools = summary.pools.len(), "run finished");
        Ok(summary)
    }

    async fn process_pool(&mut self, pool_id: &str, pool_name: &str) -> Result<PoolSummary> {
        let mut log = PoolLog::create(self.ctx, pool_name).await?;
        log.append(&format!("Pool: {pool_name}\n")).await;

        for collector in [
            &mut self.agent_collector as &mut (dyn Collector + Send),
            &mut self.build_collector,
        ] {
            if let Err(err) = collector.collect(pool_id).await {
                warn!(pool_id, pool_name, collector = collector.name(), "{err:#}");
            }
            log.append(&collector.format()).await;
        }

        Ok(PoolSummary {
            pool_id: pool_id.to_string(),
            pool_name: pool_name.to_string(),
            log_file: log.close().await,
            agents: self.agent_collector.summary(),
            builds: self.build_collector.summary(),
        })
    }
}
