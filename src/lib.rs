#[macro_use]
extern crate tracing;

mod logging;

pub use logging::init_logging;

use color_eyre::Result;
use pool_stats_config::{
    Args,
    Pools,
    RunContext,
};
use pool_stats_gatherer::Orchestrator;

pub fn init_errors() -> Result<()> {
    color_eyre::install()
}

/// Loads the pools file and processes every pool once.
pub async fn run(args: Args) -> Result<()> {
    let ctx = RunContext::new(&args);
    debug!(?ctx, "run context");

    let pools = Pools::load(&args.pools_file)?;
    if pools.is_empty() {
        warn!(pools_file = ?args.pools_file, "no pools configured");
    }

    let summary = Orchestrator::new(&ctx).run(&pools).await?;

    if let Some(summary_file) = &ctx.summary_file {
        summary.export(summary_file).await?;
        info!(?summary_file, "run summary exported");
    }

    Ok(())
}
