use ado_pool_stats::{
    init_errors,
    init_logging,
    run,
};
use clap::Parser;
use color_eyre::Result;
use pool_stats_config::Args;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_errors()?;
    init_logging(args.verbose)?;
    run(args).await
}
