use clap::Parser;
use std::{
    path::PathBuf,
    time::Duration,
};

/// Azure DevOps agent pool statistics
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Personal access token, sent as the password of HTTP basic auth.
    #[arg(long, env = "ADO_TOKEN", default_value = "", hide_env_values = true)]
    pub token: String,

    /// Organization base URL, e.g. `https://dev.azure.com/my-org`.
    #[arg(long, env = "ADO_URL", default_value = "")]
    pub url: String,

    /// JSON file mapping pool IDs to pool names.
    #[arg(long, value_name = "FILE", default_value = crate::DEFAULT_POOLS_FILE)]
    pub pools_file: PathBuf,

    /// Directory that receives one sub-directory per pool.
    #[arg(long, value_name = "DIR", default_value = "pools")]
    pub output_dir: PathBuf,

    /// Pause after each pool (e.g. "5s", "500ms").
    #[arg(long, value_parser = humantime::parse_duration, default_value = "5s")]
    pub delay: Duration,

    /// Optional path to export a JSON summary of the whole run.
    #[arg(long, value_name = "FILE")]
    pub summary_file: Option<PathBuf>,

    /// Enable debug logging.
    #[arg(short, long)]
    pub verbose: bool,
}
