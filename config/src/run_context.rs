use crate::{
    Args,
    ConfigError,
};
use chrono::{
    Local,
    NaiveDateTime,
    Timelike as _,
};
use std::{
    fmt,
    path::PathBuf,
    str::FromStr,
    time::Duration,
};

/// File name format of every per-pool log written during one run.
pub const RUN_TIMESTAMP_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";

/// Local wall-clock time captured once when the run starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RunTimestamp(NaiveDateTime);

impl RunTimestamp {
    pub fn now() -> Self {
        Self::from(Local::now().naive_local())
    }
}

impl From<NaiveDateTime> for RunTimestamp {
    /// Sub-second precision is dropped since the file name cannot carry it.
    fn from(value: NaiveDateTime) -> Self {
        Self(value.with_nanosecond(0).unwrap_or(value))
    }
}

impl fmt::Display for RunTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(RUN_TIMESTAMP_FORMAT))
    }
}

impl FromStr for RunTimestamp {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDateTime::parse_from_str(s, RUN_TIMESTAMP_FORMAT)
            .map(Self)
            .map_err(|err| ConfigError::Timestamp(s.to_string(), err))
    }
}

/// Everything a run needs, frozen at startup and shared by reference.
#[derive(Clone)]
pub struct RunContext {
    pub base_url: String,
    pub token: String,
    pub output_dir: PathBuf,
    pub delay: Duration,
    pub summary_file: Option<PathBuf>,
    pub timestamp: RunTimestamp,
}

impl RunContext {
    pub fn new(args: &Args) -> Self {
        Self {
            base_url: args.url.clone(),
            token: args.token.clone(),
            output_dir: args.output_dir.clone(),
            delay: args.delay,
            summary_file: args.summary_file.clone(),
            timestamp: RunTimestamp::now(),
        }
    }

    pub fn with_timestamp(mut self, timestamp: RunTimestamp) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// `<output_dir>/<pool_name>`
    ///
    /// Leading separators are stripped so the pool directory never leaves
    /// `output_dir`.
    pub fn pool_dir(&self, pool_name: &str) -> PathBuf {
        self.output_dir.join(pool_name.trim_start_matches(std::path::is_separator))
    }

    /// `<output_dir>/<pool_name>/<timestamp>`
    pub fn log_path(&self, pool_name: &str) -> PathBuf {
        self.pool_dir(pool_name).join(self.timestamp.to_string())
    }
}

impl fmt::Debug for RunContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RunContext")
            .field("base_url", &self.base_url)
            .field("token", &if self.token.is_empty() { "<empty>" } else { "<redacted>" })
            .field("output_dir", &self.output_dir)
            .field("delay", &self.delay)
            .field("summary_file", &self.summary_file)
            .field("timestamp", &self.timestamp)
            .finish()
    }
}
