#[macro_use]
extern crate tracing;

mod args;
mod error;
mod pools;
mod run_context;

pub use args::Args;
pub use error::ConfigError;
pub use pools::{
    Pools,
    DEFAULT_POOLS_FILE,
};
pub use run_context::{
    RunContext,
    RunTimestamp,
    RUN_TIMESTAMP_FORMAT,
};
