use eyre::Result;
use std::{
    future::Future,
    pin::Pin,
};

/// Trait for collecting and formatting the data of one pool
pub trait Collector {
    /// Fetch and tally the data of `pool_id`, replacing whatever the previous
    /// pool left behind. On error the collector holds no data.
    fn collect<'a>(&'a mut self, pool_id: &'a str) -> Pin<Box<dyn Future<Output = Result<()>> + Send + 'a>>;

    /// Lines for the pool log; empty when nothing was collected
    fn format(&self) -> String;

    /// Get data summary as JSON
    fn summary(&self) -> serde_json::Value;

    /// Get the name of this collector
    fn name(&self) -> &'static str;
}
