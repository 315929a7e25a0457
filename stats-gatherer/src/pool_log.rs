use crate::GatherError;
use pool_stats_config::RunContext;
use std::path::PathBuf;
use tokio::{
    fs::File,
    io::AsyncWriteExt as _,
};
use tracing::warn;

/// The log file of one pool for the current run.
///
/// Lives for exactly one pool iteration; [`PoolLog::close`] flushes it.
pub struct PoolLog {
    file: File,
    path: PathBuf,
}

impl PoolLog {
    /// Creates `<output_dir>/<pool_name>/` if needed and truncates or creates
    /// the run's log file inside it.
    pub async fn create(ctx: &RunContext, pool_name: &str) -> Result<Self, GatherError> {
        let dir = ctx.pool_dir(pool_name);
        tokio::fs::create_dir_all(&dir)
            .await
            .map_err(|source| GatherError::CreateDir { path: dir, source })?;

        let path = ctx.log_path(pool_name);
        let file = File::create(&path).await.map_err(|source| GatherError::CreateLog {
            path: path.clone(),
            source,
        })?;

        Ok(Self { file, path })
    }

    /// Write failures are logged, not propagated.
    pub async fn append(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        if let Err(err) = self.file.write_all(text.as_bytes()).await {
            warn!(path = ?self.path, %err, "failed to append to pool log");
        }
    }

    pub async fn close(mut self) -> PathBuf {
        if let Err(err) = self.file.flush().await {
            warn!(path = ?self.path, %err, "failed to flush pool log");
        }
        self.path
    }
}
