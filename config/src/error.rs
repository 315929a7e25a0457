use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read pools file {path:?}: {source}")]
    PoolsFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Run timestamp {0:?} does not match the expected format: {1}")]
    Timestamp(String, chrono::ParseError),
}
