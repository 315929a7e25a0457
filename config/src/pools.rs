use crate::ConfigError;
use std::{
    collections::BTreeMap,
    path::Path,
};

pub const DEFAULT_POOLS_FILE: &str = "pools.json";

/// Pool ID to pool display name, read once per run.
///
/// Backed by an ordered map so pools are always processed in ascending ID
/// order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pools(BTreeMap<String, String>);

impl Pools {
    /// Reads the pools file.
    ///
    /// # Errors
    /// Fails only when the file cannot be read. Content that is not a JSON
    /// object of strings is logged and yields an empty set of pools.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::PoolsFile {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::parse(&content))
    }

    pub fn parse(content: &str) -> Self {
        match serde_json::from_str::<BTreeMap<String, String>>(content) {
            Ok(pools) => Self(pools),
            Err(err) => {
                warn!(%err, "pools file is not a JSON object of strings; no pools will be processed");
                Self::default()
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(id, name)| (id.as_str(), name.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, String)> for Pools {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
