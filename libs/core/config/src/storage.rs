use std::path::PathBuf;

use crate::{env_or_default, ConfigError, FromEnv};

/// Storage configuration: where the collection files live
#[derive(Clone, Debug)]
pub struct StorageConfig {
    pub data_dir: PathBuf,
}

impl StorageConfig {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }
}

impl FromEnv for StorageConfig {
    /// Reads HUB_DATA_DIR, defaulting to ./data
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            data_dir: PathBuf::from(env_or_default("HUB_DATA_DIR", "./data")),
        })
    }
}
