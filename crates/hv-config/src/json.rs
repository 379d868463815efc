//! JSON-file configuration store backend.

use std::fs;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};
use crate::profile::ServerConfig;
use crate::store::{allocate_prefix, ConfigStore};

/// On-disk document holding every profile.
#[derive(Debug, Default, Serialize, Deserialize)]
struct Document {
    profiles: Vec<ServerConfig>,
}

/// Configuration store backed by a single JSON file.
///
/// The whole document is reread per operation and rewritten through a
/// temp-file rename, so a crashed write never leaves a torn file behind.
/// A process-local lock serializes read-modify-write sequences, which is
/// what gives `create_if_empty` its atomicity.
#[derive(Debug)]
pub struct JsonFileConfigStore {
    path: PathBuf,
    write_guard: Mutex<()>,
}

impl JsonFileConfigStore {
    /// Creates a store backed by the given file path.
    ///
    /// The file is created on first write; a missing file reads as an
    /// empty store.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_guard: Mutex::new(()),
        }
    }

    /// Returns the backing file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_document(&self) -> ConfigResult<Document> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => Ok(serde_json::from_str(&contents)?),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Document::default()),
            Err(err) => Err(err.into()),
        }
    }

    fn write_document(&self, document: &Document) -> ConfigResult<()> {
        let contents = serde_json::to_string_pretty(document)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, contents)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

#[async_trait]
impl ConfigStore for JsonFileConfigStore {
    async fn list_prefixes(&self) -> ConfigResult<Vec<String>> {
        let document = self.read_document()?;
        Ok(document
            .profiles
            .into_iter()
            .map(|config| config.prefix)
            .collect())
    }

    async fn load(&self, prefix: &str) -> ConfigResult<ServerConfig> {
        let document = self.read_document()?;
        document
            .profiles
            .into_iter()
            .find(|config| config.prefix == prefix)
            .ok_or_else(|| ConfigError::not_found(prefix))
    }

    async fn save(&self, config: &ServerConfig) -> ConfigResult<()> {
        if config.prefix.is_empty() {
            return Err(ConfigError::InvalidPrefix(
                "the empty prefix is reserved for the defaults template".to_string(),
            ));
        }

        let _guard = self.write_guard.lock();
        let mut document = self.read_document()?;
        match document
            .profiles
            .iter_mut()
            .find(|p| p.prefix == config.prefix)
        {
            Some(existing) => *existing = config.clone(),
            None => document.profiles.push(config.clone()),
        }
        self.write_document(&document)
    }

    async fn next_prefix(&self) -> ConfigResult<String> {
        let document = self.read_document()?;
        let prefixes: Vec<String> = document
            .profiles
            .into_iter()
            .map(|config| config.prefix)
            .collect();
        Ok(allocate_prefix(&prefixes))
    }

    async fn create_if_empty(&self, config: &ServerConfig) -> ConfigResult<bool> {
        if config.prefix.is_empty() {
            return Err(ConfigError::InvalidPrefix(
                "the empty prefix is reserved for the defaults template".to_string(),
            ));
        }

        let _guard = self.write_guard.lock();
        let mut document = self.read_document()?;
        if !document.profiles.is_empty() {
            return Ok(false);
        }
        document.profiles.push(config.clone());
        self.write_document(&document)?;
        Ok(true)
    }
}
