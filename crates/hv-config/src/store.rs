//! Configuration store contract and the in-memory backend.

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::error::{ConfigError, ConfigResult};
use crate::profile::ServerConfig;

/// Persistence contract for server configuration profiles.
///
/// Implementations must be thread-safe. Profiles are keyed by prefix and
/// returned in stored order.
#[async_trait]
pub trait ConfigStore: Send + Sync {
    /// Lists all known profile prefixes in stored order.
    async fn list_prefixes(&self) -> ConfigResult<Vec<String>>;

    /// Loads the profile stored under a prefix.
    ///
    /// ## Errors
    ///
    /// Returns `ConfigError::NotFound` if the prefix is unknown.
    async fn load(&self, prefix: &str) -> ConfigResult<ServerConfig>;

    /// Saves a profile, inserting or replacing by prefix.
    ///
    /// ## Errors
    ///
    /// Returns `ConfigError::InvalidPrefix` for the reserved empty prefix.
    async fn save(&self, config: &ServerConfig) -> ConfigResult<()>;

    /// Allocates the next free profile prefix (`s01`, `s02`, ...).
    ///
    /// Allocation is monotonic over the prefixes currently stored, so a
    /// returned prefix never collides with an existing profile.
    async fn next_prefix(&self) -> ConfigResult<String>;

    /// Persists the profile only if the store currently holds zero profiles.
    ///
    /// The emptiness check and the insert happen atomically, so two
    /// concurrent first-run bootstraps cannot both create a profile.
    /// Returns whether the profile was created.
    async fn create_if_empty(&self, config: &ServerConfig) -> ConfigResult<bool>;
}

/// Allocates the next prefix given the prefixes already in use.
pub(crate) fn allocate_prefix(existing: &[String]) -> String {
    let highest = existing
        .iter()
        .filter_map(|prefix| prefix.strip_prefix('s'))
        .filter_map(|digits| digits.parse::<u32>().ok())
        .max()
        .unwrap_or(0);
    format!("s{:02}", highest + 1)
}

/// In-memory configuration store.
///
/// Keeps profiles in insertion order behind a single lock; the primary
/// backend for tests and a reference for the `create_if_empty` semantics.
#[derive(Debug, Default)]
pub struct InMemoryConfigStore {
    profiles: RwLock<Vec<ServerConfig>>,
}

impl InMemoryConfigStore {
    /// Creates a new empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with the given profiles.
    #[must_use]
    pub fn with_profiles(profiles: Vec<ServerConfig>) -> Self {
        Self {
            profiles: RwLock::new(profiles),
        }
    }
}

#[async_trait]
impl ConfigStore for InMemoryConfigStore {
    async fn list_prefixes(&self) -> ConfigResult<Vec<String>> {
        Ok(self
            .profiles
            .read()
            .iter()
            .map(|config| config.prefix.clone())
            .collect())
    }

    async fn load(&self, prefix: &str) -> ConfigResult<ServerConfig> {
        self.profiles
            .read()
            .iter()
            .find(|config| config.prefix == prefix)
            .cloned()
            .ok_or_else(|| ConfigError::not_found(prefix))
    }

    async fn save(&self, config: &ServerConfig) -> ConfigResult<()> {
        if config.prefix.is_empty() {
            return Err(ConfigError::InvalidPrefix(
                "the empty prefix is reserved for the defaults template".to_string(),
            ));
        }

        let mut profiles = self.profiles.write();
        match profiles.iter_mut().find(|p| p.prefix == config.prefix) {
            Some(existing) => *existing = config.clone(),
            None => profiles.push(config.clone()),
        }
        Ok(())
    }

    async fn next_prefix(&self) -> ConfigResult<String> {
        let prefixes: Vec<String> = self
            .profiles
            .read()
            .iter()
            .map(|config| config.prefix.clone())
            .collect();
        Ok(allocate_prefix(&prefixes))
    }

    async fn create_if_empty(&self, config: &ServerConfig) -> ConfigResult<bool> {
        if config.prefix.is_empty() {
            return Err(ConfigError::InvalidPrefix(
                "the empty prefix is reserved for the defaults template".to_string(),
            ));
        }

        let mut profiles = self.profiles.write();
        if profiles.is_empty() {
            profiles.push(config.clone());
            Ok(true)
        } else {
            Ok(false)
        }
    }
}
