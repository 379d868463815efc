//! Profile enumeration, first-run bootstrap, and snapshot assembly.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::Serialize;

use crate::error::ConfigResult;
use crate::profile::{defaults, ServerConfig};
use crate::store::ConfigStore;

/// Suffix appended to option names for their defaults annotation.
const DEFAULT_SUFFIX: &str = "_default";

/// Presentation-ready view of every stored profile plus defaults.
///
/// This is the payload handed to the settings template: list values are
/// already flattened to `;`-joined strings, and every default option
/// appears once more under `<key>_default`.
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    /// All profile prefixes, in stored order.
    pub prefixes: Vec<String>,

    /// Directory host per prefix, for the server selector.
    pub hosts: BTreeMap<String, String>,

    /// Flattened option values per prefix.
    pub profiles: BTreeMap<String, BTreeMap<String, String>>,

    /// Defaults annotations: `<key>_default` mapped to the flattened default.
    pub defaults: BTreeMap<String, String>,
}

/// Manages server configuration profiles on top of a [`ConfigStore`].
///
/// Guarantees at least one profile exists before the settings page is
/// assembled, and never mutates profiles outside that bootstrap path.
#[derive(Debug)]
pub struct ProfileManager<S: ConfigStore> {
    store: Arc<S>,
}

impl<S: ConfigStore> Clone for ProfileManager<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: ConfigStore> ProfileManager<S> {
    /// Creates a manager over the given store.
    #[must_use]
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Returns the underlying store.
    #[must_use]
    pub fn store(&self) -> &Arc<S> {
        &self.store
    }

    /// Lists all known profile prefixes in stored order.
    ///
    /// An empty list is only observable before the first bootstrap.
    pub async fn list_profile_prefixes(&self) -> ConfigResult<Vec<String>> {
        self.store.list_prefixes().await
    }

    /// Provisions a defaults-seeded profile if the store holds none.
    ///
    /// Returns the freshly allocated prefix when a profile was durably
    /// created, `None` when profiles already existed. The emptiness check
    /// and the insert are atomic at the store layer, so concurrent first
    /// runs create at most one profile.
    pub async fn bootstrap_if_empty(&self) -> ConfigResult<Option<String>> {
        if !self.store.list_prefixes().await?.is_empty() {
            return Ok(None);
        }

        let prefix = self.store.next_prefix().await?;
        let config = ServerConfig::with_defaults(&prefix);
        if self.store.create_if_empty(&config).await? {
            tracing::info!(prefix = %prefix, "provisioned initial ldap server configuration");
            Ok(Some(prefix))
        } else {
            // Lost the first-run race; the winner's profile is in place.
            Ok(None)
        }
    }

    /// Loads the profile stored under a prefix.
    ///
    /// The reserved empty prefix returns the unsaved defaults template.
    ///
    /// ## Errors
    ///
    /// Returns `ConfigError::NotFound` if the prefix is unknown.
    pub async fn load_profile(&self, prefix: &str) -> ConfigResult<ServerConfig> {
        if prefix.is_empty() {
            return Ok(ServerConfig::with_defaults(""));
        }
        self.store.load(prefix).await
    }

    /// Assembles the presentation snapshot of every profile.
    ///
    /// Bootstraps a defaults profile first if the store is empty; beyond
    /// that the assembly is a pure transformation of stored state.
    pub async fn snapshot(&self) -> ConfigResult<Snapshot> {
        self.bootstrap_if_empty().await?;

        let prefixes = self.store.list_prefixes().await?;
        let mut hosts = BTreeMap::new();
        let mut profiles = BTreeMap::new();
        for prefix in &prefixes {
            let config = self.store.load(prefix).await?;
            hosts.insert(prefix.clone(), config.host());
            profiles.insert(prefix.clone(), config.flattened());
        }

        let defaults = defaults()
            .into_iter()
            .map(|(key, value)| (format!("{key}{DEFAULT_SUFFIX}"), value.flatten()))
            .collect();

        Ok(Snapshot {
            prefixes,
            hosts,
            profiles,
            defaults,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::ConfigValue;
    use crate::store::InMemoryConfigStore;

    fn manager_with(profiles: Vec<ServerConfig>) -> ProfileManager<InMemoryConfigStore> {
        ProfileManager::new(Arc::new(InMemoryConfigStore::with_profiles(profiles)))
    }

    #[tokio::test]
    async fn bootstrap_creates_exactly_one_defaults_profile() {
        let manager = manager_with(vec![]);

        let created = manager.bootstrap_if_empty().await.unwrap();
        assert_eq!(created.as_deref(), Some("s01"));

        let stored = manager.load_profile("s01").await.unwrap();
        assert_eq!(stored.values, defaults());

        // Second call finds a populated store and allocates nothing.
        assert!(manager.bootstrap_if_empty().await.unwrap().is_none());
        assert_eq!(manager.list_profile_prefixes().await.unwrap(), vec!["s01"]);
    }

    #[tokio::test]
    async fn snapshot_does_not_touch_existing_profiles() {
        let mut first = ServerConfig::with_defaults("s01");
        first.set("ldap_host", "ldaps://a.example.com");
        let second = ServerConfig::with_defaults("s02");
        let manager = manager_with(vec![first.clone(), second]);

        let snapshot = manager.snapshot().await.unwrap();
        assert_eq!(snapshot.prefixes, vec!["s01", "s02"]);

        // No new profile, no altered values.
        assert_eq!(manager.load_profile("s01").await.unwrap(), first);
        assert_eq!(
            manager.load_profile("s02").await.unwrap().values,
            defaults()
        );
    }

    #[tokio::test]
    async fn snapshot_flattens_list_values() {
        let mut config = ServerConfig::with_defaults("s01");
        config.set("ldap_user_filter_objectclass", vec!["a", "b", "c"]);
        let manager = manager_with(vec![config]);

        let snapshot = manager.snapshot().await.unwrap();
        let profile = &snapshot.profiles["s01"];
        assert_eq!(profile["ldap_user_filter_objectclass"], "a;b;c");
        // Scalars pass through unchanged.
        assert_eq!(profile["ldap_port"], "389");
    }

    #[tokio::test]
    async fn snapshot_annotates_every_default() {
        let manager = manager_with(vec![
            ServerConfig::with_defaults("s01"),
            ServerConfig::with_defaults("s02"),
        ]);

        let snapshot = manager.snapshot().await.unwrap();
        for (key, value) in defaults() {
            let annotated = snapshot.defaults.get(&format!("{key}_default"));
            assert_eq!(annotated, Some(&value.flatten()), "missing default for {key}");
        }
        assert_eq!(snapshot.defaults.len(), defaults().len());
    }

    #[tokio::test]
    async fn snapshot_collects_hosts_by_prefix() {
        let mut config = ServerConfig::with_defaults("s01");
        config.set("ldap_host", "ldaps://dir.example.com");
        let manager = manager_with(vec![config]);

        let snapshot = manager.snapshot().await.unwrap();
        assert_eq!(
            snapshot.hosts.get("s01").map(String::as_str),
            Some("ldaps://dir.example.com")
        );
    }

    #[tokio::test]
    async fn empty_prefix_loads_unsaved_defaults_template() {
        let manager = manager_with(vec![]);

        let template = manager.load_profile("").await.unwrap();
        assert_eq!(template.prefix, "");
        assert_eq!(template.values, defaults());

        // Loading the template persists nothing.
        assert!(manager.list_profile_prefixes().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn unknown_prefix_propagates_not_found() {
        let manager = manager_with(vec![ServerConfig::with_defaults("s01")]);
        let err = manager.load_profile("s42").await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn values_outside_defaults_flatten_too() {
        let mut config = ServerConfig::with_defaults("s01");
        config.set(
            "ldap_experienced_admin",
            ConfigValue::from("1"),
        );
        let manager = manager_with(vec![config]);

        let snapshot = manager.snapshot().await.unwrap();
        assert_eq!(snapshot.profiles["s01"]["ldap_experienced_admin"], "1");
        // But only declared defaults are annotated.
        assert!(!snapshot.defaults.contains_key("ldap_experienced_admin_default"));
    }
}
