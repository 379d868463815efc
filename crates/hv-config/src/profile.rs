//! Server configuration profiles and option defaults.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Separator used when flattening list values for presentation.
///
/// A `;` inside a list element is misrepresented after flattening; the
/// option set below never produces one, but external writers could.
const LIST_SEPARATOR: &str = ";";

/// A single configuration option value.
///
/// Options are stored as strings or ordered lists of strings, matching
/// the key-value backend underneath.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConfigValue {
    /// A single string value.
    Scalar(String),
    /// An ordered list of string values.
    List(Vec<String>),
}

impl ConfigValue {
    /// Flattens the value to a single display string.
    ///
    /// Lists are joined with `;`; scalars pass through unchanged.
    #[must_use]
    pub fn flatten(&self) -> String {
        match self {
            Self::Scalar(value) => value.clone(),
            Self::List(values) => values.join(LIST_SEPARATOR),
        }
    }

    /// Returns whether this value is a list.
    #[must_use]
    pub const fn is_list(&self) -> bool {
        matches!(self, Self::List(_))
    }
}

impl From<&str> for ConfigValue {
    fn from(value: &str) -> Self {
        Self::Scalar(value.to_string())
    }
}

impl From<String> for ConfigValue {
    fn from(value: String) -> Self {
        Self::Scalar(value)
    }
}

impl From<Vec<String>> for ConfigValue {
    fn from(values: Vec<String>) -> Self {
        Self::List(values)
    }
}

impl From<Vec<&str>> for ConfigValue {
    fn from(values: Vec<&str>) -> Self {
        Self::List(values.into_iter().map(str::to_string).collect())
    }
}

/// Baseline option values shared by every profile.
///
/// The defaults both seed newly provisioned profiles and annotate the
/// settings form with per-field fallbacks.
#[must_use]
pub fn defaults() -> BTreeMap<String, ConfigValue> {
    let mut map = BTreeMap::new();
    map.insert("ldap_host".to_string(), ConfigValue::from(""));
    map.insert("ldap_port".to_string(), ConfigValue::from("389"));
    map.insert("ldap_backup_host".to_string(), ConfigValue::from(""));
    map.insert("ldap_agent_dn".to_string(), ConfigValue::from(""));
    map.insert("ldap_base".to_string(), ConfigValue::from(""));
    map.insert("ldap_base_users".to_string(), ConfigValue::from(""));
    map.insert("ldap_base_groups".to_string(), ConfigValue::from(""));
    map.insert("ldap_login_filter".to_string(), ConfigValue::from(""));
    map.insert(
        "ldap_user_filter_objectclass".to_string(),
        ConfigValue::from(vec!["inetOrgPerson"]),
    );
    map.insert(
        "ldap_group_filter_objectclass".to_string(),
        ConfigValue::from(vec!["groupOfNames"]),
    );
    map.insert(
        "ldap_display_name".to_string(),
        ConfigValue::from("displayName"),
    );
    map.insert("ldap_email_attr".to_string(), ConfigValue::from("mail"));
    map.insert("ldap_uuid_attribute".to_string(), ConfigValue::from("auto"));
    map.insert(
        "ldap_attributes_for_user_search".to_string(),
        ConfigValue::from(vec!["uid", "givenName", "sn", "mail"]),
    );
    map.insert("ldap_cache_ttl".to_string(), ConfigValue::from("600"));
    map.insert("ldap_tls".to_string(), ConfigValue::from("0"));
    map.insert(
        "ldap_configuration_active".to_string(),
        ConfigValue::from("0"),
    );
    map
}

/// A named server configuration profile.
///
/// The prefix is the profile's unique key in the store. The empty prefix
/// is reserved for the unsaved defaults template returned by
/// [`ProfileManager::load_profile`](crate::ProfileManager::load_profile).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Unique profile prefix, e.g. `s01`.
    pub prefix: String,

    /// Option values keyed by option name.
    pub values: BTreeMap<String, ConfigValue>,
}

impl ServerConfig {
    /// Creates an empty profile under the given prefix.
    #[must_use]
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            values: BTreeMap::new(),
        }
    }

    /// Creates a profile under the given prefix seeded with [`defaults`].
    #[must_use]
    pub fn with_defaults(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            values: defaults(),
        }
    }

    /// Gets an option value.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&ConfigValue> {
        self.values.get(key)
    }

    /// Sets an option value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<ConfigValue>) {
        self.values.insert(key.into(), value.into());
    }

    /// Returns the configured directory host, flattened for display.
    #[must_use]
    pub fn host(&self) -> String {
        self.get("ldap_host").map(ConfigValue::flatten).unwrap_or_default()
    }

    /// Returns all values flattened to display strings, keyed by option.
    #[must_use]
    pub fn flattened(&self) -> BTreeMap<String, String> {
        self.values
            .iter()
            .map(|(key, value)| (key.clone(), value.flatten()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_flattens_unchanged() {
        let value = ConfigValue::from("ldaps://dir.example.com");
        assert_eq!(value.flatten(), "ldaps://dir.example.com");
        assert!(!value.is_list());
    }

    #[test]
    fn list_flattens_with_semicolons() {
        let value = ConfigValue::from(vec!["a", "b", "c"]);
        assert_eq!(value.flatten(), "a;b;c");
        assert!(value.is_list());
    }

    #[test]
    fn profile_seeded_with_defaults() {
        let profile = ServerConfig::with_defaults("s01");
        assert_eq!(profile.prefix, "s01");
        assert_eq!(profile.values, defaults());
        assert_eq!(
            profile.get("ldap_port"),
            Some(&ConfigValue::from("389"))
        );
    }

    #[test]
    fn flattened_covers_every_option() {
        let profile = ServerConfig::with_defaults("s01");
        let flat = profile.flattened();
        assert_eq!(flat.len(), defaults().len());
        assert_eq!(
            flat.get("ldap_attributes_for_user_search").map(String::as_str),
            Some("uid;givenName;sn;mail")
        );
    }

    #[test]
    fn host_reads_ldap_host_option() {
        let mut profile = ServerConfig::with_defaults("s01");
        assert_eq!(profile.host(), "");

        profile.set("ldap_host", "ldaps://dir.example.com");
        assert_eq!(profile.host(), "ldaps://dir.example.com");
    }
}
