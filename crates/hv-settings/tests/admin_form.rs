//! End-to-end tests for the LDAP settings surface over a real store.

use std::sync::Arc;

use hv_config::{defaults, ConfigStore, InMemoryConfigStore, ProfileManager, ServerConfig};
use hv_settings::{JsonRenderer, LdapAdminSettings};

fn surface_over(
    store: Arc<InMemoryConfigStore>,
) -> LdapAdminSettings<InMemoryConfigStore, JsonRenderer> {
    LdapAdminSettings::new(ProfileManager::new(store), Arc::new(JsonRenderer::new()))
}

#[tokio::test]
async fn first_open_provisions_exactly_one_defaults_profile() {
    let store = Arc::new(InMemoryConfigStore::new());
    let settings = surface_over(Arc::clone(&store));

    let snapshot = settings.snapshot().await.unwrap();

    // Exactly one profile, seeded from the defaults.
    assert_eq!(snapshot.prefixes, vec!["s01"]);
    let profile = &snapshot.profiles["s01"];
    for (key, value) in defaults() {
        assert_eq!(profile.get(&key), Some(&value.flatten()), "seeded {key}");
    }

    // Every default is also annotated with its `_default` twin.
    for (key, value) in defaults() {
        assert_eq!(
            snapshot.defaults.get(&format!("{key}_default")),
            Some(&value.flatten())
        );
    }

    // Opening the page again neither adds nor mutates anything.
    let again = settings.snapshot().await.unwrap();
    assert_eq!(again.prefixes, vec!["s01"]);
    assert_eq!(again.profiles, snapshot.profiles);
}

#[tokio::test]
async fn existing_profiles_are_rendered_not_rewritten() {
    let mut first = ServerConfig::with_defaults("s01");
    first.set("ldap_host", "ldaps://a.example.com");
    first.set("ldap_user_filter_objectclass", vec!["posixAccount", "person"]);
    let second = ServerConfig::with_defaults("s02");

    let store = Arc::new(InMemoryConfigStore::with_profiles(vec![
        first.clone(),
        second.clone(),
    ]));
    let settings = surface_over(Arc::clone(&store));

    let snapshot = settings.snapshot().await.unwrap();
    assert_eq!(snapshot.prefixes, vec!["s01", "s02"]);
    assert_eq!(
        snapshot.profiles["s01"]["ldap_user_filter_objectclass"],
        "posixAccount;person"
    );
    assert_eq!(
        snapshot.hosts.get("s01").map(String::as_str),
        Some("ldaps://a.example.com")
    );

    // Stored state is untouched by assembly.
    assert_eq!(store.load("s01").await.unwrap(), first);
    assert_eq!(store.load("s02").await.unwrap(), second);
}

#[tokio::test]
async fn form_embeds_snapshot_state() {
    let store = Arc::new(InMemoryConfigStore::new());
    let settings = surface_over(store);

    let markup = settings.form().await.unwrap();
    assert!(markup.contains("ldap_port_default"));
    assert!(markup.contains("389"));
}
