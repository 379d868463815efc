//! LDAP admin settings surface.

use std::sync::Arc;

use hv_config::{ConfigResult, ConfigStore, ProfileManager, Snapshot};

use crate::section::SettingsSection;
use crate::template::TemplateRenderer;

/// Template rendered by the LDAP settings surface.
const SETTINGS_TEMPLATE: &str = "settings";

/// Section the surface registers under.
const SECTION_ID: &str = "ldap";

/// Display priority; low so the surface sorts near the top of the section.
const PRIORITY: u8 = 5;

/// The LDAP server settings page.
///
/// Opening the page guarantees at least one server profile exists: on a
/// fresh installation the snapshot path provisions a defaults-seeded
/// profile before anything is rendered. Existing profiles are only ever
/// read here; saving goes through a separate write path.
pub struct LdapAdminSettings<S: ConfigStore, R: TemplateRenderer> {
    manager: ProfileManager<S>,
    renderer: Arc<R>,
}

impl<S: ConfigStore, R: TemplateRenderer> LdapAdminSettings<S, R> {
    /// Creates the settings surface over a profile manager and renderer.
    #[must_use]
    pub fn new(manager: ProfileManager<S>, renderer: Arc<R>) -> Self {
        Self { manager, renderer }
    }

    /// Returns the profile manager backing this surface.
    #[must_use]
    pub fn manager(&self) -> &ProfileManager<S> {
        &self.manager
    }

    /// Assembles the snapshot the settings template consumes.
    ///
    /// ## Errors
    ///
    /// Store failures propagate unchanged; the admin panel surfaces them
    /// as a generic page failure.
    pub async fn snapshot(&self) -> ConfigResult<Snapshot> {
        self.manager.snapshot().await
    }

    /// Builds the settings form markup.
    pub async fn form(&self) -> ConfigResult<String> {
        let snapshot = self.snapshot().await?;
        tracing::debug!(
            profiles = snapshot.prefixes.len(),
            "rendering ldap settings form"
        );
        Ok(self.renderer.render(SETTINGS_TEMPLATE, &snapshot))
    }
}

impl<S: ConfigStore, R: TemplateRenderer> SettingsSection for LdapAdminSettings<S, R> {
    fn section_id(&self) -> &'static str {
        SECTION_ID
    }

    fn priority(&self) -> u8 {
        PRIORITY
    }

    fn name(&self) -> Option<&str> {
        // Single consolidated settings group.
        None
    }
}
