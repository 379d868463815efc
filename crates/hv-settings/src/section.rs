//! Admin-panel placement metadata.

/// Placement of a settings surface within the admin panel.
///
/// Surfaces in the same section are arranged by ascending priority;
/// registration and routing live in the panel framework, which only
/// consumes this metadata.
pub trait SettingsSection {
    /// The section this surface belongs to, e.g. `"ldap"`.
    fn section_id(&self) -> &'static str;

    /// Display priority within the section, 0-100; lower sorts earlier.
    fn priority(&self) -> u8;

    /// Name of the sub-setting, or `None` for a single consolidated group.
    fn name(&self) -> Option<&str> {
        None
    }
}
