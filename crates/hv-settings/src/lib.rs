//! # hv-settings
//!
//! Admin settings surfaces for Haven.
//!
//! A settings surface declares where it lives in the admin panel (section
//! id, display priority, optional sub-setting name) and assembles the
//! payload its template needs. This crate ships the LDAP surface:
//! [`LdapAdminSettings`] builds a profile [`Snapshot`](hv_config::Snapshot)
//! through [`hv_config::ProfileManager`] and hands it to a
//! [`TemplateRenderer`], provisioning a defaults profile on first open.

#![forbid(unsafe_code)]
#![deny(warnings)]
#![deny(missing_docs)]

pub mod admin;
pub mod section;
pub mod template;

pub use admin::LdapAdminSettings;
pub use section::SettingsSection;
pub use template::{JsonRenderer, TemplateRenderer};
