//! # hv-config
//!
//! LDAP server configuration profiles for Haven.
//!
//! A deployment may talk to any number of directory servers; each one is
//! described by a named profile (a short prefix like `s01` plus a map of
//! option values). This crate provides:
//!
//! - [`ServerConfig`] - a single profile and the shared option defaults
//! - [`ConfigStore`] - the persistence contract, with in-memory and
//!   JSON-file backends
//! - [`ProfileManager`] - enumeration, first-run bootstrap, and the
//!   presentation [`Snapshot`] consumed by the admin settings page

#![forbid(unsafe_code)]
#![deny(warnings)]
#![deny(missing_docs)]

pub mod error;
pub mod json;
pub mod manager;
pub mod profile;
pub mod store;

pub use error::{ConfigError, ConfigResult};
pub use json::JsonFileConfigStore;
pub use manager::{ProfileManager, Snapshot};
pub use profile::{defaults, ConfigValue, ServerConfig};
pub use store::{ConfigStore, InMemoryConfigStore};
