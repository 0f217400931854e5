#![deny(clippy::all, clippy::pedantic, clippy::nursery)]

//! Single-secret credential storage over a platform secure store.
//!
//! This crate manages exactly one named secret — a login password — inside a
//! secure storage facility supplied by the host platform, optionally gated
//! behind a user-presence proof (device passcode or biometric). It does no
//! cryptography of its own: persistence and access enforcement belong to the
//! platform capability injected through [`platform::SecureStore`].
//!
//! The functional surface is three operations on [`PasswordStore`]:
//!
//! - [`PasswordStore::delete`] — remove the secret, absence counts as success
//! - [`PasswordStore::store`] — write (replace) the secret under a chosen
//!   [`ProtectionPolicy`]
//! - [`PasswordStore::load`] / [`PasswordStore::try_load`] — read it back,
//!   possibly after an interactive authentication prompt
//!
//! Host applications attach over FFI: implement [`platform::SecureStore`]
//! (and optionally [`logger::Logger`]) in Swift or Kotlin and hand both to
//! the library. Rust consumers can use the same traits directly; the
//! in-memory implementation in [`platform::memory`] backs the tests and the
//! developer CLI.

mod config;
mod error;
pub mod logger;
pub mod platform;
mod policy;
mod store;

pub use config::{store_config_for_app, SecretIdentifier, StoreConfig};
pub use error::{LoadError, StoreError};
pub use policy::{AccessControl, ProtectionPolicy};
pub use store::PasswordStore;

uniffi::setup_scaffolding!("secretkit_core");
