//! Store configuration and the fixed secret identifier.
//!
//! The identifier's service component comes from the hosting application's
//! display name. Resolve that name once at startup and pass it through
//! [`StoreConfig::for_app`]; the library holds no hidden process-wide state.

/// Service component used when the host application's display name is
/// unavailable.
pub const FALLBACK_SERVICE_NAME: &str = "unknown-app";

/// Account component of the managed secret's identifier.
pub const LOGIN_PASSWORD_ACCOUNT: &str = "login-password";

/// Prompt shown when a presence-gated read triggers interactive
/// authentication.
pub const DEFAULT_AUTH_PROMPT: &str = "Authenticate to retrieve your saved password";

/// Lookup key for a secret inside the platform secure store.
///
/// The pair is the primary key: the secure store holds at most one record
/// per `(service, account)` value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, uniffi::Record)]
pub struct SecretIdentifier {
    /// Service component, derived from the host application's display name.
    pub service: String,
    /// Account component, fixed per store instance.
    pub account: String,
}

/// Configuration handed to [`crate::PasswordStore`] at construction.
#[derive(Debug, Clone, uniffi::Record)]
pub struct StoreConfig {
    /// Service component of the identifier.
    pub service: String,
    /// Account component of the identifier.
    pub account: String,
    /// Prompt displayed when a read has to collect a user-presence proof.
    pub auth_prompt: String,
}

impl StoreConfig {
    /// Builds the configuration for a host application.
    ///
    /// `display_name` is the application's own display-name metadata; `None`
    /// falls back to [`FALLBACK_SERVICE_NAME`]. The account component and
    /// the authentication prompt take their defaults and can be overridden
    /// on the returned value.
    #[must_use]
    pub fn for_app(display_name: Option<String>) -> Self {
        Self {
            service: display_name.unwrap_or_else(|| FALLBACK_SERVICE_NAME.to_owned()),
            account: LOGIN_PASSWORD_ACCOUNT.to_owned(),
            auth_prompt: DEFAULT_AUTH_PROMPT.to_owned(),
        }
    }

    /// The identifier this configuration addresses.
    #[must_use]
    pub fn identifier(&self) -> SecretIdentifier {
        SecretIdentifier {
            service: self.service.clone(),
            account: self.account.clone(),
        }
    }
}

/// FFI-side mirror of [`StoreConfig::for_app`].
#[uniffi::export]
#[must_use]
pub fn store_config_for_app(display_name: Option<String>) -> StoreConfig {
    StoreConfig::for_app(display_name)
}
