//! Platform abstraction for the secure store capability.
//!
//! The library never talks to an OS keychain directly. The host supplies the
//! capability through [`SecureStore`]:
//!
//! - iOS: Keychain Services generic-password items
//! - Android: Keystore-backed encrypted preferences
//! - Tests and the developer CLI: [`memory::MemorySecureStore`]
//!
//! Implementations own persistence and the enforcement of
//! [`AccessControl`](crate::AccessControl); this crate only builds requests
//! and translates outcomes. Status codes in the outcome enums are the
//! platform's native result codes (OSStatus-shaped on iOS) and are carried
//! through to the error types unmodified.

pub mod memory;

pub use memory::{AuthBehavior, MemorySecureStore};

use crate::config::SecretIdentifier;
use crate::policy::AccessControl;

/// Outcome of a delete request.
#[derive(Debug, Clone, PartialEq, Eq, uniffi::Enum)]
pub enum DeleteOutcome {
    /// A record existed and was removed.
    Removed,
    /// No record existed under the identifier.
    NotFound,
    /// The store failed in an unexpected way.
    Failure {
        /// Native status code.
        code: i64,
    },
}

/// Outcome of an insert request.
#[derive(Debug, Clone, PartialEq, Eq, uniffi::Enum)]
pub enum InsertOutcome {
    /// The record was persisted.
    Inserted,
    /// The store rejected the write.
    Failure {
        /// Native status code.
        code: i64,
    },
}

/// Outcome of a query, possibly reached after an interactive prompt.
#[derive(Debug, Clone, PartialEq, Eq, uniffi::Enum)]
pub enum QueryOutcome {
    /// The record exists and its bytes were released.
    Found {
        /// The stored bytes.
        value: Vec<u8>,
    },
    /// No record exists under the identifier.
    NotFound,
    /// The user dismissed the authentication prompt.
    Canceled,
    /// The presented passcode or biometric proof was rejected.
    AuthenticationFailed,
    /// The store failed in an unexpected way.
    Failure {
        /// Native status code.
        code: i64,
    },
}

/// Key-value secure storage for small secrets, provided by the host
/// platform.
///
/// `query` may block for an arbitrary time while the platform collects a
/// user-presence proof for a gated record; callers are expected to invoke it
/// off the UI thread. Per-identifier serialization of concurrent requests is
/// the implementation's responsibility.
#[uniffi::export(with_foreign)]
pub trait SecureStore: Send + Sync {
    /// Removes the record stored under `identifier`, if any.
    fn delete(&self, identifier: SecretIdentifier) -> DeleteOutcome;

    /// Persists `value` under `identifier` with the given access control.
    ///
    /// `allow_auth_ui` permits the platform to present interactive
    /// authentication on later reads of this record. An existing record
    /// under the same identifier must not be silently replaced; the caller
    /// deletes first.
    fn insert(
        &self,
        identifier: SecretIdentifier,
        value: Vec<u8>,
        access_control: AccessControl,
        allow_auth_ui: bool,
    ) -> InsertOutcome;

    /// Looks up the record under `identifier`, presenting `prompt` when the
    /// record demands a user-presence proof.
    fn query(&self, identifier: SecretIdentifier, prompt: String) -> QueryOutcome;
}
