//! Error types for the write and read paths.
//!
//! The write path surfaces its three failure kinds individually. The read
//! path is discriminated on [`crate::PasswordStore::try_load`] only;
//! [`crate::PasswordStore::load`] flattens every variant to absence for
//! callers that want the legacy optional-value contract.

use thiserror::Error;

/// Failures surfaced by [`crate::PasswordStore::store`].
#[derive(Debug, Clone, PartialEq, Eq, Error, uniffi::Error)]
#[uniffi(flat_error)]
pub enum StoreError {
    /// The secret is not representable in the store's text encoding.
    ///
    /// Checked before the previous record is touched, so a failed store
    /// never destroys what was already persisted.
    #[error("secret is not representable as UTF-8 text")]
    Encoding,

    /// The access-control object for the requested policy could not be
    /// constructed.
    #[error("access control rejected: {reason}")]
    AccessControl {
        /// Why construction was rejected.
        reason: String,
    },

    /// The secure store rejected the write.
    #[error("secure store rejected the insert (status {code})")]
    Insert {
        /// Native status code reported by the secure store.
        code: i64,
    },
}

/// Discriminated outcomes of [`crate::PasswordStore::try_load`].
#[derive(Debug, Clone, PartialEq, Eq, Error, uniffi::Error)]
#[uniffi(flat_error)]
pub enum LoadError {
    /// No record exists under the identifier.
    #[error("no secret is stored")]
    NotFound,

    /// The user dismissed the authentication prompt.
    #[error("authentication prompt was canceled")]
    Canceled,

    /// The presented passcode or biometric proof was rejected.
    #[error("authentication failed")]
    AuthenticationFailed,

    /// The stored bytes are not decodable as UTF-8 text.
    #[error("stored secret is not decodable as UTF-8 text")]
    NotText,

    /// The secure store reported an anomalous status.
    #[error("secure store query failed (status {code})")]
    Backend {
        /// Native status code reported by the secure store.
        code: i64,
    },

    /// The background query task failed before reaching the secure store.
    #[error("query worker failed: {message}")]
    Worker {
        /// Failure detail from the worker runtime.
        message: String,
    },
}
