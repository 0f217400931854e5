//! The single-secret store.

use std::sync::Arc;

use zeroize::Zeroizing;

use crate::config::{SecretIdentifier, StoreConfig};
use crate::error::{LoadError, StoreError};
use crate::platform::{DeleteOutcome, InsertOutcome, QueryOutcome, SecureStore};
use crate::policy::AccessControl;

/// Manages exactly one named secret inside the platform secure store.
///
/// The store addresses a single `(service, account)` identifier fixed at
/// construction; it never holds the secret itself beyond the duration of a
/// call. Writes run synchronously on the caller's thread. Reads are
/// asynchronous because the platform may put an interactive authentication
/// prompt in the way; exactly one completion is delivered per call, with no
/// cancellation and no timeout.
///
/// # Example (Swift)
///
/// ```swift
/// let store = PasswordStore(
///     config: storeConfigForApp(displayName: appName),
///     backend: KeychainSecureStore()
/// )
/// try store.store(secret: Data("123456".utf8), requireUserPresence: false)
/// let password = await store.load()
/// ```
#[derive(uniffi::Object)]
pub struct PasswordStore {
    backend: Arc<dyn SecureStore>,
    identifier: SecretIdentifier,
    auth_prompt: String,
}

#[uniffi::export(async_runtime = "tokio")]
impl PasswordStore {
    /// Creates a store addressing the identifier described by `config`,
    /// persisting through `backend`.
    #[uniffi::constructor]
    pub fn new(config: StoreConfig, backend: Arc<dyn SecureStore>) -> Arc<Self> {
        Arc::new(Self {
            identifier: config.identifier(),
            auth_prompt: config.auth_prompt,
            backend,
        })
    }

    /// Removes the stored secret.
    ///
    /// Returns `true` when a record was removed or none existed to begin
    /// with; `false` only when the secure store reported an anomalous
    /// status. Failures are logged, never raised.
    pub fn delete(&self) -> bool {
        match self.backend.delete(self.identifier.clone()) {
            DeleteOutcome::Removed | DeleteOutcome::NotFound => true,
            DeleteOutcome::Failure { code } => {
                log::warn!("secure store delete failed (status {code})");
                false
            }
        }
    }

    /// Stores `secret`, replacing any previous record.
    ///
    /// With `require_user_presence` every later read demands a fresh
    /// passcode or biometric proof; without it the record is readable
    /// whenever the device is unlocked. A previous record's policy is
    /// discarded wholesale, never merged.
    ///
    /// The underlying store has no upsert primitive, so replacement is
    /// delete-then-insert: between the two steps no record exists under the
    /// identifier.
    ///
    /// # Errors
    ///
    /// [`StoreError::Encoding`] if `secret` is not valid UTF-8 text —
    /// checked before the previous record is touched, so a rejected store
    /// leaves prior state intact. [`StoreError::AccessControl`] if the
    /// policy object cannot be built. [`StoreError::Insert`] if the secure
    /// store rejects the write.
    pub fn store(&self, secret: Vec<u8>, require_user_presence: bool) -> Result<(), StoreError> {
        let secret = Zeroizing::new(secret);
        if std::str::from_utf8(&secret).is_err() {
            return Err(StoreError::Encoding);
        }
        let access_control = AccessControl::for_presence_requirement(require_user_presence)?;

        // Outcome deliberately ignored: removal and prior absence are both
        // acceptable starting states for the insert.
        self.delete();

        match self.backend.insert(
            self.identifier.clone(),
            secret.to_vec(),
            access_control.clone(),
            true,
        ) {
            InsertOutcome::Inserted => {
                log::debug!("stored secret under {} protection", access_control.policy);
                Ok(())
            }
            InsertOutcome::Failure { code } => Err(StoreError::Insert { code }),
        }
    }

    /// Loads the stored secret, flattening every failure to absence.
    ///
    /// Compatibility surface: a `None` cannot be told apart from a canceled
    /// prompt, a rejected proof, undecodable bytes, or a store failure. Use
    /// [`Self::try_load`] to distinguish them.
    pub async fn load(&self) -> Option<String> {
        match self.try_load().await {
            Ok(secret) => Some(secret),
            Err(err) => {
                log::debug!("load flattened to absence: {err}");
                None
            }
        }
    }

    /// Loads the stored secret with discriminated failure outcomes.
    ///
    /// The secure store query runs on a blocking-capable worker because it
    /// may stall indefinitely behind an interactive user-presence prompt;
    /// the caller's task resumes exactly once with the outcome.
    ///
    /// # Errors
    ///
    /// [`LoadError::NotFound`] when no record exists, [`LoadError::Canceled`]
    /// and [`LoadError::AuthenticationFailed`] for the two interactive
    /// outcomes, [`LoadError::NotText`] when the stored bytes do not decode
    /// as UTF-8, [`LoadError::Backend`] for anomalous store statuses, and
    /// [`LoadError::Worker`] when the background task itself fails.
    pub async fn try_load(&self) -> Result<String, LoadError> {
        let backend = Arc::clone(&self.backend);
        let identifier = self.identifier.clone();
        let prompt = self.auth_prompt.clone();

        let outcome = tokio::task::spawn_blocking(move || backend.query(identifier, prompt))
            .await
            .map_err(|err| LoadError::Worker {
                message: err.to_string(),
            })?;

        match outcome {
            QueryOutcome::Found { value } => {
                let value = Zeroizing::new(value);
                std::str::from_utf8(&value)
                    .map(str::to_owned)
                    .map_err(|_| LoadError::NotText)
            }
            QueryOutcome::NotFound => Err(LoadError::NotFound),
            QueryOutcome::Canceled => Err(LoadError::Canceled),
            QueryOutcome::AuthenticationFailed => Err(LoadError::AuthenticationFailed),
            QueryOutcome::Failure { code } => Err(LoadError::Backend { code }),
        }
    }
}
