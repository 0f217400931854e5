//! In-memory secure store for tests and the developer CLI.
//!
//! Not secure for production use: records live on the heap with no platform
//! protection behind them (values are zeroized on drop, nothing more).
//! Presence-gated reads consult a scriptable [`AuthBehavior`] instead of a
//! real prompt, so every authentication outcome can be exercised
//! deterministically.

// Test-support code; panics on a poisoned lock are acceptable here.
#![allow(clippy::missing_panics_doc)]

use std::collections::HashMap;
use std::sync::Mutex;

use zeroize::Zeroizing;

use crate::config::SecretIdentifier;
use crate::platform::{DeleteOutcome, InsertOutcome, QueryOutcome, SecureStore};
use crate::policy::AccessControl;

/// How [`MemorySecureStore`] resolves a user-presence prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthBehavior {
    /// The simulated user approves the prompt.
    #[default]
    Approve,
    /// The simulated user dismisses the prompt.
    Cancel,
    /// The simulated proof is rejected.
    Deny,
}

struct StoredRecord {
    value: Zeroizing<Vec<u8>>,
    access_control: AccessControl,
}

#[derive(Default)]
struct Inner {
    records: HashMap<SecretIdentifier, StoredRecord>,
    auth_behavior: AuthBehavior,
    fail_next_delete: Option<i64>,
    fail_next_insert: Option<i64>,
    fail_next_query: Option<i64>,
    prompt_count: u64,
}

/// In-memory [`SecureStore`] implementation.
///
/// Beyond the trait surface it exposes scripting knobs (`set_auth_behavior`,
/// the one-shot `fail_next_*` injectors) and observables (`record_count`,
/// `policy_of`, `value_of`, `prompt_count`) so tests can drive and inspect
/// every path without a device.
#[derive(Default)]
pub struct MemorySecureStore {
    inner: Mutex<Inner>,
}

impl MemorySecureStore {
    /// Creates an empty store that approves every prompt.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Scripts how later presence-gated reads resolve.
    pub fn set_auth_behavior(&self, behavior: AuthBehavior) {
        self.inner.lock().unwrap().auth_behavior = behavior;
    }

    /// Makes the next delete fail with `code`.
    pub fn fail_next_delete(&self, code: i64) {
        self.inner.lock().unwrap().fail_next_delete = Some(code);
    }

    /// Makes the next insert fail with `code`.
    pub fn fail_next_insert(&self, code: i64) {
        self.inner.lock().unwrap().fail_next_insert = Some(code);
    }

    /// Makes the next query fail with `code`.
    pub fn fail_next_query(&self, code: i64) {
        self.inner.lock().unwrap().fail_next_query = Some(code);
    }

    /// Number of records currently held.
    #[must_use]
    pub fn record_count(&self) -> usize {
        self.inner.lock().unwrap().records.len()
    }

    /// Access control stored for `identifier`, if a record exists.
    #[must_use]
    pub fn policy_of(&self, identifier: &SecretIdentifier) -> Option<AccessControl> {
        self.inner
            .lock()
            .unwrap()
            .records
            .get(identifier)
            .map(|record| record.access_control.clone())
    }

    /// Raw bytes stored for `identifier`, if a record exists.
    ///
    /// Bypasses access control; reads never prompt through this accessor.
    #[must_use]
    pub fn value_of(&self, identifier: &SecretIdentifier) -> Option<Vec<u8>> {
        self.inner
            .lock()
            .unwrap()
            .records
            .get(identifier)
            .map(|record| record.value.to_vec())
    }

    /// Number of times a presence prompt would have been shown.
    #[must_use]
    pub fn prompt_count(&self) -> u64 {
        self.inner.lock().unwrap().prompt_count
    }
}

impl SecureStore for MemorySecureStore {
    fn delete(&self, identifier: SecretIdentifier) -> DeleteOutcome {
        let mut inner = self.inner.lock().unwrap();
        if let Some(code) = inner.fail_next_delete.take() {
            return DeleteOutcome::Failure { code };
        }
        match inner.records.remove(&identifier) {
            Some(_) => DeleteOutcome::Removed,
            None => DeleteOutcome::NotFound,
        }
    }

    fn insert(
        &self,
        identifier: SecretIdentifier,
        value: Vec<u8>,
        access_control: AccessControl,
        _allow_auth_ui: bool,
    ) -> InsertOutcome {
        let mut inner = self.inner.lock().unwrap();
        if let Some(code) = inner.fail_next_insert.take() {
            return InsertOutcome::Failure { code };
        }
        inner.records.insert(
            identifier,
            StoredRecord {
                value: Zeroizing::new(value),
                access_control,
            },
        );
        InsertOutcome::Inserted
    }

    fn query(&self, identifier: SecretIdentifier, _prompt: String) -> QueryOutcome {
        let mut inner = self.inner.lock().unwrap();
        if let Some(code) = inner.fail_next_query.take() {
            return QueryOutcome::Failure { code };
        }
        let Some(gated) = inner
            .records
            .get(&identifier)
            .map(|record| record.access_control.require_user_presence)
        else {
            return QueryOutcome::NotFound;
        };
        if gated {
            inner.prompt_count += 1;
            match inner.auth_behavior {
                AuthBehavior::Approve => {}
                AuthBehavior::Cancel => return QueryOutcome::Canceled,
                AuthBehavior::Deny => return QueryOutcome::AuthenticationFailed,
            }
        }
        inner
            .records
            .get(&identifier)
            .map_or(QueryOutcome::NotFound, |record| QueryOutcome::Found {
                value: record.value.to_vec(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::ProtectionPolicy;

    fn identifier() -> SecretIdentifier {
        SecretIdentifier {
            service: "memory-tests".to_owned(),
            account: "login-password".to_owned(),
        }
    }

    fn plain_control() -> AccessControl {
        AccessControl::for_presence_requirement(false).expect("plain control")
    }

    fn gated_control() -> AccessControl {
        AccessControl::for_presence_requirement(true).expect("gated control")
    }

    #[test]
    fn test_insert_then_query_releases_bytes() {
        let store = MemorySecureStore::new();
        let outcome = store.insert(identifier(), b"hunter2".to_vec(), plain_control(), true);
        assert_eq!(outcome, InsertOutcome::Inserted);

        let outcome = store.query(identifier(), String::new());
        assert_eq!(
            outcome,
            QueryOutcome::Found {
                value: b"hunter2".to_vec()
            }
        );
        assert_eq!(store.prompt_count(), 0);
    }

    #[test]
    fn test_delete_distinguishes_removed_from_absent() {
        let store = MemorySecureStore::new();
        assert_eq!(store.delete(identifier()), DeleteOutcome::NotFound);

        store.insert(identifier(), b"x".to_vec(), plain_control(), true);
        assert_eq!(store.delete(identifier()), DeleteOutcome::Removed);
        assert_eq!(store.delete(identifier()), DeleteOutcome::NotFound);
    }

    #[test]
    fn test_gated_record_consults_auth_behavior() {
        let store = MemorySecureStore::new();
        store.insert(identifier(), b"x".to_vec(), gated_control(), true);

        store.set_auth_behavior(AuthBehavior::Cancel);
        assert_eq!(store.query(identifier(), String::new()), QueryOutcome::Canceled);

        store.set_auth_behavior(AuthBehavior::Deny);
        assert_eq!(
            store.query(identifier(), String::new()),
            QueryOutcome::AuthenticationFailed
        );

        store.set_auth_behavior(AuthBehavior::Approve);
        assert!(matches!(
            store.query(identifier(), String::new()),
            QueryOutcome::Found { .. }
        ));

        assert_eq!(store.prompt_count(), 3);
    }

    #[test]
    fn test_failure_injectors_are_one_shot() {
        let store = MemorySecureStore::new();
        store.fail_next_insert(-34);
        assert_eq!(
            store.insert(identifier(), b"x".to_vec(), plain_control(), true),
            InsertOutcome::Failure { code: -34 }
        );
        assert_eq!(
            store.insert(identifier(), b"x".to_vec(), plain_control(), true),
            InsertOutcome::Inserted
        );

        store.fail_next_query(-25293);
        assert_eq!(
            store.query(identifier(), String::new()),
            QueryOutcome::Failure { code: -25293 }
        );
        assert!(matches!(
            store.query(identifier(), String::new()),
            QueryOutcome::Found { .. }
        ));

        store.fail_next_delete(-1);
        assert_eq!(store.delete(identifier()), DeleteOutcome::Failure { code: -1 });
        assert_eq!(store.delete(identifier()), DeleteOutcome::Removed);
    }

    #[test]
    fn test_observables_reflect_stored_record() {
        let store = MemorySecureStore::new();
        assert_eq!(store.record_count(), 0);
        assert!(store.policy_of(&identifier()).is_none());

        store.insert(identifier(), b"x".to_vec(), gated_control(), true);
        assert_eq!(store.record_count(), 1);
        let control = store.policy_of(&identifier()).expect("stored control");
        assert_eq!(
            control.policy,
            ProtectionPolicy::WhenPasscodeSetRequiresPresence
        );
        assert_eq!(store.value_of(&identifier()), Some(b"x".to_vec()));
    }
}
