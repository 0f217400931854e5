//! Protection policies and access-control construction.

use strum::Display;

use crate::error::StoreError;

/// When a stored secret may be read back.
///
/// The policy is fixed at store time. It is not queryable or mutable on an
/// existing record; changing it means deleting the record and storing again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, uniffi::Enum)]
#[strum(serialize_all = "kebab-case")]
pub enum ProtectionPolicy {
    /// Readable whenever the device is unlocked.
    WhenUnlocked,
    /// Readable only while a device passcode is set, and every read demands
    /// a fresh user-presence proof (passcode entry or biometric).
    WhenPasscodeSetRequiresPresence,
}

/// Rule set attached to a record at insert time.
///
/// Pairs a [`ProtectionPolicy`] with the flag set the platform enforces it
/// with. Construction is fallible: combinations the platform cannot honor
/// are rejected up front rather than at read time.
#[derive(Debug, Clone, PartialEq, Eq, uniffi::Record)]
pub struct AccessControl {
    /// The protection class the record is stored under.
    pub policy: ProtectionPolicy,
    /// Whether every read must first collect a user-presence proof.
    pub require_user_presence: bool,
}

impl AccessControl {
    /// Builds the access control for `policy` with the given flag set.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::AccessControl`] for combinations the platform
    /// cannot enforce: a user-presence demand under
    /// [`ProtectionPolicy::WhenUnlocked`], or the passcode-bound policy
    /// without the presence flag.
    pub fn new(
        policy: ProtectionPolicy,
        require_user_presence: bool,
    ) -> Result<Self, StoreError> {
        match (policy, require_user_presence) {
            (ProtectionPolicy::WhenUnlocked, true) => Err(StoreError::AccessControl {
                reason: format!("user presence cannot be enforced under the {policy} class"),
            }),
            (ProtectionPolicy::WhenPasscodeSetRequiresPresence, false) => {
                Err(StoreError::AccessControl {
                    reason: format!("the {policy} class always demands user presence"),
                })
            }
            _ => Ok(Self {
                policy,
                require_user_presence,
            }),
        }
    }

    /// Selects the access control for a store call.
    ///
    /// `true` demands a fresh user-presence proof on every later read;
    /// `false` leaves the record readable whenever the device is unlocked.
    ///
    /// # Errors
    ///
    /// Propagates [`StoreError::AccessControl`] from construction.
    pub fn for_presence_requirement(require_user_presence: bool) -> Result<Self, StoreError> {
        if require_user_presence {
            Self::new(ProtectionPolicy::WhenPasscodeSetRequiresPresence, true)
        } else {
            Self::new(ProtectionPolicy::WhenUnlocked, false)
        }
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test_case(ProtectionPolicy::WhenUnlocked, false; "plain record")]
    #[test_case(ProtectionPolicy::WhenPasscodeSetRequiresPresence, true; "gated record")]
    fn test_consistent_combinations_build(policy: ProtectionPolicy, presence: bool) {
        let control = AccessControl::new(policy, presence).expect("consistent combination");
        assert_eq!(control.policy, policy);
        assert_eq!(control.require_user_presence, presence);
    }

    #[test_case(ProtectionPolicy::WhenUnlocked, true; "presence without passcode class")]
    #[test_case(ProtectionPolicy::WhenPasscodeSetRequiresPresence, false; "passcode class without presence")]
    fn test_inconsistent_combinations_are_rejected(policy: ProtectionPolicy, presence: bool) {
        let err = AccessControl::new(policy, presence).expect_err("inconsistent combination");
        assert!(matches!(err, StoreError::AccessControl { .. }));
    }

    #[test]
    fn test_presence_requirement_selects_policy() {
        let gated = AccessControl::for_presence_requirement(true).expect("gated");
        assert_eq!(
            gated.policy,
            ProtectionPolicy::WhenPasscodeSetRequiresPresence
        );
        assert!(gated.require_user_presence);

        let plain = AccessControl::for_presence_requirement(false).expect("plain");
        assert_eq!(plain.policy, ProtectionPolicy::WhenUnlocked);
        assert!(!plain.require_user_presence);
    }

    #[test]
    fn test_policy_display_is_kebab_case() {
        assert_eq!(ProtectionPolicy::WhenUnlocked.to_string(), "when-unlocked");
        assert_eq!(
            ProtectionPolicy::WhenPasscodeSetRequiresPresence.to_string(),
            "when-passcode-set-requires-presence"
        );
    }
}
