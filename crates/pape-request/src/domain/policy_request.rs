//! PAPE policy request entity
//!
//! ## Equality
//!
//! Storage is ordered: list position is RP preference. Equality is NOT:
//! two requests are equal when their max ages match and their policy and
//! assurance-level lists contain the same identifiers as sets. Order and
//! duplicates are ignored. `Hash` follows the same rule and covers all
//! three fields.

use std::collections::BTreeSet;
use std::hash::{Hash, Hasher};
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Authentication policy preferences sent by an RP to the OP.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PolicyRequest {
    /// Upper bound on how long ago the end user may have authenticated.
    pub max_authentication_age: Option<Duration>,
    /// Policy URIs, most preferred first.
    pub preferred_policies: Vec<String>,
    /// Assurance-level type URIs, most preferred first.
    pub preferred_auth_level_types: Vec<String>,
}

impl PolicyRequest {
    /// Create an empty request.
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_max_auth_age(mut self, age: Duration) -> Self {
        self.max_authentication_age = Some(age);
        self
    }

    #[must_use]
    pub fn with_policy(mut self, policy: impl Into<String>) -> Self {
        self.preferred_policies.push(policy.into());
        self
    }

    #[must_use]
    pub fn with_auth_level_type(mut self, type_uri: impl Into<String>) -> Self {
        self.preferred_auth_level_types.push(type_uri.into());
        self
    }

    /// Append `policy` unless already listed. Returns whether it was added.
    pub fn add_policy(&mut self, policy: impl Into<String>) -> bool {
        push_unique(&mut self.preferred_policies, policy.into())
    }

    /// Append `type_uri` unless already listed. Returns whether it was added.
    pub fn add_auth_level_type(&mut self, type_uri: impl Into<String>) -> bool {
        push_unique(&mut self.preferred_auth_level_types, type_uri.into())
    }

    /// True when the RP expresses no preference at all.
    pub fn is_empty_preference(&self) -> bool {
        self.max_authentication_age.is_none()
            && self.preferred_policies.is_empty()
            && self.preferred_auth_level_types.is_empty()
    }

    /// Reset to the empty request.
    pub fn clear(&mut self) {
        self.max_authentication_age = None;
        self.preferred_policies.clear();
        self.preferred_auth_level_types.clear();
    }

    fn policy_set(&self) -> BTreeSet<&str> {
        self.preferred_policies.iter().map(String::as_str).collect()
    }

    fn auth_level_set(&self) -> BTreeSet<&str> {
        self.preferred_auth_level_types
            .iter()
            .map(String::as_str)
            .collect()
    }
}

fn push_unique(list: &mut Vec<String>, value: String) -> bool {
    if list.contains(&value) {
        return false;
    }
    list.push(value);
    true
}

impl PartialEq for PolicyRequest {
    fn eq(&self, other: &Self) -> bool {
        self.max_authentication_age == other.max_authentication_age
            && self.policy_set() == other.policy_set()
            && self.auth_level_set() == other.auth_level_set()
    }
}

impl Eq for PolicyRequest {}

impl Hash for PolicyRequest {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // BTreeSet iterates sorted and deduplicated, matching `eq`.
        self.max_authentication_age.hash(state);
        self.policy_set().hash(state);
        self.auth_level_set().hash(state);
    }
}
