//! Reserved identifier→alias tables
//!
//! A reserved table seeds alias assignment so well-known identifiers always
//! travel under their canonical alias.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::domain::policies::AssuranceLevels;
use crate::error::ConfigError;

/// Caller-supplied map of preferred aliases, keyed by identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReservedAliases {
    by_identifier: IndexMap<String, String>,
}

impl ReservedAliases {
    /// An empty table. Every identifier gets a synthesized alias.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The well-known assurance-level table (`nist`).
    pub fn well_known() -> Self {
        let mut table = Self::empty();
        table.insert(AssuranceLevels::NIST_TYPE_URI, AssuranceLevels::NIST_ALIAS);
        table
    }

    /// Add or replace the reserved alias for `identifier`.
    pub fn insert(&mut self, identifier: impl Into<String>, alias: impl Into<String>) {
        self.by_identifier.insert(identifier.into(), alias.into());
    }

    /// Builder-style [`Self::insert`].
    #[must_use]
    pub fn with(mut self, identifier: impl Into<String>, alias: impl Into<String>) -> Self {
        self.insert(identifier, alias);
        self
    }

    /// Reserved alias for `identifier`, if any.
    pub fn alias_for(&self, identifier: &str) -> Option<&str> {
        self.by_identifier.get(identifier).map(String::as_str)
    }

    /// Whether any identifier reserves `alias`.
    pub fn reserves_alias(&self, alias: &str) -> bool {
        self.by_identifier.values().any(|a| a == alias)
    }

    /// Iterate `(identifier, alias)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.by_identifier
            .iter()
            .map(|(id, alias)| (id.as_str(), alias.as_str()))
    }

    pub fn len(&self) -> usize {
        self.by_identifier.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_identifier.is_empty()
    }

    /// Check every alias is a valid wire token and no alias is reserved twice.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen: IndexMap<&str, &str> = IndexMap::with_capacity(self.len());
        for (identifier, alias) in self.iter() {
            if !is_valid_alias(alias) {
                return Err(ConfigError::InvalidReservedAlias {
                    identifier: identifier.to_string(),
                    alias: alias.to_string(),
                });
            }
            if let Some(first) = seen.insert(alias, identifier) {
                return Err(ConfigError::DuplicateReservedAlias {
                    alias: alias.to_string(),
                    first: first.to_string(),
                    second: identifier.to_string(),
                });
            }
        }
        Ok(())
    }
}

/// Aliases appear inside space-delimited lists and dotted keys.
pub fn is_valid_alias(alias: &str) -> bool {
    !alias.is_empty() && !alias.contains('.') && !alias.chars().any(char::is_whitespace)
}
