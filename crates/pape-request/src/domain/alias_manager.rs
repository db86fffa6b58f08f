//! Alias assignment for long type identifiers
//!
//! Assurance-level type URIs travel as short aliases inside the shared
//! message bag. Each alias is declared once with a `<prefix><alias>` key
//! whose value is the full URI.
//!
//! ## Invariants
//!
//! - At most one alias per identifier, at most one identifier per alias.
//! - Synthesized aliases never collide with a reserved alias or with any
//!   alias already assigned in the same pass.
//! - Assignment processes identifiers in input order, so synthesized
//!   aliases are deterministic.
//!
//! A manager lives for exactly one send or one receive transformation.

use std::collections::HashMap;

use indexmap::IndexMap;

use crate::domain::reserved::{is_valid_alias, ReservedAliases};
use crate::error::PapeError;

/// Bidirectional identifier↔alias map built for a single message.
#[derive(Debug, Clone, Default)]
pub struct AliasManager {
    /// identifier -> alias, in assignment order
    by_identifier: IndexMap<String, String>,
    /// alias -> identifier
    by_alias: HashMap<String, String>,
    next_synthesized: u64,
}

impl AliasManager {
    /// Create an empty manager.
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign aliases to `identifiers` in order.
    ///
    /// Already-assigned identifiers are skipped. Identifiers in `reserved`
    /// take their reserved alias; the rest get a synthesized one.
    ///
    /// On error nothing is committed: the manager is left as it was.
    pub fn assign_aliases<I, S>(
        &mut self,
        identifiers: I,
        reserved: &ReservedAliases,
    ) -> Result<(), PapeError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut staged = self.clone();
        for identifier in identifiers {
            staged.assign_one(identifier.as_ref(), reserved)?;
        }
        *self = staged;
        Ok(())
    }

    fn assign_one(&mut self, identifier: &str, reserved: &ReservedAliases) -> Result<(), PapeError> {
        if self.by_identifier.contains_key(identifier) {
            return Ok(());
        }

        let alias = match reserved.alias_for(identifier) {
            Some(alias) => {
                if let Some(existing) = self.by_alias.get(alias) {
                    return Err(PapeError::AliasCollision {
                        alias: alias.to_string(),
                        existing: existing.clone(),
                        requested: identifier.to_string(),
                    });
                }
                alias.to_string()
            }
            None => self.synthesize(reserved),
        };

        self.insert(identifier.to_string(), alias);
        Ok(())
    }

    /// Next decimal counter value not in use and not reserved.
    fn synthesize(&mut self, reserved: &ReservedAliases) -> String {
        loop {
            let candidate = self.next_synthesized.to_string();
            self.next_synthesized += 1;
            if !self.by_alias.contains_key(&candidate) && !reserved.reserves_alias(&candidate) {
                return candidate;
            }
        }
    }

    fn insert(&mut self, identifier: String, alias: String) {
        self.by_alias.insert(alias.clone(), identifier.clone());
        self.by_identifier.insert(identifier, alias);
    }

    /// Alias assigned to `identifier` in this pass.
    ///
    /// Querying an identifier never passed to [`Self::assign_aliases`] is a
    /// caller defect and yields [`PapeError::IdentifierNotAssigned`].
    pub fn get_alias(&self, identifier: &str) -> Result<&str, PapeError> {
        self.by_identifier
            .get(identifier)
            .map(String::as_str)
            .ok_or_else(|| PapeError::IdentifierNotAssigned {
                identifier: identifier.to_string(),
            })
    }

    /// Identifier behind `alias`.
    pub fn resolve_alias(&self, alias: &str) -> Result<&str, PapeError> {
        self.by_alias
            .get(alias)
            .map(String::as_str)
            .ok_or_else(|| PapeError::AliasNotAssigned {
                alias: alias.to_string(),
            })
    }

    /// Active aliases in assignment order.
    pub fn aliases(&self) -> impl Iterator<Item = &str> {
        self.by_identifier.values().map(String::as_str)
    }

    /// `(alias, identifier)` pairs in assignment order.
    pub fn declarations(&self) -> impl Iterator<Item = (&str, &str)> {
        self.by_identifier
            .iter()
            .map(|(identifier, alias)| (alias.as_str(), identifier.as_str()))
    }

    pub fn len(&self) -> usize {
        self.by_identifier.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_identifier.is_empty()
    }

    /// Rebuild a manager from `<prefix><alias> -> <identifier>` entries.
    ///
    /// Entries whose key does not start with `prefix` are ignored. A
    /// declaration with an unusable alias or an empty identifier, an alias
    /// declared twice, or an identifier declared under two aliases is
    /// rejected as malformed.
    pub fn discover<'a, I>(entries: I, prefix: &str) -> Result<Self, PapeError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut manager = Self::new();
        for (key, identifier) in entries {
            let Some(alias) = key.strip_prefix(prefix) else {
                continue;
            };
            if !is_valid_alias(alias) || identifier.trim().is_empty() {
                return Err(PapeError::InvalidAliasDeclaration {
                    key: key.to_string(),
                });
            }
            if manager.by_alias.contains_key(alias) {
                return Err(PapeError::DuplicateAliasDeclaration {
                    alias: alias.to_string(),
                });
            }
            if manager.by_identifier.contains_key(identifier) {
                return Err(PapeError::DuplicateIdentifierDeclaration {
                    identifier: identifier.to_string(),
                });
            }
            manager.insert(identifier.to_string(), alias.to_string());
        }
        Ok(manager)
    }
}
