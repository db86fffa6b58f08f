//! PAPE extension configuration and validation
//!
//! # Example
//!
//! ```ignore
//! use pape_request::domain::{PapeConfigBuilder, ReservedAliases};
//!
//! let config = PapeConfigBuilder::new()
//!     .reserved_auth_level_aliases(ReservedAliases::well_known().with("urn:acme:loa", "acme"))
//!     .build()?;
//! ```

use serde::{Deserialize, Serialize};

use crate::domain::reserved::ReservedAliases;
use crate::domain::wire::{AUTH_LEVEL_ALIAS_PREFIX, FIXED_KEYS, HOST_NAMESPACE_PREFIX};
use crate::error::ConfigError;

/// Extension configuration supplied by the host protocol.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PapeConfig {
    /// Well-known assurance-level identifiers and their canonical aliases
    pub reserved_auth_level_aliases: ReservedAliases,
    /// Key prefix for alias declarations
    pub alias_declaration_prefix: String,
}

impl Default for PapeConfig {
    fn default() -> Self {
        Self {
            reserved_auth_level_aliases: ReservedAliases::well_known(),
            alias_declaration_prefix: AUTH_LEVEL_ALIAS_PREFIX.to_string(),
        }
    }
}

impl PapeConfig {
    /// Create a configuration with validation
    pub fn new(
        reserved_auth_level_aliases: ReservedAliases,
        alias_declaration_prefix: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let config = Self {
            reserved_auth_level_aliases,
            alias_declaration_prefix: alias_declaration_prefix.into(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Check the declaration prefix and the reserved table.
    ///
    /// Every key under the prefix is treated as ours on send and receive, so
    /// the prefix must end in `.` and must not cover a fixed key or the
    /// host's `ns.` declarations.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let prefix = self.alias_declaration_prefix.as_str();
        if prefix.is_empty() || prefix.chars().any(char::is_whitespace) {
            return Err(ConfigError::InvalidDeclarationPrefix(prefix.to_string()));
        }

        let overlapped = FIXED_KEYS
            .into_iter()
            .chain([HOST_NAMESPACE_PREFIX])
            .find(|key| key.starts_with(prefix) || prefix.starts_with(key));
        if let Some(key) = overlapped {
            return Err(ConfigError::DeclarationPrefixOverlap {
                prefix: prefix.to_string(),
                key: key.to_string(),
            });
        }

        if prefix == "." || !prefix.ends_with('.') {
            return Err(ConfigError::InvalidDeclarationPrefix(prefix.to_string()));
        }

        self.reserved_auth_level_aliases.validate()
    }

    /// Declaration key for `alias`.
    pub fn declaration_key(&self, alias: &str) -> String {
        format!("{}{}", self.alias_declaration_prefix, alias)
    }

    /// Whether `key` is an alias declaration under this configuration.
    pub fn is_declaration_key(&self, key: &str) -> bool {
        key.starts_with(&self.alias_declaration_prefix)
    }
}

/// Fluent builder for [`PapeConfig`].
#[derive(Default)]
pub struct PapeConfigBuilder {
    reserved_auth_level_aliases: Option<ReservedAliases>,
    alias_declaration_prefix: Option<String>,
}

impl PapeConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the reserved assurance-level table
    pub fn reserved_auth_level_aliases(mut self, table: ReservedAliases) -> Self {
        self.reserved_auth_level_aliases = Some(table);
        self
    }

    /// Override the declaration key prefix
    pub fn alias_declaration_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.alias_declaration_prefix = Some(prefix.into());
        self
    }

    /// Build, filling unset fields from [`PapeConfig::default`] and validating.
    pub fn build(self) -> Result<PapeConfig, ConfigError> {
        let defaults = PapeConfig::default();
        let config = PapeConfig {
            reserved_auth_level_aliases: self
                .reserved_auth_level_aliases
                .unwrap_or(defaults.reserved_auth_level_aliases),
            alias_declaration_prefix: self
                .alias_declaration_prefix
                .unwrap_or(defaults.alias_declaration_prefix),
        };
        config.validate()?;
        Ok(config)
    }
}
