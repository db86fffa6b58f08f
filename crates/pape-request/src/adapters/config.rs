use crate::domain::PapeConfig;
use crate::ports::ConfigProvider;

// ============================================================================
// StaticConfigProvider - In-process config
// ============================================================================

/// Static configuration provider.
///
/// Useful for tests and for hosts that build configuration in code. For
/// file-based configuration, use `TomlConfigProvider`.
#[derive(Debug, Clone, Default)]
pub struct StaticConfigProvider {
    config: PapeConfig,
}

impl StaticConfigProvider {
    /// Create with the default configuration (well-known reserved aliases).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use the given configuration.
    #[must_use]
    pub fn with_config(mut self, config: PapeConfig) -> Self {
        self.config = config;
        self
    }
}

impl ConfigProvider for StaticConfigProvider {
    fn get_pape_config(&self) -> PapeConfig {
        self.config.clone()
    }
}

// ============================================================================
// TomlConfigProvider - File-based config (requires "config-file" feature)
// ============================================================================

#[cfg(feature = "config-file")]
mod toml_config {
    use super::*;
    use crate::domain::{PapeConfigBuilder, ReservedAliases};
    use crate::error::ConfigError;
    use serde::Deserialize;
    use std::fs;
    use std::path::Path;

    /// Configuration file structure.
    #[derive(Debug, Deserialize)]
    struct ConfigFile {
        #[serde(default)]
        auth_levels: AuthLevelsFile,
    }

    #[derive(Debug, Deserialize, Default)]
    struct AuthLevelsFile {
        declaration_prefix: Option<String>,
        /// Replaces the well-known table when present.
        reserved: Option<ReservedAliases>,
        /// Appended to the well-known table (or to `reserved`).
        #[serde(default)]
        extra_reserved: ReservedAliases,
    }

    /// TOML-based configuration provider.
    ///
    /// # Config File Format
    ///
    /// ```toml
    /// [auth_levels]
    /// declaration_prefix = "auth_level.ns."
    ///
    /// [auth_levels.extra_reserved]
    /// "urn:acme:assurance" = "acme"
    /// ```
    #[derive(Debug, Clone)]
    pub struct TomlConfigProvider {
        config: PapeConfig,
    }

    impl TomlConfigProvider {
        /// Load configuration from a TOML file.
        ///
        /// # Errors
        ///
        /// Returns error if the file cannot be read, parsed, or validated.
        pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
            let content = fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Io {
                path: path.as_ref().display().to_string(),
                error: e.to_string(),
            })?;

            Self::parse(&content)
        }

        /// Parse configuration from a TOML string.
        pub fn parse(content: &str) -> Result<Self, ConfigError> {
            let file: ConfigFile =
                toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;

            let levels = file.auth_levels;
            let mut reserved = levels.reserved.unwrap_or_else(ReservedAliases::well_known);
            for (identifier, alias) in levels.extra_reserved.iter() {
                reserved.insert(identifier, alias);
            }

            let mut builder = PapeConfigBuilder::new().reserved_auth_level_aliases(reserved);
            if let Some(prefix) = levels.declaration_prefix {
                builder = builder.alias_declaration_prefix(prefix);
            }

            Ok(Self {
                config: builder.build()?,
            })
        }
    }

    impl ConfigProvider for TomlConfigProvider {
        fn get_pape_config(&self) -> PapeConfig {
            self.config.clone()
        }
    }
}

#[cfg(feature = "config-file")]
pub use toml_config::TomlConfigProvider;
