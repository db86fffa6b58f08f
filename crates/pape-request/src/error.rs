//! Error types for the PAPE request extension

use thiserror::Error;

/// Errors raised while encoding or decoding a PAPE policy request.
///
/// Every variant aborts only the current transformation (one send or one
/// receive). Use [`PapeError::kind`] to decide how the host message reacts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PapeError {
    #[error("Alias collision: '{alias}' already assigned to {existing}, cannot assign to {requested}")]
    AliasCollision {
        alias: String,
        existing: String,
        requested: String,
    },

    #[error("No alias assigned to identifier: {identifier}")]
    IdentifierNotAssigned { identifier: String },

    #[error("Alias not assigned: {alias}")]
    AliasNotAssigned { alias: String },

    #[error("Missing required field: {key}")]
    MissingRequiredField { key: &'static str },

    #[error("Alias '{alias}' referenced without a matching declaration")]
    UndeclaredAlias { alias: String },

    #[error("Invalid alias declaration: {key}")]
    InvalidAliasDeclaration { key: String },

    #[error("Alias declared more than once: {alias}")]
    DuplicateAliasDeclaration { alias: String },

    #[error("Identifier declared under more than one alias: {identifier}")]
    DuplicateIdentifierDeclaration { identifier: String },

    #[error("Invalid max_auth_age: '{value}' (expected non-negative integer seconds)")]
    InvalidMaxAuthAge { value: String },

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Coarse classification of a [`PapeError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Two identifiers competed for one alias in a single assignment pass.
    Collision,
    /// Lookup of an identifier or alias never assigned (caller defect).
    NotFound,
    /// A required wire key was absent on receive.
    MissingRequiredField,
    /// The incoming message is structurally invalid.
    MalformedMessage,
    /// Local configuration is invalid.
    Config,
}

impl PapeError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::AliasCollision { .. } => ErrorKind::Collision,
            Self::IdentifierNotAssigned { .. } | Self::AliasNotAssigned { .. } => {
                ErrorKind::NotFound
            }
            Self::MissingRequiredField { .. } => ErrorKind::MissingRequiredField,
            Self::UndeclaredAlias { .. }
            | Self::InvalidAliasDeclaration { .. }
            | Self::DuplicateAliasDeclaration { .. }
            | Self::DuplicateIdentifierDeclaration { .. }
            | Self::InvalidMaxAuthAge { .. } => ErrorKind::MalformedMessage,
            Self::Config(_) => ErrorKind::Config,
        }
    }

    /// Whether the error describes a bad incoming message rather than a local fault.
    pub fn is_malformed_message(&self) -> bool {
        matches!(
            self.kind(),
            ErrorKind::MalformedMessage | ErrorKind::MissingRequiredField
        )
    }
}

/// Errors from loading or validating extension configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Invalid reserved alias '{alias}' for {identifier}")]
    InvalidReservedAlias { identifier: String, alias: String },

    #[error("Reserved alias '{alias}' mapped to both {first} and {second}")]
    DuplicateReservedAlias {
        alias: String,
        first: String,
        second: String,
    },

    #[error("Invalid alias declaration prefix: '{0}'")]
    InvalidDeclarationPrefix(String),

    #[error("Alias declaration prefix '{prefix}' overlaps key '{key}'")]
    DeclarationPrefixOverlap { prefix: String, key: String },

    #[error("Failed to read {path}: {error}")]
    Io { path: String, error: String },

    #[error("Failed to parse config: {0}")]
    Parse(String),
}
