//! # PAPE Request
//!
//! Request side of the Provider Authentication Policy Extension (PAPE):
//! an RP's preferred authentication policies, preferred assurance-level
//! types, and maximum authentication age, carried inside a protocol
//! message's flat key-value bag.
//!
//! ## Architecture
//!
//! This crate follows Hexagonal Architecture (Ports & Adapters):
//!
//! - **Domain Layer** (`domain/`): Pure logic, no I/O
//!   - `PolicyRequest`: The request entity (set-based equality)
//!   - `AliasManager`: Short aliases for assurance-level type URIs
//!   - `list_codec`: Space-delimited token lists
//!   - `ReservedAliases`, `PapeConfig`: Configuration
//!
//! - **Ports Layer** (`ports/`): Trait definitions
//!   - `PapeExtensionApi`: Driving port (before-send / after-receive)
//!   - `ExtensionBag`, `DurationCodec`, `ConfigProvider`: Driven ports
//!
//! - **Service Layer** (`service/`): `PolicyRequestService`
//!
//! - **Adapters Layer** (`adapters/`): `MessageArgs` bag, whole-seconds
//!   duration codec, static and TOML config providers
//!
//! ## Wire Format
//!
//! ```text
//! preferred_auth_policies    = "<policy uri> <policy uri> ..."   (required)
//! auth_level.ns.<alias>      = "<assurance level type uri>"      (zero or more)
//! preferred_auth_level_types = "<alias> <alias> ..."             (optional)
//! max_auth_age               = "<seconds>"                       (optional)
//! ```
//!
//! ## Invariants
//!
//! - **INVARIANT-1**: Decoded lists never contain empty entries.
//! - **INVARIANT-2**: An alias never maps to two identifiers within one message.
//! - **INVARIANT-3**: A failed send leaves the bag unchanged.
//! - **INVARIANT-4**: Receiving never fabricates an identifier for an
//!   undeclared alias.
//!
//! ## Usage Example
//!
//! ```ignore
//! use pape_request::{AuthenticationPolicies, PolicyRequest, PolicyRequestService};
//! use shared_types::MessageArgs;
//! use std::time::Duration;
//!
//! let service = PolicyRequestService::default();
//! let request = PolicyRequest::new()
//!     .with_policy(AuthenticationPolicies::PHISHING_RESISTANT)
//!     .with_max_auth_age(Duration::from_secs(600));
//!
//! let mut args = MessageArgs::new();
//! service.to_wire(&request, &mut args)?;
//!
//! let received = service.from_wire(&args)?;
//! assert_eq!(received, request);
//! ```

pub mod adapters;
pub mod domain;
pub mod error;
pub mod ports;
pub mod service;

// Re-exports for convenience
pub use domain::{
    AliasManager, AssuranceLevels, AuthenticationPolicies, PapeConfig, PapeConfigBuilder,
    PolicyRequest, ReservedAliases,
};
pub use error::{ConfigError, ErrorKind, PapeError};
pub use ports::{ConfigProvider, DurationCodec, ExtensionBag, PapeExtensionApi};
pub use service::PolicyRequestService;

pub use adapters::{StaticConfigProvider, WholeSecondsCodec};
#[cfg(feature = "config-file")]
pub use adapters::TomlConfigProvider;
