//! Domain Layer - Pure extension logic
//!
//! This layer contains:
//! - Space-delimited list codec
//! - Alias manager (assignment and discovery)
//! - Reserved alias tables and well-known URIs
//! - The `PolicyRequest` entity
//! - Configuration
//!
//! RULES:
//! - No I/O operations
//! - No async code
//! - Pure functions where possible

pub mod alias_manager;
pub mod config;
pub mod list_codec;
pub mod policies;
pub mod policy_request;
pub mod reserved;
pub mod wire;

pub use alias_manager::AliasManager;
pub use config::{PapeConfig, PapeConfigBuilder};
pub use policies::{AssuranceLevels, AuthenticationPolicies};
pub use policy_request::PolicyRequest;
pub use reserved::ReservedAliases;
