//! Adapters Layer
//!
//! Concrete implementations of the driven ports:
//! - `ExtensionBag` for `MessageArgs` and `BTreeMap`
//! - `WholeSecondsCodec` for `max_auth_age`
//! - Static and TOML configuration providers

pub mod config;
pub mod duration;
pub mod message_args;

pub use config::StaticConfigProvider;
#[cfg(feature = "config-file")]
pub use config::TomlConfigProvider;
pub use duration::WholeSecondsCodec;
