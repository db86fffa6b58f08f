//! Ports Layer
//!
//! Defines the interfaces (traits) for:
//! - Driving Ports (inbound) - hooks called by the host message framework
//! - Driven Ports (outbound) - the message bag, duration codec, config

pub mod inbound;
pub mod outbound;

pub use inbound::PapeExtensionApi;
pub use outbound::{ConfigProvider, DurationCodec, ExtensionBag};
