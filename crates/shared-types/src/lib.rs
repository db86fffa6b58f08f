//! # Shared Types Crate
//!
//! Message-level types shared by the outer protocol and its extensions.
//!
//! ## Design Principles
//!
//! - **One bag per message**: The outer message and every extension read and
//!   write the same `MessageArgs`.
//! - **Namespaced ownership**: Each extension touches only the keys it owns.

pub mod message_args;

pub use message_args::MessageArgs;
