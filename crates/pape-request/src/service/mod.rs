//! Service Layer
//!
//! Orchestrates the domain types against the driven ports.

pub mod policy_request_service;

pub use policy_request_service::PolicyRequestService;
