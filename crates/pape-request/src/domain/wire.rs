//! Wire keys owned by the PAPE request extension
//!
//! Keys are relative to the extension's namespace inside the message bag.
//! The namespace prefix itself belongs to the outer protocol.

/// Type URI the host uses to register the PAPE extension.
pub const PAPE_TYPE_URI: &str = "http://specs.openid.net/extensions/pape/1.0";

/// Required. Space-delimited policy URIs in preference order.
pub const PREFERRED_AUTH_POLICIES: &str = "preferred_auth_policies";

/// Optional. Space-delimited assurance-level aliases in preference order.
pub const PREFERRED_AUTH_LEVEL_TYPES: &str = "preferred_auth_level_types";

/// Optional. Non-negative integer seconds.
pub const MAX_AUTH_AGE: &str = "max_auth_age";

/// Default prefix for `<prefix><alias> -> <type uri>` declarations.
pub const AUTH_LEVEL_ALIAS_PREFIX: &str = "auth_level.ns.";

/// Host-owned namespace declarations (`ns.<alias>`) live under this prefix.
pub const HOST_NAMESPACE_PREFIX: &str = "ns.";

/// Fixed (non-declaration) keys written by this extension.
pub const FIXED_KEYS: [&str; 3] = [PREFERRED_AUTH_POLICIES, PREFERRED_AUTH_LEVEL_TYPES, MAX_AUTH_AGE];
