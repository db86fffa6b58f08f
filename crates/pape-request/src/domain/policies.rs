//! Well-known PAPE policy and assurance-level identifiers

/// Authentication policy URIs an RP may list in `preferred_auth_policies`.
pub struct AuthenticationPolicies;

impl AuthenticationPolicies {
    /// Authentication method resistant to phishing attacks.
    pub const PHISHING_RESISTANT: &'static str =
        "http://schemas.openid.net/pape/policies/2007/06/phishing-resistant";

    /// At least two distinct authentication factors.
    pub const MULTI_FACTOR: &'static str =
        "http://schemas.openid.net/pape/policies/2007/06/multi-factor";

    /// Multi-factor where one factor is a physical device.
    pub const MULTI_FACTOR_PHYSICAL: &'static str =
        "http://schemas.openid.net/pape/policies/2007/06/multi-factor-physical";

    /// No policy was met. Only meaningful in responses.
    pub const NONE: &'static str = "http://schemas.openid.net/pape/policies/2007/06/none";

    /// US government ICAM trust level 1.
    pub const US_GOVERNMENT_TRUST_LEVEL_1: &'static str =
        "http://www.idmanagement.gov/schema/2009/05/icam/openid-trust-level1.pdf";

    /// Directed identifiers that do not correlate across RPs.
    pub const PRIVATE_PERSONAL_IDENTIFIER: &'static str =
        "http://www.idmanagement.gov/schema/2009/05/icam/private-personal-identifier";

    /// The OP must not release personally identifying information.
    pub const NO_PERSONALLY_IDENTIFIABLE_INFORMATION: &'static str =
        "http://www.idmanagement.gov/schema/2009/05/icam/no-pii.pdf";
}

/// Assurance-level type URIs for `preferred_auth_level_types`.
pub struct AssuranceLevels;

impl AssuranceLevels {
    /// NIST SP800-63 electronic authentication levels.
    pub const NIST_TYPE_URI: &'static str =
        "http://csrc.nist.gov/publications/nistpubs/800-63/SP800-63V1_0_2.pdf";

    /// Canonical alias for [`Self::NIST_TYPE_URI`].
    pub const NIST_ALIAS: &'static str = "nist";
}
