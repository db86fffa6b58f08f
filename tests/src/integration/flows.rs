//! # Integration Test Flows
//!
//! An RP encodes a `PolicyRequest` into a message bag that also carries the
//! outer message's own keys and another extension's keys. The OP decodes it
//! with an independently configured service.
//!
//! ## Flows Tested:
//!
//! 1. **RP → OP**: before-send on one service, after-receive on another
//! 2. **Shared bag**: foreign keys and foreign aliases are left untouched
//! 3. **Config**: OP loads its reserved table from a TOML file
//! 4. **Rejection**: malformed incoming requests surface typed errors
//! 5. **Isolation**: concurrent transformations share no mutable state

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;
    use std::io::Write;
    use std::sync::{Arc, Once};
    use std::thread;
    use std::time::Duration;

    use proptest::prelude::*;

    use pape_request::domain::wire::PAPE_TYPE_URI;
    use pape_request::{
        AssuranceLevels, AuthenticationPolicies, ConfigProvider, ErrorKind, ExtensionBag,
        PapeConfig, PapeExtensionApi, PolicyRequest, PolicyRequestService, ReservedAliases,
        TomlConfigProvider,
    };
    use shared_types::MessageArgs;

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    static TRACING: Once = Once::new();

    fn init_tracing() {
        TRACING.call_once(|| {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
                .with_test_writer()
                .try_init();
        });
    }

    /// Outer message keys plus another extension's aliased keys.
    fn host_message() -> MessageArgs {
        [
            ("mode", "checkid_setup"),
            ("claimed_id", "https://alice.example.com/"),
            ("ns.pape", PAPE_TYPE_URI),
            ("ns.ax", "http://openid.net/srv/ax/1.0"),
            ("ax.type.0", "http://axschema.org/contact/email"),
            ("ax.required", "0"),
        ]
        .into_iter()
        .collect()
    }

    fn rp_request() -> PolicyRequest {
        PolicyRequest::new()
            .with_policy(AuthenticationPolicies::PHISHING_RESISTANT)
            .with_policy(AuthenticationPolicies::MULTI_FACTOR_PHYSICAL)
            .with_auth_level_type("urn:acme:assurance")
            .with_auth_level_type(AssuranceLevels::NIST_TYPE_URI)
            .with_max_auth_age(Duration::from_secs(600))
    }

    // =============================================================================
    // RP → OP
    // =============================================================================

    /// The OP reconstructs exactly what the RP sent, in order.
    #[test]
    fn test_rp_to_op_round_trip() {
        init_tracing();
        let rp = PolicyRequestService::default();
        let op = PolicyRequestService::default();
        let sent = rp_request();
        let mut message = host_message();

        rp.before_send(&sent, &mut message).unwrap();

        let mut received = PolicyRequest::new();
        op.after_receive(&mut received, &message).unwrap();

        assert_eq!(received, sent);
        assert_eq!(received.preferred_policies, sent.preferred_policies);
        assert_eq!(
            received.preferred_auth_level_types,
            sent.preferred_auth_level_types
        );
    }

    /// Wire view of the flow above.
    #[test]
    fn test_rp_wire_layout() {
        let rp = PolicyRequestService::default();
        let mut message = host_message();

        rp.to_wire(&rp_request(), &mut message).unwrap();

        assert_eq!(
            message.get("preferred_auth_policies"),
            Some(
                "http://schemas.openid.net/pape/policies/2007/06/phishing-resistant \
                 http://schemas.openid.net/pape/policies/2007/06/multi-factor-physical"
            )
        );
        assert_eq!(message.get("auth_level.ns.0"), Some("urn:acme:assurance"));
        assert_eq!(
            message.get("auth_level.ns.nist"),
            Some(AssuranceLevels::NIST_TYPE_URI)
        );
        assert_eq!(message.get("preferred_auth_level_types"), Some("0 nist"));
        assert_eq!(message.get("max_auth_age"), Some("600"));
    }

    /// Reserved aliases are a sender concern: an OP with an empty table still
    /// decodes `nist` from its declaration.
    #[test]
    fn test_op_without_reserved_table_decodes_reserved_alias() {
        let rp = PolicyRequestService::default();
        let op = PolicyRequestService::new(
            PapeConfig::new(ReservedAliases::empty(), "auth_level.ns.").unwrap(),
        );
        let mut message = host_message();

        rp.to_wire(&rp_request(), &mut message).unwrap();
        let received = op.from_wire(&message).unwrap();

        assert_eq!(
            received.preferred_auth_level_types,
            vec!["urn:acme:assurance", AssuranceLevels::NIST_TYPE_URI]
        );
    }

    /// Message bags can travel as JSON between processes.
    #[test]
    fn test_round_trip_through_json_transport() {
        let service = PolicyRequestService::default();
        let mut message = host_message();
        service.to_wire(&rp_request(), &mut message).unwrap();

        let json = serde_json::to_string(&message).unwrap();
        let arrived: MessageArgs = serde_json::from_str(&json).unwrap();

        assert_eq!(service.from_wire(&arrived).unwrap(), rp_request());
    }

    // =============================================================================
    // SHARED BAG
    // =============================================================================

    /// Another extension's alias `0` and its keys are independent of ours.
    #[test]
    fn test_foreign_extension_keys_untouched() {
        let service = PolicyRequestService::default();
        let original = host_message();
        let mut message = original.clone();

        service.to_wire(&rp_request(), &mut message).unwrap();
        service.to_wire(&PolicyRequest::new(), &mut message).unwrap();

        for (key, value) in original.iter() {
            assert_eq!(message.get(key), Some(value), "foreign key {key} changed");
        }
        let mut expected: Vec<(&str, &str)> = original.iter().collect();
        expected.push(("preferred_auth_policies", ""));
        assert_eq!(message.iter().collect::<Vec<_>>(), expected);
    }

    /// A key-sorted bag reorders keys but not the alias list.
    #[test]
    fn test_sorted_bag_preserves_preference_order() {
        let service = PolicyRequestService::default();
        let sent = PolicyRequest::new()
            .with_auth_level_type("urn:z")
            .with_auth_level_type("urn:a")
            .with_auth_level_type("urn:m");
        let mut bag: BTreeMap<String, String> = BTreeMap::new();

        service.to_wire(&sent, &mut bag).unwrap();
        let received = service.from_wire(&bag).unwrap();

        assert_eq!(received.preferred_auth_level_types, vec!["urn:z", "urn:a", "urn:m"]);
    }

    // =============================================================================
    // CONFIG
    // =============================================================================

    #[test]
    fn test_op_loads_reserved_table_from_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
            [auth_levels.extra_reserved]
            "urn:acme:assurance" = "acme"
            "#
        )
        .unwrap();

        let provider = TomlConfigProvider::load(file.path()).unwrap();
        let rp = PolicyRequestService::from_provider(&provider);
        assert_eq!(
            provider
                .get_pape_config()
                .reserved_auth_level_aliases
                .alias_for("urn:acme:assurance"),
            Some("acme")
        );

        let mut message = MessageArgs::new();
        rp.to_wire(&rp_request(), &mut message).unwrap();

        assert_eq!(message.get("auth_level.ns.acme"), Some("urn:acme:assurance"));
        assert_eq!(message.get("preferred_auth_level_types"), Some("acme nist"));
        assert!(!message.contains_key("auth_level.ns.0"));
    }

    // =============================================================================
    // REJECTION
    // =============================================================================

    /// The host decides what to do with a malformed extension; here it drops
    /// the extension and keeps processing the message.
    #[test]
    fn test_host_can_ignore_malformed_extension() {
        init_tracing();
        let service = PolicyRequestService::default();
        let mut message = host_message();
        message.insert("preferred_auth_policies", "");
        message.insert("preferred_auth_level_types", "x");

        let outcome = service.from_wire(&message);
        let err = outcome.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::MalformedMessage);
        assert!(err.is_malformed_message());
        assert_eq!(message.get("mode"), Some("checkid_setup"));
    }

    #[test]
    fn test_missing_required_key_rejected() {
        let service = PolicyRequestService::default();
        let mut message = host_message();
        message.insert("auth_level.ns.nist", AssuranceLevels::NIST_TYPE_URI);
        message.insert("preferred_auth_level_types", "nist");

        let err = service.from_wire(&message).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::MissingRequiredField);
    }

    #[test]
    fn test_malformed_declaration_rejected_without_level_list() {
        let service = PolicyRequestService::default();
        let mut message = host_message();
        message.insert("preferred_auth_policies", "");
        message.insert("auth_level.ns.", "urn:a");

        let err = service.from_wire(&message).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::MalformedMessage);
    }

    // =============================================================================
    // ISOLATION
    // =============================================================================

    /// One service, many threads, one bag and one entity per thread.
    #[test]
    fn test_concurrent_transformations_are_isolated() {
        let service = Arc::new(PolicyRequestService::default());

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let service = Arc::clone(&service);
                thread::spawn(move || {
                    let sent = PolicyRequest::new()
                        .with_policy(format!("urn:policy:{i}"))
                        .with_auth_level_type(format!("urn:level:{i}"))
                        .with_max_auth_age(Duration::from_secs(i));
                    let mut bag = MessageArgs::new();
                    service.to_wire(&sent, &mut bag).unwrap();
                    (sent, service.from_wire(&bag).unwrap(), bag)
                })
            })
            .collect();

        for handle in handles {
            let (sent, received, bag) = handle.join().unwrap();
            assert_eq!(received, sent);
            assert_eq!(bag.get("preferred_auth_level_types"), Some("0"));
        }
    }

    // =============================================================================
    // PROPERTIES
    // =============================================================================

    proptest! {
        #[test]
        fn prop_round_trip_through_sorted_bag(
            policies in prop::collection::vec("urn:p:[a-z0-9]{1,10}", 0..6),
            levels in prop::collection::vec("urn:l:[a-z0-9]{1,10}", 0..6),
        ) {
            let service = PolicyRequestService::default();
            let sent = PolicyRequest {
                max_authentication_age: None,
                preferred_policies: policies,
                preferred_auth_level_types: levels,
            };
            let mut bag: BTreeMap<String, String> = BTreeMap::new();

            service.to_wire(&sent, &mut bag).unwrap();
            let declarations = bag.keys().filter(|k| k.starts_with("auth_level.ns.")).count();
            let received = service.from_wire(&bag).unwrap();

            prop_assert_eq!(
                declarations,
                sent.preferred_auth_level_types
                    .iter()
                    .collect::<std::collections::HashSet<_>>()
                    .len()
            );
            prop_assert_eq!(&received.preferred_auth_level_types, &sent.preferred_auth_level_types);
            prop_assert_eq!(received, sent);
        }
    }

    #[test]
    fn test_bag_trait_object_usage() {
        let mut bag = MessageArgs::new();
        let dyn_bag: &mut dyn ExtensionBag = &mut bag;
        PolicyRequestService::default()
            .before_send(&PolicyRequest::new(), dyn_bag)
            .unwrap();

        assert!(bag.contains_key("preferred_auth_policies"));
    }
}
