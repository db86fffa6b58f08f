//! Policy Request Service
//!
//! Moves a `PolicyRequest` into and out of the shared message bag.
//!
//! ## Send
//!
//! 1. Compute every entry first (alias assignment may fail).
//! 2. Remove all keys this extension owns.
//! 3. Write `preferred_auth_policies` (always, possibly empty).
//! 4. If assurance levels are present: one declaration per alias, then
//!    `preferred_auth_level_types` as the alias list.
//! 5. Write `max_auth_age` when set.
//!
//! ## Receive
//!
//! 1. Reset the entity.
//! 2. Require `preferred_auth_policies`.
//! 3. Discover alias declarations.
//! 4. Resolve `preferred_auth_level_types` through the discovered aliases.
//! 5. Decode `max_auth_age` when present.

use tracing::{debug, warn};

use crate::adapters::WholeSecondsCodec;
use crate::domain::wire::{
    FIXED_KEYS, MAX_AUTH_AGE, PREFERRED_AUTH_LEVEL_TYPES, PREFERRED_AUTH_POLICIES,
};
use crate::domain::{list_codec, AliasManager, PapeConfig, PolicyRequest};
use crate::error::PapeError;
use crate::ports::{ConfigProvider, DurationCodec, ExtensionBag, PapeExtensionApi};

/// PAPE request transformation service
///
/// Implements `PapeExtensionApi`. Holds only immutable configuration; every
/// call builds its own `AliasManager`, so one service may serve any number
/// of messages.
#[derive(Debug, Clone)]
pub struct PolicyRequestService<D: DurationCodec = WholeSecondsCodec> {
    config: PapeConfig,
    duration_codec: D,
}

impl PolicyRequestService<WholeSecondsCodec> {
    /// Create a service with the given configuration.
    pub fn new(config: PapeConfig) -> Self {
        Self::with_duration_codec(config, WholeSecondsCodec)
    }

    /// Create a service from a configuration provider.
    pub fn from_provider(provider: &dyn ConfigProvider) -> Self {
        Self::new(provider.get_pape_config())
    }
}

impl Default for PolicyRequestService<WholeSecondsCodec> {
    fn default() -> Self {
        Self::new(PapeConfig::default())
    }
}

impl<D: DurationCodec> PolicyRequestService<D> {
    /// Create a service with a custom `max_auth_age` codec.
    pub fn with_duration_codec(config: PapeConfig, duration_codec: D) -> Self {
        Self {
            config,
            duration_codec,
        }
    }

    /// Encode `request` into `bag`, replacing any earlier output.
    pub fn to_wire(
        &self,
        request: &PolicyRequest,
        bag: &mut dyn ExtensionBag,
    ) -> Result<(), PapeError> {
        let entries = self.encode_entries(request)?;

        let removed = self.clear_owned_keys(bag);
        let written = entries.len();
        for (key, value) in entries {
            bag.insert(key, value);
        }

        debug!(
            policies = request.preferred_policies.len(),
            auth_level_types = request.preferred_auth_level_types.len(),
            removed,
            written,
            "PAPE request written"
        );
        Ok(())
    }

    /// Decode a fresh `PolicyRequest` from `bag`.
    pub fn from_wire(&self, bag: &dyn ExtensionBag) -> Result<PolicyRequest, PapeError> {
        let mut request = PolicyRequest::new();
        self.read_into(&mut request, bag)?;
        Ok(request)
    }

    /// Every `(key, value)` this request produces, in write order.
    fn encode_entries(&self, request: &PolicyRequest) -> Result<Vec<(String, String)>, PapeError> {
        let mut entries = Vec::new();

        entries.push((
            PREFERRED_AUTH_POLICIES.to_string(),
            list_codec::encode(&request.preferred_policies),
        ));

        // Empty identifiers cannot be declared; drop them like empty policies.
        let level_types: Vec<&str> = request
            .preferred_auth_level_types
            .iter()
            .map(String::as_str)
            .filter(|type_uri| !type_uri.is_empty())
            .collect();

        if !level_types.is_empty() {
            let mut aliases = AliasManager::new();
            aliases.assign_aliases(&level_types, &self.config.reserved_auth_level_aliases)?;

            for (alias, identifier) in aliases.declarations() {
                entries.push((self.config.declaration_key(alias), identifier.to_string()));
            }

            let alias_list = level_types
                .iter()
                .map(|type_uri| aliases.get_alias(type_uri))
                .collect::<Result<Vec<_>, _>>()?;
            entries.push((
                PREFERRED_AUTH_LEVEL_TYPES.to_string(),
                list_codec::encode(alias_list),
            ));
        }

        if let Some(age) = request.max_authentication_age {
            entries.push((MAX_AUTH_AGE.to_string(), self.duration_codec.encode(age)));
        }

        Ok(entries)
    }

    fn clear_owned_keys(&self, bag: &mut dyn ExtensionBag) -> usize {
        let config = &self.config;
        bag.remove_matching(&|key: &str| FIXED_KEYS.contains(&key) || config.is_declaration_key(key))
    }

    fn read_into(
        &self,
        request: &mut PolicyRequest,
        bag: &dyn ExtensionBag,
    ) -> Result<(), PapeError> {
        request.clear();

        let result = self.decode_fields(request, bag);
        if let Err(err) = &result {
            // Never hand back a half-populated entity.
            request.clear();
            warn!(error = %err, "Rejected incoming PAPE request");
        }
        result
    }

    fn decode_fields(
        &self,
        request: &mut PolicyRequest,
        bag: &dyn ExtensionBag,
    ) -> Result<(), PapeError> {
        let policies = bag
            .get(PREFERRED_AUTH_POLICIES)
            .ok_or(PapeError::MissingRequiredField {
                key: PREFERRED_AUTH_POLICIES,
            })?;
        request.preferred_policies = list_codec::decode(policies);

        let aliases = AliasManager::discover(bag.entries(), &self.config.alias_declaration_prefix)?;

        if let Some(alias_list) = bag.get(PREFERRED_AUTH_LEVEL_TYPES) {
            request.preferred_auth_level_types = list_codec::decode_borrowed(alias_list)
                .map(|alias| {
                    aliases
                        .resolve_alias(alias)
                        .map(str::to_string)
                        .map_err(|_| PapeError::UndeclaredAlias {
                            alias: alias.to_string(),
                        })
                })
                .collect::<Result<Vec<_>, _>>()?;
        }

        if let Some(age) = bag.get(MAX_AUTH_AGE) {
            request.max_authentication_age = Some(self.duration_codec.decode(age)?);
        }

        debug!(
            policies = request.preferred_policies.len(),
            auth_level_types = request.preferred_auth_level_types.len(),
            declared_aliases = aliases.len(),
            "PAPE request read"
        );
        Ok(())
    }
}

impl<D: DurationCodec> PapeExtensionApi for PolicyRequestService<D> {
    fn before_send(
        &self,
        request: &PolicyRequest,
        bag: &mut dyn ExtensionBag,
    ) -> Result<(), PapeError> {
        self.to_wire(request, bag)
    }

    fn after_receive(
        &self,
        request: &mut PolicyRequest,
        bag: &dyn ExtensionBag,
    ) -> Result<(), PapeError> {
        self.read_into(request, bag)
    }
}
