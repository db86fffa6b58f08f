//! Outbound Ports (Driven Ports)
//!
//! Collaborators the extension needs from the host protocol: the shared
//! message bag, the duration↔seconds transform, and configuration.

use std::time::Duration;

use crate::domain::PapeConfig;
use crate::error::PapeError;

/// String key-value bag shared by the whole message (Driven Port)
///
/// The extension reads and writes only the keys it owns and must leave
/// every other entry untouched.
pub trait ExtensionBag {
    /// Value stored under `key`.
    fn get(&self, key: &str) -> Option<&str>;

    /// Insert or overwrite `key`.
    fn insert(&mut self, key: String, value: String);

    /// Remove `key`, returning its value.
    fn remove(&mut self, key: &str) -> Option<String>;

    /// All `(key, value)` entries. Order is the bag's own key order.
    fn entries(&self) -> Box<dyn Iterator<Item = (&str, &str)> + '_>;

    /// Whether `key` is present, even with an empty value.
    fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Remove every entry whose key satisfies `matches`. Returns how many.
    fn remove_matching(&mut self, matches: &dyn Fn(&str) -> bool) -> usize {
        let doomed: Vec<String> = self
            .entries()
            .filter(|(key, _)| matches(key))
            .map(|(key, _)| key.to_string())
            .collect();
        for key in &doomed {
            self.remove(key);
        }
        doomed.len()
    }
}

/// Encodes `max_auth_age` on the wire (Driven Port)
pub trait DurationCodec {
    fn encode(&self, duration: Duration) -> String;

    /// Decode a wire value. Invalid input is a malformed-message error.
    fn decode(&self, value: &str) -> Result<Duration, PapeError>;
}

/// Supplies extension configuration (Driven Port)
pub trait ConfigProvider {
    fn get_pape_config(&self) -> PapeConfig;
}
