//! `ExtensionBag` adapters for concrete bag types
//!
//! `MessageArgs` is the host message's own bag and preserves insertion
//! order. `BTreeMap` is provided for hosts that keep arguments sorted.

use std::collections::BTreeMap;

use shared_types::MessageArgs;

use crate::ports::ExtensionBag;

impl ExtensionBag for MessageArgs {
    fn get(&self, key: &str) -> Option<&str> {
        MessageArgs::get(self, key)
    }

    fn insert(&mut self, key: String, value: String) {
        MessageArgs::insert(self, key, value);
    }

    fn remove(&mut self, key: &str) -> Option<String> {
        MessageArgs::remove(self, key)
    }

    fn entries(&self) -> Box<dyn Iterator<Item = (&str, &str)> + '_> {
        Box::new(self.iter())
    }

    fn contains_key(&self, key: &str) -> bool {
        MessageArgs::contains_key(self, key)
    }

    fn remove_matching(&mut self, matches: &dyn Fn(&str) -> bool) -> usize {
        let before = self.len();
        self.retain(|key, _| !matches(key));
        before - self.len()
    }
}

impl ExtensionBag for BTreeMap<String, String> {
    fn get(&self, key: &str) -> Option<&str> {
        BTreeMap::get(self, key).map(String::as_str)
    }

    fn insert(&mut self, key: String, value: String) {
        BTreeMap::insert(self, key, value);
    }

    fn remove(&mut self, key: &str) -> Option<String> {
        BTreeMap::remove(self, key)
    }

    fn entries(&self) -> Box<dyn Iterator<Item = (&str, &str)> + '_> {
        Box::new(self.iter().map(|(k, v)| (k.as_str(), v.as_str())))
    }

    fn remove_matching(&mut self, matches: &dyn Fn(&str) -> bool) -> usize {
        let before = self.len();
        self.retain(|key, _| !matches(key));
        before - self.len()
    }
}
