//! Custom token claims

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const ROLE_CLAIM: &str = "role";
pub const USERNAME_CLAIM: &str = "username";

/// Key/value assertions to embed in a token, in no particular order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Claims(HashMap<String, Value>);

impl Claims {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a claim, returning the previous value under the same key
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    /// Builder-style insert
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn into_inner(self) -> HashMap<String, Value> {
        self.0
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Claims {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}
