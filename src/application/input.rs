//! Command input decoding.

use std::collections::BTreeMap;

use super::error::CommandError;

/// String-keyed parameters for one command invocation.
///
/// Built once from the optional JSON argument and never mutated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Input(BTreeMap<String, String>);

impl Input {
    /// Decode the optional JSON argument.
    ///
    /// An absent argument and a JSON `null` both yield an empty input. Anything
    /// other than an object of string values is rejected.
    pub fn decode(raw: Option<&str>) -> Result<Self, CommandError> {
        let Some(raw) = raw else {
            return Ok(Self::default());
        };

        let map: Option<BTreeMap<String, String>> =
            serde_json::from_str(raw).map_err(|e| CommandError::Decode(e.to_string()))?;

        Ok(Self(map.unwrap_or_default()))
    }

    /// Look up a value.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Look up a value the handler cannot run without.
    pub fn require(&self, key: &'static str) -> Result<&str, CommandError> {
        self.get(key).ok_or(CommandError::MissingField(key))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Keys present, in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Input {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
