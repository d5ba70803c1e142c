//! Ordered map of MicroYaml pairs.
//!
//! [`MicroYamlMap`] wraps an [`IndexMap`] so that pairs keep the order they
//! were read in. It implements `Extend<(String, String)>`, so a reader can
//! copy pairs straight into it, and serializes with serde as a plain map.
//!
//! A key seen twice keeps its first position and takes the later value.
//!
//! ## Examples
//!
//! ```rust
//! use micro_yaml::{load_str, MicroYamlMap, ReaderOptions};
//!
//! let mut map = MicroYamlMap::new();
//! load_str("b: 1\na: 2\nb: 3\n", ReaderOptions::new(), &mut map).unwrap();
//!
//! let keys: Vec<_> = map.keys().map(String::as_str).collect();
//! assert_eq!(keys, ["b", "a"]);
//! assert_eq!(map.get("b"), Some("3"));
//! ```

use indexmap::IndexMap;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;

/// An insertion-ordered map of string keys to string values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MicroYamlMap(IndexMap<String, String>);

impl MicroYamlMap {
    /// Creates an empty `MicroYamlMap`.
    #[must_use]
    pub fn new() -> Self {
        MicroYamlMap(IndexMap::new())
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        MicroYamlMap(IndexMap::with_capacity(capacity))
    }

    /// Inserts a pair, returning the previous value for `key` if there was one.
    ///
    /// ```rust
    /// use micro_yaml::MicroYamlMap;
    ///
    /// let mut map = MicroYamlMap::new();
    /// assert_eq!(map.insert("key", "one"), None);
    /// assert_eq!(map.insert("key", "two"), Some("one".to_string()));
    /// ```
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(key.into(), value.into())
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the keys, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, String> {
        self.0.keys()
    }

    /// Returns an iterator over the values, in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, String, String> {
        self.0.values()
    }

    /// Returns an iterator over the pairs, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, String> {
        self.0.iter()
    }
}

impl From<HashMap<String, String>> for MicroYamlMap {
    fn from(map: HashMap<String, String>) -> Self {
        MicroYamlMap(map.into_iter().collect())
    }
}

impl From<MicroYamlMap> for HashMap<String, String> {
    fn from(map: MicroYamlMap) -> Self {
        map.0.into_iter().collect()
    }
}

impl Extend<(String, String)> for MicroYamlMap {
    fn extend<T: IntoIterator<Item = (String, String)>>(&mut self, iter: T) {
        self.0.extend(iter);
    }
}

impl FromIterator<(String, String)> for MicroYamlMap {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        MicroYamlMap(IndexMap::from_iter(iter))
    }
}

impl IntoIterator for MicroYamlMap {
    type Item = (String, String);
    type IntoIter = indexmap::map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a MicroYamlMap {
    type Item = (&'a String, &'a String);
    type IntoIter = indexmap::map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Serialize for MicroYamlMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for MicroYamlMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct MapVisitor;

        impl<'de> Visitor<'de> for MapVisitor {
            type Value = MicroYamlMap;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map of strings")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> std::result::Result<Self::Value, A::Error> {
                let mut map = MicroYamlMap::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((key, value)) = access.next_entry::<String, String>()? {
                    map.insert(key, value);
                }
                Ok(map)
            }
        }

        deserializer.deserialize_map(MapVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_key_keeps_position() {
        let map: MicroYamlMap = [("a", "1"), ("b", "2"), ("a", "3")]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        assert_eq!(map.len(), 2);
        let pairs: Vec<_> = map.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect();
        assert_eq!(pairs, [("a", "3"), ("b", "2")]);
    }

    #[test]
    fn test_hashmap_conversions() {
        let mut source = HashMap::new();
        source.insert("k".to_string(), "v".to_string());
        let map = MicroYamlMap::from(source.clone());
        assert_eq!(map.get("k"), Some("v"));
        assert!(!map.contains_key("missing"));
        assert_eq!(HashMap::from(map), source);
    }

    #[test]
    fn test_serde_json_preserves_order() {
        let mut map = MicroYamlMap::new();
        map.insert("zeta", "last letter");
        map.insert("alpha", "first letter");

        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(json, r#"{"zeta":"last letter","alpha":"first letter"}"#);

        let back: MicroYamlMap = serde_json::from_str(&json).unwrap();
        assert_eq!(back, map);
    }

    #[test]
    fn test_deserialize_rejects_non_strings() {
        assert!(serde_json::from_str::<MicroYamlMap>(r#"{"k": 1}"#).is_err());
        assert!(serde_json::from_str::<MicroYamlMap>("[]").is_err());
    }
}
