//! PropertyMap — the multi-valued key → properties store on vertices and edges.

use std::fmt;
use std::hash::{Hash, Hasher};

use hashbrown::{Equivalent, HashMap};
use serde::{Deserialize, Serialize};

use super::{Property, Value};

/// Property key. Gremlin keys are usually strings, but the wire allows
/// integer keys inside `g:Map`, so both are kept distinct.
///
/// `Hash` is written by hand so a `String` key hashes like its `str`,
/// which lets `PropertyMap::get("name")` look up without allocating.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyKey {
    Int(i64),
    String(String),
}

impl PropertyKey {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            PropertyKey::String(s) => Some(s),
            PropertyKey::Int(_) => None,
        }
    }
}

impl Hash for PropertyKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            PropertyKey::String(s) => s.as_str().hash(state),
            PropertyKey::Int(i) => i.hash(state),
        }
    }
}

impl Equivalent<PropertyKey> for str {
    fn equivalent(&self, key: &PropertyKey) -> bool {
        key.as_str() == Some(self)
    }
}

impl From<&str> for PropertyKey { fn from(k: &str) -> Self { PropertyKey::String(k.to_owned()) } }
impl From<String> for PropertyKey { fn from(k: String) -> Self { PropertyKey::String(k) } }
impl From<i64> for PropertyKey { fn from(k: i64) -> Self { PropertyKey::Int(k) } }

/// Strings and integers keep their type; anything else keys by its display form.
impl From<&Value> for PropertyKey {
    fn from(v: &Value) -> Self {
        match v {
            Value::String(s) => PropertyKey::String(s.clone()),
            Value::Int(i) => PropertyKey::Int(*i),
            other => PropertyKey::String(other.to_string()),
        }
    }
}

impl From<&PropertyKey> for Value {
    fn from(k: &PropertyKey) -> Self {
        match k {
            PropertyKey::String(s) => Value::String(s.clone()),
            PropertyKey::Int(i) => Value::Int(*i),
        }
    }
}

impl fmt::Display for PropertyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyKey::String(s) => write!(f, "{s}"),
            PropertyKey::Int(i) => write!(f, "{i}"),
        }
    }
}

/// Key → ordered properties. Values under one key keep wire order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PropertyMap {
    entries: HashMap<PropertyKey, Vec<Property>>,
}

impl PropertyMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All properties stored under `key`, in wire order.
    pub fn get<Q>(&self, key: &Q) -> Option<&[Property]>
    where
        Q: ?Sized + Hash + Equivalent<PropertyKey>,
    {
        self.entries.get(key).map(Vec::as_slice)
    }

    /// The `index`-th value stored under `key`.
    pub fn value<Q>(&self, key: &Q, index: usize) -> Option<&Value>
    where
        Q: ?Sized + Hash + Equivalent<PropertyKey>,
    {
        self.get(key)?.get(index).map(Property::value)
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        Q: ?Sized + Hash + Equivalent<PropertyKey>,
    {
        self.entries.contains_key(key)
    }

    /// Replace everything under `key`.
    pub fn insert(&mut self, key: impl Into<PropertyKey>, props: Vec<Property>) -> Option<Vec<Property>> {
        self.entries.insert(key.into(), props)
    }

    /// Append one more value under `key`.
    pub fn push(&mut self, key: impl Into<PropertyKey>, prop: Property) {
        self.entries.entry(key.into()).or_default().push(prop);
    }

    pub fn remove<Q>(&mut self, key: &Q) -> Option<Vec<Property>>
    where
        Q: ?Sized + Hash + Equivalent<PropertyKey>,
    {
        self.entries.remove(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &PropertyKey> {
        self.entries.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&PropertyKey, &[Property])> {
        self.entries.iter().map(|(k, v)| (k, v.as_slice()))
    }
}

impl FromIterator<(PropertyKey, Vec<Property>)> for PropertyMap {
    fn from_iter<I: IntoIterator<Item = (PropertyKey, Vec<Property>)>>(iter: I) -> Self {
        Self { entries: iter.into_iter().collect() }
    }
}

impl IntoIterator for PropertyMap {
    type Item = (PropertyKey, Vec<Property>);
    type IntoIter = hashbrown::hash_map::IntoIter<PropertyKey, Vec<Property>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_by_str() {
        let mut props = PropertyMap::new();
        props.push("name", Property::new("name", "alice"));
        assert!(props.contains_key("name"));
        assert_eq!(props.value("name", 0), Some(&Value::from("alice")));
        assert_eq!(props.value("name", 1), None);
        assert!(props.get("age").is_none());
    }

    #[test]
    fn test_int_and_string_keys_are_distinct() {
        let mut props = PropertyMap::new();
        props.push(1i64, Property::new("1", 10));
        props.push("1", Property::new("1", 20));
        assert_eq!(props.len(), 2);
        assert_eq!(props.value(&PropertyKey::Int(1), 0), Some(&Value::Int(10)));
        assert_eq!(props.value("1", 0), Some(&Value::Int(20)));
    }

    #[test]
    fn test_push_keeps_order() {
        let mut props = PropertyMap::new();
        props.push("alias", Property::new("alias", "a"));
        props.push("alias", Property::new("alias", "b"));
        let labels: Vec<_> = props.get("alias").unwrap().iter().map(|p| p.value().clone()).collect();
        assert_eq!(labels, vec![Value::from("a"), Value::from("b")]);
    }

    #[test]
    fn test_clone_is_independent() {
        let mut original = PropertyMap::new();
        original.push("name", Property::new("name", "alice"));
        let mut copy = original.clone();
        copy.remove("name");
        assert!(original.contains_key("name"));
        assert!(copy.is_empty());
    }
}
