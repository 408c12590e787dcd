//! Vertex in the property graph.

use serde::{Deserialize, Serialize};

use super::{Identifier, Property, PropertyKey, PropertyMap, Value};
use crate::dialect::Dialect;

/// A vertex as decoded from a response, or built locally for a write.
///
/// Decoded vertices are value objects: the only in-place change is
/// [`Vertex::query_refresh`](crate::navigation), which swaps the property map
/// for a freshly fetched one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vertex {
    id: Identifier,
    label: String,
    properties: PropertyMap,
    dialect: Dialect,
}

impl Vertex {
    /// Build a vertex for submission from a label and alternating key/value
    /// arguments. An odd number of arguments yields a vertex with no
    /// properties at all.
    pub fn new<I>(label: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        let args: Vec<Value> = args.into_iter().map(Into::into).collect();
        let mut properties = PropertyMap::new();

        if args.len() % 2 == 0 {
            for pair in args.chunks_exact(2) {
                let key = PropertyKey::from(&pair[0]);
                let prop = Property::new(key.to_string(), pair[1].clone());
                properties.insert(key, vec![prop]);
            }
        }

        Self {
            id: Identifier::empty(),
            label: label.into(),
            properties,
            dialect: Dialect::default(),
        }
    }

    pub(crate) fn from_parts(
        dialect: Dialect,
        id: Identifier,
        label: String,
        properties: PropertyMap,
    ) -> Self {
        Self { id, label, properties, dialect }
    }

    pub fn with_id(mut self, id: impl Into<Identifier>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_dialect(mut self, dialect: Dialect) -> Self {
        self.dialect = dialect;
        self
    }

    /// Append a property value under `key`, keeping earlier values.
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        let key = key.into();
        self.properties.push(key.as_str(), Property::new(key.clone(), value));
        self
    }

    pub fn id(&self) -> &Identifier {
        &self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    pub fn properties(&self) -> &PropertyMap {
        &self.properties
    }

    /// An independent copy of the property map.
    pub fn property_map(&self) -> PropertyMap {
        self.properties.clone()
    }

    /// The `index`-th value stored under `key`.
    pub fn property_value(&self, key: &str, index: usize) -> Option<&Value> {
        self.properties.value(key, index)
    }

    /// True for a vertex that carries no identity, e.g. one built locally
    /// and never written.
    pub fn is_nil(&self) -> bool {
        self.id.is_empty()
    }

    pub(crate) fn replace_properties(&mut self, properties: PropertyMap) {
        self.properties = properties;
    }
}
