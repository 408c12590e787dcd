//! Edge in the property graph.

use serde::{Deserialize, Serialize};

use super::{Identifier, Property, PropertyMap, Value};
use crate::dialect::Dialect;

/// A directed edge: `outVertex --label--> inVertex`.
///
/// Endpoints are kept as identifier + label only. Fetching the endpoint
/// vertex is a query (`query_out_vertex` / `query_in_vertex`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    id: Identifier,
    label: String,
    out_v: Identifier,
    out_v_label: String,
    in_v: Identifier,
    in_v_label: String,
    /// Single-valued; edge properties carry no identifier.
    properties: PropertyMap,
    dialect: Dialect,
}

impl Edge {
    pub fn new(
        id: impl Into<Identifier>,
        label: impl Into<String>,
        out_v: impl Into<Identifier>,
        in_v: impl Into<Identifier>,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            out_v: out_v.into(),
            out_v_label: String::new(),
            in_v: in_v.into(),
            in_v_label: String::new(),
            properties: PropertyMap::new(),
            dialect: Dialect::default(),
        }
    }

    pub fn with_vertex_labels(mut self, out_label: impl Into<String>, in_label: impl Into<String>) -> Self {
        self.out_v_label = out_label.into();
        self.in_v_label = in_label.into();
        self
    }

    /// Set the property under `key`, replacing any previous value.
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        let key = key.into();
        self.properties.insert(key.as_str(), vec![Property::new(key.clone(), value)]);
        self
    }

    pub fn with_properties(mut self, properties: PropertyMap) -> Self {
        self.properties = properties;
        self
    }

    pub fn with_dialect(mut self, dialect: Dialect) -> Self {
        self.dialect = dialect;
        self
    }

    pub fn id(&self) -> &Identifier {
        &self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn out_vertex_id(&self) -> &Identifier {
        &self.out_v
    }

    pub fn out_vertex_label(&self) -> &str {
        &self.out_v_label
    }

    pub fn in_vertex_id(&self) -> &Identifier {
        &self.in_v
    }

    pub fn in_vertex_label(&self) -> &str {
        &self.in_v_label
    }

    pub fn properties(&self) -> &PropertyMap {
        &self.properties
    }

    /// The value stored under `key`.
    pub fn property(&self, key: &str) -> Option<&Value> {
        self.properties.value(key, 0)
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// The endpoint opposite `from`, if `from` is one of the endpoints.
    pub fn other_vertex_id(&self, from: &Identifier) -> Option<&Identifier> {
        if *from == self.out_v { Some(&self.in_v) }
        else if *from == self.in_v { Some(&self.out_v) }
        else { None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_and_accessors() {
        let e = Edge::new("4r9-38o", "knows", 1, 2)
            .with_vertex_labels("person", "software")
            .with_property("weight", 0.5)
            .with_property("weight", 0.75);
        assert_eq!(e.label(), "knows");
        assert_eq!(e.out_vertex_id().as_int(), Some(1));
        assert_eq!(e.in_vertex_label(), "software");
        assert_eq!(e.property("weight"), Some(&Value::Float(0.75)));
        assert_eq!(e.properties().get("weight").map(<[_]>::len), Some(1));
    }

    #[test]
    fn test_other_vertex_id() {
        let e = Edge::new("r", "knows", 1, 2);
        assert_eq!(e.other_vertex_id(&Identifier::from(1)), Some(&Identifier::from(2)));
        assert_eq!(e.other_vertex_id(&Identifier::from(2)), Some(&Identifier::from(1)));
        assert_eq!(e.other_vertex_id(&Identifier::from(3)), None);
    }
}
