//! A single named value on a vertex or edge.

use serde::{Deserialize, Serialize};

use super::{Identifier, Value};

/// One property value.
///
/// Vertex properties carry their own identifier (a JanusGraph relation id);
/// edge properties do not.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    label: String,
    value: Value,
    id: Option<Identifier>,
}

impl Property {
    pub fn new(label: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            id: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<Identifier>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn id(&self) -> Option<&Identifier> {
        self.id.as_ref()
    }

    pub fn into_value(self) -> Value {
        self.value
    }
}
