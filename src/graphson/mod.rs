//! # GraphSON wire format
//!
//! Every typed value on the wire is an envelope:
//!
//! ```text
//! {"@type": "g:Int64", "@value": 4216}
//! {"@type": "g:List",  "@value": [ <envelope or bare value>, ... ]}
//! ```
//!
//! Envelopes nest arbitrarily, so decoding recurses instead of doing a
//! single flat pass. [`value`] decodes one value, [`list`] unwraps the
//! top-level sequence every response is shaped as, and [`encode`] goes the
//! other way for locally built elements.

pub mod value;
pub mod list;
pub mod encode;

pub use value::decode_value;
pub use list::{decode_sequence, sequence_items, unwrap_sequence};

use serde::{Deserialize, Serialize};
use serde_json::Value as Json;

/// GraphSON type tags understood by the decoder.
pub mod tags {
    pub const INT32: &str = "g:Int32";
    pub const INT64: &str = "g:Int64";
    pub const FLOAT: &str = "g:Float";
    pub const DOUBLE: &str = "g:Double";
    pub const UUID: &str = "g:UUID";
    pub const DATE: &str = "g:Date";
    pub const TIMESTAMP: &str = "g:Timestamp";
    pub const LIST: &str = "g:List";
    pub const SET: &str = "g:Set";
    pub const MAP: &str = "g:Map";
    pub const VERTEX: &str = "g:Vertex";
    pub const EDGE: &str = "g:Edge";
    pub const VERTEX_PROPERTY: &str = "g:VertexProperty";
    pub const PROPERTY: &str = "g:Property";
    pub const RELATION_IDENTIFIER: &str = "janusgraph:RelationIdentifier";
}

pub(crate) const TYPE_KEY: &str = "@type";
pub(crate) const VALUE_KEY: &str = "@value";

/// A `{"@type", "@value"}` pair with a typed payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    #[serde(rename = "@type")]
    pub tag: String,
    #[serde(rename = "@value")]
    pub value: T,
}

impl<T> Envelope<T> {
    pub fn new(tag: impl Into<String>, value: T) -> Self {
        Self { tag: tag.into(), value }
    }
}

impl From<Envelope<Json>> for Json {
    fn from(envelope: Envelope<Json>) -> Self {
        let mut obj = serde_json::Map::with_capacity(2);
        obj.insert(TYPE_KEY.to_owned(), Json::String(envelope.tag));
        obj.insert(VALUE_KEY.to_owned(), envelope.value);
        Json::Object(obj)
    }
}

/// Split `json` into tag and payload when it is exactly a two-field envelope.
pub fn as_envelope(json: &Json) -> Option<(&str, &Json)> {
    let obj = json.as_object()?;
    if obj.len() != 2 {
        return None;
    }
    let tag = obj.get(TYPE_KEY)?.as_str()?;
    let payload = obj.get(VALUE_KEY)?;
    Some((tag, payload))
}

/// Short description of a JSON node's shape, for error messages.
pub(crate) fn shape_of(json: &Json) -> &'static str {
    match json {
        Json::Null => "null",
        Json::Bool(_) => "boolean",
        Json::Number(_) => "number",
        Json::String(_) => "string",
        Json::Array(_) => "array",
        Json::Object(_) => "object",
    }
}
