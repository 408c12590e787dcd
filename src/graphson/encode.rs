//! GraphSON encoder for locally built elements (JanusGraph shapes).
//!
//! The inverse of the decoder for everything the decoder produces, which
//! makes it the natural way to fabricate response frames for a
//! [`ReplayClient`](crate::query::ReplayClient).

use serde_json::{json, Map, Value as Json};

use super::{tags, Envelope};
use crate::model::{Edge, Identifier, Property, PropertyMap, Value, Vertex};

fn envelope(tag: &str, value: Json) -> Json {
    Json::from(Envelope::new(tag, value))
}

pub fn encode_value(value: &Value) -> Json {
    match value {
        Value::Null => Json::Null,
        Value::Bool(b) => Json::Bool(*b),
        Value::Int(i) => envelope(tags::INT64, json!(i)),
        Value::Float(f) if f.is_nan() => envelope(tags::DOUBLE, json!("NaN")),
        Value::Float(f) if f.is_infinite() => {
            envelope(tags::DOUBLE, json!(if *f > 0.0 { "Infinity" } else { "-Infinity" }))
        }
        Value::Float(f) => envelope(tags::DOUBLE, json!(f)),
        Value::String(s) => Json::String(s.clone()),
        Value::DateTime(dt) => envelope(tags::DATE, json!(dt.timestamp_millis())),
        Value::List(items) => encode_list(items.iter().map(encode_value)),
        Value::Map(entries) => envelope(
            tags::MAP,
            Json::Array(
                entries
                    .iter()
                    .flat_map(|(k, v)| [encode_value(k), encode_value(v)])
                    .collect(),
            ),
        ),
        Value::Vertex(v) => encode_vertex(v),
        Value::Edge(e) => encode_edge(e),
        Value::Property(p) => encode_vertex_property(p),
    }
}

/// Wrap already-encoded elements in a `g:List` envelope.
pub fn encode_list(items: impl IntoIterator<Item = Json>) -> Json {
    envelope(tags::LIST, Json::Array(items.into_iter().collect()))
}

pub fn encode_identifier(id: &Identifier) -> Json {
    match id.values() {
        [] => Json::Null,
        [single] => encode_value(single),
        values => encode_list(values.iter().map(encode_value)),
    }
}

pub fn encode_vertex(vertex: &Vertex) -> Json {
    let properties: Map<String, Json> = vertex
        .properties()
        .iter()
        .map(|(key, props)| {
            let encoded = props.iter().map(encode_vertex_property).collect();
            (key.to_string(), Json::Array(encoded))
        })
        .collect();

    envelope(
        tags::VERTEX,
        json!({
            "id": encode_identifier(vertex.id()),
            "label": vertex.label(),
            "properties": properties,
        }),
    )
}

pub fn encode_vertex_property(prop: &Property) -> Json {
    let mut body = Map::new();
    if let Some(id) = prop.id() {
        body.insert("id".into(), encode_identifier(id));
    }
    body.insert("value".into(), encode_value(prop.value()));
    body.insert("label".into(), Json::String(prop.label().to_owned()));
    envelope(tags::VERTEX_PROPERTY, Json::Object(body))
}

fn encode_edge_properties(props: &PropertyMap) -> Map<String, Json> {
    props
        .iter()
        .filter_map(|(key, values)| values.first().map(|p| (key, p)))
        .map(|(key, p)| {
            let body = json!({"key": p.label(), "value": encode_value(p.value())});
            (key.to_string(), envelope(tags::PROPERTY, body))
        })
        .collect()
}

pub fn encode_edge(edge: &Edge) -> Json {
    envelope(
        tags::EDGE,
        json!({
            "id": encode_identifier(edge.id()),
            "label": edge.label(),
            "inVLabel": edge.in_vertex_label(),
            "outVLabel": edge.out_vertex_label(),
            "inV": encode_identifier(edge.in_vertex_id()),
            "outV": encode_identifier(edge.out_vertex_id()),
            "properties": encode_edge_properties(edge.properties()),
        }),
    )
}

/// One response frame holding `items` as a `g:List`.
pub fn to_frame(items: impl IntoIterator<Item = Json>) -> Vec<u8> {
    encode_list(items).to_string().into_bytes()
}
