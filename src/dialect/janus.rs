//! JanusGraph decode rules.
//!
//! ```text
//! g:Vertex          {id, label, properties: {key: [g:VertexProperty, ..]}}
//! g:Edge            {id, label, inV, outV, inVLabel, outVLabel,
//!                    properties: {key: g:Property}}
//! g:VertexProperty  {id, value, label}
//! g:Property        {key, value}
//! RelationIdentifier {relationId}
//! ```
//!
//! Vertex ids are `g:Int64`; edge and vertex-property ids are
//! `janusgraph:RelationIdentifier`.

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::Value as Json;

use super::{Dialect, DialectRules};
use crate::graphson::{as_envelope, decode_sequence, decode_value, shape_of, tags};
use crate::model::{Edge, Identifier, Property, PropertyKey, PropertyMap, Value, Vertex};
use crate::{Error, Result};

pub const RULES: DialectRules = DialectRules {
    identifiers: decode_identifiers,
    vertices: decode_vertices,
    edges: decode_edges,
    properties: decode_properties,
};

pub fn decode_identifiers(data: &[u8]) -> Result<Vec<Identifier>> {
    decode_sequence(data, identifier_from_json)
}

pub fn decode_vertices(data: &[u8]) -> Result<Vec<Vertex>> {
    decode_sequence(data, vertex_from_json)
}

pub fn decode_edges(data: &[u8]) -> Result<Vec<Edge>> {
    decode_sequence(data, edge_from_json)
}

pub fn decode_properties(data: &[u8]) -> Result<Vec<Property>> {
    decode_sequence(data, property_from_json)
}

// ============================================================================
// Wire payloads
// ============================================================================

#[derive(Debug, Deserialize)]
struct VertexPayload {
    id: Json,
    label: String,
    #[serde(default)]
    properties: Option<BTreeMap<String, Vec<Json>>>,
}

#[derive(Debug, Deserialize)]
struct EdgePayload {
    id: Json,
    label: String,
    #[serde(rename = "outV")]
    out_v: Json,
    #[serde(default, rename = "outVLabel")]
    out_v_label: String,
    #[serde(rename = "inV")]
    in_v: Json,
    #[serde(default, rename = "inVLabel")]
    in_v_label: String,
    #[serde(default)]
    properties: Option<BTreeMap<String, Json>>,
}

/// Covers both `g:VertexProperty` (`label`, own `id`) and `g:Property` (`key`).
#[derive(Debug, Deserialize)]
struct PropertyPayload {
    #[serde(default)]
    id: Json,
    #[serde(default)]
    label: Option<String>,
    #[serde(default)]
    key: Option<String>,
    #[serde(default)]
    value: Json,
}

#[derive(Debug, Deserialize)]
struct RelationIdPayload {
    #[serde(rename = "relationId")]
    relation_id: String,
}

// ============================================================================
// Element decoding
// ============================================================================

/// Unwrap an element envelope, checking its tag against `expected`.
fn element<'a>(json: &'a Json, expected: &[&str]) -> Result<&'a Json> {
    let (tag, payload) = as_envelope(json).ok_or_else(|| {
        Error::MalformedEnvelope(format!(
            "expected {} envelope, got bare {}",
            expected.join(" or "),
            shape_of(json)
        ))
    })?;
    if !expected.contains(&tag) {
        return Err(Error::MalformedEnvelope(format!(
            "expected {}, got {tag}",
            expected.join(" or ")
        )));
    }
    Ok(payload)
}

pub(crate) fn identifier_from_json(json: &Json) -> Result<Identifier> {
    Ok(match decode_value(json)? {
        Value::Null => Identifier::empty(),
        Value::List(values) => Identifier::new(values),
        value => Identifier::from(value),
    })
}

fn required_label(kind: &str, label: String) -> Result<String> {
    if label.is_empty() {
        return Err(Error::MalformedEnvelope(format!("{kind} without a label")));
    }
    Ok(label)
}

fn required_identifier(kind: &str, field: &str, json: &Json) -> Result<Identifier> {
    let id = identifier_from_json(json)?;
    if id.is_empty() {
        return Err(Error::MalformedEnvelope(format!("{kind} with an empty {field}")));
    }
    Ok(id)
}

pub(crate) fn vertex_from_json(json: &Json) -> Result<Vertex> {
    vertex_from_payload(element(json, &[tags::VERTEX])?)
}

pub(crate) fn vertex_from_payload(payload: &Json) -> Result<Vertex> {
    let raw = VertexPayload::deserialize(payload)?;

    let mut properties = PropertyMap::new();
    for (key, values) in raw.properties.unwrap_or_default() {
        let decoded = values
            .iter()
            .map(property_from_json)
            .collect::<Result<Vec<_>>>()?;
        properties.insert(key, decoded);
    }

    // `id: null` is a vertex that was never written (a local draft).
    Ok(Vertex::from_parts(
        Dialect::JanusGraph,
        identifier_from_json(&raw.id)?,
        required_label(tags::VERTEX, raw.label)?,
        properties,
    ))
}

pub(crate) fn edge_from_json(json: &Json) -> Result<Edge> {
    edge_from_payload(element(json, &[tags::EDGE])?)
}

pub(crate) fn edge_from_payload(payload: &Json) -> Result<Edge> {
    let raw = EdgePayload::deserialize(payload)?;

    let mut properties = PropertyMap::new();
    for (key, value) in raw.properties.unwrap_or_default() {
        let prop = edge_property(&key, &value)?;
        properties.insert(PropertyKey::from(key), vec![prop]);
    }

    Ok(Edge::new(
        required_identifier(tags::EDGE, "id", &raw.id)?,
        required_label(tags::EDGE, raw.label)?,
        required_identifier(tags::EDGE, "outV", &raw.out_v)?,
        required_identifier(tags::EDGE, "inV", &raw.in_v)?,
    )
    .with_vertex_labels(raw.out_v_label, raw.in_v_label)
    .with_properties(properties)
    .with_dialect(Dialect::JanusGraph))
}

/// Edge properties are `g:Property` envelopes; some servers send just the
/// value under the key. Either way the result carries no identifier.
fn edge_property(key: &str, json: &Json) -> Result<Property> {
    match as_envelope(json) {
        Some((tags::PROPERTY | tags::VERTEX_PROPERTY, payload)) => {
            let prop = property_from_payload(payload, Some(key))?;
            Ok(Property::new(prop.label().to_owned(), prop.into_value()))
        }
        _ => Ok(Property::new(key, decode_value(json)?)),
    }
}

pub(crate) fn property_from_json(json: &Json) -> Result<Property> {
    property_from_payload(element(json, &[tags::VERTEX_PROPERTY, tags::PROPERTY])?, None)
}

/// Decode a property body. `fallback_label` is used when the body names
/// neither `label` nor `key` (edge property maps already know the key).
pub(crate) fn property_from_payload(payload: &Json, fallback_label: Option<&str>) -> Result<Property> {
    let raw = PropertyPayload::deserialize(payload)?;

    let label = raw
        .label
        .or(raw.key)
        .or_else(|| fallback_label.map(str::to_owned))
        .filter(|l| !l.is_empty())
        .ok_or_else(|| Error::MalformedEnvelope("property without a label".into()))?;

    let prop = Property::new(label, decode_value(&raw.value)?);
    let id = identifier_from_json(&raw.id)?;
    Ok(if id.is_empty() { prop } else { prop.with_id(id) })
}

/// The relation-id string of a `janusgraph:RelationIdentifier` payload.
pub(crate) fn relation_id(payload: &Json) -> Result<String> {
    RelationIdPayload::deserialize(payload)
        .map(|r| r.relation_id)
        .map_err(|_| {
            Error::MalformedEnvelope(format!(
                "{} expects an object with relationId, got {}",
                tags::RELATION_IDENTIFIER,
                shape_of(payload)
            ))
        })
}
