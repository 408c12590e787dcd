//! Value envelope decoder — one GraphSON value into a [`Value`].

use chrono::DateTime;
use serde_json::Value as Json;
use tracing::trace;

use super::{as_envelope, list, shape_of, tags};
use crate::dialect::janus;
use crate::model::Value;
use crate::{Error, Result};

/// Decode one (possibly enveloped) GraphSON value.
///
/// Unknown tags are not an error: their payload is decoded as if it had
/// arrived untagged, so the caller sees the raw shape instead of a typed
/// object.
pub fn decode_value(json: &Json) -> Result<Value> {
    match as_envelope(json) {
        Some((tag, payload)) => decode_tagged(tag, payload),
        None => decode_untagged(json),
    }
}

fn decode_untagged(json: &Json) -> Result<Value> {
    Ok(match json {
        Json::Null => Value::Null,
        Json::Bool(b) => Value::Bool(*b),
        Json::Number(n) => number(n),
        Json::String(s) => Value::String(s.clone()),
        Json::Array(items) => Value::List(items.iter().map(decode_value).collect::<Result<_>>()?),
        Json::Object(map) => Value::Map(
            map.iter()
                .map(|(k, v)| Ok((Value::String(k.clone()), decode_value(v)?)))
                .collect::<Result<_>>()?,
        ),
    })
}

fn decode_tagged(tag: &str, payload: &Json) -> Result<Value> {
    match tag {
        tags::INT32 | tags::INT64 => payload
            .as_i64()
            .map(Value::Int)
            .ok_or_else(|| unexpected(tag, "an integer", payload)),
        tags::FLOAT | tags::DOUBLE => float(payload)
            .map(Value::Float)
            .ok_or_else(|| unexpected(tag, "a number", payload)),
        tags::UUID => payload
            .as_str()
            .map(Value::from)
            .ok_or_else(|| unexpected(tag, "a string", payload)),
        tags::DATE | tags::TIMESTAMP => payload
            .as_i64()
            .and_then(DateTime::from_timestamp_millis)
            .map(Value::DateTime)
            .ok_or_else(|| unexpected(tag, "epoch milliseconds", payload)),
        tags::LIST | tags::SET => {
            let items = list::sequence_items(payload)?;
            Ok(Value::List(items.iter().map(decode_value).collect::<Result<_>>()?))
        }
        tags::MAP => decode_map(payload),
        tags::VERTEX => Ok(Value::from(janus::vertex_from_payload(payload)?)),
        tags::EDGE => Ok(Value::from(janus::edge_from_payload(payload)?)),
        tags::VERTEX_PROPERTY | tags::PROPERTY => {
            Ok(Value::from(janus::property_from_payload(payload, None)?))
        }
        tags::RELATION_IDENTIFIER => janus::relation_id(payload).map(Value::String),
        _ => {
            trace!(tag, "unrecognized GraphSON tag, decoding payload untagged");
            decode_value(payload)
        }
    }
}

/// `g:Map` payloads are a flat `[k1, v1, k2, v2, ...]` array.
fn decode_map(payload: &Json) -> Result<Value> {
    let items = payload
        .as_array()
        .ok_or_else(|| unexpected(tags::MAP, "an array", payload))?;
    if items.len() % 2 != 0 {
        return Err(Error::MalformedEnvelope(format!(
            "{} payload has {} entries, expected key/value pairs",
            tags::MAP,
            items.len()
        )));
    }
    let entries = items
        .chunks_exact(2)
        .map(|pair| Ok((decode_value(&pair[0])?, decode_value(&pair[1])?)))
        .collect::<Result<_>>()?;
    Ok(Value::Map(entries))
}

fn number(n: &serde_json::Number) -> Value {
    match n.as_i64() {
        Some(i) => Value::Int(i),
        None => Value::Float(n.as_f64().unwrap_or(f64::NAN)),
    }
}

/// GraphSON writes non-finite doubles as strings.
fn float(payload: &Json) -> Option<f64> {
    match payload {
        Json::Number(n) => n.as_f64(),
        Json::String(s) => match s.as_str() {
            "NaN" => Some(f64::NAN),
            "Infinity" => Some(f64::INFINITY),
            "-Infinity" => Some(f64::NEG_INFINITY),
            _ => None,
        },
        _ => None,
    }
}

fn unexpected(tag: &str, expected: &str, got: &Json) -> Error {
    Error::MalformedEnvelope(format!("{tag} expects {expected}, got {}", shape_of(got)))
}
