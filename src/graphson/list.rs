//! Sequence unwrapper — the top-level `g:List` every response is shaped as.
//!
//! A query never returns "one vertex"; it returns a list of one vertex. The
//! outer envelope only guarantees the list shape, so decoding is two passes:
//! unwrap the list, then decode each element against the expected kind.

use serde_json::Value as Json;

use super::{shape_of, VALUE_KEY};
use crate::{Error, Result};

/// Element payloads of a sequence-shaped JSON node, in wire order.
///
/// | Shape | Result |
/// |-------|--------|
/// | `null`, object without `@value`, `@value: null` | empty |
/// | `{"@value": [..]}` | the array |
/// | bare `[..]` (wrapper omitted) | the array |
/// | `@value` present but not an array, bare scalar | malformed |
pub fn sequence_items(json: &Json) -> Result<&[Json]> {
    match json {
        Json::Null => Ok(&[]),
        Json::Array(items) => Ok(items),
        Json::Object(obj) => match obj.get(VALUE_KEY) {
            None | Some(Json::Null) => Ok(&[]),
            Some(Json::Array(items)) => Ok(items),
            Some(other) => Err(Error::MalformedEnvelope(format!(
                "expected a list payload, got {}",
                shape_of(other)
            ))),
        },
        other => Err(Error::MalformedEnvelope(format!(
            "expected a list envelope, got {}",
            shape_of(other)
        ))),
    }
}

/// First pass: parse a raw frame and return its element payloads.
///
/// Empty or whitespace-only frames are an empty sequence.
pub fn unwrap_sequence(data: &[u8]) -> Result<Vec<Json>> {
    if data.iter().all(u8::is_ascii_whitespace) {
        return Ok(Vec::new());
    }
    let json: Json = serde_json::from_slice(data)?;
    Ok(sequence_items(&json)?.to_vec())
}

/// Both passes: unwrap the frame, then decode every element with `decode`.
pub fn decode_sequence<T, F>(data: &[u8], decode: F) -> Result<Vec<T>>
where
    F: Fn(&Json) -> Result<T>,
{
    unwrap_sequence(data)?.iter().map(decode).collect()
}
