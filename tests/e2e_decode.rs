//! End-to-end decoding tests: raw GraphSON frames in, typed elements out.
//!
//! Frames below are shaped like real JanusGraph 0.x responses (GraphSON 3).

use grammes::graphson::encode::{encode_edge, encode_vertex, to_frame};
use grammes::{
    decode, decode_edges, decode_identifiers, decode_properties, decode_vertices, Dialect, Edge,
    ElementKind, Error, Identifier, Value, Vertex,
};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

const PERSON: &str = r#"{
  "@type": "g:List",
  "@value": [{
    "@type": "g:Vertex",
    "@value": {
      "id": {"@type": "g:Int64", "@value": 4216},
      "label": "person",
      "properties": {
        "name": [{
          "@type": "g:VertexProperty",
          "@value": {
            "id": {"@type": "janusgraph:RelationIdentifier", "@value": {"relationId": "16p-394-sl"}},
            "value": "marko",
            "label": "name"
          }
        }],
        "age": [{
          "@type": "g:VertexProperty",
          "@value": {
            "id": {"@type": "janusgraph:RelationIdentifier", "@value": {"relationId": "1l8-394-2dh"}},
            "value": {"@type": "g:Int32", "@value": 29},
            "label": "age"
          }
        }]
      }
    }
  }]
}"#;

const KNOWS: &str = r#"{
  "@type": "g:List",
  "@value": [{
    "@type": "g:Edge",
    "@value": {
      "id": {"@type": "janusgraph:RelationIdentifier", "@value": {"relationId": "4r9-394-b2t-3bk"}},
      "label": "knows",
      "inVLabel": "person",
      "outVLabel": "person",
      "inV": {"@type": "g:Int64", "@value": 4256},
      "outV": {"@type": "g:Int64", "@value": 4216},
      "properties": {
        "weight": {"@type": "g:Property", "@value": {"key": "weight", "value": {"@type": "g:Double", "@value": 0.5}}}
      }
    }
  }]
}"#;

// ============================================================================
// 1. Vertices
// ============================================================================

#[test]
fn test_decode_vertex() {
    let vertices = decode_vertices(Dialect::JanusGraph, PERSON.as_bytes()).unwrap();
    assert_eq!(vertices.len(), 1);

    let v = &vertices[0];
    assert_eq!(v.id(), &Identifier::from(4216));
    assert_eq!(v.id().as_int(), Some(4216));
    assert_eq!(v.label(), "person");
    assert_eq!(v.property_value("name", 0), Some(&Value::from("marko")));
    assert_eq!(v.property_value("age", 0), Some(&Value::Int(29)));

    let name = &v.properties().get("name").unwrap()[0];
    assert_eq!(name.id(), Some(&Identifier::from("16p-394-sl")));
}

#[test]
fn test_round_trip_client_built_vertex() {
    let built = Vertex::new("person", ["name", "alice"]);
    let frame = to_frame([encode_vertex(&built)]);

    let decoded = decode_vertices(Dialect::JanusGraph, &frame).unwrap();
    assert_eq!(decoded.len(), 1);
    assert_eq!(decoded[0].label(), "person");
    assert_eq!(decoded[0].properties().len(), 1);
    assert_eq!(decoded[0].property_value("name", 0), Some(&Value::from("alice")));
    assert!(decoded[0].id().is_empty());
}

#[test]
fn test_multi_valued_property_keeps_wire_order() {
    let frame = br#"{"@type":"g:List","@value":[{"@type":"g:Vertex","@value":{
        "id":{"@type":"g:Int64","@value":1},"label":"person",
        "properties":{"nick":[
          {"@type":"g:VertexProperty","@value":{"id":"a","value":"bob","label":"nick"}},
          {"@type":"g:VertexProperty","@value":{"id":"b","value":"bobby","label":"nick"}}
        ]}}}]}"#;
    let v = &decode_vertices("janusgraph", frame).unwrap()[0];

    let nicks: Vec<_> = v
        .properties()
        .get("nick")
        .unwrap()
        .iter()
        .map(|p| p.value().clone())
        .collect();
    assert_eq!(nicks, vec![Value::from("bob"), Value::from("bobby")]);
}

#[test]
fn test_odd_constructor_args_give_empty_map() {
    let v = Vertex::new("person", ["name", "alice", "age"]);
    assert_eq!(v.label(), "person");
    assert!(v.properties().is_empty());
}

// ============================================================================
// 2. Edges and properties
// ============================================================================

#[test]
fn test_decode_edge() {
    let edges = decode_edges(Dialect::JanusGraph, KNOWS.as_bytes()).unwrap();
    assert_eq!(edges.len(), 1);

    let e = &edges[0];
    assert_eq!(e.id(), &Identifier::from("4r9-394-b2t-3bk"));
    assert_eq!(e.label(), "knows");
    assert_eq!(e.out_vertex_id(), &Identifier::from(4216));
    assert_eq!(e.in_vertex_id(), &Identifier::from(4256));
    assert_eq!(e.out_vertex_label(), "person");
    assert_eq!(e.property("weight"), Some(&Value::Float(0.5)));
}

#[test]
fn test_edge_survives_encode_decode() {
    let edge = decode_edges(Dialect::JanusGraph, KNOWS.as_bytes()).unwrap().remove(0);
    let again = decode_edges(Dialect::JanusGraph, &to_frame([encode_edge(&edge)])).unwrap();
    assert_eq!(again, vec![edge]);
}

#[test]
fn test_decode_properties_stream() {
    let frame = br#"{"@type":"g:List","@value":[
        {"@type":"g:VertexProperty","@value":{"id":"p1","value":"marko","label":"name"}},
        {"@type":"g:Property","@value":{"key":"since","value":{"@type":"g:Int32","@value":2009}}}
    ]}"#;
    let props = decode_properties(Dialect::JanusGraph, frame).unwrap();
    assert_eq!(props.len(), 2);
    assert_eq!(props[0].label(), "name");
    assert_eq!(props[1].label(), "since");
    assert_eq!(props[1].value(), &Value::Int(2009));
    assert_eq!(props[1].id(), None);
}

#[test]
fn test_scalar_property_types() {
    let frame = br#"{"@type":"g:List","@value":[
        {"@type":"g:Property","@value":{"key":"weight","value":{"@type":"g:Double","@value":0.25}}},
        {"@type":"g:Property","@value":{"key":"active","value":true}}
    ]}"#;
    let props = decode_properties(Dialect::JanusGraph, frame).unwrap();
    assert_eq!(props[0].value().as_float(), Some(0.25));
    assert_eq!(props[1].value().as_bool(), Some(true));
}

#[test]
fn test_elements_without_identity_are_malformed() {
    let frames: [&[u8]; 4] = [
        br#"{"@type":"g:List","@value":[{"@type":"g:Vertex","@value":{}}]}"#,
        br#"{"@type":"g:List","@value":[{"@type":"g:Vertex","@value":{"id":{"@type":"g:Int64","@value":1}}}]}"#,
        br#"{"@type":"g:List","@value":[{"@type":"g:Edge","@value":{"label":"knows"}}]}"#,
        br#"{"@type":"g:List","@value":[{"@type":"g:Edge","@value":{"id":"e1","label":"knows","outV":1}}]}"#,
    ];
    for (i, frame) in frames.into_iter().enumerate() {
        let err = if i < 2 {
            decode_vertices(Dialect::JanusGraph, frame).map(|_| ()).unwrap_err()
        } else {
            decode_edges(Dialect::JanusGraph, frame).map(|_| ()).unwrap_err()
        };
        assert!(matches!(err, Error::MalformedEnvelope(_)), "frame {i}");
    }
}

// ============================================================================
// 3. Sequence shapes
// ============================================================================

#[test]
fn test_empty_sequences() {
    let frames: [&[u8]; 6] = [
        b"",
        b"  ",
        b"null",
        b"{}",
        br#"{"@type":"g:List"}"#,
        br#"{"@type":"g:List","@value":null}"#,
    ];
    for frame in frames {
        assert!(decode_vertices(Dialect::JanusGraph, frame).unwrap().is_empty());
    }
}

#[test]
fn test_non_list_value_is_malformed() {
    let err = decode_identifiers(Dialect::JanusGraph, br#"{"@type":"g:List","@value":{"a":1}}"#).unwrap_err();
    assert!(matches!(err, Error::MalformedEnvelope(_)));

    let err = decode_vertices(Dialect::JanusGraph, b"{not json").unwrap_err();
    assert!(matches!(err, Error::MalformedEnvelope(_)));
}

// ============================================================================
// 4. Dialect dispatch
// ============================================================================

#[test]
fn test_cosmos_is_unsupported_for_every_kind() {
    for kind in ElementKind::ALL {
        let err = decode(Dialect::Cosmos, kind, PERSON.as_bytes()).unwrap_err();
        assert!(matches!(err, Error::UnsupportedDialect(Dialect::Cosmos)), "{kind}");
    }
}

#[test]
fn test_unknown_dialect_is_named() {
    let err = decode_vertices("neptune", PERSON.as_bytes()).unwrap_err();
    assert!(matches!(&err, Error::UnknownDialect(name) if name == "neptune"));
    assert!(err.to_string().contains("neptune"));

    let err = decode_edges(9u8, KNOWS.as_bytes()).unwrap_err();
    assert!(matches!(err, Error::UnknownDialect(code) if code == "9"));
}

#[test]
fn test_generic_dispatch_matches_typed_entry_point() {
    let elements = decode(1u8, ElementKind::Vertex, PERSON.as_bytes()).unwrap();
    assert_eq!(elements.kind(), ElementKind::Vertex);
    assert_eq!(elements.len(), 1);
}

#[test]
fn test_edge_sequence_keeps_order() {
    let edges: Vec<_> = ["a", "b", "c"]
        .into_iter()
        .enumerate()
        .map(|(i, id)| encode_edge(&Edge::new(id, "knows", 1, i as i64 + 2)))
        .collect();

    let decoded = decode_edges(Dialect::JanusGraph, &to_frame(edges)).unwrap();
    let ids: Vec<_> = decoded.iter().map(|e| e.id().to_string()).collect();
    let targets: Vec<_> = decoded.iter().map(|e| e.in_vertex_id().as_int()).collect();
    assert_eq!(ids, vec!["a", "b", "c"]);
    assert_eq!(targets, vec![Some(2), Some(3), Some(4)]);
}

#[test]
fn test_property_sequence_keeps_order() {
    let frame = br#"{"@type":"g:List","@value":[
        {"@type":"g:VertexProperty","@value":{"id":"p3","value":"c","label":"third"}},
        {"@type":"g:VertexProperty","@value":{"id":"p1","value":"a","label":"first"}},
        {"@type":"g:Property","@value":{"key":"second","value":"b"}}
    ]}"#;
    let props = decode_properties(Dialect::JanusGraph, frame).unwrap();
    let labels: Vec<_> = props.iter().map(|p| p.label()).collect();
    assert_eq!(labels, vec!["third", "first", "second"]);
}

proptest! {
    #[test]
    fn prop_identifier_order_preserved(ids in proptest::collection::vec(any::<i64>(), 0..16)) {
        let items: Vec<String> = ids
            .iter()
            .map(|id| format!(r#"{{"@type":"g:Int64","@value":{id}}}"#))
            .collect();
        let frame = format!(r#"{{"@type":"g:List","@value":[{}]}}"#, items.join(","));

        let decoded = decode_identifiers(Dialect::JanusGraph, frame.as_bytes()).unwrap();
        let ints: Vec<_> = decoded.iter().map(|id| id.as_int()).collect();
        prop_assert_eq!(ints, ids.into_iter().map(Some).collect::<Vec<_>>());
    }
}
