//! End-to-end tests for the graph-wide helpers in `GraphManager`.

use grammes::graphson::encode::{encode_vertex, to_frame};
use grammes::{Dialect, Error, GraphManager, Identifier, ReplayClient, Value, Vertex};
use pretty_assertions::assert_eq;

#[tokio::test]
async fn test_vertex_count() {
    let client = ReplayClient::new();
    client.push_frame(br#"{"@type":"g:List","@value":[{"@type":"g:Int64","@value":808}]}"#.to_vec());

    let count = GraphManager::new(Dialect::JanusGraph).vertex_count(&client).await.unwrap();

    assert_eq!(count, 808);
    assert_eq!(client.queries(), vec!["g.V().count()"]);
}

#[tokio::test]
async fn test_vertex_count_empty_list() {
    let client = ReplayClient::new();
    client.push_frame(br#"{"@type":"g:List","@value":[]}"#.to_vec());

    let err = GraphManager::default().vertex_count(&client).await.unwrap_err();
    assert!(matches!(err, Error::EmptyResult(_)));
}

#[tokio::test]
async fn test_vertex_count_out_of_range() {
    let client = ReplayClient::new();
    client.push_frame(br#"{"@type":"g:List","@value":[{"@type":"g:Double","@value":1e20}]}"#.to_vec());

    let err = GraphManager::default().vertex_count(&client).await.unwrap_err();
    assert!(matches!(err, Error::InvalidCount(_)));
}

#[tokio::test]
async fn test_vertex_count_whole_double() {
    let client = ReplayClient::new();
    client.push_frame(br#"{"@type":"g:List","@value":[{"@type":"g:Double","@value":12.0}]}"#.to_vec());

    let count = GraphManager::default().vertex_count(&client).await.unwrap();
    assert_eq!(count, 12);
}

#[tokio::test]
async fn test_add_vertex_returns_stored_vertex() {
    let client = ReplayClient::new();
    let draft = Vertex::new("person", ["name", "alice"]);
    client.push_frame(to_frame([encode_vertex(&draft.clone().with_id(4096))]));

    let stored = GraphManager::default().add_vertex(&client, &draft).await.unwrap();

    assert_eq!(stored.id(), &Identifier::from(4096));
    assert_eq!(stored.property_value("name", 0), Some(&Value::from("alice")));
    assert_eq!(client.queries(), vec!["g.addV('person').property('name', 'alice')"]);
}

#[tokio::test]
async fn test_lookups() {
    let client = ReplayClient::new();
    let alice = Vertex::new("person", ["name", "alice"]).with_id(1);
    let bob = Vertex::new("person", ["name", "bob"]).with_id(2);
    client.push_frame(to_frame([encode_vertex(&alice)]));
    client.push_frame(to_frame([encode_vertex(&alice), encode_vertex(&bob)]));
    client.push_frame(to_frame(Vec::new()));

    let manager = GraphManager::default();
    let found = manager.vertex_by_id(&client, &Identifier::from(1)).await.unwrap();
    let people = manager.vertices_by_label(&client, "person").await.unwrap();
    let missing = manager.vertex_by_id(&client, &Identifier::from(3)).await.unwrap_err();

    assert_eq!(found, alice);
    assert_eq!(people, vec![alice, bob]);
    assert!(matches!(missing, Error::EmptyResult(_)));
    assert_eq!(
        client.queries(),
        vec!["g.V().hasId(1)", "g.V().hasLabel('person')", "g.V().hasId(3)"]
    );
}

#[tokio::test]
async fn test_writes_render_expected_gremlin() {
    let client = ReplayClient::new();
    let manager = GraphManager::default();

    manager
        .set_vertex_property(&client, &Identifier::from(7), [Value::from("age"), Value::Int(30), Value::from("nick"), Value::from("al")])
        .await
        .unwrap();
    manager.drop_all(&client).await.unwrap();

    assert_eq!(
        client.queries(),
        vec![
            "g.V().hasId(7).property('age', 30).property('nick', 'al')",
            "g.V().drop()",
        ]
    );
}
