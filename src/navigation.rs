//! # Navigable element operations
//!
//! Graph navigation and mutation on decoded elements. Every operation:
//!
//! ```text
//! client given? ──no──→ Error::MissingClient      (nothing built, nothing sent)
//!      │ yes
//!      ▼
//! identifier set? ──no──→ Error::MissingIdentifier (nothing sent)
//!      │ yes
//!      ▼
//! build Traversal → client.execute_query (one round trip)
//!      → decode every frame with the element's dialect rules → result
//! ```
//!
//! The client is always an argument, never a field, so elements stay plain
//! values that can be replayed against any client. Nothing here retries;
//! client failures propagate unchanged.
//!
//! An operation that needs exactly one element and decodes none fails with
//! [`Error::EmptyResult`] rather than handing back a blank element.

use tracing::debug;

use crate::dialect::{DecodeFn, Dialect, DialectRegistry};
use crate::model::{Edge, Identifier, Value, Vertex};
use crate::query::{Arg, QueryClient, Traversal};
use crate::{Error, Result};

fn require<'c>(
    client: Option<&'c dyn QueryClient>,
    op: &'static str,
) -> Result<&'c dyn QueryClient> {
    client.ok_or(Error::MissingClient(op))
}

/// Send `query` once and decode every returned frame with `decode`.
pub(crate) async fn fetch<T>(
    client: &dyn QueryClient,
    query: &Traversal,
    decode: DecodeFn<T>,
) -> Result<Vec<T>> {
    debug!(%query, "executing traversal");
    let frames = client.execute_query(query).await?;
    let mut out = Vec::new();
    for frame in &frames {
        out.extend(decode(frame)?);
    }
    Ok(out)
}

/// Send `query` once, ignoring whatever comes back.
pub(crate) async fn send(client: &dyn QueryClient, query: &Traversal) -> Result<()> {
    debug!(%query, "executing traversal");
    client.execute_query(query).await.map(|_| ())
}

pub(crate) fn first<T>(items: Vec<T>, what: impl FnOnce() -> String) -> Result<T> {
    items.into_iter().next().ok_or_else(|| Error::EmptyResult(what()))
}

pub(crate) fn vertex_rules(dialect: Dialect) -> Result<DecodeFn<Vertex>> {
    Ok(DialectRegistry::builtin().resolve(dialect)?.vertices)
}

pub(crate) fn edge_rules(dialect: Dialect) -> Result<DecodeFn<Edge>> {
    Ok(DialectRegistry::builtin().resolve(dialect)?.edges)
}

/// Alternating key/value arguments as `property(k, v)` steps.
pub(crate) fn with_properties(mut query: Traversal, args: Vec<Value>) -> Result<Traversal> {
    if args.len() % 2 != 0 {
        return Err(Error::OddNumberOfParameters(args.len()));
    }
    let mut args = args.into_iter();
    while let (Some(key), Some(value)) = (args.next(), args.next()) {
        query = query.property(key, value);
    }
    Ok(query)
}

/// `g.V().hasId(id)`, refusing an identifier with no values: rendered it
/// would be `hasId()`, which matches nothing.
pub(crate) fn lookup(op: &'static str, id: &Identifier) -> Result<Traversal> {
    if id.is_empty() {
        return Err(Error::MissingIdentifier(op));
    }
    Ok(Traversal::new().v().has_id(id))
}

// ============================================================================
// Edge → Vertex
// ============================================================================

impl Edge {
    async fn query_endpoint(
        &self,
        client: Option<&dyn QueryClient>,
        op: &'static str,
        id: &Identifier,
    ) -> Result<Vertex> {
        let client = require(client, op)?;
        let vertices = fetch(client, &lookup(op, id)?, vertex_rules(self.dialect())?).await?;
        first(vertices, || format!("{op}: no vertex with id {id}"))
    }

    /// Fetch the vertex this edge leaves from.
    pub async fn query_out_vertex(&self, client: Option<&dyn QueryClient>) -> Result<Vertex> {
        self.query_endpoint(client, "query_out_vertex", self.out_vertex_id()).await
    }

    /// Fetch the vertex this edge points to.
    pub async fn query_in_vertex(&self, client: Option<&dyn QueryClient>) -> Result<Vertex> {
        self.query_endpoint(client, "query_in_vertex", self.in_vertex_id()).await
    }
}

// ============================================================================
// Vertex
// ============================================================================

impl Vertex {
    /// `g.V().hasId(<this vertex>)`, the root of every vertex operation.
    ///
    /// Builds the steps as-is; the query operations additionally refuse a
    /// vertex with an empty identifier before sending.
    pub fn traversal(&self) -> Traversal {
        Traversal::new().v().has_id(self.id())
    }

    fn target(&self, op: &'static str) -> Result<Traversal> {
        lookup(op, self.id())
    }

    /// Re-fetch this vertex and replace its property map with the server's.
    pub async fn query_refresh(&mut self, client: Option<&dyn QueryClient>) -> Result<()> {
        let client = require(client, "query_refresh")?;
        let query = self.target("query_refresh")?;
        let vertices = fetch(client, &query, vertex_rules(self.dialect())?).await?;
        let fresh = first(vertices, || format!("query_refresh: vertex {} no longer exists", self.id()))?;
        self.replace_properties(fresh.property_map());
        Ok(())
    }

    async fn query_edges(
        &self,
        client: Option<&dyn QueryClient>,
        op: &'static str,
        step: fn(Traversal, &[&str]) -> Traversal,
        labels: &[&str],
    ) -> Result<Vec<Edge>> {
        let client = require(client, op)?;
        let query = step(self.target(op)?, labels);
        fetch(client, &query, edge_rules(self.dialect())?).await
    }

    /// Edges in either direction, optionally restricted to `labels`.
    pub async fn query_both_edges(
        &self,
        client: Option<&dyn QueryClient>,
        labels: &[&str],
    ) -> Result<Vec<Edge>> {
        self.query_edges(client, "query_both_edges", Traversal::both_e, labels).await
    }

    /// Edges leaving this vertex, optionally restricted to `labels`.
    pub async fn query_out_edges(
        &self,
        client: Option<&dyn QueryClient>,
        labels: &[&str],
    ) -> Result<Vec<Edge>> {
        self.query_edges(client, "query_out_edges", Traversal::out_e, labels).await
    }

    /// Edges arriving at this vertex, optionally restricted to `labels`.
    pub async fn query_in_edges(
        &self,
        client: Option<&dyn QueryClient>,
        labels: &[&str],
    ) -> Result<Vec<Edge>> {
        self.query_edges(client, "query_in_edges", Traversal::in_e, labels).await
    }

    /// Add an edge `this --label--> target` with alternating key/value
    /// `properties`, and return it as created.
    pub async fn query_add_edge<I>(
        &self,
        client: Option<&dyn QueryClient>,
        label: &str,
        target: &Identifier,
        properties: I,
    ) -> Result<Edge>
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        let client = require(client, "query_add_edge")?;
        if target.is_empty() {
            return Err(Error::MissingIdentifier("query_add_edge"));
        }
        let query = self
            .target("query_add_edge")?
            .add_e(label)
            .to(Traversal::anonymous().v().has_id(target));
        let query = with_properties(query, properties.into_iter().map(Into::into).collect())?;

        let edges = fetch(client, &query, edge_rules(self.dialect())?).await?;
        first(edges, || format!("query_add_edge: no edge returned for {} -{label}-> {target}", self.id()))
    }

    /// Delete this vertex (and, server side, its edges).
    pub async fn query_drop(&self, client: Option<&dyn QueryClient>) -> Result<()> {
        let client = require(client, "query_drop")?;
        send(client, &self.target("query_drop")?.drop()).await
    }

    /// Remove every value of the named properties.
    pub async fn query_drop_properties<I>(&self, client: Option<&dyn QueryClient>, keys: I) -> Result<()>
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        let client = require(client, "query_drop_properties")?;
        let keys = keys.into_iter().map(|k| Arg::Value(k.into()));
        send(client, &self.target("query_drop_properties")?.properties(keys).drop()).await
    }

    /// Set one property value.
    pub async fn query_add_property(
        &self,
        client: Option<&dyn QueryClient>,
        key: impl Into<Value>,
        value: impl Into<Value>,
    ) -> Result<()> {
        let client = require(client, "query_add_property")?;
        let query = self.target("query_add_property")?.property(key.into(), value.into());
        send(client, &query).await
    }
}
