//! Graph-wide helpers that are not tied to one element.
//!
//! `GraphManager` carries only the dialect used to decode responses; the
//! client is passed to every call, same as the element operations.

use tracing::{debug, warn};

use crate::dialect::{Dialect, DialectRegistry};
use crate::model::{Identifier, Value, Vertex};
use crate::navigation::{fetch, first, lookup, send, vertex_rules, with_properties};
use crate::query::{QueryClient, Traversal};
use crate::{Error, Result};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GraphManager {
    dialect: Dialect,
}

impl GraphManager {
    pub fn new(dialect: Dialect) -> Self {
        Self { dialect }
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// `g.V().count()`.
    pub async fn vertex_count(&self, client: &dyn QueryClient) -> Result<i64> {
        let rules = DialectRegistry::builtin().resolve(self.dialect)?;
        let counts = fetch(client, &Traversal::new().v().count(), rules.identifiers).await?;
        let count = first(counts, || "vertex count returned nothing".to_owned())?;
        count.as_int().ok_or_else(|| {
            warn!(%count, "vertex count is not an integer");
            Error::InvalidCount(count.to_string())
        })
    }

    /// Drop every vertex, and with them every edge.
    pub async fn drop_all(&self, client: &dyn QueryClient) -> Result<()> {
        send(client, &Traversal::new().v().drop()).await
    }

    /// Set alternating key/value `args` on the vertex with `id`.
    pub async fn set_vertex_property<I>(
        &self,
        client: &dyn QueryClient,
        id: &Identifier,
        args: I,
    ) -> Result<()>
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        let query = with_properties(
            lookup("set_vertex_property", id)?,
            args.into_iter().map(Into::into).collect(),
        )?;
        send(client, &query).await
    }

    /// Write a client-built vertex and return it as stored, with the
    /// server-assigned identifier.
    pub async fn add_vertex(&self, client: &dyn QueryClient, vertex: &Vertex) -> Result<Vertex> {
        let mut query = Traversal::new().add_v(vertex.label());
        for (key, props) in vertex.properties().iter() {
            for prop in props {
                query = query.property(Value::from(key), prop.value().clone());
            }
        }
        debug!(label = vertex.label(), "adding vertex");
        let created = fetch(client, &query, vertex_rules(self.dialect)?).await?;
        first(created, || format!("no vertex returned for addV('{}')", vertex.label()))
    }

    /// `g.V().hasId(id)`.
    pub async fn vertex_by_id(&self, client: &dyn QueryClient, id: &Identifier) -> Result<Vertex> {
        let query = lookup("vertex_by_id", id)?;
        let found = fetch(client, &query, vertex_rules(self.dialect)?).await?;
        first(found, || format!("no vertex with id {id}"))
    }

    /// `g.V().hasLabel(label)`.
    pub async fn vertices_by_label(&self, client: &dyn QueryClient, label: &str) -> Result<Vec<Vertex>> {
        let query = Traversal::new().v().has_label(label);
        fetch(client, &query, vertex_rules(self.dialect)?).await
    }
}
