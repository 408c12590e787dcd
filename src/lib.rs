//! # grammes — GraphSON decoding and navigable graph elements
//!
//! Decodes Gremlin Server responses into typed `Vertex`, `Edge`, `Property`
//! and `Identifier` values, and lets those values issue follow-up traversals
//! through a caller-supplied [`QueryClient`].
//!
//! ## Design Principles
//!
//! 1. **Decoding is a pure function**: raw frame bytes in, typed elements out
//! 2. **Elements never own a connection**: every query-issuing operation takes
//!    the client as an argument
//! 3. **Dialects are strategy tables**: `DialectRules` per backend, resolved
//!    from a `DialectRegistry` at call time
//! 4. **Closed value type**: property payloads are a `Value`, never an untyped any
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use grammes::{decode_vertices, Dialect, QueryClient};
//!
//! # async fn example(client: &dyn QueryClient) -> grammes::Result<()> {
//! let frames = client.execute_string_query("g.V().hasLabel('person')").await?;
//! for frame in &frames {
//!     for vertex in decode_vertices(Dialect::JanusGraph, frame)? {
//!         let edges = vertex.query_out_edges(Some(client), &["knows"]).await?;
//!         println!("{} has {} outgoing knows-edges", vertex.id(), edges.len());
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Dialects
//!
//! | Dialect | Tag | Status |
//! |---------|-----|--------|
//! | JanusGraph | `"janusgraph"` / `1` | full decode rules |
//! | Cosmos DB | `"cosmos"` / `2` | recognized, no decode rules yet |

// ============================================================================
// Modules
// ============================================================================

pub mod model;
pub mod graphson;
pub mod dialect;
pub mod query;
pub mod navigation;
pub mod manager;

// ============================================================================
// Re-exports: Model
// ============================================================================

pub use model::{
    Edge, Identifier, Property, PropertyKey, PropertyMap, Value, Vertex,
};

// ============================================================================
// Re-exports: Decoding
// ============================================================================

pub use dialect::{
    decode, decode_edges, decode_identifiers, decode_properties, decode_vertices,
    Dialect, DialectRegistry, DialectRules, ElementKind, Elements,
};

// ============================================================================
// Re-exports: Queries
// ============================================================================

pub use query::{Frames, QueryClient, ReplayClient, Traversal};
pub use manager::GraphManager;

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Malformed envelope: {0}")]
    MalformedEnvelope(String),

    #[error("Dialect not implemented: {0}")]
    UnsupportedDialect(Dialect),

    #[error("Unknown database: {0}")]
    UnknownDialect(String),

    #[error("Empty result: {0}")]
    EmptyResult(String),

    #[error("{0}: no query client given")]
    MissingClient(&'static str),

    #[error("{0}: element has no identifier")]
    MissingIdentifier(&'static str),

    #[error("Odd number of key/value parameters: {0}")]
    OddNumberOfParameters(usize),

    #[error("Invalid count result: {0}")]
    InvalidCount(String),

    #[error("Query error: {0}")]
    Query(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::MalformedEnvelope(err.to_string())
    }
}

impl From<std::convert::Infallible> for Error {
    fn from(never: std::convert::Infallible) -> Self {
        match never {}
    }
}

pub type Result<T> = std::result::Result<T, Error>;
