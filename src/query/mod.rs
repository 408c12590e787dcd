//! # Query execution seam
//!
//! The crate never opens a connection. Whatever talks to Gremlin Server
//! implements [`QueryClient`]; elements and the manager hand queries to it
//! and decode the frames it returns.

pub mod traversal;
pub mod replay;

use async_trait::async_trait;

use crate::Result;

pub use replay::ReplayClient;
pub use traversal::{Arg, Step, Traversal};

/// Raw response frames, one undecoded GraphSON payload each.
pub type Frames = Vec<Vec<u8>>;

/// Sends a query and returns the raw response frames.
///
/// Implementations own transport, retries and timeouts. The crate calls
/// each method once per operation and propagates any error unchanged.
#[async_trait]
pub trait QueryClient: Send + Sync {
    /// Execute a literal Gremlin string.
    async fn execute_string_query(&self, query: &str) -> Result<Frames>;

    /// Execute a built traversal. Defaults to rendering it and calling
    /// [`execute_string_query`](QueryClient::execute_string_query).
    async fn execute_query(&self, query: &Traversal) -> Result<Frames> {
        self.execute_string_query(&query.to_string()).await
    }
}
