//! # Graph Element Model
//!
//! Plain value types for what a Gremlin server hands back: vertices, edges,
//! properties and their identifiers.
//!
//! Design rule: nothing in here holds a connection. Query-issuing operations
//! live in [`crate::navigation`] and take the client as an argument.

pub mod identifier;
pub mod value;
pub mod property;
pub mod property_map;
pub mod vertex;
pub mod edge;

pub use identifier::Identifier;
pub use value::Value;
pub use property::Property;
pub use property_map::{PropertyKey, PropertyMap};
pub use vertex::Vertex;
pub use edge::Edge;
