//! # Dialect Dispatcher
//!
//! Each graph backend speaks its own variant of GraphSON. A dialect's decode
//! rules are a [`DialectRules`] strategy table (one function per element
//! kind), looked up in a [`DialectRegistry`] at call time:
//!
//! ```text
//! decode(dialect, kind, bytes)
//!   → registry.resolve(dialect)   (Cosmos → UnsupportedDialect)
//!   → rules.decode(kind, bytes)   → Elements
//! ```
//!
//! Everything above this module is written against [`ElementKind`] and is
//! parametric in the dialect. Adding a dialect means registering its rules.

pub mod janus;

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use crate::model::{Edge, Identifier, Property, Vertex};
use crate::{Error, Result};

// ============================================================================
// Dialect
// ============================================================================

/// Graph backend whose GraphSON variant a response is encoded in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    #[default]
    JanusGraph,
    Cosmos,
}

impl Dialect {
    pub const ALL: [Dialect; 2] = [Dialect::JanusGraph, Dialect::Cosmos];

    pub fn name(self) -> &'static str {
        match self {
            Dialect::JanusGraph => "janusgraph",
            Dialect::Cosmos => "cosmos",
        }
    }

    /// Numeric tag, starting at 1.
    pub fn code(self) -> u8 {
        match self {
            Dialect::JanusGraph => 1,
            Dialect::Cosmos => 2,
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Dialect {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Dialect::ALL
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::UnknownDialect(s.to_owned()))
    }
}

impl TryFrom<&str> for Dialect {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self> {
        s.parse()
    }
}

impl TryFrom<u8> for Dialect {
    type Error = Error;

    fn try_from(code: u8) -> Result<Self> {
        Dialect::ALL
            .into_iter()
            .find(|d| d.code() == code)
            .ok_or_else(|| Error::UnknownDialect(code.to_string()))
    }
}

// ============================================================================
// Element kinds
// ============================================================================

/// Decode target for a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Identifier,
    Vertex,
    Edge,
    Property,
}

impl ElementKind {
    pub const ALL: [ElementKind; 4] = [
        ElementKind::Identifier,
        ElementKind::Vertex,
        ElementKind::Edge,
        ElementKind::Property,
    ];
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ElementKind::Identifier => "identifier",
            ElementKind::Vertex => "vertex",
            ElementKind::Edge => "edge",
            ElementKind::Property => "property",
        };
        f.write_str(name)
    }
}

/// A decoded sequence of one element kind.
#[derive(Debug, Clone, PartialEq)]
pub enum Elements {
    Identifiers(Vec<Identifier>),
    Vertices(Vec<Vertex>),
    Edges(Vec<Edge>),
    Properties(Vec<Property>),
}

impl Elements {
    pub fn kind(&self) -> ElementKind {
        match self {
            Elements::Identifiers(_) => ElementKind::Identifier,
            Elements::Vertices(_) => ElementKind::Vertex,
            Elements::Edges(_) => ElementKind::Edge,
            Elements::Properties(_) => ElementKind::Property,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Elements::Identifiers(v) => v.len(),
            Elements::Vertices(v) => v.len(),
            Elements::Edges(v) => v.len(),
            Elements::Properties(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// ============================================================================
// Strategy table
// ============================================================================

/// Decodes one raw frame into a sequence of `T`.
pub type DecodeFn<T> = fn(&[u8]) -> Result<Vec<T>>;

/// One dialect's decode rules, one function per element kind.
#[derive(Debug, Clone, Copy)]
pub struct DialectRules {
    pub identifiers: DecodeFn<Identifier>,
    pub vertices: DecodeFn<Vertex>,
    pub edges: DecodeFn<Edge>,
    pub properties: DecodeFn<Property>,
}

impl DialectRules {
    pub fn decode(&self, kind: ElementKind, data: &[u8]) -> Result<Elements> {
        Ok(match kind {
            ElementKind::Identifier => Elements::Identifiers((self.identifiers)(data)?),
            ElementKind::Vertex => Elements::Vertices((self.vertices)(data)?),
            ElementKind::Edge => Elements::Edges((self.edges)(data)?),
            ElementKind::Property => Elements::Properties((self.properties)(data)?),
        })
    }
}

/// Dialect → rules. A recognized dialect with nothing registered is
/// [`Error::UnsupportedDialect`]; it never borrows another dialect's rules.
#[derive(Debug, Clone)]
pub struct DialectRegistry {
    rules: HashMap<Dialect, DialectRules>,
}

impl DialectRegistry {
    /// A registry with no dialects at all.
    pub fn empty() -> Self {
        Self { rules: HashMap::new() }
    }

    /// The shared built-in registry (JanusGraph only). Never mutated.
    pub fn builtin() -> &'static DialectRegistry {
        static BUILTIN: OnceLock<DialectRegistry> = OnceLock::new();
        BUILTIN.get_or_init(DialectRegistry::default)
    }

    /// Register (or replace) the rules for `dialect`.
    pub fn register(&mut self, dialect: Dialect, rules: DialectRules) -> Option<DialectRules> {
        self.rules.insert(dialect, rules)
    }

    pub fn supports(&self, dialect: Dialect) -> bool {
        self.rules.contains_key(&dialect)
    }

    pub fn resolve(&self, dialect: Dialect) -> Result<&DialectRules> {
        self.rules
            .get(&dialect)
            .ok_or(Error::UnsupportedDialect(dialect))
    }

    pub fn decode(&self, dialect: Dialect, kind: ElementKind, data: &[u8]) -> Result<Elements> {
        self.resolve(dialect)?.decode(kind, data)
    }
}

impl Default for DialectRegistry {
    fn default() -> Self {
        let mut registry = Self::empty();
        registry.register(Dialect::JanusGraph, janus::RULES);
        registry
    }
}

// ============================================================================
// Decode entry points
// ============================================================================

/// Decode `data` as a sequence of `kind` in the given dialect.
///
/// `dialect` may be a [`Dialect`], a name (`"janusgraph"`) or a numeric tag
/// (`1u8`); anything unrecognized is [`Error::UnknownDialect`].
pub fn decode<D>(dialect: D, kind: ElementKind, data: &[u8]) -> Result<Elements>
where
    D: TryInto<Dialect>,
    D::Error: Into<Error>,
{
    let dialect = dialect.try_into().map_err(Into::into)?;
    DialectRegistry::builtin().decode(dialect, kind, data)
}

fn rules_for<D>(dialect: D) -> Result<&'static DialectRules>
where
    D: TryInto<Dialect>,
    D::Error: Into<Error>,
{
    let dialect = dialect.try_into().map_err(Into::into)?;
    DialectRegistry::builtin().resolve(dialect)
}

pub fn decode_identifiers<D>(dialect: D, data: &[u8]) -> Result<Vec<Identifier>>
where
    D: TryInto<Dialect>,
    D::Error: Into<Error>,
{
    (rules_for(dialect)?.identifiers)(data)
}

pub fn decode_vertices<D>(dialect: D, data: &[u8]) -> Result<Vec<Vertex>>
where
    D: TryInto<Dialect>,
    D::Error: Into<Error>,
{
    (rules_for(dialect)?.vertices)(data)
}

pub fn decode_edges<D>(dialect: D, data: &[u8]) -> Result<Vec<Edge>>
where
    D: TryInto<Dialect>,
    D::Error: Into<Error>,
{
    (rules_for(dialect)?.edges)(data)
}

pub fn decode_properties<D>(dialect: D, data: &[u8]) -> Result<Vec<Property>>
where
    D: TryInto<Dialect>,
    D::Error: Into<Error>,
{
    (rules_for(dialect)?.properties)(data)
}
