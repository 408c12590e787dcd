//! Gremlin traversal builder.
//!
//! Only what the element operations need: a source, a chain of named steps
//! with positional arguments, and rendering to the Groovy form Gremlin
//! Server evaluates.
//!
//! ```text
//! Traversal::new().v().has_id(&id).out_e(&["knows"])
//!   → g.V().hasId(4216).outE('knows')
//! ```

use std::fmt;

use crate::model::{Identifier, Value};

/// One step argument: a literal value or a nested (anonymous) traversal.
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    Value(Value),
    Traversal(Traversal),
}

impl From<Value> for Arg { fn from(v: Value) -> Self { Arg::Value(v) } }
impl From<&str> for Arg { fn from(v: &str) -> Self { Arg::Value(v.into()) } }
impl From<String> for Arg { fn from(v: String) -> Self { Arg::Value(v.into()) } }
impl From<bool> for Arg { fn from(v: bool) -> Self { Arg::Value(v.into()) } }
impl From<i32> for Arg { fn from(v: i32) -> Self { Arg::Value(v.into()) } }
impl From<i64> for Arg { fn from(v: i64) -> Self { Arg::Value(v.into()) } }
impl From<f64> for Arg { fn from(v: f64) -> Self { Arg::Value(v.into()) } }

impl From<Traversal> for Arg {
    fn from(t: Traversal) -> Self { Arg::Traversal(t) }
}

/// A named step with its arguments, e.g. `hasId(4216)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    pub name: String,
    pub args: Vec<Arg>,
}

/// A traversal: source (`g` or the anonymous `__`) followed by steps.
#[derive(Debug, Clone, PartialEq)]
pub struct Traversal {
    source: &'static str,
    steps: Vec<Step>,
}

impl Default for Traversal {
    fn default() -> Self {
        Self::new()
    }
}

impl Traversal {
    /// A traversal rooted at the graph traversal source `g`.
    pub fn new() -> Self {
        Self { source: "g", steps: Vec::new() }
    }

    /// An anonymous traversal (`__`), for use as a step argument.
    pub fn anonymous() -> Self {
        Self { source: "__", steps: Vec::new() }
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    fn step(mut self, name: &str, args: Vec<Arg>) -> Self {
        self.steps.push(Step { name: name.to_owned(), args });
        self
    }

    /// Append an arbitrary step.
    pub fn add_step<I>(self, name: &str, args: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Arg>,
    {
        self.step(name, args.into_iter().map(Into::into).collect())
    }

    pub fn v(self) -> Self {
        self.step("V", Vec::new())
    }

    pub fn add_v(self, label: &str) -> Self {
        self.step("addV", vec![Arg::from(label)])
    }

    /// `hasId(..)` with every component of `id` as a separate argument.
    pub fn has_id(self, id: &Identifier) -> Self {
        let args = id.values().iter().cloned().map(Arg::Value).collect();
        self.step("hasId", args)
    }

    pub fn has_label(self, label: &str) -> Self {
        self.step("hasLabel", vec![Arg::from(label)])
    }

    pub fn count(self) -> Self {
        self.step("count", Vec::new())
    }

    pub fn drop(self) -> Self {
        self.step("drop", Vec::new())
    }

    pub fn both_e(self, labels: &[&str]) -> Self {
        self.add_step("bothE", labels.iter().copied())
    }

    pub fn out_e(self, labels: &[&str]) -> Self {
        self.add_step("outE", labels.iter().copied())
    }

    pub fn in_e(self, labels: &[&str]) -> Self {
        self.add_step("inE", labels.iter().copied())
    }

    pub fn add_e(self, label: &str) -> Self {
        self.step("addE", vec![Arg::from(label)])
    }

    pub fn to(self, target: Traversal) -> Self {
        self.step("to", vec![Arg::Traversal(target)])
    }

    pub fn property(self, key: impl Into<Arg>, value: impl Into<Arg>) -> Self {
        self.step("property", vec![key.into(), value.into()])
    }

    pub fn properties<I>(self, keys: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Arg>,
    {
        self.add_step("properties", keys)
    }
}

// ============================================================================
// Rendering
// ============================================================================

impl fmt::Display for Traversal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.source)?;
        for step in &self.steps {
            write!(f, ".{}(", step.name)?;
            for (i, arg) in step.args.iter().enumerate() {
                if i > 0 { f.write_str(", ")?; }
                match arg {
                    Arg::Value(v) => write_literal(f, v)?,
                    Arg::Traversal(t) => write!(f, "{t}")?,
                }
            }
            f.write_str(")")?;
        }
        Ok(())
    }
}

/// Write `value` as a Groovy literal. Strings are single-quoted so they are
/// never interpolated; graph elements render as their identifier.
fn write_literal(f: &mut fmt::Formatter<'_>, value: &Value) -> fmt::Result {
    match value {
        Value::Null => f.write_str("null"),
        Value::Bool(b) => write!(f, "{b}"),
        Value::Int(i) => write!(f, "{i}"),
        Value::Float(v) if v.is_nan() => f.write_str("Double.NaN"),
        Value::Float(v) if v.is_infinite() => {
            f.write_str(if *v > 0.0 { "Double.POSITIVE_INFINITY" } else { "Double.NEGATIVE_INFINITY" })
        }
        Value::Float(v) => write!(f, "{v:?}d"),
        Value::String(s) => {
            f.write_str("'")?;
            for ch in s.chars() {
                match ch {
                    '\\' => f.write_str("\\\\")?,
                    '\'' => f.write_str("\\'")?,
                    '\n' => f.write_str("\\n")?,
                    '\r' => f.write_str("\\r")?,
                    c => write!(f, "{c}")?,
                }
            }
            f.write_str("'")
        }
        Value::DateTime(dt) => write!(f, "new Date({}L)", dt.timestamp_millis()),
        Value::List(items) => {
            f.write_str("[")?;
            for (i, v) in items.iter().enumerate() {
                if i > 0 { f.write_str(", ")?; }
                write_literal(f, v)?;
            }
            f.write_str("]")
        }
        Value::Map(entries) if entries.is_empty() => f.write_str("[:]"),
        Value::Map(entries) => {
            f.write_str("[")?;
            for (i, (k, v)) in entries.iter().enumerate() {
                if i > 0 { f.write_str(", ")?; }
                f.write_str("(")?;
                write_literal(f, k)?;
                f.write_str("): ")?;
                write_literal(f, v)?;
            }
            f.write_str("]")
        }
        Value::Vertex(v) => write_literal(f, &Value::from(v.id())),
        Value::Edge(e) => write_literal(f, &Value::from(e.id())),
        Value::Property(p) => write_literal(f, p.value()),
    }
}
