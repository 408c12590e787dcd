//! Graph-assigned element identity.

use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::Value;

/// Opaque element identifier.
///
/// JanusGraph vertex ids are a single `g:Int64`; edge and vertex-property
/// ids are a `RelationIdentifier` whose identity is its relation-id string.
/// Composite ids keep every component, in order. Two identifiers are equal
/// iff their value sequences are equal.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Identifier {
    values: SmallVec<[Value; 1]>,
}

impl Identifier {
    pub fn new(values: impl IntoIterator<Item = Value>) -> Self {
        Self { values: values.into_iter().collect() }
    }

    /// The identity of a client-built element that has not been written yet.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Best-effort integer projection. `None` for composite, relation-style
    /// or empty identifiers.
    pub fn as_int(&self) -> Option<i64> {
        match self.values.as_slice() {
            [single] => single.as_int(),
            _ => None,
        }
    }
}

impl From<i64> for Identifier {
    fn from(id: i64) -> Self { Self::from(Value::Int(id)) }
}

impl From<i32> for Identifier {
    fn from(id: i32) -> Self { Self::from(Value::Int(id as i64)) }
}

impl From<&str> for Identifier {
    fn from(id: &str) -> Self { Self::from(Value::from(id)) }
}

impl From<String> for Identifier {
    fn from(id: String) -> Self { Self::from(Value::String(id)) }
}

impl From<Value> for Identifier {
    fn from(value: Value) -> Self {
        Self { values: smallvec::smallvec![value] }
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, v) in self.values.iter().enumerate() {
            if i > 0 { write!(f, ",")?; }
            write!(f, "{v}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_int_projection() {
        assert_eq!(Identifier::from(4216).as_int(), Some(4216));
        assert_eq!(Identifier::from("16p-39s-4r9-38o").as_int(), None);
        assert_eq!(Identifier::empty().as_int(), None);
        assert_eq!(Identifier::new([Value::Int(1), Value::Int(2)]).as_int(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Identifier::from(8).to_string(), "8");
        assert_eq!(Identifier::new([Value::Int(1), Value::from("a")]).to_string(), "1,a");
    }

    proptest! {
        #[test]
        fn equal_iff_sequences_equal(a in proptest::collection::vec(any::<i64>(), 0..4),
                                     b in proptest::collection::vec(any::<i64>(), 0..4)) {
            let ia = Identifier::new(a.iter().copied().map(Value::Int));
            let ib = Identifier::new(b.iter().copied().map(Value::Int));
            prop_assert_eq!(ia == ib, a == b);
        }
    }
}
