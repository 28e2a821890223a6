use indexmap::IndexMap;
use serde::{ser::SerializeTuple, Serialize, Serializer};

use crate::parser::ast::ConstantValue;

/// A literal paired with the identifier visited right before it.
#[derive(Debug, Clone, PartialEq)]
pub struct Association {
    pub identifier: String,
    pub value: ConstantValue,
    pub type_name: &'static str,
}

impl Association {
    pub fn new(identifier: String, value: ConstantValue) -> Self {
        let type_name = value.type_name();
        Self { identifier, value, type_name }
    }
}

/// Serialized as `[identifier, value, type_name]`.
impl Serialize for Association {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut tuple = serializer.serialize_tuple(3)?;
        tuple.serialize_element(&self.identifier)?;
        tuple.serialize_element(&self.value)?;
        tuple.serialize_element(self.type_name)?;
        tuple.end()
    }
}

/// Derived key -> association, in visiting order.
pub type AssociationMap = IndexMap<String, Association>;
