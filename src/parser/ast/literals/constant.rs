use ordered_float::NotNan;
use serde::{Serialize, Serializer};
use std::fmt::{self, Display};

use crate::parser::ast::ParamParser;

#[derive(Clone, PartialEq, Eq, Hash)]
pub enum ConstantValue {
    String(String),
    Int(i64),
    Float(NotNan<f64>),
    Bool(bool),
    Null,
    /// Named parameter marker, rendered as `@name` or ``@`any name` ``.
    Placeholder(String),
}

impl ConstantValue {
    /// Runtime type name reported next to each extracted constant.
    pub fn type_name(&self) -> &'static str {
        match self {
            ConstantValue::String(_) => "str",
            ConstantValue::Int(_) => "int",
            ConstantValue::Float(_) => "float",
            ConstantValue::Bool(_) => "bool",
            ConstantValue::Null => "NoneType",
            ConstantValue::Placeholder(_) => "placeholder",
        }
    }

    pub fn placeholder(name: &str) -> Self {
        ConstantValue::Placeholder(name.to_string())
    }
}

impl Display for ConstantValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstantValue::String(s) => write!(f, "'{}'", s.replace('\'', "''")),
            ConstantValue::Int(i) => write!(f, "{}", i),
            ConstantValue::Float(n) => {
                let n = n.into_inner();
                // keep a decimal point so the text parses back as a float
                if n.fract() == 0.0 && n.is_finite() {
                    write!(f, "{:.1}", n)
                } else {
                    write!(f, "{}", n)
                }
            },
            ConstantValue::Bool(true) => write!(f, "TRUE"),
            ConstantValue::Bool(false) => write!(f, "FALSE"),
            ConstantValue::Null => write!(f, "NULL"),
            ConstantValue::Placeholder(name) => write!(f, "@{}", ParamParser::quote_name(name)),
        }
    }
}

impl fmt::Debug for ConstantValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstantValue::String(_) => write!(f, "String({})", self),
            ConstantValue::Int(_) => write!(f, "Int({})", self),
            ConstantValue::Float(_) => write!(f, "Float({})", self),
            ConstantValue::Bool(_) => write!(f, "Bool({})", self),
            ConstantValue::Null => write!(f, "Null"),
            ConstantValue::Placeholder(_) => write!(f, "Placeholder({})", self),
        }
    }
}

impl Serialize for ConstantValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ConstantValue::String(s) => serializer.serialize_str(s),
            ConstantValue::Int(i) => serializer.serialize_i64(*i),
            ConstantValue::Float(n) => serializer.serialize_f64(n.into_inner()),
            ConstantValue::Bool(b) => serializer.serialize_bool(*b),
            ConstantValue::Null => serializer.serialize_unit(),
            ConstantValue::Placeholder(_) => serializer.collect_str(self),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Constant {
    pub value: ConstantValue,
    pub alias: Option<String>,
}

impl Constant {
    pub fn new(value: ConstantValue) -> Self {
        Self { value, alias: None }
    }

    pub fn type_name(&self) -> &'static str {
        self.value.type_name()
    }
}

impl Display for Constant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}
