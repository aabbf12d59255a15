//! Decoded scalar values

use super::TypeTag;
use fhex::ToHex;
use std::fmt;

/// A scalar decoded from a byte source, tagged with its type
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    I32(i32),
    I64(i64),
    U32(u32),
    U64(u64),
    F32(f32),
    F64(f64),
}

impl Value {
    /// Get the type tag this value was decoded as
    pub fn tag(&self) -> TypeTag {
        match self {
            Value::I32(_) => TypeTag::I32,
            Value::I64(_) => TypeTag::I64,
            Value::U32(_) => TypeTag::U32,
            Value::U64(_) => TypeTag::U64,
            Value::F32(_) => TypeTag::F32,
            Value::F64(_) => TypeTag::F64,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::I32(v) => write!(f, "i32:{v}"),
            Value::I64(v) => write!(f, "i64:{v}"),
            Value::U32(v) => write!(f, "u32:{v}"),
            Value::U64(v) => write!(f, "u64:{v}"),
            Value::F32(v) => write!(f, "f32:{v} ({})", v.to_hex()),
            Value::F64(v) => write!(f, "f64:{v} ({})", v.to_hex()),
        }
    }
}
