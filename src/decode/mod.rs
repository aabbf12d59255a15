//! Fixed-width scalar decoding.
//!
//! Every [`TypeTag`] names a width (4 or 8 bytes) and a rule for turning
//! exactly that many bytes into a [`Value`]. All tags use little-endian byte
//! order; integers are two's-complement, floats are IEEE-754 binary32 and
//! binary64.

pub mod value;

pub use value::Value;

use crate::error::InterpreterError;
use byteorder::{ByteOrder, LittleEndian};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeTag {
    I32,
    I64,
    U32,
    U64,
    F32,
    F64,
}

impl TypeTag {
    pub const ALL: [TypeTag; 6] = [
        TypeTag::I32,
        TypeTag::I64,
        TypeTag::U32,
        TypeTag::U64,
        TypeTag::F32,
        TypeTag::F64,
    ];

    /// Number of bytes a value of this type occupies.
    pub fn width(self) -> usize {
        match self {
            TypeTag::I32 | TypeTag::U32 | TypeTag::F32 => 4,
            TypeTag::I64 | TypeTag::U64 | TypeTag::F64 => 8,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            TypeTag::I32 => "i32",
            TypeTag::I64 => "i64",
            TypeTag::U32 => "u32",
            TypeTag::U64 => "u64",
            TypeTag::F32 => "f32",
            TypeTag::F64 => "f64",
        }
    }
}

impl FromStr for TypeTag {
    type Err = InterpreterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TypeTag::ALL
            .into_iter()
            .find(|tag| tag.name() == s)
            .ok_or_else(|| InterpreterError::InvalidArgument(format!("unknown type tag '{s}'")))
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parse a list of type tag tokens, failing on the first unknown one.
pub fn parse_tags<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<TypeTag>, InterpreterError> {
    tokens.iter().map(|t| t.as_ref().parse()).collect()
}

/// Sum of the widths of `tags`.
pub fn total_width(tags: &[TypeTag]) -> usize {
    tags.iter().map(|t| t.width()).sum()
}

/// Decode `bytes` as a value of type `tag`.
///
/// # Panics
/// If `bytes` is shorter than `tag.width()`. Callers bound-check the read
/// against the source before slicing, so a short slice is a logic error.
pub fn decode(tag: TypeTag, bytes: &[u8]) -> Value {
    debug_assert_eq!(bytes.len(), tag.width(), "slice width mismatch for {tag}");
    match tag {
        TypeTag::I32 => Value::I32(LittleEndian::read_i32(bytes)),
        TypeTag::I64 => Value::I64(LittleEndian::read_i64(bytes)),
        TypeTag::U32 => Value::U32(LittleEndian::read_u32(bytes)),
        TypeTag::U64 => Value::U64(LittleEndian::read_u64(bytes)),
        TypeTag::F32 => Value::F32(LittleEndian::read_f32(bytes)),
        TypeTag::F64 => Value::F64(LittleEndian::read_f64(bytes)),
    }
}
