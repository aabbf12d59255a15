//! Results of interpreter operations.

use crate::decode::Value;
use crate::error::{ErrorKind, InterpreterError};
use std::fmt;

/// A value decoded by a read, with where it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedValue {
    /// Offset of the first byte in the source.
    pub offset: usize,
    /// Raw bytes the value was decoded from.
    pub bytes: Vec<u8>,
    pub value: Value,
}

impl fmt::Display for DecodedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:#010x}  {:<16}  {}",
            self.offset,
            hex::encode(&self.bytes),
            self.value
        )
    }
}

/// What a single interpreter operation produced.
///
/// Successful outcomes have no error kind. `position` is the cursor after the
/// operation, or `None` while no file is loaded.
#[derive(Debug, Clone, PartialEq)]
#[must_use]
pub struct ExecutionOutcome {
    pub error: Option<ErrorKind>,
    pub message: String,
    pub values: Vec<DecodedValue>,
    pub position: Option<usize>,
}

impl ExecutionOutcome {
    pub fn success(message: impl Into<String>, position: Option<usize>) -> Self {
        ExecutionOutcome {
            error: None,
            message: message.into(),
            values: Vec::new(),
            position,
        }
    }

    pub fn failure(err: &InterpreterError, position: Option<usize>) -> Self {
        ExecutionOutcome {
            error: Some(err.kind()),
            message: err.to_string(),
            values: Vec::new(),
            position,
        }
    }

    pub fn with_values(mut self, values: Vec<DecodedValue>) -> Self {
        self.values = values;
        self
    }

    pub fn succeeded(&self) -> bool {
        self.error.is_none()
    }

    /// Exit status for a script that stopped on this outcome; 0 on success.
    pub fn code(&self) -> i32 {
        self.error.map_or(0, ErrorKind::code)
    }
}

impl fmt::Display for ExecutionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(kind) = self.error {
            return write!(f, "error[{kind}]: {}", self.message);
        }
        let mut first = true;
        if !self.message.is_empty() {
            f.write_str(&self.message)?;
            first = false;
        }
        for value in &self.values {
            if !first {
                writeln!(f)?;
            }
            write!(f, "{value}")?;
            first = false;
        }
        Ok(())
    }
}
