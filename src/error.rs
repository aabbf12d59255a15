//! Error types for the interpreter core.
//!
//! [`InterpreterError`] carries the context of a failure (path, offsets,
//! offending token). [`ErrorKind`] is its fieldless projection: it is what an
//! [`ExecutionOutcome`](crate::interpreter::ExecutionOutcome) records and what
//! decides the exit code of a script run.

use std::fmt;
use std::io;

#[derive(Debug, thiserror::Error)]
pub enum InterpreterError {
    #[error("Failed to open {path}: {source}")]
    FileOpen {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("No file loaded")]
    NotLoaded,
    #[error("Read of {width} bytes at offset {offset} exceeds length {length}")]
    ReadOutOfBounds {
        offset: usize,
        width: usize,
        length: usize,
    },
    #[error("Position {target} outside [0, {length}]")]
    SeekOutOfBounds { target: i128, length: usize },
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("Unknown command: {0}")]
    UnknownCommand(String),
}

impl InterpreterError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            InterpreterError::FileOpen { .. } => ErrorKind::FileOpenError,
            InterpreterError::NotLoaded => ErrorKind::NotLoaded,
            InterpreterError::ReadOutOfBounds { .. } | InterpreterError::SeekOutOfBounds { .. } => {
                ErrorKind::OutOfBounds
            }
            InterpreterError::InvalidArgument(_) => ErrorKind::InvalidArgument,
            InterpreterError::UnknownCommand(_) => ErrorKind::UnknownCommand,
        }
    }
}

/// Category of a failed operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    FileOpenError,
    NotLoaded,
    OutOfBounds,
    InvalidArgument,
    UnknownCommand,
}

impl ErrorKind {
    /// Process exit status used when a script aborts with this kind.
    ///
    /// Never 0, which is reserved for a script where every command succeeded.
    pub fn code(self) -> i32 {
        match self {
            ErrorKind::FileOpenError => 1,
            ErrorKind::NotLoaded => 2,
            ErrorKind::OutOfBounds => 3,
            ErrorKind::InvalidArgument => 4,
            ErrorKind::UnknownCommand => 5,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::FileOpenError => "FileOpenError",
            ErrorKind::NotLoaded => "NotLoaded",
            ErrorKind::OutOfBounds => "OutOfBounds",
            ErrorKind::InvalidArgument => "InvalidArgument",
            ErrorKind::UnknownCommand => "UnknownCommand",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = InterpreterError::ReadOutOfBounds {
            offset: 4,
            width: 8,
            length: 8,
        };
        assert_eq!(format!("{}", err), "Read of 8 bytes at offset 4 exceeds length 8");

        let err = InterpreterError::SeekOutOfBounds { target: -1, length: 8 };
        assert_eq!(format!("{}", err), "Position -1 outside [0, 8]");
    }

    #[test]
    fn kinds_project_variants() {
        let open = InterpreterError::FileOpen {
            path: "missing.bin".to_string(),
            source: io::Error::new(io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(open.kind(), ErrorKind::FileOpenError);
        assert_eq!(InterpreterError::NotLoaded.kind(), ErrorKind::NotLoaded);
        assert_eq!(
            InterpreterError::SeekOutOfBounds { target: 9, length: 8 }.kind(),
            ErrorKind::OutOfBounds
        );
        assert_eq!(
            InterpreterError::UnknownCommand("zz".to_string()).kind(),
            ErrorKind::UnknownCommand
        );
    }

    #[test]
    fn codes_are_distinct_and_nonzero() {
        let kinds = [
            ErrorKind::FileOpenError,
            ErrorKind::NotLoaded,
            ErrorKind::OutOfBounds,
            ErrorKind::InvalidArgument,
            ErrorKind::UnknownCommand,
        ];
        let mut codes: Vec<i32> = kinds.iter().map(|k| k.code()).collect();
        assert!(codes.iter().all(|&c| c != 0));
        codes.sort();
        codes.dedup();
        assert_eq!(codes.len(), kinds.len());
    }
}
