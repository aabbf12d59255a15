//! Interactive binary inspection.
//!
//! ibp opens a binary file as a read-only byte source, keeps a cursor into
//! it, and decodes fixed-width scalars (`i32`, `i64`, `u32`, `u64`, `f32`,
//! `f64`, all little-endian) at that cursor. Commands arrive one line at a
//! time, either typed at a prompt or read from a script.
//!
//! # Modules
//!
//! - [`source`] -- Byte sources and the bounds-checked cursor.
//! - [`decode`] -- Type tags and the scalar decoder.
//! - [`interpreter`] -- The command table and the interpreter state machine.
//! - [`shell`] -- Interactive and script front ends.
//! - [`error`] -- Error types and exit codes.
//!
//! # Example
//!
//! ```
//! use ibp::interpreter::Interpreter;
//! use ibp::source::ByteSource;
//!
//! let mut interp = Interpreter::new();
//! let _ = interp.load(ByteSource::from_bytes("mem", 3.5f64.to_le_bytes().to_vec()));
//! let outcome = interp.execute("r f64");
//! assert!(outcome.to_string().contains("f64:3.5"));
//! ```

pub mod decode;
pub mod error;
pub mod interpreter;
pub mod shell;
pub mod source;
