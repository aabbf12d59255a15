//! The interpreter facade.
//!
//! An [`Interpreter`] is either unloaded (no file open) or loaded with one
//! [`ByteSource`] and its [`Cursor`]. Each operation returns an
//! [`ExecutionOutcome`] and also stores it as the interpreter's last outcome,
//! so a script runner can check whether anything failed without threading
//! results through every call.
//!
//! # Example
//!
//! ```
//! use ibp::interpreter::Interpreter;
//! use ibp::source::ByteSource;
//! use ibp::decode::Value;
//!
//! let mut interp = Interpreter::new();
//! let outcome = interp.load(ByteSource::from_bytes("mem", vec![0x2a, 0, 0, 0, 0, 0, 0x60, 0x40]));
//! assert!(outcome.succeeded());
//!
//! let outcome = interp.execute("rv i32");
//! assert_eq!(outcome.values[0].value, Value::I32(42));
//! assert_eq!(interp.position(), Some(4));
//!
//! let outcome = interp.execute("ma 10");
//! assert!(!outcome.succeeded());
//! assert_eq!(interp.position(), Some(4));
//! ```

pub mod command;
pub mod outcome;

pub use command::{Command, CommandTable, Dispatch, Handler};
pub use outcome::{DecodedValue, ExecutionOutcome};

use crate::decode::{self, TypeTag};
use crate::error::InterpreterError;
use crate::source::{ByteSource, Cursor};
use log::{debug, info, trace};
use std::path::Path;

/// An open file together with the read position inside it.
#[derive(Debug)]
struct Loaded {
    source: ByteSource,
    cursor: Cursor,
}

impl Loaded {
    fn new(source: ByteSource) -> Self {
        let cursor = Cursor::new(source.len());
        Loaded { source, cursor }
    }
}

#[derive(Debug, Default)]
pub struct Interpreter {
    loaded: Option<Loaded>,
    last: Option<ExecutionOutcome>,
    commands: CommandTable,
}

impl Interpreter {
    /// Create an unloaded interpreter with the built-in commands.
    pub fn new() -> Self {
        Interpreter::with_commands(CommandTable::builtin())
    }

    pub fn with_commands(commands: CommandTable) -> Self {
        Interpreter {
            loaded: None,
            last: None,
            commands,
        }
    }

    pub fn commands(&self) -> &CommandTable {
        &self.commands
    }

    pub fn commands_mut(&mut self) -> &mut CommandTable {
        &mut self.commands
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded.is_some()
    }

    /// Cursor position, or `None` when no file is loaded.
    pub fn position(&self) -> Option<usize> {
        self.loaded.as_ref().map(|l| l.cursor.position())
    }

    /// Length of the loaded file, or `None` when no file is loaded.
    pub fn len(&self) -> Option<usize> {
        self.loaded.as_ref().map(|l| l.source.len())
    }

    pub fn path(&self) -> Option<&Path> {
        self.loaded.as_ref().map(|l| l.source.path())
    }

    /// The outcome of the most recent operation, `None` before the first.
    pub fn last_error(&self) -> Option<&ExecutionOutcome> {
        self.last.as_ref()
    }

    fn finish(&mut self, outcome: ExecutionOutcome) -> ExecutionOutcome {
        if let Some(kind) = outcome.error {
            info!("{kind}: {}", outcome.message);
        }
        self.last = Some(outcome.clone());
        outcome
    }

    /// Record `err` as a failed operation.
    fn reject(&mut self, err: InterpreterError) -> ExecutionOutcome {
        let outcome = ExecutionOutcome::failure(&err, self.position());
        self.finish(outcome)
    }

    fn loaded_mut(&mut self) -> Result<&mut Loaded, InterpreterError> {
        self.loaded.as_mut().ok_or(InterpreterError::NotLoaded)
    }

    /// Install an already loaded source, resetting the cursor to 0.
    pub fn load(&mut self, source: ByteSource) -> ExecutionOutcome {
        let message = format!("Opened {} ({} bytes)", source.path().display(), source.len());
        self.loaded = Some(Loaded::new(source));
        self.finish(ExecutionOutcome::success(message, Some(0)))
    }

    /// Open the file at `path`.
    ///
    /// On failure any previously loaded file and its cursor are kept.
    pub fn open(&mut self, path: impl AsRef<Path>) -> ExecutionOutcome {
        match ByteSource::open(path) {
            Ok(source) => self.load(source),
            Err(err) => self.reject(err),
        }
    }

    fn try_read(&mut self, tags: &[TypeTag], advance: bool) -> Result<Vec<DecodedValue>, InterpreterError> {
        let loaded = self.loaded_mut()?;
        if tags.is_empty() {
            return Err(InterpreterError::InvalidArgument("no type tags given".to_string()));
        }
        let start = loaded.cursor.position();
        let width = decode::total_width(tags);

        // One bounds check for the whole request, so nothing is decoded and
        // the cursor stays put unless every value fits.
        let bytes = loaded.source.bytes_at(start, width)?;

        let mut values = Vec::with_capacity(tags.len());
        let mut offset = 0;
        for &tag in tags {
            let raw = &bytes[offset..offset + tag.width()];
            values.push(DecodedValue {
                offset: start + offset,
                bytes: raw.to_vec(),
                value: decode::decode(tag, raw),
            });
            offset += tag.width();
        }

        if advance {
            loaded.cursor.advance(width)?;
        }
        Ok(values)
    }

    /// Decode `tags` back to back starting at the cursor.
    ///
    /// With `advance` the cursor moves past all decoded bytes; it never moves
    /// when the read fails.
    pub fn read(&mut self, tags: &[TypeTag], advance: bool) -> ExecutionOutcome {
        match self.try_read(tags, advance) {
            Ok(values) => {
                debug!("read {} value(s), cursor at {:?}", values.len(), self.position());
                let outcome = ExecutionOutcome::success("", self.position()).with_values(values);
                self.finish(outcome)
            }
            Err(err) => self.reject(err),
        }
    }

    /// Like [`Interpreter::read`], taking type tags as text.
    ///
    /// An unloaded interpreter fails with `NotLoaded` before the tags are
    /// looked at, as `move_cursor` does with its offset.
    pub fn read_tokens(&mut self, tokens: &[&str], advance: bool) -> ExecutionOutcome {
        if !self.is_loaded() {
            return self.reject(InterpreterError::NotLoaded);
        }
        match decode::parse_tags(tokens) {
            Ok(tags) => self.read(&tags, advance),
            Err(err) => self.reject(err),
        }
    }

    fn try_move(&mut self, offset_spec: &str, absolute: bool) -> Result<usize, InterpreterError> {
        let loaded = self.loaded_mut()?;
        let offset = parse_offset(offset_spec)?;
        if absolute {
            loaded.cursor.move_absolute(offset)
        } else {
            loaded.cursor.move_relative(offset)
        }
    }

    /// Move the cursor by (or, with `absolute`, to) the integer in `offset_spec`.
    pub fn move_cursor(&mut self, offset_spec: &str, absolute: bool) -> ExecutionOutcome {
        match self.try_move(offset_spec, absolute) {
            Ok(position) => {
                let outcome = ExecutionOutcome::success(format!("Cursor at {position}"), Some(position));
                self.finish(outcome)
            }
            Err(err) => self.reject(err),
        }
    }

    /// Report the cursor position and file length.
    pub fn status(&mut self) -> ExecutionOutcome {
        let outcome = match &self.loaded {
            Some(loaded) => ExecutionOutcome::success(
                format!(
                    "{}: cursor at {} of {} bytes",
                    loaded.source.path().display(),
                    loaded.cursor.position(),
                    loaded.source.len()
                ),
                Some(loaded.cursor.position()),
            ),
            None => ExecutionOutcome::failure(&InterpreterError::NotLoaded, None),
        };
        self.finish(outcome)
    }

    /// Run one command line through the command table.
    ///
    /// A blank line does nothing and leaves the last outcome as it was.
    /// Unregistered command names fail with `UnknownCommand`.
    pub fn execute(&mut self, line: &str) -> ExecutionOutcome {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let Some((name, args)) = tokens.split_first() else {
            return ExecutionOutcome::success("", self.position());
        };
        trace!("dispatch {name} {args:?}");
        match self.commands.resolve(name) {
            Dispatch::Command(handler) => handler(self, args),
            Dispatch::Fallback => self.reject(InterpreterError::UnknownCommand(name.to_string())),
        }
    }
}

/// Parse a signed offset: decimal, or hex with a `0x` prefix, optionally
/// preceded by `+` or `-`.
pub fn parse_offset(spec: &str) -> Result<i64, InterpreterError> {
    let invalid = || InterpreterError::InvalidArgument(format!("invalid offset '{spec}'"));
    let (negative, digits) = match spec.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, spec.strip_prefix('+').unwrap_or(spec)),
    };
    if digits.starts_with(['+', '-']) {
        return Err(invalid());
    }
    let magnitude = match digits.strip_prefix("0x").or_else(|| digits.strip_prefix("0X")) {
        // from_str_radix accepts a sign of its own
        Some(hex) if hex.starts_with(['+', '-']) => return Err(invalid()),
        Some(hex) => i128::from_str_radix(hex, 16),
        None => digits.parse::<i128>(),
    }
    .map_err(|_| invalid())?;
    if magnitude < 0 {
        return Err(invalid());
    }
    let value = if negative { -magnitude } else { magnitude };
    i64::try_from(value).map_err(|_| invalid())
}
