//! Read position within a [`ByteSource`](super::ByteSource).
//!
//! The cursor only knows the length of the source it was created for. Every
//! repositioning is checked against `[0, len]` before it is applied, so a
//! failed move never changes the position.

use crate::error::InterpreterError;
use log::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    position: usize,
    len: usize,
}

impl Cursor {
    /// Create a cursor at offset 0 for a source of `len` bytes.
    pub fn new(len: usize) -> Self {
        Cursor { position: 0, len }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn len(&self) -> usize {
        self.len
    }

    // Widen to i128 so that neither a negative target nor `usize::MAX + delta`
    // can wrap.
    fn seek(&mut self, target: i128) -> Result<usize, InterpreterError> {
        if target < 0 || target > self.len as i128 {
            return Err(InterpreterError::SeekOutOfBounds {
                target,
                length: self.len,
            });
        }
        debug!("cursor {} -> {}", self.position, target);
        self.position = target as usize;
        Ok(self.position)
    }

    /// Move by `delta` bytes from the current position.
    pub fn move_relative(&mut self, delta: i64) -> Result<usize, InterpreterError> {
        self.seek(self.position as i128 + delta as i128)
    }

    /// Move to `target`.
    pub fn move_absolute(&mut self, target: i64) -> Result<usize, InterpreterError> {
        self.seek(target as i128)
    }

    /// Step forward over `width` bytes that were just read.
    pub fn advance(&mut self, width: usize) -> Result<usize, InterpreterError> {
        self.seek(self.position as i128 + width as i128)
    }
}
