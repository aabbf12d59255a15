//! Read-only byte sources and the cursor that walks them.
//!
//! A [`ByteSource`] is the whole content of one opened file, loaded eagerly
//! and never modified afterwards. All access goes through
//! [`ByteSource::bytes_at`], which bounds-checks the complete range before
//! handing out a slice.

pub mod cursor;

pub use cursor::Cursor;

use crate::error::InterpreterError;
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

/// Immutable in-memory copy of an opened file.
#[derive(Debug)]
pub struct ByteSource {
    path: PathBuf,
    bytes: Box<[u8]>,
}

impl ByteSource {
    /// Load the file at `path` in full.
    ///
    /// A zero-length file is accepted and yields an empty source; every read
    /// against it fails with an out-of-bounds error.
    ///
    /// # Errors
    /// - The path does not exist or cannot be read
    /// - The path names a directory
    pub fn open(path: impl AsRef<Path>) -> Result<Self, InterpreterError> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|source| InterpreterError::FileOpen {
            path: path.display().to_string(),
            source,
        })?;
        debug!("loaded {} ({} bytes)", path.display(), bytes.len());
        Ok(ByteSource::from_bytes(path, bytes))
    }

    /// Wrap an in-memory buffer, labelled with `path` for display.
    pub fn from_bytes(path: impl Into<PathBuf>, bytes: Vec<u8>) -> Self {
        ByteSource {
            path: path.into(),
            bytes: bytes.into_boxed_slice(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Check that `width` bytes starting at `offset` lie within the source.
    #[inline]
    fn check_bounds(&self, offset: usize, width: usize) -> Result<usize, InterpreterError> {
        let out_of_bounds = || InterpreterError::ReadOutOfBounds {
            offset,
            width,
            length: self.bytes.len(),
        };
        let end = offset.checked_add(width).ok_or_else(out_of_bounds)?;
        if end > self.bytes.len() {
            return Err(out_of_bounds());
        }
        Ok(end)
    }

    /// Borrow `width` bytes starting at `offset`.
    pub fn bytes_at(&self, offset: usize, width: usize) -> Result<&[u8], InterpreterError> {
        let end = self.check_bounds(offset, width)?;
        Ok(&self.bytes[offset..end])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn source(bytes: &[u8]) -> ByteSource {
        ByteSource::from_bytes("mem", bytes.to_vec())
    }

    #[test]
    fn test_bytes_at() {
        let src = source(&[1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(src.len(), 8);
        assert_eq!(src.bytes_at(0, 4).unwrap(), &[1, 2, 3, 4]);
        assert_eq!(src.bytes_at(4, 4).unwrap(), &[5, 6, 7, 8]);
        assert_eq!(src.bytes_at(7, 1).unwrap(), &[8]);
        // Zero-width access at the end is in bounds
        assert_eq!(src.bytes_at(8, 0).unwrap(), &[] as &[u8]);
    }

    #[test]
    fn test_bytes_at_out_of_bounds() {
        let src = source(&[1, 2, 3, 4, 5, 6, 7, 8]);
        let err = src.bytes_at(4, 8).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::OutOfBounds);
        assert!(src.bytes_at(9, 0).is_err());
        assert!(src.bytes_at(usize::MAX, 2).is_err());
    }

    #[test]
    fn test_empty_source() {
        let src = source(&[]);
        assert!(src.is_empty());
        assert!(src.bytes_at(0, 4).is_err());
        assert!(src.bytes_at(0, 0).is_ok());
    }

    #[test]
    fn test_open_missing_file() {
        let err = ByteSource::open("/nonexistent/ibp/missing.bin").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::FileOpenError);
        assert!(err.to_string().contains("missing.bin"));
    }

    #[test]
    fn test_open_directory() {
        let err = ByteSource::open(std::env::temp_dir()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::FileOpenError);
    }

    #[test]
    fn test_open_reads_whole_file() {
        let path = std::env::temp_dir().join(format!("ibp-source-{}.bin", std::process::id()));
        fs::write(&path, [0x2a, 0, 0, 0]).unwrap();
        let src = ByteSource::open(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(src.path(), path.as_path());
        assert_eq!(src.bytes_at(0, 4).unwrap(), &[0x2a, 0, 0, 0]);
    }
}
