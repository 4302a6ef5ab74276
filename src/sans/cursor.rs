//! Bounds-checked sequential reads over a document slice.

use thiserror::Error;

/// The document ended before a read could be satisfied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Unexpectedly reached the end of the document at offset {offset} ({needed} bytes needed).")]
pub struct TruncatedInput {
    /// Offset at which the failed read began.
    pub offset: usize,
    /// Number of bytes the read required.
    pub needed: usize,
}

/// A read position within a borrowed document.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    bytes: &'a [u8],
    position: usize,
}

impl<'a> Cursor<'a> {
    /// Begin reading at the start of a document.
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, position: 0 }
    }

    /// Absolute offset of the next byte to be read.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Number of bytes left before the end of the document.
    pub fn remaining(&self) -> usize {
        self.bytes.len().saturating_sub(self.position)
    }

    /// Move to an absolute offset.
    ///
    /// Seeking past the end is permitted; the next read will fail.
    pub fn seek(&mut self, offset: usize) {
        self.position = offset;
    }

    /// Take an exact number of bytes, advancing the cursor.
    pub fn take<const N: usize>(&mut self) -> Result<[u8; N], TruncatedInput> {
        let mut buf = [0; N];
        buf.copy_from_slice(self.take_slice(N)?);
        Ok(buf)
    }

    /// Take a run of bytes whose length is only known at runtime.
    pub fn take_slice(&mut self, len: usize) -> Result<&'a [u8], TruncatedInput> {
        let truncated = TruncatedInput {
            offset: self.position,
            needed: len,
        };

        let end = self.position.checked_add(len).ok_or(truncated)?;
        let slice = self.bytes.get(self.position..end).ok_or(truncated)?;
        self.position = end;

        Ok(slice)
    }
}
