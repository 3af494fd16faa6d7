//! A single line of input.

use crate::error::Result;

/// One line of input, including its terminating `\n` when present.
///
/// Content is raw bytes; nothing is decoded, so invalid UTF-8, `\r` and NUL
/// bytes are carried through untouched. A `Line` is immutable once built.
///
/// # Examples
///
/// ```
/// use reverse::core::Line;
///
/// let line = Line::copy_from(b"hello\n").unwrap();
/// assert!(line.is_terminated());
/// assert_eq!(line.content(), b"hello");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Line {
    bytes: Box<[u8]>,
}

impl Line {
    /// Copies `bytes` into a new line, reserving the exact capacity fallibly.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Allocation`](crate::Error::Allocation) when the
    /// memory for the copy cannot be reserved.
    pub fn copy_from(bytes: &[u8]) -> Result<Self> {
        let mut owned = Vec::new();
        owned.try_reserve_exact(bytes.len())?;
        owned.extend_from_slice(bytes);
        Ok(Self {
            bytes: owned.into_boxed_slice(),
        })
    }

    /// Returns the full line, terminator included.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Returns the line without its trailing `\n`.
    #[must_use]
    pub fn content(&self) -> &[u8] {
        self.bytes.strip_suffix(b"\n").unwrap_or(&self.bytes)
    }

    /// Returns `true` if the line ends with `\n`.
    #[must_use]
    pub fn is_terminated(&self) -> bool {
        self.bytes.last() == Some(&b'\n')
    }

    /// Length in bytes, terminator included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns `true` for a zero-byte line.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl AsRef<[u8]> for Line {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}
