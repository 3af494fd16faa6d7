//! Line store for `reverse`.
//!
//! Lines are pushed onto the front as they arrive, so a front-to-back
//! traversal always yields them in reverse-of-arrival order.

use crate::core::Line;
use crate::error::Result;
use std::collections::VecDeque;
use std::collections::vec_deque;

/// Ordered collection of lines, most recently prepended first.
///
/// # Examples
///
/// ```
/// use reverse::core::{Line, LineStore};
///
/// let mut store = LineStore::new();
/// store.prepend(Line::copy_from(b"first\n").unwrap()).unwrap();
/// store.prepend(Line::copy_from(b"second\n").unwrap()).unwrap();
///
/// let order: Vec<&[u8]> = store.iter().map(Line::as_bytes).collect();
/// assert_eq!(order, vec![&b"second\n"[..], &b"first\n"[..]]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineStore {
    lines: VecDeque<Line>,
}

impl LineStore {
    /// Creates an empty store.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            lines: VecDeque::new(),
        }
    }

    /// Inserts `line` at the front.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Allocation`](crate::Error::Allocation) if the store
    /// cannot grow to hold another line.
    pub fn prepend(&mut self, line: Line) -> Result<()> {
        self.lines.try_reserve(1)?;
        self.lines.push_front(line);
        Ok(())
    }

    /// Drops every line. Calling it on an empty store is a no-op.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Iterates front to back without consuming the store.
    pub fn iter(&self) -> vec_deque::Iter<'_, Line> {
        self.lines.iter()
    }

    /// Number of lines held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Returns `true` if no lines are held.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sum of all line lengths in bytes.
    #[must_use]
    pub fn total_bytes(&self) -> usize {
        self.lines.iter().map(Line::len).sum()
    }

    /// Returns the line at the front, i.e. the last one that arrived.
    #[must_use]
    pub fn front(&self) -> Option<&Line> {
        self.lines.front()
    }
}

impl<'a> IntoIterator for &'a LineStore {
    type Item = &'a Line;
    type IntoIter = vec_deque::Iter<'a, Line>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
