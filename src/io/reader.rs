//! Line reading into a [`LineStore`].
//!
//! The whole input is buffered: every line is copied into the store before
//! anything is written, which is what allows a file to be reversed onto a
//! different file without a temporary.

use crate::core::{Line, LineStore};
use crate::error::Result;
use std::io::BufRead;
use tracing::{debug, trace};

/// Reads `input` to the end, prepending each line to `store`.
///
/// The store is cleared first. Lines are split after every `\n`; a trailing
/// segment without one still becomes the last line read (and therefore the
/// first line of the store). An empty input leaves the store empty.
///
/// A read error ends the input early: lines read so far are kept and the
/// error is only logged.
///
/// # Returns
///
/// Number of lines read.
///
/// # Errors
///
/// Returns [`Error::Allocation`](crate::Error::Allocation) when memory for a
/// line or for the store cannot be reserved. Partial state should be
/// discarded by the caller.
///
/// # Examples
///
/// ```
/// use reverse::core::LineStore;
/// use reverse::io::read_lines;
///
/// let mut store = LineStore::new();
/// let count = read_lines(&b"a\nb\nc"[..], &mut store).unwrap();
/// assert_eq!(count, 3);
/// assert_eq!(store.front().unwrap().as_bytes(), b"c");
/// ```
pub fn read_lines<R: BufRead>(mut input: R, store: &mut LineStore) -> Result<usize> {
    store.clear();

    let mut buf = Vec::new();
    let mut count = 0usize;

    loop {
        buf.clear();
        match input.read_until(b'\n', &mut buf) {
            Ok(0) => break,
            Ok(n) => {
                trace!(line = count, bytes = n, "read line");
                store.prepend(Line::copy_from(&buf)?)?;
                count += 1;
            }
            Err(e) => {
                debug!(error = %e, lines = count, "input ended on read error");
                break;
            }
        }
    }

    debug!(lines = count, bytes = store.total_bytes(), "input consumed");
    Ok(count)
}
