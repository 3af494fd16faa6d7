//! Writing a [`LineStore`] to an output stream.

use crate::core::{Line, LineStore};
use std::io::{self, Write};
use tracing::debug;

/// Writes every line of `store` to `output`, front to back, then flushes.
///
/// When the input ended with a newline, the lines are written verbatim. When
/// it did not, the unterminated line (now at the front) is written with a
/// `\n` separator and the newline of the last line written is dropped, so
/// the output is unterminated exactly when the input was.
///
/// Write failures are not reported: output stops at the first failed write
/// and the error is only logged.
///
/// # Returns
///
/// Number of lines fully written.
///
/// # Examples
///
/// ```
/// use reverse::core::LineStore;
/// use reverse::io::{read_lines, write_lines};
///
/// let mut store = LineStore::new();
/// read_lines(&b"a\nb\nc"[..], &mut store).unwrap();
///
/// let mut out = Vec::new();
/// write_lines(&mut out, &store);
/// assert_eq!(out, b"c\nb\na");
/// ```
pub fn write_lines<W: Write>(mut output: W, store: &LineStore) -> usize {
    let unterminated = store.front().is_some_and(|line| !line.is_terminated());
    let last = store.len().saturating_sub(1);
    let mut written = 0usize;

    for (index, line) in store.iter().enumerate() {
        let result = if unterminated {
            write_separated(&mut output, line, index != last)
        } else {
            output.write_all(line.as_bytes())
        };

        if let Err(e) = result {
            debug!(error = %e, written, total = store.len(), "output stopped on write error");
            return written;
        }
        written += 1;
    }

    if let Err(e) = output.flush() {
        debug!(error = %e, "flush failed");
    }

    debug!(lines = written, "output written");
    written
}

fn write_separated<W: Write>(output: &mut W, line: &Line, separator: bool) -> io::Result<()> {
    output.write_all(line.content())?;
    if separator {
        output.write_all(b"\n")?;
    }
    Ok(())
}
