//! Top-level control flow.
//!
//! Resolve the invocation, read every line, write them back in reverse,
//! then release the streams.

use crate::cli::parser::Cli;
use crate::cli::resolver::{Invocation, resolve};
use crate::core::LineStore;
use crate::error::Result;
use crate::io::{read_lines, write_lines};
use std::io::{BufRead, Write};
use tracing::debug;

/// Executes a parsed command line.
///
/// # Errors
///
/// Returns the first fatal condition: a usage violation, a same-file
/// condition, an open failure, or an allocation failure while reading.
pub fn execute(cli: &Cli) -> Result<()> {
    debug!(files = cli.files.len(), "resolving invocation");
    let invocation = resolve(&cli.files)?;
    run(invocation)
}

/// Reverses an already resolved invocation and closes any named files.
///
/// # Errors
///
/// Returns [`Error::Allocation`](crate::Error::Allocation) if the input
/// does not fit in memory.
pub fn run(invocation: Invocation) -> Result<()> {
    let Invocation {
        mut input,
        mut output,
    } = invocation;

    reverse_stream(&mut input, &mut output)?;

    // Named files close here; the standard streams are only unlocked.
    drop(input);
    drop(output);
    Ok(())
}

/// Reads all of `input` and writes its lines to `output` in reverse order.
///
/// # Returns
///
/// Number of lines written.
///
/// # Errors
///
/// Returns [`Error::Allocation`](crate::Error::Allocation) if the input
/// does not fit in memory. Write failures are not errors.
///
/// # Examples
///
/// ```
/// use reverse::cli::reverse_stream;
///
/// let mut out = Vec::new();
/// reverse_stream(&b"a\nb\nc\n"[..], &mut out).unwrap();
/// assert_eq!(out, b"c\nb\na\n");
/// ```
pub fn reverse_stream<R: BufRead, W: Write>(input: R, output: W) -> Result<usize> {
    let mut store = LineStore::new();
    let read = read_lines(input, &mut store)?;
    let written = write_lines(output, &store);
    debug!(read, written, "reversed");
    Ok(written)
}
