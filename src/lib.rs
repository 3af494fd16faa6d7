//! # reverse
//!
//! Prints the lines of a text stream in reverse order.
//!
//! ```text
//! reverse                    # stdin  -> stdout
//! reverse <input>            # file   -> stdout
//! reverse <input> <output>   # file   -> file
//! ```
//!
//! The whole input is buffered in a [`LineStore`] before anything is
//! written. Line content is handled as raw bytes and never decoded.
//!
//! ## Modules
//!
//! - [`core`]: lines and the line store
//! - [`io`]: reading a stream into the store and writing it back out
//! - [`cli`]: argument parsing, input/output resolution, top-level flow

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod core;
pub mod error;
pub mod io;
pub mod logging;

// Re-export commonly used types at crate root
pub use error::{Error, Result};

pub use crate::core::{Line, LineStore};

pub use io::{read_lines, write_lines};

pub use cli::{Cli, Invocation, execute, resolve, reverse_stream};
