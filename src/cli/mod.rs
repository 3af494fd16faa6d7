//! CLI layer for `reverse`.
//!
//! Argument parsing with clap, invocation resolution, and the top-level
//! read-then-write flow.

pub mod commands;
pub mod parser;
pub mod resolver;

pub use commands::{execute, reverse_stream, run};
pub use parser::Cli;
pub use resolver::{Input, Invocation, Output, Plan, resolve, same_file};
