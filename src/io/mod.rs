//! Stream I/O for `reverse`.
//!
//! Reads an input stream into a [`LineStore`](crate::core::LineStore) and
//! writes the store back out in reverse-of-arrival order.

pub mod reader;
pub mod writer;

pub use reader::read_lines;
pub use writer::write_lines;
