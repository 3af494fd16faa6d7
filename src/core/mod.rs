//! Core data model for `reverse`.
//!
//! Lines and the store that holds them between the read and write phases.
//! Nothing here performs I/O.

pub mod line;
pub mod store;

pub use line::Line;
pub use store::LineStore;
