//! Module of algorithms working on graphs.
pub mod traversal;

pub use traversal::*;
