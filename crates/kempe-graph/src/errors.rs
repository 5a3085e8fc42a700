//! Error types.
use crate::NodeId;
use thiserror::Error;

/// Error type used when an operation refers to a node that is not part of the graph.
#[derive(Debug, Copy, Clone, Error, Eq, PartialEq)]
#[error("Could not find node with ID {0:?}")]
pub struct MissingNode(pub NodeId);
