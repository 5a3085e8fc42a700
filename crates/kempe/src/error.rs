//! Error types.
use crate::Color;
use kempe_graph::errors::MissingNode;
use kempe_graph::{EdgeId, NodeId};

/// Errors returned when an operation on a [`ColoredGraph`](crate::ColoredGraph) is called with
/// arguments that do not belong to the graph.
#[derive(Debug, Copy, Clone, thiserror::Error, Eq, PartialEq)]
pub enum Error {
    /// The vertex is not part of the graph.
    #[error("Could not find vertex with ID {0:?}")]
    InvalidVertex(NodeId),
    /// The color is not part of the graph's palette.
    #[error("Color {0} is not part of the palette")]
    InvalidColor(Color),
    /// The edge is not part of the graph.
    #[error("Could not find edge with ID {0:?}")]
    MissingEdge(EdgeId),
    /// An edge endpoint is not part of the graph.
    #[error("Could not add edge: {0}")]
    MissingNode(#[from] MissingNode),
}
