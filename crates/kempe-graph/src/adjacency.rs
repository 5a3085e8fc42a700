//! A module providing an adjacency list representation of a graph.
//!
//! This module defines the [`AdjacencyList`] struct and its implementation,
//! supporting basic graph operations such as traversing nodes and edges,
//! enumerating the edges incident to a node, and constructing adjacency lists
//! from existing graphs.
use crate::{Edge, EdgeId, FromGraph, Graph, NodeId, SecondaryGraph};
use slotmap::SecondaryMap;

/// A graph represented as an adjacency list.
///
/// The [`AdjacencyList`] struct implements the [`Graph`], [`SecondaryGraph`], and [`FromGraph`] traits
/// to provide a rich set of graph-related operations. It maintains internal mappings for nodes,
/// edges, and the edges incident to each node.
#[derive(Debug, Clone, Default)]
pub struct AdjacencyList {
    /// A mapping of nodes in the graph to a placeholder value.
    ///
    /// This map tracks all nodes that belong to the graph.
    pub nodes: SecondaryMap<NodeId, ()>,
    /// A mapping of edges in the graph to their associated [`Edge`] data.
    ///
    /// This map stores all edges within the graph.
    pub edges: SecondaryMap<EdgeId, Edge>,
    /// A mapping of each node to its incident edges.
    ///
    /// For any [`NodeId`], this map contains the [`EdgeId`]s of all edges having the node as
    /// an endpoint, in insertion order. Self-loops are listed once.
    pub incident: SecondaryMap<NodeId, Vec<EdgeId>>,
}

impl AdjacencyList {
    /// Create a new, empty adjacency list graph.
    pub fn new() -> Self {
        Self::default()
    }

    fn link(&mut self, node: NodeId, edge: EdgeId) {
        match self.incident.get_mut(node) {
            Some(list) => list.push(edge),
            None => {
                self.incident.insert(node, vec![edge]);
            }
        }
    }
}

impl Graph for AdjacencyList {
    fn get_edge(&self, id: EdgeId) -> Option<Edge> {
        self.edges.get(id).copied()
    }

    fn nodes(&self) -> impl '_ + Iterator<Item = NodeId> {
        self.nodes.keys()
    }

    fn edges(&self) -> impl '_ + Iterator<Item = EdgeId> {
        self.edges.keys()
    }

    fn has_node(&self, node: NodeId) -> bool {
        self.nodes.contains_key(node)
    }

    fn has_edge(&self, id: EdgeId) -> bool {
        self.edges.contains_key(id)
    }

    fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    fn num_edges(&self) -> usize {
        self.edges.len()
    }

    fn incident(&self, node: NodeId) -> impl '_ + Iterator<Item = EdgeId> {
        self.incident.get(node).into_iter().flatten().copied()
    }

    fn degree(&self, node: NodeId) -> usize {
        self.incident.get(node).map_or(0, Vec::len)
    }
}

impl SecondaryGraph for AdjacencyList {
    fn add_node(&mut self, id: NodeId) {
        self.nodes.insert(id, ());
        if !self.incident.contains_key(id) {
            self.incident.insert(id, Vec::new());
        }
    }

    fn add_edge(&mut self, id: EdgeId, edge: Edge) {
        self.edges.insert(id, edge);
        self.link(edge.a, id);
        if !edge.is_loop() {
            self.link(edge.b, id);
        }
    }
}

impl FromGraph for AdjacencyList {
    fn from_graph(graph: &impl Graph) -> Self {
        let mut adj = Self::new();
        for node in graph.nodes() {
            adj.add_node(node);
        }
        for id in graph.edges() {
            if let Some(edge) = graph.get_edge(id) {
                adj.add_edge(id, edge);
            }
        }
        adj
    }
}
