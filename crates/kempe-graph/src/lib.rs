#![warn(missing_docs)]
//! # Graph datastructures
//!
//! Implements undirected multigraph datastructures and traversals working with them.
//!
//! The datastructures only use IDs to track nodes and edges; it is the responsibility of the
//! user to store their own data. When needed, the algorithms will have callbacks as arguments to
//! query that data (i.e. which edges a traversal is allowed to follow).
use crate::errors::MissingNode;
use slotmap::new_key_type;
use std::collections::HashSet;
use std::ops;

pub mod adjacency;
pub mod algorithms;
pub mod base;
pub mod errors;

pub use adjacency::AdjacencyList;
pub use base::GraphBase;

new_key_type! {
    /// Type of node IDs.
    pub struct NodeId;
    /// Type of edge IDs.
    pub struct EdgeId;
}

/// Edge data, connecting two nodes together.
///
/// Edges are undirected: the order of `a` and `b` only reflects the order in which the
/// endpoints were given when the edge was created. A self-loop has `a == b`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Edge {
    /// First endpoint
    pub a: NodeId,
    /// Second endpoint
    pub b: NodeId,
}

impl Edge {
    /// Create an edge between two nodes.
    pub const fn new(a: NodeId, b: NodeId) -> Self {
        Self { a, b }
    }

    /// Returns the endpoint opposite to `node`, or `None` if `node` is not an endpoint of this
    /// edge. For a self-loop, this returns `node` itself.
    ///
    /// # Examples
    ///
    /// ```
    /// use kempe_graph::{Graph, GraphBase, OwnedGraph};
    ///
    /// let mut graph = GraphBase::new();
    /// let a = graph.add_node();
    /// let b = graph.add_node();
    /// let c = graph.add_node();
    /// let id = graph.add_edge(a, b);
    /// let edge = graph.get_edge(id).unwrap();
    ///
    /// assert_eq!(Some(b), edge.other(a));
    /// assert_eq!(Some(a), edge.other(b));
    /// assert_eq!(None, edge.other(c));
    /// ```
    pub fn other(&self, node: NodeId) -> Option<NodeId> {
        if node == self.a {
            Some(self.b)
        } else if node == self.b {
            Some(self.a)
        } else {
            None
        }
    }

    /// Returns true if `node` is one of the endpoints of this edge.
    pub fn touches(&self, node: NodeId) -> bool {
        self.a == node || self.b == node
    }

    /// Returns true if this edge joins `x` and `y`, in either orientation.
    pub fn connects(&self, x: NodeId, y: NodeId) -> bool {
        (self.a == x && self.b == y) || (self.a == y && self.b == x)
    }

    /// Returns true if both endpoints are the same node.
    pub fn is_loop(&self) -> bool {
        self.a == self.b
    }
}

/// A trait representing an undirected graph structure with basic graph operations.
///
/// This trait defines the minimal set of operations to interact with a graph,
/// including retrieving nodes, edges, and checking relationships between them. Parallel edges
/// and self-loops are allowed.
///
/// # Examples
///
/// ```
/// use kempe_graph::{Graph, GraphBase, OwnedGraph};
///
/// let mut graph = GraphBase::new();
/// let node1 = graph.add_node();
/// let node2 = graph.add_node();
/// let edge = graph.add_edge(node1, node2);
///
/// assert!(graph.has_node(node1));
/// assert!(graph.has_edge(edge));
/// assert!(graph.has_edge_between(node1, node2));
/// assert!(graph.has_edge_between(node2, node1));
/// ```
pub trait Graph {
    /// Returns the edge data (both endpoints) for this id, if it exists.
    ///
    /// # Arguments
    ///
    /// - `id`: Edge ID
    fn get_edge(&self, id: EdgeId) -> Option<Edge>;

    /// Returns an iterator over all nodes in the graph.
    fn nodes(&self) -> impl '_ + Iterator<Item = NodeId>;

    /// Returns an iterator over all edges in the graph.
    fn edges(&self) -> impl '_ + Iterator<Item = EdgeId>;

    /// Checks whether the graph contains a specific node.
    ///
    /// # Arguments
    ///
    /// * `node` - The [`NodeId`] to check for existence in the graph.
    fn has_node(&self, node: NodeId) -> bool {
        self.nodes().any(|id| id == node)
    }

    /// Checks whether the graph contains an edge with a specific [`EdgeId`].
    ///
    /// # Arguments
    ///
    /// * `id` - The [`EdgeId`] to check for existence.
    fn has_edge(&self, id: EdgeId) -> bool {
        self.get_edge(id).is_some()
    }

    /// Returns the total number of nodes in the graph.
    fn num_nodes(&self) -> usize {
        self.nodes().count()
    }

    /// Returns the total number of edges in the graph.
    fn num_edges(&self) -> usize {
        self.edges().count()
    }

    /// Returns an iterator over all edges incident to a given node.
    ///
    /// A self-loop is reported once. Nodes which are not part of the graph have no incident
    /// edges.
    ///
    /// # Arguments
    ///
    /// * `node` - The [`NodeId`] for which incident edges are retrieved.
    fn incident(&self, node: NodeId) -> impl '_ + Iterator<Item = EdgeId> {
        self.edges()
            .filter(move |id| self.get_edge(*id).is_some_and(|e| e.touches(node)))
    }

    /// Returns the number of edges incident to the node.
    fn degree(&self, node: NodeId) -> usize {
        self.incident(node).count()
    }

    /// Returns true if the nodes are directly connected to each other in the graph.
    fn has_edge_between(&self, x: NodeId, y: NodeId) -> bool {
        self.edges_between(x, y).next().is_some()
    }

    /// Returns an iterator over all edges joining two nodes in the graph.
    ///
    /// Edges are undirected, so this finds all edges with `x` as one endpoint and `y` as the
    /// other, regardless of the order they were created with. Parallel edges are all reported,
    /// in the order they appear in the incidence of `x`.
    ///
    /// # Arguments
    ///
    /// * `x` - The [`NodeId`] of the first endpoint.
    /// * `y` - The [`NodeId`] of the second endpoint.
    fn edges_between(&self, x: NodeId, y: NodeId) -> impl '_ + Iterator<Item = EdgeId> {
        self.incident(x)
            .filter(move |id| self.get_edge(*id).is_some_and(|e| e.connects(x, y)))
    }

    /// Returns an iterator over all unique neighbors of a given node.
    ///
    /// A neighbor is defined as any node directly connected to the given node by an edge.
    /// Each neighbor appears only once in the result, even if multiple edges connect the
    /// nodes.
    ///
    /// # Arguments
    ///
    /// * `node` - The [`NodeId`] of the node whose neighbors are being retrieved.
    fn neighbors(&self, node: NodeId) -> impl '_ + Iterator<Item = NodeId> {
        let mut set = HashSet::new();
        self.incident(node)
            .filter_map(move |id| self.get_edge(id).and_then(|e| e.other(node)))
            .filter(move |n| set.insert(*n))
    }
}

/// A trait representing a graph that owns its nodes and edges.
///
/// *Owning* here means that the graph generates the IDs. For the cases where you already
/// have IDs and are looking to reuse them, use [`SecondaryGraph`].
///
/// # Examples
///
/// ```
/// use kempe_graph::{Graph, GraphBase, OwnedGraph};
///
/// let mut graph = GraphBase::new();
/// let node1 = graph.add_node();
/// let node2 = graph.add_node();
///
/// let edge = graph.add_edge(node1, node2);
///
/// assert!(graph.has_edge(edge));
/// ```
pub trait OwnedGraph: Graph {
    /// Adds a new node into the graph.
    fn add_node(&mut self) -> NodeId;

    /// Adds an edge to the graph.
    ///
    /// This does not check that the endpoints exist; see [`OwnedGraph::try_add_edge`].
    ///
    /// # Arguments
    ///
    /// - `a`: First endpoint.
    /// - `b`: Second endpoint.
    fn add_edge(&mut self, a: NodeId, b: NodeId) -> EdgeId;

    /// Adds an edge to the graph, after checking that both endpoints are part of it.
    ///
    /// # Errors
    ///
    /// Returns [`MissingNode`] with the first endpoint that could not be found.
    fn try_add_edge(&mut self, a: NodeId, b: NodeId) -> Result<EdgeId, MissingNode> {
        if let Some(missing) = [a, b].into_iter().find(|n| !self.has_node(*n)) {
            return Err(MissingNode(missing));
        }
        Ok(self.add_edge(a, b))
    }
}

/// A trait representing a secondary graph structure.
///
/// This trait allows operations on graphs where the identifiers for nodes and edges
/// are reused or externally provided. Unlike [`OwnedGraph`], it assumes that the
/// graph does not generate IDs on its own but instead operates on existing IDs.
///
/// This is useful for synchronizing changes in a secondary data structure with another graph.
///
/// # Examples
///
/// ```
/// use kempe_graph::{Graph, OwnedGraph, SecondaryGraph, Edge, AdjacencyList, GraphBase};
///
/// let mut owning_graph = GraphBase::new();
/// let mut secondary_graph = AdjacencyList::new();
///
/// let node1 = owning_graph.add_node();
/// let node2 = owning_graph.add_node();
/// let edge1 = owning_graph.add_edge(node1, node2);
///
/// secondary_graph.add_node(node1);
/// secondary_graph.add_node(node2);
/// secondary_graph.add_edge(edge1, Edge::new(node1, node2));
///
/// assert!(secondary_graph.has_edge(edge1));
/// assert_eq!(1, secondary_graph.degree(node2));
/// ```
pub trait SecondaryGraph: Graph {
    /// Adds a node to the secondary graph using an existing [`NodeId`].
    ///
    /// # Arguments
    ///
    /// * `id` - The [`NodeId`] of the node to add.
    fn add_node(&mut self, id: NodeId);

    /// Adds an edge to the secondary graph using an existing [`EdgeId`] and [`Edge`] data.
    ///
    /// # Arguments
    ///
    /// * `id` - The [`EdgeId`] of the edge to add.
    /// * `edge` - The [`Edge`] data describing the connection between two nodes.
    fn add_edge(&mut self, id: EdgeId, edge: Edge);
}

/// A trait for constructing a type from an existing [`Graph`] structure.
///
/// # Examples
///
/// ```
/// use kempe_graph::{Graph, GraphBase, FromGraph, OwnedGraph};
/// use kempe_graph::adjacency::AdjacencyList;
///
/// let mut base_graph = GraphBase::new();
/// let node1 = base_graph.add_node();
/// let node2 = base_graph.add_node();
/// base_graph.add_edge(node1, node2);
///
/// let adjacency_list = AdjacencyList::from_graph(&base_graph);
/// assert_eq!(adjacency_list.num_nodes(), base_graph.num_nodes());
/// assert_eq!(adjacency_list.num_edges(), base_graph.num_edges());
/// ```
pub trait FromGraph: Sized {
    /// Constructs an instance of a type by using an existing [`Graph`] structure.
    fn from_graph(graph: &impl Graph) -> Self;
}

/// Type which wraps both an owning graph type and a secondary graph, to keep them in sync.
///
/// This is also a way to augment any [`SecondaryGraph`] and make it [`OwnedGraph`].
///
/// Node and edge lookups go to the owning graph; incidence queries are answered by the
/// secondary graph, so pairing [`GraphBase`] with [`AdjacencyList`] gives ID generation and
/// fast adjacency enumeration at the same time.
#[derive(Debug, Clone, Default)]
pub struct Attached<OG, SG> {
    /// Owning graph. All IDs are generated here. This is also the graph used as source of truth
    /// for node and edge lookups.
    pub owning: OG,
    /// Secondary graph. Kept in sync with the owning graph, used for incidence queries.
    pub secondary: SG,
}

impl<OG: ops::Index<EdgeId, Output = Edge>, SG> ops::Index<EdgeId> for Attached<OG, SG> {
    type Output = Edge;

    fn index(&self, index: EdgeId) -> &Self::Output {
        &self.owning[index]
    }
}

impl<OG: Graph, SG: Graph> Graph for Attached<OG, SG> {
    fn get_edge(&self, id: EdgeId) -> Option<Edge> {
        self.owning.get_edge(id)
    }

    fn nodes(&self) -> impl '_ + Iterator<Item = NodeId> {
        self.owning.nodes()
    }

    fn edges(&self) -> impl '_ + Iterator<Item = EdgeId> {
        self.owning.edges()
    }

    fn has_node(&self, node: NodeId) -> bool {
        self.owning.has_node(node)
    }

    fn has_edge(&self, id: EdgeId) -> bool {
        self.owning.has_edge(id)
    }

    fn num_nodes(&self) -> usize {
        self.owning.num_nodes()
    }

    fn num_edges(&self) -> usize {
        self.owning.num_edges()
    }

    fn incident(&self, node: NodeId) -> impl '_ + Iterator<Item = EdgeId> {
        self.secondary.incident(node)
    }

    fn degree(&self, node: NodeId) -> usize {
        self.secondary.degree(node)
    }
}

impl<OG: OwnedGraph, SG: SecondaryGraph> OwnedGraph for Attached<OG, SG> {
    fn add_node(&mut self) -> NodeId {
        let id = self.owning.add_node();
        self.secondary.add_node(id);
        id
    }

    fn add_edge(&mut self, a: NodeId, b: NodeId) -> EdgeId {
        let id = self.owning.add_edge(a, b);
        self.secondary.add_edge(id, Edge::new(a, b));
        id
    }
}
