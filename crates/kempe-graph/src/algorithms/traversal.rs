//! Module of traversal algorithms.
use crate::{EdgeId, Graph, NodeId};
use slotmap::SecondaryMap;
use std::collections::{HashSet, VecDeque};

/// How a traversal attributes a predecessor to each newly processed node.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub enum Tracking {
    /// The predecessor is the node whose processing first discovered this node. This is the
    /// true BFS parent, and gives a spanning tree of the explored component.
    #[default]
    Predecessor,
    /// The predecessor is whichever node was dequeued immediately before, processed or not.
    ///
    /// This only matches the BFS parent while the explored subgraph is a simple path walked
    /// from one of its ends, and even then is thrown off by re-dequeued nodes. Kept to
    /// reproduce legacy output.
    LastDequeued,
}

/// A node being processed by a traversal, along with its predecessor.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Visit {
    /// Node being processed.
    pub node: NodeId,
    /// Predecessor of the node, as attributed by the [`Tracking`] mode. `None` for the start
    /// node (and, with [`Tracking::Predecessor`], only for it).
    pub parent: Option<NodeId>,
}

/// Performs a breadth-first search (BFS) traversal of an undirected graph, only following
/// the edges selected by `follow`.
///
/// The frontier is a FIFO queue seeded with `start`. Every node reachable through a followed
/// edge of the node being processed is enqueued, whether or not it has already been
/// processed; the processed check is done when a node is dequeued. Each node is therefore
/// processed at most once, and `on_visit` is called exactly once per processed node, in
/// processing order, starting with `start`.
///
/// The traversal terminates on any finite graph, including ones where the followed subgraph
/// contains cycles or branches, in time proportional to the number of followed edges.
///
/// ### Arguments
///
/// - `graph`: A reference to a graph implementing the [`Graph`] trait.
/// - `start`: The starting node for the BFS traversal.
/// - `follow`: A predicate selecting which edges can be traversed.
/// - `tracking`: How predecessors are attributed, see [`Tracking`].
/// - `on_visit`: A callback receiving each processed node and its predecessor.
///
/// ### Example
///
/// ```
/// use kempe_graph::{GraphBase, OwnedGraph};
/// use kempe_graph::algorithms::{bfs, Tracking, Visit};
///
/// let mut graph = GraphBase::new();
///
/// let node1 = graph.add_node();
/// let node2 = graph.add_node();
/// let node3 = graph.add_node();
/// let node4 = graph.add_node();
/// graph.add_edge(node1, node2);
/// graph.add_edge(node1, node3);
/// let blocked = graph.add_edge(node3, node4);
///
/// let mut visits = Vec::new();
/// bfs(&graph, node1, |edge| edge != blocked, Tracking::Predecessor, |visit| visits.push(visit));
///
/// assert_eq!(
///     vec![
///         Visit { node: node1, parent: None },
///         Visit { node: node2, parent: Some(node1) },
///         Visit { node: node3, parent: Some(node1) },
///     ],
///     visits
/// );
/// ```
pub fn bfs(
    graph: &impl Graph,
    start: NodeId,
    mut follow: impl FnMut(EdgeId) -> bool,
    tracking: Tracking,
    mut on_visit: impl FnMut(Visit),
) {
    let mut processed = HashSet::new();
    let mut discovered_from = SecondaryMap::<NodeId, NodeId>::new();
    let mut previous = None;
    let mut queue = VecDeque::from_iter([start]);
    while let Some(node) = queue.pop_front() {
        if processed.insert(node) {
            let parent = match tracking {
                Tracking::Predecessor => discovered_from.get(node).copied(),
                Tracking::LastDequeued => previous,
            };
            log::trace!("bfs: processing {node:?} (parent {parent:?})");
            on_visit(Visit { node, parent });
            for edge in graph.incident(node) {
                if !follow(edge) {
                    continue;
                }
                let Some(next) = graph.get_edge(edge).and_then(|e| e.other(node)) else {
                    continue;
                };
                if next != start && !discovered_from.contains_key(next) {
                    discovered_from.insert(next, node);
                }
                queue.push_back(next);
            }
        }
        previous = Some(node);
    }
    log::trace!("bfs: processed {} nodes from {start:?}", processed.len());
}
