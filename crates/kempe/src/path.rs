//! Discovery of alternating paths.
use crate::config::FinderConfig;
use crate::error::Error;
use crate::{Color, ColoredGraph};
use kempe_graph::algorithms::{bfs, Visit};
use kempe_graph::{EdgeId, Graph, NodeId};
use std::slice;

/// Ordered sequence of edges forming an alternating path, as returned by
/// [`PathFinder::find_path`].
#[derive(Debug, Clone, Default, Eq, PartialEq, Hash)]
pub struct AlternatingPath {
    edges: Vec<EdgeId>,
}

impl AlternatingPath {
    /// Edges of the path, in traversal order.
    pub fn edges(&self) -> &[EdgeId] {
        &self.edges
    }

    /// Number of edges in the path.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Returns true if the path contains no edges.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Iterate over the edges of the path, in traversal order.
    pub fn iter(&self) -> impl '_ + Iterator<Item = EdgeId> {
        self.edges.iter().copied()
    }
}

impl<'a> IntoIterator for &'a AlternatingPath {
    type Item = &'a EdgeId;
    type IntoIter = slice::Iter<'a, EdgeId>;

    fn into_iter(self) -> Self::IntoIter {
        self.edges.iter()
    }
}

impl IntoIterator for AlternatingPath {
    type Item = EdgeId;
    type IntoIter = std::vec::IntoIter<EdgeId>;

    fn into_iter(self) -> Self::IntoIter {
        self.edges.into_iter()
    }
}

impl From<AlternatingPath> for Vec<EdgeId> {
    fn from(value: AlternatingPath) -> Self {
        value.edges
    }
}

/// Read-only query finding alternating paths in a [`ColoredGraph`].
#[derive(Debug, Copy, Clone)]
pub struct PathFinder<'a> {
    graph: &'a ColoredGraph,
    config: FinderConfig,
}

impl<'a> PathFinder<'a> {
    /// Create a path finder using the graph's own configuration.
    pub fn new(graph: &'a ColoredGraph) -> Self {
        Self::with_config(graph, graph.config())
    }

    /// Create a path finder with an explicit configuration.
    pub fn with_config(graph: &'a ColoredGraph, config: FinderConfig) -> Self {
        Self { graph, config }
    }

    /// Finds the path of edges colored `c` or `d` reachable from `start`.
    ///
    /// The subgraph made of the edges colored `c` or `d` is explored breadth-first from
    /// `start`. Each time a new vertex is reached, the edges colored `c` or `d` joining it to
    /// its predecessor are appended to the path (all of them, if there are parallel edges).
    /// Only edges colored `c` or `d` are ever returned.
    ///
    /// When the coloring is proper, every vertex has at most one edge of each color, so the
    /// subgraph is a disjoint union of simple paths and cycles. If `start` is then missing
    /// `c` or `d`, the returned path is exactly the maximal alternating path starting at it.
    /// On any other graph the traversal still terminates, and returns a spanning tree of the
    /// component of `start` in the subgraph (or, with
    /// [`Tracking::LastDequeued`](crate::Tracking::LastDequeued), whatever the legacy
    /// traversal order yields).
    ///
    /// If `c == d`, no traversal is done and the path is empty. A `start` with no incident
    /// edge colored `c` or `d` also yields an empty path.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidVertex`] if `start` is not part of the graph.
    /// - [`Error::InvalidColor`] if `c` or `d` is outside of the palette. This is checked
    ///   before the `c == d` shortcut.
    ///
    /// # Examples
    ///
    /// ```
    /// use kempe::{Color, ColoredGraph, Palette, PathFinder};
    ///
    /// let mut graph = ColoredGraph::new(Palette::new(4));
    /// let a = graph.add_node();
    /// let b = graph.add_node();
    /// let c = graph.add_node();
    /// let ab = graph.add_edge(a, b, Color(0))?;
    /// graph.add_edge(b, c, Color(3))?;
    ///
    /// let finder = PathFinder::new(&graph);
    /// assert_eq!(finder.find_path(a, Color(0), Color(1))?.edges(), &[ab]);
    /// assert!(finder.find_path(a, Color(0), Color(0))?.is_empty());
    /// # Ok::<(), kempe::Error>(())
    /// ```
    pub fn find_path(&self, start: NodeId, c: Color, d: Color) -> Result<AlternatingPath, Error> {
        self.graph.check_vertex(start)?;
        self.graph.check_color(c)?;
        self.graph.check_color(d)?;
        if c == d {
            log::debug!("find_path: {c} == {d}, nothing to find from {start:?}");
            return Ok(AlternatingPath::default());
        }

        let graph = self.graph;
        let alternating = |edge: EdgeId| graph.color(edge).is_some_and(|color| color == c || color == d);
        let mut edges = Vec::new();
        bfs(graph, start, alternating, self.config.tracking, |Visit { node, parent }| {
            if let Some(parent) = parent {
                edges.extend(graph.edges_between(parent, node).filter(|edge| alternating(*edge)));
            }
        });

        log::debug!(
            "find_path: {} edge(s) alternating {c}/{d} from {start:?}",
            edges.len()
        );
        Ok(AlternatingPath { edges })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Palette, Tracking};
    use rstest::{fixture, rstest};

    struct Chain {
        graph: ColoredGraph,
        nodes: [NodeId; 4],
        edges: [EdgeId; 3],
    }

    /// A - B - C - D colored 1, 2, 1.
    #[fixture]
    fn chain() -> Chain {
        let mut graph = ColoredGraph::new(Palette::new(4));
        let nodes = [graph.add_node(), graph.add_node(), graph.add_node(), graph.add_node()];
        let [a, b, c, d] = nodes;
        let edges = [
            graph.add_edge(a, b, Color(1)).unwrap(),
            graph.add_edge(b, c, Color(2)).unwrap(),
            graph.add_edge(c, d, Color(1)).unwrap(),
        ];
        Chain { graph, nodes, edges }
    }

    #[rstest]
    fn test_chain_from_endpoint(chain: Chain) {
        let path = chain.graph.find_path(chain.nodes[0], Color(1), Color(2)).unwrap();
        assert_eq!(path.edges(), &chain.edges);
    }

    #[rstest]
    fn test_chain_from_other_endpoint(chain: Chain) {
        let path = chain.graph.find_path(chain.nodes[3], Color(2), Color(1)).unwrap();
        let [ab, bc, cd] = chain.edges;
        assert_eq!(path.edges(), &[cd, bc, ab]);
    }

    #[rstest]
    fn test_chain_stops_at_other_colors(chain: Chain) {
        let path = chain.graph.find_path(chain.nodes[0], Color(1), Color(3)).unwrap();
        assert_eq!(path.edges(), &chain.edges[..1]);
    }

    #[rstest]
    fn test_chain_legacy_tracking(chain: Chain) {
        let finder = PathFinder::with_config(&chain.graph, FinderConfig::legacy());
        let path = finder.find_path(chain.nodes[0], Color(1), Color(2)).unwrap();
        assert_eq!(path.edges(), &chain.edges[..1]);
    }

    #[rstest]
    #[case::equal_colors(1, 1)]
    #[case::no_matching_edge(0, 3)]
    fn test_empty_path(chain: Chain, #[case] c: usize, #[case] d: usize) {
        let path = chain.graph.find_path(chain.nodes[1], Color(c), Color(d)).unwrap();
        assert!(path.is_empty());
    }

    #[rstest]
    fn test_isolated_vertex(mut chain: Chain) {
        let lonely = chain.graph.add_node();
        assert!(chain.graph.find_path(lonely, Color(1), Color(2)).unwrap().is_empty());
    }

    #[rstest]
    #[case::c(Color(4), Color(1))]
    #[case::d(Color(1), Color(4))]
    #[case::both_equal(Color(7), Color(7))]
    fn test_invalid_color(chain: Chain, #[case] c: Color, #[case] d: Color) {
        let expected = if c.0 >= 4 { c } else { d };
        assert_eq!(
            Err(Error::InvalidColor(expected)),
            chain.graph.find_path(chain.nodes[0], c, d)
        );
    }

    #[rstest]
    fn test_invalid_vertex(chain: Chain) {
        let mut other = ColoredGraph::new(Palette::new(4));
        let foreign = (0..5).map(|_| other.add_node()).last().unwrap();
        assert_eq!(
            Err(Error::InvalidVertex(foreign)),
            chain.graph.find_path(foreign, Color(1), Color(2))
        );
    }

    #[rstest]
    fn test_parallel_edges_filtered_by_color() {
        let mut graph = ColoredGraph::new(Palette::new(4));
        let a = graph.add_node();
        let b = graph.add_node();
        let ab1 = graph.add_edge(a, b, Color(1)).unwrap();
        graph.add_edge(a, b, Color(3)).unwrap();
        let ab2 = graph.add_edge(b, a, Color(2)).unwrap();

        let path = graph.find_path(a, Color(1), Color(2)).unwrap();
        assert_eq!(path.edges(), &[ab1, ab2]);
    }

    #[rstest]
    fn test_start_in_middle_of_path(chain: Chain) {
        let [_, b, _, _] = chain.nodes;
        let [ab, bc, cd] = chain.edges;
        let path = chain.graph.find_path(b, Color(1), Color(2)).unwrap();
        assert_eq!(path.edges(), &[ab, bc, cd]);
    }

    #[rstest]
    #[case::predecessor(Tracking::Predecessor, 3)]
    #[case::last_dequeued(Tracking::LastDequeued, 1)]
    fn test_even_cycle_terminates(#[case] tracking: Tracking, #[case] expected: usize) {
        let mut graph = ColoredGraph::new(Palette::new(2));
        let nodes = [graph.add_node(), graph.add_node(), graph.add_node(), graph.add_node()];
        for i in 0..nodes.len() {
            graph
                .add_edge(nodes[i], nodes[(i + 1) % nodes.len()], Color(i % 2))
                .unwrap();
        }

        let finder = PathFinder::with_config(&graph, FinderConfig { tracking });
        let path = finder.find_path(nodes[0], Color(0), Color(1)).unwrap();
        assert_eq!(path.len(), expected);
    }

    #[rstest]
    fn test_branching_subgraph() {
        // Improper coloring: the center has three edges of color 0.
        let mut graph = ColoredGraph::new(Palette::new(2));
        let center = graph.add_node();
        let leaves = [graph.add_node(), graph.add_node(), graph.add_node()];
        let spokes = leaves.map(|leaf| graph.add_edge(center, leaf, Color(0)).unwrap());

        let path = graph.find_path(center, Color(0), Color(1)).unwrap();
        assert_eq!(path.edges(), &spokes);

        let legacy = PathFinder::with_config(&graph, FinderConfig::legacy())
            .find_path(center, Color(0), Color(1))
            .unwrap();
        assert_eq!(legacy.edges(), &spokes[..1]);
    }
}
