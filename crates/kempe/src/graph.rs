//! Edge-colored graph storage.
use crate::config::FinderConfig;
use crate::error::Error;
use crate::invert::ColorInverter;
use crate::path::{AlternatingPath, PathFinder};
use crate::{Color, Palette};
use kempe_graph::{AdjacencyList, Attached, Edge, EdgeId, Graph, GraphBase, NodeId, OwnedGraph};
use slotmap::SecondaryMap;
use std::collections::HashSet;

/// An undirected multigraph whose edges each carry a [`Color`] from a fixed [`Palette`].
///
/// Edge colors are the only mutable state; the graph structure can be extended but the
/// alternating-path operations never modify it.
///
/// # Examples
///
/// ```
/// use kempe::{Color, ColoredGraph, Palette};
///
/// let mut graph = ColoredGraph::new(Palette::new(3));
/// let a = graph.add_node();
/// let b = graph.add_node();
/// let c = graph.add_node();
/// let ab = graph.add_edge(a, b, Color(1))?;
/// let bc = graph.add_edge(b, c, Color(2))?;
///
/// let path = graph.invert_path(a, Color(1), Color(2))?;
/// assert_eq!(path.edges(), &[ab, bc]);
/// assert_eq!(graph.color(ab), Some(Color(2)));
/// assert_eq!(graph.color(bc), Some(Color(1)));
/// # Ok::<(), kempe::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct ColoredGraph {
    graph: Attached<GraphBase, AdjacencyList>,
    pub(crate) colors: SecondaryMap<EdgeId, Color>,
    palette: Palette,
    config: FinderConfig,
}

impl ColoredGraph {
    /// Create an empty graph using colors from `palette`.
    pub fn new(palette: Palette) -> Self {
        Self::with_config(palette, FinderConfig::default())
    }

    /// Create an empty graph using colors from `palette`, with the given path discovery
    /// configuration.
    pub fn with_config(palette: Palette, config: FinderConfig) -> Self {
        Self {
            graph: Attached::default(),
            colors: SecondaryMap::new(),
            palette,
            config,
        }
    }

    /// Color domain of this graph.
    pub fn palette(&self) -> Palette {
        self.palette
    }

    /// Path discovery configuration used by [`Self::find_path`] and [`Self::invert_path`].
    pub fn config(&self) -> FinderConfig {
        self.config
    }

    /// Adds a new, isolated vertex.
    pub fn add_node(&mut self) -> NodeId {
        self.graph.add_node()
    }

    /// Adds an edge between two vertices of the graph, with the given color.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidColor`] if the color is outside of the palette.
    /// - [`Error::MissingNode`] if either endpoint is not part of the graph.
    pub fn add_edge(&mut self, a: NodeId, b: NodeId, color: Color) -> Result<EdgeId, Error> {
        self.check_color(color)?;
        let id = self.graph.try_add_edge(a, b)?;
        self.colors.insert(id, color);
        Ok(id)
    }

    /// Color of the edge, or `None` if the edge is not part of the graph.
    pub fn color(&self, edge: EdgeId) -> Option<Color> {
        self.colors.get(edge).copied()
    }

    /// Recolors an edge.
    ///
    /// # Errors
    ///
    /// - [`Error::MissingEdge`] if the edge is not part of the graph.
    /// - [`Error::InvalidColor`] if the color is outside of the palette.
    pub fn set_color(&mut self, edge: EdgeId, color: Color) -> Result<(), Error> {
        self.check_color(color)?;
        let slot = self.colors.get_mut(edge).ok_or(Error::MissingEdge(edge))?;
        *slot = color;
        Ok(())
    }

    /// Returns true if no vertex has two incident edges of the same color.
    ///
    /// A self-loop counts once at its vertex.
    pub fn is_proper(&self) -> bool {
        self.graph.nodes().all(|node| {
            let mut seen = HashSet::new();
            self.incident_colors(node).all(|color| seen.insert(color))
        })
    }

    /// Returns true if no edge incident to `node` has the color `color`.
    pub fn is_free(&self, node: NodeId, color: Color) -> bool {
        self.incident_colors(node).all(|c| c != color)
    }

    /// Palette colors not used by any edge incident to `node`, in increasing order.
    pub fn free_colors(&self, node: NodeId) -> impl '_ + Iterator<Item = Color> {
        let used = self.incident_colors(node).collect::<HashSet<_>>();
        self.palette.colors().filter(move |color| !used.contains(color))
    }

    /// Path finder over this graph, using the graph's configuration.
    pub fn path_finder(&self) -> PathFinder<'_> {
        PathFinder::new(self)
    }

    /// Finds the maximal alternating path of edges colored `c` or `d` starting at `start`.
    ///
    /// See [`PathFinder::find_path`].
    pub fn find_path(&self, start: NodeId, c: Color, d: Color) -> Result<AlternatingPath, Error> {
        self.path_finder().find_path(start, c, d)
    }

    /// Finds the alternating path of edges colored `c` or `d` starting at `start`, and swaps
    /// `c` and `d` along it. Returns the inverted path.
    ///
    /// When `c == d` this is a no-op. When the coloring is proper and `start` is missing one
    /// of the two colors, the coloring stays proper and the missing color becomes the other
    /// one at `start`.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidVertex`] if `start` is not part of the graph.
    /// - [`Error::InvalidColor`] if `c` or `d` is outside of the palette.
    ///
    /// No edge is recolored when an error is returned.
    pub fn invert_path(&mut self, start: NodeId, c: Color, d: Color) -> Result<AlternatingPath, Error> {
        let path = self.find_path(start, c, d)?;
        ColorInverter::new(self).invert(&path, c, d);
        Ok(path)
    }

    pub(crate) fn check_vertex(&self, node: NodeId) -> Result<(), Error> {
        if self.graph.has_node(node) {
            Ok(())
        } else {
            Err(Error::InvalidVertex(node))
        }
    }

    pub(crate) fn check_color(&self, color: Color) -> Result<(), Error> {
        if self.palette.contains(color) {
            Ok(())
        } else {
            Err(Error::InvalidColor(color))
        }
    }

    fn incident_colors(&self, node: NodeId) -> impl '_ + Iterator<Item = Color> {
        self.graph.incident(node).filter_map(|edge| self.color(edge))
    }
}

impl Graph for ColoredGraph {
    fn get_edge(&self, id: EdgeId) -> Option<Edge> {
        self.graph.get_edge(id)
    }

    fn nodes(&self) -> impl '_ + Iterator<Item = NodeId> {
        self.graph.nodes()
    }

    fn edges(&self) -> impl '_ + Iterator<Item = EdgeId> {
        self.graph.edges()
    }

    fn has_node(&self, node: NodeId) -> bool {
        self.graph.has_node(node)
    }

    fn has_edge(&self, id: EdgeId) -> bool {
        self.graph.has_edge(id)
    }

    fn num_nodes(&self) -> usize {
        self.graph.num_nodes()
    }

    fn num_edges(&self) -> usize {
        self.graph.num_edges()
    }

    fn incident(&self, node: NodeId) -> impl '_ + Iterator<Item = EdgeId> {
        self.graph.incident(node)
    }

    fn degree(&self, node: NodeId) -> usize {
        self.graph.degree(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn palette() -> Palette {
        Palette::new(4)
    }

    #[rstest]
    fn test_add_edge_validates(palette: Palette) {
        let mut graph = ColoredGraph::new(palette);
        let a = graph.add_node();
        let b = graph.add_node();

        assert_eq!(Err(Error::InvalidColor(Color(4))), graph.add_edge(a, b, Color(4)));
        assert_eq!(graph.num_edges(), 0);

        let mut other = ColoredGraph::new(palette);
        other.add_node();
        other.add_node();
        let foreign = other.add_node();
        assert!(matches!(graph.add_edge(a, foreign, Color(0)), Err(Error::MissingNode(_))));

        let edge = graph.add_edge(a, b, Color(3)).unwrap();
        assert_eq!(graph.color(edge), Some(Color(3)));
    }

    #[rstest]
    fn test_set_color(palette: Palette) {
        let mut graph = ColoredGraph::new(palette);
        let a = graph.add_node();
        let b = graph.add_node();
        let edge = graph.add_edge(a, b, Color(0)).unwrap();

        graph.set_color(edge, Color(2)).unwrap();
        assert_eq!(graph.color(edge), Some(Color(2)));
        assert_eq!(Err(Error::InvalidColor(Color(9))), graph.set_color(edge, Color(9)));
        assert_eq!(graph.color(edge), Some(Color(2)));

        let mut other = ColoredGraph::new(palette);
        let x = other.add_node();
        other.add_edge(x, x, Color(0)).unwrap();
        let foreign = other.add_edge(x, x, Color(0)).unwrap();
        assert_eq!(Err(Error::MissingEdge(foreign)), graph.set_color(foreign, Color(1)));
    }

    #[rstest]
    fn test_is_proper(palette: Palette) {
        let mut graph = ColoredGraph::new(palette);
        let a = graph.add_node();
        let b = graph.add_node();
        let c = graph.add_node();
        graph.add_edge(a, b, Color(0)).unwrap();
        let bc = graph.add_edge(b, c, Color(1)).unwrap();
        assert!(graph.is_proper());

        graph.set_color(bc, Color(0)).unwrap();
        assert!(!graph.is_proper());
    }

    #[rstest]
    fn test_free_colors(palette: Palette) {
        let mut graph = ColoredGraph::new(palette);
        let a = graph.add_node();
        let b = graph.add_node();
        graph.add_edge(a, b, Color(0)).unwrap();
        graph.add_edge(a, b, Color(2)).unwrap();

        assert_eq!(graph.free_colors(a).collect::<Vec<_>>(), vec![Color(1), Color(3)]);
        assert!(graph.is_free(b, Color(1)));
        assert!(!graph.is_free(b, Color(2)));
    }
}
