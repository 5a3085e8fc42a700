//! Color inversion along alternating paths.
use crate::path::AlternatingPath;
use crate::{Color, ColoredGraph};

/// Swaps two colors along a path of a [`ColoredGraph`].
#[derive(Debug)]
pub struct ColorInverter<'a> {
    graph: &'a mut ColoredGraph,
}

impl<'a> ColorInverter<'a> {
    /// Create an inverter with exclusive access to the graph's edge colors.
    pub fn new(graph: &'a mut ColoredGraph) -> Self {
        Self { graph }
    }

    /// Recolors every edge of `path`: edges colored `c` become `d`, and every other edge
    /// becomes `c`.
    ///
    /// Paths returned by [`PathFinder`](crate::PathFinder) only contain edges colored `c` or
    /// `d`, for which this is a swap; inverting the same path twice restores the original
    /// colors. Edges no longer part of the graph are skipped.
    ///
    /// # Examples
    ///
    /// ```
    /// use kempe::{Color, ColorInverter, ColoredGraph, Palette};
    ///
    /// let mut graph = ColoredGraph::new(Palette::new(2));
    /// let a = graph.add_node();
    /// let b = graph.add_node();
    /// let ab = graph.add_edge(a, b, Color(0))?;
    ///
    /// let path = graph.find_path(a, Color(0), Color(1))?;
    /// ColorInverter::new(&mut graph).invert(&path, Color(0), Color(1));
    /// assert_eq!(graph.color(ab), Some(Color(1)));
    /// # Ok::<(), kempe::Error>(())
    /// ```
    pub fn invert(&mut self, path: &AlternatingPath, c: Color, d: Color) {
        for edge in path {
            if let Some(color) = self.graph.colors.get_mut(*edge) {
                *color = if *color == c { d } else { c };
            }
        }
        log::debug!("invert: swapped {c}/{d} on {} edge(s)", path.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Palette;
    use kempe_graph::EdgeId;

    fn colors(graph: &ColoredGraph, edges: &[EdgeId]) -> Vec<Color> {
        edges.iter().filter_map(|e| graph.color(*e)).collect()
    }

    #[test]
    fn test_invert_twice_restores() {
        let mut graph = ColoredGraph::new(Palette::new(3));
        let a = graph.add_node();
        let b = graph.add_node();
        let c = graph.add_node();
        let edges = [
            graph.add_edge(a, b, Color(0)).unwrap(),
            graph.add_edge(b, c, Color(2)).unwrap(),
        ];
        let path = graph.find_path(a, Color(0), Color(2)).unwrap();

        ColorInverter::new(&mut graph).invert(&path, Color(0), Color(2));
        assert_eq!(colors(&graph, &edges), vec![Color(2), Color(0)]);

        ColorInverter::new(&mut graph).invert(&path, Color(0), Color(2));
        assert_eq!(colors(&graph, &edges), vec![Color(0), Color(2)]);
    }

    #[test]
    fn test_foreign_color_forced_to_c() {
        let mut graph = ColoredGraph::new(Palette::new(3));
        let a = graph.add_node();
        let b = graph.add_node();
        let ab = graph.add_edge(a, b, Color(1)).unwrap();
        let path = graph.find_path(a, Color(1), Color(2)).unwrap();

        // Recolored behind the path's back: neither `c` nor `d` any more.
        graph.set_color(ab, Color(0)).unwrap();
        ColorInverter::new(&mut graph).invert(&path, Color(1), Color(2));
        assert_eq!(graph.color(ab), Some(Color(1)));
    }
}
