#![warn(missing_docs)]
//! # Alternating paths in edge-colored graphs
//!
//! Implements the augmentation step of constructive proper edge-coloring algorithms
//! (Vizing, Misra-Gries): given two colors `c` and `d` and a starting vertex, find the
//! alternating path (Kempe chain) of edges colored `c` or `d` starting there, and swap the two
//! colors along it.
//!
//! The coloring strategy itself (which vertex and colors to invert, and why) is left to the
//! caller. This crate only discovers and inverts paths, and never checks that the coloring it
//! is given is proper; on improper colorings, the discovery still terminates.
//!
//! ```
//! use kempe::{Color, ColoredGraph, Palette};
//!
//! let mut graph = ColoredGraph::new(Palette::new(3));
//! let [a, b, c, d] = [(); 4].map(|_| graph.add_node());
//! let ab = graph.add_edge(a, b, Color(1))?;
//! let bc = graph.add_edge(b, c, Color(2))?;
//! let cd = graph.add_edge(c, d, Color(1))?;
//!
//! // `a` is missing color 2: inverting frees color 1 at `a` instead.
//! assert!(graph.is_free(a, Color(2)));
//! graph.invert_path(a, Color(1), Color(2))?;
//! assert!(graph.is_free(a, Color(1)));
//! assert_eq!(
//!     [ab, bc, cd].map(|e| graph.color(e)),
//!     [Some(Color(2)), Some(Color(1)), Some(Color(2))]
//! );
//! assert!(graph.is_proper());
//! # Ok::<(), kempe::Error>(())
//! ```
//!
//! Operations take exclusive access to the graph for their duration; sharing a graph between
//! threads requires external synchronization.

pub mod color;
pub mod config;
pub mod error;
pub mod graph;
pub mod invert;
pub mod path;

pub use color::{Color, Palette};
pub use config::{FinderConfig, Tracking};
pub use error::Error;
pub use graph::ColoredGraph;
pub use invert::ColorInverter;
pub use path::{AlternatingPath, PathFinder};

pub use kempe_graph::{Edge, EdgeId, Graph, NodeId};
