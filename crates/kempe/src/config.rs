//! Path discovery configuration.
pub use kempe_graph::algorithms::Tracking;

/// Configuration of the path discovery.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serialize", serde(default))]
pub struct FinderConfig {
    /// How the edge leading to each newly reached vertex is attributed.
    ///
    /// [`Tracking::Predecessor`] returns the full alternating path. [`Tracking::LastDequeued`]
    /// reproduces the output of the legacy single-previous-vertex traversal, which drops edges
    /// whenever the traversal revisits a processed vertex.
    pub tracking: Tracking,
}

impl FinderConfig {
    /// Configuration reproducing the legacy traversal output.
    pub const fn legacy() -> Self {
        Self {
            tracking: Tracking::LastDequeued,
        }
    }
}
