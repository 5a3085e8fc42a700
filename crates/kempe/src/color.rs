//! Edge colors and the palette they are drawn from.
use derive_more::{Display, From};

/// Opaque edge color identifier.
///
/// Colors are compared by identity only; their numeric value carries no meaning beyond its
/// position in a [`Palette`].
#[derive(Debug, Display, From, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct Color(pub usize);

/// The color domain of a graph: colors `0..size`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct Palette {
    size: usize,
}

impl Palette {
    /// Create a palette of `size` colors.
    pub const fn new(size: usize) -> Self {
        Self { size }
    }

    /// Number of colors in the palette.
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Returns true if the color belongs to this palette.
    pub const fn contains(&self, color: Color) -> bool {
        color.0 < self.size
    }

    /// Iterate over all colors of the palette, in increasing order.
    pub fn colors(&self) -> impl Iterator<Item = Color> {
        (0..self.size).map(Color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, true)]
    #[case(2, true)]
    #[case(3, false)]
    #[case(usize::MAX, false)]
    fn test_contains(#[case] color: usize, #[case] expected: bool) {
        assert_eq!(Palette::new(3).contains(Color(color)), expected);
    }

    #[test]
    fn test_colors() {
        let palette = Palette::new(3);
        assert_eq!(palette.colors().collect::<Vec<_>>(), vec![Color(0), Color(1), Color(2)]);
        assert_eq!(Palette::new(0).colors().count(), 0);
    }

    #[test]
    fn test_display_and_from() {
        assert_eq!(Color::from(4).to_string(), "4");
    }

    #[cfg(feature = "serialize")]
    #[test]
    fn test_serialize_color() {
        let json = serde_json::to_string(&Color(7)).unwrap();
        assert_eq!(json, "7");
        assert_eq!(serde_json::from_str::<Color>(&json).unwrap(), Color(7));
    }
}
