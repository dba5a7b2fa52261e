//! Grid shapes.
//!
//! A [`GridShape`] stores, for each of the `N` axes, the number of cells `d` along
//! that axis. The axis then has `d` edges and `d + 1` vertices. Every extent is
//! checked when the shape is built, so an enumerator never sees an empty axis.
//!
//! # Examples
//!
//! ```
//! use tensor_enumeration::GridShape;
//!
//! let shape: GridShape<3> = "2x3x4".parse()?;
//! assert_eq!(shape.extents(), &[2, 3, 4]);
//! assert_eq!(shape.vertex_count(1), 4);
//! assert_eq!(shape.to_string(), "2x3x4");
//! # Ok::<(), tensor_enumeration::ShapeError>(())
//! ```

use std::{
    fmt::{self, Display},
    num::ParseIntError,
    str::FromStr,
};

use crate::index::FiberIndex;

/// Errors produced when building a grid shape or an enumerator over it.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ShapeError {
    /// An axis has no cells.
    #[display("axis {axis} has zero extent")]
    ZeroExtent {
        /// The offending axis.
        axis: usize,
    },
    /// The vertex count of an axis, `extent + 1`, does not fit in [`FiberIndex`].
    #[display("extent {extent} of axis {axis} is too large")]
    ExtentTooLarge {
        /// The offending axis.
        axis: usize,
        /// The extent given for it.
        extent: FiberIndex,
    },
    /// A parsed shape has the wrong number of axes.
    #[display("expected {expected} extents, got {actual}")]
    WrongAxisCount {
        /// The order of the grid.
        expected: usize,
        /// The number of extents found.
        actual: usize,
    },
    /// A parsed extent is not a number.
    #[display("invalid extent `{text}`")]
    InvalidExtent {
        /// The text that failed to parse.
        text: String,
        /// The underlying parse error.
        source: ParseIntError,
    },
    /// The number of cells does not fit in [`GlobalIndex`](crate::GlobalIndex).
    #[display("number of {cell_dimension}-cells overflows the global index")]
    SizeOverflow {
        /// The dimension of the cells being enumerated.
        cell_dimension: usize,
    },
}

/// The number of cells along each axis of an `N`-dimensional tensor-product grid.
///
/// Every extent is at least 1, and `extent + 1` fits in [`FiberIndex`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridShape<const N: usize> {
    extents: [FiberIndex; N],
}

impl<const N: usize> GridShape<N> {
    /// Creates a shape from per-axis extents.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::ZeroExtent`] if an extent is 0, and
    /// [`ShapeError::ExtentTooLarge`] if an extent is [`FiberIndex::MAX`].
    pub fn new(extents: [FiberIndex; N]) -> Result<Self, ShapeError> {
        for (axis, &extent) in extents.iter().enumerate() {
            if extent == 0 {
                return Err(ShapeError::ZeroExtent { axis });
            }
            if extent == FiberIndex::MAX {
                return Err(ShapeError::ExtentTooLarge { axis, extent });
            }
        }
        Ok(Self { extents })
    }

    /// Returns the number of axes, `N`.
    #[must_use]
    pub const fn order() -> usize {
        N
    }

    /// Returns the per-axis extents.
    #[must_use]
    pub fn extents(&self) -> &[FiberIndex; N] {
        &self.extents
    }

    /// Returns the number of cells (edges) along `axis`.
    ///
    /// # Panics
    ///
    /// Panics if `axis >= N`.
    #[must_use]
    pub fn extent(&self, axis: usize) -> FiberIndex {
        self.extents[axis]
    }

    /// Returns the number of vertices along `axis`, `extent + 1`.
    ///
    /// # Panics
    ///
    /// Panics if `axis >= N`.
    #[must_use]
    pub fn vertex_count(&self, axis: usize) -> FiberIndex {
        self.extents[axis] + 1
    }
}

/// Splits a textual shape such as `2x3x4` into its extent tokens.
///
/// Extents are separated by `x`, `,` or whitespace. Empty tokens are skipped, so
/// the number of tokens is the order of the shape [`GridShape::from_str`] parses.
///
/// # Examples
///
/// ```
/// use tensor_enumeration::shape::split_extents;
///
/// assert_eq!(split_extents("2x3, 4").collect::<Vec<_>>(), ["2", "3", "4"]);
/// assert_eq!(split_extents("").count(), 0);
/// ```
pub fn split_extents(s: &str) -> impl Iterator<Item = &str> {
    s.split(|c: char| c == 'x' || c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty())
}

impl<const N: usize> TryFrom<[FiberIndex; N]> for GridShape<N> {
    type Error = ShapeError;

    fn try_from(extents: [FiberIndex; N]) -> Result<Self, Self::Error> {
        Self::new(extents)
    }
}

impl<const N: usize> FromStr for GridShape<N> {
    type Err = ShapeError;

    /// Parses extents separated by `x`, `,` or whitespace, such as `2x3x4`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = split_extents(s).collect();
        if parts.len() != N {
            return Err(ShapeError::WrongAxisCount {
                expected: N,
                actual: parts.len(),
            });
        }

        let mut extents = [0; N];
        for (extent, part) in extents.iter_mut().zip(parts) {
            *extent = part.parse().map_err(|source| ShapeError::InvalidExtent {
                text: part.to_owned(),
                source,
            })?;
        }
        Self::new(extents)
    }
}

impl<const N: usize> Display for GridShape<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (axis, extent) in self.extents.iter().enumerate() {
            if axis > 0 {
                f.write_str("x")?;
            }
            Display::fmt(extent, f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let shape = GridShape::new([2, 3]).unwrap();
        assert_eq!(shape.extents(), &[2, 3]);
        assert_eq!(shape.extent(1), 3);
        assert_eq!(shape.vertex_count(0), 3);
        assert_eq!(GridShape::<2>::order(), 2);
    }

    #[test]
    fn test_rejects_zero_extent() {
        assert_eq!(
            GridShape::new([2, 0, 1]),
            Err(ShapeError::ZeroExtent { axis: 1 })
        );
    }

    #[test]
    fn test_rejects_extent_without_vertex_room() {
        assert_eq!(
            GridShape::new([FiberIndex::MAX]),
            Err(ShapeError::ExtentTooLarge {
                axis: 0,
                extent: FiberIndex::MAX
            })
        );
        assert!(GridShape::new([FiberIndex::MAX - 1]).is_ok());
    }

    #[test]
    fn test_parse() {
        let shape: GridShape<3> = "2x3x4".parse().unwrap();
        assert_eq!(shape.extents(), &[2, 3, 4]);

        let shape: GridShape<3> = " 2, 3 ,4 ".parse().unwrap();
        assert_eq!(shape.extents(), &[2, 3, 4]);

        let shape: GridShape<0> = "".parse().unwrap();
        assert_eq!(shape.extents(), &[]);
    }

    #[test]
    fn test_split_extents_matches_parse() {
        for text in ["2x3x4", " 2, 3 ,4 ", "2 x3\t4", "2xx3x4,"] {
            assert_eq!(split_extents(text).count(), 3, "{text:?}");
            let shape: GridShape<3> = text.parse().unwrap();
            assert_eq!(shape.extents(), &[2, 3, 4], "{text:?}");
        }
        assert_eq!(split_extents("  ").count(), 0);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "2x3".parse::<GridShape<3>>(),
            Err(ShapeError::WrongAxisCount {
                expected: 3,
                actual: 2
            })
        );
        assert!(matches!(
            "2xax3".parse::<GridShape<3>>(),
            Err(ShapeError::InvalidExtent { text, .. }) if text == "a"
        ));
        assert_eq!(
            "2x0".parse::<GridShape<2>>(),
            Err(ShapeError::ZeroExtent { axis: 1 })
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(GridShape::new([4, 5, 6]).unwrap().to_string(), "4x5x6");
        assert_eq!(GridShape::new([7]).unwrap().to_string(), "7");
        assert_eq!(
            ShapeError::ZeroExtent { axis: 2 }.to_string(),
            "axis 2 has zero extent"
        );
    }
}
