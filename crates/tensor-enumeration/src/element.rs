//! Cell descriptors.
//!
//! An [`Element`] names one `K`-cell of an `N`-dimensional tensor-product grid. It
//! records the axes the cell extends along, and one digit per axis:
//!
//! - along each chosen axis, the index of the edge the cell spans (`0..d`)
//! - across each remaining axis, the index of the vertex the cell sits on (`0..=d`)
//!
//! Elements do not refer back to an enumerator. The same element is meaningful for
//! every enumerator over a grid of the same shape.
//!
//! # Examples
//!
//! ```
//! use tensor_enumeration::{Combination, Element};
//!
//! // The edge along axis 1 that starts at vertex 2 of axis 0.
//! let directions = Combination::<2, 1>::new([1])?;
//! let edge = Element::new(directions, [0], &[2]);
//! assert_eq!(edge.coordinates(), [2, 0]);
//! assert_eq!(edge.to_string(), "{1} (2,0)");
//! # Ok::<(), tensor_enumeration::CombinationError>(())
//! ```

use std::fmt::{self, Display};

use tinyvec::ArrayVec;

use crate::{combination::Combination, index::FiberIndex};

/// Descriptor of a `K`-cell in an `N`-dimensional tensor-product grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Element<const N: usize, const K: usize> {
    directions: Combination<N, K>,
    position_along: [FiberIndex; K],
    /// Always holds exactly `N - K` digits.
    position_across: ArrayVec<[FiberIndex; N]>,
}

impl<const N: usize, const K: usize> Element<N, K> {
    /// Creates an element from its directions and its digits.
    ///
    /// `position_along[j]` is the digit for axis `directions.in_axis(j)`, and
    /// `position_across[j]` the digit for axis `directions.out_axis(j)`.
    ///
    /// # Panics
    ///
    /// Panics if `position_across` does not hold exactly `N - K` digits.
    #[must_use]
    pub fn new(
        directions: Combination<N, K>,
        position_along: [FiberIndex; K],
        position_across: &[FiberIndex],
    ) -> Self {
        assert_eq!(
            position_across.len(),
            N - K,
            "an element of a {K}-cell in {N} dimensions needs {} across digits",
            N - K
        );
        let mut across = ArrayVec::new();
        across.extend_from_slice(position_across);
        Self::from_parts(directions, position_along, across)
    }

    pub(crate) fn from_parts(
        directions: Combination<N, K>,
        position_along: [FiberIndex; K],
        position_across: ArrayVec<[FiberIndex; N]>,
    ) -> Self {
        debug_assert_eq!(position_across.len(), N - K);
        Self {
            directions,
            position_along,
            position_across,
        }
    }

    /// Creates an element from per-axis coordinates in natural axis order.
    ///
    /// This is the inverse of [`Element::coordinates`].
    #[must_use]
    pub fn from_coordinates(directions: Combination<N, K>, coordinates: [FiberIndex; N]) -> Self {
        let mut position_along = [0; K];
        for (digit, &axis) in position_along.iter_mut().zip(directions.in_axes()) {
            *digit = coordinates[usize::from(axis)];
        }
        let position_across = directions
            .out_axes()
            .map(|axis| coordinates[usize::from(axis)])
            .collect();
        Self::from_parts(directions, position_along, position_across)
    }

    /// Returns the axes along which the cell extends.
    #[must_use]
    pub fn directions(&self) -> &Combination<N, K> {
        &self.directions
    }

    /// Returns the edge indices along each chosen axis, in direction order.
    #[must_use]
    pub fn position_along(&self) -> &[FiberIndex; K] {
        &self.position_along
    }

    /// Returns the vertex indices across each remaining axis, in increasing axis order.
    #[must_use]
    pub fn position_across(&self) -> &[FiberIndex] {
        &self.position_across
    }

    /// Returns the digits scattered into natural axis order.
    #[must_use]
    pub fn coordinates(&self) -> [FiberIndex; N] {
        let mut coordinates = [0; N];
        for (&axis, &digit) in self.directions.in_axes().iter().zip(&self.position_along) {
            coordinates[usize::from(axis)] = digit;
        }
        for (axis, &digit) in self.directions.out_axes().zip(self.position_across.iter()) {
            coordinates[usize::from(axis)] = digit;
        }
        coordinates
    }
}

impl<const N: usize, const K: usize> Display for Element<N, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (", self.directions)?;
        for (axis, coordinate) in self.coordinates().iter().enumerate() {
            if axis > 0 {
                f.write_str(",")?;
            }
            Display::fmt(coordinate, f)?;
        }
        f.write_str(")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let directions = Combination::<3, 1>::new([1]).unwrap();
        let element = Element::new(directions, [4], &[2, 7]);
        assert_eq!(element.directions(), &directions);
        assert_eq!(element.position_along(), &[4]);
        assert_eq!(element.position_across(), &[2, 7]);
    }

    #[test]
    fn test_coordinates_scatter() {
        let directions = Combination::<4, 2>::new([0, 2]).unwrap();
        let element = Element::new(directions, [5, 6], &[1, 3]);
        assert_eq!(element.coordinates(), [5, 1, 6, 3]);
    }

    #[test]
    fn test_from_coordinates_inverts_coordinates() {
        let directions = Combination::<4, 2>::new([1, 3]).unwrap();
        let element = Element::from_coordinates(directions, [9, 8, 7, 6]);
        assert_eq!(element.position_along(), &[8, 6]);
        assert_eq!(element.position_across(), &[9, 7]);
        assert_eq!(element.coordinates(), [9, 8, 7, 6]);
        assert_eq!(element, Element::new(directions, [8, 6], &[9, 7]));
    }

    #[test]
    fn test_vertex_and_top_cell() {
        let vertex = Element::new(Combination::<3, 0>::new([]).unwrap(), [], &[1, 0, 1]);
        assert_eq!(vertex.coordinates(), [1, 0, 1]);
        assert_eq!(vertex.to_string(), "{} (1,0,1)");

        let cube = Element::new(Combination::<3, 3>::new([0, 1, 2]).unwrap(), [3, 4, 5], &[]);
        assert_eq!(cube.position_across(), &[] as &[FiberIndex]);
        assert_eq!(cube.to_string(), "{0,1,2} (3,4,5)");
    }

    #[test]
    fn test_display() {
        let directions = Combination::<2, 1>::new([0]).unwrap();
        assert_eq!(Element::new(directions, [1], &[3]).to_string(), "{0} (1,3)");
    }

    #[test]
    #[should_panic(expected = "needs 2 across digits")]
    fn test_new_rejects_wrong_across_len() {
        let directions = Combination::<3, 1>::new([0]).unwrap();
        let _ = Element::new(directions, [0], &[0]);
    }
}
