//! Bijective enumeration of the cells of tensor-product grids.
//!
//! An `N`-dimensional tensor-product grid with `d[i]` cells along axis `i` has, for
//! every `K` in `0..=N`, a finite set of `K`-dimensional cells: vertices, edges,
//! faces, and so on up to the top-dimensional boxes. This crate numbers each of
//! those sets densely and converts in both directions in closed form.
//!
//! # Overview
//!
//! The crate is organized in three layers:
//!
//! 1. **Combinations** - [`combination`]: the `C(N, K)` choices of `K` extending axes,
//!    numbered by the combinatorial number system ([`Combinations`], [`Combination`]).
//! 2. **Cell enumerator** - [`lexicographic`]: [`Lexicographic`] splits the cells
//!    into one block per combination and numbers the cells inside a block as a
//!    mixed-radix number.
//! 3. **Cell descriptor** - [`element`]: [`Element`], the value converted to and
//!    from global indices.
//!
//! Supporting modules:
//!
//! - [`shape`]: validated grid extents ([`GridShape`]).
//! - [`index`]: the integer widths used for global indices, per-axis coordinates,
//!   and axis numbers.
//!
//! `N` and `K` are const generic parameters. Asking for `K > N` fails to compile.
//!
//! # Errors
//!
//! Invalid shapes are reported by [`ShapeError`]. Out-of-range indices and
//! malformed elements are contract violations: the `try_*` methods report them as
//! [`EnumerationError`] or [`CombinationError`], and the plain methods panic.
//!
//! # Examples
//!
//! ```
//! use tensor_enumeration::Lexicographic;
//!
//! // The edges of a 2x3 grid of squares.
//! let edges = Lexicographic::<2, 1>::from_extents([2, 3])?;
//! assert_eq!(edges.size(), 17);
//!
//! let edge = edges.at(16);
//! assert_eq!(edge.directions().in_axes(), &[1]);
//! assert_eq!(edge.coordinates(), [2, 2]);
//! assert_eq!(edges.index_of(&edge), 16);
//! # Ok::<(), tensor_enumeration::ShapeError>(())
//! ```

pub mod combination;
pub mod element;
pub mod index;
pub mod lexicographic;
pub mod shape;

#[cfg(test)]
mod testing;

pub use self::{
    combination::{Combination, CombinationError, Combinations, OutAxes, binomial},
    element::Element,
    index::{DimensionIndex, FiberIndex, GlobalIndex},
    lexicographic::{EnumerationError, Lexicographic},
    shape::{GridShape, ShapeError},
};
