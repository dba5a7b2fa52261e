//! Enumeration of the `K`-cells of a tensor-product grid.
//!
//! [`Lexicographic`] numbers every `K`-cell of an `N`-dimensional grid with an index
//! in `0..size`, and converts in both directions.
//!
//! # Layout
//!
//! Cells are grouped into blocks, one per [`Combination`] of extending axes, and
//! blocks are laid out in [`Combinations`] order. Within a block, an index is a
//! mixed-radix number. The least significant digit comes first:
//!
//! 1. one digit per chosen axis `a`, in direction order, with radix `d[a]`
//!    (the edges along `a`)
//! 2. one digit per remaining axis `a`, in increasing order, with radix `d[a] + 1`
//!    (the vertices across `a`)
//!
//! # Examples
//!
//! ```
//! use tensor_enumeration::{Combination, Element, Lexicographic};
//!
//! // Edges of a grid with 2 cells along x and 3 along y.
//! let edges = Lexicographic::<2, 1>::from_extents([2, 3])?;
//! assert_eq!(edges.size(), 17);
//! assert_eq!(edges.block_size(0), 8); // 2 edges along x, on 4 rows of vertices
//! assert_eq!(edges.block_size(1), 9); // 3 edges along y, on 3 columns of vertices
//!
//! let e = edges.at(8);
//! assert_eq!(e.to_string(), "{1} (0,0)");
//! assert_eq!(edges.index_of(&e), 8);
//!
//! let e = Element::new(Combination::new([0])?, [1], &[3]);
//! assert_eq!(edges.index_of(&e), 7);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use tinyvec::ArrayVec;

use crate::{
    combination::{Combination, Combinations},
    element::Element,
    index::{DimensionIndex, FiberIndex, GlobalIndex},
    shape::{GridShape, ShapeError},
};

/// Errors produced when converting between indices and elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum EnumerationError {
    /// A global index is not smaller than the number of cells.
    #[display("index {index} is out of range for {size} cells")]
    IndexOutOfRange {
        /// The requested index.
        index: GlobalIndex,
        /// The number of cells.
        size: GlobalIndex,
    },
    /// A block index is not smaller than the number of blocks.
    #[display("block {block} is out of range for {count} blocks")]
    BlockOutOfRange {
        /// The requested block.
        block: usize,
        /// The number of blocks.
        count: usize,
    },
    /// A coordinate of an element is not smaller than the radix of its axis.
    #[display("coordinate {coordinate} on axis {axis} is out of range for radix {radix}")]
    CoordinateOutOfRange {
        /// The grid axis of the offending coordinate.
        axis: DimensionIndex,
        /// The offending coordinate.
        coordinate: FiberIndex,
        /// The number of values the coordinate may take on that axis.
        radix: FiberIndex,
    },
}

/// The `K`-dimensional cells of an `N`-dimensional tensor-product grid, in
/// block-major, mixed-radix order.
///
/// Blocks follow [`Combinations`] order, which is the combinatorial number
/// system rather than strict lexicographic order: for `N = 4, K = 2` the block
/// of `{1,2}` comes before the block of `{0,3}`.
///
/// The enumerator is immutable after construction and can be shared freely
/// between threads.
///
/// # Examples
///
/// ```
/// use tensor_enumeration::{GridShape, Lexicographic};
///
/// let shape: GridShape<3> = "2x2x2".parse()?;
/// let faces = Lexicographic::<3, 2>::new(shape)?;
/// assert_eq!(faces.size(), 36);
///
/// for i in 0..faces.size() {
///     assert_eq!(faces.index_of(&faces.at(i)), i);
/// }
/// # Ok::<(), tensor_enumeration::ShapeError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexicographic<const N: usize, const K: usize> {
    shape: GridShape<N>,
    block_sizes: Box<[GlobalIndex]>,
    /// `block_offsets[b]` is the sum of the sizes of all blocks before `b`.
    block_offsets: Box<[GlobalIndex]>,
    size: GlobalIndex,
}

impl<const N: usize, const K: usize> Lexicographic<N, K> {
    /// Creates an enumerator for the `K`-cells of `shape`.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::SizeOverflow`] if the number of cells does not fit in
    /// [`GlobalIndex`].
    pub fn new(shape: GridShape<N>) -> Result<Self, ShapeError> {
        let count = Combinations::<N, K>::COUNT;
        let overflow = || ShapeError::SizeOverflow { cell_dimension: K };

        let mut block_sizes = Vec::with_capacity(count);
        let mut block_offsets = Vec::with_capacity(count);
        let mut size: GlobalIndex = 0;
        for block in 0..count {
            let directions = Combinations::<N, K>::at(block);
            let block_size = radices(&shape, &directions)
                .try_fold(1, |product: GlobalIndex, (_, radix)| {
                    product.checked_mul(GlobalIndex::from(radix))
                })
                .ok_or_else(overflow)?;
            block_offsets.push(size);
            block_sizes.push(block_size);
            size = size.checked_add(block_size).ok_or_else(overflow)?;
        }

        log::debug!("{K}-cells of {shape} grid: {count} blocks, {size} cells");
        Ok(Self {
            shape,
            block_sizes: block_sizes.into_boxed_slice(),
            block_offsets: block_offsets.into_boxed_slice(),
            size,
        })
    }

    /// Validates `extents` and creates an enumerator for the `K`-cells of that grid.
    ///
    /// # Errors
    ///
    /// Returns the errors of [`GridShape::new`] and [`Lexicographic::new`].
    pub fn from_extents(extents: [FiberIndex; N]) -> Result<Self, ShapeError> {
        Self::new(GridShape::new(extents)?)
    }

    /// Returns the order of the grid, `N`.
    #[must_use]
    pub const fn order() -> usize {
        N
    }

    /// Returns the dimension of the enumerated cells, `K`.
    #[must_use]
    pub const fn cell_dimension() -> usize {
        K
    }

    /// Returns the shape of the grid.
    #[must_use]
    pub fn shape(&self) -> &GridShape<N> {
        &self.shape
    }

    /// Returns the number of `K`-cells.
    #[must_use]
    pub fn size(&self) -> GlobalIndex {
        self.size
    }

    /// Returns the number of blocks, `C(N, K)`.
    #[must_use]
    pub const fn block_count() -> usize {
        Combinations::<N, K>::COUNT
    }

    /// Returns the number of cells extending along the directions of `block`.
    ///
    /// # Panics
    ///
    /// Panics if `block >= C(N, K)`.
    #[must_use]
    pub fn block_size(&self, block: usize) -> GlobalIndex {
        match self.try_block_size(block) {
            Ok(size) => size,
            Err(err) => panic!("{err}"),
        }
    }

    /// Returns the number of cells extending along the directions of `block`.
    ///
    /// # Errors
    ///
    /// Returns [`EnumerationError::BlockOutOfRange`] if `block >= C(N, K)`.
    pub fn try_block_size(&self, block: usize) -> Result<GlobalIndex, EnumerationError> {
        self.block_sizes
            .get(block)
            .copied()
            .ok_or(EnumerationError::BlockOutOfRange {
                block,
                count: Self::block_count(),
            })
    }

    /// Returns the global index of the first cell of `block`.
    ///
    /// # Panics
    ///
    /// Panics if `block >= C(N, K)`.
    #[must_use]
    pub fn block_offset(&self, block: usize) -> GlobalIndex {
        match self.block_offsets.get(block) {
            Some(&offset) => offset,
            None => panic!(
                "{}",
                EnumerationError::BlockOutOfRange {
                    block,
                    count: Self::block_count(),
                }
            ),
        }
    }

    /// Returns the cell at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.size()`.
    #[must_use]
    pub fn at(&self, index: GlobalIndex) -> Element<N, K> {
        match self.try_at(index) {
            Ok(element) => element,
            Err(err) => panic!("{err}"),
        }
    }

    /// Returns the cell at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`EnumerationError::IndexOutOfRange`] if `index >= self.size()`.
    pub fn try_at(&self, index: GlobalIndex) -> Result<Element<N, K>, EnumerationError> {
        if index >= self.size {
            return Err(EnumerationError::IndexOutOfRange {
                index,
                size: self.size,
            });
        }

        // Blocks are never empty, so offsets are strictly increasing and start at 0.
        let block = self
            .block_offsets
            .partition_point(|&offset| offset <= index)
            - 1;
        log::trace!("index {index} lies in block {block}");

        let directions = Combinations::<N, K>::at(block);
        let mut local = index - self.block_offsets[block];
        let mut along = [0; K];
        let mut across = ArrayVec::new();
        for (j, (_, radix)) in radices(&self.shape, &directions).enumerate() {
            let radix = GlobalIndex::from(radix);
            #[expect(clippy::cast_possible_truncation)]
            let digit = (local % radix) as FiberIndex;
            if j < K {
                along[j] = digit;
            } else {
                across.push(digit);
            }
            local /= radix;
        }
        debug_assert_eq!(local, 0);

        Ok(Element::from_parts(directions, along, across))
    }

    /// Returns the index of `element`.
    ///
    /// # Panics
    ///
    /// Panics if a coordinate of `element` is out of range for this grid.
    #[must_use]
    pub fn index_of(&self, element: &Element<N, K>) -> GlobalIndex {
        match self.try_index_of(element) {
            Ok(index) => index,
            Err(err) => panic!("{err}"),
        }
    }

    /// Returns the index of `element`.
    ///
    /// # Errors
    ///
    /// Returns [`EnumerationError::CoordinateOutOfRange`] if a coordinate of
    /// `element` is out of range for this grid.
    pub fn try_index_of(&self, element: &Element<N, K>) -> Result<GlobalIndex, EnumerationError> {
        let directions = element.directions();
        let mut index = self.block_offsets[Combinations::<N, K>::index_of(directions)];
        let mut factor: GlobalIndex = 1;
        let digits = element
            .position_along()
            .iter()
            .chain(element.position_across());
        for ((axis, radix), &digit) in radices(&self.shape, directions).zip(digits) {
            if digit >= radix {
                return Err(EnumerationError::CoordinateOutOfRange {
                    axis,
                    coordinate: digit,
                    radix,
                });
            }
            index += GlobalIndex::from(digit) * factor;
            factor *= GlobalIndex::from(radix);
        }
        Ok(index)
    }

    /// Returns `true` if every coordinate of `element` is in range for this grid.
    #[must_use]
    pub fn contains(&self, element: &Element<N, K>) -> bool {
        self.try_index_of(element).is_ok()
    }
}

/// Yields `(axis, radix)` for every digit of a block, least significant first.
fn radices<'a, const N: usize, const K: usize>(
    shape: &'a GridShape<N>,
    directions: &'a Combination<N, K>,
) -> impl Iterator<Item = (DimensionIndex, FiberIndex)> + 'a {
    let along = directions
        .in_axes()
        .iter()
        .map(|&axis| (axis, shape.extent(usize::from(axis))));
    let across = directions
        .out_axes()
        .map(|axis| (axis, shape.vertex_count(usize::from(axis))));
    along.chain(across)
}
