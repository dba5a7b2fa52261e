//! Strictly increasing axis subsets and their enumeration.
//!
//! A [`Combination`] picks `K` of the `N` axes of a grid. [`Combinations`] numbers
//! all `C(N, K)` such picks with the combinatorial number system:
//!
//! ```text
//! index(a_0 < a_1 < ... < a_{K-1}) = C(a_0, 1) + C(a_1, 2) + ... + C(a_{K-1}, K)
//! ```
//!
//! Both directions are computed in closed form. Neither direction walks the list of
//! combinations.
//!
//! # Examples
//!
//! ```
//! use tensor_enumeration::{Combination, Combinations};
//!
//! type Faces3 = Combinations<3, 2>;
//! assert_eq!(Faces3::count(), 3);
//!
//! let c = Faces3::at(2);
//! assert_eq!(c.in_axes(), &[1, 2]);
//! assert_eq!(c.out_axes().collect::<Vec<_>>(), vec![0]);
//! assert_eq!(Faces3::index_of(&c), 2);
//!
//! let c = Combination::<3, 2>::new([0, 2])?;
//! assert_eq!(Faces3::index_of(&c), 1);
//! # Ok::<(), tensor_enumeration::CombinationError>(())
//! ```

use std::{
    fmt::{self, Display},
    iter::FusedIterator,
};

use crate::index::DimensionIndex;

/// Returns the binomial coefficient `C(n, k)`, or `0` when `k > n`.
///
/// Intermediate products are taken in `u128`, so every coefficient that fits in
/// `u64` is returned exactly.
///
/// # Panics
///
/// Panics if the coefficient does not fit in `u64`. Evaluated in a const context,
/// this is a compile error.
///
/// # Examples
///
/// ```
/// use tensor_enumeration::binomial;
///
/// assert_eq!(binomial(4, 2), 6);
/// assert_eq!(binomial(5, 0), 1);
/// assert_eq!(binomial(2, 3), 0);
/// ```
#[must_use]
#[expect(clippy::cast_possible_truncation)]
pub const fn binomial(n: usize, k: usize) -> u64 {
    const LIMIT: u128 = 1 << 64;

    if k > n {
        return 0;
    }
    let k = if k > n - k { n - k } else { k };
    let mut result: u128 = 1;
    let mut i = 0;
    while i < k {
        // The running product is C(n, i) * (n - i), which `i + 1` always divides.
        // C(n, i) increases up to `i = k`, so no step exceeds the final coefficient.
        result = result * (n - i) as u128 / (i + 1) as u128;
        assert!(result < LIMIT, "binomial coefficient overflows u64");
        i += 1;
    }
    result as u64
}

/// Errors produced when building or looking up a [`Combination`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum CombinationError {
    /// An axis is not smaller than the order of the grid.
    #[display("axis {axis} is out of range for order {order}")]
    AxisOutOfRange {
        /// The offending axis.
        axis: DimensionIndex,
        /// The number of axes of the grid.
        order: usize,
    },
    /// The axes are not strictly increasing.
    #[display("axes are not strictly increasing at position {position}")]
    NotIncreasing {
        /// Position of the first axis that is not larger than its predecessor.
        position: usize,
    },
    /// A combination index is not smaller than the number of combinations.
    #[display("combination index {index} is out of range for {count} combinations")]
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// The number of combinations.
        count: usize,
    },
}

/// A strictly increasing choice of `K` axes out of `N`.
///
/// The chosen axes are the "in" axes. The remaining `N - K` axes, in increasing
/// order, are the "out" axes.
///
/// # Examples
///
/// ```
/// use tensor_enumeration::Combination;
///
/// let c = Combination::<4, 2>::new([1, 3])?;
/// assert_eq!(c.in_axis(0), 1);
/// assert_eq!(c.in_axis(1), 3);
/// assert_eq!(c.out_axis(0), 0);
/// assert_eq!(c.out_axis(1), 2);
/// assert_eq!(c.to_string(), "{1,3}");
///
/// assert!(Combination::<4, 2>::new([3, 1]).is_err());
/// # Ok::<(), tensor_enumeration::CombinationError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Combination<const N: usize, const K: usize> {
    axes: [DimensionIndex; K],
}

impl<const N: usize, const K: usize> Combination<N, K> {
    /// Creates a combination from its chosen axes.
    ///
    /// # Errors
    ///
    /// Returns [`CombinationError::AxisOutOfRange`] if an axis is `N` or larger, and
    /// [`CombinationError::NotIncreasing`] if the axes are not strictly increasing.
    pub fn new(axes: [DimensionIndex; K]) -> Result<Self, CombinationError> {
        let _ = Combinations::<N, K>::COUNT;
        for (position, &axis) in axes.iter().enumerate() {
            if usize::from(axis) >= N {
                return Err(CombinationError::AxisOutOfRange { axis, order: N });
            }
            if position > 0 && axes[position - 1] >= axis {
                return Err(CombinationError::NotIncreasing { position });
            }
        }
        Ok(Self { axes })
    }

    /// Returns the `j`-th chosen axis.
    ///
    /// # Panics
    ///
    /// Panics if `j >= K`.
    #[must_use]
    pub fn in_axis(&self, j: usize) -> DimensionIndex {
        assert!(j < K, "chosen axis position must be less than {K}, got {j}");
        self.axes[j]
    }

    /// Returns the `j`-th axis that is not chosen.
    ///
    /// # Panics
    ///
    /// Panics if `j >= N - K`.
    #[must_use]
    pub fn out_axis(&self, j: usize) -> DimensionIndex {
        match self.out_axes().nth(j) {
            Some(axis) => axis,
            None => panic!(
                "complement axis position must be less than {}, got {j}",
                N - K
            ),
        }
    }

    /// Returns the chosen axes in increasing order.
    #[must_use]
    pub fn in_axes(&self) -> &[DimensionIndex] {
        &self.axes
    }

    /// Returns an iterator over the axes that are not chosen, in increasing order.
    #[must_use]
    pub fn out_axes(&self) -> OutAxes<'_> {
        OutAxes {
            chosen: &self.axes,
            axis: 0,
            order: N,
        }
    }

    /// Returns `true` if `axis` is one of the chosen axes.
    #[must_use]
    pub fn contains(&self, axis: DimensionIndex) -> bool {
        self.axes.binary_search(&axis).is_ok()
    }
}

impl<const N: usize, const K: usize> Display for Combination<N, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (j, axis) in self.axes.iter().enumerate() {
            if j > 0 {
                f.write_str(",")?;
            }
            Display::fmt(axis, f)?;
        }
        f.write_str("}")
    }
}

/// Iterator over the axes not chosen by a [`Combination`].
///
/// Created by [`Combination::out_axes`].
#[derive(Debug, Clone)]
pub struct OutAxes<'a> {
    chosen: &'a [DimensionIndex],
    axis: usize,
    order: usize,
}

impl Iterator for OutAxes<'_> {
    type Item = DimensionIndex;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        while self.axis < self.order {
            let axis = self.axis;
            self.axis += 1;
            match self.chosen.split_first() {
                Some((&first, rest)) if usize::from(first) == axis => self.chosen = rest,
                _ => return DimensionIndex::try_from(axis).ok(),
            }
        }
        None
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.order - self.axis - self.chosen.len();
        (remaining, Some(remaining))
    }
}

impl FusedIterator for OutAxes<'_> {}
impl ExactSizeIterator for OutAxes<'_> {}

/// The `C(N, K)` combinations of `K` axes out of `N`, numbered by the
/// combinatorial number system.
///
/// Instantiating this type with `K > N`, `N > 256`, or a count that does not fit
/// in both `u64` and `usize` fails to compile.
///
/// The order is the combinatorial-number-system (colexicographic) order, not
/// strict lexicographic order: combination `c` comes before `c'` when, at the
/// largest position where they differ, `c` chooses the smaller axis. For
/// `N = 4, K = 2` the order is `{0,1}, {0,2}, {1,2}, {0,3}, {1,3}, {2,3}`, so
/// `{1,2}` precedes `{0,3}`.
///
/// # Examples
///
/// ```
/// use tensor_enumeration::Combinations;
///
/// let all: Vec<String> = (0..Combinations::<4, 2>::count())
///     .map(|i| Combinations::<4, 2>::at(i).to_string())
///     .collect();
/// assert_eq!(all, ["{0,1}", "{0,2}", "{1,2}", "{0,3}", "{1,3}", "{2,3}"]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Combinations<const N: usize, const K: usize>;

impl<const N: usize, const K: usize> Combinations<N, K> {
    /// The number of combinations, `C(N, K)`.
    #[expect(clippy::cast_possible_truncation, clippy::cast_lossless)]
    pub const COUNT: usize = {
        assert!(K <= N, "cell dimension must not exceed the order");
        assert!(
            N <= DimensionIndex::MAX as usize + 1,
            "order does not fit the axis index type"
        );
        let count = binomial(N, K);
        assert!(count <= usize::MAX as u64, "combination count overflows usize");
        count as usize
    };

    /// Returns the number of combinations, `C(N, K)`.
    #[must_use]
    pub const fn count() -> usize {
        Self::COUNT
    }

    /// Returns the combination at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= C(N, K)`.
    #[must_use]
    pub fn at(index: usize) -> Combination<N, K> {
        match Self::try_at(index) {
            Ok(combination) => combination,
            Err(err) => panic!("{err}"),
        }
    }

    /// Returns the combination at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`CombinationError::IndexOutOfRange`] if `index >= C(N, K)`.
    pub fn try_at(index: usize) -> Result<Combination<N, K>, CombinationError> {
        if index >= Self::COUNT {
            return Err(CombinationError::IndexOutOfRange {
                index,
                count: Self::COUNT,
            });
        }

        let mut remaining = index as u64;
        let mut axes = [0; K];
        let mut bound = N;
        for j in (0..K).rev() {
            // Largest axis below `bound` whose coefficient still fits; C(j, j + 1) is 0
            // so the search stops at `j` at the latest.
            let mut axis = bound - 1;
            while binomial(axis, j + 1) > remaining {
                axis -= 1;
            }
            remaining -= binomial(axis, j + 1);
            #[expect(clippy::cast_possible_truncation)]
            let chosen = axis as DimensionIndex;
            axes[j] = chosen;
            bound = axis;
        }
        debug_assert_eq!(remaining, 0);
        Ok(Combination { axes })
    }

    /// Returns the index of `combination`, `C(a_0, 1) + ... + C(a_{K-1}, K)`.
    #[must_use]
    #[expect(clippy::cast_possible_truncation)]
    pub fn index_of(combination: &Combination<N, K>) -> usize {
        let index: u64 = combination
            .axes
            .iter()
            .enumerate()
            .map(|(j, &axis)| binomial(usize::from(axis), j + 1))
            .sum();
        debug_assert!(index < Self::COUNT as u64);
        index as usize
    }
}
