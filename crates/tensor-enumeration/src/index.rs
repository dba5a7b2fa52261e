//! Integer widths used for addressing.
//!
//! Three widths are involved when addressing cells of a tensor-product grid:
//!
//! - [`GlobalIndex`] - position of a cell in the whole enumeration, and block sizes
//! - [`FiberIndex`] - extents and coordinates along a single axis
//! - [`DimensionIndex`] - axis numbers
//!
//! Keeping them as distinct names makes it obvious at each call site which kind of
//! value is being handled. Widening conversions between them go through [`From`].

/// Index of a cell within the whole enumeration.
///
/// Also used for block sizes and the total cell count.
pub type GlobalIndex = u64;

/// Extent of, or coordinate along, a single axis of the grid.
pub type FiberIndex = u16;

/// Number of an axis of the grid.
pub type DimensionIndex = u8;
