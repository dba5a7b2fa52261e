//! Test utilities shared by the enumeration tests.
//!
//! - [`all_shapes`] lists every small grid shape of a given order.
//! - [`check_enumeration`] checks an enumerator exhaustively against an independent
//!   enumeration of well-formed elements.
//! - [`lexicographic`] and [`element`] are `proptest` strategies.

use std::collections::HashSet;

use proptest::prelude::*;

use crate::{
    Combination, Combinations, DimensionIndex, Element, FiberIndex, GlobalIndex, GridShape,
    Lexicographic,
};

/// Iterates over every digit vector with `digits[i] < radices[i]`, first digit
/// fastest.
fn odometer<const N: usize>(radices: [FiberIndex; N]) -> impl Iterator<Item = [FiberIndex; N]> {
    let total: GlobalIndex = radices.iter().map(|&r| GlobalIndex::from(r)).product();
    (0..total).map(move |mut code| {
        let mut digits = [0; N];
        for (digit, &radix) in digits.iter_mut().zip(&radices) {
            let radix = GlobalIndex::from(radix);
            *digit = FiberIndex::try_from(code % radix).unwrap();
            code /= radix;
        }
        digits
    })
}

/// Returns every shape of order `N` whose extents lie in `1..=max_extent`.
pub(crate) fn all_shapes<const N: usize>(
    max_extent: FiberIndex,
) -> impl Iterator<Item = GridShape<N>> {
    odometer([max_extent; N]).map(|digits| GridShape::new(digits.map(|d| d + 1)).unwrap())
}

fn radix_of<const N: usize, const K: usize>(
    shape: &GridShape<N>,
    directions: &Combination<N, K>,
    axis: usize,
) -> FiberIndex {
    if directions.contains(DimensionIndex::try_from(axis).unwrap()) {
        shape.extent(axis)
    } else {
        shape.vertex_count(axis)
    }
}

/// Checks block sizes, both round trips, bijectivity, block order, digit order and
/// the vertex and top-cell counts of `lex`.
#[track_caller]
pub(crate) fn check_enumeration<const N: usize, const K: usize>(lex: &Lexicographic<N, K>) {
    let shape = *lex.shape();
    let count = Combinations::<N, K>::count();

    let mut total = 0;
    for block in 0..count {
        let directions = Combinations::<N, K>::at(block);
        let along: GlobalIndex = directions
            .in_axes()
            .iter()
            .map(|&axis| GlobalIndex::from(shape.extent(usize::from(axis))))
            .product();
        let across: GlobalIndex = directions
            .out_axes()
            .map(|axis| GlobalIndex::from(shape.vertex_count(usize::from(axis))))
            .product();
        assert_eq!(lex.block_size(block), along * across, "{shape}: block {block}");
        assert_eq!(lex.block_offset(block), total, "{shape}: block {block}");
        total += along * across;
    }
    assert_eq!(lex.size(), total, "{shape}");

    if K == 0 {
        let vertices: GlobalIndex = shape
            .extents()
            .iter()
            .map(|&d| GlobalIndex::from(d) + 1)
            .product();
        assert_eq!(lex.size(), vertices, "{shape}");
    }
    if K == N {
        let cubes: GlobalIndex = shape.extents().iter().map(|&d| GlobalIndex::from(d)).product();
        assert_eq!(lex.size(), cubes, "{shape}");
    }

    let mut seen = HashSet::new();
    let mut previous_block = 0;
    for index in 0..lex.size() {
        let element = lex.at(index);
        assert_eq!(lex.index_of(&element), index, "{shape}: {element}");
        let block = Combinations::<N, K>::index_of(element.directions());
        assert!(block >= previous_block, "{shape}: {element} at {index}");
        previous_block = block;
        assert!(seen.insert(element), "{shape}: {element} decoded twice");
    }

    let mut well_formed = 0;
    for block in 0..count {
        let directions = Combinations::<N, K>::at(block);
        let radices: [FiberIndex; N] =
            std::array::from_fn(|axis| radix_of(&shape, &directions, axis));
        for coordinates in odometer(radices) {
            let element = Element::from_coordinates(directions, coordinates);
            assert!(seen.contains(&element), "{shape}: {element} never decoded");
            let index = lex.index_of(&element);
            assert_eq!(lex.at(index), element, "{shape}");

            if K > 0 {
                let axis = usize::from(directions.in_axis(0));
                if coordinates[axis] + 1 < shape.extent(axis) {
                    let mut next = coordinates;
                    next[axis] += 1;
                    let next = Element::from_coordinates(directions, next);
                    assert_eq!(lex.index_of(&next), index + 1, "{shape}: {element}");
                }
            }
            well_formed += 1;
        }
    }
    assert_eq!(well_formed, lex.size(), "{shape}");
}

/// Strategy for enumerators over shapes with extents in `1..=max_extent`.
pub(crate) fn lexicographic<const N: usize, const K: usize>(
    max_extent: FiberIndex,
) -> impl Strategy<Value = Lexicographic<N, K>> {
    prop::collection::vec(1..=max_extent, N).prop_map(|extents| {
        let extents: [FiberIndex; N] = extents.try_into().unwrap();
        Lexicographic::from_extents(extents).unwrap()
    })
}

/// Strategy for well-formed elements of `shape`.
pub(crate) fn element<const N: usize, const K: usize>(
    shape: GridShape<N>,
) -> impl Strategy<Value = Element<N, K>> {
    (
        0..Combinations::<N, K>::count(),
        prop::collection::vec(any::<FiberIndex>(), N),
    )
        .prop_map(move |(block, raw)| {
            let directions = Combinations::<N, K>::at(block);
            let coordinates: [FiberIndex; N] = std::array::from_fn(|axis| {
                raw[axis] % radix_of(&shape, &directions, axis)
            });
            Element::from_coordinates(directions, coordinates)
        })
}
