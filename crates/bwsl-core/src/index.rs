//! Mixed-radix conversion between coordinate tuples and linear indices.
//!
//! The first axis is the most significant one (row-major order), so for a
//! grid of extents `[3, 4]` the coordinate `[1, 2]` has index `1 * 4 + 2`.

use crate::coord::Coord;

/// Product of all extents, or `None` on `usize` overflow.
///
/// The empty product is `1`.
pub fn checked_product(size: &[usize]) -> Option<usize> {
    size.iter().try_fold(1usize, |acc, &s| acc.checked_mul(s))
}

/// Compose a linear index from in-range coordinates.
///
/// # Panics
///
/// Panics if `coords.len() != size.len()`. Out-of-range components are a
/// caller bug and are only checked in debug builds.
pub fn array_to_index(coords: &[i64], size: &[usize]) -> usize {
    assert_eq!(coords.len(), size.len(), "dimensions mismatch");
    coords.iter().zip(size).fold(0usize, |acc, (&c, &s)| {
        debug_assert!(
            c >= 0 && (c as usize) < s,
            "coordinate component {c} outside [0, {s})"
        );
        acc * s + c as usize
    })
}

/// Decompose a linear index into coordinates.
///
/// Exact inverse of [`array_to_index`] for `index < checked_product(size)`.
pub fn index_to_array(mut index: usize, size: &[usize]) -> Coord {
    let mut out: Coord = smallvec::smallvec![0; size.len()];
    for (slot, &s) in out.iter_mut().zip(size).rev() {
        *slot = (index % s) as i64;
        index /= s;
    }
    out
}
