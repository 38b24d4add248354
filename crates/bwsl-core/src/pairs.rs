//! Ordered pair indexing.
//!
//! Every ordered pair `(a, b)` with `a, b < n` (self pairs included) maps
//! to a unique index in `[0, n * n)` via `b * n + a`.

/// Unique index of the ordered pair `(a, b)`.
pub fn pair_index(a: usize, b: usize, n: usize) -> usize {
    debug_assert!(a < n && b < n, "pair ({a}, {b}) outside [0, {n})");
    b * n + a
}

/// Recover `(a, b)` from a pair index produced by [`pair_index`].
pub fn pair_from_index(pair: usize, n: usize) -> (usize, usize) {
    (pair % n, pair / n)
}

/// Number of ordered pairs over `n` values, i.e. the size of the pair
/// index range.
///
/// # Panics
///
/// Panics if `n * n` overflows `usize`; see [`checked_num_pairs`].
pub fn num_pairs(n: usize) -> usize {
    checked_num_pairs(n).unwrap_or_else(|| panic!("{n} values have more than usize::MAX pairs"))
}

/// Number of ordered pairs over `n` values, or `None` on `usize` overflow.
pub fn checked_num_pairs(n: usize) -> Option<usize> {
    n.checked_mul(n)
}
