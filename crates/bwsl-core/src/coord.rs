//! Coordinate and real-vector types.

use smallvec::SmallVec;

/// Integer coordinates of a lattice point.
///
/// Uses `SmallVec<[i64; 4]>` to avoid heap allocation for lattices up to
/// 4 dimensions, which covers chain, square, triangular and cubic
/// geometries. Higher-dimensional grids spill to the heap transparently.
///
/// Components are signed: intermediate displacements and periodic images
/// routinely leave the `[0, size)` window before boundaries are enforced.
pub type Coord = SmallVec<[i64; 4]>;

/// A real-space or reciprocal-space vector.
pub type RealVec = SmallVec<[f64; 4]>;

/// Componentwise `a - b`.
///
/// # Panics
///
/// Panics if the two coordinates have different lengths.
pub fn sub_coords(a: &[i64], b: &[i64]) -> Coord {
    assert_eq!(a.len(), b.len(), "dimensions mismatch");
    a.iter().zip(b).map(|(x, y)| x - y).collect()
}

/// Componentwise `a + b`.
///
/// # Panics
///
/// Panics if the two coordinates have different lengths.
pub fn add_coords(a: &[i64], b: &[i64]) -> Coord {
    assert_eq!(a.len(), b.len(), "dimensions mismatch");
    a.iter().zip(b).map(|(x, y)| x + y).collect()
}

/// Euclidean inner product.
pub fn dot(a: &[f64], b: &[f64]) -> f64 {
    debug_assert_eq!(a.len(), b.len());
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

/// Euclidean norm.
pub fn norm(v: &[f64]) -> f64 {
    v.iter().map(|x| x * x).sum::<f64>().sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    #[test]
    fn sub_and_add_are_inverse() {
        let a: Coord = smallvec![3, -1, 7];
        let b: Coord = smallvec![1, 4, -2];
        let d = sub_coords(&a, &b);
        assert_eq!(d.as_slice(), &[2, -5, 9]);
        assert_eq!(add_coords(&b, &d), a);
    }

    #[test]
    #[should_panic(expected = "dimensions mismatch")]
    fn sub_rejects_mismatched_lengths() {
        let _ = sub_coords(&[1, 2], &[1]);
    }

    #[test]
    fn norm_and_dot() {
        assert_eq!(norm(&[3.0, 4.0]), 5.0);
        assert_eq!(norm(&[]), 0.0);
        assert_eq!(dot(&[1.0, 2.0, 3.0], &[4.0, -5.0, 6.0]), 12.0);
    }
}
