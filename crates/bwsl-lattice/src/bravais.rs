//! Infinite Bravais lattices and the canonical lattice constants.

use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use bwsl_core::{norm, sub_coords, Coord, RealVec};

use crate::error::LatticeError;

/// An infinite, translationally invariant point lattice.
///
/// Pure geometry: there is no finite extent and no boundary condition here.
/// Finite realisations are built by [`Lattice`](crate::Lattice).
///
/// # Tables
///
/// - `direct` is a `dim x dim` matrix stored so that column `j` (entries
///   `direct[j * dim..(j + 1) * dim]`) is the `j`-th primitive vector.
/// - `inverse` is the inverse of that matrix stored row-major. Read
///   column-major, its columns are the reciprocal primitive vectors divided
///   by `2 pi`.
/// - `offsets` holds `gamma / 2` neighbour directions of `dim` integers each.
///   The other half are their negations, so neighbour slot `2k` is
///   `+offsets[k]` and slot `2k + 1` is `-offsets[k]`.
///
/// # Examples
///
/// ```
/// use bwsl_lattice::TRIANGULAR_LATTICE;
///
/// let p = TRIANGULAR_LATTICE.real_space(&[1, 1]);
/// assert!((p[0] - 1.5).abs() < 1e-12);
/// assert!((p[1] - 3f64.sqrt() / 2.0).abs() < 1e-12);
///
/// // Neighbour slots come in +/- pairs.
/// assert_eq!(TRIANGULAR_LATTICE.neighbor(&[2, 2], 4).as_slice(), &[3, 1]);
/// assert_eq!(TRIANGULAR_LATTICE.neighbor(&[2, 2], 5).as_slice(), &[1, 3]);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct BravaisLattice {
    dim: usize,
    gamma: usize,
    direct: Vec<f64>,
    inverse: Vec<f64>,
    offsets: Vec<i64>,
}

impl BravaisLattice {
    /// Maximum deviation from the identity tolerated for `inverse * direct`.
    pub const INVERSE_TOLERANCE: f64 = 1e-9;

    /// Build a Bravais lattice from its tables.
    ///
    /// Returns `Err(LatticeError::InvalidBravais)` if `dim == 0`, `gamma` is
    /// odd, a table has the wrong length, or `inverse` is not the inverse of
    /// `direct` within [`INVERSE_TOLERANCE`](Self::INVERSE_TOLERANCE).
    pub fn new(
        dim: usize,
        gamma: usize,
        direct: Vec<f64>,
        inverse: Vec<f64>,
        offsets: Vec<i64>,
    ) -> Result<Self, LatticeError> {
        let invalid = |reason: String| Err(LatticeError::InvalidBravais { reason });
        if dim == 0 {
            return invalid("dimension must be positive".to_string());
        }
        if gamma % 2 != 0 {
            return invalid(format!("coordination number {gamma} is odd"));
        }
        if direct.len() != dim * dim {
            return invalid(format!(
                "direct vectors have {} entries, expected {}",
                direct.len(),
                dim * dim
            ));
        }
        if inverse.len() != dim * dim {
            return invalid(format!(
                "inverse vectors have {} entries, expected {}",
                inverse.len(),
                dim * dim
            ));
        }
        if offsets.len() != gamma / 2 * dim {
            return invalid(format!(
                "neighbour offsets have {} entries, expected {}",
                offsets.len(),
                gamma / 2 * dim
            ));
        }
        for i in 0..dim {
            for j in 0..dim {
                let product: f64 = (0..dim)
                    .map(|k| inverse[i * dim + k] * direct[k + j * dim])
                    .sum();
                let expected = if i == j { 1.0 } else { 0.0 };
                let deviation = (product - expected).abs();
                if deviation.is_nan() || deviation > Self::INVERSE_TOLERANCE {
                    return invalid(format!(
                        "inverse * direct differs from the identity at ({i}, {j}): {product}"
                    ));
                }
            }
        }
        Ok(Self {
            dim,
            gamma,
            direct,
            inverse,
            offsets,
        })
    }

    /// Tables of the canonical lattices are known to be consistent.
    fn canonical(
        dim: usize,
        gamma: usize,
        direct: Vec<f64>,
        inverse: Vec<f64>,
        offsets: Vec<i64>,
    ) -> Self {
        debug_assert!(
            Self::new(dim, gamma, direct.clone(), inverse.clone(), offsets.clone()).is_ok()
        );
        Self {
            dim,
            gamma,
            direct,
            inverse,
            offsets,
        }
    }

    /// Dimensionality.
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Coordination number (number of nearest neighbours of every point).
    pub fn gamma(&self) -> usize {
        self.gamma
    }

    /// Direct lattice vectors, column `j` being the `j`-th primitive vector.
    pub fn direct_vectors(&self) -> &[f64] {
        &self.direct
    }

    /// Row-major inverse of the direct matrix.
    pub fn inverse_vectors(&self) -> &[f64] {
        &self.inverse
    }

    /// The `gamma / 2` stored neighbour directions, `dim` integers each.
    pub fn neighbor_offsets(&self) -> &[i64] {
        &self.offsets
    }

    fn check_dim(&self, len: usize) {
        assert_eq!(len, self.dim, "dimensions mismatch");
    }

    /// Real-space position of the lattice point with integer `coords`.
    ///
    /// # Panics
    ///
    /// Panics if `coords.len() != dim`.
    pub fn real_space(&self, coords: &[i64]) -> RealVec {
        self.check_dim(coords.len());
        let d = self.dim;
        (0..d)
            .map(|i| {
                (0..d)
                    .map(|j| coords[j] as f64 * self.direct[i + j * d])
                    .sum()
            })
            .collect()
    }

    /// Components of a real-space vector on the direct basis.
    ///
    /// Inverse of [`real_space`](Self::real_space): for integer `c`,
    /// `inverse_vector(real_space(c))` is `c` up to rounding.
    ///
    /// # Panics
    ///
    /// Panics if `real.len() != dim`.
    pub fn inverse_vector(&self, real: &[f64]) -> RealVec {
        self.check_dim(real.len());
        let d = self.dim;
        (0..d)
            .map(|i| (0..d).map(|j| self.inverse[i * d + j] * real[j]).sum())
            .collect()
    }

    /// Reciprocal-lattice vector for integer reciprocal coordinates.
    ///
    /// # Panics
    ///
    /// Panics if `coords.len() != dim`.
    pub fn reciprocal_space(&self, coords: &[i64]) -> RealVec {
        self.check_dim(coords.len());
        let d = self.dim;
        (0..d)
            .map(|i| {
                (0..d)
                    .map(|j| coords[j] as f64 * 2.0 * PI * self.inverse[i + j * d])
                    .sum()
            })
            .collect()
    }

    /// Real-space vector from `first` to `second`.
    pub fn vector(&self, first: &[i64], second: &[i64]) -> RealVec {
        self.real_space(&sub_coords(second, first))
    }

    /// Euclidean distance between two lattice points.
    pub fn distance(&self, first: &[i64], second: &[i64]) -> f64 {
        norm(&self.vector(first, second))
    }

    /// Distance and vector from `first` to `second` in one pass.
    pub fn distance_vector(&self, first: &[i64], second: &[i64]) -> (f64, RealVec) {
        let v = self.vector(first, second);
        (norm(&v), v)
    }

    /// The neighbour of `point` in slot `idx`.
    ///
    /// Slot `idx` uses direction `offsets[idx / 2]`, added for even slots and
    /// subtracted for odd ones.
    ///
    /// # Panics
    ///
    /// Panics if `idx >= gamma` or `point.len() != dim`.
    pub fn neighbor(&self, point: &[i64], idx: usize) -> Coord {
        self.check_dim(point.len());
        assert!(
            idx < self.gamma,
            "neighbour slot {idx} out of range for coordination {}",
            self.gamma
        );
        let sign = if idx % 2 == 0 { 1 } else { -1 };
        let offset = &self.offsets[idx / 2 * self.dim..(idx / 2 + 1) * self.dim];
        point
            .iter()
            .zip(offset)
            .map(|(p, o)| p + sign * o)
            .collect()
    }
}

/// One-dimensional chain with unit spacing.
pub static CHAIN_LATTICE: LazyLock<BravaisLattice> =
    LazyLock::new(|| BravaisLattice::canonical(1, 2, vec![1.0], vec![1.0], vec![1]));

/// Two-dimensional square lattice with unit spacing.
pub static SQUARE_LATTICE: LazyLock<BravaisLattice> = LazyLock::new(|| {
    BravaisLattice::canonical(
        2,
        4,
        vec![1.0, 0.0, 0.0, 1.0],
        vec![1.0, 0.0, 0.0, 1.0],
        vec![1, 0, 0, 1],
    )
});

/// Three-dimensional simple cubic lattice with unit spacing.
pub static CUBIC_LATTICE: LazyLock<BravaisLattice> = LazyLock::new(|| {
    BravaisLattice::canonical(
        3,
        6,
        vec![1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0],
        vec![1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0],
        vec![1, 0, 0, 0, 1, 0, 0, 0, 1],
    )
});

/// Two-dimensional triangular lattice with unit spacing.
pub static TRIANGULAR_LATTICE: LazyLock<BravaisLattice> = LazyLock::new(|| {
    let s3 = 3f64.sqrt();
    BravaisLattice::canonical(
        2,
        6,
        vec![1.0, 0.0, 0.5, s3 / 2.0],
        vec![1.0, -1.0 / s3, 0.0, 2.0 / s3],
        vec![1, 0, 0, 1, 1, -1],
    )
});

/// Names for the canonical Bravais lattices.
///
/// # Examples
///
/// ```
/// use bwsl_lattice::BravaisKind;
///
/// let kind: BravaisKind = "Triangular".parse().unwrap();
/// assert_eq!(kind, BravaisKind::Triangular);
/// assert_eq!(kind.lattice().gamma(), 6);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BravaisKind {
    /// [`CHAIN_LATTICE`].
    Chain,
    /// [`SQUARE_LATTICE`].
    Square,
    /// [`CUBIC_LATTICE`].
    Cubic,
    /// [`TRIANGULAR_LATTICE`].
    Triangular,
}

impl BravaisKind {
    /// Every canonical kind.
    pub const ALL: [BravaisKind; 4] = [
        BravaisKind::Chain,
        BravaisKind::Square,
        BravaisKind::Cubic,
        BravaisKind::Triangular,
    ];

    /// The shared constant for this kind.
    pub fn lattice(self) -> &'static BravaisLattice {
        match self {
            Self::Chain => &*CHAIN_LATTICE,
            Self::Square => &*SQUARE_LATTICE,
            Self::Cubic => &*CUBIC_LATTICE,
            Self::Triangular => &*TRIANGULAR_LATTICE,
        }
    }

    /// Lower-case name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Chain => "chain",
            Self::Square => "square",
            Self::Cubic => "cubic",
            Self::Triangular => "triangular",
        }
    }
}

impl fmt::Display for BravaisKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BravaisKind {
    type Err = LatticeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|k| k.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| LatticeError::UnknownName {
                what: "lattice kind",
                name: s.to_string(),
            })
    }
}
