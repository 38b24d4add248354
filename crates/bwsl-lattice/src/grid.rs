//! Finite hypercubic index space.

use std::ops::Range;

use bwsl_core::{
    add_coords, array_to_index, checked_num_pairs, checked_product, index_to_array, pairs,
    sub_coords, Coord,
};

use crate::boundary::Boundaries;
use crate::error::LatticeError;

/// A finite rectangular grid of integer coordinates.
///
/// Sites are numbered in row-major order: the first axis is the most
/// significant. For extents `[3, 4]` the site with coordinates `[1, 2]` has
/// index `6`.
///
/// # Examples
///
/// ```
/// use bwsl_lattice::{Boundaries, HyperCubicGrid};
///
/// let grid = HyperCubicGrid::new(&[3, 4], Boundaries::Closed).unwrap();
/// assert_eq!(grid.num_sites(), 12);
/// assert_eq!(grid.coordinates(6).as_slice(), &[1, 2]);
/// assert_eq!(grid.index(&[1, 2]), 6);
///
/// // Site 1 seen from site 6 is one row up and one column to the left,
/// // which from the origin wraps to [2, 3].
/// assert_eq!(grid.mapped_site(6, 1), 11);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HyperCubicGrid {
    size: Vec<usize>,
    num_sites: usize,
    num_pairs: usize,
    boundaries: Boundaries,
}

impl HyperCubicGrid {
    /// Create a grid with the given per-axis extents.
    ///
    /// Returns `Err(LatticeError::EmptyGrid)` if `size` is empty,
    /// `Err(LatticeError::ZeroExtent)` if some extent is zero, or
    /// `Err(LatticeError::TooManySites)` if the number of sites does not fit
    /// the coordinate type or the number of ordered site pairs does not fit
    /// the index type.
    pub fn new(size: &[usize], boundaries: Boundaries) -> Result<Self, LatticeError> {
        if size.is_empty() {
            return Err(LatticeError::EmptyGrid);
        }
        if let Some(axis) = size.iter().position(|&s| s == 0) {
            return Err(LatticeError::ZeroExtent { axis });
        }
        let too_many = || LatticeError::TooManySites {
            size: size.to_vec(),
        };
        let num_sites = checked_product(size)
            .filter(|&n| i64::try_from(n).is_ok())
            .ok_or_else(too_many)?;
        let num_pairs = checked_num_pairs(num_sites).ok_or_else(too_many)?;
        Ok(Self {
            size: size.to_vec(),
            num_sites,
            num_pairs,
            boundaries,
        })
    }

    /// Number of axes.
    pub fn dim(&self) -> usize {
        self.size.len()
    }

    /// Per-axis extents.
    pub fn size(&self) -> &[usize] {
        &self.size
    }

    /// Number of sites.
    pub fn num_sites(&self) -> usize {
        self.num_sites
    }

    /// All site indices.
    pub fn sites(&self) -> Range<usize> {
        0..self.num_sites
    }

    /// Boundary condition.
    pub fn boundaries(&self) -> Boundaries {
        self.boundaries
    }

    /// `true` under [`Boundaries::Open`].
    pub fn has_open_boundaries(&self) -> bool {
        self.boundaries.is_open()
    }

    /// `true` under [`Boundaries::Closed`].
    pub fn has_closed_boundaries(&self) -> bool {
        self.boundaries.is_closed()
    }

    /// `true` if `i` names a site of this grid.
    pub fn index_is_valid(&self, i: usize) -> bool {
        i < self.num_sites
    }

    pub(crate) fn check_index(&self, i: usize) {
        assert!(
            self.index_is_valid(i),
            "site index {i} out of range for {} sites",
            self.num_sites
        );
    }

    fn check_dim(&self, len: usize) {
        assert_eq!(len, self.dim(), "dimensions mismatch");
    }

    /// Coordinates of site `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= num_sites`.
    pub fn coordinates(&self, index: usize) -> Coord {
        self.check_index(index);
        index_to_array(index, &self.size)
    }

    /// Site index of on-grid coordinates; inverse of
    /// [`coordinates`](Self::coordinates).
    ///
    /// # Panics
    ///
    /// Panics if `coords.len() != dim`.
    pub fn index(&self, coords: &[i64]) -> usize {
        self.check_dim(coords.len());
        array_to_index(coords, &self.size)
    }

    /// Bring `coords` back onto the grid under closed boundaries.
    ///
    /// Every component is wrapped into `[0, size)` however far it lies
    /// outside. Under open boundaries the coordinates are left untouched.
    ///
    /// # Panics
    ///
    /// Panics if `coords.len() != dim`.
    pub fn enforce_boundaries(&self, coords: &mut [i64]) {
        self.check_dim(coords.len());
        if self.has_closed_boundaries() {
            for (c, &s) in coords.iter_mut().zip(&self.size) {
                *c = c.rem_euclid(s as i64);
            }
        }
    }

    /// `true` if every component lies in `[0, size)`.
    ///
    /// # Panics
    ///
    /// Panics if `coords.len() != dim`.
    pub fn is_on_grid(&self, coords: &[i64]) -> bool {
        self.check_dim(coords.len());
        coords
            .iter()
            .zip(&self.size)
            .all(|(&c, &s)| c >= 0 && (c as u64) < s as u64)
    }

    fn wrapped_index(&self, mut coords: Coord) -> usize {
        for (c, &s) in coords.iter_mut().zip(&self.size) {
            *c = c.rem_euclid(s as i64);
        }
        self.index(&coords)
    }

    /// The site reached from the origin by the displacement that leads from
    /// `a` to `b`.
    ///
    /// The displacement is taken modulo the extents whatever the boundary
    /// condition, so the result is always a valid site. Under closed
    /// boundaries this is what lets a lattice answer every pairwise query
    /// from per-site tables anchored at site 0.
    pub fn mapped_site(&self, a: usize, b: usize) -> usize {
        self.wrapped_index(sub_coords(&self.coordinates(b), &self.coordinates(a)))
    }

    /// Inverse of [`mapped_site`](Self::mapped_site): the site reached from
    /// `a` by the displacement that leads from the origin to `i`.
    pub fn unmapped_site(&self, i: usize, a: usize) -> usize {
        self.wrapped_index(add_coords(&self.coordinates(a), &self.coordinates(i)))
    }

    /// Unique index of the ordered site pair `(a, b)`, in `[0, num_sites^2)`.
    pub fn pair_index(&self, a: usize, b: usize) -> usize {
        self.check_index(a);
        self.check_index(b);
        pairs::pair_index(a, b, self.num_sites)
    }

    /// Inverse of [`pair_index`](Self::pair_index).
    pub fn individual_indices(&self, pair: usize) -> (usize, usize) {
        assert!(
            pair < self.num_pairs(),
            "pair index {pair} out of range for {} pairs",
            self.num_pairs()
        );
        pairs::pair_from_index(pair, self.num_sites)
    }

    /// Number of ordered site pairs.
    pub fn num_pairs(&self) -> usize {
        self.num_pairs
    }

    /// Integer displacement for a hop from `a` to `b`.
    ///
    /// Under closed boundaries every component is folded into the window
    /// `(-size/2, size/2]` (for odd extents, `[-size/2, size/2]`), so a
    /// hop across the boundary shows up as a short jump of the opposite sign.
    /// Summing jumps along a closed path and passing the total to
    /// [`Lattice::winding`](crate::Lattice::winding) counts boundary crossings.
    pub fn jump(&self, a: usize, b: usize) -> Coord {
        let mut d = sub_coords(&self.coordinates(b), &self.coordinates(a));
        if self.has_closed_boundaries() {
            for (di, &s) in d.iter_mut().zip(&self.size) {
                let s = s as i64;
                let half = s / 2;
                if *di > half {
                    *di -= s;
                }
                if *di < -half || (s % 2 == 0 && *di == -half) {
                    *di += s;
                }
            }
        }
        d
    }
}
