//! Finite lattices: a Bravais lattice realised on a hypercubic grid.

use std::time::Instant;

use bwsl_core::{dot, index_to_array, norm, Coord, RealVec};
use log::{debug, trace};
use smallvec::SmallVec;

use crate::boundary::Boundaries;
use crate::bravais::BravaisLattice;
use crate::error::LatticeError;
use crate::grid::HyperCubicGrid;

/// Neighbour list of a single site.
pub type NeighborList = SmallVec<[usize; 8]>;

/// A finite lattice with every geometric table precomputed.
///
/// Construction walks the grid once and stores, per site:
///
/// - the real-space position relative to site 0,
/// - the minimum-image displacement from site 0 and its length,
/// - the neighbour list (slot order of the Bravais lattice),
/// - under closed boundaries, one allowed momentum.
///
/// Under closed boundaries, pairwise queries map `(a, b)` to the site reached
/// from the origin by the same displacement
/// ([`HyperCubicGrid::mapped_site`]) and read the per-site tables, so O(N)
/// storage answers all O(N^2) pairs. Open boundaries break translational
/// invariance; there pairwise vectors are the difference of the two
/// positions.
///
/// A `Lattice` never changes after construction and only keeps derived
/// tables, so the Bravais lattice it was built from need not outlive it.
///
/// # Examples
///
/// ```
/// use bwsl_lattice::{Boundaries, Lattice, CHAIN_LATTICE};
///
/// let chain = Lattice::new(&CHAIN_LATTICE, &[4], Boundaries::Closed).unwrap();
/// assert_eq!(chain.distance(0, 1), 1.0);
/// assert_eq!(chain.distance(0, 2), 2.0);
/// assert_eq!(chain.distance(0, 3), 1.0); // across the boundary
/// assert!((0..4).all(|i| chain.coordination(i) == 2));
/// ```
#[derive(Clone, Debug)]
pub struct Lattice {
    grid: HyperCubicGrid,
    gamma: usize,
    positions: Vec<f64>,
    vectors: Vec<f64>,
    distances: Vec<f64>,
    neighbors: Vec<NeighborList>,
    momenta: Vec<f64>,
}

impl Lattice {
    /// Realise `bravais` on a grid of extents `size`.
    ///
    /// Returns the grid construction errors of [`HyperCubicGrid::new`], or
    /// `Err(LatticeError::DimensionMismatch)` if `size.len()` differs from
    /// the Bravais dimensionality.
    pub fn new(
        bravais: &BravaisLattice,
        size: &[usize],
        boundaries: Boundaries,
    ) -> Result<Self, LatticeError> {
        Self::from_grid(bravais, HyperCubicGrid::new(size, boundaries)?)
    }

    /// Realise `bravais` on an existing grid.
    pub fn from_grid(bravais: &BravaisLattice, grid: HyperCubicGrid) -> Result<Self, LatticeError> {
        if bravais.dim() != grid.dim() {
            return Err(LatticeError::DimensionMismatch {
                bravais: bravais.dim(),
                grid: grid.dim(),
            });
        }
        let started = Instant::now();

        let positions = compute_positions(bravais, &grid);
        let vectors = compute_vectors(bravais, &grid);
        let distances = compute_distances(&vectors, grid.dim());
        let neighbors = compute_neighbors(bravais, &grid);
        let momenta = compute_momenta(bravais, &grid);
        trace!(
            "lattice tables: {} positions, {} vectors, {} neighbour lists, {} momenta",
            positions.len() / grid.dim(),
            vectors.len() / grid.dim(),
            neighbors.len(),
            momenta.len() / grid.dim()
        );
        debug!(
            "built lattice {:?} ({} sites, {} boundaries, coordination {}) in {:?}",
            grid.size(),
            grid.num_sites(),
            grid.boundaries(),
            bravais.gamma(),
            started.elapsed()
        );

        Ok(Self {
            gamma: bravais.gamma(),
            grid,
            positions,
            vectors,
            distances,
            neighbors,
            momenta,
        })
    }

    /// The underlying index space.
    pub fn grid(&self) -> &HyperCubicGrid {
        &self.grid
    }

    /// Number of dimensions.
    pub fn dim(&self) -> usize {
        self.grid.dim()
    }

    /// Number of sites.
    pub fn num_sites(&self) -> usize {
        self.grid.num_sites()
    }

    /// Boundary condition.
    pub fn boundaries(&self) -> Boundaries {
        self.grid.boundaries()
    }

    /// Coordination number of the Bravais lattice this was built from.
    pub fn gamma(&self) -> usize {
        self.gamma
    }

    fn row(table: &[f64], dim: usize, i: usize) -> &[f64] {
        &table[i * dim..(i + 1) * dim]
    }

    /// Real-space position of site `a` relative to site 0.
    ///
    /// # Panics
    ///
    /// Panics if `a` is not a valid site.
    pub fn position(&self, a: usize) -> &[f64] {
        self.grid.check_index(a);
        Self::row(&self.positions, self.dim(), a)
    }

    /// Displacement from site `a` to site `b`: the minimum image under
    /// closed boundaries, the plain difference of positions under open ones.
    ///
    /// # Panics
    ///
    /// Panics if either index is not a valid site.
    pub fn vector(&self, a: usize, b: usize) -> RealVec {
        if self.boundaries().is_closed() {
            let s = self.grid.mapped_site(a, b);
            return Self::row(&self.vectors, self.dim(), s).iter().copied().collect();
        }
        self.position(b)
            .iter()
            .zip(self.position(a))
            .map(|(pb, pa)| pb - pa)
            .collect()
    }

    /// Length of [`vector`](Self::vector)`(a, b)`.
    ///
    /// # Panics
    ///
    /// Panics if either index is not a valid site.
    pub fn distance(&self, a: usize, b: usize) -> f64 {
        if self.boundaries().is_closed() {
            return self.distances[self.grid.mapped_site(a, b)];
        }
        norm(&self.vector(a, b))
    }

    /// Neighbours of site `a`, in Bravais slot order.
    ///
    /// Under closed boundaries the list always has `gamma` entries (a site
    /// may appear twice on very small grids). Under open boundaries
    /// neighbours falling off the grid are omitted.
    pub fn neighbors(&self, a: usize) -> &[usize] {
        self.grid.check_index(a);
        &self.neighbors[a]
    }

    /// `true` if `b` is in the neighbour list of `a`.
    pub fn are_neighbors(&self, a: usize, b: usize) -> bool {
        self.neighbors(a).contains(&b)
    }

    /// Number of neighbours of site `a`.
    pub fn coordination(&self, a: usize) -> usize {
        self.neighbors(a).len()
    }

    /// Number of neighbours of site 0.
    ///
    /// Equal to [`gamma`](Self::gamma) under closed boundaries.
    pub fn coordination_number(&self) -> usize {
        self.coordination(0)
    }

    /// Integer displacement for a hop from `a` to `b`; see
    /// [`HyperCubicGrid::jump`].
    pub fn jump(&self, a: usize, b: usize) -> Coord {
        self.grid.jump(a, b)
    }

    /// Winding numbers of an accumulated jump vector.
    ///
    /// `jump` is expected to be a whole number of periods on every axis,
    /// as is the sum of [`jump`](Self::jump)s along a closed path. Each
    /// component is divided by the axis extent with truncation toward zero;
    /// a non-aligned input is not rejected and silently truncates.
    ///
    /// # Panics
    ///
    /// Panics if `jump.len() != dim`.
    pub fn winding(&self, jump: &[i64]) -> Coord {
        assert_eq!(jump.len(), self.dim(), "dimensions mismatch");
        jump.iter()
            .zip(self.grid.size())
            .map(|(&j, &s)| j / s as i64)
            .collect()
    }

    /// Number of allowed momenta: `num_sites` under closed boundaries, zero
    /// under open ones.
    pub fn num_momenta(&self) -> usize {
        self.momenta.len() / self.dim()
    }

    /// Allowed momentum `k`, or `None` under open boundaries where momenta
    /// are not defined.
    ///
    /// # Panics
    ///
    /// Panics if `k` is not a valid site index.
    pub fn momentum(&self, k: usize) -> Option<&[f64]> {
        self.grid.check_index(k);
        if self.momenta.is_empty() {
            return None;
        }
        Some(Self::row(&self.momenta, self.dim(), k))
    }

    /// Add `multiplier * |sum_j n_j exp(i k . x_j)|^2 / N^2` for every
    /// allowed momentum `k` into `sk`.
    ///
    /// `x_j` is the minimum-image vector from site 0 to site `j`. Under open
    /// boundaries there are no momenta and `sk` is left untouched.
    ///
    /// # Panics
    ///
    /// Panics if `occupations` or `sk` does not have `num_sites` entries.
    pub fn accumulate_sk<T>(&self, occupations: &[T], sk: &mut [f64], multiplier: f64)
    where
        T: Copy + Into<f64>,
    {
        let n = self.num_sites();
        assert_eq!(occupations.len(), n, "one occupation per site required");
        assert_eq!(sk.len(), n, "one structure factor slot per site required");
        if self.momenta.is_empty() {
            return;
        }
        let dim = self.dim();
        let norm = (n as f64) * (n as f64);
        for (i, slot) in sk.iter_mut().enumerate() {
            let k = Self::row(&self.momenta, dim, i);
            let (mut re, mut im) = (0.0, 0.0);
            for (j, &occ) in occupations.iter().enumerate() {
                let phase = dot(k, Self::row(&self.vectors, dim, j));
                let occ: f64 = occ.into();
                re += phase.cos() * occ;
                im += phase.sin() * occ;
            }
            *slot += multiplier * (re * re + im * im) / norm;
        }
    }

    /// Structure factor of `occupations` at every allowed momentum.
    ///
    /// Returns `num_sites` values; all zero under open boundaries.
    pub fn compute_sk<T>(&self, occupations: &[T], multiplier: f64) -> Vec<f64>
    where
        T: Copy + Into<f64>,
    {
        let mut sk = vec![0.0; self.num_sites()];
        self.accumulate_sk(occupations, &mut sk, multiplier);
        sk
    }
}

/// Positions of every site relative to site 0, without wrapping.
fn compute_positions(bravais: &BravaisLattice, grid: &HyperCubicGrid) -> Vec<f64> {
    let origin = grid.coordinates(0);
    let mut out = Vec::with_capacity(grid.num_sites() * grid.dim());
    for i in grid.sites() {
        out.extend_from_slice(&bravais.vector(&origin, &grid.coordinates(i)));
    }
    out
}

/// Minimum-image vectors from site 0.
///
/// Under closed boundaries the first shell of periodic images (`3^dim`
/// candidates) is scanned in mixed-radix order and an image only replaces
/// the current best when it is strictly shorter, so ties keep the earlier
/// candidate (the unshifted displacement first of all).
fn compute_vectors(bravais: &BravaisLattice, grid: &HyperCubicGrid) -> Vec<f64> {
    let dim = grid.dim();
    let origin = grid.coordinates(0);
    let shell = vec![3usize; dim];
    let images = 3usize.pow(dim as u32);

    let mut out = Vec::with_capacity(grid.num_sites() * dim);
    for site in grid.sites() {
        let cs = grid.coordinates(site);
        let (mut best, mut best_vec) = bravais.distance_vector(&origin, &cs);

        if grid.has_closed_boundaries() {
            for k in 0..images {
                let shift = index_to_array(k, &shell);
                let image: Coord = cs
                    .iter()
                    .zip(&shift)
                    .zip(grid.size())
                    .map(|((&c, &m), &s)| c + (m - 1) * s as i64)
                    .collect();
                let (d, v) = bravais.distance_vector(&origin, &image);
                if d < best {
                    best = d;
                    best_vec = v;
                }
            }
        }
        out.extend_from_slice(&best_vec);
    }
    out
}

fn compute_distances(vectors: &[f64], dim: usize) -> Vec<f64> {
    vectors.chunks_exact(dim).map(norm).collect()
}

fn compute_neighbors(bravais: &BravaisLattice, grid: &HyperCubicGrid) -> Vec<NeighborList> {
    grid.sites()
        .map(|i| {
            let ci = grid.coordinates(i);
            (0..bravais.gamma())
                .filter_map(|j| {
                    let mut cj = bravais.neighbor(&ci, j);
                    if grid.has_closed_boundaries() || grid.is_on_grid(&cj) {
                        grid.enforce_boundaries(&mut cj);
                        Some(grid.index(&cj))
                    } else {
                        None
                    }
                })
                .collect()
        })
        .collect()
}

/// Reciprocal vectors compatible with the periodic grid, one per site.
///
/// Site coordinates are shifted by `-size/2` per axis so the set is centred
/// on zero, mapped to reciprocal space and scaled by `1/size` per axis.
fn compute_momenta(bravais: &BravaisLattice, grid: &HyperCubicGrid) -> Vec<f64> {
    if grid.has_open_boundaries() {
        return Vec::new();
    }
    let mut out = Vec::with_capacity(grid.num_sites() * grid.dim());
    for i in grid.sites() {
        let mut ci = grid.coordinates(i);
        for (c, &s) in ci.iter_mut().zip(grid.size()) {
            *c -= (s / 2) as i64;
        }
        let kappa = bravais.reciprocal_space(&ci);
        out.extend(kappa.iter().zip(grid.size()).map(|(k, &s)| k / s as f64));
    }
    out
}
