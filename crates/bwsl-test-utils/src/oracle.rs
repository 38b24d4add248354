//! Brute-force reference geometry.
//!
//! Everything here is recomputed from scratch on every call, straight from
//! the [`BravaisLattice`] and the grid extents, without going through any
//! table of a [`Lattice`].

use bwsl_core::{dot, index_to_array, norm, sub_coords, Coord};
use bwsl_lattice::{Boundaries, BravaisLattice, Lattice};

/// Shortest distance between `a` and any periodic image of `b`.
///
/// Scans shifts of `-2..=2` periods along every axis, a wider shell than a
/// [`Lattice`] searches.
pub fn brute_force_distance(bravais: &BravaisLattice, size: &[usize], a: &[i64], b: &[i64]) -> f64 {
    let dim = size.len();
    let shell = vec![5usize; dim];
    let d = sub_coords(b, a);
    (0..5usize.pow(dim as u32))
        .map(|k| {
            let shift = index_to_array(k, &shell);
            let image: Coord = d
                .iter()
                .zip(&shift)
                .zip(size)
                .map(|((&c, &m), &s)| c + (m - 2) * s as i64)
                .collect();
            norm(&bravais.real_space(&image))
        })
        .fold(f64::INFINITY, f64::min)
}

/// Sorted neighbour list of `site`, found by comparing every other site's
/// coordinates against every offset.
pub fn brute_force_neighbors(
    bravais: &BravaisLattice,
    size: &[usize],
    boundaries: Boundaries,
    site: usize,
) -> Vec<usize> {
    let n: usize = size.iter().product();
    let ci = index_to_array(site, size);
    let mut out = Vec::new();
    for slot in 0..bravais.gamma() {
        let target = bravais.neighbor(&ci, slot);
        for j in 0..n {
            let cj = index_to_array(j, size);
            let hit = target.iter().zip(&cj).zip(size).all(|((&t, &c), &s)| {
                if boundaries.is_closed() {
                    t.rem_euclid(s as i64) == c
                } else {
                    t == c
                }
            });
            if hit {
                out.push(j);
            }
        }
    }
    out.sort_unstable();
    out
}

/// Structure factor computed directly from the lattice's public queries.
///
/// Uses `vector(0, j)` and `momentum(k)` only, so it checks the summation
/// and normalisation rather than the tables.
pub fn brute_force_sk(lattice: &Lattice, occupations: &[f64], multiplier: f64) -> Vec<f64> {
    let n = lattice.num_sites();
    (0..n)
        .map(|k| match lattice.momentum(k) {
            None => 0.0,
            Some(q) => {
                let (re, im) = (0..n).fold((0.0, 0.0), |(re, im), j| {
                    let phase = dot(q, &lattice.vector(0, j));
                    (re + occupations[j] * phase.cos(), im + occupations[j] * phase.sin())
                });
                multiplier * (re * re + im * im) / (n * n) as f64
            }
        })
        .collect()
}
