//! Deterministic occupation patterns.

use bwsl_lattice::HyperCubicGrid;

/// Every site occupied once.
pub fn uniform(num_sites: usize) -> Vec<f64> {
    vec![1.0; num_sites]
}

/// `1` on sites whose coordinates sum to an odd number, `0` elsewhere.
pub fn checkerboard(grid: &HyperCubicGrid) -> Vec<f64> {
    grid.sites()
        .map(|i| {
            let parity: i64 = grid.coordinates(i).iter().sum();
            (parity % 2) as f64
        })
        .collect()
}

/// Pseudo-random 0/1 occupations from a simple hash of the seed.
///
/// Same seed, same pattern.
pub fn hashed_occupations(num_sites: usize, seed: u64) -> Vec<u8> {
    (0..num_sites as u64)
        .map(|i| {
            let h = seed
                .wrapping_mul(6364136223846793005)
                .wrapping_add(i.wrapping_mul(1442695040888963407));
            (h >> 63) as u8
        })
        .collect()
}
