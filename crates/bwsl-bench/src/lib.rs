//! Benchmark profiles for the BWSL lattice library.
//!
//! Provides pre-built [`LatticeConfig`] profiles for benchmarking:
//!
//! - [`reference_profile`]: 32x32 periodic square lattice (1K sites)
//! - [`stress_profile`]: 16x16x16 periodic cubic lattice (4K sites)
//! - [`sample_pairs`]: deterministic site pairs via seed

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use bwsl_lattice::{BravaisKind, LatticeConfig};

/// Build a reference benchmark profile: 32x32 closed square lattice.
pub fn reference_profile() -> LatticeConfig {
    LatticeConfig::new(BravaisKind::Square, vec![32, 32])
}

/// Build a stress benchmark profile: 16x16x16 closed cubic lattice.
///
/// Four times the sites of [`reference_profile`] and a 27-image
/// minimum-image search per site.
pub fn stress_profile() -> LatticeConfig {
    LatticeConfig::new(BravaisKind::Cubic, vec![16, 16, 16])
}

/// Generate `n` deterministic `(a, b)` site pairs on a lattice of
/// `num_sites` sites using a simple hash of the seed.
pub fn sample_pairs(num_sites: usize, n: usize, seed: u64) -> Vec<(usize, usize)> {
    (0..n as u64)
        .map(|i| {
            let a = seed
                .wrapping_mul(6364136223846793005)
                .wrapping_add(i.wrapping_mul(1442695040888963407));
            let b = a.wrapping_mul(2862933555777941757).wrapping_add(3037000493);
            (
                (a >> 33) as usize % num_sites,
                (b >> 33) as usize % num_sites,
            )
        })
        .collect()
}
