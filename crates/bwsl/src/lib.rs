//! BWSL: lattice geometry for Monte-Carlo simulations.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the BWSL sub-crates. For most users, adding `bwsl` as a single dependency
//! is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use bwsl::prelude::*;
//!
//! // A 4x4 periodic square lattice.
//! let lattice = Lattice::new(&SQUARE_LATTICE, &[4, 4], Boundaries::Closed).unwrap();
//! assert_eq!(lattice.num_sites(), 16);
//! assert_eq!(lattice.neighbors(0), &[4, 12, 1, 3]);
//!
//! // Opposite corners are nearest neighbours across the boundary.
//! assert!((lattice.distance(0, 15) - 2f64.sqrt()).abs() < 1e-12);
//!
//! // Structure factor of a half-filled checkerboard.
//! let occ: Vec<f64> = lattice
//!     .grid()
//!     .sites()
//!     .map(|i| lattice.grid().coordinates(i).iter().sum::<i64>().rem_euclid(2) as f64)
//!     .collect();
//! let sk = lattice.compute_sk(&occ, 1.0);
//! assert!((sk[0] - 0.25).abs() < 1e-12);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `bwsl-core` | Coordinate types, mixed-radix and pair indexing |
//! | [`lattice`] | `bwsl-lattice` | Bravais lattices, grids, lattices, tables |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Coordinate types and index arithmetic (`bwsl-core`).
pub use bwsl_core as types;

/// Lattice geometry (`bwsl-lattice`).
///
/// Provides [`lattice::BravaisLattice`], [`lattice::HyperCubicGrid`] and
/// [`lattice::Lattice`], plus configuration and table dumps.
pub use bwsl_lattice as lattice;

/// Common imports for typical BWSL usage.
///
/// ```rust
/// use bwsl::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use bwsl_core::{Coord, RealVec};

    // Geometry
    pub use bwsl_lattice::{
        Boundaries, BravaisKind, BravaisLattice, HyperCubicGrid, Lattice, CHAIN_LATTICE,
        CUBIC_LATTICE, SQUARE_LATTICE, TRIANGULAR_LATTICE,
    };

    // Configuration and errors
    pub use bwsl_lattice::{ConfigError, LatticeConfig, LatticeError};
}
