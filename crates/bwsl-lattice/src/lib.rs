//! Lattice geometry for the BWSL lattice library.
//!
//! This crate defines the [`BravaisLattice`] value (primitive vectors,
//! reciprocal basis and neighbour offsets) with its canonical constants, the
//! [`HyperCubicGrid`] index space with [`Boundaries`], and the precomputed
//! [`Lattice`] that answers distance, neighbour, momentum and structure
//! factor queries in O(1) per pair.
//!
//! # Types
//!
//! - [`BravaisLattice`]: infinite lattice; [`CHAIN_LATTICE`],
//!   [`SQUARE_LATTICE`], [`CUBIC_LATTICE`] and [`TRIANGULAR_LATTICE`] are
//!   shared immutable instances, also reachable by name via [`BravaisKind`]
//! - [`HyperCubicGrid`]: mixed-radix site indexing, boundary enforcement,
//!   pair indices and minimum-image jumps
//! - [`Lattice`]: a Bravais lattice realised on a grid
//!
//! Construction is fallible ([`LatticeError`], [`ConfigError`]); queries on
//! a built value panic on out-of-range indices.
//!
//! # Dumps
//!
//! [`Lattice::write_table`] streams any [`Table`] as comma-separated text
//! through a [`TableWriter`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod boundary;
pub mod bravais;
pub mod config;
pub mod error;
pub mod grid;
pub mod lattice;
pub mod table;

#[cfg(test)]
pub(crate) mod compliance;

pub use boundary::Boundaries;
pub use bravais::{
    BravaisKind, BravaisLattice, CHAIN_LATTICE, CUBIC_LATTICE, SQUARE_LATTICE, TRIANGULAR_LATTICE,
};
pub use config::{parse_size, ConfigError, LatticeConfig};
pub use error::LatticeError;
pub use grid::HyperCubicGrid;
pub use lattice::{Lattice, NeighborList};
pub use table::{Table, TableWriter};
