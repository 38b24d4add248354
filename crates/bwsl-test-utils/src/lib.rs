//! Test utilities for BWSL development.
//!
//! Provides brute-force reference implementations of the lattice geometry
//! ([`oracle`]) to check the precomputed tables against, and deterministic
//! occupation patterns ([`fixtures`]) for structure factor tests and
//! benchmarks.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;
pub mod oracle;

pub use fixtures::{checkerboard, hashed_occupations, uniform};
pub use oracle::{brute_force_distance, brute_force_neighbors, brute_force_sk};
