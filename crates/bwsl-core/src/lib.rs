//! Core types and index arithmetic for the BWSL lattice library.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! coordinate and real-vector types shared by every lattice component,
//! the mixed-radix conversion between coordinate tuples and linear site
//! indices, and the ordered pair-index bijection.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod coord;
pub mod index;
pub mod pairs;

pub use coord::{add_coords, dot, norm, sub_coords, Coord, RealVec};
pub use index::{array_to_index, checked_product, index_to_array};
pub use pairs::{checked_num_pairs, num_pairs, pair_from_index, pair_index};
