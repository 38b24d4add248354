//! Error types for lattice construction.
//!
//! Only construction is fallible. Queries on a built grid or lattice treat
//! out-of-range indices and mismatched dimensionality as programming errors
//! and panic.

use std::fmt;

/// Errors arising from building a Bravais lattice, grid or lattice.
#[derive(Debug, Clone, PartialEq)]
pub enum LatticeError {
    /// A grid needs at least one axis.
    EmptyGrid,
    /// An axis has zero extent.
    ZeroExtent {
        /// Index of the offending axis.
        axis: usize,
    },
    /// The number of sites overflows the index or coordinate types.
    TooManySites {
        /// The requested per-axis extents.
        size: Vec<usize>,
    },
    /// Bravais lattice tables are inconsistent.
    InvalidBravais {
        /// What went wrong.
        reason: String,
    },
    /// The Bravais lattice and the grid disagree on dimensionality.
    DimensionMismatch {
        /// Dimensionality of the Bravais lattice.
        bravais: usize,
        /// Dimensionality of the grid.
        grid: usize,
    },
    /// A name did not match any known variant.
    UnknownName {
        /// What kind of name was being parsed.
        what: &'static str,
        /// The offending input.
        name: String,
    },
}

impl fmt::Display for LatticeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid => write!(f, "grid must have at least one dimension"),
            Self::ZeroExtent { axis } => write!(f, "axis {axis} has zero extent"),
            Self::TooManySites { size } => {
                write!(f, "grid of size {size:?} has too many sites")
            }
            Self::InvalidBravais { reason } => write!(f, "invalid bravais lattice: {reason}"),
            Self::DimensionMismatch { bravais, grid } => write!(
                f,
                "bravais lattice is {bravais}-dimensional but the grid is {grid}-dimensional"
            ),
            Self::UnknownName { what, name } => write!(f, "unknown {what} '{name}'"),
        }
    }
}

impl std::error::Error for LatticeError {}
