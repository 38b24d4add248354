//! Boundary conditions for finite grids.

use std::fmt;
use std::str::FromStr;

use crate::error::LatticeError;

/// How a finite grid treats coordinates that leave `[0, size)` on some axis.
///
/// # Examples
///
/// ```
/// use bwsl_lattice::{Boundaries, Lattice, SQUARE_LATTICE};
///
/// // Open: the corner has 2 neighbours, an interior site has 4.
/// let open = Lattice::new(&SQUARE_LATTICE, &[4, 4], Boundaries::Open).unwrap();
/// assert_eq!(open.coordination(0), 2);
/// assert_eq!(open.coordination(5), 4);
///
/// // Closed: every site has 4 neighbours (torus).
/// let closed = Lattice::new(&SQUARE_LATTICE, &[4, 4], Boundaries::Closed).unwrap();
/// assert_eq!(closed.coordination(0), 4);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Boundaries {
    /// Out-of-range coordinates are off the grid (fewer neighbours at edges,
    /// no momenta).
    Open,
    /// Out-of-range coordinates wrap to the opposite side (periodic).
    #[default]
    Closed,
}

impl Boundaries {
    /// `true` for [`Boundaries::Open`].
    pub fn is_open(self) -> bool {
        self == Self::Open
    }

    /// `true` for [`Boundaries::Closed`].
    pub fn is_closed(self) -> bool {
        self == Self::Closed
    }
}

impl fmt::Display for Boundaries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open => write!(f, "open"),
            Self::Closed => write!(f, "closed"),
        }
    }
}

impl FromStr for Boundaries {
    type Err = LatticeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "open" => Ok(Self::Open),
            "closed" | "periodic" => Ok(Self::Closed),
            _ => Err(LatticeError::UnknownName {
                what: "boundary condition",
                name: s.to_string(),
            }),
        }
    }
}
